//! PageView entity <-> model mapper

use wedding_core::entities::PageView;

use crate::models::PageViewModel;

/// Convert PageViewModel to PageView entity
impl From<PageViewModel> for PageView {
    fn from(model: PageViewModel) -> Self {
        PageView {
            id: model.id,
            page: model.page,
            user_session_id: model.user_session_id,
            referrer: model.referrer,
            browser: model.browser,
            device: model.device,
            created_at: model.created_at,
        }
    }
}
