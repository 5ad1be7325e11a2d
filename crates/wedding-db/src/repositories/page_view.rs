//! PostgreSQL implementation of PageViewRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wedding_core::entities::{NewPageView, PageView};
use wedding_core::traits::{PageViewRepository, RepoResult};

use crate::models::PageViewModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PageViewRepository
#[derive(Clone)]
pub struct PgPageViewRepository {
    pool: PgPool,
}

impl PgPageViewRepository {
    /// Create a new PgPageViewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageViewRepository for PgPageViewRepository {
    #[instrument(skip(self, view), fields(page = %view.page))]
    async fn insert(&self, view: &NewPageView) -> RepoResult<PageView> {
        let model = sqlx::query_as::<_, PageViewModel>(
            r#"
            INSERT INTO page_views (id, page, user_session_id, referrer, browser, device)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, page, user_session_id, referrer, browser, device, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&view.page)
        .bind(&view.user_session_id)
        .bind(&view.referrer)
        .bind(&view.browser)
        .bind(&view.device)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(PageView::from(model))
    }

    #[instrument(skip(self))]
    async fn find_in_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<PageView>> {
        let results = sqlx::query_as::<_, PageViewModel>(
            r#"
            SELECT id, page, user_session_id, referrer, browser, device, created_at
            FROM page_views
            WHERE ($1::TIMESTAMPTZ IS NULL OR created_at >= $1)
              AND ($2::TIMESTAMPTZ IS NULL OR created_at <= $2)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PageView::from).collect())
    }
}
