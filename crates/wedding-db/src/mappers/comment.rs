//! Comment and Reply entity <-> model mapper

use wedding_core::entities::{Comment, Reply};

use crate::models::{CommentModel, ReplyModel};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            name: model.name,
            message: model.message,
            likes: model.likes,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}

/// Convert ReplyModel to Reply entity
impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: model.id,
            comment_id: model.comment_id,
            name: model.name,
            message: model.message,
            likes: model.likes,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}
