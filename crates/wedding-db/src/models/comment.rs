//! Comment and reply database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub likes: i32,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Database model for comment_replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: Uuid,
    pub comment_id: Uuid,
    pub name: String,
    pub message: String,
    pub likes: i32,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
