//! Guest wall entities - comments and their replies

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum length of an author display name
pub const MAX_AUTHOR_NAME_LENGTH: usize = 100;

/// Maximum length of a comment or reply body
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Comment on the guest wall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub likes: i32,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Check whether `guest_token` owns this comment
    #[inline]
    pub fn is_owned_by(&self, guest_token: &str) -> bool {
        self.user_id.as_deref() == Some(guest_token)
    }
}

/// Reply attached to a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: Uuid,
    pub comment_id: Uuid,
    pub name: String,
    pub message: String,
    pub likes: i32,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    /// Check whether `guest_token` owns this reply
    #[inline]
    pub fn is_owned_by(&self, guest_token: &str) -> bool {
        self.user_id.as_deref() == Some(guest_token)
    }
}

/// A comment together with its replies, oldest reply first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<Reply>,
}

/// Comment as posted, before the store assigns identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub name: String,
    pub message: String,
    pub user_id: Option<String>,
}

impl NewComment {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            user_id: None,
        }
    }

    /// Attach the posting guest's token
    pub fn with_owner(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Trim and check name and message
    pub fn validate(mut self) -> Result<Self, DomainError> {
        (self.name, self.message) = validate_post(&self.name, &self.message)?;
        Ok(self)
    }

    /// Materialize into a stored comment with zero likes
    pub fn into_comment(self, id: Uuid, created_at: DateTime<Utc>) -> Comment {
        Comment {
            id,
            name: self.name,
            message: self.message,
            likes: 0,
            user_id: self.user_id,
            created_at,
        }
    }
}

/// Reply as posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub comment_id: Uuid,
    pub name: String,
    pub message: String,
    pub user_id: Option<String>,
}

impl NewReply {
    pub fn new(comment_id: Uuid, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            comment_id,
            name: name.into(),
            message: message.into(),
            user_id: None,
        }
    }

    /// Attach the posting guest's token
    pub fn with_owner(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Trim and check name and message
    pub fn validate(mut self) -> Result<Self, DomainError> {
        (self.name, self.message) = validate_post(&self.name, &self.message)?;
        Ok(self)
    }

    /// Materialize into a stored reply with zero likes
    pub fn into_reply(self, id: Uuid, created_at: DateTime<Utc>) -> Reply {
        Reply {
            id,
            comment_id: self.comment_id,
            name: self.name,
            message: self.message,
            likes: 0,
            user_id: self.user_id,
            created_at,
        }
    }
}

fn validate_post(name: &str, message: &str) -> Result<(String, String), DomainError> {
    let name = name.trim();
    let message = message.trim();

    if name.is_empty() {
        return Err(DomainError::MissingField("name"));
    }
    if message.is_empty() {
        return Err(DomainError::MissingField("message"));
    }
    if name.chars().count() > MAX_AUTHOR_NAME_LENGTH {
        return Err(DomainError::ContentTooLong {
            field: "name",
            max: MAX_AUTHOR_NAME_LENGTH,
        });
    }
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(DomainError::ContentTooLong {
            field: "message",
            max: MAX_MESSAGE_LENGTH,
        });
    }

    Ok((name.to_string(), message.to_string()))
}
