//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in wedding-core.
//! Each repository handles database operations for one table.

mod comment;
mod error;
mod health;
mod page_view;
mod reply;
mod rsvp;

pub use comment::PgCommentRepository;
pub use health::PgStoreHealth;
pub use page_view::PgPageViewRepository;
pub use reply::PgReplyRepository;
pub use rsvp::PgRsvpRepository;
