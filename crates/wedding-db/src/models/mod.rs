//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod page_view;
mod rsvp;

pub use comment::{CommentModel, ReplyModel};
pub use page_view::PageViewModel;
pub use rsvp::RsvpModel;
