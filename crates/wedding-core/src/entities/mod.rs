//! Domain entities - core business objects

mod comment;
mod page_view;
mod rsvp;

pub use comment::{
    Comment, CommentThread, NewComment, NewReply, Reply, MAX_AUTHOR_NAME_LENGTH,
    MAX_MESSAGE_LENGTH,
};
pub use page_view::{NewPageView, PageView};
pub use rsvp::{AdditionalGuest, NewRsvpResponse, RsvpResponse, MAX_PARTY_SIZE, MIN_PARTY_SIZE};
