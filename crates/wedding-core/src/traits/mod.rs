//! Ports - repository traits and the clock abstraction

mod clock;
mod repositories;

pub use clock::{Clock, ManualClock, SystemClock};
pub use repositories::{
    CommentRepository, PageViewRepository, ReplyRepository, RepoResult, RsvpQuery,
    RsvpRepository, StoreHealth,
};
