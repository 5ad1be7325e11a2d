//! Entity <-> Model mappers
//!
//! Conversions between database models and domain entities.

mod comment;
mod page_view;
mod rsvp;
