//! Value objects - immutable types that represent domain concepts

mod device_class;
mod rsvp_filter;

pub use device_class::DeviceClass;
pub use rsvp_filter::{AttendanceFilter, ParseFilterError, RsvpSortBy, SortDirection};
