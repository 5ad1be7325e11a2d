//! Integration test utilities for the wedding RSVP server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, backed by the in-memory store unless `TEST_DATABASE_URL`
//! points at PostgreSQL.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
