//! Custom middleware for cross-cutting request concerns.

pub mod request_id;

pub use request_id::*;
