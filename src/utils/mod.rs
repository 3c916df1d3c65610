//! Utility functions and helper modules.

pub mod http;

pub use http::*;
