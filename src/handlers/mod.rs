//! HTTP request handlers and the app factory.

pub mod health;
pub mod openapi;
pub mod signature;
pub mod version;

pub use health::*;
pub use openapi::*;
pub use signature::*;
pub use version::*;
