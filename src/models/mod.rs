//! Data models for the signer API.
//!
//! Request/response bodies for the signature route, the supporting
//! endpoints, and the structured audit event.

pub mod audit;
pub mod signing;
pub mod status;

pub use audit::*;
pub use signing::*;
pub use status::*;
