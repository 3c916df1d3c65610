//! Configuration structures and loading utilities.
//!
//! Every value is read from the environment once at start-up and then
//! handed to the app factory.

pub mod server;
pub mod signer;

pub use server::*;
pub use signer::*;
