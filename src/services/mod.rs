//! Business logic and service layer modules.

pub mod signer;

pub use signer::*;
