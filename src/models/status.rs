//! Liveness and build information bodies.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    /// The signer holds no external connections, so a running process is healthy
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Build metadata of the running binary
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

impl VersionResponse {
    /// Metadata captured by `build.rs`
    ///
    /// `VERGEN_GIT_SHA` is absent when the crate is built outside a git
    /// checkout and is reported as `unknown`.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("VERGEN_GIT_SHA").unwrap_or("unknown").to_string(),
            build_time: option_env!("VERGEN_BUILD_TIMESTAMP")
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}
