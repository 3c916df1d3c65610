//! Shopee Auth Signer - computes Shopee API auth headers server-side
//!
//! Clients that cannot safely hold the platform secret key send a timestamp
//! and a payload string; the service returns
//! `SHA256Credential={app_id},Timestamp={timestamp},Signature={signature}`
//! where the signature is `hex(sha256(app_id + timestamp + payload + secret_key))`.
//!
//! ## Architecture
//!
//! - `config/` - Signer and server configuration loaded from the environment
//! - `error` - Signing and configuration error types
//! - `models/` - Request/response bodies and the audit event
//! - `services/` - The signer itself
//! - `handlers/` - HTTP handlers and the app factory
//! - `middleware/` - Request id and request logging
//! - `utils/` - Request metadata helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use shopee_auth_signer::{create_app, SignerConfig};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = SignerConfig::from_env().expect("signer configuration");
//!     let _app = create_app(config);
//!     // Hand the factory to an HttpServer
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{HeaderStyle, LogFormat, ServerConfig, SignerConfig, Transport};
pub use error::{ConfigError, SignatureError};
pub use handlers::{
    SIGNATURE_ROUTE, create_app, create_openapi_spec, generate_auth_from_json,
    generate_auth_from_query, health, version,
};
pub use middleware::RequestIdMiddleware;
pub use models::{
    AuthRequest, AuthResponse, ErrorResponse, HealthResponse, SigningAuditEvent, SigningOutcome,
    VersionResponse,
};
pub use services::{ShopeeSigner, format_auth_header, sha256_hex};
