//! Audit logging for issued and rejected signatures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Outcome of a signing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningOutcome {
    Issued,
    Rejected,
    Failed,
}

/// Structured audit entry for one signing request
///
/// Carries the App ID and request metadata only. The secret key, the
/// signature factor and the payload text never appear here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningAuditEvent {
    pub outcome: SigningOutcome,
    pub timestamp: DateTime<Utc>,
    pub app_id: String,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub method: String,
    pub endpoint: String,
    pub request_id: Option<String>,
    pub payload_len: Option<usize>,
    pub reason: Option<String>,
}

impl SigningAuditEvent {
    pub fn new(
        outcome: SigningOutcome,
        app_id: String,
        ip_address: String,
        method: String,
        endpoint: String,
    ) -> Self {
        Self {
            outcome,
            timestamp: Utc::now(),
            app_id,
            ip_address,
            user_agent: None,
            method,
            endpoint,
            request_id: None,
            payload_len: None,
            reason: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn with_payload_len(mut self, payload_len: Option<usize>) -> Self {
        self.payload_len = payload_len;
        self
    }

    pub fn with_reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    /// Emit the event on the `signing_audit` target
    pub fn log(&self) {
        match self.outcome {
            SigningOutcome::Issued => info!(
                target: "signing_audit",
                outcome = ?self.outcome,
                timestamp = %self.timestamp,
                app_id = %self.app_id,
                ip_address = %self.ip_address,
                user_agent = ?self.user_agent,
                method = %self.method,
                endpoint = %self.endpoint,
                request_id = ?self.request_id,
                payload_len = ?self.payload_len,
                "Auth header issued"
            ),
            SigningOutcome::Rejected | SigningOutcome::Failed => warn!(
                target: "signing_audit",
                outcome = ?self.outcome,
                timestamp = %self.timestamp,
                app_id = %self.app_id,
                ip_address = %self.ip_address,
                user_agent = ?self.user_agent,
                method = %self.method,
                endpoint = %self.endpoint,
                request_id = ?self.request_id,
                payload_len = ?self.payload_len,
                reason = ?self.reason,
                "Auth header not issued"
            ),
        }
    }
}
