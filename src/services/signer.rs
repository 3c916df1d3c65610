//! Shopee auth header computation.
//!
//! The signature is the lowercase hex SHA-256 digest of
//! `app_id + timestamp + payload + secret_key`, concatenated without
//! delimiters. The payload is treated as opaque text and is never parsed.

use crate::{
    config::{HeaderStyle, SignerConfig},
    error::SignatureError,
    models::{AuthRequest, AuthResponse},
};
use sha2::{Digest, Sha256};
use std::fmt;

/// Lowercase hex SHA-256 digest of the UTF-8 bytes of `input`
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Render the credential string for an already computed signature
pub fn format_auth_header(
    style: HeaderStyle,
    app_id: &str,
    timestamp: &str,
    signature: &str,
) -> String {
    match style {
        HeaderStyle::Compact => {
            format!("SHA256Credential={app_id},Timestamp={timestamp},Signature={signature}")
        }
        HeaderStyle::Spaced => {
            format!("SHA256 Credential={app_id}, Timestamp={timestamp}, Signature={signature}")
        }
    }
}

/// Signs requests with a fixed App ID and Secret Key
///
/// Immutable after construction, so a single instance is shared by every
/// worker.
#[derive(Clone)]
pub struct ShopeeSigner {
    app_id: String,
    secret_key: String,
    header_style: HeaderStyle,
}

impl fmt::Debug for ShopeeSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopeeSigner")
            .field("app_id", &self.app_id)
            .field("header_style", &self.header_style)
            .finish_non_exhaustive()
    }
}

impl ShopeeSigner {
    pub fn new(config: &SignerConfig) -> Self {
        Self {
            app_id: config.app_id.clone(),
            secret_key: config.secret_key.clone(),
            header_style: config.header_style,
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn header_style(&self) -> HeaderStyle {
        self.header_style
    }

    /// The exact string that gets hashed
    pub fn signature_factor(&self, timestamp: &str, payload: &str) -> String {
        let mut factor = String::with_capacity(
            self.app_id.len() + timestamp.len() + payload.len() + self.secret_key.len(),
        );
        factor.push_str(&self.app_id);
        factor.push_str(timestamp);
        factor.push_str(payload);
        factor.push_str(&self.secret_key);
        factor
    }

    pub fn compute_signature(&self, timestamp: &str, payload: &str) -> String {
        sha256_hex(&self.signature_factor(timestamp, payload))
    }

    /// Compute the auth header for a timestamp and payload
    ///
    /// Both inputs must be non-empty. Whitespace is significant and is
    /// signed as given.
    pub fn compute_auth_header(
        &self,
        timestamp: &str,
        payload: &str,
    ) -> Result<String, SignatureError> {
        if timestamp.is_empty() {
            return Err(SignatureError::MissingField("timestamp"));
        }
        if payload.is_empty() {
            return Err(SignatureError::MissingField("payloadString"));
        }

        let signature = self.compute_signature(timestamp, payload);
        Ok(format_auth_header(
            self.header_style,
            &self.app_id,
            timestamp,
            &signature,
        ))
    }

    /// Sign a request, echoing its timestamp and payload back unchanged
    pub fn sign(&self, request: AuthRequest) -> Result<AuthResponse, SignatureError> {
        // Absent and empty are the same to `compute_auth_header`.
        let timestamp = request.timestamp.unwrap_or_default();
        let payload = request.payload_string.unwrap_or_default();

        let shopee_auth_header = self.compute_auth_header(&timestamp, &payload)?;

        Ok(AuthResponse {
            shopee_auth_header,
            shopee_payload: payload,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_ID: &str = "16345040007";
    const SECRET_KEY: &str = "STB252ZA5HVC4MJJ5ZSYZBXY423WIYHU";
    const GOLDEN_SIGNATURE: &str =
        "871995914c092fd8291c46a3aa5895dbfcfe895425b1e062bac206851ab8565c";

    fn signer(style: HeaderStyle) -> ShopeeSigner {
        ShopeeSigner::new(&SignerConfig::new(APP_ID, SECRET_KEY).with_header_style(style))
    }

    #[test]
    fn test_signature_factor_is_plain_concatenation() {
        let factor = signer(HeaderStyle::Compact).signature_factor("1700000000", "{}");
        assert_eq!(
            factor,
            "163450400071700000000{}STB252ZA5HVC4MJJ5ZSYZBXY423WIYHU"
        );
    }

    #[test]
    fn test_golden_signature() {
        let signature = signer(HeaderStyle::Compact).compute_signature("1700000000", "{}");
        assert_eq!(signature, GOLDEN_SIGNATURE);
    }

    #[test]
    fn test_sha256_hex_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_compact_header_format() {
        let header = signer(HeaderStyle::Compact)
            .compute_auth_header("1700000000", "{}")
            .unwrap();
        assert_eq!(
            header,
            format!("SHA256Credential={APP_ID},Timestamp=1700000000,Signature={GOLDEN_SIGNATURE}")
        );
    }

    #[test]
    fn test_spaced_header_format() {
        let header = signer(HeaderStyle::Spaced)
            .compute_auth_header("1700000000", "{}")
            .unwrap();
        assert_eq!(
            header,
            format!(
                "SHA256 Credential={APP_ID}, Timestamp=1700000000, Signature={GOLDEN_SIGNATURE}"
            )
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let signer = signer(HeaderStyle::Compact);
        let first = signer.compute_auth_header("1700000123", r#"{"item_id":42}"#);
        let second = signer.compute_auth_header("1700000123", r#"{"item_id":42}"#);
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn test_single_character_change_alters_signature() {
        let signer = signer(HeaderStyle::Compact);
        let a = signer.compute_signature("1700000000", r#"{"a":1}"#);
        let b = signer.compute_signature("1700000000", r#"{"a":2}"#);
        assert_ne!(a, b);
        assert_eq!(
            a,
            "737f9651983a5beb80b2fc4739f52d535597ec4c48f1e6c524409854cf15faf4"
        );
    }

    #[test]
    fn test_payload_is_not_parsed_as_json() {
        let signer = signer(HeaderStyle::Compact);
        let compact = signer.compute_signature("1", r#"{"a":1}"#);
        let spaced = signer.compute_signature("1", r#"{ "a": 1 }"#);
        assert_ne!(compact, spaced);
    }

    #[test]
    fn test_sign_echoes_input_verbatim() {
        let response = signer(HeaderStyle::Compact)
            .sign(AuthRequest::new(" 1700000000 ", "  {\"x\": \"ü\"}\n"))
            .unwrap();
        assert_eq!(response.timestamp, " 1700000000 ");
        assert_eq!(response.shopee_payload, "  {\"x\": \"ü\"}\n");
    }

    #[test]
    fn test_missing_timestamp_is_rejected() {
        let signer = signer(HeaderStyle::Compact);
        for timestamp in [None, Some(String::new())] {
            let err = signer
                .sign(AuthRequest {
                    timestamp,
                    payload_string: Some("{}".to_string()),
                })
                .unwrap_err();
            assert!(matches!(err, SignatureError::MissingField("timestamp")));
        }
    }

    #[test]
    fn test_missing_payload_is_rejected() {
        let signer = signer(HeaderStyle::Compact);
        for payload_string in [None, Some(String::new())] {
            let err = signer
                .sign(AuthRequest {
                    timestamp: Some("1700000000".to_string()),
                    payload_string,
                })
                .unwrap_err();
            assert!(matches!(err, SignatureError::MissingField("payloadString")));
        }
    }

    #[test]
    fn test_sign_and_compute_agree_on_missing_fields() {
        let signer = signer(HeaderStyle::Compact);
        let from_request = signer.sign(AuthRequest::default()).unwrap_err();
        let from_strings = signer.compute_auth_header("", "").unwrap_err();
        assert!(matches!(from_request, SignatureError::MissingField("timestamp")));
        assert!(matches!(from_strings, SignatureError::MissingField("timestamp")));
    }

    #[test]
    fn test_debug_omits_secret() {
        let rendered = format!("{:?}", signer(HeaderStyle::Compact));
        assert!(!rendered.contains(SECRET_KEY));
    }
}
