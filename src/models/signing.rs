//! Request and response bodies of the signature route.

use paperclip::actix::Apiv2Schema;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{IgnoredAny, MapAccess, Visitor},
};
use std::fmt;

/// Caller input for one auth header computation
///
/// Used both as the query string (GET) and as the JSON body (POST). Fields
/// are optional here so that absence is reported as `missing_field` rather
/// than as an extractor failure. A repeated key keeps its first value and
/// unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    /// Caller-supplied timestamp, signed and echoed verbatim
    pub timestamp: Option<String>,
    /// Opaque request payload, signed and echoed verbatim
    pub payload_string: Option<String>,
}

impl AuthRequest {
    pub fn new(timestamp: impl Into<String>, payload_string: impl Into<String>) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            payload_string: Some(payload_string.into()),
        }
    }
}

impl<'de> Deserialize<'de> for AuthRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AuthRequestVisitor)
    }
}

struct AuthRequestVisitor;

impl<'de> Visitor<'de> for AuthRequestVisitor {
    type Value = AuthRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with string `timestamp` and `payloadString` fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = AuthRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            let slot = match key.as_str() {
                "timestamp" => &mut request.timestamp,
                "payloadString" => &mut request.payload_string,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };

            let value = map.next_value::<Option<String>>()?;
            if slot.is_none() {
                *slot = value;
            }
        }

        Ok(request)
    }
}

/// Successful signature response
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub shopee_auth_header: String,
    pub shopee_payload: String,
    pub timestamp: String,
}

/// JSON body returned for every error
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind: kind.into(),
        }
    }
}
