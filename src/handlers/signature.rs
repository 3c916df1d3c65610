//! Signature endpoint handlers.
//!
//! One route, `/generate-shopee-auth`, bound either to `GET` with query
//! parameters or to `POST` with a JSON body depending on the configured
//! transport. Both adapters hand the same [`AuthRequest`] to the signer.

use crate::{
    error::SignatureError,
    models::{AuthRequest, AuthResponse, ErrorResponse, SigningAuditEvent, SigningOutcome},
    services::ShopeeSigner,
    utils::http::{extract_client_ip, extract_request_id, extract_user_agent},
};
use actix_web::{
    Error, HttpRequest, HttpResponse, Result,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    http::{Method, header},
    web,
};
use paperclip::actix::api_v2_operation;

pub const SIGNATURE_ROUTE: &str = "/generate-shopee-auth";

/// Auth header from query parameters
///
/// `payloadString` must be URL-encoded by the caller. The decoded value is
/// what gets signed and echoed.
#[api_v2_operation(
    summary = "Generate Shopee Auth Header (query)",
    description = "Computes the SHA256 credential header for a timestamp and payload supplied as the `timestamp` and `payloadString` query parameters.",
    tags("Signature"),
    responses(
        (status = 200, description = "Auth header computed", body = AuthResponse),
        (status = 400, description = "Bad Request - Missing timestamp or payloadString", body = ErrorResponse),
        (status = 500, description = "Internal Server Error - Hash computation failed", body = ErrorResponse)
    )
)]
pub async fn generate_auth_from_query(
    req: HttpRequest,
    signer: web::Data<ShopeeSigner>,
    query: web::Query<AuthRequest>,
) -> Result<web::Json<AuthResponse>, Error> {
    respond(&req, &signer, query.into_inner())
}

/// Auth header from a JSON body
#[api_v2_operation(
    summary = "Generate Shopee Auth Header (JSON)",
    description = "Computes the SHA256 credential header for a JSON body of the form {\"timestamp\": str, \"payloadString\": str}.",
    tags("Signature"),
    responses(
        (status = 200, description = "Auth header computed", body = AuthResponse),
        (status = 400, description = "Bad Request - Missing fields or malformed body", body = ErrorResponse),
        (status = 500, description = "Internal Server Error - Hash computation failed", body = ErrorResponse)
    )
)]
pub async fn generate_auth_from_json(
    req: HttpRequest,
    signer: web::Data<ShopeeSigner>,
    body: web::Json<AuthRequest>,
) -> Result<web::Json<AuthResponse>, Error> {
    respond(&req, &signer, body.into_inner())
}

fn respond(
    req: &HttpRequest,
    signer: &ShopeeSigner,
    request: AuthRequest,
) -> Result<web::Json<AuthResponse>, Error> {
    let payload_len = request.payload_string.as_ref().map(String::len);
    let audit = |outcome: SigningOutcome, reason: Option<String>| {
        SigningAuditEvent::new(
            outcome,
            signer.app_id().to_string(),
            extract_client_ip(req),
            req.method().to_string(),
            req.path().to_string(),
        )
        .with_user_agent(extract_user_agent(req))
        .with_request_id(extract_request_id(req))
        .with_payload_len(payload_len)
        .with_reason(reason)
    };

    match signer.sign(request) {
        Ok(response) => {
            audit(SigningOutcome::Issued, None).log();
            Ok(web::Json(response))
        }
        Err(err) => {
            let outcome = match err {
                SignatureError::MissingField(_) => SigningOutcome::Rejected,
                SignatureError::HashComputation(_) => SigningOutcome::Failed,
            };
            audit(outcome, Some(err.to_string())).log();
            Err(err.into())
        }
    }
}

/// Renders JSON body extraction failures as an [`ErrorResponse`]
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let body = ErrorResponse::new(format!("Invalid JSON body: {err}"), "invalid_request");
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Renders query string extraction failures as an [`ErrorResponse`]
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let body = ErrorResponse::new(
        format!("Invalid query parameters: {err}"),
        "invalid_request",
    );
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// JSON `405` for methods the active transport does not route
pub fn method_not_allowed(allowed: &Method) -> HttpResponse {
    let body = ErrorResponse::new(
        format!("Method not allowed, use {allowed}"),
        "method_not_allowed",
    );
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, allowed.as_str()))
        .json(body)
}
