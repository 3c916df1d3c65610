//! Version information endpoint handler.

use crate::models::VersionResponse;
use actix_web::web;
use paperclip::actix::api_v2_operation;

#[api_v2_operation(
    summary = "Version Information Endpoint",
    description = "Returns the current version, commit hash, and build time.",
    tags("Version"),
    responses(
        (status = 200, description = "Successful response", body = VersionResponse)
    )
)]
pub async fn version() -> web::Json<VersionResponse> {
    web::Json(VersionResponse::current())
}
