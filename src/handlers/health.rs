//! Health check endpoint handler.

use crate::models::HealthResponse;
use actix_web::web;
use paperclip::actix::api_v2_operation;

/// Liveness probe for load balancers and orchestrators
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the signer in JSON format.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse::healthy())
}
