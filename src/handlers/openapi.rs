//! OpenAPI specification generation and app factory.

use crate::{
    config::{SignerConfig, Transport},
    handlers::{
        SIGNATURE_ROUTE, generate_auth_from_json, generate_auth_from_query, health,
        json_error_handler, method_not_allowed, query_error_handler, version,
    },
    middleware::RequestIdMiddleware,
    services::ShopeeSigner,
};
use actix_web::{App, http::Method};
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI specification served at `/api/spec/v2`
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Shopee Auth Signer".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Computes Shopee API auth headers on behalf of clients that cannot hold the secret key.\n\n\
                ## Signature calculation\n\
                1. Concatenate `app_id + timestamp + payloadString + secret_key` with no delimiters\n\
                2. Hash the UTF-8 bytes with SHA-256\n\
                3. Encode the digest as lowercase hexadecimal\n\
                \n\
                The header is returned as `SHA256Credential={app_id},Timestamp={timestamp},Signature={signature}` \
                (or the spaced variant when `SHOPEE_AUTH_HEADER_STYLE=spaced`).\n\
                \n\
                ## Transport\n\
                Exactly one binding of `/generate-shopee-auth` is active, selected by `SIGNER_TRANSPORT`:\n\
                - `query`: `GET` with `timestamp` and URL-encoded `payloadString` query parameters\n\
                - `json`: `POST` with a `{\"timestamp\", \"payloadString\"}` JSON body\n\
                \n\
                Errors are returned as `{\"error\": str, \"kind\": str}`."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application for the given signer configuration
///
/// The signer is built once here and shared by every worker. Only the
/// configured transport's method is routed on the signature path; any other
/// method gets a JSON `405`.
pub fn create_app(
    config: SignerConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let signer = ShopeeSigner::new(&config);

    let (signature_resource, allowed) = match config.transport {
        Transport::Query => (
            web::resource(SIGNATURE_ROUTE).route(web::get().to(generate_auth_from_query)),
            Method::GET,
        ),
        Transport::Json => (
            web::resource(SIGNATURE_ROUTE).route(web::post().to(generate_auth_from_json)),
            Method::POST,
        ),
    };
    let signature_resource = signature_resource.default_service(actix_web::web::to(move || {
        std::future::ready(method_not_allowed(&allowed))
    }));

    App::new()
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(signer))
        .app_data(actix_web::web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(actix_web::web::QueryConfig::default().error_handler(query_error_handler))
        .service(signature_resource)
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
