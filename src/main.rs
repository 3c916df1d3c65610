use actix_web::HttpServer;
use shopee_auth_signer::{LogFormat, ServerConfig, SignerConfig, create_app};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let server_config = ServerConfig::from_env();
    init_tracing(server_config.log_format);

    let signer_config = SignerConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid signer configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    tracing::info!(
        bind_address = %server_config.bind_address,
        app_id = %signer_config.app_id,
        header_style = ?signer_config.header_style,
        transport = ?signer_config.transport,
        "Starting Shopee auth signer"
    );

    HttpServer::new(move || create_app(signer_config.clone()))
        .bind(&server_config.bind_address)?
        .run()
        .await
}
