use actix_web::{web, App, HttpServer};
use pixelgate::{logger, server, Config, GatewayClient, GatewayConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv_result = dotenv::dotenv();

    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    match dotenv_result {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = Config::from_env();
    let port = config.port.unwrap_or(8080);

    logger::log_startup_info("pixelgate", env!("CARGO_PKG_VERSION"), port);
    logger::log_config_info(&config);

    let gateway_config = config.gateway.clone().unwrap_or_else(GatewayConfig::from_env);
    if gateway_config.api_key.is_none() && gateway_config.backup_api_key.is_none() {
        log::warn!(
            "⚠️  AI_GATEWAY_API_KEY is not set; every request will fail until a key is configured"
        );
    }

    let client = web::Data::new(GatewayClient::new(gateway_config));

    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .wrap(server::cors_headers())
            .configure(server::routes)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
