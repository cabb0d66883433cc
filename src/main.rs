use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, info, warn};

use rust_madrasa_admin::config::AppConfig;
use rust_madrasa_admin::models::AppStartTime;
use rust_madrasa_admin::routes;
use rust_madrasa_admin::runtime::lifetime::{logging, shutdown, startup};
use rust_madrasa_admin::utils::{json_error_handler, query_error_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_panic!();

    let started = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    AppConfig::init().map_err(|e| {
        std::io::Error::other(format!("Failed to initialize configuration: {e}"))
    })?;
    let config = AppConfig::get();
    let _log_guard = logging::init_tracing(config);

    info!(
        "{} v{} starting in {} mode",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let context = startup::prepare_server_startup()
        .await
        .map_err(|e| std::io::Error::other(e.format_simple()))?;
    let storage = web::Data::new(context.storage);
    let cache = web::Data::new(context.cache);
    let settings = web::Data::new(config.service_settings());
    let start_time = web::Data::new(started.clone());

    debug!(
        "Startup finished in {} ms",
        (chrono::Utc::now() - started.start_datetime).num_milliseconds()
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(config))
            .wrap(Compress::default())
            .wrap(response_headers(config))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
            .app_data(storage.clone())
            .app_data(cache.clone())
            .app_data(settings.clone())
            .app_data(start_time.clone())
            .configure(routes::configure_entity_routes_all)
            .configure(routes::configure_system_routes)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    warn!("Serving with {} workers", config.server.workers);

    // 配置了 Unix 套接字时优先使用
    #[cfg(unix)]
    let server = match config.unix_socket_path() {
        Some(socket_path) => {
            warn!("Listening on Unix socket {}", socket_path);
            if std::path::Path::new(socket_path).exists() {
                std::fs::remove_file(socket_path)?;
            }
            server.bind_uds(socket_path)?
        }
        None => {
            let address = config.server_bind_address();
            warn!("Listening on http://{}", address);
            server.bind(address)?
        }
    };
    #[cfg(not(unix))]
    let server = {
        let address = config.server_bind_address();
        warn!("Listening on http://{}", address);
        server.bind(address)?
    };
    let server = server.run();

    tokio::select! {
        res = server => res?,
        _ = shutdown::listen_for_shutdown() => warn!("Shutdown signal received, server stopped"),
    }
    Ok(())
}

fn cors(config: &AppConfig) -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.cors.max_age)
}

// 禁止中间层缓存响应
fn response_headers(config: &AppConfig) -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Connection", "keep-alive"))
        .add((
            "Keep-Alive",
            format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
        ))
        .add(("Cache-Control", "no-cache, no-store, must-revalidate"))
}
