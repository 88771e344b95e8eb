use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;

mod api;
mod auth;
mod backend;
mod config;
mod docs;
mod error;
mod model;
mod models;
mod nav;
mod report;
mod routes;

use auth::session::{IdentityContext, MemorySessionStore};
use backend::{Backend, rest::RestBackend};
use config::Config;
use routes::RateLimits;

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/health")]
async fn health() -> impl Responder {
    "OK"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily("logs", "portal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(backend = %config.backend_url, "Portal starting...");

    let backend: Arc<dyn Backend> = Arc::new(RestBackend::new(&config.backend_url)?);
    let backend = Data::from(backend);

    let sessions = Data::new(IdentityContext::new(Arc::new(MemorySessionStore::new(
        config.session_capacity,
        Duration::from_secs(config.session_ttl_secs),
    ))));

    let limits = RateLimits::from_config(&config);
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(backend.clone())
            .app_data(sessions.clone())
            .app_data(Data::new(config.clone()))
            .service(health)
            .configure(|cfg| routes::configure(cfg, &config, &limits))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
