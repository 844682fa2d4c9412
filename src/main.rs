use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpServer};
use blog_backend::config::{AppConfig, StoreBackend};
use blog_backend::database;
use blog_backend::middleware::error_handler::handle_error;
use blog_backend::middleware::not_found::not_found;
use blog_backend::router::index::routes;
use blog_backend::state::AppState;
use env_logger::Env;
use log::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let (state, mongo) = match config.backend {
        StoreBackend::Mongo => {
            let mongo = database::connect_to_mongo(&config.mongo)
                .await
                .map_err(std::io::Error::other)?;
            (AppState::with_mongo(&mongo), Some(mongo))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store; data is lost on shutdown");
            (AppState::in_memory(), None)
        }
    };

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| state.configure(cfg))
            .configure(routes)
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::NOT_FOUND, not_found)
                    .default_handler(handle_error),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    // Reached once the server has shut down
    info!("Server has stopped");

    if let Some(mongo) = mongo {
        mongo.shutdown().await;
    }

    Ok(())
}
