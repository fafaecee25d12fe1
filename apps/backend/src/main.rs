use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use backend::adapters::{CachedSource, JsonProgressStore, PokeApiSource};
use backend::config::{GameConfig, UpstreamConfig};
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::services::GameFlow;
use backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Statclash Backend on http://{}:{}", host, port);

    let game_config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid game configuration: {e}");
            std::process::exit(1);
        }
    };
    let upstream_config = match UpstreamConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid upstream configuration: {e}");
            std::process::exit(1);
        }
    };

    let pokeapi = match PokeApiSource::new(&upstream_config) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            eprintln!("❌ Failed to build PokeAPI client: {e}");
            std::process::exit(1);
        }
    };
    let source = Arc::new(CachedSource::new(
        pokeapi,
        upstream_config.cache_ttl,
        upstream_config.cache_capacity,
    ));

    let store = match JsonProgressStore::from_env() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("❌ Invalid progress store configuration: {e}");
            std::process::exit(1);
        }
    };

    let game = GameFlow::new(source, store, game_config);
    let data = web::Data::new(AppState::new(game));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
