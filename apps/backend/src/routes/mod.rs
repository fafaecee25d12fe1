use actix_web::web;

pub mod health;
pub mod sessions;

/// Configure application routes.
///
/// Shared between `main.rs` and the integration tests so both exercise the
/// same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game sessions: /api/sessions/**
    cfg.service(web::scope("/api/sessions").configure(sessions::configure_routes));

    cfg.route("/", web::get().to(health::root));
}
