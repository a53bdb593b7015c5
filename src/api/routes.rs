// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(handlers::system::health_check))
            // Password analysis
            .route("/analyze", web::post().to(handlers::analysis::analyze_password))
            // Password generation
            .route("/generate", web::post().to(handlers::generator::generate_password))
            // Improvement candidates
            .route("/improve", web::post().to(handlers::improve::improve_password))
            // Reference data
            .route("/algorithms", web::get().to(handlers::education::list_algorithms))
            .route("/examples", web::get().to(handlers::education::list_examples)),
    );
}
