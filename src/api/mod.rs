// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // System endpoints
        crate::api::handlers::system::health_check,

        // Analysis endpoints
        crate::api::handlers::analysis::analyze_password,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // Improvement endpoints
        crate::api::handlers::improve::improve_password,

        // Education endpoints
        crate::api::handlers::education::list_algorithms,
        crate::api::handlers::education::list_examples
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::AnalyzeRequest,
            crate::api::types::AnalysisData,
            crate::api::types::AnalyzeResponse,
            crate::api::types::GenerateRequest,
            crate::api::types::GeneratedData,
            crate::api::types::GenerateResponse,
            crate::api::types::ImproveRequest,
            crate::api::types::ImproveData,
            crate::api::types::ImproveResponse,
            crate::api::types::AlgorithmListResponse,
            crate::api::types::ExampleListResponse,
            crate::api::types::HealthResponse,

            // Domain models
            crate::models::CharsetProfile,
            crate::models::StrengthLevel,
            crate::models::StrengthResult,
            crate::models::CrackTimeEntry,
            crate::models::ImprovementCandidate,
            crate::models::GenerationSpec,
            crate::models::AlgorithmInfo,
            crate::models::PasswordExample,
            crate::crypto::HashDemo
        )
    ),
    tags(
        (name = "System", description = "Service health endpoints"),
        (name = "Analysis", description = "Password strength analysis endpoints"),
        (name = "Generator", description = "Password generation endpoints"),
        (name = "Improvement", description = "Password improvement endpoints"),
        (name = "Education", description = "Reference data endpoints")
    ),
    info(
        title = "PassLab API",
        version = "0.1.0",
        description = "Educational password-security analysis API",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting PassLab API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let bind = (config.web_address.clone(), config.web_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS for browser clients
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the API routes
            .configure(routes::configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
