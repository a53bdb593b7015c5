// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};

use crate::analyzer::common;
use crate::api::types::HealthResponse;
use crate::crypto;

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        argon2_available: crypto::argon2_available(),
        blocklist_entries: common::blocklist_len(),
    })
}
