// src/api/handlers/education.rs
use actix_web::{HttpResponse, Responder};

use crate::api::types::{AlgorithmListResponse, ExampleListResponse};
use crate::education;

/// Get the storage-algorithm catalog
#[utoipa::path(
    get,
    path = "/api/algorithms",
    tag = "Education",
    responses(
        (status = 200, description = "Storage-algorithm reference data", body = AlgorithmListResponse)
    )
)]
pub async fn list_algorithms() -> impl Responder {
    HttpResponse::Ok().json(AlgorithmListResponse {
        success: true,
        data: education::algorithms().to_vec(),
    })
}

/// Get the fixed demo passwords
#[utoipa::path(
    get,
    path = "/api/examples",
    tag = "Education",
    responses(
        (status = 200, description = "Demo passwords for quick testing", body = ExampleListResponse)
    )
)]
pub async fn list_examples() -> impl Responder {
    HttpResponse::Ok().json(ExampleListResponse {
        success: true,
        data: education::examples().to_vec(),
    })
}
