// src/api/handlers/improve.rs
use actix_web::{web, HttpResponse, Responder};

use crate::analyzer::improve;
use crate::api::types::{ImproveData, ImproveRequest, ImproveResponse};

/// Suggest stronger variants of a password
///
/// Returns ranked rewrites of the submitted password, each re-scored by
/// the strength scorer.
#[utoipa::path(
    post,
    path = "/api/improve",
    tag = "Improvement",
    request_body = ImproveRequest,
    responses(
        (status = 200, description = "Ranked improvement candidates", body = ImproveResponse),
        (status = 400, description = "Missing or empty password", body = ImproveResponse),
        (status = 500, description = "Server error", body = ImproveResponse)
    )
)]
pub async fn improve_password(req: web::Json<ImproveRequest>) -> impl Responder {
    let original = match req.password.as_deref() {
        Some("") | None => {
            return HttpResponse::BadRequest().json(ImproveResponse {
                success: false,
                data: None,
                error: Some("Password is required".to_string()),
            });
        }
        Some(pwd) => pwd.to_string(),
    };

    let improvements = improve::improve(&original);

    HttpResponse::Ok().json(ImproveResponse {
        success: true,
        data: Some(ImproveData {
            original,
            improvements,
        }),
        error: None,
    })
}
