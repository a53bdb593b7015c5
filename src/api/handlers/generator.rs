// src/api/handlers/generator.rs
use actix_web::{web, HttpResponse, Responder};

use crate::analyzer;
use crate::api::types::{GeneratedData, GenerateRequest, GenerateResponse};
use crate::core::config::Config;
use crate::generators;
use crate::models::GenerationSpec;

/// Generate a secure password
///
/// Generates a random password from the requested character classes and
/// returns it together with its re-scored strength.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "Invalid generation parameters", body = GenerateResponse),
        (status = 500, description = "Server error", body = GenerateResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    req: web::Json<GenerateRequest>,
) -> impl Responder {
    let spec = GenerationSpec {
        length: req.length.unwrap_or(config.default_password_length),
        include_lowercase: req.include_lowercase.unwrap_or(true),
        include_uppercase: req.include_uppercase.unwrap_or(true),
        include_digits: req.include_digits.unwrap_or(true),
        include_special: req.include_special.unwrap_or(true),
    };

    let password = match generators::generate_password(&spec) {
        Ok(pwd) => pwd,
        Err(e) => {
            return HttpResponse::BadRequest().json(GenerateResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
            });
        }
    };

    let strength = analyzer::strength(&password);

    HttpResponse::Ok().json(GenerateResponse {
        success: true,
        data: Some(GeneratedData {
            password,
            score: strength.score,
            level: strength.level,
            length: strength.length,
            entropy: strength.entropy,
        }),
        error: None,
    })
}
