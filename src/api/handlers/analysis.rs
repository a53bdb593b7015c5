// src/api/handlers/analysis.rs
use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::analyzer;
use crate::api::types::{AnalysisData, AnalyzeRequest, AnalyzeResponse};
use crate::crypto;
use crate::utils::truncate_string;

// Hash digests are cut to this many characters in responses; the full
// bcrypt/Argon2 strings are noise in a UI.
const HASH_DISPLAY_LEN: usize = 60;

/// Analyze password strength
///
/// Returns the strength verdict, crack-time projections, suggestions and
/// demo hashes for one password.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result", body = AnalyzeResponse),
        (status = 400, description = "Missing or empty password", body = AnalyzeResponse),
        (status = 500, description = "Server error", body = AnalyzeResponse)
    )
)]
pub async fn analyze_password(req: web::Json<AnalyzeRequest>) -> impl Responder {
    let password = match req.password.as_deref() {
        Some(pwd) => pwd,
        None => {
            return HttpResponse::BadRequest().json(AnalyzeResponse {
                success: false,
                data: None,
                error: Some("Password is required".to_string()),
            });
        }
    };

    let analysis = match analyzer::analyze(password) {
        Ok(analysis) => analysis,
        Err(e) => {
            return HttpResponse::BadRequest().json(AnalyzeResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
            });
        }
    };

    let mut hashes = match crypto::hash_comparison(password) {
        Ok(hashes) => hashes,
        Err(e) => {
            error!("Hash demonstration failed: {}", e);
            return HttpResponse::InternalServerError().json(AnalyzeResponse {
                success: false,
                data: None,
                error: Some(format!("Failed to compute demo hashes: {}", e)),
            });
        }
    };

    hashes.plaintext = truncate_string(&hashes.plaintext, HASH_DISPLAY_LEN);
    hashes.sha256 = truncate_string(&hashes.sha256, HASH_DISPLAY_LEN);
    hashes.bcrypt = truncate_string(&hashes.bcrypt, HASH_DISPLAY_LEN);
    hashes.argon2 = hashes
        .argon2
        .map(|h| truncate_string(&h, HASH_DISPLAY_LEN));

    HttpResponse::Ok().json(AnalyzeResponse {
        success: true,
        data: Some(AnalysisData {
            strength: analysis.strength,
            crack_times: analysis.crack_times,
            suggestions: analysis.suggestions,
            hashes,
        }),
        error: None,
    })
}
