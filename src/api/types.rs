// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::crypto::HashDemo;
use crate::models::{
    AlgorithmInfo, CrackTimeEntry, ImprovementCandidate, PasswordExample, StrengthLevel,
    StrengthResult,
};

// Analysis requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Password to analyze
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisData {
    /// Strength verdict
    pub strength: StrengthResult,
    /// Crack-time projection per storage scheme, fastest attack first
    pub crack_times: Vec<CrackTimeEntry>,
    /// Advisory messages in priority order
    pub suggestions: Vec<String>,
    /// Demo hashes, truncated for display
    pub hashes: HashDemo,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Analysis result (only present on success)
    pub data: Option<AnalysisData>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Generation requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Desired length, 8-128 (default 16)
    pub length: Option<usize>,
    /// Include lowercase letters (default true)
    pub include_lowercase: Option<bool>,
    /// Include uppercase letters (default true)
    pub include_uppercase: Option<bool>,
    /// Include digits (default true)
    pub include_digits: Option<bool>,
    /// Include special characters (default true)
    pub include_special: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GeneratedData {
    /// The generated password
    pub password: String,
    /// Re-scored strength of the generated password
    pub score: u8,
    /// Strength band
    pub level: StrengthLevel,
    /// Password length in characters
    pub length: usize,
    /// Estimated entropy in bits
    pub entropy: f64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password and its strength (only present on success)
    pub data: Option<GeneratedData>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Improvement requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ImproveRequest {
    /// Password to improve
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ImproveData {
    /// The password the candidates were derived from
    pub original: String,
    /// Ranked candidates, best first
    pub improvements: Vec<ImprovementCandidate>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ImproveResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Improvement candidates (only present on success)
    pub data: Option<ImproveData>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Reference data responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AlgorithmListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Storage-algorithm catalog
    pub data: Vec<AlgorithmInfo>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ExampleListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Fixed demo passwords
    pub data: Vec<PasswordExample>,
}

// Health check
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status ("healthy")
    pub status: String,
    /// Whether the Argon2 backend is compiled in
    pub argon2_available: bool,
    /// Number of entries in the common-password blocklist
    pub blocklist_entries: usize,
}
