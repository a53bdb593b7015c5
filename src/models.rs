// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Which character classes a password draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharsetProfile {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl CharsetProfile {
    /// Number of distinct classes present.
    pub fn class_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Discrete strength band derived from the 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full strength verdict for one password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrengthResult {
    /// Strength score, clamped to 0-100
    pub score: u8,
    /// Band the score falls into
    pub level: StrengthLevel,
    /// Password length in characters
    pub length: usize,
    /// Estimated entropy in bits, rounded to two decimals
    pub entropy: f64,
    /// Character classes detected
    pub char_sets: CharsetProfile,
    /// Whether the password is on the common-password blocklist
    pub is_common: bool,
}

/// Projected brute-force time under one storage scheme.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CrackTimeEntry {
    /// Storage algorithm name ("plaintext", "md5", ...)
    pub algorithm: String,
    /// Assumed attacker throughput in hashes per second
    pub attack_speed: f64,
    /// Average-case crack time in seconds
    pub time_seconds: f64,
    /// Humanized rendering of `time_seconds`
    pub time_human: String,
}

/// One rewrite proposal from the improvement generator.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImprovementCandidate {
    /// The improved password
    pub password: String,
    /// Re-scored strength of the candidate
    pub score: u8,
    /// Level matching the re-scored value
    pub level: StrengthLevel,
    /// Candidate length in characters
    pub length: usize,
    /// Short strategy label
    pub strategy: String,
    /// What the transformation did
    pub description: String,
}

/// Password generation constraints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationSpec {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for GenerationSpec {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_special: true,
        }
    }
}

/// Static reference record describing one storage algorithm.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlgorithmInfo {
    pub name: String,
    pub status: String,
    pub speed: String,
    pub description: String,
    pub use_case: String,
    pub year: String,
    /// Present only for backends that can be compiled out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Fixed demo password for the quick-test list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordExample {
    pub password: String,
    pub description: String,
    pub expected_score: u8,
}
