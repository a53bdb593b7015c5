// src/analyzer/mod.rs
//! Password analysis engine: pure, stateless functions over a single
//! password. The only process-wide state is the read-only blocklist.

pub mod charset;
pub mod common;
pub mod cracktime;
pub mod entropy;
pub mod improve;
pub mod patterns;
pub mod scoring;
pub mod suggestions;

use thiserror::Error;

use crate::models::{CrackTimeEntry, StrengthResult};

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Everything a single analysis call produces, minus the hash demo.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub strength: StrengthResult,
    pub crack_times: Vec<CrackTimeEntry>,
    pub suggestions: Vec<String>,
}

/// Score a password. Accepts any input, including empty, and never fails;
/// `analyze` is the entry point that enforces non-empty input.
pub fn strength(password: &str) -> StrengthResult {
    let profile = charset::classify(password);
    let report = patterns::detect(password);
    let length = password.chars().count();
    let entropy_bits = entropy::estimate(password, &profile, &report);
    let is_common = common::is_common(password);
    let score = scoring::score(length, &profile, entropy_bits, is_common, &report);

    StrengthResult {
        score,
        level: scoring::level(score),
        length,
        entropy: entropy_bits,
        char_sets: profile,
        is_common,
    }
}

/// Run the full analysis pipeline: classify, estimate, score, project
/// crack times and derive suggestions.
pub fn analyze(password: &str) -> Result<Analysis, AnalyzerError> {
    if password.is_empty() {
        return Err(AnalyzerError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    let strength = strength(password);
    let report = patterns::detect(password);
    let crack_times =
        cracktime::estimate_all(strength.length, &strength.char_sets, strength.is_common);
    let all_alpha = password.chars().all(|c| c.is_alphabetic());
    let suggestions = suggestions::generate(&strength, &report, all_alpha);

    log::debug!(
        "Analyzed password: length={} score={} level={}",
        strength.length,
        strength.score,
        strength.level
    );

    Ok(Analysis {
        strength,
        crack_times,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrengthLevel;

    #[test]
    fn test_empty_password_is_invalid_input() {
        let err = analyze("").unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidInput(_)));
    }

    #[test]
    fn test_common_password_scenario() {
        let analysis = analyze("password").expect("analysis should succeed");
        assert!(analysis.strength.is_common);
        assert_eq!(analysis.strength.level, StrengthLevel::VeryWeak);
        assert!(analysis.strength.score <= 20);
    }

    #[test]
    fn test_strong_password_scenario() {
        let analysis = analyze("Tr0ub4dor&3xtra!").expect("analysis should succeed");
        assert!(!analysis.strength.is_common);
        assert!(matches!(
            analysis.strength.level,
            StrengthLevel::Strong | StrengthLevel::VeryStrong
        ));
        let argon2 = analysis
            .crack_times
            .iter()
            .find(|e| e.algorithm == "argon2")
            .expect("argon2 entry present");
        assert!(argon2.time_seconds >= cracktime::SECONDS_PER_YEAR);
    }

    #[test]
    fn test_analysis_has_five_crack_times() {
        let analysis = analyze("anything").expect("analysis should succeed");
        assert_eq!(analysis.crack_times.len(), 5);
    }

    #[test]
    fn test_level_always_matches_score() {
        for pwd in ["a", "password", "Pass123", "MyP@ssw0rd", "Tr0ub4dor&3xtra!"] {
            let result = strength(pwd);
            assert_eq!(result.level, scoring::level(result.score));
        }
    }
}
