// src/analyzer/suggestions.rs
use crate::analyzer::patterns::PatternReport;
use crate::models::StrengthResult;

const MIN_LENGTH: usize = 12;
const RECOMMENDED_LENGTH: usize = 16;

/// Rule-based advisory text, evaluated in fixed priority order. Rules are
/// independent and never suppress each other; the closing acknowledgment
/// fires only when nothing else did.
pub fn generate(result: &StrengthResult, report: &PatternReport, all_alpha: bool) -> Vec<String> {
    let mut suggestions = Vec::new();

    if result.is_common {
        suggestions
            .push("⚠️ CRITICAL: This is a commonly used password! Change it immediately!".to_string());
    }

    if !result.char_sets.uppercase {
        suggestions.push("🔠 Add uppercase letters (A-Z)".to_string());
    }
    if !result.char_sets.lowercase {
        suggestions.push("🔡 Add lowercase letters (a-z)".to_string());
    }
    if !result.char_sets.digits {
        suggestions.push("🔢 Add numbers (0-9)".to_string());
    }
    if !result.char_sets.special {
        suggestions.push("🔣 Add special characters (!@#$%^&*)".to_string());
    }

    if result.length < MIN_LENGTH {
        suggestions.push(format!(
            "📏 Increase length to at least {} characters (current: {})",
            MIN_LENGTH, result.length
        ));
    } else if result.length < RECOMMENDED_LENGTH {
        suggestions.push(format!(
            "📏 Consider increasing length to {}+ characters for better security (current: {})",
            RECOMMENDED_LENGTH, result.length
        ));
    }

    if report.sequential || report.keyboard {
        suggestions
            .push("🔄 Avoid predictable patterns (abc, 123, keyboard rows)".to_string());
    }
    if report.repeated {
        suggestions.push("🚫 Avoid repeating the same character multiple times".to_string());
    }

    if result.length >= 4 && all_alpha {
        suggestions.push(
            "📖 Avoid single dictionary words - use passphrases or random characters".to_string(),
        );
    }

    if !suggestions.is_empty() {
        suggestions.push(
            "💡 Best practice: use a passphrase or a password manager to generate and store strong passwords"
                .to_string(),
        );
    } else {
        suggestions
            .push("✅ Excellent password! Maintain this security level for all accounts.".to_string());
    }

    suggestions
}
