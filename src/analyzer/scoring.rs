// src/analyzer/scoring.rs
use crate::analyzer::patterns::PatternReport;
use crate::models::{CharsetProfile, StrengthLevel};

// Scoring policy. These are calibration constants, not derived values;
// recalibrate here without touching the algorithm below.

// Length component, up to 35 points.
const LENGTH_BREAKPOINTS: [(usize, f64); 4] = [(16, 35.0), (12, 25.0), (8, 15.0), (6, 5.0)];

// Character-diversity component, up to 30 points (7.5 per class).
const POINTS_PER_CLASS: f64 = 7.5;

// Entropy component, up to 20 points, saturating at 80 bits.
const ENTROPY_BREAKPOINTS: [(f64, f64); 4] = [(80.0, 20.0), (60.0, 15.0), (40.0, 10.0), (28.0, 5.0)];

// Best-practice component, up to 15 points.
const COMBO_BONUS: f64 = 10.0;
const COMBO_MIN_LENGTH: usize = 12;
const COMBO_MIN_CLASSES: usize = 3;
const NO_REPEAT_BONUS: f64 = 5.0;

// Penalties, applied after the additive components, before clamping.
const COMMON_PENALTY: f64 = 50.0;
const PATTERN_PENALTY: f64 = 20.0;

/// Combine length, diversity, entropy and best-practice components into a
/// 0-100 score.
pub fn score(
    length: usize,
    profile: &CharsetProfile,
    entropy_bits: f64,
    is_common: bool,
    report: &PatternReport,
) -> u8 {
    let mut score = 0.0;

    for (min_len, points) in LENGTH_BREAKPOINTS {
        if length >= min_len {
            score += points;
            break;
        }
    }

    score += profile.class_count() as f64 * POINTS_PER_CLASS;

    for (min_bits, points) in ENTROPY_BREAKPOINTS {
        if entropy_bits >= min_bits {
            score += points;
            break;
        }
    }

    if length >= COMBO_MIN_LENGTH && profile.class_count() >= COMBO_MIN_CLASSES {
        score += COMBO_BONUS;
    }
    if !report.repeated {
        score += NO_REPEAT_BONUS;
    }

    if is_common {
        score -= COMMON_PENALTY;
    }
    if report.any() {
        score -= PATTERN_PENALTY;
    }

    score.round().clamp(0.0, 100.0) as u8
}

/// Map a clamped score onto its strength band.
pub fn level(score: u8) -> StrengthLevel {
    match score {
        0..=19 => StrengthLevel::VeryWeak,
        20..=39 => StrengthLevel::Weak,
        40..=59 => StrengthLevel::Moderate,
        60..=79 => StrengthLevel::Strong,
        _ => StrengthLevel::VeryStrong,
    }
}
