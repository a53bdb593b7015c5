// src/analyzer/entropy.rs
use crate::analyzer::charset;
use crate::analyzer::patterns::PatternReport;
use crate::models::CharsetProfile;

// Fixed discount table. Each detected pattern class multiplies the raw
// entropy by its factor; the combined multiplier never drops below the
// floor.
pub const REPEAT_DISCOUNT: f64 = 0.75;
pub const SEQUENCE_DISCOUNT: f64 = 0.75;
pub const KEYBOARD_DISCOUNT: f64 = 0.75;
pub const DISCOUNT_FLOOR: f64 = 0.50;

/// Estimate entropy in bits: `length * log2(alphabet)`, discounted for
/// detected patterns, rounded to two decimals. Empty input yields 0.
pub fn estimate(password: &str, profile: &CharsetProfile, report: &PatternReport) -> f64 {
    let alphabet = charset::alphabet_size(profile);
    if alphabet == 0 {
        return 0.0;
    }

    let length = password.chars().count() as f64;
    let raw = length * (alphabet as f64).log2();

    let mut multiplier = 1.0;
    if report.repeated {
        multiplier *= REPEAT_DISCOUNT;
    }
    if report.sequential {
        multiplier *= SEQUENCE_DISCOUNT;
    }
    if report.keyboard {
        multiplier *= KEYBOARD_DISCOUNT;
    }
    multiplier = multiplier.max(DISCOUNT_FLOOR);

    round2(raw * multiplier)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{charset, patterns};

    fn entropy_of(password: &str) -> f64 {
        let profile = charset::classify(password);
        let report = patterns::detect(password);
        estimate(password, &profile, &report)
    }

    #[test]
    fn test_empty_password_has_zero_entropy() {
        assert_eq!(entropy_of(""), 0.0);
    }

    #[test]
    fn test_lowercase_only() {
        // 8 * log2(26) = 37.60
        assert_eq!(entropy_of("kmwnhtpq"), 37.6);
    }

    #[test]
    fn test_full_mix_uses_94_symbol_alphabet() {
        let e = entropy_of("aB3!");
        // 4 * log2(94) = 26.22
        assert!((e - 26.22).abs() < 0.01, "got {}", e);
    }

    #[test]
    fn test_pattern_discount_applies() {
        let clean = entropy_of("kmwnhtpq");
        let repeated = entropy_of("kmwnhaaa");
        assert!(repeated < clean, "{} vs {}", repeated, clean);
        assert_eq!(repeated, round2(clean * REPEAT_DISCOUNT));
    }

    #[test]
    fn test_discount_floor() {
        // Repeats + sequence + keyboard row would be 0.42 stacked; the
        // floor keeps it at half the raw value.
        let pwd = "aaabcdqwer";
        let profile = charset::classify(pwd);
        let report = patterns::detect(pwd);
        assert!(report.repeated && report.sequential && report.keyboard);
        let raw = 10.0 * 26f64.log2();
        assert_eq!(estimate(pwd, &profile, &report), round2(raw * DISCOUNT_FLOOR));
    }

    #[test]
    fn test_monotonic_in_length_for_fixed_composition() {
        // Pattern-free lowercase strings of growing length
        let steps = ["kq", "kqw", "kqwn", "kqwnh", "kqwnhx", "kqwnhxm"];
        let mut prev = 0.0;
        for pwd in steps {
            let e = entropy_of(pwd);
            assert!(e >= prev, "entropy dropped at '{}': {} < {}", pwd, e, prev);
            prev = e;
        }
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let e = entropy_of("kmwnhtp");
        assert_eq!(e, round2(e));
    }
}
