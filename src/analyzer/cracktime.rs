// src/analyzer/cracktime.rs
use crate::analyzer::charset;
use crate::models::{CharsetProfile, CrackTimeEntry};

/// Assumed attacker throughput per storage scheme, in hashes per second.
/// Calibrated against single-GPU hashcat benchmarks; fixed display order,
/// strictly decreasing speed.
pub const ATTACK_SPEEDS: [(&str, f64); 5] = [
    ("plaintext", 1e15),
    ("md5", 1.8e11),
    ("sha256", 6.5e10),
    ("bcrypt", 8.5e4),
    ("argon2", 1e3),
];

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;
const SECONDS_PER_CENTURY: f64 = SECONDS_PER_YEAR * 100.0;

// Saturation bound for the humanized label.
const MAX_CENTURIES: f64 = 1e9;

/// Brute-force keyspace for the observed composition and length.
///
/// A password with no detected classes is treated as lowercase-only, and a
/// blocklisted password collapses to a single guess - it falls to a
/// dictionary pass, not brute force.
pub fn keyspace(length: usize, profile: &CharsetProfile, is_common: bool) -> f64 {
    if is_common {
        return 1.0;
    }
    let alphabet = match charset::alphabet_size(profile) {
        0 => charset::LOWERCASE_ALPHABET,
        n => n,
    };
    (alphabet as f64).powi(length as i32)
}

/// Project average-case crack times for every storage scheme, in fixed
/// order from fastest to slowest attack.
pub fn estimate_all(length: usize, profile: &CharsetProfile, is_common: bool) -> Vec<CrackTimeEntry> {
    let space = keyspace(length, profile, is_common);

    ATTACK_SPEEDS
        .iter()
        .map(|&(algorithm, speed)| {
            // Average case searches half the keyspace
            let time_seconds = space / (2.0 * speed);
            CrackTimeEntry {
                algorithm: algorithm.to_string(),
                attack_speed: speed,
                time_seconds,
                time_human: format_time(time_seconds),
            }
        })
        .collect()
}

/// Render a duration with the largest unit that keeps the value >= 1,
/// saturating at a bounded label for astronomical values.
pub fn format_time(seconds: f64) -> String {
    if seconds < 1.0 {
        return "Instant".to_string();
    }
    if seconds < SECONDS_PER_MINUTE {
        return format!("{:.2} seconds", seconds);
    }
    if seconds < SECONDS_PER_HOUR {
        return format!("{:.2} minutes", seconds / SECONDS_PER_MINUTE);
    }
    if seconds < SECONDS_PER_DAY {
        return format!("{:.2} hours", seconds / SECONDS_PER_HOUR);
    }
    if seconds < SECONDS_PER_YEAR {
        return format!("{:.2} days", seconds / SECONDS_PER_DAY);
    }
    if seconds < SECONDS_PER_CENTURY {
        return format!("{:.2} years", seconds / SECONDS_PER_YEAR);
    }
    let centuries = seconds / SECONDS_PER_CENTURY;
    if centuries.is_finite() && centuries < MAX_CENTURIES {
        format!("{:.2} centuries", centuries)
    } else {
        "billions of centuries".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::charset::classify;

    #[test]
    fn test_fixed_algorithm_order() {
        let entries = estimate_all(8, &classify("kmwnhtpq"), false);
        let names: Vec<&str> = entries.iter().map(|e| e.algorithm.as_str()).collect();
        assert_eq!(names, ["plaintext", "md5", "sha256", "bcrypt", "argon2"]);
    }

    #[test]
    fn test_times_non_decreasing_across_order() {
        for pwd in ["a", "kmwnhtpq", "Tr0ub4dor&3xtra!"] {
            let entries = estimate_all(pwd.chars().count(), &classify(pwd), false);
            for pair in entries.windows(2) {
                assert!(
                    pair[0].time_seconds <= pair[1].time_seconds,
                    "{} slower than {} for '{}'",
                    pair[0].algorithm,
                    pair[1].algorithm,
                    pwd
                );
            }
        }
    }

    #[test]
    fn test_common_password_collapses_keyspace() {
        assert_eq!(keyspace(8, &classify("password"), true), 1.0);
        let entries = estimate_all(8, &classify("password"), true);
        assert_eq!(entries[4].time_human, "Instant");
    }

    #[test]
    fn test_empty_profile_assumes_lowercase() {
        assert_eq!(keyspace(4, &classify(""), false), 26f64.powi(4));
    }

    #[test]
    fn test_strong_password_survives_argon2_for_years() {
        let pwd = "Tr0ub4dor&3xtra!";
        let entries = estimate_all(pwd.chars().count(), &classify(pwd), false);
        let argon2 = &entries[4];
        assert!(argon2.time_seconds >= SECONDS_PER_YEAR);
    }

    #[test]
    fn test_format_time_units() {
        assert_eq!(format_time(0.5), "Instant");
        assert_eq!(format_time(30.0), "30.00 seconds");
        assert_eq!(format_time(120.0), "2.00 minutes");
        assert_eq!(format_time(7200.0), "2.00 hours");
        assert_eq!(format_time(172_800.0), "2.00 days");
        assert_eq!(format_time(SECONDS_PER_YEAR * 2.0), "2.00 years");
        assert_eq!(format_time(SECONDS_PER_YEAR * 250.0), "2.50 centuries");
    }

    #[test]
    fn test_format_time_saturates() {
        assert_eq!(format_time(f64::INFINITY), "billions of centuries");
        assert_eq!(format_time(1e40), "billions of centuries");
    }

    #[test]
    fn test_overflowing_keyspace_is_graceful() {
        // 94^128 is far past the saturation bound; formatting must not panic
        let profile = classify("aA1!");
        let entries = estimate_all(128, &profile, false);
        assert_eq!(entries[0].time_human, "billions of centuries");
    }
}
