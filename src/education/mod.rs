// src/education/mod.rs
//! Static reference content: the storage-algorithm catalog and the fixed
//! demo passwords. Read-only data, built once at first use.

use lazy_static::lazy_static;

use crate::crypto;
use crate::models::{AlgorithmInfo, PasswordExample};

lazy_static! {
    static ref ALGORITHMS: Vec<AlgorithmInfo> = build_algorithms();
    static ref EXAMPLES: Vec<PasswordExample> = build_examples();
}

/// Catalog of the five storage schemes the lab demonstrates.
pub fn algorithms() -> &'static [AlgorithmInfo] {
    &ALGORITHMS
}

/// Fixed demo passwords for quick testing in a client.
pub fn examples() -> &'static [PasswordExample] {
    &EXAMPLES
}

fn build_algorithms() -> Vec<AlgorithmInfo> {
    vec![
        AlgorithmInfo {
            name: "Plain Text".to_string(),
            status: "insecure".to_string(),
            speed: "1000 trillion H/s".to_string(),
            description: "No protection - passwords visible to anyone with database access"
                .to_string(),
            use_case: "NEVER use in production systems".to_string(),
            year: "N/A".to_string(),
            available: None,
        },
        AlgorithmInfo {
            name: "MD5".to_string(),
            status: "deprecated".to_string(),
            speed: "180 billion H/s".to_string(),
            description: "Fast hashing = fast cracking. Vulnerable to rainbow tables".to_string(),
            use_case: "Do not use for passwords".to_string(),
            year: "Deprecated since 2004".to_string(),
            available: None,
        },
        AlgorithmInfo {
            name: "SHA256".to_string(),
            status: "weak".to_string(),
            speed: "65 billion H/s".to_string(),
            description: "Better than MD5 but still too fast. No built-in salting".to_string(),
            use_case: "Use for checksums, NOT for passwords".to_string(),
            year: "Not suitable for passwords".to_string(),
            available: None,
        },
        AlgorithmInfo {
            name: "bcrypt".to_string(),
            status: "secure".to_string(),
            speed: "85 thousand H/s".to_string(),
            description: "Slow by design, includes salt, adjustable cost factor".to_string(),
            use_case: "Recommended for password storage".to_string(),
            year: "Since 1999".to_string(),
            available: None,
        },
        AlgorithmInfo {
            name: "Argon2".to_string(),
            status: "most_secure".to_string(),
            speed: "1 thousand H/s".to_string(),
            description: "Winner of Password Hashing Competition, memory-hard".to_string(),
            use_case: "Best choice for new systems".to_string(),
            year: "Since 2015".to_string(),
            available: Some(crypto::argon2_available()),
        },
    ]
}

fn build_examples() -> Vec<PasswordExample> {
    vec![
        PasswordExample {
            password: "password".to_string(),
            description: "Very Weak - Common Password".to_string(),
            expected_score: 5,
        },
        PasswordExample {
            password: "Pass123".to_string(),
            description: "Weak - Short & Predictable".to_string(),
            expected_score: 22,
        },
        PasswordExample {
            password: "MyP@ssw0rd".to_string(),
            description: "Moderate - Better but Still Risky".to_string(),
            expected_score: 55,
        },
        PasswordExample {
            password: "Tr0ub4dor&3".to_string(),
            description: "Strong - Good Mix".to_string(),
            expected_score: 70,
        },
        PasswordExample {
            password: "correct-horse-battery-staple-2024".to_string(),
            description: "Very Strong - Long Passphrase".to_string(),
            expected_score: 100,
        },
    ]
}
