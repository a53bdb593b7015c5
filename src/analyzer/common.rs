// src/analyzer/common.rs
use std::collections::HashSet;
use lazy_static::lazy_static;

lazy_static! {
    /// Blocklist of widely breached passwords, embedded at build time and
    /// never mutated. Entries are stored lowercased.
    static ref COMMON_PASSWORDS: HashSet<&'static str> = {
        let set: HashSet<&'static str> = include_str!("../../assets/common_passwords.txt")
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();
        log::debug!("Loaded {} common passwords", set.len());
        set
    };
}

/// Exact, case-insensitive membership check against the blocklist.
pub fn is_common(password: &str) -> bool {
    COMMON_PASSWORDS.contains(password.to_lowercase().as_str())
}

/// Number of blocklist entries, for diagnostics.
pub fn blocklist_len() -> usize {
    COMMON_PASSWORDS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_weak_passwords() {
        assert!(is_common("password"));
        assert!(is_common("123456"));
        assert!(is_common("qwerty"));
        assert!(is_common("letmein"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(is_common("PASSWORD"));
        assert!(is_common("QwErTy"));
    }

    #[test]
    fn test_exact_match_only() {
        assert!(!is_common("password!"));
        assert!(!is_common("passwor"));
        assert!(!is_common("Tr0ub4dor&3xtra!"));
    }

    #[test]
    fn test_blocklist_is_populated() {
        assert!(blocklist_len() >= 100);
    }
}
