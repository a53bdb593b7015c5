// src/analyzer/charset.rs
use crate::models::CharsetProfile;

// Alphabet sizes used for entropy and keyspace arithmetic. The special
// bucket is fixed at the printable-symbol count the attacker models assume.
pub const LOWERCASE_ALPHABET: u32 = 26;
pub const UPPERCASE_ALPHABET: u32 = 26;
pub const DIGIT_ALPHABET: u32 = 10;
pub const SPECIAL_ALPHABET: u32 = 32;

/// Scan the password once and record which character classes it uses.
///
/// Anything that is not a lowercase letter, an uppercase letter or a
/// decimal digit counts as special. An empty password yields an all-false
/// profile.
pub fn classify(password: &str) -> CharsetProfile {
    let mut profile = CharsetProfile {
        lowercase: false,
        uppercase: false,
        digits: false,
        special: false,
    };

    for c in password.chars() {
        if c.is_lowercase() {
            profile.lowercase = true;
        } else if c.is_uppercase() {
            profile.uppercase = true;
        } else if c.is_ascii_digit() {
            profile.digits = true;
        } else {
            profile.special = true;
        }
    }

    profile
}

/// Effective alphabet size: the sum of the sizes of the classes present.
/// Zero for an empty (all-false) profile.
pub fn alphabet_size(profile: &CharsetProfile) -> u32 {
    let mut size = 0;
    if profile.lowercase {
        size += LOWERCASE_ALPHABET;
    }
    if profile.uppercase {
        size += UPPERCASE_ALPHABET;
    }
    if profile.digits {
        size += DIGIT_ALPHABET;
    }
    if profile.special {
        size += SPECIAL_ALPHABET;
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty() {
        let profile = classify("");
        assert!(!profile.lowercase);
        assert!(!profile.uppercase);
        assert!(!profile.digits);
        assert!(!profile.special);
        assert_eq!(profile.class_count(), 0);
        assert_eq!(alphabet_size(&profile), 0);
    }

    #[test]
    fn test_classify_single_classes() {
        assert!(classify("abc").lowercase);
        assert!(classify("ABC").uppercase);
        assert!(classify("123").digits);
        assert!(classify("!@#").special);
        assert_eq!(classify("abc").class_count(), 1);
    }

    #[test]
    fn test_classify_mixed() {
        let profile = classify("Tr0ub4dor&3");
        assert!(profile.lowercase);
        assert!(profile.uppercase);
        assert!(profile.digits);
        assert!(profile.special);
        assert_eq!(profile.class_count(), 4);
        assert_eq!(alphabet_size(&profile), 94);
    }

    #[test]
    fn test_alphabet_size_sums_present_classes() {
        assert_eq!(alphabet_size(&classify("abc")), 26);
        assert_eq!(alphabet_size(&classify("abcABC")), 52);
        assert_eq!(alphabet_size(&classify("abc123")), 36);
        assert_eq!(alphabet_size(&classify("abc!")), 58);
    }

    #[test]
    fn test_space_counts_as_special() {
        assert!(classify("a b").special);
    }
}
