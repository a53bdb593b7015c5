// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::models::GenerationSpec;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length must be between 8 and 128 characters (got {0})")]
    LengthOutOfRange(usize),

    #[error("At least one character type must be selected")]
    NoClassSelected,
}

/// Generate a random password satisfying the spec.
///
/// Draws from the OS random source, uses only the requested classes and
/// guarantees every requested class appears at least once.
pub fn generate_password(spec: &GenerationSpec) -> Result<String, GeneratorError> {
    if spec.length < MIN_LENGTH || spec.length > MAX_LENGTH {
        return Err(GeneratorError::LengthOutOfRange(spec.length));
    }

    let mut pool: Vec<u8> = Vec::new();
    let mut required: Vec<&[u8]> = Vec::new();

    if spec.include_lowercase {
        pool.extend_from_slice(LOWERCASE);
        required.push(LOWERCASE);
    }
    if spec.include_uppercase {
        pool.extend_from_slice(UPPERCASE);
        required.push(UPPERCASE);
    }
    if spec.include_digits {
        pool.extend_from_slice(DIGITS);
        required.push(DIGITS);
    }
    if spec.include_special {
        pool.extend_from_slice(SPECIAL);
        required.push(SPECIAL);
    }

    if pool.is_empty() {
        return Err(GeneratorError::NoClassSelected);
    }

    let mut rng = OsRng;
    let mut bytes: Vec<u8> = Vec::with_capacity(spec.length);

    // One character from every requested class, then fill from the union
    for class in &required {
        bytes.push(*class.choose(&mut rng).expect("class set is non-empty"));
    }
    while bytes.len() < spec.length {
        bytes.push(*pool.choose(&mut rng).expect("pool is non-empty"));
    }

    // Shuffle so the guaranteed characters are not clustered at the front
    bytes.shuffle(&mut rng);

    Ok(String::from_utf8(bytes).expect("charsets are ASCII"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(length: usize, lower: bool, upper: bool, digits: bool, special: bool) -> GenerationSpec {
        GenerationSpec {
            length,
            include_lowercase: lower,
            include_uppercase: upper,
            include_digits: digits,
            include_special: special,
        }
    }

    #[test]
    fn test_generated_password_satisfies_spec() {
        for _ in 0..25 {
            let pwd = generate_password(&spec(16, true, true, true, true)).unwrap();
            assert_eq!(pwd.chars().count(), 16);
            assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
            assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
            assert!(pwd.chars().any(|c| c.is_ascii_digit()));
            assert!(pwd.chars().any(|c| !c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_only_requested_classes_used() {
        for _ in 0..25 {
            let pwd = generate_password(&spec(12, true, false, true, false)).unwrap();
            assert!(pwd
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_single_class_generation() {
        let pwd = generate_password(&spec(8, false, false, true, false)).unwrap();
        assert_eq!(pwd.chars().count(), 8);
        assert!(pwd.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            generate_password(&spec(7, true, true, true, true)),
            Err(GeneratorError::LengthOutOfRange(7))
        ));
        assert!(matches!(
            generate_password(&spec(129, true, true, true, true)),
            Err(GeneratorError::LengthOutOfRange(129))
        ));
        assert!(generate_password(&spec(8, true, true, true, true)).is_ok());
        assert!(generate_password(&spec(128, true, true, true, true)).is_ok());
    }

    #[test]
    fn test_no_class_selected_fails() {
        assert!(matches!(
            generate_password(&spec(16, false, false, false, false)),
            Err(GeneratorError::NoClassSelected)
        ));
    }

    #[test]
    fn test_outputs_differ_between_calls() {
        let a = generate_password(&GenerationSpec::default()).unwrap();
        let b = generate_password(&GenerationSpec::default()).unwrap();
        assert_ne!(a, b);
    }
}
