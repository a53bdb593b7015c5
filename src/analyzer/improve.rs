// src/analyzer/improve.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::analyzer::{self, charset};
use crate::models::ImprovementCandidate;

// Length the extend strategy grows a password to.
const TARGET_LENGTH: usize = 16;
const MAX_CANDIDATES: usize = 5;

// Substitution table for the leetspeak strategy; first occurrence of each
// letter is replaced.
const LEET_MAP: [(char, char); 6] = [
    ('a', '@'),
    ('e', '3'),
    ('i', '!'),
    ('o', '0'),
    ('s', '$'),
    ('t', '7'),
];

const SPECIAL_POOL: &[u8] = b"!@#$%^&*";
const WORD_POOL: [&str; 4] = ["Secure", "Strong", "Private", "Safe"];

/// Produce ranked rewrite proposals for a password, best first.
///
/// Every candidate is re-scored through the strength scorer; duplicates are
/// dropped keeping the first occurrence, and nothing weaker than the
/// original survives.
pub fn improve(original: &str) -> Vec<ImprovementCandidate> {
    let mut rng = OsRng;
    let original_score = analyzer::strength(original).score;
    let profile = charset::classify(original);
    let mut raw: Vec<(String, &'static str, String)> = Vec::new();

    // Append one character from each class the original lacks
    if !profile.uppercase {
        let c = rng.gen_range(b'A'..=b'Z') as char;
        raw.push((
            format!("{}{}", original, c),
            "Added uppercase",
            "Appended an uppercase letter".to_string(),
        ));
    }
    if !profile.digits {
        let c = rng.gen_range(b'0'..=b'9') as char;
        raw.push((
            format!("{}{}", original, c),
            "Added number",
            "Appended a digit".to_string(),
        ));
    }
    if !profile.special {
        let c = *SPECIAL_POOL.choose(&mut rng).expect("pool is non-empty") as char;
        raw.push((
            format!("{}{}", original, c),
            "Added special character",
            "Increased complexity with symbols".to_string(),
        ));
    }

    // Extend to the target length
    if original.chars().count() < TARGET_LENGTH {
        let extended = extend(original, TARGET_LENGTH, &mut rng);
        let len = extended.chars().count();
        raw.push((
            extended,
            "Added length",
            format!("Extended to {} characters", len),
        ));
    }

    // Leetspeak substitution
    let leet = leetspeak(original);
    if leet != original {
        raw.push((
            leet.clone(),
            "Character substitution",
            "Replaced letters with numbers and symbols".to_string(),
        ));
    }

    // Combined: substitution plus extension
    if leet != original && leet.chars().count() < TARGET_LENGTH {
        raw.push((
            extend(&leet, TARGET_LENGTH, &mut rng),
            "Substituted and lengthened",
            "Applied substitution and extended the length".to_string(),
        ));
    }

    // Passphrase wrapper
    if original.chars().count() > 3 {
        let word = WORD_POOL.choose(&mut rng).expect("pool is non-empty");
        let number = rng.gen_range(100..1000);
        raw.push((
            format!("{}-{}-{}!", word, original, number),
            "Passphrase creation",
            "Wrapped into a memorable passphrase".to_string(),
        ));
    }

    let mut candidates: Vec<ImprovementCandidate> = Vec::new();
    for (password, strategy, description) in raw {
        if candidates.iter().any(|c| c.password == password) {
            continue;
        }
        let strength = analyzer::strength(&password);
        if strength.score < original_score {
            continue;
        }
        candidates.push(ImprovementCandidate {
            length: password.chars().count(),
            password,
            score: strength.score,
            level: strength.level,
            strategy: strategy.to_string(),
            description,
        });
    }

    // Best first; stable so equal scores keep strategy order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(MAX_CANDIDATES);
    candidates
}

fn extend(password: &str, target: usize, rng: &mut OsRng) -> String {
    const FILL_POOL: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";
    let mut extended = password.to_string();
    while extended.chars().count() < target {
        extended.push(*FILL_POOL.choose(rng).expect("pool is non-empty") as char);
    }
    extended
}

fn leetspeak(password: &str) -> String {
    let mut result = password.to_string();
    for (from, to) in LEET_MAP {
        if let Some(pos) = result.find(from) {
            result.replace_range(pos..pos + from.len_utf8(), &to.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer;

    #[test]
    fn test_candidates_never_weaker_than_original() {
        for pwd in ["abc", "password", "hello1", "MyPass123"] {
            let original = analyzer::strength(pwd).score;
            for candidate in improve(pwd) {
                assert!(
                    candidate.score >= original,
                    "candidate '{}' ({}) weaker than '{}' ({})",
                    candidate.password,
                    candidate.score,
                    pwd,
                    original
                );
            }
        }
    }

    #[test]
    fn test_candidates_sorted_best_first() {
        let candidates = improve("hello");
        for pair in candidates.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_candidates_deduplicated() {
        let candidates = improve("weakpass");
        let mut seen = std::collections::HashSet::new();
        for candidate in &candidates {
            assert!(seen.insert(candidate.password.clone()), "duplicate candidate");
        }
    }

    #[test]
    fn test_at_most_five_candidates() {
        assert!(improve("abc").len() <= 5);
        assert!(improve("password1").len() <= 5);
    }

    #[test]
    fn test_scores_are_authoritative() {
        for candidate in improve("hunter2") {
            let rescored = analyzer::strength(&candidate.password);
            assert_eq!(candidate.score, rescored.score);
            assert_eq!(candidate.level, rescored.level);
        }
    }

    #[test]
    fn test_leetspeak_substitution() {
        assert_eq!(leetspeak("sesame"), "$3s@me");
        assert_eq!(leetspeak("xyz"), "xyz");
    }

    #[test]
    fn test_extend_reaches_target() {
        let mut rng = OsRng;
        assert_eq!(extend("abc", 16, &mut rng).chars().count(), 16);
        assert_eq!(extend("0123456789abcdefg", 16, &mut rng).chars().count(), 17);
    }
}
