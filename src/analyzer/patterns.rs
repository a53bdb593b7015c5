// src/analyzer/patterns.rs

// Keyboard rows checked for left-to-right fragments.
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const REPEAT_RUN: usize = 3;
const SEQUENCE_RUN: usize = 3;
const KEYBOARD_RUN: usize = 4;

/// Pattern classes detected in a password. Each flag is independent; all
/// detection is over the lowercased input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternReport {
    /// Run of 3+ identical characters ("aaa", "111")
    pub repeated: bool,
    /// Ascending or descending run of 3+ letters or digits ("abc", "321")
    pub sequential: bool,
    /// Fragment of 4+ adjacent keys from a qwerty row ("qwer", "asdf")
    pub keyboard: bool,
}

impl PatternReport {
    pub fn any(&self) -> bool {
        self.repeated || self.sequential || self.keyboard
    }
}

/// Detect repeating, sequential and keyboard-row patterns.
pub fn detect(password: &str) -> PatternReport {
    let lowered = password.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();

    PatternReport {
        repeated: has_repeated_run(&chars),
        sequential: has_sequential_run(&chars),
        keyboard: has_keyboard_run(&lowered),
    }
}

/// True if the password contains a run of 3+ identical characters.
pub fn has_repeated_run(chars: &[char]) -> bool {
    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run >= REPEAT_RUN {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

fn has_sequential_run(chars: &[char]) -> bool {
    if chars.len() < SEQUENCE_RUN {
        return false;
    }

    // A run counts only within one class: letters with letters, digits
    // with digits.
    for dir in [1i32, -1i32] {
        let mut run = 1;
        for i in 1..chars.len() {
            let prev = chars[i - 1];
            let curr = chars[i];
            let same_class = (prev.is_ascii_alphabetic() && curr.is_ascii_alphabetic())
                || (prev.is_ascii_digit() && curr.is_ascii_digit());
            if same_class && curr as i32 == prev as i32 + dir {
                run += 1;
                if run >= SEQUENCE_RUN {
                    return true;
                }
            } else {
                run = 1;
            }
        }
    }
    false
}

fn has_keyboard_run(lowered: &str) -> bool {
    for row in KEYBOARD_ROWS {
        for start in 0..=row.len().saturating_sub(KEYBOARD_RUN) {
            let fragment = &row[start..start + KEYBOARD_RUN];
            if lowered.contains(fragment) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_run() {
        assert!(detect("aaa").repeated);
        assert!(detect("pass111word").repeated);
        assert!(!detect("aabbcc-no").repeated);
    }

    #[test]
    fn test_sequential_letters() {
        assert!(detect("xabcx").sequential);
        assert!(detect("Test-cba").sequential);
        assert!(!detect("acegik").sequential);
    }

    #[test]
    fn test_sequential_digits() {
        assert!(detect("pin123x").sequential);
        assert!(detect("987pin").sequential);
        assert!(!detect("p1x3x5").sequential);
    }

    #[test]
    fn test_sequence_does_not_cross_classes() {
        // '9' -> ':' -> ';' is consecutive in code points but not a
        // digit/letter run
        assert!(!detect("9:;").sequential);
    }

    #[test]
    fn test_keyboard_rows() {
        assert!(detect("Xqwerty1").keyboard);
        assert!(detect("myASDFgh").keyboard);
        assert!(detect("zxcv2024").keyboard);
        assert!(!detect("qwXer").keyboard);
    }

    #[test]
    fn test_clean_password() {
        let report = detect("R4nd-m#Ko2pU");
        assert!(!report.any());
    }

    #[test]
    fn test_short_inputs() {
        assert!(!detect("").any());
        assert!(!detect("ab").any());
    }
}
