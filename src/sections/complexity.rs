//! Complexity section - checks character-class diversity.

use secrecy::{ExposeSecret, SecretString};

use super::SYMBOLS;
use crate::types::{CharClass, ComplexityResult};

/// Scores how many of the four character classes the password draws from.
///
/// Each class present adds one point (0-4). For every missing class a
/// suggestion is emitted, in the fixed order lowercase, uppercase, digit,
/// symbol.
pub fn score_complexity(password: &SecretString) -> ComplexityResult {
    let pwd = password.expose_secret();

    let checks: [(CharClass, bool); 4] = [
        (CharClass::Lowercase, pwd.chars().any(|c| c.is_lowercase())),
        (CharClass::Uppercase, pwd.chars().any(|c| c.is_uppercase())),
        (CharClass::Digit, pwd.chars().any(|c| c.is_ascii_digit())),
        (CharClass::Symbol, pwd.chars().any(|c| SYMBOLS.contains(c))),
    ];

    let mut satisfied = Vec::new();
    let mut suggestions = Vec::new();
    for (class, present) in checks {
        if present {
            satisfied.push(class);
        } else {
            suggestions.push(class.suggestion());
        }
    }

    ComplexityResult {
        score: satisfied.len() as u8,
        satisfied,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_complexity_all_classes() {
        let result = score_complexity(&secret("Tr0ub4dor&3"));
        assert_eq!(result.score, 4);
        assert!(result.suggestions.is_empty());
        assert_eq!(
            result.satisfied,
            vec![
                CharClass::Lowercase,
                CharClass::Uppercase,
                CharClass::Digit,
                CharClass::Symbol
            ]
        );
    }

    #[test]
    fn test_complexity_missing_uppercase() {
        let result = score_complexity(&secret("lowercase123!"));
        assert_eq!(result.score, 3);
        assert_eq!(result.suggestions, vec!["Add uppercase letters"]);
    }

    #[test]
    fn test_complexity_missing_symbol() {
        let result = score_complexity(&secret("NoSymbol123"));
        assert_eq!(result.score, 3);
        assert_eq!(result.suggestions, vec!["Add special characters"]);
    }

    #[test]
    fn test_complexity_lowercase_only() {
        let result = score_complexity(&secret("justletters"));
        assert_eq!(result.score, 1);
        assert_eq!(
            result.suggestions,
            vec!["Add uppercase letters", "Add digits", "Add special characters"]
        );
    }

    #[test]
    fn test_complexity_empty_password() {
        let result = score_complexity(&secret(""));
        assert_eq!(result.score, 0);
        assert_eq!(result.suggestions.len(), 4);
        // Suggestions keep the fixed order lowercase -> uppercase -> digit -> symbol
        assert_eq!(result.suggestions[0], "Add lowercase letters");
        assert_eq!(result.suggestions[3], "Add special characters");
    }

    #[test]
    fn test_complexity_space_is_not_a_symbol() {
        // Space is outside the fixed symbol set
        let result = score_complexity(&secret("no symbols here"));
        assert!(!result.satisfied.contains(&CharClass::Symbol));
    }

    #[test]
    fn test_complexity_deterministic() {
        let a = score_complexity(&secret("MyPass123!"));
        let b = score_complexity(&secret("MyPass123!"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_complexity_score_bounds() {
        for pwd in ["", "a", "A1!", "Full4Classes!", "!!!!"] {
            let result = score_complexity(&secret(pwd));
            assert!(result.score <= 4);
            assert_eq!(
                result.score as usize + result.suggestions.len(),
                4,
                "satisfied and missing classes must partition the four classes"
            );
        }
    }
}
