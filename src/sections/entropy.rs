//! Entropy section - coarse entropy estimate in bits.

use secrecy::{ExposeSecret, SecretString};

use super::SYMBOLS;

/// Estimates password entropy in bits, rounded to two decimals.
///
/// The effective alphabet sums the full size of every character class that
/// appears at least once: 26 for lowercase, 26 for uppercase, 10 for digits,
/// and the symbol-set size for symbols. The estimate is then
/// `length * log2(alphabet)`.
///
/// This is a deliberate worst-case approximation, not true Shannon entropy:
/// it assumes each character is drawn uniformly and independently from the
/// union of the classes actually used. The 40/60-bit rating thresholds are
/// calibrated against this exact formula.
pub fn estimate_entropy(password: &SecretString) -> f64 {
    let pwd = password.expose_secret();

    let mut alphabet: usize = 0;
    if pwd.chars().any(|c| c.is_lowercase()) {
        alphabet += 26;
    }
    if pwd.chars().any(|c| c.is_uppercase()) {
        alphabet += 26;
    }
    if pwd.chars().any(|c| c.is_ascii_digit()) {
        alphabet += 10;
    }
    if pwd.chars().any(|c| SYMBOLS.contains(c)) {
        alphabet += SYMBOLS.len();
    }

    if alphabet == 0 {
        return 0.0;
    }

    let bits = pwd.chars().count() as f64 * (alphabet as f64).log2();
    (bits * 100.0).round() / 100.0
}
