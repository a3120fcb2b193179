//! Password scoring sections
//!
//! Each section computes one independent signal from the password alone.
//! All of them are pure: same input, same output, no side effects.

mod complexity;
mod entropy;
mod length;

pub use complexity::score_complexity;
pub use entropy::estimate_entropy;
pub use length::classify_length;

/// The fixed set of characters counted as symbols (ASCII punctuation, 32 chars).
///
/// Both the complexity predicate and the entropy alphabet use this exact set,
/// so the two signals always agree on what a "symbol" is.
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
