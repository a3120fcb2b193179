//! Length section - classifies password length.

use secrecy::{ExposeSecret, SecretString};

use crate::types::{LengthClass, LengthResult};

const ACCEPTABLE_LENGTH: usize = 8;
const STRONG_LENGTH: usize = 12;

/// Classifies the password length into one of three bands.
///
/// Under 8 characters is too short (score 0), 8-11 is acceptable (score 1),
/// 12 or more is strong (score 2). Length is counted in characters, not bytes.
pub fn classify_length(password: &SecretString) -> LengthResult {
    let len = password.expose_secret().chars().count();
    if len < ACCEPTABLE_LENGTH {
        LengthResult {
            class: LengthClass::TooShort,
            score: 0,
        }
    } else if len < STRONG_LENGTH {
        LengthResult {
            class: LengthClass::Acceptable,
            score: 1,
        }
    } else {
        LengthResult {
            class: LengthClass::Strong,
            score: 2,
        }
    }
}
