//! Breach lookup client
//!
//! k-anonymity range queries against an HIBP-style breach-count service.
//! Only the first five characters of the password's SHA-1 hash ever leave
//! the process; the exact suffix match happens locally.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::types::BreachStatus;

/// Production breach-count service.
pub const HIBP_BASE_URL: &str = "https://api.pwnedpasswords.com";

const PREFIX_LEN: usize = 5;
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// A breach-count lookup capability.
///
/// The evaluator only depends on this trait: production wires in
/// [`HibpClient`], tests wire in a stub. Implementations must report
/// failure as [`BreachStatus::Unknown`] instead of panicking, and must
/// never transmit more than a 5-character hash prefix.
pub trait BreachLookup {
    fn lookup(&self, password: &SecretString) -> BreachStatus;
}

/// SHA-1 hash of the password's UTF-8 bytes as an uppercase hex string.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Splits a SHA-1 hex hash into its 5-char prefix and 35-char suffix.
pub fn split_hash(hash: &str) -> (&str, &str) {
    hash.split_at(PREFIX_LEN)
}

#[derive(Error, Debug, PartialEq, Eq)]
enum RangeError {
    #[error("range response line has no ':' separator")]
    MissingSeparator,
    #[error("range response count is not numeric")]
    BadCount,
}

/// Scans a `SUFFIX:COUNT` range body for an exact suffix match.
///
/// Returns the matching line's count, or 0 when the range contains no
/// match (confirmed not breached). A malformed body is an error so the
/// caller can degrade to [`BreachStatus::Unknown`].
fn scan_range(body: &str, suffix: &str) -> Result<u64, RangeError> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (hash_suffix, count) = line.split_once(':').ok_or(RangeError::MissingSeparator)?;
        if hash_suffix == suffix {
            return count.trim().parse().map_err(|_| RangeError::BadCount);
        }
    }
    Ok(0)
}

/// HTTP client for the k-anonymity range endpoint.
pub struct HibpClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HibpClient {
    /// Builds a client against the production service with a bounded
    /// request timeout.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base_url(HIBP_BASE_URL)
    }

    /// Builds a client against a custom service base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .user_agent(concat!("pwd-audit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn query_range(&self, prefix: &str) -> Result<String, reqwest::Error> {
        let url = format!("{}/range/{}", self.base_url, prefix);
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

impl BreachLookup for HibpClient {
    /// Looks up the password's breach count.
    ///
    /// Any transport failure, non-success status, or malformed response
    /// degrades to [`BreachStatus::Unknown`]; the analysis never fails on
    /// account of the network.
    fn lookup(&self, password: &SecretString) -> BreachStatus {
        let full_hash = hash_password(password.expose_secret());
        let (prefix, suffix) = split_hash(&full_hash);

        let body = match self.query_range(prefix) {
            Ok(body) => body,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach range query failed: {}", _e);
                return BreachStatus::Unknown;
            }
        };

        match scan_range(&body, suffix) {
            Ok(count) => BreachStatus::Known(count),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach range response malformed: {}", _e);
                BreachStatus::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_known_value() {
        // Known SHA-1 hash of "password"
        assert_eq!(
            hash_password("password"),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"
        );
    }

    #[test]
    fn test_split_hash() {
        let hash = "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8";
        let (prefix, suffix) = split_hash(hash);
        assert_eq!(prefix, "5BAA6");
        assert_eq!(suffix, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn test_split_hash_lossless() {
        for pwd in ["password", "Tr0ub4dor&3", "", "ümlaut"] {
            let hash = hash_password(pwd);
            assert_eq!(hash.len(), 40);
            let (prefix, suffix) = split_hash(&hash);
            assert_eq!(prefix.len(), 5);
            assert_eq!(suffix.len(), 35);
            assert_eq!(format!("{}{}", prefix, suffix), hash);
        }
    }

    #[test]
    fn test_scan_range_match_found() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:3861493\n\
                    011053FD0102E94D6AE2F8B83D76FAF94F6:10";
        let count = scan_range(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(count, Ok(3_861_493));
    }

    #[test]
    fn test_scan_range_no_match_is_zero() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n\
                    011053FD0102E94D6AE2F8B83D76FAF94F6:10";
        let count = scan_range(body, "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
        assert_eq!(count, Ok(0));
    }

    #[test]
    fn test_scan_range_empty_body_is_zero() {
        assert_eq!(scan_range("", "ABCDEF"), Ok(0));
    }

    #[test]
    fn test_scan_range_missing_separator() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65";
        let result = scan_range(body, "0018A45C4D1DEF81644B54AB7F969B88D65");
        assert_eq!(result, Err(RangeError::MissingSeparator));
    }

    #[test]
    fn test_scan_range_non_numeric_count() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:lots";
        let result = scan_range(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(result, Err(RangeError::BadCount));
    }

    #[test]
    fn test_scan_range_trailing_newline() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:5\n";
        assert_eq!(scan_range(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8"), Ok(5));
    }

    #[test]
    fn test_lookup_unreachable_service_is_unknown() {
        // Discard port: connection is refused, the analysis must degrade
        let client = HibpClient::with_base_url("http://127.0.0.1:9").expect("client");
        let pwd = SecretString::new("password".to_string().into());
        assert_eq!(client.lookup(&pwd), BreachStatus::Unknown);
    }
}
