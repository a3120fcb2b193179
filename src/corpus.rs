//! Common-password corpus
//!
//! Loading and querying the set of known-common passwords, plus the
//! fetcher that produces the corpus file from a public password list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Source list used by [`fetch_common_passwords`] when no URL is given
/// (top 10,000 most common passwords).
pub const DEFAULT_CORPUS_URL: &str = "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Passwords/Common-Credentials/10k-most-common.txt";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to download corpus: {0}")]
    Download(#[from] reqwest::Error),
    #[error("failed to write corpus file: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `PWD_CORPUS_PATH`
/// 2. Default path `./assets/common_passwords.txt`
pub fn default_corpus_path() -> PathBuf {
    std::env::var("PWD_CORPUS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common_passwords.txt"))
}

/// An immutable set of known-common passwords.
///
/// Construct it once at startup and pass it by reference into
/// [`analyze_password`](crate::analyze_password); it is read-only and safe
/// to share across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswordSet {
    passwords: HashSet<String>,
}

impl CommonPasswordSet {
    /// Builds the set from raw corpus lines: trimmed, lowercased,
    /// deduplicated, empty lines dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let passwords = lines
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { passwords }
    }

    /// Loads the corpus from a file.
    ///
    /// A missing or unreadable file degrades to the empty set rather than
    /// failing: the classifier then simply never reports a password as
    /// common.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let set = Self::from_lines(content.lines());
                #[cfg(feature = "tracing")]
                tracing::info!("Corpus loaded: {} passwords from {:?}", set.len(), path);
                set
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Corpus file {:?} unavailable ({}), using empty set", path, _e);
                Self::default()
            }
        }
    }

    /// Loads the corpus from [`default_corpus_path`].
    pub fn load_default() -> Self {
        Self::load(default_corpus_path())
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.passwords.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}

/// Downloads a public password list and writes it to `path`, one password
/// per line, as consumed by [`CommonPasswordSet::load`].
///
/// Returns the number of passwords written. Failure is reported to the
/// caller, never retried.
pub fn fetch_common_passwords<P: AsRef<Path>>(
    url: Option<&str>,
    path: P,
) -> Result<usize, CorpusError> {
    let url = url.unwrap_or(DEFAULT_CORPUS_URL);

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.text()?;

    let lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut out = String::with_capacity(body.len());
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    std::fs::write(path, out)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Fetched {} common passwords from {}", lines.len(), url);

    Ok(lines.len())
}
