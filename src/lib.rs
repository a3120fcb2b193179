//! Password assessment library
//!
//! Scores a password's structure (length, character-class diversity),
//! estimates its entropy, checks it against a corpus of known-common
//! passwords, and queries an HIBP-style breach database through a
//! k-anonymity range lookup that only ever transmits a 5-character hash
//! prefix. The combined result is an [`AnalysisReport`] for a presentation
//! layer to render.
//!
//! # Features
//!
//! - `async` (default): Enables async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CORPUS_PATH`: Custom path to the common-password corpus file
//!   (default: `./assets/common_passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{analyze_password, CommonPasswordSet, HibpClient};
//! use secrecy::SecretString;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load the corpus once at startup (missing file -> empty set)
//! let corpus = CommonPasswordSet::load_default();
//! let client = HibpClient::new()?;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let report = analyze_password(&password, &corpus, &client, None)?;
//!
//! #[cfg(not(feature = "async"))]
//! let report = analyze_password(&password, &corpus, &client)?;
//!
//! println!("Rating: {}", report.rating);
//! println!("Risk: {}/100", report.risk_score);
//! # Ok(())
//! # }
//! ```

// Internal modules
mod breach;
mod corpus;
mod evaluator;
mod sections;
mod types;

// Public API
pub use breach::{hash_password, split_hash, BreachLookup, HibpClient, HIBP_BASE_URL};
pub use corpus::{
    default_corpus_path, fetch_common_passwords, CommonPasswordSet, CorpusError,
    DEFAULT_CORPUS_URL,
};
pub use evaluator::{aggregate, analyze_password};
pub use sections::{classify_length, estimate_entropy, score_complexity, SYMBOLS};
pub use types::{
    AnalysisError, AnalysisReport, BreachStatus, CharClass, ComplexityResult, LengthClass,
    LengthResult, Rating,
};

#[cfg(feature = "async")]
pub use evaluator::analyze_password_tx;
