//! Password analysis pipeline - orchestration and aggregation.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::breach::BreachLookup;
use crate::corpus::CommonPasswordSet;
use crate::sections::{classify_length, estimate_entropy, score_complexity};
use crate::types::{
    AnalysisError, AnalysisReport, BreachStatus, ComplexityResult, LengthResult, Rating,
};

const WEAK_ENTROPY_BITS: f64 = 40.0;
const STRONG_ENTROPY_BITS: f64 = 60.0;

/// Runs the full analysis pipeline over one password.
///
/// The pipeline is a single synchronous pass: length, complexity, entropy,
/// common-password check, breach lookup, aggregation. Only the breach
/// lookup can block, bounded by the client's own timeout.
///
/// # Arguments
/// * `password` - The password to analyze
/// * `corpus` - Known-common password set, checked case-insensitively
/// * `breach` - Breach lookup capability (real client or test stub)
/// * `token` - Optional cancellation token (async feature only); a token
///   cancelled before the network step records the breach status as
///   [`BreachStatus::Unknown`] instead of querying
///
/// # Errors
/// [`AnalysisError::EmptyPassword`] if the password is empty; nothing is
/// scored in that case.
pub fn analyze_password<B: BreachLookup>(
    password: &SecretString,
    corpus: &CommonPasswordSet,
    breach: &B,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<AnalysisReport, AnalysisError> {
    if password.expose_secret().is_empty() {
        return Err(AnalysisError::EmptyPassword);
    }

    let length = classify_length(password);
    let complexity = score_complexity(password);
    let entropy_bits = estimate_entropy(password);
    let is_common = corpus.contains(password.expose_secret());

    #[cfg(feature = "async")]
    let breach_status = match token {
        Some(ref t) if t.is_cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("Breach lookup skipped: analysis cancelled");
            BreachStatus::Unknown
        }
        _ => breach.lookup(password),
    };

    #[cfg(not(feature = "async"))]
    let breach_status = breach.lookup(password);

    Ok(aggregate(
        length,
        complexity,
        entropy_bits,
        is_common,
        breach_status,
    ))
}

/// Combines the per-signal results into the final report.
///
/// Pure function of its inputs. Rating rules: `Weak` whenever the password
/// is common, has a confirmed breach count, or estimates under 40 bits;
/// `Moderate` under 60 bits; `Strong` otherwise. An `Unknown` breach
/// status never demotes the rating on its own.
///
/// Risk starts at 100 and is reduced by entropy and the structural scores;
/// a confirmed breach forces it back to 100. The result is clamped to
/// 0-100 and truncated to an integer.
pub fn aggregate(
    length: LengthResult,
    complexity: ComplexityResult,
    entropy_bits: f64,
    is_common: bool,
    breach: BreachStatus,
) -> AnalysisReport {
    let rating = if is_common || breach.is_breached() || entropy_bits < WEAK_ENTROPY_BITS {
        Rating::Weak
    } else if entropy_bits < STRONG_ENTROPY_BITS {
        Rating::Moderate
    } else {
        Rating::Strong
    };

    let mut risk = 100.0;
    risk -= entropy_bits / 2.0;
    risk -= f64::from(complexity.score) * 10.0;
    risk -= f64::from(length.score) * 5.0;
    if breach.is_breached() {
        risk = 100.0;
    }
    let risk_score = risk.clamp(0.0, 100.0).trunc() as u8;

    AnalysisReport {
        length,
        complexity,
        entropy_bits,
        is_common,
        breach,
        rating,
        risk_score,
    }
}

/// Async version that sends the analysis result via channel.
#[cfg(feature = "async")]
pub async fn analyze_password_tx<B: BreachLookup>(
    password: &SecretString,
    corpus: &CommonPasswordSet,
    breach: &B,
    token: CancellationToken,
    tx: mpsc::Sender<Result<AnalysisReport, AnalysisError>>,
) {
    let result = analyze_password(password, corpus, breach, Some(token));

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", e);
        let _ = e;
    }
}
