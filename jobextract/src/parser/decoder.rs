//! Strict JSON decoding over an ordered candidate list.

use serde_json::Value;
use tracing::trace;

use super::Candidate;
use crate::{
    error::DecodeAttempt,
    value::{DecodeOutcome, Decoded},
};

/// Decodes candidates with `serde_json`, first success wins.
///
/// No repair is attempted: a trailing comma or a single-quoted key makes a
/// candidate fail, and the next one is tried.
///
/// # Examples
///
/// ```
/// use jobextract::parser::{Candidate, JsonDecoder};
///
/// let outcome = JsonDecoder.decode(&[Candidate::raw(r#"{"degree": ["BSc"]}"#)]);
/// assert!(outcome.is_decoded());
///
/// let outcome = JsonDecoder.decode(&[Candidate::raw("{'degree': ['BSc'],}")]);
/// assert!(!outcome.is_decoded());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Tries each candidate in order and returns the first that parses.
    pub fn decode(&self, candidates: &[Candidate<'_>]) -> DecodeOutcome {
        let mut attempts = Vec::new();

        for candidate in candidates {
            match serde_json::from_str::<Value>(candidate.content) {
                Ok(value) => {
                    trace!(source = %candidate.source, "candidate decoded");
                    return DecodeOutcome::Decoded {
                        decoded: Decoded::new(value, candidate.source.clone()),
                        failed: attempts,
                    };
                }
                Err(e) => {
                    trace!(source = %candidate.source, error = %e, "candidate rejected");
                    attempts.push(DecodeAttempt::new(candidate.source.name(), e.to_string()));
                }
            }
        }

        DecodeOutcome::DecodeFailed { attempts }
    }
}
