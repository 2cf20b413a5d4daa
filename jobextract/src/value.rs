//! Decoded values and where they came from.

use std::fmt;

use serde_json::Value;

use crate::error::DecodeAttempt;

/// Where a decoded value was found in the model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Inner text of the first fenced code block.
    Fenced {
        /// Language tag after the opening fence, if any.
        lang: Option<String>,
    },
    /// The whole model output.
    Raw,
}

impl Source {
    /// Short name used in logs and decode attempt records.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Source::Fenced { .. } => "fenced",
            Source::Raw => "raw",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Fenced { lang: Some(lang) } => write!(f, "fenced ({lang})"),
            Source::Fenced { lang: None } => f.write_str("fenced"),
            Source::Raw => f.write_str("raw"),
        }
    }
}

/// A JSON value that decoded strictly from one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The decoded JSON.
    pub value: Value,
    /// Which candidate produced it.
    pub source: Source,
}

impl Decoded {
    /// Wraps a decoded value with its source.
    #[inline]
    pub fn new(value: Value, source: Source) -> Self {
        Self { value, source }
    }
}

/// Outcome of running the decoder over the candidate list.
///
/// Failure is a value, not an error: the orchestrator turns it into the
/// all-empty record.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// A candidate parsed.
    Decoded {
        /// The winning value.
        decoded: Decoded,
        /// Candidates tried before the winner that failed.
        failed: Vec<DecodeAttempt>,
    },
    /// No candidate parsed.
    DecodeFailed {
        /// Every attempt, in the order tried.
        attempts: Vec<DecodeAttempt>,
    },
}

impl DecodeOutcome {
    /// Returns true if a candidate parsed.
    #[inline]
    pub fn is_decoded(&self) -> bool {
        matches!(self, DecodeOutcome::Decoded { .. })
    }

    /// Returns the failed attempts regardless of outcome.
    pub fn attempts(&self) -> &[DecodeAttempt] {
        match self {
            DecodeOutcome::Decoded { failed, .. } => failed,
            DecodeOutcome::DecodeFailed { attempts } => attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_source_display() {
        assert_eq!(
            Source::Fenced {
                lang: Some("json".into())
            }
            .to_string(),
            "fenced (json)"
        );
        assert_eq!(Source::Fenced { lang: None }.to_string(), "fenced");
        assert_eq!(Source::Raw.to_string(), "raw");
        assert_eq!(Source::Raw.name(), "raw");
    }

    #[test]
    fn test_outcome_attempts() {
        let ok = DecodeOutcome::Decoded {
            decoded: Decoded::new(json!({}), Source::Raw),
            failed: vec![DecodeAttempt::new("fenced", "trailing comma")],
        };
        assert!(ok.is_decoded());
        assert_eq!(ok.attempts().len(), 1);

        let failed = DecodeOutcome::DecodeFailed {
            attempts: Vec::new(),
        };
        assert!(!failed.is_decoded());
        assert!(failed.attempts().is_empty());
    }
}
