//! Error types for the completion collaborator and the analyzer.
//!
//! Extraction itself never fails; these errors only describe what can go
//! wrong before a model response exists.

use std::fmt;

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors raised while producing an analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The document to analyze was empty or whitespace only.
    #[error("Refusing to analyze an empty {kind} document")]
    EmptyDocument {
        /// What kind of document was submitted.
        kind: &'static str,
    },

    /// The completion collaborator failed to return any text.
    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),
}

/// Transport-level failures reported by a completion client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// The request never reached the provider or the connection dropped.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider rejected the credentials.
    #[error("Authentication rejected: {0}")]
    Authentication(String),

    /// The provider throttled the request.
    #[error("Rate limited{}", retry_hint(.retry_after_secs))]
    RateLimited {
        /// Seconds the provider asked us to wait, if it said.
        retry_after_secs: Option<u64>,
    },

    /// Any other provider-side failure.
    #[error("Provider error: {0}")]
    Provider(String),
}

fn retry_hint(secs: &Option<u64>) -> String {
    match secs {
        Some(secs) => format!(" (retry after {secs}s)"),
        None => String::new(),
    }
}

impl CompletionError {
    /// Creates a transport error.
    #[inline]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a provider error.
    #[inline]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }
}

/// A decode attempt that did not produce a value.
///
/// Collected into the extraction report; never surfaced as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeAttempt {
    /// Which candidate was tried.
    pub candidate: &'static str,
    /// Why decoding it failed.
    pub error: String,
}

impl DecodeAttempt {
    /// Creates a new failed attempt record.
    #[inline]
    pub fn new(candidate: &'static str, error: impl Into<String>) -> Self {
        Self {
            candidate,
            error: error.into(),
        }
    }
}

impl fmt::Display for DecodeAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.candidate, self.error)
    }
}
