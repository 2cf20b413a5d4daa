//! The extraction orchestrator.
//!
//! One call walks a fixed sequence of states exactly once:
//!
//! ```text
//! Start -> LocateFence -> Decode -> Project -> Done
//!                           |
//!                           +-> Fallback -> Done
//! ```
//!
//! Nothing is retried and nothing escapes as an error.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::{
    error::DecodeAttempt,
    parser::{self, FenceLocator, FencedBlock, JsonDecoder},
    projector::{FieldProjector, DEFAULT_WRAPPER_KEY},
    schema::{ExtractionResult, Field},
    value::{DecodeOutcome, Decoded, Source},
};

/// Settings for an [`Extractor`].
///
/// Deserializable so it can sit inside a larger service config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Key that wraps the six fields in the model's JSON.
    pub wrapper_key: String,
    /// Whether the whole response is tried after the fenced block.
    pub try_raw_text: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            wrapper_key: DEFAULT_WRAPPER_KEY.to_string(),
            try_raw_text: true,
        }
    }
}

/// Orchestrator states. Each call visits them at most once.
#[derive(Debug)]
enum State<'a> {
    Start,
    LocateFence,
    Decode(Option<FencedBlock<'a>>),
    Project(Decoded),
    Fallback,
    Done(ExtractionResult),
}

/// Side-channel details of one extraction.
///
/// The record itself looks the same for "nothing decoded" and "decoded but
/// empty"; the report is where the difference shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Whether a fenced block was found.
    pub fence_found: bool,
    /// Candidate that decoded, or `None` if extraction fell back.
    pub source: Option<Source>,
    /// Candidates that failed to decode, in the order tried.
    pub failed_attempts: Vec<DecodeAttempt>,
    /// Whether the wrapper key was present in the decoded value.
    pub wrapper_found: bool,
    /// Fields that were absent or not lists.
    pub defaulted: Vec<Field>,
}

impl ExtractionReport {
    /// Returns true if no candidate decoded.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.source.is_none()
    }
}

/// Turns model output into an [`ExtractionResult`].
///
/// Holds no per-call state, so one instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use jobextract::Extractor;
///
/// let extractor = Extractor::new();
/// let record = extractor.extract("```json\n{\"parameters\": {\"degree\": [\"BSc\"]}}\n```");
/// assert_eq!(record.degree, vec!["BSc".to_string()]);
///
/// let record = extractor.extract("Sorry, I cannot analyze this.");
/// assert!(record.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    locator: FenceLocator,
    decoder: JsonDecoder,
    projector: FieldProjector,
    try_raw_text: bool,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Creates an extractor with default settings.
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Creates an extractor from explicit settings.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            locator: FenceLocator,
            decoder: JsonDecoder,
            projector: FieldProjector::new(config.wrapper_key),
            try_raw_text: config.try_raw_text,
        }
    }

    /// Extracts a record from model output. Never fails.
    pub fn extract(&self, raw: &str) -> ExtractionResult {
        self.extract_with_report(raw).0
    }

    /// Extracts a record and reports how it was obtained.
    pub fn extract_with_report(&self, raw: &str) -> (ExtractionResult, ExtractionReport) {
        let mut report = ExtractionReport::default();
        let mut state = State::Start;

        let record = loop {
            trace!(?state, "extraction step");
            state = match state {
                State::Start => State::LocateFence,
                State::LocateFence => {
                    let fence = self.locator.locate(raw);
                    report.fence_found = fence.is_some();
                    State::Decode(fence)
                }
                State::Decode(fence) => {
                    let candidates = parser::candidates(raw, fence, self.try_raw_text);
                    match self.decoder.decode(&candidates) {
                        DecodeOutcome::Decoded { decoded, failed } => {
                            report.failed_attempts = failed;
                            State::Project(decoded)
                        }
                        DecodeOutcome::DecodeFailed { attempts } => {
                            report.failed_attempts = attempts;
                            State::Fallback
                        }
                    }
                }
                State::Project(decoded) => {
                    let (record, projection) = self.projector.project(&decoded.value);
                    report.source = Some(decoded.source);
                    report.wrapper_found = projection.wrapper_found;
                    report.defaulted = projection.defaulted;
                    State::Done(record)
                }
                State::Fallback => {
                    debug!(
                        attempts = report.failed_attempts.len(),
                        "no candidate decoded, returning empty record"
                    );
                    report.defaulted = Field::ALL.to_vec();
                    State::Done(ExtractionResult::empty())
                }
                State::Done(record) => break record,
            };
        };

        (record, report)
    }
}
