//! # jobextract
//!
//! Turns free-form LLM analyses of job descriptions and CVs into a fixed,
//! six-field record.
//!
//! Model answers are messy: sometimes a fenced JSON block followed by prose,
//! sometimes bare JSON, sometimes an apology. Extraction handles all of them
//! and always returns a well-formed [`ExtractionResult`]:
//!
//! - the first fenced code block is tried, then the whole response
//! - decoding is strict JSON, no repair
//! - fields are read from under `parameters`, or from the top level if that
//!   key is missing
//! - every field that is missing or not a list becomes empty on its own
//!
//! ## Quick Start
//!
//! ```rust
//! use jobextract::extract;
//!
//! let response = "Here is the analysis:\n\
//!     ```json\n\
//!     {\"parameters\": {\"degree\": [\"BSc\"], \"experience\": [\"3 years\"]}}\n\
//!     ```\n\
//!     Hope this helps!";
//!
//! let record = extract(response);
//! assert_eq!(record.degree, vec!["BSc".to_string()]);
//! assert_eq!(record.experience, vec!["3 years".to_string()]);
//! assert!(record.technical_skill.is_empty());
//!
//! // Anything unusable yields the all-empty record
//! assert!(extract("Sorry, I cannot analyze this.").is_empty());
//! ```
//!
//! ## Calling a model
//!
//! [`analysis::Analyzer`] renders the prompt, calls an injected
//! [`analysis::CompletionClient`] once, and extracts the reply.

pub mod analysis;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod projector;
pub mod schema;
pub mod value;

pub use extractor::{ExtractionReport, Extractor, ExtractorConfig};
pub use schema::{ExtractionResult, Field};

/// Extracts a record from model output with default settings.
///
/// This never fails: when nothing can be decoded, every field is empty.
///
/// # Examples
///
/// ```
/// use jobextract::extract;
///
/// let record = extract(r#"{"technical_skill": ["Rust", "PostgreSQL"]}"#);
/// assert_eq!(record.technical_skill.len(), 2);
/// ```
pub fn extract(raw: &str) -> ExtractionResult {
    Extractor::new().extract(raw)
}

/// Extracts a record and reports which candidate produced it.
///
/// # Examples
///
/// ```
/// use jobextract::extract_with_report;
///
/// let (record, report) = extract_with_report("not json");
/// assert!(record.is_empty());
/// assert!(report.is_fallback());
///
/// let (record, report) = extract_with_report("{}");
/// assert!(record.is_empty());
/// assert!(!report.is_fallback());
/// ```
pub fn extract_with_report(raw: &str) -> (ExtractionResult, ExtractionReport) {
    Extractor::new().extract_with_report(raw)
}
