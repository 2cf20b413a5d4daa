//! Request-side glue: prompt a model about a document, then extract.
//!
//! The [`Analyzer`] owns its [`CompletionClient`]; there is no process-wide
//! client. It makes exactly one completion call per document and passes the
//! returned text, whatever it says, to the [`Extractor`].

mod client;
mod prompt;

pub use client::{CompletionClient, CompletionRequest};
pub use prompt::{AnalysisKind, PromptBuilder};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::{AnalysisError, Result},
    extractor::{Extractor, ExtractorConfig},
    schema::ExtractionResult,
};

/// Default provider model.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default system prompt placed before every document.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an experienced technical recruiter. \
Read the document carefully and list only what it states explicitly. \
Use short phrases, one item per list entry, and leave a list empty when the document says nothing about it.";

/// Settings for an [`Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Provider model identifier.
    pub model: String,
    /// Text placed before the document in every prompt.
    pub system_prompt: String,
    /// Extraction settings.
    pub extractor: ExtractorConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            extractor: ExtractorConfig::default(),
        }
    }
}

/// Analyzes job descriptions and CVs through an injected completion client.
#[derive(Debug)]
pub struct Analyzer<C> {
    client: C,
    model: String,
    prompts: PromptBuilder,
    extractor: Extractor,
}

impl<C: CompletionClient> Analyzer<C> {
    /// Creates an analyzer with default settings.
    pub fn new(client: C) -> Self {
        Self::with_config(client, AnalyzerConfig::default())
    }

    /// Creates an analyzer from explicit settings.
    pub fn with_config(client: C, config: AnalyzerConfig) -> Self {
        Self {
            client,
            model: config.model,
            prompts: PromptBuilder::new(config.system_prompt),
            extractor: Extractor::with_config(config.extractor),
        }
    }

    /// Returns the injected client.
    #[inline]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Analyzes a job description.
    pub fn analyze_job(&self, description: &str) -> Result<ExtractionResult> {
        self.analyze(AnalysisKind::Job, description)
    }

    /// Analyzes the text content of a candidate CV.
    pub fn analyze_candidate(&self, cv_text: &str) -> Result<ExtractionResult> {
        self.analyze(AnalysisKind::Candidate, cv_text)
    }

    /// Renders the prompt, calls the model once, and extracts the answer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyDocument`] for blank input and
    /// [`AnalysisError::Completion`] when the client fails. A response that
    /// cannot be extracted is not an error; it yields the empty record.
    pub fn analyze(&self, kind: AnalysisKind, document: &str) -> Result<ExtractionResult> {
        if document.trim().is_empty() {
            return Err(AnalysisError::EmptyDocument { kind: kind.name() });
        }

        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: self.prompts.render(kind, document),
        };
        debug!(
            kind = kind.name(),
            model = %request.model,
            prompt_len = request.prompt.len(),
            "requesting completion"
        );

        let response = self.client.complete(&request)?;
        let (record, report) = self.extractor.extract_with_report(&response);

        info!(
            kind = kind.name(),
            items = record.total_items(),
            fallback = report.is_fallback(),
            defaulted = report.defaulted.len(),
            "analysis extracted"
        );

        Ok(record)
    }
}
