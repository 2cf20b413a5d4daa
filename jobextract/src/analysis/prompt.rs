//! Prompt rendering for job and candidate analyses.

use serde_json::{json, Map, Value};

use crate::schema::Field;

/// What kind of document is being analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    /// A job posting.
    Job,
    /// A candidate's CV.
    Candidate,
}

impl AnalysisKind {
    /// Human-readable name used in prompts and errors.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            AnalysisKind::Job => "job description",
            AnalysisKind::Candidate => "candidate CV",
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            AnalysisKind::Job => "Job Description:",
            AnalysisKind::Candidate => "Candidate CV:",
        }
    }

    fn describe(&self, field: Field) -> &'static str {
        match (self, field) {
            (AnalysisKind::Job, Field::Degree) => "Degrees or fields of study the role requires",
            (AnalysisKind::Job, Field::Experience) => "Required experience, with durations",
            (AnalysisKind::Job, Field::TechnicalSkill) => "Tools, languages and technical skills required",
            (AnalysisKind::Job, Field::Responsibility) => "Main duties of the role",
            (AnalysisKind::Job, Field::Certificate) => "Certificates or licenses required",
            (AnalysisKind::Job, Field::SoftSkill) => "Interpersonal skills required",
            (AnalysisKind::Candidate, Field::Degree) => "Degrees the candidate holds",
            (AnalysisKind::Candidate, Field::Experience) => "Positions held, with durations",
            (AnalysisKind::Candidate, Field::TechnicalSkill) => "Tools, languages and technical skills",
            (AnalysisKind::Candidate, Field::Responsibility) => "Responsibilities carried in past roles",
            (AnalysisKind::Candidate, Field::Certificate) => "Certificates or licenses held",
            (AnalysisKind::Candidate, Field::SoftSkill) => "Interpersonal skills shown",
        }
    }
}

/// Renders the single user prompt sent for one document.
///
/// Layout: system prompt, blank line, labelled document, blank line, an
/// instruction line, then a JSON guide listing the six fields under
/// `parameters`.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_prompt: String,
}

impl PromptBuilder {
    /// Creates a builder with the given system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
        }
    }

    /// Returns the JSON guide describing the expected answer.
    pub fn field_guide(&self, kind: AnalysisKind) -> Value {
        let mut properties = Map::new();
        for field in Field::ALL {
            properties.insert(
                field.as_str().to_string(),
                json!({
                    "type": "array",
                    "items": {"type": "string"},
                    "description": kind.describe(field),
                }),
            );
        }

        let required: Vec<&str> = Field::ALL.iter().map(Field::as_str).collect();

        json!({
            "name": format!("analyse_{}", kind_slug(kind)),
            "description": format!("Extract structured requirements from a {}", kind.name()),
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
            },
        })
    }

    /// Renders the full prompt for one document.
    pub fn render(&self, kind: AnalysisKind, document: &str) -> String {
        format!(
            "{system}\n\n{heading}\n{document}\n\n\
             Please analyze the above {name} and answer with a fenced ```json block \
             shaped as {{\"parameters\": {{...}}}} containing every field below as a list of strings:\n{guide:#}",
            system = self.system_prompt,
            heading = kind.heading(),
            document = document.trim(),
            name = kind.name(),
            guide = self.field_guide(kind),
        )
    }
}

fn kind_slug(kind: AnalysisKind) -> &'static str {
    match kind {
        AnalysisKind::Job => "job",
        AnalysisKind::Candidate => "candidate",
    }
}
