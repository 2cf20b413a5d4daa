//! The fixed six-field record produced by extraction.
//!
//! [`ExtractionResult`] always carries every field. An empty vector is the
//! canonical "unknown" value; there is no missing-key state.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the six fields of an [`ExtractionResult`].
///
/// The declaration order is the wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Academic degrees.
    Degree,
    /// Experience requirements or history.
    Experience,
    /// Hard, tool or domain skills.
    TechnicalSkill,
    /// Duties of the role.
    Responsibility,
    /// Certificates and licenses.
    Certificate,
    /// Interpersonal skills.
    SoftSkill,
}

impl Field {
    /// All fields in wire order.
    pub const ALL: [Field; 6] = [
        Field::Degree,
        Field::Experience,
        Field::TechnicalSkill,
        Field::Responsibility,
        Field::Certificate,
        Field::SoftSkill,
    ];

    /// Returns the JSON key for this field.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Degree => "degree",
            Field::Experience => "experience",
            Field::TechnicalSkill => "technical_skill",
            Field::Responsibility => "responsibility",
            Field::Certificate => "certificate",
            Field::SoftSkill => "soft_skill",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the six fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Structured analysis of a job description or CV.
///
/// Serializes with the field order fixed:
///
/// ```
/// use jobextract::ExtractionResult;
///
/// let json = serde_json::to_string(&ExtractionResult::empty()).unwrap();
/// assert_eq!(
///     json,
///     r#"{"degree":[],"experience":[],"technical_skill":[],"responsibility":[],"certificate":[],"soft_skill":[]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Degrees or fields of study.
    #[serde(default)]
    pub degree: Vec<String>,
    /// Experience, usually with a duration.
    #[serde(default)]
    pub experience: Vec<String>,
    /// Tools, languages and domain skills.
    #[serde(default)]
    pub technical_skill: Vec<String>,
    /// Duties held or required.
    #[serde(default)]
    pub responsibility: Vec<String>,
    /// Certificates and licenses.
    #[serde(default)]
    pub certificate: Vec<String>,
    /// Interpersonal skills.
    #[serde(default)]
    pub soft_skill: Vec<String>,
}

impl ExtractionResult {
    /// Creates a record with every field empty.
    ///
    /// This is what extraction returns when nothing could be decoded.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the values of one field.
    pub fn get(&self, field: Field) -> &[String] {
        match field {
            Field::Degree => &self.degree,
            Field::Experience => &self.experience,
            Field::TechnicalSkill => &self.technical_skill,
            Field::Responsibility => &self.responsibility,
            Field::Certificate => &self.certificate,
            Field::SoftSkill => &self.soft_skill,
        }
    }

    /// Returns a mutable handle to one field.
    pub fn get_mut(&mut self, field: Field) -> &mut Vec<String> {
        match field {
            Field::Degree => &mut self.degree,
            Field::Experience => &mut self.experience,
            Field::TechnicalSkill => &mut self.technical_skill,
            Field::Responsibility => &mut self.responsibility,
            Field::Certificate => &mut self.certificate,
            Field::SoftSkill => &mut self.soft_skill,
        }
    }

    /// Returns true if every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Total number of values across all fields.
    pub fn total_items(&self) -> usize {
        Field::ALL.iter().map(|field| self.get(*field).len()).sum()
    }

    /// Iterates over `(field, values)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
