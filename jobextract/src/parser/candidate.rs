//! Candidate substrings handed to the decoder.

use crate::value::Source;

/// A substring of the model output that might decode as JSON.
///
/// Borrowed from the input; candidates never outlive one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// The text to decode.
    pub content: &'a str,
    /// Where the text came from.
    pub source: Source,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate from the inner text of a fenced block.
    pub fn fenced(content: &'a str, lang: Option<&str>) -> Self {
        Self {
            content,
            source: Source::Fenced {
                lang: lang.map(str::to_string),
            },
        }
    }

    /// Creates a candidate covering the whole model output.
    pub fn raw(content: &'a str) -> Self {
        Self {
            content,
            source: Source::Raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_candidate() {
        let candidate = Candidate::fenced(r#"{"degree": []}"#, Some("json"));
        assert_eq!(candidate.content, r#"{"degree": []}"#);
        assert_eq!(
            candidate.source,
            Source::Fenced {
                lang: Some("json".to_string())
            }
        );
    }

    #[test]
    fn test_raw_candidate() {
        let candidate = Candidate::raw("anything");
        assert_eq!(candidate.source, Source::Raw);
    }
}
