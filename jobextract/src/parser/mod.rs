//! Locating and decoding the JSON payload of a model response.
//!
//! Two candidates are tried, in order:
//! 1. the inner text of the first fenced code block, if there is one
//! 2. the whole response

mod candidate;
mod decoder;
mod fence;

pub use candidate::Candidate;
pub use decoder::JsonDecoder;
pub use fence::{FenceLocator, FencedBlock};

/// Builds the ordered candidate list for one response.
///
/// `include_raw` controls whether the whole response follows the fenced
/// block as a second candidate.
pub fn candidates<'a>(
    input: &'a str,
    fence: Option<FencedBlock<'a>>,
    include_raw: bool,
) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::with_capacity(2);

    if let Some(block) = fence {
        candidates.push(Candidate::fenced(block.content, block.lang));
    }
    if include_raw {
        candidates.push(Candidate::raw(input));
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Source;

    #[test]
    fn test_candidate_order() {
        let input = "```json\n{}\n```";
        let list = candidates(input, FenceLocator.locate(input), true);

        assert_eq!(list.len(), 2);
        assert!(matches!(list[0].source, Source::Fenced { .. }));
        assert_eq!(list[1].source, Source::Raw);
        assert_eq!(list[1].content, input);
    }

    #[test]
    fn test_fence_miss_leaves_raw_only() {
        let list = candidates("plain", None, true);
        assert_eq!(list, vec![Candidate::raw("plain")]);
    }

    #[test]
    fn test_raw_disabled() {
        assert!(candidates("plain", None, false).is_empty());
    }
}
