//! Locating the first fenced code block in model output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening fence, optional language tag, inner text, closing fence.
///
/// The opening run may be longer than three backticks and the tag may follow
/// spaces. A word only counts as a tag when whitespace or a line break comes
/// after it, so `` ```true``` `` is a block containing `true`. The inner text
/// is matched lazily so the first closing fence ends the block; a closing run
/// is not required to match the opening run's length.
static FENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```+[ \t]*(?:([A-Za-z0-9_.+-]+)(?:[ \t]*\r?\n|[ \t]+))?(.*?)```")
        .expect("Invalid fence regex pattern")
});

/// Inner text of a fenced block, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// Language tag after the opening fence (`json`, `jsonc`, ...), if any.
    pub lang: Option<&'a str>,
    /// Text between the fences, trimmed of surrounding whitespace.
    pub content: &'a str,
}

/// Finds the first complete triple-backtick block in a model response.
///
/// Only the first block is ever returned. An opening fence without a
/// closing one is not a block.
///
/// # Examples
///
/// ```
/// use jobextract::parser::FenceLocator;
///
/// let input = "Here you go:\n```json\n{\"degree\": [\"BSc\"]}\n```\nAnything else?";
/// let block = FenceLocator.locate(input).unwrap();
/// assert_eq!(block.lang, Some("json"));
/// assert_eq!(block.content, "{\"degree\": [\"BSc\"]}");
///
/// assert!(FenceLocator.locate("```json\n{\"degree\": []}").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FenceLocator;

impl FenceLocator {
    /// Returns the first fenced block, or `None` if no fence pair exists.
    pub fn locate<'a>(&self, input: &'a str) -> Option<FencedBlock<'a>> {
        let captures = FENCE_REGEX.captures(input)?;
        let lang = captures
            .get(1)
            .map(|m| m.as_str())
            .filter(|tag| !tag.is_empty());
        let content = captures.get(2)?.as_str().trim();

        Some(FencedBlock { lang, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_tagged_block() {
        let input = "Analysis:\n```json\n{\"a\": 1}\n```\n";
        let block = FenceLocator.locate(input).unwrap();

        assert_eq!(block.lang, Some("json"));
        assert_eq!(block.content, "{\"a\": 1}");
    }

    #[test]
    fn test_untagged_block() {
        let block = FenceLocator.locate("```\n[1, 2]\n```").unwrap();

        assert_eq!(block.lang, None);
        assert_eq!(block.content, "[1, 2]");
    }

    #[test]
    fn test_inline_block_without_newline() {
        let block = FenceLocator.locate(r#"```{"a": 1}```"#).unwrap();

        assert_eq!(block.lang, None);
        assert_eq!(block.content, r#"{"a": 1}"#);
    }

    #[test]
    fn test_crlf_after_tag() {
        let block = FenceLocator.locate("```json\r\n{}\r\n```").unwrap();

        assert_eq!(block.lang, Some("json"));
        assert_eq!(block.content, "{}");
    }

    #[test]
    fn test_no_fence() {
        assert!(FenceLocator.locate("Sorry, I cannot analyze this.").is_none());
        assert!(FenceLocator.locate("").is_none());
    }

    #[test]
    fn test_unclosed_fence_is_not_a_match() {
        let input = "```json\n{\"degree\": [\"BSc\"]}\n";
        assert!(FenceLocator.locate(input).is_none());
    }

    #[test]
    fn test_only_first_block_is_returned() {
        let input = "```json\n{invalid}\n```\n\n```json\n{\"ok\": true}\n```";
        let block = FenceLocator.locate(input).unwrap();

        assert_eq!(block.content, "{invalid}");
    }

    #[test]
    fn test_tag_after_space() {
        let block = FenceLocator.locate("Here:\n``` json\n{\"a\": 1}\n```\nThanks").unwrap();

        assert_eq!(block.lang, Some("json"));
        assert_eq!(block.content, "{\"a\": 1}");

        let block = FenceLocator.locate("```\tjson  \n[]\n```").unwrap();
        assert_eq!(block.lang, Some("json"));
        assert_eq!(block.content, "[]");
    }

    #[test]
    fn test_inline_word_is_content_not_tag() {
        let block = FenceLocator.locate("```true```").unwrap();

        assert_eq!(block.lang, None);
        assert_eq!(block.content, "true");
    }

    #[test]
    fn test_tag_followed_by_inline_content() {
        let block = FenceLocator.locate(r#"```json {"a": 1}```"#).unwrap();

        assert_eq!(block.lang, Some("json"));
        assert_eq!(block.content, r#"{"a": 1}"#);
    }

    #[test]
    fn test_four_backtick_fence() {
        let block = FenceLocator.locate("````json\n{\"a\": 1}\n````").unwrap();

        assert_eq!(block.lang, Some("json"));
        assert_eq!(block.content, "{\"a\": 1}");
    }

    #[test]
    fn test_empty_block() {
        let block = FenceLocator.locate("``````").unwrap();
        assert_eq!(block.content, "");
    }
}
