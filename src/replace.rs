use regex::Regex;
use std::fmt;

/// Comment marking the start of the Our Story section.
pub const START_MARKER: &str = "<!-- ===== OUR STORY ===== -->";

/// Closing tag terminating the section.
pub const END_MARKER: &str = "</section>";

/// Comment that must follow the section (after a blank line) for a match
/// boundary to be accepted; end of document stands in for it.
pub const ANCHOR_MARKER: &str = "<!-- ===== NUTRITION SECTION REMOVED =====";

pub struct SectionReplace;

impl SectionReplace {
    /// Replace the Our Story section of `content` with `replacement`,
    /// trimmed of leading and trailing whitespace.
    ///
    /// The section runs from the start marker through a closing tag whose
    /// end is confirmed by the anchor comment (preceded by a blank line) or
    /// by the end of the document. Returns the new text and the number of
    /// replacements made (0 or 1); no match leaves the text unchanged.
    pub fn replace_section(
        content: &str,
        replacement: &str,
    ) -> Result<(String, usize), ReplaceError> {
        let pattern = format!(
            "(?s){}.*?{}",
            regex::escape(START_MARKER),
            regex::escape(END_MARKER)
        );
        let regex = Regex::new(&pattern)
            .map_err(|e| ReplaceError::InvalidPattern(format!("Invalid regex: {e}")))?;

        let candidate = match regex.find(content) {
            Some(m) => m,
            None => return Ok((content.to_string(), 0)),
        };

        let start = candidate.start();
        let mut tag_end = candidate.end();

        loop {
            if let Some(end) = Self::verified_end(content, tag_end) {
                let replacement = replacement.trim();
                let mut result =
                    String::with_capacity(content.len() - (end - start) + replacement.len());
                result.push_str(&content[..start]);
                result.push_str(replacement);
                result.push_str(&content[end..]);
                return Ok((result, 1));
            }

            // Boundary not confirmed; extend the span to the next closing tag
            match content[tag_end..].find(END_MARKER) {
                Some(pos) => tag_end += pos + END_MARKER.len(),
                None => return Ok((content.to_string(), 0)),
            }
        }
    }

    /// Confirm where a span ending at `tag_end` actually stops.
    ///
    /// Whitespace after the closing tag belongs to the span, but the anchor
    /// comment check needs its blank line intact, so the positions inside
    /// the whitespace run are tried longest-first: the span ends at the
    /// first position whose remaining text is empty or starts with a blank
    /// line followed by the anchor comment.
    fn verified_end(content: &str, tag_end: usize) -> Option<usize> {
        let tail = &content[tag_end..];

        let mut stops = vec![0];
        for (idx, ch) in tail.char_indices() {
            if !ch.is_whitespace() {
                break;
            }
            stops.push(idx + ch.len_utf8());
        }

        for &offset in stops.iter().rev() {
            let rest = &tail[offset..];
            if rest.is_empty() {
                return Some(tag_end + offset);
            }
            if let Some(after_blank) = rest.strip_prefix("\n\n") {
                if after_blank.starts_with(ANCHOR_MARKER) {
                    return Some(tag_end + offset);
                }
            }
        }

        None
    }
}

#[derive(Debug, Clone)]
pub enum ReplaceError {
    InvalidPattern(String),
}

impl fmt::Display for ReplaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplaceError::InvalidPattern(msg) => write!(f, "Replace error: {msg}"),
        }
    }
}
