//! Utilities for extracting usable text and scripts from model responses.
//!
//! Model responses arrive in a handful of shapes and bury executable code
//! in markdown fences mixed with explanatory prose. This module folds a
//! [`StageResponse`] into plain text and splits fenced code segments out of
//! that text.

use vasari_core::StageResponse;
use vasari_error::{ModelsError, ModelsErrorKind, VasariResult};

/// Normalize a stage response into a single text value.
///
/// Dispatch over the closed encoding set, in order of precedence:
/// part sequences join their texts with a single space; keyed mappings
/// yield the value under `content`; blocks yield their content value;
/// plain text passes through unchanged.
///
/// # Errors
///
/// Fails with `UnsupportedResponseShape` when a keyed mapping has no
/// `content` entry.
///
/// # Examples
///
/// ```
/// use vasari_core::StageResponse;
/// use vasari_pipeline::extract_text;
///
/// let response = StageResponse::Text("already plain".to_string());
/// assert_eq!(extract_text(&response).unwrap(), "already plain");
/// ```
pub fn extract_text(response: &StageResponse) -> VasariResult<String> {
    match response {
        StageResponse::Parts(parts) => Ok(parts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")),
        StageResponse::Keyed(map) => map.get("content").cloned().ok_or_else(|| {
            tracing::error!(
                keys = ?map.keys().collect::<Vec<_>>(),
                "Keyed response has no content entry"
            );
            ModelsError::new(ModelsErrorKind::UnsupportedResponseShape(
                "keyed mapping without a content entry".to_string(),
            ))
            .into()
        }),
        StageResponse::Block(block) => Ok(block.content.clone()),
        StageResponse::Text(text) => Ok(text.clone()),
    }
}

const FENCE: &str = "```";

/// The ordered scripts extracted from one stage response.
///
/// Validity is all-or-nothing: the batch is accepted for execution only if
/// every member passes syntax validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptBatch {
    scripts: Vec<String>,
    unterminated: bool,
}

impl ScriptBatch {
    /// Create a batch from extracted scripts.
    pub fn new(scripts: Vec<String>, unterminated: bool) -> Self {
        Self {
            scripts,
            unterminated,
        }
    }

    /// The extracted scripts, in source order.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Number of scripts in the batch.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Whether the batch holds no scripts.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Whether an opening fence had no closing fence and its trailing
    /// content was dropped.
    pub fn unterminated(&self) -> bool {
        self.unterminated
    }
}

/// Split fenced code segments out of a text blob.
///
/// Scans for an opening fence (the delimiter followed by `tag`) and takes
/// everything up to the next bare delimiter as one script, repeating until
/// the text is exhausted. A text with no fence markers yields an empty
/// batch. An opening fence with no closing fence drops the trailing
/// content; the drop is recorded on the batch rather than silent.
///
/// # Examples
///
/// ```
/// use vasari_pipeline::extract_scripts;
///
/// let text = "Here you go:\n```python\nprint('hi')\n```\ndone";
/// let batch = extract_scripts(text, "python");
/// assert_eq!(batch.scripts(), ["print('hi')"]);
/// ```
pub fn extract_scripts(text: &str, tag: &str) -> ScriptBatch {
    let open = format!("{FENCE}{tag}");
    let mut scripts = Vec::new();
    let mut unterminated = false;
    let mut rest = text;

    while let Some(start) = rest.find(&open) {
        let body = &rest[start + open.len()..];
        match body.find(FENCE) {
            Some(end) => {
                scripts.push(body[..end].trim().to_string());
                rest = &body[end + FENCE.len()..];
            }
            None => {
                unterminated = true;
                tracing::warn!(
                    tag,
                    dropped_len = body.len(),
                    "Opening fence without closing fence, dropping trailing content"
                );
                break;
            }
        }
    }

    ScriptBatch::new(scripts, unterminated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use vasari_core::{ContentBlock, ContentPart};
    use vasari_error::VasariErrorKind;

    #[test]
    fn joins_part_sequences_with_a_single_space() {
        let response = StageResponse::Parts(vec![
            ContentPart::text("The key components are X."),
            ContentPart::text("Requirements: Y."),
        ]);
        assert_eq!(
            extract_text(&response).unwrap(),
            "The key components are X. Requirements: Y."
        );
    }

    #[test]
    fn keyed_mapping_yields_content_entry() {
        let mut map = BTreeMap::new();
        map.insert("content".to_string(), "the payload".to_string());
        map.insert("role".to_string(), "assistant".to_string());
        assert_eq!(
            extract_text(&StageResponse::Keyed(map)).unwrap(),
            "the payload"
        );
    }

    #[test]
    fn keyed_mapping_without_content_fails() {
        let mut map = BTreeMap::new();
        map.insert("role".to_string(), "assistant".to_string());
        let err = extract_text(&StageResponse::Keyed(map)).unwrap_err();
        assert!(matches!(err.kind(), VasariErrorKind::Models(_)));
    }

    #[test]
    fn block_yields_its_content_value() {
        let response = StageResponse::Block(ContentBlock {
            content: "block text".to_string(),
        });
        assert_eq!(extract_text(&response).unwrap(), "block text");
    }

    #[test]
    fn plain_text_is_unchanged() {
        let response = StageResponse::Text("already plain".to_string());
        assert_eq!(extract_text(&response).unwrap(), "already plain");
    }

    #[test]
    fn extracts_each_fenced_segment_in_order() {
        let text = "First:\n```python\nprint(1)\n```\nSecond:\n```python\nprint(2)\n```\n";
        let batch = extract_scripts(text, "python");
        assert_eq!(batch.scripts(), ["print(1)", "print(2)"]);
        assert!(!batch.unterminated());
    }

    #[test]
    fn no_fence_markers_yields_empty_batch() {
        let batch = extract_scripts("just prose, no code here", "python");
        assert!(batch.is_empty());
        assert!(!batch.unterminated());
    }

    #[test]
    fn other_language_fences_are_ignored() {
        let text = "```bash\nls -la\n```\n```python\nprint('ok')\n```";
        let batch = extract_scripts(text, "python");
        assert_eq!(batch.scripts(), ["print('ok')"]);
    }

    #[test]
    fn unterminated_fence_drops_trailing_content() {
        let text = "```python\nprint(1)\n```\n```python\nprint(2) # never closed";
        let batch = extract_scripts(text, "python");
        assert_eq!(batch.scripts(), ["print(1)"]);
        assert!(batch.unterminated());
    }
}
