//! Stage response encodings.
//!
//! Model calls have returned their content in several shapes over time: an
//! ordered sequence of content parts, a keyed mapping, a structured block
//! with a `content` value, or plain text. [`StageResponse`] closes that set
//! into one tagged enum so normalization is explicit dispatch instead of
//! open-ended type inspection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One content part in a multi-part response.
///
/// # Examples
///
/// ```
/// use vasari_core::ContentPart;
///
/// let part = ContentPart::text("The key components are ...");
/// assert_eq!(format!("{}", part), "The key components are ...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{}", text)]
pub struct ContentPart {
    /// Part discriminator as reported by the provider (e.g. "text")
    pub kind: String,
    /// The text carried by this part
    pub text: String,
}

impl ContentPart {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// A structured response object exposing a single `content` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// The content value
    pub content: String,
}

/// The raw output of one model call, before normalization.
///
/// The variants are the closed set of response encodings the pipeline knows
/// how to fold into plain text. Anything outside this set never gets
/// constructed; the one in-set failure mode is a [`StageResponse::Keyed`]
/// mapping that lacks a `content` key.
///
/// # Examples
///
/// ```
/// use vasari_core::StageResponse;
///
/// let response = StageResponse::Text("plain".to_string());
/// assert!(matches!(response, StageResponse::Text(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageResponse {
    /// An ordered sequence of content parts
    Parts(Vec<ContentPart>),
    /// A keyed mapping; the text lives under the `content` key
    Keyed(BTreeMap<String, String>),
    /// A structured block exposing a `content` value
    Block(ContentBlock),
    /// Plain text
    Text(String),
}
