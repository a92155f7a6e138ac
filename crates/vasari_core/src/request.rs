//! Request types for model generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A generation request: the wire shape is {model, max output tokens,
/// ordered role/content messages}.
///
/// # Examples
///
/// ```
/// use vasari_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest {
///     messages: vec![Message {
///         role: Role::User,
///         content: "Hello!".to_string(),
///     }],
///     max_tokens: Some(100),
///     model: Some("claude-3-opus-20240229".to_string()),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Model identifier to use
    pub model: Option<String>,
}
