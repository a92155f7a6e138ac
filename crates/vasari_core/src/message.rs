//! Message types for model conversations.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a conversation.
///
/// # Examples
///
/// ```
/// use vasari_core::{Message, Role};
///
/// let message = Message {
///     role: Role::User,
///     content: "Build me a todo list app".to_string(),
/// };
///
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Convenience constructor for a user message.
    ///
    /// # Examples
    ///
    /// ```
    /// use vasari_core::{Message, Role};
    ///
    /// let message = Message::user("Hello!");
    /// assert_eq!(message.role, Role::User);
    /// assert_eq!(message.content, "Hello!");
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
