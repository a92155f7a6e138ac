//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// The sender of a message in a model conversation.
///
/// # Examples
///
/// ```
/// use vasari_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::User), "User");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// User messages are from the human
    User,
    /// Assistant messages are from the model
    Assistant,
}
