//! Prompt intake validation.

use vasari_error::{PipelineError, PipelineErrorKind};

/// Minimum number of whitespace-delimited words a prompt must contain.
pub const MIN_PROMPT_WORDS: usize = 5;

/// A validated user prompt.
///
/// The only constructor enforces the intake invariant, so holding a
/// `Prompt` means the word-count check already passed and no model call
/// was wasted on an undersized sentence.
///
/// # Examples
///
/// ```
/// use vasari_pipeline::Prompt;
///
/// let prompt = Prompt::parse("Build a todo list web application").unwrap();
/// assert_eq!(prompt.word_count(), 6);
///
/// assert!(Prompt::parse("too short").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", text)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    /// Validate a raw input line into a prompt.
    ///
    /// # Errors
    ///
    /// Fails with `PromptTooShort` when the input has fewer than
    /// [`MIN_PROMPT_WORDS`] words.
    pub fn parse(input: &str) -> Result<Self, PipelineError> {
        let words = input.split_whitespace().count();
        if words < MIN_PROMPT_WORDS {
            return Err(PipelineError::new(PipelineErrorKind::PromptTooShort {
                words,
                minimum: MIN_PROMPT_WORDS,
            }));
        }
        Ok(Self {
            text: input.trim().to_string(),
        })
    }

    /// The validated prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of whitespace-delimited words in the prompt.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_prompts_under_the_minimum() {
        let err = Prompt::parse("make me an app").unwrap_err();
        assert!(matches!(
            err.kind,
            PipelineErrorKind::PromptTooShort {
                words: 4,
                minimum: MIN_PROMPT_WORDS
            }
        ));
    }

    #[test]
    fn accepts_prompts_at_the_minimum() {
        let prompt = Prompt::parse("make me a recipe app").unwrap();
        assert_eq!(prompt.word_count(), 5);
        assert_eq!(prompt.text(), "make me a recipe app");
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert!(Prompt::parse("   \t  ").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let prompt = Prompt::parse("  build a photo sharing site  ").unwrap();
        assert_eq!(prompt.text(), "build a photo sharing site");
    }
}
