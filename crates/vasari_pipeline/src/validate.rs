//! Syntax validation for generated scripts.

use crate::ScriptBatch;
use tree_sitter::Parser;
use vasari_error::{ScriptError, ScriptErrorKind};

/// Syntax-only validator for generated Python scripts.
///
/// Builds a syntax tree for each script without executing anything.
/// Validation is pure apart from logging.
pub struct ScriptValidator {
    parser: Parser,
}

impl ScriptValidator {
    /// Create a validator with the Python grammar loaded.
    ///
    /// # Errors
    ///
    /// Fails when the grammar cannot be loaded into the parser (ABI
    /// version mismatch).
    pub fn new() -> Result<Self, ScriptError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ScriptError::new(ScriptErrorKind::Parser(e.to_string())))?;
        Ok(Self { parser })
    }

    /// Check that every script in the batch parses cleanly.
    ///
    /// Returns `true` only if every member parses without error nodes. On
    /// the first failure, logs the offending script and returns `false`
    /// for the whole batch. An empty batch is vacuously valid.
    pub fn validate(&mut self, batch: &ScriptBatch) -> bool {
        for (index, script) in batch.scripts().iter().enumerate() {
            let Some(tree) = self.parser.parse(script.as_str(), None) else {
                tracing::error!(index, "Parser produced no tree for generated script");
                return false;
            };
            if tree.root_node().has_error() {
                tracing::error!(index, script = %script, "Syntax error in generated script");
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract_scripts;

    fn batch_of(scripts: &[&str]) -> ScriptBatch {
        ScriptBatch::new(scripts.iter().map(|s| s.to_string()).collect(), false)
    }

    #[test]
    fn accepts_a_batch_of_valid_scripts() {
        let mut validator = ScriptValidator::new().unwrap();
        let batch = batch_of(&[
            "import os\nos.makedirs('app', exist_ok=True)",
            "with open('app/main.py', 'w') as f:\n    f.write('print(1)')",
        ]);
        assert!(validator.validate(&batch));
    }

    #[test]
    fn rejects_the_whole_batch_on_one_invalid_member() {
        let mut validator = ScriptValidator::new().unwrap();
        let batch = batch_of(&["print('fine')", "print((1, 2)", "print('also fine')"]);
        assert!(!validator.validate(&batch));
    }

    #[test]
    fn empty_batch_is_vacuously_valid() {
        let mut validator = ScriptValidator::new().unwrap();
        assert!(validator.validate(&ScriptBatch::default()));
    }

    #[test]
    fn validates_scripts_straight_from_extraction() {
        let mut validator = ScriptValidator::new().unwrap();
        let text = "```python\nfor i in range(3):\n    print(i)\n```";
        assert!(validator.validate(&extract_scripts(text, "python")));

        let broken = "```python\ndef f(:\n    pass\n```";
        assert!(!validator.validate(&extract_scripts(broken, "python")));
    }
}
