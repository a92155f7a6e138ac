//! Sequential execution of validated script batches.

use crate::ScriptBatch;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{error, info, instrument};
use vasari_interface::{ExecutionOutcome, ExecutionStatus};

/// Relative path of the reused scratch file.
pub const DEFAULT_SCRATCH_PATH: &str = "temp_script.py";

/// Interpreter invoked on each scratch file.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Single-owner scope around the scratch path: acquiring writes the script,
/// releasing removes the file. Exactly one `ScratchScript` exists at a time,
/// which is what makes the shared path safe under sequential execution.
struct ScratchScript {
    path: PathBuf,
}

impl ScratchScript {
    fn write(path: &Path, script: &str) -> std::io::Result<Self> {
        std::fs::write(path, script)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn release(self) -> std::io::Result<()> {
        std::fs::remove_file(&self.path)
    }
}

/// Runs a validated script batch, one script at a time.
///
/// Each script is written to the one reused scratch path, invoked as a
/// child process, and removed on success. Execution order matches batch
/// order; a failing script is logged and recorded without aborting its
/// siblings. The failing script's scratch file is left in place for
/// inspection and overwritten by the next iteration.
#[derive(Debug, Clone)]
pub struct ScriptExecutor {
    scratch_path: PathBuf,
    interpreter: String,
}

impl Default for ScriptExecutor {
    fn default() -> Self {
        Self {
            scratch_path: PathBuf::from(DEFAULT_SCRATCH_PATH),
            interpreter: DEFAULT_INTERPRETER.to_string(),
        }
    }
}

impl ScriptExecutor {
    /// Create an executor with the default scratch path and interpreter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the scratch path.
    pub fn with_scratch_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scratch_path = path.into();
        self
    }

    /// Override the interpreter binary.
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Execute every script in the batch, in order.
    ///
    /// Returns one outcome per script. Never fails as a whole: per-script
    /// failures are recorded and skipped.
    #[instrument(skip(self, batch), fields(script_count = batch.len(), interpreter = %self.interpreter))]
    pub async fn execute(&self, batch: &ScriptBatch) -> Vec<ExecutionOutcome> {
        info!("Starting script execution");
        let bar = ProgressBar::new(batch.len() as u64);
        let mut outcomes = Vec::with_capacity(batch.len());

        for (index, script) in batch.scripts().iter().enumerate() {
            let status = self.run_script(script).await;
            if let ExecutionStatus::Failed(reason) = &status {
                error!(index, reason = %reason, "Error executing script");
            }
            outcomes.push(ExecutionOutcome { index, status });
            bar.inc(1);
        }

        bar.finish_and_clear();
        info!("Script execution completed");
        outcomes
    }

    async fn run_script(&self, script: &str) -> ExecutionStatus {
        let scratch = match ScratchScript::write(&self.scratch_path, script) {
            Ok(scratch) => scratch,
            Err(e) => {
                return ExecutionStatus::Failed(format!(
                    "failed to write {}: {}",
                    self.scratch_path.display(),
                    e
                ));
            }
        };

        match Command::new(&self.interpreter)
            .arg(scratch.path())
            .status()
            .await
        {
            Ok(status) if status.success() => match scratch.release() {
                Ok(()) => ExecutionStatus::Succeeded,
                Err(e) => ExecutionStatus::Failed(format!("failed to remove scratch file: {}", e)),
            },
            Ok(status) => ExecutionStatus::Failed(format!("interpreter exited with {}", status)),
            Err(e) => ExecutionStatus::Failed(format!(
                "failed to launch {}: {}",
                self.interpreter, e
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract_scripts;

    fn batch_of(scripts: &[&str]) -> ScriptBatch {
        ScriptBatch::new(scripts.iter().map(|s| s.to_string()).collect(), false)
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_script_does_not_abort_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ScriptExecutor::new()
            .with_scratch_path(dir.path().join("scratch.sh"))
            .with_interpreter("/bin/sh");

        let batch = batch_of(&["exit 0", "exit 3", "exit 0"]);
        let outcomes = executor.execute(&batch).await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].succeeded());
        assert!(!outcomes[1].succeeded());
        assert!(outcomes[2].succeeded());
        assert_eq!(outcomes.iter().map(|o| o.index).collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn scratch_file_is_removed_after_success() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("scratch.sh");
        let executor = ScriptExecutor::new()
            .with_scratch_path(&scratch)
            .with_interpreter("/bin/sh");

        let outcomes = executor.execute(&batch_of(&["exit 0"])).await;
        assert!(outcomes[0].succeeded());
        assert!(!scratch.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn scratch_file_is_left_in_place_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("scratch.sh");
        let executor = ScriptExecutor::new()
            .with_scratch_path(&scratch)
            .with_interpreter("/bin/sh");

        let outcomes = executor.execute(&batch_of(&["exit 9"])).await;
        assert!(!outcomes[0].succeeded());
        assert!(scratch.exists());
    }

    #[tokio::test]
    async fn missing_interpreter_is_recorded_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ScriptExecutor::new()
            .with_scratch_path(dir.path().join("scratch.py"))
            .with_interpreter("definitely-not-an-interpreter");

        let outcomes = executor.execute(&batch_of(&["print(1)"])).await;
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(&outcomes[0].status, ExecutionStatus::Failed(_)));
    }

    #[tokio::test]
    async fn empty_batch_executes_nothing() {
        let outcomes = ScriptExecutor::new().execute(&ScriptBatch::default()).await;
        assert!(outcomes.is_empty());
    }

    #[cfg(feature = "python")]
    #[tokio::test]
    async fn runs_python_scripts_from_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ScriptExecutor::new()
            .with_scratch_path(dir.path().join("scratch.py"));

        let text = "```python\nprint('structure')\n```\n```python\nraise SystemExit(2)\n```";
        let outcomes = executor.execute(&extract_scripts(text, "python")).await;
        assert!(outcomes[0].succeeded());
        assert!(!outcomes[1].succeeded());
    }
}
