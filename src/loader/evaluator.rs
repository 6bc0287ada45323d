//! DS-006: External evaluator invocation.
//!
//! Runs the configuration-language evaluator as a blocking subprocess and
//! returns everything it printed on stdout. The child's stderr is inherited
//! so its own diagnostics reach the operator unchanged.

use crate::core::error::{Result, SplitError};
use std::path::Path;
use std::process::{Command, Stdio};

/// The program that turns a record file into a YAML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluator {
    /// Executable name or path.
    pub program: String,
    /// Flag placed before the record path, if the program wants one.
    pub file_flag: Option<String>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            program: "dhall-to-yaml".to_string(),
            file_flag: Some("--file".to_string()),
        }
    }
}

impl Evaluator {
    /// An evaluator that takes the record path as its only argument.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            file_flag: None,
        }
    }

    /// Place `flag` before the record path.
    pub fn with_file_flag(mut self, flag: impl Into<String>) -> Self {
        self.file_flag = Some(flag.into());
        self
    }

    /// Build the command for `record` without running it.
    pub fn command(&self, record: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(flag) = &self.file_flag {
            cmd.arg(flag);
        }
        cmd.arg(record)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run the evaluator on `record` and return its stdout.
    pub fn evaluate(&self, record: &Path) -> Result<Vec<u8>> {
        tracing::debug!(program = %self.program, record = %record.display(), "evaluating record");
        let output = self
            .command(record)
            .output()
            .map_err(|source| SplitError::EvaluatorSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SplitError::EvaluatorFailed {
                record: record.to_path_buf(),
                program: self.program.clone(),
                status: output.status,
            });
        }
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ds006_default_is_dhall_to_yaml() {
        let ev = Evaluator::default();
        assert_eq!(ev.program, "dhall-to-yaml");
        assert_eq!(ev.file_flag.as_deref(), Some("--file"));
    }

    #[test]
    fn test_ds006_command_arguments() {
        let cmd = Evaluator::default().command(Path::new("record.dhall"));
        assert_eq!(cmd.get_program(), "dhall-to-yaml");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["--file", "record.dhall"]);

        let cmd = Evaluator::new("cat").command(Path::new("r.yaml"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["r.yaml"]);
    }

    #[test]
    fn test_ds006_evaluate_captures_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let record = dir.path().join("record.yaml");
        std::fs::write(&record, "Api: {}\n").unwrap();
        let out = Evaluator::new("cat").evaluate(&record).unwrap();
        assert_eq!(out, b"Api: {}\n");
    }

    #[test]
    fn test_ds006_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.dhall");
        let err = Evaluator::new("cat").evaluate(&missing).unwrap_err();
        match err {
            SplitError::EvaluatorFailed { record, program, status } => {
                assert_eq!(record, missing);
                assert_eq!(program, "cat");
                assert!(!status.success());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ds006_spawn_failure() {
        let err = Evaluator::new("/nonexistent/dhall-to-ds-evaluator")
            .evaluate(Path::new("x.dhall"))
            .unwrap_err();
        assert!(matches!(err, SplitError::EvaluatorSpawn { .. }));
        assert!(err.to_string().contains("/nonexistent/dhall-to-ds-evaluator"));
    }

    #[test]
    fn test_ds006_file_flag_passed() {
        // `sh -c <script>`: the flag/record pair becomes the script
        let ev = Evaluator::new("sh").with_file_flag("-c");
        let out = ev.evaluate(Path::new("echo flagged")).unwrap();
        assert_eq!(String::from_utf8_lossy(&out).trim(), "flagged");
    }
}
