//! DS-001: Error taxonomy — invocation, decode, structural, filesystem.
//!
//! Every fallible operation in the crate returns [`SplitError`]. Each variant
//! carries the path or key context needed to locate the problem, and wraps the
//! underlying cause where there is one.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SplitError>;

/// A fatal error for a single run.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The evaluator process could not be started.
    #[error("failed to start evaluator '{program}': {source}")]
    EvaluatorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The evaluator ran but did not exit successfully.
    #[error("evaluator '{program}' failed on record {}: {status}", .record.display())]
    EvaluatorFailed {
        record: PathBuf,
        program: String,
        status: ExitStatus,
    },

    /// Evaluator output is not valid YAML.
    #[error("failed to decode record {}: {source}", .record.display())]
    Decode {
        record: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The document root is not a string-keyed mapping.
    #[error("record {} is not a mapping of components", .record.display())]
    NotAMapping { record: PathBuf },

    /// A component value is not a mapping of kinds.
    #[error("unexpected component member: component '{component}' is not a mapping")]
    InvalidComponentShape { component: String },

    /// A kind value is not a mapping of resources.
    #[error("unexpected kind member: kind '{kind}' in component '{component}' is not a mapping")]
    InvalidKindShape { component: String, kind: String },

    /// A component or kind key is the empty string.
    #[error("empty {level} name{}", in_component(.component))]
    EmptyName {
        level: &'static str,
        component: Option<String>,
    },

    /// An output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A resource file could not be opened or flushed.
    #[error("failed to write yaml {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A resource's contents could not be encoded.
    #[error("failed to serialize yaml {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

fn in_component(component: &Option<String>) -> String {
    component
        .as_deref()
        .map(|c| format!(" in component '{c}'"))
        .unwrap_or_default()
}

impl SplitError {
    /// True for shape violations found while decomposing the document.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InvalidComponentShape { .. }
                | Self::InvalidKindShape { .. }
                | Self::EmptyName { .. }
        )
    }
}
