//! DS-007: Document loading — evaluate the record and decode it.
//!
//! The evaluator's output must decode to a mapping whose keys are all
//! strings. An empty or `null` document is an empty record.

pub mod evaluator;

pub use evaluator::Evaluator;

use crate::core::error::{Result, SplitError};
use crate::core::types::Document;
use serde_yaml_ng::Value;
use std::path::Path;

/// Evaluate `record` and decode the result into a [`Document`].
pub fn load_document(evaluator: &Evaluator, record: &Path) -> Result<Document> {
    let output = evaluator.evaluate(record)?;
    decode_document(record, &output)
}

/// Decode evaluator output. `record` is only used for error context.
pub fn decode_document(record: &Path, bytes: &[u8]) -> Result<Document> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::new());
    }
    let value: Value = serde_yaml_ng::from_slice(bytes).map_err(|source| SplitError::Decode {
        record: record.to_path_buf(),
        source,
    })?;

    match value {
        Value::Null => Ok(Document::new()),
        Value::Mapping(map) if map.keys().all(Value::is_string) => Ok(map),
        _ => Err(SplitError::NotAMapping {
            record: record.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ds007_decode_mapping() {
        let doc = decode_document(
            Path::new("r.dhall"),
            b"Api:\n  service:\n    frontend:\n      port: 8080\n",
        )
        .unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc.contains_key("Api"));
    }

    #[test]
    fn test_ds007_decode_empty_and_null() {
        assert!(decode_document(Path::new("r"), b"").unwrap().is_empty());
        assert!(decode_document(Path::new("r"), b"null\n").unwrap().is_empty());
    }

    #[test]
    fn test_ds007_decode_invalid_yaml() {
        let err = decode_document(Path::new("r.dhall"), b"not: [valid: yaml: {{").unwrap_err();
        match err {
            SplitError::Decode { record, .. } => assert_eq!(record, Path::new("r.dhall")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ds007_decode_non_mapping_root() {
        let inputs: [&[u8]; 3] = [b"- a\n- b\n", b"just a string\n", b"42\n"];
        for input in inputs {
            let err = decode_document(Path::new("r"), input).unwrap_err();
            assert!(matches!(err, SplitError::NotAMapping { .. }), "input {:?}", input);
        }
    }

    #[test]
    fn test_ds007_decode_non_string_root_key() {
        let err = decode_document(Path::new("r"), b"1: {}\n").unwrap_err();
        assert!(matches!(err, SplitError::NotAMapping { .. }));
    }

    #[test]
    fn test_ds007_load_document_with_cat() {
        let dir = tempfile::tempdir().unwrap();
        let record = dir.path().join("record.yaml");
        std::fs::write(&record, "Db:\n  secret:\n    creds: {user: admin}\n").unwrap();
        let doc = load_document(&Evaluator::new("cat"), &record).unwrap();
        assert!(doc.contains_key("Db"));
    }

    #[test]
    fn test_ds007_load_document_propagates_evaluator_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&Evaluator::new("cat"), &dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, SplitError::EvaluatorFailed { .. }));
    }
}
