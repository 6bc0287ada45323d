//! DS-002: Core types — the decoded document and the resource tuple.
//!
//! The document is kept as an untyped YAML tree. Only the first two levels
//! (component → kind) carry structure; everything below a resource name is
//! opaque and passed through to serialization untouched.

use serde_yaml_ng::{Mapping, Value};
use std::fmt;

/// The decoded record: component name → kind record.
pub type Document = Mapping;

/// One leaf resource found while decomposing a [`Document`].
///
/// Borrows from the document it was produced from; nothing is cloned until a
/// resource is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<'a> {
    /// Top-level key, verbatim (case is folded only for the output directory).
    pub component: &'a str,
    /// Second-level key.
    pub kind: &'a str,
    /// Third-level key.
    pub name: &'a str,
    /// Everything below the name.
    pub contents: &'a Value,
}

impl fmt::Display for Resource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.component, self.kind, self.name)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct component directories ensured.
    pub components: usize,
    /// Resource files written.
    pub files: usize,
}
