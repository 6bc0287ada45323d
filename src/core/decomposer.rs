//! DS-003: Record decomposition — component → kind → name → contents.
//!
//! Walks the three-level document and yields one [`Resource`] per leaf.
//! A component or kind record must be a mapping whose keys are all strings;
//! anything else is a shape violation and stops the walk. Contents below the
//! resource name are never inspected.

use super::error::{Result, SplitError};
use super::types::{Document, Resource};
use serde_yaml_ng::mapping::Iter;
use serde_yaml_ng::{Mapping, Value};

/// Lazy, fail-fast iterator over the resources of a document.
///
/// Yields at most one `Err`, after which it is exhausted.
pub struct Resources<'a> {
    components: Iter<'a>,
    kinds: Option<(&'a str, Iter<'a>)>,
    names: Option<(&'a str, &'a str, Iter<'a>)>,
    failed: bool,
}

/// Iterate the resources of `doc` in document order.
pub fn resources(doc: &Document) -> Resources<'_> {
    Resources {
        components: doc.iter(),
        kinds: None,
        names: None,
        failed: false,
    }
}

/// Decompose a whole document. The first shape violation aborts and no
/// partial result is returned.
pub fn decompose(doc: &Document) -> Result<Vec<Resource<'_>>> {
    resources(doc).collect()
}

impl<'a> Iterator for Resources<'a> {
    type Item = Result<Resource<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some((component, kind, names)) = &mut self.names {
                if let Some((name, contents)) = names.next() {
                    return Some(Ok(Resource {
                        component: *component,
                        kind: *kind,
                        name: key_str(name),
                        contents,
                    }));
                }
                self.names = None;
            }

            if let Some((component, kinds)) = &mut self.kinds {
                let component: &'a str = *component;
                if let Some((kind, value)) = kinds.next() {
                    match kind_record(component, kind, value) {
                        Ok(names) => {
                            self.names = Some((component, key_str(kind), names.iter()));
                            continue;
                        }
                        Err(e) => {
                            self.failed = true;
                            return Some(Err(e));
                        }
                    }
                }
                self.kinds = None;
            }

            let (key, value) = self.components.next()?;
            match component_record(key, value) {
                Ok((component, kinds)) => self.kinds = Some((component, kinds.iter())),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Resources<'_> {}

/// Validate one top-level entry and return its name and kind record.
fn component_record<'a>(key: &'a Value, value: &'a Value) -> Result<(&'a str, &'a Mapping)> {
    let component = match key.as_str() {
        Some(s) => s,
        None => {
            return Err(SplitError::InvalidComponentShape {
                component: scalar_text(key),
            })
        }
    };
    if component.is_empty() {
        return Err(SplitError::EmptyName {
            level: "component",
            component: None,
        });
    }
    let kinds = string_keyed(value).ok_or_else(|| SplitError::InvalidComponentShape {
        component: component.to_string(),
    })?;
    Ok((component, kinds))
}

/// Validate one kind entry inside `component` and return its resources.
fn kind_record<'a>(component: &str, key: &'a Value, value: &'a Value) -> Result<&'a Mapping> {
    let kind = key_str(key);
    if kind.is_empty() {
        return Err(SplitError::EmptyName {
            level: "kind",
            component: Some(component.to_string()),
        });
    }
    string_keyed(value).ok_or_else(|| SplitError::InvalidKindShape {
        component: component.to_string(),
        kind: kind.to_string(),
    })
}

/// A mapping whose keys are all strings, or `None`.
fn string_keyed(value: &Value) -> Option<&Mapping> {
    let map = value.as_mapping()?;
    map.keys().all(Value::is_string).then_some(map)
}

/// Key of a mapping already checked by [`string_keyed`].
fn key_str(key: &Value) -> &str {
    key.as_str().unwrap_or_default()
}

/// Best-effort text for a non-string key, for error messages.
fn scalar_text(key: &Value) -> String {
    match key {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "~".to_string(),
        other => format!("{:?}", other),
    }
}
