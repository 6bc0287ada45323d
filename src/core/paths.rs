//! DS-004: Output path derivation.
//!
//! `root / lowercase(component) / "{name}.{kind}.yaml"`. Only the component
//! segment is case-folded; kind and name are used verbatim. Components that
//! differ only by case share a directory.
//!
//! Segments are joined lexically and always stay below the root: leading
//! separators and `.`/`..` parts are dropped, so `/etc` or `../x` cannot
//! redirect output elsewhere.

use super::types::Resource;
use std::path::{Component, Path, PathBuf};

/// Directory holding every resource of a component.
pub fn component_dir(root: &Path, component: &str) -> PathBuf {
    let mut dir = root.to_path_buf();
    push_under(&mut dir, &component.to_lowercase());
    dir
}

/// File name for a resource within its component directory.
pub fn file_name(kind: &str, name: &str) -> String {
    format!("{}.{}.yaml", name, kind)
}

/// Full target path for a resource.
pub fn resource_path(root: &Path, resource: &Resource<'_>) -> PathBuf {
    let mut path = component_dir(root, resource.component);
    push_under(&mut path, &file_name(resource.kind, resource.name));
    path
}

/// Append the normal parts of `segment` to `base`.
fn push_under(base: &mut PathBuf, segment: &str) {
    for part in Path::new(segment).components() {
        if let Component::Normal(p) = part {
            base.push(p);
        }
    }
}
