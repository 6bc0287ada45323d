//! DS-008: Executor — orchestration for a single run.
//!
//! output root → evaluate → decode → decompose → for each component:
//! ensure its dir (once) → for each of its resources: resolve path → write.
//!
//! The whole document is decomposed before the first write, so a shape
//! violation anywhere leaves the output tree untouched. Any later error stops
//! the run; files already written are left in place.

use super::decomposer;
use super::error::Result;
use super::paths;
use super::types::{Document, Resource, RunSummary};
use super::writer;
use crate::loader::{self, Evaluator};
use serde_yaml_ng::Value;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Configuration for one run.
pub struct RunConfig<'a> {
    pub record: &'a Path,
    pub output: &'a Path,
    pub evaluator: &'a Evaluator,
}

/// Evaluate the record and split it into the output tree.
pub fn run(cfg: &RunConfig) -> Result<RunSummary> {
    let start = Instant::now();

    writer::ensure_dir(cfg.output)?;
    let doc = loader::load_document(cfg.evaluator, cfg.record)?;
    let summary = split_document(&doc, cfg.output)?;

    info!(
        record = %cfg.record.display(),
        output = %cfg.output.display(),
        components = summary.components,
        files = summary.files,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Done"
    );
    Ok(summary)
}

/// Write every resource of an already loaded document under `output`.
///
/// Components are visited in document order; each one gets its directory
/// (even when it holds no resources) before its files are written.
pub fn split_document(doc: &Document, output: &Path) -> Result<RunSummary> {
    let resources = decomposer::decompose(doc)?;
    let mut pending = resources.iter().peekable();

    let mut dirs = ComponentDirs::default();
    let mut summary = RunSummary::default();

    // keys are strings once decompose has succeeded
    for component in doc.keys().filter_map(Value::as_str) {
        if dirs.ensure(output, component)? == DirOutcome::Created {
            summary.components += 1;
        }
        while let Some(resource) = pending.next_if(|r| r.component == component) {
            write_one(output, resource)?;
            summary.files += 1;
        }
    }

    Ok(summary)
}

fn write_one(output: &Path, resource: &Resource<'_>) -> Result<()> {
    let path = paths::resource_path(output, resource);
    writer::write_resource(&path, resource)?;
    debug!(
        component = resource.component,
        kind = resource.kind,
        name = resource.name,
        file = %path.display(),
        "wrote resource"
    );
    Ok(())
}

/// What [`ComponentDirs::ensure`] did for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirOutcome {
    /// First component mapping to this directory; created it.
    Created,
    /// Same component seen again.
    Existing,
    /// A different-cased component already owns the directory; warned.
    Collision,
    /// Collision already reported for this component.
    CollisionReported,
}

/// Component directories created so far in this run, keyed by folded path.
#[derive(Default)]
struct ComponentDirs<'a> {
    created: HashMap<PathBuf, &'a str>,
    warned: HashSet<&'a str>,
}

impl<'a> ComponentDirs<'a> {
    /// Create the component's directory on first sight; warn once per
    /// component name that folds onto a directory owned by another.
    fn ensure(&mut self, output: &Path, component: &'a str) -> Result<DirOutcome> {
        let dir = paths::component_dir(output, component);
        match self.created.get(&dir) {
            Some(first) if *first == component => Ok(DirOutcome::Existing),
            Some(first) => {
                if !self.warned.insert(component) {
                    return Ok(DirOutcome::CollisionReported);
                }
                warn!(
                    component,
                    other = *first,
                    dir = %dir.display(),
                    "components differ only by case and share an output directory"
                );
                Ok(DirOutcome::Collision)
            }
            None => {
                writer::ensure_dir(&dir)?;
                info!(component, dir = %dir.display(), "component directory ready");
                self.created.insert(dir, component);
                Ok(DirOutcome::Created)
            }
        }
    }
}
