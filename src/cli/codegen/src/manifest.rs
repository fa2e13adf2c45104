/* src/cli/codegen/src/manifest.rs */

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything one generation pass discovered under the project root.
/// Paths are relative to their category folder, start with `/` and are sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestSnapshot {
  pub routes: Vec<String>,
  pub islands: Vec<String>,
  pub components: Vec<String>,
  #[serde(default)]
  pub schemas: Vec<SchemaEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntry {
  pub component: String,
  /// `None` when the module exports `schema` but its value is undefined.
  #[serde(default)]
  pub schema: Option<Value>,
}

/// The part of a snapshot carried between dev runs. Schemas never take part in
/// change detection, so they are not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotFiles {
  pub routes: Vec<String>,
  pub islands: Vec<String>,
  pub components: Vec<String>,
}

impl SnapshotFiles {
  pub fn to_json(&self) -> Result<String> {
    serde_json::to_string(self).context("failed to serialize manifest snapshot")
  }

  pub fn from_json(raw: &str) -> Result<Self> {
    serde_json::from_str(raw).context("failed to parse manifest snapshot")
  }

  pub fn is_empty(&self) -> bool {
    self.routes.is_empty() && self.islands.is_empty() && self.components.is_empty()
  }
}

impl ManifestSnapshot {
  pub fn files(&self) -> SnapshotFiles {
    SnapshotFiles {
      routes: self.routes.clone(),
      islands: self.islands.clone(),
      components: self.components.clone(),
    }
  }

  pub fn module_count(&self) -> usize {
    self.routes.len() + self.islands.len() + self.components.len()
  }
}

impl From<SnapshotFiles> for ManifestSnapshot {
  fn from(files: SnapshotFiles) -> Self {
    Self {
      routes: files.routes,
      islands: files.islands,
      components: files.components,
      schemas: Vec::new(),
    }
  }
}

/// Whether `next` needs a regenerated manifest compared to `previous`.
/// A missing previous snapshot compares as an empty one.
pub fn manifest_changed(previous: Option<&SnapshotFiles>, next: &SnapshotFiles) -> bool {
  match previous {
    Some(prev) => prev != next,
    None => !next.is_empty(),
  }
}

/// Strip the leading `/` and the file extension: `/sections/Hero.tsx` -> `sections/Hero`.
pub fn component_name(path: &str) -> &str {
  let trimmed = path.trim_start_matches('/');
  let file_start = trimmed.rfind('/').map_or(0, |i| i + 1);
  match trimmed[file_start..].rfind('.') {
    Some(dot) if dot > 0 => &trimmed[..file_start + dot],
    _ => trimmed,
  }
}
