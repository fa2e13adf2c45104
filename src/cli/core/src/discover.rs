/* src/cli/core/src/discover.rs */

// File discovery for routes, islands and components.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, bail};
use deco_codegen::ManifestSnapshot;
use walkdir::{DirEntry, WalkDir};

use crate::config::ManifestSection;

pub const SOURCE_EXTENSIONS: [&str; 4] = ["tsx", "jsx", "ts", "js"];

fn is_source_file(path: &Path) -> bool {
  path.extension().and_then(|e| e.to_str()).is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// `/`-prefixed, `/`-separated path of `path` relative to `base`.
fn url_path(base: &Path, path: &Path) -> Result<String> {
  let rel = path
    .strip_prefix(base)
    .with_context(|| format!("{} is outside {}", path.display(), base.display()))?;
  let mut out = String::new();
  for part in rel.components() {
    let part = part
      .as_os_str()
      .to_str()
      .with_context(|| format!("non UTF-8 file name under {}", base.display()))?;
    out.push('/');
    out.push_str(part);
  }
  Ok(out)
}

fn is_hidden(entry: &DirEntry) -> bool {
  entry.depth() > 0 && entry.file_name().to_str().is_some_and(|n| n.starts_with('.'))
}

/// Source files under `root/subdir`, sorted and de-duplicated.
/// A missing `subdir` yields an empty list.
pub fn discover_files(root: &Path, subdir: &str) -> Result<Vec<String>> {
  let dir = root.join(subdir);
  match std::fs::metadata(&dir) {
    Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
    Err(e) => return Err(e).with_context(|| format!("failed to stat {}", dir.display())),
    Ok(meta) if !meta.is_dir() => bail!("{} is not a directory", dir.display()),
    Ok(_) => {}
  }

  let mut files = Vec::new();
  // Symlinks are not followed, so a link cycle cannot trap the walk.
  let walker = WalkDir::new(&dir).follow_links(false).sort_by_file_name();
  for entry in walker.into_iter().filter_entry(|e| !is_hidden(e)) {
    let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
    if entry.file_type().is_file() && is_source_file(entry.path()) {
      files.push(url_path(&dir, entry.path())?);
    }
  }
  files.sort();
  files.dedup();
  Ok(files)
}

/// Discover all three categories. Schemas are filled in later by the collector.
pub fn discover_project(root: &Path, manifest: &ManifestSection) -> Result<ManifestSnapshot> {
  Ok(ManifestSnapshot {
    routes: discover_files(root, &manifest.routes_dir)?,
    islands: discover_files(root, &manifest.islands_dir)?,
    components: discover_files(root, &manifest.components_dir)?,
    schemas: Vec::new(),
  })
}
