/* src/cli/core/src/generate.rs */

// One generation pass: discover -> diff -> collect schemas -> render -> format -> write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use deco_codegen::{SnapshotFiles, generate_manifest, manifest_changed};

use crate::config::DecoConfig;
use crate::discover::discover_project;
use crate::schema::{ModuleLoader, collect_schemas};
use crate::shell::format_source;
use crate::ui::{self, DIM, RESET};

#[derive(Debug)]
pub struct GenerationPass {
  /// Snapshot to hand to the next pass.
  pub files: SnapshotFiles,
  /// Path of the written manifest, `None` when nothing changed.
  pub written: Option<PathBuf>,
}

/// Run one pass against `previous`. With `force`, the diff is skipped and the
/// manifest is always written. Nothing is written if any step fails.
pub async fn run_generation<L: ModuleLoader>(
  config: &DecoConfig,
  base_dir: &Path,
  loader: &L,
  previous: Option<&SnapshotFiles>,
  force: bool,
) -> Result<GenerationPass> {
  let manifest = &config.manifest;

  ui::step(1, 4, "Discovering modules");
  let mut snapshot = discover_project(base_dir, manifest)?;
  let files = snapshot.files();
  ui::detail_ok(&format!(
    "{} routes, {} islands, {} components",
    files.routes.len(),
    files.islands.len(),
    files.components.len()
  ));

  if !force && !manifest_changed(previous, &files) {
    ui::detail(&format!(
      "{DIM}no route/island/component changes, skipping {}{RESET}",
      manifest.out_file
    ));
    return Ok(GenerationPass { files, written: None });
  }

  ui::step(2, 4, "Collecting schemas");
  let folders = manifest.folders();
  snapshot.schemas =
    collect_schemas(loader, &folders, &snapshot.islands, &snapshot.components).await?;
  ui::detail_ok(&format!("{} schemas", snapshot.schemas.len()));

  ui::step(3, 4, "Rendering manifest");
  let code = generate_manifest(&snapshot, &folders)?;
  let code = format_source(base_dir, &config.format.command, &code).await?;

  ui::step(4, 4, "Writing manifest");
  let out_path = base_dir.join(&manifest.out_file);
  if let Some(parent) = out_path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(&out_path, &code)
    .with_context(|| format!("failed to write {}", out_path.display()))?;
  ui::detail_ok(&format!(
    "{} modules \u{2192} {} ({} lines)",
    snapshot.module_count(),
    manifest.out_file,
    code.lines().count()
  ));

  Ok(GenerationPass { files, written: Some(out_path) })
}
