/* src/cli/codegen/src/typescript/mod.rs */

mod ir;
mod render;

#[cfg(test)]
mod tests;

use anyhow::Result;

use crate::manifest::ManifestSnapshot;

pub use ir::{
  ImportBinding, ManifestFolders, ManifestModule, Table, TableEntry, TableValue,
  build_manifest_module,
};
pub use render::render_manifest;

/// Generate deco.gen.ts source for a snapshot (unformatted).
pub fn generate_manifest(snapshot: &ManifestSnapshot, folders: &ManifestFolders) -> Result<String> {
  render_manifest(&build_manifest_module(snapshot, folders))
}
