/* src/cli/codegen/src/lib.rs */

mod typescript;

pub mod manifest;

pub use manifest::{
  ManifestSnapshot, SchemaEntry, SnapshotFiles, component_name, manifest_changed,
};
pub use typescript::{
  ImportBinding, ManifestFolders, ManifestModule, Table, TableEntry, TableValue,
  build_manifest_module, generate_manifest, render_manifest,
};
