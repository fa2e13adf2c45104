/* src/cli/codegen/src/typescript/ir.rs */

// Intermediate representation of deco.gen.ts: what gets imported and which
// lookup tables point at it. Textual layout lives in render.rs.

use serde_json::Value;

use crate::manifest::ManifestSnapshot;

/// Category folder names as they appear in table keys (`./<folder><path>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFolders {
  pub routes: String,
  pub islands: String,
  pub components: String,
}

impl Default for ManifestFolders {
  fn default() -> Self {
    Self {
      routes: "routes".to_string(),
      islands: "islands".to_string(),
      components: "components".to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
  pub alias: String,
  pub specifier: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableValue {
  Alias(String),
  Json(Value),
  Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
  pub key: String,
  pub value: TableValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
  pub name: &'static str,
  pub entries: Vec<TableEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManifestModule {
  pub imports: Vec<ImportBinding>,
  pub tables: Vec<Table>,
}

/// Alias prefixes per category; each category numbers its modules from 0.
const ROUTE_PREFIX: &str = "$";
const ISLAND_PREFIX: &str = "$$";
const COMPONENT_PREFIX: &str = "$$$";

fn module_table(
  name: &'static str,
  prefix: &str,
  folder: &str,
  paths: &[String],
  imports: &mut Vec<ImportBinding>,
) -> Table {
  let mut entries = Vec::with_capacity(paths.len());
  for (i, path) in paths.iter().enumerate() {
    let alias = format!("{prefix}{i}");
    let specifier = format!("./{folder}{path}");
    imports.push(ImportBinding { alias: alias.clone(), specifier: specifier.clone() });
    entries.push(TableEntry { key: specifier, value: TableValue::Alias(alias) });
  }
  Table { name, entries }
}

/// Lay out imports and tables for a snapshot, preserving input order.
pub fn build_manifest_module(
  snapshot: &ManifestSnapshot,
  folders: &ManifestFolders,
) -> ManifestModule {
  let mut imports = Vec::with_capacity(snapshot.module_count());

  let routes =
    module_table("routes", ROUTE_PREFIX, &folders.routes, &snapshot.routes, &mut imports);
  let islands =
    module_table("islands", ISLAND_PREFIX, &folders.islands, &snapshot.islands, &mut imports);
  let components = module_table(
    "components",
    COMPONENT_PREFIX,
    &folders.components,
    &snapshot.components,
    &mut imports,
  );

  let schemas = Table {
    name: "schemas",
    entries: snapshot
      .schemas
      .iter()
      .map(|entry| TableEntry {
        key: entry.component.clone(),
        value: match &entry.schema {
          Some(v) => TableValue::Json(v.clone()),
          None => TableValue::Null,
        },
      })
      .collect(),
  };

  ManifestModule { imports, tables: vec![routes, islands, components, schemas] }
}
