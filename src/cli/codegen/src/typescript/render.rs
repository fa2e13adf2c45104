/* src/cli/codegen/src/typescript/render.rs */

use anyhow::{Context, Result};
use serde_json::Value;

use super::ir::{ManifestModule, Table, TableValue};

const HEADER: &str = "\
// DO NOT EDIT. This file is generated by deco.
// This file SHOULD be checked into source version control.
// This file is automatically updated during development when running `deco dev`.
";

const CONFIG_IMPORT: &str = "import config from \"./deno.json\" assert { type: \"json\" };\n";

/// Quote a string as a JS string literal (JSON escaping is valid JS).
fn quote(s: &str) -> Result<String> {
  serde_json::to_string(s).with_context(|| format!("failed to quote {s:?}"))
}

/// Pretty-print a JSON value, indenting continuation lines by `indent`.
fn render_json(value: &Value, indent: &str) -> Result<String> {
  let pretty = serde_json::to_string_pretty(value).context("failed to serialize schema")?;
  Ok(pretty.replace('\n', &format!("\n{indent}")))
}

fn render_value(value: &TableValue) -> Result<String> {
  match value {
    TableValue::Alias(alias) => Ok(alias.clone()),
    TableValue::Json(v) => render_json(v, "    "),
    TableValue::Null => Ok("null".to_string()),
  }
}

fn render_table(table: &Table, out: &mut String) -> Result<()> {
  if table.entries.is_empty() {
    out.push_str(&format!("  {}: {{}},\n", table.name));
    return Ok(());
  }
  out.push_str(&format!("  {}: {{\n", table.name));
  for entry in &table.entries {
    let key = quote(&entry.key)?;
    let value = render_value(&entry.value)?;
    out.push_str(&format!("    {key}: {value},\n"));
  }
  out.push_str("  },\n");
  Ok(())
}

/// Serialize a manifest module to TypeScript source.
pub fn render_manifest(module: &ManifestModule) -> Result<String> {
  let mut out = String::from(HEADER);
  out.push('\n');

  out.push_str(CONFIG_IMPORT);
  for import in &module.imports {
    let specifier = quote(&import.specifier)?;
    out.push_str(&format!("import * as {} from {specifier};\n", import.alias));
  }
  out.push('\n');

  out.push_str("const manifest = {\n");
  for table in &module.tables {
    render_table(table, &mut out)?;
  }
  out.push_str("  baseUrl: import.meta.url,\n");
  out.push_str("  config,\n");
  out.push_str("};\n\n");

  out.push_str("export default manifest;\n");
  out.push_str("export type Manifest = typeof manifest;\n");
  Ok(out)
}
