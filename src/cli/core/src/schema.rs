/* src/cli/core/src/schema.rs */

// Collects the optional `schema` export of every island and component module.

use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use deco_codegen::{ManifestFolders, SchemaEntry, component_name};
use futures_util::future::try_join_all;
use serde::Deserialize;
use serde_json::Value;

use crate::shell::{run_json_command, split_command};

/// What a loader reports about one module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadedModule {
  #[serde(rename = "hasSchema")]
  pub has_schema: bool,
  #[serde(default)]
  pub schema: Option<Value>,
}

#[cfg(test)]
impl LoadedModule {
  pub fn without_schema() -> Self {
    Self { has_schema: false, schema: None }
  }

  pub fn with_schema(schema: Value) -> Self {
    Self { has_schema: true, schema: Some(schema) }
  }
}

/// Loads a module by its project-relative specifier (`./islands/Counter.tsx`).
pub trait ModuleLoader {
  fn load(&self, specifier: &str) -> impl Future<Output = Result<LoadedModule>> + Send;
}

/// Evaluates modules with the project's JS runtime (`deno eval` by default).
#[derive(Debug, Clone)]
pub struct RuntimeLoader {
  program: String,
  args: Vec<String>,
  base_dir: PathBuf,
}

impl RuntimeLoader {
  pub fn new(eval_command: &str, base_dir: &Path) -> Result<Self> {
    let (program, args) =
      split_command(eval_command).context("runtime.eval_command must not be empty")?;
    Ok(Self { program, args, base_dir: base_dir.to_path_buf() })
  }

  fn script(specifier: &str) -> Result<String> {
    let quoted = serde_json::to_string(specifier)?;
    Ok(format!(
      "import({quoted}).then((m) => console.log(JSON.stringify({{ \
         hasSchema: \"schema\" in m, \
         schema: m.schema ?? null \
       }})))"
    ))
  }
}

impl ModuleLoader for RuntimeLoader {
  async fn load(&self, specifier: &str) -> Result<LoadedModule> {
    let mut args = self.args.clone();
    args.push(Self::script(specifier)?);
    let label = format!("{} for {specifier}", self.program);
    let line = run_json_command(&self.base_dir, &self.program, &args, &label).await?;
    serde_json::from_str(&line).with_context(|| format!("unexpected loader output for {specifier}"))
  }
}

/// Load every island, then every component not shadowed by a same-named island,
/// concurrently. Modules without a `schema` export are dropped; any failed load
/// fails the whole batch.
pub async fn collect_schemas<L: ModuleLoader>(
  loader: &L,
  folders: &ManifestFolders,
  islands: &[String],
  components: &[String],
) -> Result<Vec<SchemaEntry>> {
  let island_names: HashSet<&str> = islands.iter().map(|p| component_name(p)).collect();

  let mut targets: Vec<(&str, String)> = Vec::with_capacity(islands.len() + components.len());
  for path in islands {
    targets.push((component_name(path), format!("./{}{path}", folders.islands)));
  }
  for path in components {
    let name = component_name(path);
    if !island_names.contains(name) {
      targets.push((name, format!("./{}{path}", folders.components)));
    }
  }

  let loads = targets.iter().map(|(_, specifier)| async move {
    loader.load(specifier).await.with_context(|| format!("failed to load {specifier}"))
  });
  let loaded = try_join_all(loads).await?;

  Ok(
    targets
      .into_iter()
      .zip(loaded)
      .filter(|(_, module)| module.has_schema)
      .map(|((name, _), module)| SchemaEntry { component: name.to_string(), schema: module.schema })
      .collect(),
  )
}
