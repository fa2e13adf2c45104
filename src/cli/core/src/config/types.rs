/* src/cli/core/src/config/types.rs */

use std::collections::HashSet;

use anyhow::{Result, bail};
use deco_codegen::ManifestFolders;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DecoConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub manifest: ManifestSection,
  #[serde(default)]
  pub runtime: RuntimeSection,
  #[serde(default)]
  pub format: FormatSection,
  #[serde(default)]
  pub dev: DevSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestSection {
  #[serde(default = "default_out_file")]
  pub out_file: String,
  #[serde(default = "default_routes_dir")]
  pub routes_dir: String,
  #[serde(default = "default_islands_dir")]
  pub islands_dir: String,
  #[serde(default = "default_components_dir")]
  pub components_dir: String,
}

impl Default for ManifestSection {
  fn default() -> Self {
    Self {
      out_file: default_out_file(),
      routes_dir: default_routes_dir(),
      islands_dir: default_islands_dir(),
      components_dir: default_components_dir(),
    }
  }
}

impl ManifestSection {
  pub fn folders(&self) -> ManifestFolders {
    ManifestFolders {
      routes: self.routes_dir.clone(),
      islands: self.islands_dir.clone(),
      components: self.components_dir.clone(),
    }
  }

  pub fn validate(&self) -> Result<()> {
    if self.out_file.trim().is_empty() {
      bail!("manifest.out_file must not be empty");
    }
    let dirs = [
      ("routes_dir", &self.routes_dir),
      ("islands_dir", &self.islands_dir),
      ("components_dir", &self.components_dir),
    ];
    let mut seen = HashSet::new();
    for (key, dir) in dirs {
      let dir = dir.trim_matches('/');
      if dir.is_empty() {
        bail!("manifest.{key} must not be empty");
      }
      if !seen.insert(dir) {
        bail!("manifest.{key} \"{dir}\" is used by more than one category");
      }
    }
    Ok(())
  }
}

fn default_out_file() -> String {
  "deco.gen.ts".to_string()
}

fn default_routes_dir() -> String {
  "routes".to_string()
}

fn default_islands_dir() -> String {
  "islands".to_string()
}

fn default_components_dir() -> String {
  "components".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeSection {
  /// Command that evaluates a script passed as its last argument.
  #[serde(default = "default_eval_command")]
  pub eval_command: String,
}

impl Default for RuntimeSection {
  fn default() -> Self {
    Self { eval_command: default_eval_command() }
  }
}

fn default_eval_command() -> String {
  "deno eval".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatSection {
  /// Reads source on stdin, writes formatted source to stdout.
  #[serde(default = "default_format_command")]
  pub command: String,
}

impl Default for FormatSection {
  fn default() -> Self {
    Self { command: default_format_command() }
  }
}

fn default_format_command() -> String {
  "deno fmt -".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevSection {
  pub command: Option<String>,
}
