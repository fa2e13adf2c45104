/* src/cli/core/src/main.rs */

mod config;
mod dev;
mod discover;
mod generate;
mod schema;
mod shell;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{DecoConfig, find_deco_config, load_deco_config};
use generate::run_generation;
use schema::RuntimeLoader;

#[derive(Parser)]
#[command(name = "deco", about = "deco site dev tooling")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Regenerate the manifest file (deco.gen.ts) unconditionally
  Generate {
    /// Path to deco.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Generate the manifest, start the dev server and regenerate on changes
  Dev {
    /// Path to deco.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected), parse it, and return the
/// absolute project root alongside it.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, DecoConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_deco_config(&cwd)?
    }
  };
  let config = load_deco_config(&path)?;
  let parent = match path.parent() {
    Some(p) if !p.as_os_str().is_empty() => p,
    _ => Path::new("."),
  };
  let base_dir =
    parent.canonicalize().with_context(|| format!("failed to resolve {}", parent.display()))?;
  Ok((base_dir, config))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Generate { config } => {
      let (base_dir, config) = resolve_config(config)?;
      ui::banner("generate", Some(&config.project.name));
      let loader = RuntimeLoader::new(&config.runtime.eval_command, &base_dir)?;
      let pass = run_generation(&config, &base_dir, &loader, None, true).await?;
      ui::blank();
      if let Some(path) = pass.written {
        ui::ok(&format!("wrote {}", path.display()));
      }
    }
    Command::Dev { config } => {
      let (base_dir, config) = resolve_config(config)?;
      let previous = dev::snapshot_from_env()?;
      dev::run_dev(&config, &base_dir, previous).await?;
    }
  }

  Ok(())
}
