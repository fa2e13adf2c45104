/* src/cli/core/src/dev/mod.rs */

mod process;
mod watch;

use std::path::Path;
use std::process::ExitStatus;
use std::time::Duration;

use anyhow::{Context, Result};
use deco_codegen::SnapshotFiles;
use tokio::signal;

use crate::config::DecoConfig;
use crate::generate::run_generation;
use crate::schema::RuntimeLoader;
use crate::ui::{self, BOLD, CYAN, DIM, GREEN, RED, RESET};

use process::DevChild;
use watch::ModuleWatcher;

/// Carries the last generated snapshot across `deco dev` re-executions.
pub const SNAPSHOT_ENV: &str = "DECO_PREVIOUS_MANIFEST";

const SERVER_LABEL: &str = "server";

/// Read the snapshot left by a previous run, if any. Called once at startup.
pub fn snapshot_from_env() -> Result<Option<SnapshotFiles>> {
  parse_snapshot(std::env::var(SNAPSHOT_ENV).ok().as_deref())
}

fn parse_snapshot(raw: Option<&str>) -> Result<Option<SnapshotFiles>> {
  match raw {
    Some(raw) if !raw.trim().is_empty() => {
      SnapshotFiles::from_json(raw).with_context(|| format!("invalid {SNAPSHOT_ENV}")).map(Some)
    }
    _ => Ok(None),
  }
}

/// Resolves when the dev server exits; never resolves without one.
async fn wait_child(child: &mut Option<DevChild>) -> std::io::Result<ExitStatus> {
  match child {
    Some(c) => c.wait().await,
    None => std::future::pending().await,
  }
}

fn print_dev_banner(config: &DecoConfig, watched: &[String]) {
  ui::banner("dev", Some(&config.project.name));
  if let Some(cmd) = config.dev.command.as_deref() {
    println!("  {CYAN}server{RESET}    {DIM}{cmd}{RESET}");
  }
  println!("  {GREEN}manifest{RESET}  {BOLD}{}{RESET}", config.manifest.out_file);
  if !watched.is_empty() {
    println!("  {GREEN}watching{RESET}  {DIM}{}{RESET}", watched.join(", "));
  }
  println!();
}

/// Generate once, start `dev.command`, then regenerate whenever the module set
/// changes. The snapshot of each pass is handed to the next one.
pub async fn run_dev(
  config: &DecoConfig,
  base_dir: &Path,
  previous: Option<SnapshotFiles>,
) -> Result<()> {
  let loader = RuntimeLoader::new(&config.runtime.eval_command, base_dir)?;
  let mut watcher = ModuleWatcher::new(base_dir, &config.manifest)?;
  print_dev_banner(config, watcher.watched());

  let mut snapshot =
    run_generation(config, base_dir, &loader, previous.as_ref(), false).await?.files;
  ui::blank();

  let mut child = match config.dev.command.as_deref() {
    Some(cmd) => {
      let snapshot_json = snapshot.to_json()?;
      let env = [("DECO_DEV", "1"), (SNAPSHOT_ENV, snapshot_json.as_str())];
      Some(DevChild::spawn(SERVER_LABEL, cmd, base_dir, &env)?)
    }
    None => None,
  };

  loop {
    tokio::select! {
      _ = signal::ctrl_c() => {
        println!();
        println!("  {DIM}shutting down...{RESET}");
        break;
      }
      status = wait_child(&mut child) => {
        let label = SERVER_LABEL;
        match status {
          Ok(s) if s.success() => println!("  {CYAN}{label}{RESET} exited"),
          Ok(s) => println!("  {RED}{label} exited with {s}{RESET}"),
          Err(e) => println!("  {RED}{label} error: {e}{RESET}"),
        }
        break;
      }
      Some(()) = watcher.changed() => {
        // Debounce: wait 300ms, drain pending events
        tokio::time::sleep(Duration::from_millis(300)).await;
        watcher.drain();
        match watcher.refresh() {
          Ok(added) if !added.is_empty() => {
            ui::detail(&format!("now watching {}", added.join(", ")));
          }
          Ok(_) => {}
          Err(e) => ui::fail(&format!("{e:#}")),
        }
        match run_generation(config, base_dir, &loader, Some(&snapshot), false).await {
          Ok(pass) => snapshot = pass.files,
          Err(e) => ui::fail(&format!("manifest generation failed: {e:#}")),
        }
      }
    }
  }

  Ok(())
}
