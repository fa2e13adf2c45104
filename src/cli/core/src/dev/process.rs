/* src/cli/core/src/dev/process.rs */

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};

use crate::ui::{CYAN, DIM, RESET};

/// The user's dev server (`dev.command`), output prefixed with a colored label.
pub(super) struct DevChild {
  label: &'static str,
  child: Child,
}

impl DevChild {
  pub(super) fn spawn(
    label: &'static str,
    command: &str,
    base_dir: &Path,
    env_vars: &[(&str, &str)],
  ) -> Result<Self> {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd.current_dir(base_dir);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.kill_on_drop(true);
    for (key, val) in env_vars {
      cmd.env(key, val);
    }
    let child = cmd.spawn().with_context(|| format!("failed to start {label}: {command}"))?;
    let mut proc = Self { label, child };
    proc.pipe_output();
    Ok(proc)
  }

  fn pipe_output(&mut self) {
    let label = self.label;
    if let Some(stdout) = self.child.stdout.take() {
      tokio::spawn(async move {
        let mut lines = BufReader::new(stdout).lines();
        while let Ok(Some(line)) = lines.next_line().await {
          println!("  {CYAN}{DIM}{label:>8}{RESET} {line}");
        }
      });
    }
    if let Some(stderr) = self.child.stderr.take() {
      tokio::spawn(async move {
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
          eprintln!("  {CYAN}{DIM}{label:>8}{RESET} {line}");
        }
      });
    }
  }

  pub(super) async fn wait(&mut self) -> std::io::Result<ExitStatus> {
    self.child.wait().await
  }
}
