/* src/cli/core/src/shell.rs */

// Subprocess helpers shared across generation and dev.

use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::ui::{self, DIM, RESET};

/// Split a configured command line into program and arguments (whitespace only, no quoting).
pub(crate) fn split_command(command: &str) -> Result<(String, Vec<String>)> {
  let mut parts = command.split_whitespace().map(str::to_string);
  let Some(program) = parts.next() else { bail!("command must not be empty") };
  Ok((program, parts.collect()))
}

/// Append stderr and stdout (when non-empty) to a failure message.
fn failure_message(label: &str, output: &std::process::Output) -> String {
  let stdout = String::from_utf8_lossy(&output.stdout);
  let stderr = String::from_utf8_lossy(&output.stderr);
  let mut msg = format!("{label} exited with status {}", output.status);
  if !stderr.is_empty() {
    msg.push('\n');
    msg.push_str(&stderr);
  }
  if !stdout.is_empty() {
    msg.push('\n');
    msg.push_str(&stdout);
  }
  msg
}

/// Pipe `source` through a formatter command (stdin -> stdout) and return its output.
pub(crate) async fn format_source(base_dir: &Path, command: &str, source: &str) -> Result<String> {
  ui::detail(&format!("{DIM}{command}{RESET}"));
  let mut child = Command::new("sh")
    .args(["-c", command])
    .current_dir(base_dir)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .kill_on_drop(true)
    .spawn()
    .with_context(|| format!("failed to run formatter: {command}"))?;

  let mut stdin = child.stdin.take().context("formatter stdin was not piped")?;
  // Feed stdin while draining stdout, a large file would otherwise fill both pipes.
  let write = async move {
    stdin.write_all(source.as_bytes()).await?;
    stdin.shutdown().await
  };
  let (written, output) = tokio::join!(write, child.wait_with_output());
  let output = output.context("failed to wait for formatter")?;

  if !output.status.success() {
    bail!("{}", failure_message("formatter", &output));
  }
  written.context("failed to write source to formatter")?;

  String::from_utf8(output.stdout).context("invalid UTF-8 from formatter")
}

/// Run a command that prints a single JSON document as its last stdout line.
pub(crate) async fn run_json_command(
  base_dir: &Path,
  program: &str,
  args: &[String],
  label: &str,
) -> Result<String> {
  let output = Command::new(program)
    .args(args)
    .current_dir(base_dir)
    .stdin(Stdio::null())
    .kill_on_drop(true)
    .output()
    .await
    .with_context(|| format!("failed to run {label}"))?;

  if !output.status.success() {
    bail!("{}", failure_message(label, &output));
  }

  let stdout =
    String::from_utf8(output.stdout).with_context(|| format!("invalid UTF-8 from {label}"))?;
  stdout
    .lines()
    .rev()
    .find(|line| !line.trim().is_empty())
    .map(str::to_string)
    .with_context(|| format!("{label} printed nothing"))
}
