/* src/cli/core/src/dev/watch.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::ManifestSection;

/// Whether `path` lies inside one of the category folders (or is one of them).
fn touches_modules(path: &Path, base_dir: &Path, dirs: &[String]) -> bool {
  let Ok(rel) = path.strip_prefix(base_dir) else { return false };
  dirs.iter().any(|d| rel.starts_with(d))
}

/// Notifies on any file event under routes/islands/components.
pub(super) struct ModuleWatcher {
  watcher: RecommendedWatcher,
  rx: mpsc::Receiver<()>,
  base_dir: PathBuf,
  dirs: Vec<String>,
  watched: Vec<String>,
}

impl ModuleWatcher {
  pub(super) fn new(base_dir: &Path, manifest: &ManifestSection) -> Result<Self> {
    let dirs: Vec<String> = [&manifest.routes_dir, &manifest.islands_dir, &manifest.components_dir]
      .into_iter()
      .map(|d| d.trim_matches('/').to_string())
      .collect();

    let (tx, rx) = mpsc::channel(16);
    let root: PathBuf = base_dir.to_path_buf();
    let filter = dirs.clone();
    let mut watcher = RecommendedWatcher::new(
      move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
          if event.paths.iter().any(|p| touches_modules(p, &root, &filter)) {
            // A full channel already has a pending rebuild queued.
            let _ = tx.try_send(());
          }
        }
      },
      notify::Config::default(),
    )
    .context("failed to create file watcher")?;

    // The root itself, so that a category folder created later is noticed.
    watcher
      .watch(base_dir, RecursiveMode::NonRecursive)
      .with_context(|| format!("failed to watch {}", base_dir.display()))?;

    let mut this =
      Self { watcher, rx, base_dir: base_dir.to_path_buf(), dirs, watched: Vec::new() };
    this.refresh()?;
    Ok(this)
  }

  /// Start watching category folders that appeared since the last call and
  /// forget the ones that were removed. Returns the newly watched folders.
  pub(super) fn refresh(&mut self) -> Result<Vec<String>> {
    let mut added = Vec::new();
    for dir in &self.dirs {
      let label = format!("{dir}/");
      let path = self.base_dir.join(dir);
      let known = self.watched.contains(&label);
      match (path.is_dir(), known) {
        (true, false) => {
          self
            .watcher
            .watch(&path, RecursiveMode::Recursive)
            .with_context(|| format!("failed to watch {}", path.display()))?;
          self.watched.push(label.clone());
          added.push(label);
        }
        (false, true) => {
          // The OS drops the watch along with the folder; unwatch may fail.
          let _ = self.watcher.unwatch(&path);
          self.watched.retain(|w| *w != label);
        }
        _ => {}
      }
    }
    Ok(added)
  }

  pub(super) fn watched(&self) -> &[String] {
    &self.watched
  }

  pub(super) async fn changed(&mut self) -> Option<()> {
    self.rx.recv().await
  }

  pub(super) fn drain(&mut self) {
    while self.rx.try_recv().is_ok() {}
  }
}
