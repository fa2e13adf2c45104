/* src/editor/rust/src/client.rs */

use anyhow::{Context, Result};
use reqwest::redirect::Policy;

use crate::form::EditorForm;

pub const EDITOR_API_PATH: &str = "/live/api/editor";

/// Whatever reloads the page once a save has been sent.
pub trait PageReload {
  fn reload(&self);
}

impl<F: Fn()> PageReload for F {
  fn reload(&self) {
    self();
  }
}

/// Persists editor state to the site's editor endpoint.
#[derive(Debug, Clone)]
pub struct EditorClient {
  http: reqwest::Client,
  endpoint: String,
}

impl EditorClient {
  pub fn new(base_url: &str) -> Result<Self> {
    let http = reqwest::Client::builder()
      .redirect(Policy::none())
      .build()
      .context("failed to build HTTP client")?;
    let endpoint = format!("{}{EDITOR_API_PATH}", base_url.trim_end_matches('/'));
    Ok(Self { http, endpoint })
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  /// POST the reconciled component list, then reload the page.
  ///
  /// The response is not inspected and the reload happens even when the
  /// request fails; a transport error is still returned afterwards.
  pub async fn save(
    &self,
    form: &EditorForm,
    template: &str,
    reloader: &impl PageReload,
  ) -> Result<()> {
    let payload = form.payload(template);
    let sent = self.http.post(&self.endpoint).json(&payload).send().await;
    reloader.reload();
    sent.map(drop).with_context(|| format!("failed to POST {}", self.endpoint))
  }
}
