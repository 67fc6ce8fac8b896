// SPDX-License-Identifier: MPL-2.0
//! Desktop stand-in for the embedded preview document.
//!
//! A GUI window cannot host the preview page itself, so the surface
//! "navigates" by fetching the preview address. Its only contract with the
//! rest of the component is the pair of `load`/`error` signals; the content
//! stays opaque.

use super::sequencer::SurfaceSignal;
use crate::error::{Result, SurfaceError};
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

/// Bounds only the TCP/TLS handshake. Slow documents are the sequencer's
/// concern, not the surface's.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

fn client() -> std::result::Result<&'static reqwest::Client, SurfaceError> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("FlutterPreview/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SurfaceError::Request(e.to_string()))?;
    Ok(CLIENT.get_or_init(|| client))
}

/// Fetches the preview document.
///
/// Succeeds for any 2xx or 3xx answer.
pub async fn fetch(url: Url) -> Result<()> {
    let response = client()?.get(url).send().await?;
    let status = response.status();
    if status.is_success() || status.is_redirection() {
        Ok(())
    } else {
        Err(SurfaceError::Status(status.as_u16()).into())
    }
}

/// Navigates the surface and reports the resulting signal.
///
/// Failures are folded into [`SurfaceSignal::Error`] after being traced.
pub async fn navigate(url: Url) -> SurfaceSignal {
    let target = url.to_string();
    match fetch(url).await {
        Ok(()) => {
            tracing::debug!(url = %target, "preview surface loaded");
            SurfaceSignal::Load
        }
        Err(err) => {
            tracing::debug!(url = %target, error = %err, "preview surface failed to load");
            SurfaceSignal::Error
        }
    }
}
