// SPDX-License-Identifier: MPL-2.0
//! Preview URL construction.
//!
//! The URL is a pure function of the locator, the preview theme and the
//! configured endpoints: resolving twice with the same inputs yields equal
//! strings.

use super::registry::{ComponentRegistry, Locator, LocatorKind};
use super::theme::PreviewTheme;
use crate::error::SurfaceError;
use url::Url;

/// Default sandbox host for external previews.
pub const DEFAULT_SANDBOX_BASE: &str = "https://zapp.run";

/// Default origin used to reach locally built bundles from the desktop host.
pub const DEFAULT_LOCAL_ORIGIN: &str = "http://localhost:3000";

/// Base addresses the resolver builds on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    sandbox_base: Url,
    local_origin: Url,
}

impl Endpoints {
    /// Parses both base addresses.
    pub fn new(sandbox_base: &str, local_origin: &str) -> Result<Self, SurfaceError> {
        let sandbox_base = parse_base(sandbox_base)?;
        let local_origin = parse_base(local_origin)?;
        Ok(Self {
            sandbox_base,
            local_origin,
        })
    }

    #[must_use]
    pub fn sandbox_base(&self) -> &Url {
        &self.sandbox_base
    }

    #[must_use]
    pub fn local_origin(&self) -> &Url {
        &self.local_origin
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            sandbox_base: Url::parse(DEFAULT_SANDBOX_BASE).expect("default sandbox base"),
            local_origin: Url::parse(DEFAULT_LOCAL_ORIGIN).expect("default local origin"),
        }
    }
}

fn parse_base(raw: &str) -> Result<Url, SurfaceError> {
    let url = Url::parse(raw).map_err(|_| SurfaceError::InvalidUrl(raw.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(SurfaceError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

/// Fully built preview address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewUrl {
    source: String,
    kind: LocatorKind,
}

impl PreviewUrl {
    /// Address handed to the preview surface.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn kind(&self) -> LocatorKind {
        self.kind
    }

    /// Source without its query, for opening the project in an editor.
    #[must_use]
    pub fn editor_link(&self) -> &str {
        self.source
            .split_once('?')
            .map_or(self.source.as_str(), |(head, _)| head)
    }

    /// Absolute address the desktop surface can navigate.
    ///
    /// Local paths are joined onto `local_origin`; external URLs are
    /// returned as they are.
    pub fn absolute(&self, local_origin: &Url) -> Result<Url, SurfaceError> {
        let parsed = match self.kind {
            LocatorKind::External => Url::parse(&self.source),
            LocatorKind::Local => local_origin.join(&self.source),
        };
        parsed.map_err(|_| SurfaceError::InvalidUrl(self.source.clone()))
    }
}

/// Resolves `component_id` to its preview address.
///
/// `None` means the component has no preview configured yet; callers render
/// the setup panel instead.
#[must_use]
pub fn resolve(
    registry: &ComponentRegistry,
    component_id: &str,
    theme: PreviewTheme,
    endpoints: &Endpoints,
) -> Option<PreviewUrl> {
    let Some(locator) = registry.get(component_id) else {
        tracing::debug!(component_id, "no preview configured");
        return None;
    };
    build(locator, theme, endpoints)
}

/// Builds the address for a single locator.
#[must_use]
pub fn build(locator: &Locator, theme: PreviewTheme, endpoints: &Endpoints) -> Option<PreviewUrl> {
    match locator {
        Locator::Github { path } => {
            let mut url = endpoints.sandbox_base.clone();
            // Registry paths may already be escaped; `set_path` leaves `%XX` intact
            let base = url.path().trim_end_matches('/').to_string();
            url.set_path(&format!("{base}/github/{}", path.trim_matches('/')));
            url.query_pairs_mut()
                .append_pair("split", "0")
                .append_pair("theme", theme.as_str())
                .append_pair("lazy", "true");
            Some(PreviewUrl {
                source: url.into(),
                kind: LocatorKind::External,
            })
        }
        Locator::Local { path } => {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("theme", theme.as_str())
                .finish();
            let (head, fragment) = match path.split_once('#') {
                Some((head, fragment)) => (head, Some(fragment)),
                None => (path.as_str(), None),
            };
            let separator = if head.contains('?') { '&' } else { '?' };
            let mut source = format!("{head}{separator}{query}");
            if let Some(fragment) = fragment {
                source.push('#');
                source.push_str(fragment);
            }
            Some(PreviewUrl {
                source,
                kind: LocatorKind::Local,
            })
        }
    }
}
