// SPDX-License-Identifier: MPL-2.0
//! Static table mapping component identifiers to preview locators.
//!
//! The registry is assembled once at startup from the built-in entries and
//! the `[registry]` section of the configuration, then shared read-only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in `(id, sandbox project path)` pairs.
const BUILTIN_GITHUB_PROJECTS: &[(&str, &str)] = &[(
    "alert-dialog",
    "Sumithgatadi/Flutterbits/main/flutter_components/examples/alert_dialog_zapp.dart",
)];

/// Where the preview of a component lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Locator {
    /// Sandbox project sourced from a GitHub file,
    /// formatted as `owner/repo/branch/path/to/main.dart`.
    Github { path: String },
    /// Bundle served by the same origin as the host page.
    Local { path: String },
}

impl Locator {
    /// Returns the kind of preview this locator points to.
    #[must_use]
    pub fn kind(&self) -> LocatorKind {
        match self {
            Locator::Github { .. } => LocatorKind::External,
            Locator::Local { .. } => LocatorKind::Local,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Locator::Github { path } | Locator::Local { path } => path,
        }
    }
}

/// Shape of the URL built from a locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorKind {
    External,
    Local,
}

/// Read-only identifier → locator table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentRegistry {
    entries: BTreeMap<String, Locator>,
}

impl ComponentRegistry {
    /// Registry holding only the built-in entries.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_GITHUB_PROJECTS
            .iter()
            .map(|(id, path)| {
                (
                    (*id).to_string(),
                    Locator::Github {
                        path: (*path).to_string(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Returns this registry with `overrides` added, replacing entries that
    /// share an identifier.
    #[must_use]
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, Locator)>,
    {
        self.entries.extend(overrides);
        self
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Locator> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
