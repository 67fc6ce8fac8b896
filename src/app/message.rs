// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::preview::ThemePreference;
use crate::ui::preview;
use iced::window;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Preview(preview::Message),
    /// The user picked a theme in the toolbar.
    ThemeSelected(ThemePreference),
    /// Periodic OS theme check while the preference is `System`.
    SystemThemeTick,
    /// Close the warning banner at this index.
    DismissWarning(usize),
    /// The window is about to close; the preview is torn down first.
    CloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Component to preview.
    pub component_id: String,
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FLUTTER_PREVIEW_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Theme preference for this session; not persisted.
    pub theme: Option<ThemePreference>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Frame height in logical pixels; clamped later.
    pub height: Option<u32>,
}
