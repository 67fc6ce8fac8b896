// SPDX-License-Identifier: MPL-2.0
//! Application root: the host of a single preview component.
//!
//! The `App` owns what the preview treats as ambient: the theme provider,
//! the configuration and the localization. Theme snapshots are pushed down
//! to the component as messages; nothing below this module reads the OS
//! theme or the settings file.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::SYSTEM_THEME_POLL_INTERVAL;

use crate::i18n::fluent::I18n;
use crate::preview::{PreviewTheme, ThemePreference};
use crate::ui::preview;
use crate::ui::theming;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    config_dir: Option<PathBuf>,
    /// The user's choice; `System` follows the OS.
    preference: ThemePreference,
    /// Last OS theme reported by `dark-light`.
    system_theme: Option<PreviewTheme>,
    preview: preview::State,
    /// Pending i18n warning keys shown above the preview.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("component", &self.preview.props().component_id)
            .field("preference", &self.preference)
            .field("phase", &self.preview.sequencer().phase())
            .finish()
    }
}

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 boots through `Fn`; the flags are cloned per call
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, resolves the theme and mounts the preview.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let system_theme = theming::detect_system_theme();
        Self::with_config(flags, config, config_dir, system_theme, config_warning)
    }

    /// Builds the application from an already loaded configuration.
    ///
    /// `system_theme` stands in for OS detection so callers can pin it.
    pub fn with_config(
        flags: Flags,
        config: config::Config,
        config_dir: Option<PathBuf>,
        system_theme: Option<PreviewTheme>,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let preference = flags.theme.unwrap_or(config.general.theme_mode);

        let (endpoints, endpoint_warning) = config.preview.endpoints();
        let context = preview::Context {
            registry: Arc::new(config.component_registry()),
            endpoints,
            timings: config.preview.timings(),
            docs_url: config.preview.docs_url.clone(),
        };
        let props = preview::Props::new(flags.component_id)
            .title(flags.title)
            .description(flags.description)
            .height(flags.height.unwrap_or_else(|| config.preview.height()));

        tracing::info!(
            component = %props.component_id,
            registered = context.registry.contains(&props.component_id),
            locale = %i18n.current_locale(),
            "starting preview host"
        );

        let ambient = theming::ambient(preference, system_theme);
        let app = Self {
            i18n,
            config,
            config_dir,
            preference,
            system_theme,
            preview: preview::State::new(props, context, ambient),
            warnings: config_warning.into_iter().chain(endpoint_warning).collect(),
        };

        (app, Task::done(Message::Preview(preview::Message::Mounted)))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.preview.props().component_id)
    }

    /// Theme actually shown: the host theme provider's resolution.
    #[must_use]
    pub fn resolved_theme(&self) -> PreviewTheme {
        crate::preview::theme::resolve(&theming::ambient(self.preference, self.system_theme), true)
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.resolved_theme())
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    #[must_use]
    pub fn preview(&self) -> &preview::State {
        &self.preview
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_preview_subscription(&self.preview),
            subscription::create_system_theme_subscription(self.preference),
            subscription::create_close_subscription(),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Preview(preview_message) => {
                self.preview.update(preview_message).map(Message::Preview)
            }
            Message::ThemeSelected(preference) => {
                if preference == self.preference {
                    return Task::none();
                }
                self.preference = preference;
                if preference == ThemePreference::System {
                    self.system_theme = theming::detect_system_theme();
                }
                self.persist_preference();
                self.push_theme()
            }
            Message::SystemThemeTick => {
                if self.preference != ThemePreference::System {
                    return Task::none();
                }
                self.observe_system_theme(theming::detect_system_theme())
            }
            Message::DismissWarning(index) => {
                if index < self.warnings.len() {
                    self.warnings.remove(index);
                }
                Task::none()
            }
            Message::CloseRequested(id) => {
                tracing::debug!(?id, "window close requested");
                let teardown = self.unmount_preview();
                Task::batch([teardown, window::close(id)])
            }
        }
    }

    /// Detaches the preview, aborting its timers and navigation.
    fn unmount_preview(&mut self) -> Task<Message> {
        self.preview
            .update(preview::Message::Unmounted)
            .map(Message::Preview)
    }

    /// Records what the OS reported and forwards it when it changed.
    pub fn observe_system_theme(&mut self, detected: Option<PreviewTheme>) -> Task<Message> {
        if detected == self.system_theme {
            return Task::none();
        }
        tracing::debug!(?detected, "system theme changed");
        self.system_theme = detected;
        self.push_theme()
    }

    fn push_theme(&mut self) -> Task<Message> {
        let snapshot = theming::ambient(self.preference, self.system_theme);
        self.preview
            .update(preview::Message::ThemeChanged(snapshot))
            .map(Message::Preview)
    }

    fn persist_preference(&mut self) {
        self.config.general.theme_mode = self.preference;
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(error = %err, "failed to save theme preference");
            self.warnings.push("notification-config-save-error".to_string());
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            preference: self.preference,
            theme: self.resolved_theme(),
            warnings: &self.warnings,
            preview: &self.preview,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::Phase;
    use tempfile::tempdir;

    fn flags(component_id: &str) -> Flags {
        Flags {
            component_id: component_id.to_string(),
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    fn booted(flags: Flags, config_dir: PathBuf, system: Option<PreviewTheme>) -> App {
        let (mut app, _) =
            App::with_config(flags, config::Config::default(), Some(config_dir), system, None);
        let _ = app.update(Message::Preview(preview::Message::Mounted));
        app
    }

    #[test]
    fn boot_mounts_preview_with_configured_theme() {
        let dir = tempdir().expect("temp dir");
        let app = booted(
            Flags {
                theme: Some(ThemePreference::Light),
                ..flags("alert-dialog")
            },
            dir.path().to_path_buf(),
            Some(PreviewTheme::Dark),
        );

        assert_eq!(app.resolved_theme(), PreviewTheme::Light);
        assert_eq!(app.preview().theme(), PreviewTheme::Light);
        assert_eq!(app.preview().sequencer().phase(), Phase::Loading);
    }

    #[test]
    fn system_preference_follows_detected_theme() {
        let dir = tempdir().expect("temp dir");
        let mut app = booted(
            flags("alert-dialog"),
            dir.path().to_path_buf(),
            Some(PreviewTheme::Light),
        );
        assert_eq!(app.preference(), ThemePreference::System);
        assert_eq!(app.preview().theme(), PreviewTheme::Light);

        let cycle = app.preview().sequencer().cycle();
        let _ = app.observe_system_theme(Some(PreviewTheme::Dark));
        assert_eq!(app.preview().theme(), PreviewTheme::Dark);
        assert_ne!(app.preview().sequencer().cycle(), cycle);
    }

    #[test]
    fn failed_detection_falls_back_to_dark() {
        let dir = tempdir().expect("temp dir");
        let app = booted(flags("alert-dialog"), dir.path().to_path_buf(), None);
        assert_eq!(app.preview().theme(), PreviewTheme::Dark);
    }

    #[test]
    fn theme_selection_is_persisted() {
        let dir = tempdir().expect("temp dir");
        let mut app = booted(
            flags("alert-dialog"),
            dir.path().to_path_buf(),
            Some(PreviewTheme::Dark),
        );

        let _ = app.update(Message::ThemeSelected(ThemePreference::Light));

        assert_eq!(app.preview().theme(), PreviewTheme::Light);
        let saved = config::load_from_path(&dir.path().join("settings.toml")).expect("saved");
        assert_eq!(saved.general.theme_mode, ThemePreference::Light);
        assert!(app.warnings().is_empty());
    }

    #[test]
    fn dismiss_warning_removes_it() {
        let dir = tempdir().expect("temp dir");
        let (mut app, _) = App::with_config(
            flags("alert-dialog"),
            config::Config::default(),
            Some(dir.path().to_path_buf()),
            None,
            Some("notification-config-load-error".to_string()),
        );
        assert_eq!(app.warnings().len(), 1);

        let _ = app.update(Message::DismissWarning(5));
        assert_eq!(app.warnings().len(), 1);
        let _ = app.update(Message::DismissWarning(0));
        assert!(app.warnings().is_empty());
    }

    #[test]
    fn unmounting_tears_down_the_preview() {
        let dir = tempdir().expect("temp dir");
        let mut app = booted(flags("alert-dialog"), dir.path().to_path_buf(), None);
        assert!(app.preview().is_mounted());
        assert!(app.preview().pending_tasks() > 0);

        let _ = app.unmount_preview();

        assert!(!app.preview().is_mounted());
        assert_eq!(app.preview().pending_tasks(), 0);
        assert_eq!(app.preview().sequencer().phase(), Phase::Idle);
    }

    #[test]
    fn window_keeps_running_until_preview_unmounts() {
        assert!(!window_settings().exit_on_close_request);
    }

    #[test]
    fn height_flag_is_clamped() {
        let dir = tempdir().expect("temp dir");
        let app = booted(
            Flags {
                height: Some(50),
                ..flags("alert-dialog")
            },
            dir.path().to_path_buf(),
            None,
        );
        assert_eq!(app.preview().props().frame_height(), 200);
    }

    #[test]
    fn title_names_component() {
        let dir = tempdir().expect("temp dir");
        let app = booted(flags("date-picker"), dir.path().to_path_buf(), None);
        assert_eq!(app.title(), "date-picker - Flutter Preview");
    }
}
