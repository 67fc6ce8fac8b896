// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.

use super::Message;
use crate::preview::ThemePreference;
use crate::ui::preview;
use iced::{time, window, Subscription};
use std::time::Duration;

/// How often the OS theme is re-read while following the system.
pub const SYSTEM_THEME_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Polls the OS theme, only while the preference follows it.
pub fn create_system_theme_subscription(preference: ThemePreference) -> Subscription<Message> {
    if preference == ThemePreference::System {
        time::every(SYSTEM_THEME_POLL_INTERVAL).map(|_| Message::SystemThemeTick)
    } else {
        Subscription::none()
    }
}

/// Forwards the preview component's own animation ticks.
pub fn create_preview_subscription(preview: &preview::State) -> Subscription<Message> {
    preview.subscription().map(Message::Preview)
}

/// Close requests are routed through `update` so the preview unmounts first.
pub fn create_close_subscription() -> Subscription<Message> {
    window::close_requests().map(Message::CloseRequested)
}
