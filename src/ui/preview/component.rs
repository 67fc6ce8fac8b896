// SPDX-License-Identifier: MPL-2.0
//! Preview component: state, messages and update logic.
//!
//! The component owns one [`LoadSequencer`] and translates its effects into
//! Iced tasks. Timers are `tokio` sleeps wrapped in abortable tasks; their
//! handles live until the next cycle or teardown aborts them. Every message
//! coming back from a task carries the [`CycleId`] it was issued for, so the
//! sequencer can drop anything that belongs to an older cycle.

use super::{fallback, frame};
use crate::app::config::{clamp_height, DEFAULT_PREVIEW_HEIGHT};
use crate::i18n::fluent::I18n;
use crate::preview::sequencer::LoadSequencer;
use crate::preview::theme;
use crate::preview::{
    surface, url as preview_url, AmbientTheme, ComponentRegistry, CycleId, Effect, Endpoints,
    LocatorKind, PreviewTheme, PreviewUrl, SurfaceSignal, Timer, Timings,
};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::animated_spinner;
use iced::task;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Subscription, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Spinner frame interval (about 60 FPS).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Inputs given by the host for one preview instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Props {
    pub component_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    height: u32,
}

impl Props {
    #[must_use]
    pub fn new(component_id: impl Into<String>) -> Self {
        Self {
            component_id: component_id.into(),
            title: None,
            description: None,
            height: DEFAULT_PREVIEW_HEIGHT,
        }
    }

    #[must_use]
    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the frame height, clamped to the supported range.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = clamp_height(height);
        self
    }

    #[must_use]
    pub fn frame_height(&self) -> u32 {
        self.height
    }
}

/// Shared, read-only environment of a preview instance.
#[derive(Debug, Clone)]
pub struct Context {
    pub registry: Arc<ComponentRegistry>,
    pub endpoints: Endpoints,
    pub timings: Timings,
    pub docs_url: Option<String>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Arc::new(ComponentRegistry::builtin()),
            endpoints: Endpoints::default(),
            timings: Timings::default(),
            docs_url: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The host attached the component; theme resolution becomes live.
    Mounted,
    /// New snapshot from the host theme provider.
    ThemeChanged(AmbientTheme),
    /// The surface finished navigating.
    Surface { cycle: CycleId, signal: SurfaceSignal },
    /// A sequencer timer fired.
    TimerElapsed { cycle: CycleId, timer: Timer },
    SpinnerTick,
    OpenLink(String),
    /// The host detached the component.
    Unmounted,
}

/// Preview component state.
pub struct State {
    props: Props,
    context: Context,
    sequencer: LoadSequencer,
    mounted: bool,
    ambient: AmbientTheme,
    theme: PreviewTheme,
    preview: Option<PreviewUrl>,
    pending: Vec<task::Handle>,
    spinner_rotation: f32,
    last_frame: Instant,
}

impl State {
    #[must_use]
    pub fn new(props: Props, context: Context, ambient: AmbientTheme) -> Self {
        let preview = preview_url::resolve(
            &context.registry,
            &props.component_id,
            PreviewTheme::default(),
            &context.endpoints,
        );
        Self {
            sequencer: LoadSequencer::new(context.timings),
            props,
            context,
            mounted: false,
            ambient,
            theme: theme::resolve(&ambient, false),
            preview,
            pending: Vec::new(),
            spinner_rotation: 0.0,
            last_frame: Instant::now(),
        }
    }

    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Theme the preview currently renders with.
    #[must_use]
    pub fn theme(&self) -> PreviewTheme {
        self.theme
    }

    #[must_use]
    pub fn sequencer(&self) -> &LoadSequencer {
        &self.sequencer
    }

    /// Resolved preview address, `None` when the component is unregistered.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewUrl> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of timer and navigation tasks that may still report back.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.pending.len()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.sequencer.show_overlay() {
            iced::time::every(TICK_INTERVAL).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// [`update`](Self::update) with an explicit clock, for tests.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        self.last_frame = now;

        let task = match message {
            Message::Mounted => {
                if self.mounted {
                    return Task::none();
                }
                self.mounted = true;
                self.theme = theme::resolve(&self.ambient, true);
                return self.start_cycle(now);
            }
            Message::ThemeChanged(ambient) => {
                self.ambient = ambient;
                Task::none()
            }
            Message::Surface { cycle, signal } => {
                let effects = self.sequencer.signal(cycle, signal, now);
                self.apply(effects)
            }
            Message::TimerElapsed { cycle, timer } => {
                tracing::debug!(?timer, "preview timer fired");
                let effects = self.sequencer.timer_elapsed(cycle, timer, now);
                self.apply(effects)
            }
            Message::SpinnerTick => {
                self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                Task::none()
            }
            Message::OpenLink(target) => {
                if let Err(err) = open::that(&target) {
                    tracing::warn!(url = %target, error = %err, "failed to open link");
                }
                Task::none()
            }
            Message::Unmounted => {
                self.mounted = false;
                let effects = self.sequencer.teardown();
                return self.apply(effects);
            }
        };

        Task::batch([task, self.refresh_theme(now)])
    }

    /// Restarts the surface when the resolved theme moved.
    fn refresh_theme(&mut self, now: Instant) -> Task<Message> {
        if !self.mounted {
            return Task::none();
        }
        let resolved = theme::resolve(&self.ambient, true);
        if resolved == self.theme {
            return Task::none();
        }
        tracing::debug!(from = %self.theme, to = %resolved, "preview theme changed");
        self.theme = resolved;
        self.start_cycle(now)
    }

    fn start_cycle(&mut self, now: Instant) -> Task<Message> {
        self.preview = preview_url::resolve(
            &self.context.registry,
            &self.props.component_id,
            self.theme,
            &self.context.endpoints,
        );
        let Some(preview) = &self.preview else {
            return Task::none();
        };
        let target = preview.absolute(self.context.endpoints.local_origin());

        let effects = self.sequencer.begin(now);
        let timers = self.apply(effects);
        let cycle = self.sequencer.cycle();

        let navigation = match target {
            Ok(target) => {
                let (task, handle) = Task::perform(surface::navigate(target), move |signal| {
                    Message::Surface { cycle, signal }
                })
                .abortable();
                self.pending.push(handle);
                task
            }
            Err(err) => {
                tracing::debug!(error = %err, "preview address cannot be navigated");
                Task::done(Message::Surface {
                    cycle,
                    signal: SurfaceSignal::Error,
                })
            }
        };

        Task::batch([timers, navigation])
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let mut tasks = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::CancelPending => {
                    for handle in self.pending.drain(..) {
                        handle.abort();
                    }
                }
                Effect::Schedule {
                    timer,
                    after,
                    cycle,
                } => {
                    // The sleep is created inside the future so it binds to the
                    // runtime that polls it.
                    let (task, handle) = Task::perform(
                        async move { tokio::time::sleep(after).await },
                        move |()| Message::TimerElapsed { cycle, timer },
                    )
                    .abortable();
                    self.pending.push(handle);
                    tasks.push(task);
                }
            }
        }
        Task::batch(tasks)
    }

    /// Link for the header action: the editor page for sandbox projects,
    /// the absolute bundle address for local ones.
    #[must_use]
    pub fn open_link(&self) -> Option<String> {
        let preview = self.preview.as_ref()?;
        match preview.kind() {
            LocatorKind::External => Some(preview.editor_link().to_string()),
            LocatorKind::Local => preview
                .absolute(self.context.endpoints.local_origin())
                .ok()
                .map(String::from),
        }
    }

    /// Documentation anchor for the setup panel.
    #[must_use]
    pub fn examples_link(&self) -> Option<String> {
        self.context
            .docs_url
            .as_deref()
            .map(|docs| format!("{}#usage", docs.trim_end_matches('#')))
    }

    /// Sandbox home page for the setup panel.
    #[must_use]
    pub fn sandbox_link(&self) -> String {
        self.context.endpoints.sandbox_base().to_string()
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let scheme = ColorScheme::for_theme(self.theme);

        let body: Element<'a, Message> = match &self.preview {
            Some(preview) => frame::view(frame::ViewContext {
                i18n,
                scheme: scheme.clone(),
                component_id: &self.props.component_id,
                preview,
                target: preview
                    .absolute(self.context.endpoints.local_origin())
                    .ok()
                    .map(String::from),
                sequencer: &self.sequencer,
                now: self.last_frame,
                spinner_rotation: self.spinner_rotation,
                height: self.props.frame_height(),
            }),
            None => fallback::view(fallback::ViewContext {
                i18n,
                scheme: scheme.clone(),
                description: self.props.description.as_deref(),
                examples_link: self.examples_link(),
                sandbox_link: self.sandbox_link(),
                height: self.props.frame_height(),
            }),
        };

        let mut content = Column::new()
            .spacing(spacing::SM)
            .push(self.header(i18n, scheme.clone()))
            .push(body);

        if self.preview.is_some() {
            if let Some(description) = &self.props.description {
                content = content.push(
                    Text::new(description.as_str())
                        .size(typography::CAPTION)
                        .color(scheme.text_muted),
                );
            }
        }

        Container::new(content)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card(scheme))
            .into()
    }

    fn header<'a>(&'a self, i18n: &'a I18n, scheme: ColorScheme) -> Element<'a, Message> {
        let mut heading = Column::new().spacing(spacing::XXS).push(
            Text::new(i18n.tr("preview-panel-title"))
                .size(typography::BODY)
                .color(scheme.text_primary),
        );
        if let Some(title) = &self.props.title {
            heading = heading.push(
                Text::new(title.as_str())
                    .size(typography::CAPTION)
                    .color(scheme.text_muted),
            );
        }

        let badge = container(Text::new(i18n.tr("preview-badge")).size(typography::CAPTION))
            .padding([spacing::XXS / 2.0, spacing::XS])
            .style(styles::container::badge(scheme.clone()));

        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(heading)
            .push(badge)
            .push(Space::new().width(Length::Fill));

        if let (Some(preview), Some(link)) = (&self.preview, self.open_link()) {
            let label = match preview.kind() {
                LocatorKind::External => i18n.tr("preview-open-in-sandbox"),
                LocatorKind::Local => i18n.tr("preview-open-local"),
            };
            row = row.push(
                button(Text::new(label).size(typography::CAPTION))
                    .padding(0)
                    .style(styles::button::link(scheme.clone()))
                    .on_press(Message::OpenLink(link)),
            );
        }

        Container::new(row)
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::container::header(scheme))
            .into()
    }
}

impl Drop for State {
    fn drop(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{Locator, Phase, ThemePreference};

    fn light() -> AmbientTheme {
        AmbientTheme::from_preference(ThemePreference::Light)
    }

    fn dark() -> AmbientTheme {
        AmbientTheme::from_preference(ThemePreference::Dark)
    }

    fn registered(ambient: AmbientTheme) -> State {
        State::new(Props::new("alert-dialog"), Context::default(), ambient)
    }

    #[test]
    fn props_height_is_clamped() {
        assert_eq!(Props::new("x").frame_height(), 600);
        assert_eq!(Props::new("x").height(10).frame_height(), 200);
        assert_eq!(Props::new("x").height(9_000).frame_height(), 2_000);
    }

    #[test]
    fn unmounted_component_renders_dark() {
        let state = registered(light());
        assert_eq!(state.theme(), PreviewTheme::Dark);
        assert_eq!(state.sequencer().phase(), Phase::Idle);
    }

    #[test]
    fn mounting_resolves_theme_and_starts_loading() {
        let mut state = registered(light());
        let _ = state.update(Message::Mounted);

        assert!(state.is_mounted());
        assert_eq!(state.theme(), PreviewTheme::Light);
        assert_eq!(state.sequencer().phase(), Phase::Loading);
        assert!(state
            .preview()
            .is_some_and(|preview| preview.source().contains("theme=light")));
        // MaxWait timer and the surface navigation
        assert_eq!(state.pending_tasks(), 2);
    }

    #[test]
    fn second_mount_is_ignored() {
        let mut state = registered(dark());
        let _ = state.update(Message::Mounted);
        let cycle = state.sequencer().cycle();
        let _ = state.update(Message::Mounted);
        assert_eq!(state.sequencer().cycle(), cycle);
    }

    #[test]
    fn theme_change_starts_new_cycle() {
        let mut state = registered(dark());
        let t0 = Instant::now();
        let _ = state.update_at(Message::Mounted, t0);
        let first = state.sequencer().cycle();

        let _ = state.update_at(Message::ThemeChanged(light()), t0 + Duration::from_millis(50));

        assert_ne!(state.sequencer().cycle(), first);
        assert_eq!(state.theme(), PreviewTheme::Light);
        assert_eq!(state.sequencer().phase(), Phase::Loading);

        // A late signal from the dark surface does nothing
        let _ = state.update_at(
            Message::Surface {
                cycle: first,
                signal: SurfaceSignal::Load,
            },
            t0 + Duration::from_millis(900),
        );
        assert_eq!(state.sequencer().phase(), Phase::Loading);
    }

    #[test]
    fn same_theme_snapshot_keeps_cycle() {
        let mut state = registered(dark());
        let _ = state.update(Message::Mounted);
        let cycle = state.sequencer().cycle();

        let _ = state.update(Message::ThemeChanged(AmbientTheme::new(
            ThemePreference::System,
            Some(PreviewTheme::Dark),
        )));
        assert_eq!(state.sequencer().cycle(), cycle);
    }

    #[test]
    fn late_load_fades_overlay() {
        let mut state = registered(dark());
        let t0 = Instant::now();
        let _ = state.update_at(Message::Mounted, t0);
        let cycle = state.sequencer().cycle();

        let _ = state.update_at(
            Message::Surface {
                cycle,
                signal: SurfaceSignal::Load,
            },
            t0 + Duration::from_millis(1000),
        );
        assert_eq!(state.sequencer().phase(), Phase::FadingOut);

        let _ = state.update_at(
            Message::TimerElapsed {
                cycle,
                timer: Timer::FadeComplete,
            },
            t0 + Duration::from_millis(1300),
        );
        assert_eq!(state.sequencer().phase(), Phase::Hidden);
    }

    #[test]
    fn unmount_cancels_pending_work() {
        let mut state = registered(dark());
        let _ = state.update(Message::Mounted);
        let cycle = state.sequencer().cycle();

        let _ = state.update(Message::Unmounted);
        assert_eq!(state.pending_tasks(), 0);
        assert_eq!(state.sequencer().phase(), Phase::Idle);

        let _ = state.update(Message::TimerElapsed {
            cycle,
            timer: Timer::MaxWait,
        });
        assert_eq!(state.sequencer().phase(), Phase::Idle);
    }

    async fn outputs(task: Task<Message>) -> Vec<Message> {
        use iced::futures::StreamExt;

        let Some(stream) = iced_runtime::task::into_stream(task) else {
            return Vec::new();
        };
        stream
            .filter_map(|action| async move {
                match action {
                    iced_runtime::Action::Output(message) => Some(message),
                    _ => None,
                }
            })
            .collect()
            .await
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_timer_reports_its_cycle() {
        let mut state = registered(dark());
        let effects = state.sequencer.begin(Instant::now());
        let cycle = state.sequencer().cycle();
        let task = state.apply(effects);
        assert_eq!(state.pending_tasks(), 1);

        let messages = outputs(task).await;
        assert_eq!(messages.len(), 1);
        assert!(matches!(
            messages[0],
            Message::TimerElapsed {
                cycle: fired,
                timer: Timer::MaxWait,
            } if fired == cycle
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_timer_delivers_nothing() {
        let mut state = registered(dark());
        let effects = state.sequencer.begin(Instant::now());
        let task = state.apply(effects);

        let _ = state.update(Message::Unmounted);
        assert_eq!(state.pending_tasks(), 0);
        assert!(outputs(task).await.is_empty());
    }

    #[test]
    fn unregistered_component_has_no_cycle() {
        let mut state = State::new(Props::new("date-picker"), Context::default(), dark());
        let _ = state.update(Message::Mounted);

        assert!(state.preview().is_none());
        assert_eq!(state.sequencer().phase(), Phase::Idle);
        assert_eq!(state.pending_tasks(), 0);
        assert!(state.open_link().is_none());
    }

    #[test]
    fn header_link_targets_editor_page() {
        let mut state = registered(light());
        let _ = state.update(Message::Mounted);
        assert_eq!(
            state.open_link().as_deref(),
            Some("https://zapp.run/github/Sumithgatadi/Flutterbits/main/flutter_components/examples/alert_dialog_zapp.dart")
        );
    }

    #[test]
    fn local_locator_links_to_absolute_bundle() {
        let registry = ComponentRegistry::builtin().with_overrides([(
            "button".to_string(),
            Locator::Local {
                path: "/flutter/button/index.html".to_string(),
            },
        )]);
        let context = Context {
            registry: Arc::new(registry),
            ..Context::default()
        };
        let mut state = State::new(Props::new("button"), context, dark());
        let _ = state.update(Message::Mounted);

        assert_eq!(
            state.open_link().as_deref(),
            Some("http://localhost:3000/flutter/button/index.html?theme=dark")
        );
    }

    #[test]
    fn examples_link_appends_usage_anchor() {
        let context = Context {
            docs_url: Some("https://example.com/docs/alert-dialog".to_string()),
            ..Context::default()
        };
        let state = State::new(Props::new("date-picker"), context, dark());
        assert_eq!(
            state.examples_link().as_deref(),
            Some("https://example.com/docs/alert-dialog#usage")
        );
        assert_eq!(state.sandbox_link(), "https://zapp.run/");
    }

    #[test]
    fn spinner_only_ticks_while_overlay_is_shown() {
        let mut state = registered(dark());
        let _ = state.update(Message::SpinnerTick);
        assert!(state.spinner_rotation > 0.0);
        assert!(!state.sequencer().show_overlay());
        let _ = state.update(Message::Mounted);
        assert!(state.sequencer().show_overlay());
    }
}
