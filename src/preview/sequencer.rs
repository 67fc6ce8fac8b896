// SPDX-License-Identifier: MPL-2.0
//! Load sequencer governing the loading overlay of a preview surface.
//!
//! The sequencer is a pure state machine: callers pass the current
//! [`Instant`] in and receive [`Effect`]s describing which timers to arm or
//! cancel. It never reads the clock itself, which keeps every transition
//! reproducible under test.
//!
//! ```text
//! Idle ──begin──▶ Loading ──signal / MaxWait──▶ FadingOut ──FadeComplete──▶ Hidden
//!                    ▲                                                        │
//!                    └──────────────────── begin (theme change) ◀─────────────┘
//! ```
//!
//! Every timer and surface signal carries the [`CycleId`] it was issued
//! for. Anything arriving for an older cycle is ignored, so stale callbacks
//! cannot disturb a load started later.

use super::timings::Timings;
use std::time::{Duration, Instant};

/// Identifies one loading cycle of a component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CycleId(u64);

impl CycleId {
    #[must_use]
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Overlay lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No load in progress (before mount or after teardown).
    #[default]
    Idle,
    /// Surface is loading; overlay fully visible.
    Loading,
    /// Load finished; overlay is fading out.
    FadingOut,
    /// Overlay gone.
    Hidden,
}

/// Signals emitted by the preview surface.
///
/// Both variants end the loading phase identically; a failed load cannot
/// be told apart from a successful one across origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSignal {
    Load,
    Error,
}

/// Deferred callbacks armed by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Minimum display time reached after an early signal.
    MinDisplay,
    /// Fade-out finished.
    FadeComplete,
    /// No signal arrived in time.
    MaxWait,
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Drop every timer armed for earlier cycles.
    CancelPending,
    /// Fire `timer` for `cycle` after `after` has elapsed.
    Schedule {
        timer: Timer,
        after: Duration,
        cycle: CycleId,
    },
}

/// Loading overlay state for one component instance.
#[derive(Debug, Clone, Default)]
pub struct LoadSequencer {
    timings: Timings,
    phase: Phase,
    cycle: CycleId,
    load_started_at: Option<Instant>,
    fade_started_at: Option<Instant>,
    signal_received: bool,
}

impl LoadSequencer {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// Starts a new loading cycle, invalidating everything armed before.
    ///
    /// Called on mount and whenever the preview theme changes, since both
    /// re-create the surface.
    pub fn begin(&mut self, now: Instant) -> Vec<Effect> {
        self.cycle = self.cycle.next();
        self.phase = Phase::Loading;
        self.load_started_at = Some(now);
        self.fade_started_at = None;
        self.signal_received = false;

        tracing::debug!(cycle = self.cycle.0, "preview load started");

        vec![
            Effect::CancelPending,
            Effect::Schedule {
                timer: Timer::MaxWait,
                after: self.timings.max_wait.as_duration(),
                cycle: self.cycle,
            },
        ]
    }

    /// Handles a `load` or `error` signal from the surface.
    pub fn signal(&mut self, cycle: CycleId, signal: SurfaceSignal, now: Instant) -> Vec<Effect> {
        if cycle != self.cycle {
            tracing::trace!(?signal, "ignoring surface signal from a previous cycle");
            return Vec::new();
        }
        if self.phase != Phase::Loading || self.signal_received {
            return Vec::new();
        }
        self.signal_received = true;

        let started = self.load_started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started);
        let min_display = self.timings.min_display.as_duration();

        tracing::debug!(
            ?signal,
            elapsed_ms = elapsed.as_millis() as u64,
            "preview surface signalled"
        );

        if elapsed < min_display {
            vec![Effect::Schedule {
                timer: Timer::MinDisplay,
                after: min_display - elapsed,
                cycle: self.cycle,
            }]
        } else {
            self.start_fade(now)
        }
    }

    /// Handles a timer armed by an earlier [`Effect::Schedule`].
    pub fn timer_elapsed(&mut self, cycle: CycleId, timer: Timer, now: Instant) -> Vec<Effect> {
        if cycle != self.cycle {
            tracing::trace!(?timer, "ignoring timer from a previous cycle");
            return Vec::new();
        }

        match timer {
            Timer::MinDisplay if self.phase == Phase::Loading && self.signal_received => {
                self.start_fade(now)
            }
            Timer::MaxWait if self.phase == Phase::Loading && !self.signal_received => {
                tracing::debug!("no surface signal before max wait, dismissing overlay");
                self.start_fade(now)
            }
            Timer::FadeComplete if self.phase == Phase::FadingOut => {
                self.phase = Phase::Hidden;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Tears the instance down; late callbacks become no-ops.
    pub fn teardown(&mut self) -> Vec<Effect> {
        self.cycle = self.cycle.next();
        self.phase = Phase::Idle;
        self.load_started_at = None;
        self.fade_started_at = None;
        self.signal_received = false;
        vec![Effect::CancelPending]
    }

    fn start_fade(&mut self, now: Instant) -> Vec<Effect> {
        let fade = self.timings.fade.as_duration();
        self.fade_started_at = Some(now);
        if fade.is_zero() {
            self.phase = Phase::Hidden;
            return Vec::new();
        }
        self.phase = Phase::FadingOut;
        vec![Effect::Schedule {
            timer: Timer::FadeComplete,
            after: fade,
            cycle: self.cycle,
        }]
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn cycle(&self) -> CycleId {
        self.cycle
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Whether the surface is still considered loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether the overlay is on screen, including while it fades out.
    #[must_use]
    pub fn show_overlay(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::FadingOut)
    }

    /// Whether the surface content should be rendered (fade-in included).
    #[must_use]
    pub fn surface_visible(&self) -> bool {
        matches!(self.phase, Phase::FadingOut | Phase::Hidden)
    }

    /// When the current cycle started.
    #[must_use]
    pub fn load_started_at(&self) -> Option<Instant> {
        self.load_started_at
    }

    /// Overlay opacity in `0.0..=1.0` at `now`.
    #[must_use]
    pub fn overlay_opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Loading => 1.0,
            Phase::FadingOut => {
                let fade = self.timings.fade.as_duration();
                let Some(started) = self.fade_started_at else {
                    return 0.0;
                };
                if fade.is_zero() {
                    return 0.0;
                }
                let progress =
                    now.saturating_duration_since(started).as_secs_f32() / fade.as_secs_f32();
                (1.0 - progress).clamp(0.0, 1.0)
            }
            Phase::Idle | Phase::Hidden => 0.0,
        }
    }

    /// Surface opacity at `now`: hidden while loading, fading in with the overlay.
    #[must_use]
    pub fn surface_opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Loading => 0.0,
            Phase::FadingOut => 1.0 - self.overlay_opacity(now),
            Phase::Idle | Phase::Hidden => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn started() -> (LoadSequencer, Instant) {
        let mut sequencer = LoadSequencer::new(Timings::default());
        let t0 = Instant::now();
        sequencer.begin(t0);
        (sequencer, t0)
    }

    fn scheduled(effects: &[Effect]) -> Vec<(Timer, Duration)> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Schedule { timer, after, .. } => Some((*timer, *after)),
                Effect::CancelPending => None,
            })
            .collect()
    }

    #[test]
    fn begin_enters_loading_and_arms_max_wait() {
        let mut sequencer = LoadSequencer::new(Timings::default());
        assert_eq!(sequencer.phase(), Phase::Idle);
        assert!(!sequencer.show_overlay());

        let t0 = Instant::now();
        let effects = sequencer.begin(t0);

        assert_eq!(effects[0], Effect::CancelPending);
        assert_eq!(scheduled(&effects), vec![(Timer::MaxWait, ms(3000))]);
        assert!(sequencer.is_loading());
        assert!(sequencer.show_overlay());
        assert_eq!(sequencer.load_started_at(), Some(t0));
    }

    #[test]
    fn early_load_waits_for_min_display() {
        let (mut sequencer, t0) = started();
        let cycle = sequencer.cycle();

        let effects = sequencer.signal(cycle, SurfaceSignal::Load, t0 + ms(200));
        assert_eq!(scheduled(&effects), vec![(Timer::MinDisplay, ms(600))]);
        assert!(sequencer.is_loading());

        let effects = sequencer.timer_elapsed(cycle, Timer::MinDisplay, t0 + ms(800));
        assert_eq!(scheduled(&effects), vec![(Timer::FadeComplete, ms(300))]);
        assert!(!sequencer.is_loading());
        assert!(sequencer.show_overlay());

        sequencer.timer_elapsed(cycle, Timer::FadeComplete, t0 + ms(1100));
        assert_eq!(sequencer.phase(), Phase::Hidden);
        assert!(!sequencer.show_overlay());
    }

    #[test]
    fn late_load_fades_immediately() {
        let (mut sequencer, t0) = started();
        let cycle = sequencer.cycle();

        let effects = sequencer.signal(cycle, SurfaceSignal::Load, t0 + ms(1000));
        assert_eq!(scheduled(&effects), vec![(Timer::FadeComplete, ms(300))]);
        assert_eq!(sequencer.phase(), Phase::FadingOut);
        assert!(!sequencer.is_loading());

        sequencer.timer_elapsed(cycle, Timer::FadeComplete, t0 + ms(1300));
        assert_eq!(sequencer.phase(), Phase::Hidden);
    }

    #[test]
    fn max_wait_dismisses_silent_surface() {
        let (mut sequencer, t0) = started();
        let cycle = sequencer.cycle();

        let effects = sequencer.timer_elapsed(cycle, Timer::MaxWait, t0 + ms(3000));
        assert_eq!(scheduled(&effects), vec![(Timer::FadeComplete, ms(300))]);
        assert_eq!(sequencer.phase(), Phase::FadingOut);
    }

    #[test]
    fn error_and_load_produce_identical_transitions() {
        for elapsed in [200, 1000] {
            let (mut with_load, t0) = started();
            let (mut with_error, t1) = started();

            let load_effects =
                with_load.signal(with_load.cycle(), SurfaceSignal::Load, t0 + ms(elapsed));
            let error_effects =
                with_error.signal(with_error.cycle(), SurfaceSignal::Error, t1 + ms(elapsed));

            assert_eq!(scheduled(&load_effects), scheduled(&error_effects));
            assert_eq!(with_load.phase(), with_error.phase());
        }
    }

    #[test]
    fn max_wait_after_signal_is_noop() {
        let (mut sequencer, t0) = started();
        let cycle = sequencer.cycle();

        sequencer.signal(cycle, SurfaceSignal::Load, t0 + ms(200));
        let effects = sequencer.timer_elapsed(cycle, Timer::MaxWait, t0 + ms(3000));

        assert!(effects.is_empty());
        assert!(sequencer.is_loading(), "fade still waits for MinDisplay");
    }

    #[test]
    fn duplicate_fade_triggers_do_not_double_schedule() {
        let (mut sequencer, t0) = started();
        let cycle = sequencer.cycle();

        sequencer.timer_elapsed(cycle, Timer::MaxWait, t0 + ms(3000));
        assert!(sequencer
            .signal(cycle, SurfaceSignal::Load, t0 + ms(3050))
            .is_empty());
        assert!(sequencer
            .timer_elapsed(cycle, Timer::MinDisplay, t0 + ms(3100))
            .is_empty());
        assert!(sequencer
            .timer_elapsed(cycle, Timer::MaxWait, t0 + ms(3150))
            .is_empty());
        assert_eq!(sequencer.phase(), Phase::FadingOut);
    }

    #[test]
    fn second_signal_is_ignored() {
        let (mut sequencer, t0) = started();
        let cycle = sequencer.cycle();

        sequencer.signal(cycle, SurfaceSignal::Load, t0 + ms(100));
        assert!(sequencer
            .signal(cycle, SurfaceSignal::Error, t0 + ms(900))
            .is_empty());
        assert!(sequencer.is_loading());
    }

    #[test]
    fn restart_invalidates_previous_cycle() {
        let (mut sequencer, t0) = started();
        let old_cycle = sequencer.cycle();
        sequencer.signal(old_cycle, SurfaceSignal::Load, t0 + ms(1000));
        assert_eq!(sequencer.phase(), Phase::FadingOut);

        let t1 = t0 + ms(1100);
        let effects = sequencer.begin(t1);
        assert_eq!(effects[0], Effect::CancelPending);
        assert_ne!(sequencer.cycle(), old_cycle);
        assert_eq!(sequencer.load_started_at(), Some(t1));

        assert!(sequencer
            .timer_elapsed(old_cycle, Timer::FadeComplete, t0 + ms(1300))
            .is_empty());
        assert!(sequencer
            .signal(old_cycle, SurfaceSignal::Load, t0 + ms(1400))
            .is_empty());
        assert!(sequencer
            .timer_elapsed(old_cycle, Timer::MaxWait, t0 + ms(3000))
            .is_empty());
        assert!(sequencer.is_loading());
    }

    #[test]
    fn restart_measures_min_display_from_new_start() {
        let (mut sequencer, t0) = started();
        let t1 = t0 + ms(2000);
        sequencer.begin(t1);

        let effects = sequencer.signal(sequencer.cycle(), SurfaceSignal::Load, t1 + ms(300));
        assert_eq!(scheduled(&effects), vec![(Timer::MinDisplay, ms(500))]);
    }

    #[test]
    fn teardown_ignores_late_callbacks() {
        let (mut sequencer, t0) = started();
        let cycle = sequencer.cycle();

        assert_eq!(sequencer.teardown(), vec![Effect::CancelPending]);
        assert_eq!(sequencer.phase(), Phase::Idle);
        assert!(sequencer
            .timer_elapsed(cycle, Timer::MaxWait, t0 + ms(3000))
            .is_empty());
        assert!(!sequencer.show_overlay());
    }

    #[test]
    fn zero_fade_hides_at_once() {
        let mut sequencer = LoadSequencer::new(Timings::from_millis(800, 0, 3000));
        let t0 = Instant::now();
        sequencer.begin(t0);

        let effects = sequencer.signal(sequencer.cycle(), SurfaceSignal::Load, t0 + ms(900));
        assert!(effects.is_empty());
        assert_eq!(sequencer.phase(), Phase::Hidden);
    }

    #[test]
    fn overlay_opacity_follows_fade() {
        let (mut sequencer, t0) = started();
        assert_eq!(sequencer.overlay_opacity(t0), 1.0);
        assert_eq!(sequencer.surface_opacity(t0), 0.0);

        let fade_start = t0 + ms(1000);
        sequencer.signal(sequencer.cycle(), SurfaceSignal::Load, fade_start);

        let halfway = sequencer.overlay_opacity(fade_start + ms(150));
        assert!((halfway - 0.5).abs() < 0.01);
        assert_eq!(sequencer.overlay_opacity(fade_start + ms(400)), 0.0);
        assert!((sequencer.surface_opacity(fade_start + ms(150)) - 0.5).abs() < 0.01);
    }

    #[test]
    fn surface_becomes_visible_once_fading() {
        let (mut sequencer, t0) = started();
        assert!(!sequencer.surface_visible());

        sequencer.signal(sequencer.cycle(), SurfaceSignal::Error, t0 + ms(900));
        assert!(sequencer.surface_visible());

        sequencer.teardown();
        assert!(!sequencer.surface_visible());
    }
}
