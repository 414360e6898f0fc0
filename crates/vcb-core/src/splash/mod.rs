//! The splash sequence controller.
//!
//! ```text
//! Deciding ──flag set──────────────────────────────► Hidden
//!    │                                                 ▲
//!    └─flag absent─► Showing ──trigger──► Exiting ──reveal elapsed
//! ```
//!
//! Deadlines live inside the phase variants and are checked by
//! [`SplashController::tick`]. Nothing is scheduled, so leaving a phase
//! (or dropping the controller) cancels its pending transition.

pub mod easing;
pub mod session;
pub mod timeline;

use std::time::{Duration, Instant};

pub use session::{
    FileSessionStore, INTRO_SEEN_KEY, MemorySessionStore, SessionStore, desktop_session_store,
    session_file_path,
};
pub use timeline::{IntroStage, SplashTimings, StageTiming};

/// Lifecycle of the intro overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Session flag not yet consulted.
    Deciding,
    Showing {
        shown_at: Instant,
        auto_exit_at: Instant,
    },
    Exiting {
        shown_at: Instant,
        started_at: Instant,
        hidden_at: Instant,
    },
    /// Terminal for the session.
    Hidden,
}

impl SplashPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deciding => "deciding",
            Self::Showing { .. } => "showing",
            Self::Exiting { .. } => "exiting",
            Self::Hidden => "hidden",
        }
    }
}

/// What ended the intro. All triggers behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTrigger {
    AutoAdvance,
    Click,
    SkipButton,
    Escape,
}

impl ExitTrigger {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AutoAdvance => "auto-advance",
            Self::Click => "click",
            Self::SkipButton => "skip button",
            Self::Escape => "escape",
        }
    }
}

/// Options read from user settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplashOptions {
    pub reduced_motion: bool,
    /// Show the intro even when the session flag is set.
    pub always_show: bool,
}

#[derive(Debug)]
pub struct SplashController<S> {
    phase: SplashPhase,
    options: SplashOptions,
    timings: SplashTimings,
    store: S,
}

impl<S: SessionStore> SplashController<S> {
    /// A controller in `Deciding`. Call [`decide`](Self::decide) next.
    pub fn new(store: S, options: SplashOptions) -> Self {
        Self {
            phase: SplashPhase::Deciding,
            options,
            timings: SplashTimings::for_motion(options.reduced_motion),
            store,
        }
    }

    /// Creates the controller and resolves `Deciding` immediately.
    pub fn start(store: S, options: SplashOptions, now: Instant) -> Self {
        let mut controller = Self::new(store, options);
        controller.decide(now);
        controller
    }

    /// Consults the session flag. Has no effect outside `Deciding`.
    pub fn decide(&mut self, now: Instant) -> SplashPhase {
        if self.phase != SplashPhase::Deciding {
            return self.phase;
        }
        let seen = self.store.get(INTRO_SEEN_KEY).is_some();
        self.phase = if seen && !self.options.always_show {
            tracing::debug!("Intro already seen this session");
            SplashPhase::Hidden
        } else {
            tracing::debug!(reduced_motion = self.options.reduced_motion, "Showing intro");
            SplashPhase::Showing {
                shown_at: now,
                auto_exit_at: now + self.timings.auto_advance,
            }
        };
        self.phase
    }

    /// Starts the reveal. Returns `false` unless the splash was `Showing`.
    ///
    /// The session flag is written here, before `Hidden` is reached.
    pub fn trigger_exit(&mut self, trigger: ExitTrigger, now: Instant) -> bool {
        let SplashPhase::Showing { shown_at, .. } = self.phase else {
            return false;
        };
        if let Err(err) = self.store.set(INTRO_SEEN_KEY, "true") {
            tracing::warn!(error = %err, "Could not record intro as seen");
        }
        self.phase = SplashPhase::Exiting {
            shown_at,
            started_at: now,
            hidden_at: now + self.timings.reveal,
        };
        tracing::debug!(trigger = trigger.label(), "Intro exiting");
        true
    }

    /// Applies any deadline that has passed. Returns `true` if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.phase;
        if let SplashPhase::Showing { auto_exit_at, .. } = self.phase
            && now >= auto_exit_at
        {
            self.trigger_exit(ExitTrigger::AutoAdvance, now);
        }
        if let SplashPhase::Exiting { hidden_at, .. } = self.phase
            && now >= hidden_at
        {
            self.phase = SplashPhase::Hidden;
            tracing::info!("Intro finished");
        }
        before != self.phase
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn options(&self) -> SplashOptions {
        self.options
    }

    pub fn timings(&self) -> SplashTimings {
        self.timings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The overlay is drawn in `Showing` and `Exiting`.
    pub fn is_visible(&self) -> bool {
        matches!(
            self.phase,
            SplashPhase::Showing { .. } | SplashPhase::Exiting { .. }
        )
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, SplashPhase::Exiting { .. })
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == SplashPhase::Hidden
    }

    /// Reveal progress in `[0, 100]`, eased unless motion is reduced.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            SplashPhase::Deciding | SplashPhase::Showing { .. } => 0.0,
            SplashPhase::Exiting {
                started_at,
                hidden_at,
                ..
            } => {
                let total = hidden_at.saturating_duration_since(started_at).as_secs_f32();
                let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
                let linear = if total > 0.0 {
                    (elapsed / total).min(1.0)
                } else {
                    1.0
                };
                let eased = if self.options.reduced_motion {
                    linear
                } else {
                    easing::REVEAL.apply(linear)
                };
                eased * 100.0
            }
            SplashPhase::Hidden => 100.0,
        }
    }

    /// Time on screen, for the staged fade-ins.
    fn elapsed_on_screen(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            SplashPhase::Showing { shown_at, .. } | SplashPhase::Exiting { shown_at, .. } => {
                Some(now.saturating_duration_since(shown_at))
            }
            SplashPhase::Deciding | SplashPhase::Hidden => None,
        }
    }

    pub fn stage_opacity(&self, stage: IntroStage, now: Instant) -> f32 {
        self.elapsed_on_screen(now).map_or(0.0, |elapsed| {
            stage
                .timing(self.options.reduced_motion)
                .opacity(elapsed, self.options.reduced_motion)
        })
    }

    pub fn skip_opacity(&self, now: Instant) -> f32 {
        self.elapsed_on_screen(now)
            .map_or(0.0, timeline::skip_opacity)
    }

    /// Whether the frame at `now` still has motion to draw.
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.phase {
            SplashPhase::Exiting { .. } => true,
            SplashPhase::Showing { .. } => {
                let Some(elapsed) = self.elapsed_on_screen(now) else {
                    return false;
                };
                let reduced = self.options.reduced_motion;
                let last_stage = IntroStage::BaseMark.settled_after(reduced);
                // The starfield twinkles for the whole intro unless motion is reduced.
                !reduced || elapsed < last_stage.max(timeline::SKIP_DELAY + timeline::SKIP_FADE)
            }
            SplashPhase::Deciding | SplashPhase::Hidden => false,
        }
    }

    /// Delay until the next deadline, `None` once hidden.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            SplashPhase::Deciding => Some(Duration::ZERO),
            SplashPhase::Showing { auto_exit_at, .. } => {
                Some(auto_exit_at.saturating_duration_since(now))
            }
            SplashPhase::Exiting { hidden_at, .. } => Some(hidden_at.saturating_duration_since(now)),
            SplashPhase::Hidden => None,
        }
    }
}
