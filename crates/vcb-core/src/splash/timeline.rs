//! Timings of the intro sequence.

use std::time::Duration;

use super::easing::EASE_OUT;

/// Auto-advance delay after the splash appears.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(9);
/// Radial reveal duration.
pub const REVEAL: Duration = Duration::from_millis(2500);
/// Plain fade used instead of the reveal under reduced motion.
pub const REVEAL_REDUCED: Duration = Duration::from_millis(300);
/// The skip control fades in after this delay.
pub const SKIP_DELAY: Duration = Duration::from_millis(500);
pub const SKIP_FADE: Duration = Duration::from_millis(300);

/// Phase deadlines derived from the motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTimings {
    pub auto_advance: Duration,
    pub reveal: Duration,
}

impl SplashTimings {
    pub fn for_motion(reduced_motion: bool) -> Self {
        Self {
            auto_advance: AUTO_ADVANCE,
            reveal: if reduced_motion { REVEAL_REDUCED } else { REVEAL },
        }
    }
}

/// The staged elements of the intro, in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntroStage {
    Logo,
    Caption,
    Arrow,
    BaseMark,
}

/// When a stage starts fading in, relative to the splash appearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTiming {
    pub delay: Duration,
    pub duration: Duration,
}

impl StageTiming {
    const fn ms(delay: u64, duration: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay),
            duration: Duration::from_millis(duration),
        }
    }

    /// Opacity in `[0, 1]` after `elapsed` time on screen.
    pub fn opacity(&self, elapsed: Duration, reduced_motion: bool) -> f32 {
        let Some(into_stage) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = (into_stage.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        if reduced_motion {
            linear
        } else {
            EASE_OUT.apply(linear)
        }
    }
}

impl IntroStage {
    pub fn all() -> &'static [IntroStage] {
        &[Self::Logo, Self::Caption, Self::Arrow, Self::BaseMark]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Logo => "4StudentLives",
            Self::Caption => "Presents Dossier for",
            Self::Arrow => "Arrow",
            Self::BaseMark => "VC Brief",
        }
    }

    pub fn timing(&self, reduced_motion: bool) -> StageTiming {
        match (self, reduced_motion) {
            (Self::Logo, false) => StageTiming::ms(0, 1300),
            (Self::Caption, false) => StageTiming::ms(2300, 900),
            (Self::Arrow, false) => StageTiming::ms(3900, 800),
            (Self::BaseMark, false) => StageTiming::ms(4900, 1000),
            (Self::Logo, true) => StageTiming::ms(0, 300),
            (Self::Caption, true) => StageTiming::ms(300, 200),
            (Self::Arrow, true) => StageTiming::ms(500, 200),
            (Self::BaseMark, true) => StageTiming::ms(600, 200),
        }
    }

    /// When the stage is fully visible.
    pub fn settled_after(&self, reduced_motion: bool) -> Duration {
        let timing = self.timing(reduced_motion);
        timing.delay + timing.duration
    }
}

/// Opacity of the skip control after `elapsed` time on screen.
pub fn skip_opacity(elapsed: Duration) -> f32 {
    StageTiming {
        delay: SKIP_DELAY,
        duration: SKIP_FADE,
    }
    .opacity(elapsed, true)
}
