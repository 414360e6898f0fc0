//! Splash sequence controller scenarios.

use std::time::{Duration, Instant};

use vcb_core::splash::IntroStage;
use vcb_core::{
    ExitTrigger, INTRO_SEEN_KEY, MemorySessionStore, SessionStore, SplashController,
    SplashOptions, SplashPhase,
};

fn fresh(now: Instant) -> SplashController<MemorySessionStore> {
    SplashController::start(MemorySessionStore::new(), SplashOptions::default(), now)
}

fn secs(value: f32) -> Duration {
    Duration::from_secs_f32(value)
}

#[test]
fn first_visit_shows_then_skip_hides_after_reveal() {
    let t0 = Instant::now();
    let mut splash = fresh(t0);
    assert!(matches!(splash.phase(), SplashPhase::Showing { .. }));

    assert!(splash.trigger_exit(ExitTrigger::SkipButton, t0));
    assert!(splash.is_exiting());
    assert_eq!(splash.store().get(INTRO_SEEN_KEY).as_deref(), Some("true"));

    assert!(!splash.tick(t0 + secs(2.4)));
    assert!(splash.is_exiting());
    assert!(splash.tick(t0 + secs(2.5)));
    assert!(splash.is_hidden());
}

#[test]
fn seen_flag_skips_straight_to_hidden() {
    let t0 = Instant::now();
    let store = MemorySessionStore::with(INTRO_SEEN_KEY, "true");
    let mut splash = SplashController::start(store, SplashOptions::default(), t0);
    assert_eq!(splash.phase(), SplashPhase::Hidden);
    assert_eq!(splash.next_wakeup(t0), None);
    assert!(!splash.tick(t0 + secs(60.0)));
    assert_eq!(splash.phase(), SplashPhase::Hidden);
}

#[test]
fn always_show_ignores_the_flag() {
    let t0 = Instant::now();
    let store = MemorySessionStore::with(INTRO_SEEN_KEY, "true");
    let options = SplashOptions {
        always_show: true,
        ..SplashOptions::default()
    };
    let splash = SplashController::start(store, options, t0);
    assert!(splash.is_visible());
}

#[test]
fn auto_advance_after_nine_seconds() {
    let t0 = Instant::now();
    let mut splash = fresh(t0);
    assert!(!splash.tick(t0 + secs(8.9)));
    assert_eq!(splash.next_wakeup(t0 + secs(8.0)), Some(secs(1.0)));

    assert!(splash.tick(t0 + secs(9.0)));
    assert!(splash.is_exiting());
    assert!(splash.store().get(INTRO_SEEN_KEY).is_some());
}

#[test]
fn late_tick_resolves_both_deadlines() {
    let t0 = Instant::now();
    let mut splash = fresh(t0);
    // A backgrounded window can miss frames for a long time.
    splash.tick(t0 + secs(30.0));
    assert!(splash.is_exiting());
    splash.tick(t0 + secs(32.5));
    assert!(splash.is_hidden());
}

#[test]
fn triggers_are_interchangeable() {
    for trigger in [
        ExitTrigger::AutoAdvance,
        ExitTrigger::Click,
        ExitTrigger::SkipButton,
        ExitTrigger::Escape,
    ] {
        let t0 = Instant::now();
        let mut splash = fresh(t0);
        assert!(splash.trigger_exit(trigger, t0 + secs(1.0)));
        splash.tick(t0 + secs(3.5));
        assert!(splash.is_hidden(), "{trigger:?}");
    }
}

#[test]
fn second_trigger_does_not_move_deadline() {
    let t0 = Instant::now();
    let mut splash = fresh(t0);
    splash.trigger_exit(ExitTrigger::Click, t0);
    let before = splash.phase();

    assert!(!splash.trigger_exit(ExitTrigger::Escape, t0 + secs(2.0)));
    assert_eq!(splash.phase(), before);
    splash.tick(t0 + secs(2.5));
    assert!(splash.is_hidden());
}

#[test]
fn hidden_never_returns_to_showing() {
    let t0 = Instant::now();
    let mut splash = fresh(t0);
    splash.trigger_exit(ExitTrigger::Escape, t0);
    splash.tick(t0 + secs(3.0));
    assert!(!splash.trigger_exit(ExitTrigger::Click, t0 + secs(4.0)));
    assert_eq!(splash.decide(t0 + secs(5.0)), SplashPhase::Hidden);
}

#[test]
fn reduced_motion_reveal_is_short() {
    let t0 = Instant::now();
    let options = SplashOptions {
        reduced_motion: true,
        ..SplashOptions::default()
    };
    let mut splash = SplashController::start(MemorySessionStore::new(), options, t0);
    splash.trigger_exit(ExitTrigger::Escape, t0);
    assert!((splash.progress(t0 + secs(0.15)) - 50.0).abs() < 0.5);
    assert!(splash.tick(t0 + secs(0.3)));
    assert!(splash.is_hidden());
}

#[test]
fn progress_spans_zero_to_one_hundred() {
    let t0 = Instant::now();
    let mut splash = fresh(t0);
    assert_eq!(splash.progress(t0), 0.0);
    splash.trigger_exit(ExitTrigger::Click, t0);
    let midway = splash.progress(t0 + secs(1.0));
    assert!(midway > 0.0 && midway < 100.0);
    assert_eq!(splash.progress(t0 + secs(5.0)), 100.0);
    splash.tick(t0 + secs(5.0));
    assert_eq!(splash.progress(t0 + secs(5.0)), 100.0);
}

#[test]
fn decide_is_explicit_for_new_controllers() {
    let t0 = Instant::now();
    let mut splash = SplashController::new(MemorySessionStore::new(), SplashOptions::default());
    assert_eq!(splash.phase(), SplashPhase::Deciding);
    assert!(!splash.is_visible());
    assert_eq!(splash.next_wakeup(t0), Some(Duration::ZERO));
    splash.decide(t0);
    assert!(splash.is_visible());
}

#[test]
fn stages_fade_in_while_showing() {
    let t0 = Instant::now();
    let splash = fresh(t0);
    assert_eq!(splash.stage_opacity(IntroStage::Caption, t0 + secs(1.0)), 0.0);
    assert_eq!(splash.stage_opacity(IntroStage::Caption, t0 + secs(3.5)), 1.0);
    assert_eq!(splash.skip_opacity(t0), 0.0);
    assert_eq!(splash.skip_opacity(t0 + secs(1.0)), 1.0);
}
