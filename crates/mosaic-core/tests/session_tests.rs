// Host-side tests for the session context and its interaction handlers.

use mosaic_core::{Session, VisualMode, INITIAL_CLOCK_SPAN_MS};
use rand::rngs::StdRng;
use rand::SeedableRng;

const W: f64 = 1000.0;
const H: f64 = 600.0;

#[test]
fn random_start_is_within_first_minute() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let s = Session::new(&mut rng);
        assert!((0.0..INITIAL_CLOCK_SPAN_MS).contains(&s.clock_ms()), "seed {seed}");
    }
}

#[test]
fn independent_sessions_do_not_share_state() {
    let mut a = Session::with_clock(0.0);
    let b = Session::with_clock(0.0);
    a.click();
    a.on_tick(100.0, 0.0);
    assert_eq!(a.state().mode, VisualMode::Light);
    assert_eq!(b.state().mode, VisualMode::Normal);
    assert_eq!(b.clock_ms(), 0.0);
}

#[test]
fn press_outside_control_strip_is_not_a_drag() {
    let mut s = Session::with_clock(0.0);
    assert!(!s.pointer_down(100.0, H - 45.0, W, H));
    assert!(!s.state().adjusting);
    assert_eq!(s.pointer_move(0.0, W), None);
    assert_eq!(s.state().speed, 1.0);
    assert!(s.pointer_up(0.0).is_none());

    s.click();
    assert_eq!(s.state().mode, VisualMode::Light);
}

#[test]
fn drag_in_control_strip_sets_speed_and_suppresses_click() {
    let mut s = Session::with_clock(0.0);
    assert!(s.pointer_down(500.0, H - 10.0, W, H));
    assert!(s.state().adjusting);
    assert_eq!(s.state().speed, 0.0, "press applies the pointer immediately");

    assert_eq!(s.pointer_move(900.0, W), Some(4.0));
    let ticket = s.pointer_up(2_000.0).expect("drag active");
    // The click that follows the release lands inside the grace window.
    s.click();
    assert_eq!(s.state().mode, VisualMode::Normal);
    assert!(s.speed_display().visible);

    assert!(s.release(ticket));
    assert!(!s.speed_display().visible);
    assert_eq!(s.speed_display().text, "Speed: 400%");

    s.click();
    assert_eq!(s.state().mode, VisualMode::Light);
}

#[test]
fn tick_polls_grace_window_before_advancing() {
    let mut s = Session::with_clock(1_000.0);
    s.pointer_down(0.0, H, W, H);
    s.pointer_up(0.0);
    s.on_tick(16.0, 100.0);
    assert!(s.state().adjusting);
    s.on_tick(16.0, 150.0);
    assert!(!s.state().adjusting);
    assert_eq!(s.clock_ms(), 1_000.0 - 2.0 * 16.0 * 5.0);
}

#[test]
fn regrab_during_grace_window_keeps_drag_alive() {
    let mut s = Session::with_clock(0.0);
    s.pointer_down(250.0, H - 1.0, W, H);
    let stale = s.pointer_up(0.0).expect("drag active");
    s.pointer_down(750.0, H - 1.0, W, H);
    assert!(!s.release(stale));
    s.on_tick(0.0, 1_000.0);
    assert!(s.state().adjusting);
    assert_eq!(s.state().speed, 2.5);
}

#[test]
fn malformed_pointer_coordinates_are_ignored() {
    let mut s = Session::with_clock(0.0);
    assert!(!s.pointer_down(10.0, f64::NAN, W, H));
    s.pointer_down(500.0, H, W, H);
    assert_eq!(s.pointer_move(f64::NAN, W), None);
    assert_eq!(s.state().speed, 0.0);
}

#[test]
fn playback_view_reflects_handlers() {
    let mut s = Session::with_clock(2_500.0);
    s.pointer_down(1000.0, H, W, H);
    let p = s.playback();
    assert_eq!(p.clock().ms(), 2_500.0);
    assert_eq!(p.speed(), 5.0);
    assert!(p.is_adjusting());
    assert!(p.pending_release().is_none());
}
