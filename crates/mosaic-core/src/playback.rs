//! Virtual clock and the playback controls that drive it.
//!
//! The clock is the only time input to the field. It advances by the host's
//! frame delta scaled by the user speed scalar and the mode damping, so it can
//! stand still, run backwards, or race ahead.

use crate::constants::*;
use log::{debug, info};

/// The two visual presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualMode {
    #[default]
    Normal,
    /// Calmer, pastel preset that also runs at half speed.
    Light,
}

impl VisualMode {
    pub fn toggled(self) -> Self {
        match self {
            VisualMode::Normal => VisualMode::Light,
            VisualMode::Light => VisualMode::Normal,
        }
    }

    /// Time damping applied on top of the speed scalar.
    pub fn damping(self) -> f64 {
        match self {
            VisualMode::Normal => NORMAL_DAMPING,
            VisualMode::Light => LIGHT_DAMPING,
        }
    }
}

/// Elapsed virtual milliseconds. Unbounded, negative after enough reverse play.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct VirtualClock {
    ms: f64,
}

impl VirtualClock {
    pub fn from_ms(ms: f64) -> Self {
        Self { ms }
    }

    #[inline]
    pub fn ms(&self) -> f64 {
        self.ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackState {
    /// Signed multiplier in \[-SPEED_LIMIT, SPEED_LIMIT\]. Zero pauses.
    pub speed: f64,
    /// True from pointerdown in the control strip until the release grace window ends.
    pub adjusting: bool,
    pub mode: VisualMode,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            speed: INITIAL_SPEED,
            adjusting: false,
            mode: VisualMode::Normal,
        }
    }
}

/// Handle for a scheduled end of a speed adjustment.
///
/// A ticket is only honoured while it is the latest one issued; starting a new
/// adjustment invalidates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseTicket {
    generation: u64,
    due_ms: f64,
}

impl ReleaseTicket {
    pub fn due_ms(&self) -> f64 {
        self.due_ms
    }
}

/// What the host should show in the speed indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeedDisplay {
    pub visible: bool,
    pub text: String,
}

pub fn speed_label(speed: f64) -> String {
    format!("Speed: {}%", (speed * 100.0).floor() as i64)
}

#[derive(Clone, Debug, Default)]
pub struct Playback {
    clock: VirtualClock,
    state: PlaybackState,
    generation: u64,
    pending: Option<ReleaseTicket>,
}

impl Playback {
    pub fn new(clock: VirtualClock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    pub fn clock(&self) -> VirtualClock {
        self.clock
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn mode(&self) -> VisualMode {
        self.state.mode
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn is_adjusting(&self) -> bool {
        self.state.adjusting
    }

    pub fn pending_release(&self) -> Option<ReleaseTicket> {
        self.pending
    }

    pub fn advance(&mut self, frame_delta_ms: f64) {
        if !frame_delta_ms.is_finite() {
            return;
        }
        self.clock.ms += frame_delta_ms * self.state.mode.damping() * self.state.speed;
    }

    pub fn begin_speed_adjust(&mut self) {
        // Bumping the generation voids any ticket handed out earlier.
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        if !self.state.adjusting {
            info!("[speed] adjust begin");
        }
        self.state.adjusting = true;
    }

    /// Map a pointer X position across the surface to a speed in
    /// \[-SPEED_LIMIT, SPEED_LIMIT\]. Ignored unless an adjustment is active or
    /// the coordinates are unusable.
    pub fn update_speed_from_pointer_x(&mut self, px: f64, surface_width: f64) -> Option<f64> {
        if !self.state.adjusting {
            return None;
        }
        if !px.is_finite() || !surface_width.is_finite() || surface_width <= 0.0 {
            return None;
        }
        // (px / width - 0.5) * 2L, arranged so whole-pixel inputs stay exact
        let speed = (px * (2.0 * SPEED_LIMIT) / surface_width - SPEED_LIMIT)
            .clamp(-SPEED_LIMIT, SPEED_LIMIT);
        self.state.speed = speed;
        Some(speed)
    }

    /// Schedule the end of the current adjustment after the grace window.
    pub fn end_speed_adjust(&mut self, now_ms: f64) -> Option<ReleaseTicket> {
        if !self.state.adjusting {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        let ticket = ReleaseTicket {
            generation: self.generation,
            due_ms: now_ms + SPEED_RELEASE_GRACE_MS,
        };
        self.pending = Some(ticket);
        debug!("[speed] release scheduled at {:.1}ms", ticket.due_ms);
        Some(ticket)
    }

    /// Run a scheduled release. Returns false if the ticket went stale.
    pub fn complete_speed_adjust(&mut self, ticket: ReleaseTicket) -> bool {
        match self.pending {
            Some(p) if p.generation == ticket.generation => {
                self.pending = None;
                self.state.adjusting = false;
                info!("[speed] adjust end at {}", speed_label(self.state.speed));
                true
            }
            _ => false,
        }
    }

    /// Fire the pending release if its due time has passed.
    pub fn poll_release(&mut self, now_ms: f64) -> bool {
        match self.pending {
            Some(t) if now_ms >= t.due_ms => self.complete_speed_adjust(t),
            _ => false,
        }
    }

    pub fn toggle_mode(&mut self) {
        if self.state.adjusting {
            return;
        }
        self.state.mode = self.state.mode.toggled();
        info!("[mode] {:?}", self.state.mode);
    }

    pub fn speed_display(&self) -> SpeedDisplay {
        SpeedDisplay {
            visible: self.state.adjusting,
            text: speed_label(self.state.speed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_mode_halves_advance() {
        let mut p = Playback::new(VirtualClock::from_ms(0.0));
        p.toggle_mode();
        assert_eq!(p.mode(), VisualMode::Light);
        p.advance(1000.0);
        assert_eq!(p.clock().ms(), 500.0);
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut p = Playback::new(VirtualClock::from_ms(10.0));
        p.advance(f64::NAN);
        p.advance(f64::INFINITY);
        assert_eq!(p.clock().ms(), 10.0);
    }

    #[test]
    fn speed_label_floors_percent() {
        assert_eq!(speed_label(1.0), "Speed: 100%");
        assert_eq!(speed_label(0.0), "Speed: 0%");
        assert_eq!(speed_label(-2.505), "Speed: -251%");
        assert_eq!(speed_label(4.999), "Speed: 499%");
    }

    #[test]
    fn pointer_outside_surface_is_clamped() {
        let mut p = Playback::default();
        p.begin_speed_adjust();
        assert_eq!(p.update_speed_from_pointer_x(-200.0, 1000.0), Some(-5.0));
        assert_eq!(p.update_speed_from_pointer_x(1500.0, 1000.0), Some(5.0));
    }
}
