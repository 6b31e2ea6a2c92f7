//! Session context: the virtual clock, playback state and interaction handlers
//! for one running mosaic.

use crate::constants::{INITIAL_CLOCK_SPAN_MS, SPEED_CONTROL_STRIP_PX};
use crate::playback::{Playback, PlaybackState, ReleaseTicket, SpeedDisplay, VirtualClock};
use crate::raster::{render_frame, FrameStats, Surface};
use rand::Rng;

#[derive(Clone, Debug, Default)]
pub struct Session {
    playback: Playback,
}

impl Session {
    /// Start at a random point in the first minute so every run looks different.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_clock(rng.gen_range(0.0..INITIAL_CLOCK_SPAN_MS))
    }

    pub fn with_clock(clock_ms: f64) -> Self {
        Self {
            playback: Playback::new(VirtualClock::from_ms(clock_ms)),
        }
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn clock_ms(&self) -> f64 {
        self.playback.clock().ms()
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// Per-frame tick. `now_ms` is host wall time, used only for the release
    /// grace window.
    pub fn on_tick(&mut self, frame_delta_ms: f64, now_ms: f64) {
        self.playback.poll_release(now_ms);
        self.playback.advance(frame_delta_ms);
    }

    pub fn on_draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        width: f64,
        height: f64,
    ) -> FrameStats {
        render_frame(surface, width, height, self.clock_ms(), self.playback.mode())
    }

    /// Pointer pressed. Presses inside the bottom control strip start a speed
    /// drag and apply the pointer position right away.
    pub fn pointer_down(
        &mut self,
        x: f64,
        y: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> bool {
        if !y.is_finite() || !viewport_height.is_finite() {
            return false;
        }
        if y < viewport_height - SPEED_CONTROL_STRIP_PX {
            return false;
        }
        self.playback.begin_speed_adjust();
        self.playback.update_speed_from_pointer_x(x, viewport_width);
        true
    }

    pub fn pointer_move(&mut self, x: f64, viewport_width: f64) -> Option<f64> {
        self.playback.update_speed_from_pointer_x(x, viewport_width)
    }

    pub fn pointer_up(&mut self, now_ms: f64) -> Option<ReleaseTicket> {
        self.playback.end_speed_adjust(now_ms)
    }

    pub fn release(&mut self, ticket: ReleaseTicket) -> bool {
        self.playback.complete_speed_adjust(ticket)
    }

    pub fn click(&mut self) {
        self.playback.toggle_mode();
    }

    pub fn speed_display(&self) -> SpeedDisplay {
        self.playback.speed_display()
    }
}
