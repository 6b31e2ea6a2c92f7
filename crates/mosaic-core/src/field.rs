//! Procedural color field.
//!
//! Every tile color is a blend of three waves per channel. The waves are built
//! from the virtual clock and the tile's normalized position, passed through a
//! slowly rotating set of offsets that is shared by the whole frame so the
//! field turns as one surface instead of flickering per tile.

use crate::constants::*;
use crate::playback::VisualMode;
use crate::trig::{self, TAU};
use glam::{DVec2, DVec3};
use std::f64::consts::FRAC_PI_2;

/// 8-bit color as written to the drawing context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Quantize unit-range channels with `floor(c * 255)`. Channels are clamped
    /// to \[0, 1\] first and NaN maps to 0.
    pub fn from_unit(c: DVec3) -> Self {
        Self::new(quantize(c.x), quantize(c.y), quantize(c.z))
    }

    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[inline]
fn quantize(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }
    (c.clamp(0.0, 1.0) * 255.0).floor() as u8
}

/// The three waves of each channel, packed r,g,b into the vector lanes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelWaves {
    pub first: DVec3,
    pub second: DVec3,
    pub third: DVec3,
}

impl VisualMode {
    pub fn blend(self, waves: &ChannelWaves) -> DVec3 {
        match self {
            VisualMode::Normal => normal_blend(waves),
            VisualMode::Light => light_blend(waves),
        }
    }
}

/// Only the slow middle wave, lifted so tiles never get too dark.
pub fn light_blend(waves: &ChannelWaves) -> DVec3 {
    waves.second * LIGHT_GAIN + LIGHT_FLOOR
}

/// Weighted mix of the first two waves, dimmed by the third into \[0.5, 1\].
pub fn normal_blend(waves: &ChannelWaves) -> DVec3 {
    (waves.first * NORMAL_WAVE1_WEIGHT + waves.second) / NORMAL_NORM
        * (waves.third * NORMAL_DIM + NORMAL_DIM)
}

/// Per-frame state shared by every tile drawn in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameField {
    clock_ms: f64,
    // x = sin(angle), y = cos(angle)
    rot: [DVec2; 3],
    g1_freq_mult: f64,
}

impl FrameField {
    pub fn at(clock_ms: f64) -> Self {
        let angle1 = clock_ms / ROTATION_PERIOD_MS * TAU;
        let angles = [angle1, angle1 + ANGLE2_OFFSET, angle1 + FRAC_PI_2];
        let rot = angles.map(|a| DVec2::new(a.sin(), a.cos()));
        let g1_freq_mult = (clock_ms / G1_FREQ_PERIOD_MS * TAU).sin();
        Self {
            clock_ms,
            rot,
            g1_freq_mult,
        }
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn rotation_offsets(&self) -> [DVec2; 3] {
        self.rot
    }

    pub fn g1_freq_mult(&self) -> f64 {
        self.g1_freq_mult
    }

    /// Raw waves for a tile at normalized position `(x, y)` in \[0, 1).
    pub fn waves(&self, x: f64, y: f64) -> ChannelWaves {
        let t = self.clock_ms;
        let [o1, o2, o3] = self.rot;
        let p = DVec2::new(x, y);
        let p1 = p * o1;
        let p2 = p * o2;
        let p3 = p * o3;

        let r1 = trig::cos(p1.x + p1.y * o3.x * 2.0 + t / 8000.0);
        let r2 = trig::cos(p3.x + p3.y * o3.x + t / 8000.0);
        let r3 = trig::sin(x * 0.4 - t / 16000.0);

        let g1 = trig::icos((p1.x + p1.y) * (self.g1_freq_mult + 2.0) + t / 4000.0);
        let g2 = trig::icos(p2.x + p2.y * 0.8 - t / 4400.0);
        let g3 = trig::sin(x * 0.5 + t / 20000.0);

        let b1 = trig::icos(x * o1.x * 1.65 - t / 2000.0);
        let b2 = trig::icos(x * 0.8 + t / 4000.0);
        let b3 = trig::sin(y * 0.4 + t / 24000.0 + 0.75);

        ChannelWaves {
            first: DVec3::new(r1, g1, b1),
            second: DVec3::new(r2, g2, b2),
            third: DVec3::new(r3, g3, b3),
        }
    }

    pub fn tile_color(&self, x: f64, y: f64, mode: VisualMode) -> Rgb8 {
        Rgb8::from_unit(mode.blend(&self.waves(x, y)))
    }
}

/// One-off color lookup. Prefer building a [`FrameField`] once per frame when
/// coloring many tiles.
pub fn compute_tile_color(clock_ms: f64, x: f64, y: f64, mode: VisualMode) -> Rgb8 {
    FrameField::at(clock_ms).tile_color(x, y, mode)
}
