// Shared tuning constants for the tile field, the playback clock and the rasterizer.

// Grid geometry
pub const TILE_PITCH: f64 = 24.0; // distance between tile origins, grout included
pub const TILE_INSET: f64 = 1.0; // leading-edge gap before each painted tile
pub const TILE_SIZE: f64 = TILE_PITCH - 2.0; // painted side length
pub const EDGE_WIDTH: f64 = 1.0; // width of highlight and shadow strips

// Field motion periods (milliseconds of virtual time)
pub const ROTATION_PERIOD_MS: f64 = 120_000.0; // one full rotation every two minutes
pub const G1_FREQ_PERIOD_MS: f64 = 24_000.0;
pub const ANGLE2_OFFSET: f64 = 0.5; // radians

// Light mode rescale: wave2 * gain + floor
pub const LIGHT_GAIN: f64 = 0.68;
pub const LIGHT_FLOOR: f64 = 0.32;

// Normal mode blend: (wave1 * w1 + wave2) / norm * (wave3 * dim + dim)
pub const NORMAL_WAVE1_WEIGHT: f64 = 0.6;
pub const NORMAL_NORM: f64 = 1.0 + NORMAL_WAVE1_WEIGHT;
pub const NORMAL_DIM: f64 = 0.5;

// Playback
pub const SPEED_LIMIT: f64 = 5.0; // speed scalar range is [-SPEED_LIMIT, SPEED_LIMIT]
pub const INITIAL_SPEED: f64 = 1.0;
pub const LIGHT_DAMPING: f64 = 0.5;
pub const NORMAL_DAMPING: f64 = 1.0;
pub const SPEED_RELEASE_GRACE_MS: f64 = 150.0;
pub const SPEED_CONTROL_STRIP_PX: f64 = 44.0; // pointerdown within this many px of the bottom starts a drag
pub const INITIAL_CLOCK_SPAN_MS: f64 = 60_000.0;

// Overlay passes (rgb, alpha)
pub const HIGHLIGHT_RGB: [u8; 3] = [255, 255, 255];
pub const HIGHLIGHT_ALPHA: f64 = 0.32;
pub const SHADOW_RGB: [u8; 3] = [0, 0, 0];
pub const SHADOW_ALPHA: f64 = 0.2;
pub const BACKGROUND_RGB: [u8; 3] = [0, 0, 0];
