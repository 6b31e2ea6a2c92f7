/// Browser host wiring.
///
/// Element lookups, CSS hooks and logging knobs for the wasm front-end. The
/// mosaic itself has no runtime configuration; its tuning lives in
/// `mosaic_core::constants`.
// Canvas element used as the stage; created and appended to <body> if missing
pub const CANVAS_ID: &str = "stage-canvas";
pub const CANVAS_STYLE: &str =
    "position:fixed;left:0;top:0;width:100%;height:100%;display:block;touch-action:none";

// Speed indicator
pub const SPEED_DISPLAY_SELECTOR: &str = ".speed-display";
pub const VISIBLE_CLASS: &str = "visible";

// Everything drawn is axis-aligned squares, so device-pixel backing buys nothing.
pub const HIGH_DPI: bool = false;

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;
pub const STATS_LOG_INTERVAL_FRAMES: u64 = 600; // ~10s at 60fps
