//! Platform-free core of the mosaic: unit trig helpers, the virtual clock and
//! playback controls, the color field, the tile grid and the rasterizer.
//!
//! Nothing here touches a browser API; hosts implement [`Surface`] and feed
//! frame deltas and pointer positions into a [`Session`].

pub mod constants;
pub mod field;
pub mod grid;
pub mod playback;
pub mod raster;
pub mod session;
pub mod trig;

pub use constants::*;
pub use field::*;
pub use grid::*;
pub use playback::*;
pub use raster::*;
pub use session::*;
