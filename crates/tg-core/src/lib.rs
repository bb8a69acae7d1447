/// Configuration, types, and shared structures for termglyph.
///
/// This crate contains the rasters, the character grid, the glyph ramp,
/// the error taxonomy and the configuration shared across the workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use charset::GlyphRamp;
pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::{CharacterGrid, ColorRaster, IntensityRaster};
pub use traits::FrameSource;
