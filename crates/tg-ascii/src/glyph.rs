use tg_core::charset::GlyphRamp;
use tg_core::frame::{CharacterGrid, IntensityRaster};

/// Map each pixel's intensity to its ramp glyph.
///
/// One character per pixel; the grid has the raster's dimensions.
///
/// # Example
/// ```
/// use tg_core::charset::GlyphRamp;
/// use tg_core::frame::IntensityRaster;
/// use tg_ascii::glyph::map_glyphs;
///
/// let ramp = GlyphRamp::new(" .:#@").unwrap();
/// let gray = IntensityRaster::from_fn(3, 1, |x, _| [0, 128, 255][x as usize]);
/// assert_eq!(map_glyphs(&gray, &ramp).to_string(), " :@");
/// ```
#[must_use]
pub fn map_glyphs(intensity: &IntensityRaster, ramp: &GlyphRamp) -> CharacterGrid {
    CharacterGrid::from_fn(intensity.width(), intensity.height(), |x, y| {
        ramp.glyph(intensity.get(x, y))
    })
}
