use tg_core::frame::{ColorRaster, IntensityRaster};

/// Luma perceptuelle BT.601 : `round(0.299 R + 0.587 G + 0.114 B)`.
///
/// # Example
/// ```
/// use tg_ascii::luminance::luma;
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(255, 0, 0), 76);
/// ```
#[inline(always)]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    y.round().clamp(0.0, 255.0) as u8
}

/// Convert a color raster into single-channel intensity. Alpha is ignored.
///
/// # Example
/// ```
/// use tg_core::frame::ColorRaster;
/// use tg_ascii::luminance::to_intensity;
/// let color = ColorRaster::from_fn(2, 1, |x, _| if x == 0 { (0, 0, 0, 255) } else { (255, 255, 255, 0) });
/// let gray = to_intensity(&color);
/// assert_eq!(gray.as_raw(), &[0, 255]);
/// ```
#[must_use]
pub fn to_intensity(color: &ColorRaster) -> IntensityRaster {
    IntensityRaster::from_fn(color.width(), color.height(), |x, y| {
        let (r, g, b, _) = color.pixel(x, y);
        luma(r, g, b)
    })
}
