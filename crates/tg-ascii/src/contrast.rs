use tg_core::frame::IntensityRaster;

/// Étirement d'histogramme : remappe `[min, max]` observé sur `[0, 255]`.
///
/// `out = round((in - min) * 255 / (max - min))`, arrondi au demi supérieur
/// en arithmétique entière exacte. Une image plate (`min == max`) est
/// recopiée telle quelle : aucune mise à l'échelle n'est possible.
///
/// # Example
/// ```
/// use tg_core::frame::IntensityRaster;
/// use tg_ascii::contrast::stretch_contrast;
/// let input = IntensityRaster::from_fn(3, 1, |x, _| [100, 150, 200][x as usize]);
/// assert_eq!(stretch_contrast(&input).as_raw(), &[0, 128, 255]);
/// ```
#[must_use]
pub fn stretch_contrast(input: &IntensityRaster) -> IntensityRaster {
    let (width, height) = (input.width(), input.height());
    let Some((min, max)) = input.min_max() else {
        return IntensityRaster::filled(width, height, 0);
    };
    if min == max {
        return IntensityRaster::filled(width, height, min);
    }

    let range = u32::from(max - min);
    let mut lut = [0u8; 256];
    for v in min..=max {
        let num = 2 * u32::from(v - min) * 255 + range;
        lut[usize::from(v)] = (num / (2 * range)).min(255) as u8;
    }
    IntensityRaster::from_fn(width, height, |x, y| lut[usize::from(input.get(x, y))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_range_input_is_unchanged() {
        let input = IntensityRaster::from_fn(16, 16, |x, y| (y * 16 + x) as u8);
        assert_eq!(input.min_max(), Some((0, 255)));
        assert_eq!(stretch_contrast(&input), input);
    }

    #[test]
    fn flat_image_keeps_its_value() {
        for (w, h) in [(1, 1), (4, 4), (31, 7)] {
            let input = IntensityRaster::filled(w, h, 128);
            assert_eq!(stretch_contrast(&input), input);
        }
    }

    #[test]
    fn extremes_map_to_zero_and_full() {
        let input = IntensityRaster::from_fn(4, 1, |x, _| [60, 61, 70, 62][x as usize]);
        let out = stretch_contrast(&input);
        assert_eq!(out.get(0, 0), 0);
        assert_eq!(out.get(2, 0), 255);
        // (1 * 255) / 10 = 25.5 → 26 ; (2 * 255) / 10 = 51
        assert_eq!(out.get(1, 0), 26);
        assert_eq!(out.get(3, 0), 51);
    }

    #[test]
    fn two_level_image_becomes_binary() {
        let input = IntensityRaster::from_fn(3, 3, |x, _| if x == 1 { 90 } else { 91 });
        let out = stretch_contrast(&input);
        assert!(out.as_raw().iter().all(|&v| v == 0 || v == 255));
        assert_eq!(out.get(1, 1), 0);
    }

    #[test]
    fn empty_raster_stays_empty() {
        let out = stretch_contrast(&IntensityRaster::filled(0, 3, 0));
        assert_eq!((out.width(), out.height()), (0, 3));
        assert!(out.as_raw().is_empty());
    }
}
