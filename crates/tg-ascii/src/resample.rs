use tg_core::error::CoreError;
use tg_core::frame::ColorRaster;

/// Redimensionnement plus-proche-voisin, sans interpolation ni anti-aliasing.
///
/// Le pixel destination (x, y) échantillonne la source en
/// `(x * srcW / Wt, y * srcH / Ht)`, division entière tronquée.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] if the source or the target has
/// zero area.
///
/// # Example
/// ```
/// use tg_core::frame::ColorRaster;
/// use tg_ascii::resample::resample;
/// let src = ColorRaster::new(100, 100);
/// let dst = resample(&src, 50, 20).unwrap();
/// assert_eq!((dst.width(), dst.height()), (50, 20));
/// ```
pub fn resample(src: &ColorRaster, width: u32, height: u32) -> Result<ColorRaster, CoreError> {
    let (src_w, src_h) = (src.width(), src.height());
    if src_w == 0 || src_h == 0 {
        return Err(CoreError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }
    if src_w == width && src_h == height {
        return Ok(src.clone());
    }

    // Column lookup computed once per frame, not per row.
    let columns: Vec<u32> = (0..width).map(|x| scale(x, src_w, width)).collect();
    Ok(ColorRaster::from_fn(width, height, |x, y| {
        src.pixel(columns[x as usize], scale(y, src_h, height))
    }))
}

#[inline(always)]
fn scale(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    (u64::from(dst) * u64::from(src_len) / u64::from(dst_len)) as u32
}

/// Dimensions cibles qui tiennent dans `avail_w`×`avail_h` en conservant le
/// ratio de la source.
///
/// `newW = W`, `newH = round(newW / AR)` ; si `newH > H`, alors `newH = H`
/// et `newW = round(newH * AR)`. `cell_aspect` corrige la forme des
/// cellules terminal (1.0 = pixels carrés). Chaque dimension est bornée à
/// `[1, disponible]`.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] if the source or the available
/// area has zero size.
///
/// # Example
/// ```
/// use tg_ascii::resample::fit_dimensions;
/// assert_eq!(fit_dimensions(200, 100, 80, 30, 1.0).unwrap(), (60, 30));
/// assert_eq!(fit_dimensions(100, 100, 80, 30, 2.0).unwrap(), (60, 30));
/// ```
pub fn fit_dimensions(
    src_w: u32,
    src_h: u32,
    avail_w: u32,
    avail_h: u32,
    cell_aspect: f32,
) -> Result<(u32, u32), CoreError> {
    if src_w == 0 || src_h == 0 {
        return Err(CoreError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }
    if avail_w == 0 || avail_h == 0 {
        return Err(CoreError::InvalidDimensions {
            width: avail_w,
            height: avail_h,
        });
    }

    let aspect = f64::from(src_w) / f64::from(src_h) * f64::from(cell_aspect);
    let mut new_w = avail_w;
    let mut new_h = round_dim(f64::from(new_w) / aspect);
    if new_h > avail_h {
        new_h = avail_h;
        new_w = round_dim(f64::from(new_h) * aspect);
    }

    Ok((new_w.clamp(1, avail_w), new_h.clamp(1, avail_h)))
}

#[inline]
fn round_dim(v: f64) -> u32 {
    // `as` saturates: NaN → 0, +inf → u32::MAX, both clamped by the caller.
    v.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> ColorRaster {
        ColorRaster::from_fn(width, height, |x, y| (x as u8, y as u8, 0, 255))
    }

    #[test]
    fn output_has_exact_target_dimensions() {
        let src = gradient(7, 5);
        for (w, h) in [(1, 1), (3, 9), (7, 5), (14, 10), (100, 1)] {
            let dst = resample(&src, w, h).unwrap();
            assert_eq!((dst.width(), dst.height()), (w, h));
            assert_eq!(dst.as_raw().len(), (w * h * 4) as usize);
        }
    }

    #[test]
    fn samples_with_truncating_division() {
        let src = gradient(10, 4);
        let dst = resample(&src, 4, 3).unwrap();
        // x: 0,1,2,3 → 0,2,5,7 ; y: 0,1,2 → 0,1,2
        let xs: Vec<u8> = (0..4).map(|x| dst.pixel(x, 0).0).collect();
        let ys: Vec<u8> = (0..3).map(|y| dst.pixel(0, y).1).collect();
        assert_eq!(xs, vec![0, 2, 5, 7]);
        assert_eq!(ys, vec![0, 1, 2]);
    }

    #[test]
    fn upscale_repeats_source_pixels() {
        let src = gradient(2, 1);
        let dst = resample(&src, 4, 2).unwrap();
        let xs: Vec<u8> = (0..4).map(|x| dst.pixel(x, 1).0).collect();
        assert_eq!(xs, vec![0, 0, 1, 1]);
    }

    #[test]
    fn same_size_is_identity() {
        let src = gradient(6, 3);
        assert_eq!(resample(&src, 6, 3).unwrap(), src);
    }

    #[test]
    fn zero_source_is_invalid_dimensions() {
        let src = ColorRaster::new(0, 5);
        assert_eq!(
            resample(&src, 4, 4).unwrap_err(),
            CoreError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn zero_target_is_invalid_dimensions() {
        let src = gradient(4, 4);
        assert!(matches!(
            resample(&src, 0, 4),
            Err(CoreError::InvalidDimensions { width: 0, .. })
        ));
        assert!(resample(&src, 4, 0).is_err());
    }

    #[test]
    fn fit_wide_source_into_short_grid() {
        // AR 2.0: 80 → 40 rows > 30, so height wins: 30 rows, 60 cols.
        assert_eq!(fit_dimensions(200, 100, 80, 30, 1.0).unwrap(), (60, 30));
    }

    #[test]
    fn fit_keeps_full_width_when_height_fits() {
        assert_eq!(fit_dimensions(400, 100, 80, 30, 1.0).unwrap(), (80, 20));
    }

    #[test]
    fn fit_rounds_derived_dimension() {
        // 80 / (3/2) = 53.33 → 53 ; 50 / (3/2) = 33.33 → 33 > 30 → 30 * 1.5 = 45
        assert_eq!(fit_dimensions(3, 2, 80, 60, 1.0).unwrap(), (80, 53));
        assert_eq!(fit_dimensions(3, 2, 50, 30, 1.0).unwrap(), (45, 30));
        // 10 / 4 = 2.5 → 3 (half away from zero)
        assert_eq!(fit_dimensions(4, 1, 10, 30, 1.0).unwrap(), (10, 3));
    }

    #[test]
    fn fit_never_returns_zero() {
        assert_eq!(fit_dimensions(10_000, 1, 80, 30, 1.0).unwrap(), (80, 1));
        assert_eq!(fit_dimensions(1, 10_000, 80, 30, 1.0).unwrap(), (1, 30));
    }

    #[test]
    fn fit_never_exceeds_available_area() {
        for (sw, sh) in [(1, 1), (16, 9), (9, 16), (640, 480), (3, 1000)] {
            for (aw, ah) in [(1, 1), (80, 24), (200, 60), (13, 7)] {
                let (w, h) = fit_dimensions(sw, sh, aw, ah, 1.0).unwrap();
                assert!(w >= 1 && w <= aw, "{sw}x{sh} in {aw}x{ah} → {w}x{h}");
                assert!(h >= 1 && h <= ah, "{sw}x{sh} in {aw}x{ah} → {w}x{h}");
            }
        }
    }

    #[test]
    fn fit_rejects_zero_sizes() {
        assert!(fit_dimensions(0, 10, 80, 30, 1.0).is_err());
        assert!(fit_dimensions(10, 10, 0, 30, 1.0).is_err());
    }
}
