use tg_core::frame::IntensityRaster;

/// Sobel horizontal kernel.
const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Sobel vertical kernel.
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Compute gradient components at interior pixel (x, y).
///
/// Returns (gx, gy). Border pixels have no full 3×3 neighbourhood and yield
/// (0, 0).
///
/// # Example
/// ```
/// use tg_core::frame::IntensityRaster;
/// use tg_ascii::edge::gradient;
/// let step = IntensityRaster::from_fn(3, 3, |x, _| if x == 2 { 255 } else { 0 });
/// assert_eq!(gradient(&step, 1, 1), (1020, 0));
/// ```
#[must_use]
pub fn gradient(input: &IntensityRaster, x: u32, y: u32) -> (i32, i32) {
    let (w, h) = (input.width(), input.height());
    if x == 0 || y == 0 || x + 1 >= w || y + 1 >= h {
        return (0, 0);
    }

    let mut gx = 0;
    let mut gy = 0;
    for (ky, (row_x, row_y)) in SOBEL_X.iter().zip(&SOBEL_Y).enumerate() {
        for (kx, (wx, wy)) in row_x.iter().zip(row_y).enumerate() {
            let v = i32::from(input.get(x + kx as u32 - 1, y + ky as u32 - 1));
            gx += v * wx;
            gy += v * wy;
        }
    }
    (gx, gy)
}

/// Champ de magnitudes de gradient, intérieur seulement (bordure à zéro).
struct GradientField {
    magnitudes: Vec<f64>,
    max: f64,
}

impl GradientField {
    fn compute(input: &IntensityRaster) -> Self {
        let (w, h) = (input.width(), input.height());
        let mut magnitudes = vec![0.0; w as usize * h as usize];
        let mut max = 0.0_f64;
        for y in 1..h.saturating_sub(1) {
            for x in 1..w.saturating_sub(1) {
                let (gx, gy) = gradient(input, x, y);
                // gx² + gy² tient exactement dans un f64.
                let mag = f64::from(gx * gx + gy * gy).sqrt();
                magnitudes[y as usize * w as usize + x as usize] = mag;
                max = max.max(mag);
            }
        }
        Self { magnitudes, max }
    }
}

/// Extraction de contours Sobel normalisée par frame.
///
/// Chaque pixel intérieur reçoit `round(mag / maxMag * 255)` ; la bordure
/// d'un pixel reste à 0. Sans aucun gradient (`maxMag == 0`, image plate),
/// la sortie est entièrement noire. La normalisation est relative au contour
/// le plus fort de la frame, pas à un seuil absolu.
///
/// # Example
/// ```
/// use tg_core::frame::IntensityRaster;
/// use tg_ascii::edge::extract_edges;
/// let flat = IntensityRaster::filled(8, 8, 200);
/// assert!(extract_edges(&flat).as_raw().iter().all(|&v| v == 0));
/// ```
#[must_use]
pub fn extract_edges(input: &IntensityRaster) -> IntensityRaster {
    let (w, h) = (input.width(), input.height());
    let field = GradientField::compute(input);
    if field.max <= 0.0 {
        return IntensityRaster::filled(w, h, 0);
    }

    IntensityRaster::from_fn(w, h, |x, y| {
        let mag = field.magnitudes[y as usize * w as usize + x as usize];
        (mag / field.max * 255.0).round().clamp(0.0, 255.0) as u8
    })
}
