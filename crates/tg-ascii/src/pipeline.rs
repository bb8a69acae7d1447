use std::time::Instant;

use tg_core::charset::GlyphRamp;
use tg_core::config::RenderConfig;
use tg_core::error::CoreError;
use tg_core::frame::{CharacterGrid, ColorRaster};

use crate::contrast::stretch_contrast;
use crate::edge::extract_edges;
use crate::glyph::map_glyphs;
use crate::luminance::to_intensity;
use crate::resample::{fit_dimensions, resample};

/// Frame pipeline : orchestre les étages pour une frame.
///
/// `fit → Resample → Luminance → Contrast → Edges (optionnel) → Glyphes`.
/// Chaque étage consomme la sortie du précédent et alloue la sienne ; rien
/// n'est conservé d'une frame à l'autre.
///
/// # Example
/// ```
/// use tg_ascii::pipeline::FramePipeline;
/// use tg_core::charset::GlyphRamp;
/// use tg_core::frame::ColorRaster;
///
/// let pipeline = FramePipeline::new(GlyphRamp::default());
/// let grid = pipeline.render(&ColorRaster::new(200, 100), 80, 30).unwrap();
/// assert_eq!((grid.width(), grid.height()), (60, 30));
/// ```
#[derive(Clone, Debug)]
pub struct FramePipeline {
    ramp: GlyphRamp,
    edge_detection: bool,
    cell_aspect: f32,
}

impl FramePipeline {
    /// Pipeline with edge detection on and square cells.
    #[must_use]
    pub fn new(ramp: GlyphRamp) -> Self {
        Self {
            ramp,
            edge_detection: true,
            cell_aspect: 1.0,
        }
    }

    /// Build a pipeline from the render configuration.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if the configured ramp is empty or names
    /// an unknown preset.
    ///
    /// # Example
    /// ```
    /// use tg_ascii::pipeline::FramePipeline;
    /// use tg_core::config::RenderConfig;
    /// let pipeline = FramePipeline::from_config(&RenderConfig::default()).unwrap();
    /// assert!(pipeline.edge_detection());
    /// ```
    pub fn from_config(config: &RenderConfig) -> Result<Self, CoreError> {
        Ok(Self::new(config.glyph_ramp()?)
            .with_edge_detection(config.edge_detection)
            .with_cell_aspect(config.cell_aspect))
    }

    /// Enable or skip the edge extraction stage.
    #[must_use]
    pub fn with_edge_detection(mut self, enabled: bool) -> Self {
        self.edge_detection = enabled;
        self
    }

    /// Height/width ratio of one output cell.
    #[must_use]
    pub fn with_cell_aspect(mut self, cell_aspect: f32) -> Self {
        self.cell_aspect = cell_aspect;
        self
    }

    /// `true` if the edge extraction stage runs.
    #[must_use]
    pub fn edge_detection(&self) -> bool {
        self.edge_detection
    }

    /// The glyph ramp in use.
    #[must_use]
    pub fn ramp(&self) -> &GlyphRamp {
        &self.ramp
    }

    /// Rend une frame dans une grille tenant dans `target_w`×`target_h`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if the frame or the target
    /// area has zero size. Only this frame is affected.
    pub fn render(
        &self,
        frame: &ColorRaster,
        target_w: u32,
        target_h: u32,
    ) -> Result<CharacterGrid, CoreError> {
        let start = Instant::now();
        let (w, h) = fit_dimensions(
            frame.width(),
            frame.height(),
            target_w,
            target_h,
            self.cell_aspect,
        )?;

        let resized = resample(frame, w, h)?;
        let gray = to_intensity(&resized);
        drop(resized);
        let normalized = stretch_contrast(&gray);
        drop(gray);
        let mapped = if self.edge_detection {
            extract_edges(&normalized)
        } else {
            normalized
        };
        let grid = map_glyphs(&mapped, &self.ramp);

        log::trace!(
            "frame {}x{} → {w}x{h} en {:.2} ms",
            frame.width(),
            frame.height(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(grid)
    }
}

/// Rend une frame avec extraction de contours et cellules carrées.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] if the frame or the target area
/// has zero size.
///
/// # Example
/// ```
/// use tg_ascii::pipeline::render;
/// use tg_core::charset::GlyphRamp;
/// use tg_core::frame::ColorRaster;
///
/// let ramp = GlyphRamp::new(" .:-=+*#%@").unwrap();
/// let grid = render(&ColorRaster::new(4, 4), 4, 4, &ramp).unwrap();
/// assert_eq!(grid.to_string(), "    \n    \n    \n    ");
/// ```
pub fn render(
    frame: &ColorRaster,
    target_w: u32,
    target_h: u32,
    ramp: &GlyphRamp,
) -> Result<CharacterGrid, CoreError> {
    FramePipeline::new(ramp.clone()).render(frame, target_w, target_h)
}
