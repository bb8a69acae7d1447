use std::path::Path;

use anyhow::{Context, Result};
use tg_core::frame::ColorRaster;
use tg_core::traits::FrameSource;

/// Extensions image reconnues.
pub const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// `true` si l'extension de `path` est une image reconnue (insensible à la casse).
///
/// # Example
/// ```
/// use tg_source::image::has_image_extension;
/// use std::path::Path;
/// assert!(has_image_extension(Path::new("frames/0001.PNG")));
/// assert!(!has_image_extension(Path::new("notes.txt")));
/// ```
#[must_use]
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

/// `true` si `path` peut contenir une frame : extension reconnue, ou pas
/// d'extension du tout (format détecté sur le contenu au décodage).
///
/// # Example
/// ```
/// use tg_source::image::is_frame_candidate;
/// use std::path::Path;
/// assert!(is_frame_candidate(Path::new("frames/0001.png")));
/// assert!(is_frame_candidate(Path::new("frames/0001")));
/// assert!(!is_frame_candidate(Path::new("frames/notes.txt")));
/// ```
#[must_use]
pub fn is_frame_candidate(path: &Path) -> bool {
    path.extension().is_none() || has_image_extension(path)
}

/// Décode une image depuis le disque en raster RGBA.
///
/// Le format est détecté sur les premiers octets du fichier ; l'extension
/// ne sert que de repli.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
///
/// # Example
/// ```no_run
/// use tg_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("test.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<ColorRaster> {
    let img = image::ImageReader::open(path)
        .and_then(image::ImageReader::with_guessed_format)
        .with_context(|| format!("Impossible d'ouvrir {}", path.display()))?
        .decode()
        .with_context(|| format!("Impossible de décoder {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    ColorRaster::from_rgba(width, height, rgba.into_raw())
        .with_context(|| format!("Buffer incohérent pour {}", path.display()))
}

/// Source d'image statique : une seule frame par passe.
///
/// L'image est décodée une fois à l'ouverture ; `rewind()` la rend de
/// nouveau disponible.
///
/// # Example
/// ```no_run
/// use tg_source::image::ImageSource;
/// use std::path::Path;
/// let source = ImageSource::new(Path::new("test.png")).unwrap();
/// ```
pub struct ImageSource {
    frame: ColorRaster,
    consumed: bool,
}

impl ImageSource {
    /// Load an image from disk and create a source.
    ///
    /// # Errors
    /// Returns an error if the image cannot be loaded.
    pub fn new(path: &Path) -> Result<Self> {
        let frame = load_image(path)?;
        log::info!(
            "Image chargée : {} ({}x{})",
            path.display(),
            frame.width(),
            frame.height()
        );
        Ok(Self::from_raster(frame))
    }

    /// Wrap an already decoded raster.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::ColorRaster;
    /// use tg_core::traits::FrameSource;
    /// use tg_source::image::ImageSource;
    ///
    /// let mut source = ImageSource::from_raster(ColorRaster::new(2, 2));
    /// assert!(source.next_frame().is_some());
    /// assert!(source.next_frame().is_none());
    /// source.rewind();
    /// assert!(source.next_frame().is_some());
    /// ```
    #[must_use]
    pub fn from_raster(frame: ColorRaster) -> Self {
        Self {
            frame,
            consumed: false,
        }
    }
}

impl FrameSource for ImageSource {
    fn next_frame(&mut self) -> Option<ColorRaster> {
        if self.consumed {
            return None;
        }
        self.consumed = true;
        Some(self.frame.clone())
    }

    fn rewind(&mut self) {
        self.consumed = false;
    }

    fn len_hint(&self) -> Option<usize> {
        Some(1)
    }

    fn is_still(&self) -> bool {
        true
    }
}
