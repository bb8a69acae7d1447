/// Frame sources for termglyph (still image, folder of frames).

pub mod folder;
pub mod image;

use std::path::Path;

use anyhow::Result;
use tg_core::error::CoreError;
use tg_core::traits::FrameSource;

pub use folder::FolderSource;
pub use image::ImageSource;

/// Ouvre la source adaptée à `path` : un dossier devient une séquence de
/// frames, un fichier image une image fixe.
///
/// # Errors
/// Returns [`CoreError::FileNotFound`] if the path does not exist,
/// [`CoreError::UnsupportedFormat`] for a file whose extension is not a
/// recognized image format, or the underlying decoding / listing error.
///
/// # Example
/// ```no_run
/// use tg_source::open_source;
/// use std::path::Path;
/// let mut source = open_source(Path::new("./frames")).unwrap();
/// while let Some(frame) = source.next_frame() {
///     println!("{}x{}", frame.width(), frame.height());
/// }
/// ```
pub fn open_source(path: &Path) -> Result<Box<dyn FrameSource>> {
    if path.is_dir() {
        return Ok(Box::new(FolderSource::new(path)?));
    }
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    if !image::is_frame_candidate(path) {
        let format = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Err(CoreError::UnsupportedFormat { format }.into());
    }
    Ok(Box::new(ImageSource::new(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_source(&dir.path().join("nope")).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"").unwrap();
        let err = open_source(&path).err().unwrap();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::UnsupportedFormat {
                format: "mp4".into()
            })
        );
    }

    #[test]
    fn file_and_folder_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.png");
        ::image::RgbaImage::from_pixel(4, 4, ::image::Rgba([9, 9, 9, 255]))
            .save(&path)
            .unwrap();

        assert!(open_source(&path).unwrap().is_still());
        assert!(!open_source(dir.path()).unwrap().is_still());
    }
}
