use thiserror::Error;

/// Errors originating from the core module.
///
/// Numeric edge cases (flat image, zero gradient) are never reported here:
/// the stages resolve them locally with a defined output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid configuration value or structure (empty ramp, unknown preset).
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Unsupported file or data format.
    #[error("Format non supporté : {format}")]
    UnsupportedFormat {
        /// The format string that is unsupported.
        format: String,
    },

    /// Zero-area source or target raster.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}

impl CoreError {
    /// `true` for errors that only invalidate the current frame.
    ///
    /// The playback driver skips such frames instead of stopping the run.
    ///
    /// # Example
    /// ```
    /// use tg_core::CoreError;
    /// assert!(CoreError::InvalidDimensions { width: 0, height: 4 }.is_frame_local());
    /// assert!(!CoreError::Config("ramp vide".into()).is_frame_local());
    /// ```
    #[must_use]
    pub fn is_frame_local(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }
}
