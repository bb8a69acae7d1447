use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tg_core::frame::ColorRaster;
use tg_core::traits::FrameSource;

use crate::image::{is_frame_candidate, load_image};

/// Source qui parcourt un dossier de frames, dans l'ordre des noms de fichier.
///
/// Le dossier est listé une seule fois (non récursif) ; chaque frame n'est
/// décodée qu'au moment où elle est demandée. Les fichiers illisibles sont
/// ignorés avec un avertissement.
pub struct FolderSource {
    files: Vec<PathBuf>,
    current_idx: usize,
}

impl FolderSource {
    /// Crée une source explorant `folder_path`.
    ///
    /// # Errors
    /// Retourne une erreur si le dossier ne peut être lu ou ne contient
    /// aucune image reconnue.
    pub fn new(folder_path: &Path) -> Result<Self> {
        let files = Self::scan_dir(folder_path)?;
        if files.is_empty() {
            anyhow::bail!("Aucune image dans le dossier {}", folder_path.display());
        }
        log::info!(
            "Dossier de frames : {} ({} fichiers)",
            folder_path.display(),
            files.len()
        );
        Ok(Self {
            files,
            current_idx: 0,
        })
    }

    /// Liste les images du dossier (extension reconnue ou absente), triées
    /// par nom de fichier.
    fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let entries =
            fs::read_dir(dir).with_context(|| format!("Impossible de lire {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && is_frame_candidate(&path) {
                files.push(path);
            } else {
                log::debug!("Ignoré : {}", path.display());
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Fichiers de la séquence, dans l'ordre de lecture.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl FrameSource for FolderSource {
    fn next_frame(&mut self) -> Option<ColorRaster> {
        while let Some(path) = self.files.get(self.current_idx) {
            self.current_idx += 1;
            match load_image(path) {
                Ok(frame) => {
                    log::debug!(
                        "Frame {}/{} : {}",
                        self.current_idx,
                        self.files.len(),
                        path.display()
                    );
                    return Some(frame);
                }
                Err(e) => log::warn!("Frame ignorée : {e:#}"),
            }
        }
        None
    }

    fn rewind(&mut self) {
        self.current_idx = 0;
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.files.len())
    }

    fn is_still(&self) -> bool {
        false
    }
}
