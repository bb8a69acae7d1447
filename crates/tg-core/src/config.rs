use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::GlyphRamp;
use crate::error::CoreError;

/// Configuration complète du rendu et de la lecture.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use tg_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.target_fps, 50);
/// assert!(config.edge_detection);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RenderConfig {
    // === Rendu ===
    /// Rampe explicite (du plus sombre au plus clair). Prioritaire sur `ramp_preset`.
    pub ramp: Option<String>,
    /// Nom d'une rampe intégrée : "compact", "classic", "standard", "blocks".
    pub ramp_preset: String,
    /// Applique l'extraction de contours avant le mapping des glyphes.
    pub edge_detection: bool,
    /// Rapport hauteur/largeur d'une cellule terminal. 1.0 = pas de correction.
    pub cell_aspect: f32,

    // === Lecture ===
    /// FPS cible de la lecture.
    pub target_fps: u32,
    /// Relancer la séquence à la fin.
    pub loop_playback: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ramp: None,
            ramp_preset: "compact".into(),
            edge_detection: true,
            cell_aspect: 1.0,
            target_fps: 50,
            loop_playback: false,
        }
    }
}

impl RenderConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization and CLI overrides.
    pub fn clamp_all(&mut self) {
        if !self.cell_aspect.is_finite() {
            self.cell_aspect = 1.0;
        }
        self.cell_aspect = self.cell_aspect.clamp(0.25, 4.0);
        self.target_fps = self.target_fps.clamp(1, 240);
    }

    /// Resolve the glyph ramp: explicit `ramp` first, then `ramp_preset`.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] for an empty ramp or an unknown preset.
    ///
    /// # Example
    /// ```
    /// use tg_core::config::RenderConfig;
    /// let mut config = RenderConfig::default();
    /// assert_eq!(config.glyph_ramp().unwrap().len(), 10);
    /// config.ramp = Some(String::new());
    /// assert!(config.glyph_ramp().is_err());
    /// ```
    pub fn glyph_ramp(&self) -> Result<GlyphRamp, CoreError> {
        match self.ramp {
            Some(ref chars) => GlyphRamp::new(chars),
            None => GlyphRamp::preset(&self.ramp_preset),
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    render: RenderSection,
    playback: PlaybackSection,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    ramp: Option<String>,
    ramp_preset: Option<String>,
    edge_detection: Option<bool>,
    cell_aspect: Option<f32>,
}

/// Playback section of the TOML config, all fields optional.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct PlaybackSection {
    target_fps: Option<u32>,
    loop_playback: Option<bool>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema.
///
/// # Example
/// ```
/// use tg_core::config::parse_config;
/// let config = parse_config("[render]\nedge_detection = false\n").unwrap();
/// assert!(!config.edge_detection);
/// assert_eq!(config.target_fps, 50);
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = RenderConfig::default();

    let r = file.render;
    if let Some(v) = r.ramp {
        config.ramp = Some(v);
    }
    if let Some(v) = r.ramp_preset {
        config.ramp_preset = v;
    }
    if let Some(v) = r.edge_detection {
        config.edge_detection = v;
    }
    if let Some(v) = r.cell_aspect {
        config.cell_aspect = v;
    }

    let p = file.playback;
    if let Some(v) = p.target_fps {
        config.target_fps = v;
    }
    if let Some(v) = p.loop_playback {
        config.loop_playback = v;
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use tg_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}
