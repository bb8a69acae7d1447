use std::path::PathBuf;

use clap::Parser;
use tg_core::config::RenderConfig;

/// termglyph — rendu d'images et de séquences de frames en caractères.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image fixe (PNG, JPEG, BMP, GIF) ou dossier de frames lu dans l'ordre des noms.
    #[arg(default_value = "./frames")]
    pub path: PathBuf,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Rampe de glyphes explicite, du plus sombre au plus clair.
    #[arg(long)]
    pub ramp: Option<String>,

    /// Rampe intégrée : compact, classic, standard, blocks.
    #[arg(long)]
    pub preset: Option<String>,

    /// Désactiver l'extraction de contours (luminance seule).
    #[arg(long, default_value_t = false)]
    pub no_edges: bool,

    /// FPS cible de la lecture.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Rapport hauteur/largeur d'une cellule terminal (2.0 pour la plupart des polices).
    #[arg(long)]
    pub cell_aspect: Option<f32>,

    /// Relancer la séquence à la fin.
    #[arg(long = "loop", default_value_t = false)]
    pub loop_playback: bool,

    /// Sortie texte brute sur stdout, sans écran alternatif.
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// Largeur disponible en colonnes (défaut : taille du terminal).
    #[arg(long)]
    pub width: Option<u32>,

    /// Hauteur disponible en lignes (défaut : taille du terminal).
    #[arg(long)]
    pub height: Option<u32>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(ref preset) = self.preset {
            config.ramp = None;
            config.ramp_preset.clone_from(preset);
        }
        if let Some(ref ramp) = self.ramp {
            config.ramp = Some(ramp.clone());
        }
        if self.no_edges {
            config.edge_detection = false;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        if let Some(aspect) = self.cell_aspect {
            config.cell_aspect = aspect;
        }
        if self.loop_playback {
            config.loop_playback = true;
        }
        config.clamp_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_frames_folder() {
        let cli = Cli::parse_from(["termglyph"]);
        assert_eq!(cli.path, PathBuf::from("./frames"));
        assert!(!cli.print);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "termglyph",
            "img.png",
            "--no-edges",
            "--fps",
            "500",
            "--preset",
            "blocks",
            "--loop",
        ]);
        let mut config = RenderConfig {
            ramp: Some("xyz".into()),
            ..RenderConfig::default()
        };
        cli.apply_overrides(&mut config);
        assert!(!config.edge_detection);
        assert_eq!(config.target_fps, 240);
        assert_eq!(config.ramp, None);
        assert_eq!(config.ramp_preset, "blocks");
        assert!(config.loop_playback);
    }

    #[test]
    fn explicit_ramp_overrides_config() {
        let cli = Cli::parse_from(["termglyph", "--ramp", "@. "]);
        let mut config = RenderConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.ramp.as_deref(), Some("@. "));
    }
}
