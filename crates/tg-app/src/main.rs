use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tg_ascii::pipeline::FramePipeline;
use tg_core::config::RenderConfig;

pub mod cli;
pub mod player;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);

    // 4. Construire le pipeline (rampe invalide = erreur fatale au démarrage)
    let pipeline = FramePipeline::from_config(&config)?;

    // 5. Ouvrir la source
    let mut source = tg_source::open_source(&cli.path)?;

    // 6. Lecture
    let mut player = player::Player::new(pipeline, &config, cli.width, cli.height);
    let interactive = !cli.print && io::stdout().is_terminal();
    let stats = if interactive {
        let mut terminal = ratatui::init();
        let result = player.run_tui(source.as_mut(), &mut terminal);
        // Restaurer le terminal (TOUJOURS, même en cas d'erreur)
        ratatui::restore();
        result?
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        player.run_print(source.as_mut(), &mut out)?
    };

    log::info!(
        "Lecture terminée : {} frames, {} ignorées, {} en retard, {:.1} fps",
        stats.rendered,
        stats.skipped,
        stats.late,
        stats.fps
    );
    Ok(())
}

/// Load `--config` if it exists, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    if cli.config.exists() {
        tg_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(RenderConfig::default())
    }
}
