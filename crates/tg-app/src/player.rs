use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tg_ascii::pipeline::FramePipeline;
use tg_core::config::RenderConfig;
use tg_core::frame::{CharacterGrid, ColorRaster};
use tg_core::traits::FrameSource;
use tg_render::pacer::FramePacer;
use tg_render::printer::{print_grid, terminal_size};

/// Taille utilisée quand aucun terminal n'est attaché et qu'aucune n'est imposée.
const FALLBACK_SIZE: (u32, u32) = (80, 24);

/// Bilan d'une lecture.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaybackStats {
    /// Frames rendues et affichées.
    pub rendered: u64,
    /// Frames ignorées (dimensions invalides).
    pub skipped: u64,
    /// Frames affichées après leur échéance.
    pub late: u64,
    /// FPS moyen mesuré sur la fin de la lecture.
    pub fps: f64,
}

/// Pilote de lecture : tire les frames de la source, les rend, les affiche
/// au rythme du pacer.
pub struct Player {
    pipeline: FramePipeline,
    pacer: FramePacer,
    loop_playback: bool,
    width: Option<u32>,
    height: Option<u32>,
    stats: PlaybackStats,
}

impl Player {
    /// Create a player; `width`/`height` override the detected terminal size.
    #[must_use]
    pub fn new(
        pipeline: FramePipeline,
        config: &RenderConfig,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Self {
        Self {
            pipeline,
            pacer: FramePacer::new(config.target_fps),
            loop_playback: config.loop_playback,
            width,
            height,
            stats: PlaybackStats::default(),
        }
    }

    /// Surface disponible. `reserve_rows` lignes sont laissées libres quand la
    /// hauteur vient du terminal (curseur final en mode texte).
    fn available_size(&self, reserve_rows: u32) -> (u32, u32) {
        let detected = match (self.width, self.height) {
            (Some(w), Some(h)) => return (w, h),
            _ => terminal_size().unwrap_or_else(|e| {
                log::debug!("Taille du terminal indisponible ({e}), {FALLBACK_SIZE:?} utilisé");
                FALLBACK_SIZE
            }),
        };
        (
            self.width.unwrap_or(detected.0),
            self.height
                .unwrap_or_else(|| detected.1.saturating_sub(reserve_rows).max(1)),
        )
    }

    /// Frame suivante, en relançant la source si la lecture boucle.
    fn pull(&self, source: &mut dyn FrameSource) -> Option<ColorRaster> {
        if let Some(frame) = source.next_frame() {
            return Some(frame);
        }
        if self.loop_playback && !source.is_still() {
            log::debug!("Fin de séquence, retour au début");
            source.rewind();
            return source.next_frame();
        }
        None
    }

    /// Rend une frame ; `None` si elle doit être ignorée.
    fn render(&mut self, frame: &ColorRaster, size: (u32, u32)) -> Result<Option<CharacterGrid>> {
        match self.pipeline.render(frame, size.0, size.1) {
            Ok(grid) => {
                self.stats.rendered += 1;
                Ok(Some(grid))
            }
            Err(e) if e.is_frame_local() => {
                log::warn!("Frame ignorée : {e}");
                self.stats.skipped += 1;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn finish(&mut self) -> PlaybackStats {
        self.stats.fps = self.pacer.fps();
        self.stats.late = self.pacer.overruns();
        self.stats
    }

    /// Lecture en texte brut sur `out`.
    ///
    /// Une image fixe est écrite une fois, sans effacement. Une séquence
    /// efface l'écran avant chaque frame.
    ///
    /// # Errors
    /// Returns an error on I/O failure or a non frame-local render error.
    pub fn run_print<W: Write>(
        &mut self,
        source: &mut dyn FrameSource,
        out: &mut W,
    ) -> Result<PlaybackStats> {
        let still = source.is_still();
        loop {
            if !still {
                self.pacer.wait();
            }
            let Some(frame) = self.pull(source) else {
                break;
            };
            let size = self.available_size(1);
            if let Some(grid) = self.render(&frame, size)? {
                print_grid(out, &grid, !still)?;
            }
        }
        Ok(self.finish())
    }

    /// Lecture interactive dans l'écran alternatif ratatui.
    ///
    /// `q`, `Esc` ou `Ctrl-C` arrêtent la lecture entre deux frames. Une
    /// image fixe reste affichée (et suit les redimensionnements) jusqu'à
    /// l'appui d'une touche.
    ///
    /// # Errors
    /// Returns an error if terminal operations fail or on a non frame-local
    /// render error.
    pub fn run_tui(
        &mut self,
        source: &mut dyn FrameSource,
        terminal: &mut DefaultTerminal,
    ) -> Result<PlaybackStats> {
        let still = source.is_still();
        loop {
            // === Attente de l'échéance, en restant réactif aux touches ===
            loop {
                let remaining = self.pacer.remaining(Instant::now());
                if remaining.is_zero() {
                    break;
                }
                if event::poll(remaining)? && is_quit(&event::read()?) {
                    return Ok(self.finish());
                }
            }
            while event::poll(Duration::ZERO)? {
                if is_quit(&event::read()?) {
                    return Ok(self.finish());
                }
            }

            let Some(frame) = self.pull(source) else {
                break;
            };
            self.draw(terminal, &frame)?;
            self.pacer.mark(Instant::now());

            if still {
                self.hold(terminal, &frame)?;
                break;
            }
        }
        Ok(self.finish())
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal, frame: &ColorRaster) -> Result<()> {
        let size = self.available_size(0);
        if let Some(grid) = self.render(frame, size)? {
            terminal.draw(|f| {
                let area = f.area();
                tg_render::canvas::render_grid(f.buffer_mut(), area, &grid);
            })?;
        }
        Ok(())
    }

    /// Garde une image fixe à l'écran jusqu'à une touche.
    fn hold(&mut self, terminal: &mut DefaultTerminal, frame: &ColorRaster) -> Result<()> {
        loop {
            match event::read()? {
                Event::Key(KeyEvent {
                    kind: KeyEventKind::Press,
                    ..
                }) => return Ok(()),
                Event::Resize(..) => self.draw(terminal, frame)?,
                _ => {}
            }
        }
    }
}

/// `q`, `Esc` ou `Ctrl-C`.
fn is_quit(event: &Event) -> bool {
    if let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = *event
    {
        return matches!(code, KeyCode::Char('q') | KeyCode::Esc)
            || (modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c'));
    }
    false
}
