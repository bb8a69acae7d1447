/// Terminal output for termglyph.
///
/// Provides the ratatui canvas, the plain-text printer and the playback pacer.
pub mod canvas;
pub mod pacer;
pub mod printer;
