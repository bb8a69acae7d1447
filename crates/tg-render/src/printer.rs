use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use tg_core::frame::CharacterGrid;

/// Taille du terminal en cellules (colonnes, lignes).
///
/// # Errors
/// Returns an error if the size cannot be queried (no attached terminal).
pub fn terminal_size() -> io::Result<(u32, u32)> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok((u32::from(cols), u32::from(rows)))
}

/// Écrit la grille en texte brut, une ligne par rangée.
///
/// Si `clear` est vrai, efface l'écran et replace le curseur en haut à
/// gauche avant d'écrire (séquences ANSI via crossterm).
///
/// # Errors
/// Returns any I/O error from `out`.
///
/// # Example
/// ```
/// use tg_core::frame::CharacterGrid;
/// use tg_render::printer::print_grid;
///
/// let mut out = Vec::new();
/// print_grid(&mut out, &CharacterGrid::from_fn(2, 2, |x, _| if x == 0 { '#' } else { '.' }), false).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "#.\n#.\n");
/// ```
pub fn print_grid<W: Write>(out: &mut W, grid: &CharacterGrid, clear: bool) -> io::Result<()> {
    if clear {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    let mut line = String::with_capacity(grid.width() as usize * 4 + 1);
    for row in grid.rows() {
        line.clear();
        line.extend(row);
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_prefix_precedes_grid() {
        let mut out = Vec::new();
        print_grid(&mut out, &CharacterGrid::from_fn(1, 1, |_, _| '@'), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\u{1b}["));
        assert!(text.ends_with("@\n"));
    }

    #[test]
    fn unicode_glyphs_are_written_as_utf8() {
        let mut out = Vec::new();
        print_grid(&mut out, &CharacterGrid::from_fn(3, 1, |_, _| '▓'), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "▓▓▓\n");
    }
}
