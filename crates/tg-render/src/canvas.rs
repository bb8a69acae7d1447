use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tg_core::frame::CharacterGrid;

/// Zone occupée par une grille centrée dans `area`, tronquée si trop grande.
///
/// # Example
/// ```
/// use ratatui::layout::Rect;
/// use tg_render::canvas::centered;
/// assert_eq!(centered(Rect::new(0, 0, 80, 30), 60, 30), Rect::new(10, 0, 60, 30));
/// ```
#[must_use]
pub fn centered(area: Rect, width: u32, height: u32) -> Rect {
    let w = u16::try_from(width).unwrap_or(u16::MAX).min(area.width);
    let h = u16::try_from(height).unwrap_or(u16::MAX).min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Écrit directement une `CharacterGrid` dans un `ratatui::Buffer`.
///
/// Pas de widget ratatui — écriture directe, grille centrée dans `area`.
/// Les cellules hors de la grille sont effacées.
///
/// # Example
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tg_core::frame::CharacterGrid;
/// use tg_render::canvas::render_grid;
///
/// let area = Rect::new(0, 0, 4, 1);
/// let mut buf = Buffer::empty(area);
/// render_grid(&mut buf, area, &CharacterGrid::from_fn(2, 1, |_, _| '#'));
/// assert_eq!(buf[(1, 0)].symbol(), "#");
/// assert_eq!(buf[(0, 0)].symbol(), " ");
/// ```
pub fn render_grid(buf: &mut Buffer, area: Rect, grid: &CharacterGrid) {
    let target = centered(area, grid.width(), grid.height());
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            let ch = if target.contains((x, y).into()) {
                grid.get(u32::from(x - target.x), u32::from(y - target.y))
            } else {
                ' '
            };
            cell.set_char(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_larger_than_area_is_clipped() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        let grid = CharacterGrid::from_fn(5, 4, |x, y| char::from(b'a' + (x + y * 5) as u8));
        render_grid(&mut buf, area, &grid);
        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(2, 1)].symbol(), "h");
    }

    #[test]
    fn small_grid_is_centered() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        render_grid(&mut buf, area, &CharacterGrid::from_fn(2, 1, |_, _| '@'));
        assert_eq!(buf[(2, 1)].symbol(), "@");
        assert_eq!(buf[(3, 1)].symbol(), "@");
        assert_eq!(buf[(1, 1)].symbol(), " ");
        assert_eq!(buf[(2, 0)].symbol(), " ");
    }

    #[test]
    fn centered_respects_area_offset() {
        let area = Rect::new(5, 2, 10, 10);
        assert_eq!(centered(area, 4, 10), Rect::new(8, 2, 4, 10));
        assert_eq!(centered(area, 100, 100), area);
    }
}
