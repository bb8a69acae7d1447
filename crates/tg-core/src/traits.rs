use crate::frame::ColorRaster;

/// Fournit des frames au pipeline, une à la fois et dans l'ordre.
///
/// Implémenté par : `ImageSource`, `FolderSource`.
///
/// Une source ne garde jamais toutes ses frames en mémoire : chaque appel à
/// [`next_frame`](FrameSource::next_frame) décode la suivante. Après
/// épuisement, [`rewind`](FrameSource::rewind) relance la séquence depuis le
/// début.
///
/// # Example
/// ```
/// use tg_core::traits::FrameSource;
/// use tg_core::frame::ColorRaster;
///
/// struct Countdown(u32);
/// impl FrameSource for Countdown {
///     fn next_frame(&mut self) -> Option<ColorRaster> {
///         if self.0 == 0 { return None; }
///         self.0 -= 1;
///         Some(ColorRaster::new(1, 1))
///     }
///     fn rewind(&mut self) { self.0 = 3; }
///     fn len_hint(&self) -> Option<usize> { Some(3) }
///     fn is_still(&self) -> bool { false }
/// }
///
/// let mut source = Countdown(3);
/// assert_eq!(std::iter::from_fn(|| source.next_frame()).count(), 3);
/// ```
pub trait FrameSource {
    /// Retourne la prochaine frame, ou `None` quand la séquence est épuisée.
    fn next_frame(&mut self) -> Option<ColorRaster>;

    /// Repositionne la source sur sa première frame.
    fn rewind(&mut self);

    /// Nombre de frames attendu, si connu à l'avance.
    fn len_hint(&self) -> Option<usize>;

    /// `true` si la source est une image fixe (une seule frame).
    fn is_still(&self) -> bool;
}
