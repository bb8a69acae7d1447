use crate::error::CoreError;

/// 10 caractères — compact, bon contraste.
pub const RAMP_COMPACT: &str = " .:-=+*#%@";

/// 9 caractères — rampe historique, apostrophe au lieu des deux-points.
pub const RAMP_CLASSIC: &str = " .'-=+*%#";

/// 70 caractères — Paul Bourke extended, bon équilibre.
pub const RAMP_STANDARD: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Blocs Unicode — pseudo-pixels.
pub const RAMP_BLOCKS: &str = " ░▒▓█";

/// Named built-in ramps, in the order they are listed to users.
pub const RAMP_PRESETS: &[(&str, &str)] = &[
    ("compact", RAMP_COMPACT),
    ("classic", RAMP_CLASSIC),
    ("standard", RAMP_STANDARD),
    ("blocks", RAMP_BLOCKS),
];

/// Ordered, non-empty character ramp from darkest to lightest intensity.
///
/// Intensity `g` maps to index `floor(g * N / 256)`, clamped to `N - 1`.
/// The 256 possible results are precomputed at construction for O(1)
/// per-pixel cost.
///
/// # Example
/// ```
/// use tg_core::charset::GlyphRamp;
/// let ramp = GlyphRamp::new(" .:#@").unwrap();
/// assert_eq!(ramp.glyph(0), ' ');
/// assert_eq!(ramp.glyph(255), '@');
/// ```
#[derive(Clone, Debug)]
pub struct GlyphRamp {
    chars: Vec<char>,
    lut: [u32; 256],
}

impl GlyphRamp {
    /// Build a ramp from a string ordered darkest → lightest.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `chars` is empty.
    ///
    /// # Example
    /// ```
    /// use tg_core::charset::GlyphRamp;
    /// assert!(GlyphRamp::new("").is_err());
    /// assert_eq!(GlyphRamp::new("@").unwrap().len(), 1);
    /// ```
    pub fn new(chars: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(CoreError::Config("la rampe de glyphes est vide".into()));
        }
        Ok(Self::from_glyphs(chars))
    }

    /// `chars` must be non-empty.
    fn from_glyphs(chars: Vec<char>) -> Self {
        let n = chars.len();
        let lut = std::array::from_fn(|g| (g * n / 256).min(n - 1) as u32);
        Self { chars, lut }
    }

    /// Look up a built-in ramp by name (see [`RAMP_PRESETS`]).
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] for an unknown name.
    ///
    /// # Example
    /// ```
    /// use tg_core::charset::GlyphRamp;
    /// assert_eq!(GlyphRamp::preset("compact").unwrap().len(), 10);
    /// assert!(GlyphRamp::preset("neon").is_err());
    /// ```
    pub fn preset(name: &str) -> Result<Self, CoreError> {
        let chars = RAMP_PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|(_, chars)| *chars)
            .ok_or_else(|| {
                let known: Vec<&str> = RAMP_PRESETS.iter().map(|(n, _)| *n).collect();
                CoreError::Config(format!(
                    "rampe inconnue '{name}' (connues : {})",
                    known.join(", ")
                ))
            })?;
        Self::new(chars)
    }

    /// Number of glyphs N.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: an empty ramp cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Ramp index for an intensity value.
    #[inline(always)]
    #[must_use]
    pub fn index(&self, intensity: u8) -> usize {
        self.lut[usize::from(intensity)] as usize
    }

    /// Glyph for an intensity value.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, intensity: u8) -> char {
        self.chars[self.index(intensity)]
    }

    /// The glyphs, darkest first.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::from_glyphs(RAMP_COMPACT.chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_maps_extremes() {
        let ramp = GlyphRamp::new(RAMP_COMPACT).unwrap();
        assert_eq!(ramp.index(0), 0);
        assert_eq!(ramp.index(255), ramp.len() - 1);
        assert_eq!(ramp.glyph(0), ' ');
        assert_eq!(ramp.glyph(255), '@');
    }

    #[test]
    fn ramp_monotonic() {
        for chars in [RAMP_COMPACT, RAMP_CLASSIC, RAMP_STANDARD, RAMP_BLOCKS, "x"] {
            let ramp = GlyphRamp::new(chars).unwrap();
            let mut prev_idx = 0usize;
            for g in 0..=255u8 {
                let idx = ramp.index(g);
                assert!(idx >= prev_idx, "rampe non monotone à l'intensité {g}");
                assert!(idx < ramp.len());
                prev_idx = idx;
            }
            assert_eq!(ramp.index(255), ramp.len() - 1);
        }
    }

    #[test]
    fn ramp_bucket_boundaries() {
        // N = 10: floor(g * 10 / 256)
        let ramp = GlyphRamp::new(RAMP_COMPACT).unwrap();
        assert_eq!(ramp.index(25), 0);
        assert_eq!(ramp.index(26), 1);
        assert_eq!(ramp.index(128), 5);
        assert_eq!(ramp.index(230), 8);
        assert_eq!(ramp.index(231), 9);
    }

    #[test]
    fn single_glyph_ramp_always_selects_it() {
        let ramp = GlyphRamp::new("#").unwrap();
        assert!((0..=255u8).all(|g| ramp.glyph(g) == '#'));
    }

    #[test]
    fn empty_ramp_is_config_error() {
        assert!(matches!(GlyphRamp::new(""), Err(CoreError::Config(_))));
    }

    #[test]
    fn ramps_longer_than_256_glyphs_are_accepted() {
        let chars: String = ('\u{4e00}'..).take(300).collect();
        let ramp = GlyphRamp::new(&chars).unwrap();
        assert_eq!(ramp.len(), 300);
        assert_eq!(ramp.index(0), 0);
        // floor(128 * 300 / 256) = 150, floor(255 * 300 / 256) = 298
        assert_eq!(ramp.index(128), 150);
        assert_eq!(ramp.index(255), 298);
        assert_eq!(ramp.glyph(1), '\u{4e01}');
    }

    #[test]
    fn default_matches_compact_preset() {
        let default = GlyphRamp::default();
        let compact = GlyphRamp::preset("compact").unwrap();
        assert_eq!(default.chars(), compact.chars());
        assert!((0..=255u8).all(|g| default.index(g) == compact.index(g)));
    }

    #[test]
    fn unicode_ramp_counts_chars_not_bytes() {
        let ramp = GlyphRamp::preset("blocks").unwrap();
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp.glyph(255), '█');
    }
}
