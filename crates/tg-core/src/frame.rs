use std::fmt;

use crate::error::CoreError;

/// Raster couleur. Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// Immuable une fois produit : chaque étage du pipeline alloue un nouveau
/// raster plutôt que de modifier son entrée.
///
/// # Example
/// ```
/// use tg_core::frame::ColorRaster;
/// let raster = ColorRaster::new(10, 10);
/// assert_eq!(raster.as_raw().len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRaster {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl ColorRaster {
    /// Crée un raster noir opaque aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::ColorRaster;
    /// let raster = ColorRaster::new(100, 50);
    /// assert_eq!(raster.width(), 100);
    /// assert_eq!(raster.height(), 50);
    /// assert_eq!(raster.pixel(0, 0), (0, 0, 0, 255));
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| (0, 0, 0, 255))
    }

    /// Build a raster by evaluating `f(x, y) -> (r, g, b, a)` for every pixel.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::ColorRaster;
    /// let raster = ColorRaster::from_fn(2, 1, |x, _| if x == 0 { (255, 0, 0, 255) } else { (0, 0, 255, 255) });
    /// assert_eq!(raster.pixel(1, 0), (0, 0, 255, 255));
    /// ```
    #[must_use]
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> (u8, u8, u8, u8),
    ) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let (r, g, b, a) = f(x, y);
                data.extend_from_slice(&[r, g, b, a]);
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::ColorRaster;
    /// assert!(ColorRaster::from_rgba(1, 1, vec![1, 2, 3, 4]).is_ok());
    /// assert!(ColorRaster::from_rgba(2, 1, vec![1, 2, 3, 4]).is_err());
    /// ```
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Panics
    /// Panics if (x, y) lies outside the raster.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }
}

/// Raster d'intensité : un octet 0–255 par pixel, row-major.
///
/// # Example
/// ```
/// use tg_core::frame::IntensityRaster;
/// let raster = IntensityRaster::filled(3, 2, 128);
/// assert_eq!(raster.get(2, 1), 128);
/// assert_eq!(raster.min_max(), Some((128, 128)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityRaster {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl IntensityRaster {
    /// Raster where every pixel holds `value`.
    #[must_use]
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Build a raster by evaluating `f(x, y)` for every pixel.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if `data.len()` is not
    /// `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if data.len() != width as usize * height as usize {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw intensity bytes, row-major.
    #[inline]
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Intensity at (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) lies outside the raster.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Smallest and largest intensity, `None` for an empty raster.
    #[must_use]
    pub fn min_max(&self) -> Option<(u8, u8)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Grille de caractères prête à l'affichage, row-major.
///
/// `Display` écrit une ligne par rangée, séparées par `\n`, sans saut de
/// ligne final.
///
/// # Example
/// ```
/// use tg_core::frame::CharacterGrid;
/// let grid = CharacterGrid::from_fn(3, 2, |x, y| if (x + y) % 2 == 0 { '#' } else { '.' });
/// assert_eq!(grid.get(1, 0), '.');
/// assert_eq!(grid.to_string(), "#.#\n.#.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterGrid {
    cells: Vec<char>,
    width: u32,
    height: u32,
}

impl CharacterGrid {
    /// Build a grid by evaluating `f(x, y)` for every cell.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> char) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// Width in characters.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in characters.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Character at (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) lies outside the grid.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Iterate over the rows of the grid.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::CharacterGrid;
    /// let grid = CharacterGrid::from_fn(2, 3, |_, _| '@');
    /// assert_eq!(grid.rows().count(), 3);
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact panics on 0; a zero-width grid still has `height` empty rows.
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * width..(y + 1) * width])
    }
}

impl fmt::Display for CharacterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                fmt::Write::write_char(f, ch)?;
            }
        }
        Ok(())
    }
}
