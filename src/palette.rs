// palette.rs
//
// Copyright (c) 2026  Douglas Lau
//
use crate::block::{CHANNELS, CHUNK_LEN, MAX_COLORS};
use crate::error::{Error, Result};
use pix::rgb::Rgb;
use pix::Palette;

/// Colormap of RGB triples, installed as the global color table.
///
/// To be accepted by an [Encoder], the byte length must be a multiple of
/// both 3 and 32, with no more than 128 colors.  Any of those can be built
/// with [grayscale]:
///
/// ```
/// let colormap = rawgif::Colormap::grayscale(32)?;
/// assert_eq!(colormap.len(), 32);
/// assert_eq!(colormap.colors().len(), 96);
/// # Ok::<(), rawgif::Error>(())
/// ```
///
/// [Encoder]: struct.Encoder.html
/// [grayscale]: struct.Colormap.html#method.grayscale
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colormap {
    colors: Vec<u8>,
}

/// Get the number of bits needed to address every index of a colormap.
///
/// This is `ceil(log2(num_colors))`:
///
/// ```
/// assert_eq!(rawgif::lzw_bits(2), 1);
/// assert_eq!(rawgif::lzw_bits(128), 7);
/// assert_eq!(rawgif::lzw_bits(256), 8);
/// ```
pub fn lzw_bits(num_colors: usize) -> u8 {
    match num_colors {
        0 | 1 => 0,
        n => (usize::BITS - (n - 1).leading_zeros()) as u8,
    }
}

impl Colormap {
    /// Create a colormap from RGB triples
    pub fn with_colors(colors: &[u8]) -> Result<Self> {
        if colors.len() % CHANNELS != 0 {
            return Err(Error::InvalidColormap);
        }
        let colors = colors.to_vec();
        Ok(Colormap { colors })
    }

    /// Create a grayscale ramp, with index `i` at `i * 256 / num_colors`
    pub fn grayscale(num_colors: usize) -> Result<Self> {
        if num_colors == 0 {
            return Err(Error::InvalidColormap);
        }
        let mut colors = Vec::with_capacity(num_colors * CHANNELS);
        for i in 0..num_colors {
            let v = (i * 256 / num_colors) as u8;
            colors.extend_from_slice(&[v, v, v]);
        }
        Ok(Colormap { colors })
    }

    /// Create a colormap from the entries of a `pix` palette
    pub fn from_palette(palette: &Palette) -> Self {
        let mut colors = Vec::with_capacity(palette.len() * CHANNELS);
        for i in 0..palette.len() {
            if let Some(clr) = palette.entry(i) {
                colors.push(u8::from(Rgb::red(clr)));
                colors.push(u8::from(Rgb::green(clr)));
                colors.push(u8::from(Rgb::blue(clr)));
            }
        }
        Colormap { colors }
    }

    /// Get the number of colors
    pub fn len(&self) -> usize {
        self.colors.len() / CHANNELS
    }

    /// Check if the colormap is empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the RGB bytes
    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    /// Get the number of bits needed to address every color
    pub fn lzw_bits(&self) -> u8 {
        lzw_bits(self.len())
    }

    /// Check that the colormap can be installed as a global color table
    pub(crate) fn validate(&self) -> Result<()> {
        let n_bytes = self.colors.len();
        if n_bytes == 0
            || n_bytes % CHANNELS != 0
            || n_bytes % CHUNK_LEN != 0
            || self.len() > MAX_COLORS
        {
            Err(Error::InvalidColormap)
        } else {
            Ok(())
        }
    }
}
