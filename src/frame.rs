//! Fixed-length pixel frame for an addressable LED strip.

use crate::colors::{BLACK, is_off};
use palette::Srgb;

/// One frame of an addressable strip: `N` colors, addressed by position.
///
/// The length is fixed at compile time so the frame lives on the stack and
/// never allocates.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Srgb; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Creates a frame with every pixel off.
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    /// Number of pixels in the frame.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the color at `index`, or `None` past the end of the strip.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Srgb> {
        self.pixels.get(index).copied()
    }

    /// Sets the color at `index`. Writes past the end of the strip are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, color: Srgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Srgb) {
        self.pixels.fill(color);
    }

    /// Fills `range` with `color`, clipped to the strip.
    pub fn fill_range(&mut self, range: core::ops::Range<usize>, color: Srgb) {
        let end = range.end.min(N);
        let start = range.start.min(end);
        self.pixels[start..end].fill(color);
    }

    pub fn as_slice(&self) -> &[Srgb] {
        &self.pixels
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Srgb> {
        self.pixels.iter()
    }

    /// Number of pixels that are not pure black.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| !is_off(**pixel)).count()
    }

    /// Returns true if every pixel is pure black.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|pixel| is_off(*pixel))
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a PixelBuffer<N> {
    type Item = &'a Srgb;
    type IntoIter = core::slice::Iter<'a, Srgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}
