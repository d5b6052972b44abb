//! Random number abstraction used for pattern selection and the random
//! patterns.

/// Source of uniform random draws.
///
/// Implemented for [`fastrand::Rng`]. Tests can implement it with scripted
/// values to make the random patterns deterministic.
pub trait RandomSource {
    /// Returns an integer uniformly distributed in `0..bound`.
    ///
    /// `bound` is never zero. Callers reduce the result modulo `bound`, so an
    /// implementation returning a larger value cannot select out of range.
    fn index(&mut self, bound: usize) -> usize;

    /// Returns a float uniformly distributed in `[0.0, 1.0)`.
    fn chance(&mut self) -> f32;
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        self.usize(..bound)
    }

    #[inline]
    fn chance(&mut self) -> f32 {
        self.f32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }

    #[inline]
    fn chance(&mut self) -> f32 {
        (**self).chance()
    }
}

/// Draws an index in `0..bound` that is in range even if the source is not.
#[inline]
pub(crate) fn bounded_index<R: RandomSource + ?Sized>(rng: &mut R, bound: usize) -> usize {
    if bound == 0 {
        return 0;
    }
    rng.index(bound) % bound
}
