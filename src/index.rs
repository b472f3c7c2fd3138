//! Sentinel-based optional link keys.
//!
//! Node links are plain slab keys. Instead of `Option<usize>`, the
//! reserved value `usize::MAX` means "no link", which keeps nodes small
//! and link updates branch-free.

/// A copyable link key with a sentinel "none" value.
pub(crate) trait LinkKey: Copy + Eq {
    /// Sentinel value representing "no link".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }
}

// Slab keys are usize; a slab can never hand out usize::MAX slots, so
// the sentinel can never collide with a live key.
impl LinkKey for usize {
    const NONE: Self = usize::MAX;
}
