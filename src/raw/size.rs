use super::handle::{PACKED_MAX, Packed};

/// Cached element count of a subtree.
///
/// Packed like a [`Handle`](super::handle::Handle): a tree never holds more elements than the
/// arena has slots, so every count fits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(Packed);

impl Size {
    pub(crate) const MAX: usize = PACKED_MAX;
    pub(crate) const ZERO: Self = Self::from_usize(0);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        match Packed::new(size) {
            Some(packed) => Self(packed),
            None => panic!("`Size::from_usize()` - `size` > `Size::MAX`!"),
        }
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.get()
    }

    /// Returns the count grown by one element.
    #[inline]
    pub(crate) const fn increment(self) -> Self {
        Self::from_usize(self.to_usize() + 1)
    }

    /// Returns the count shrunk by one element.
    #[inline]
    pub(crate) const fn decrement(self) -> Self {
        assert!(self.to_usize() > 0, "`Size::decrement()` - size is already zero!");
        Self::from_usize(self.to_usize() - 1)
    }
}
