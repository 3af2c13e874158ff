//! Compact indices for arena slots and subtree counts.

use core::num::NonZero;

// Narrow under test so the capacity limits are reachable in a unit test.
#[cfg(test)]
type Repr = u16;
#[cfg(not(test))]
type Repr = u32;

/// Largest value a [`Packed`] can hold; `Repr::MAX` itself is the shifted form of it.
pub(crate) const PACKED_MAX: usize = Repr::MAX as usize - 1;

/// A `usize` in `0..=PACKED_MAX` stored shifted up by one.
///
/// Zero never occurs in the representation, so `Option<Packed>` costs no extra space. Both the
/// child links and the cached counts of a node are built on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Packed(NonZero<Repr>);

impl Packed {
    /// Packs `value`, or returns `None` when it exceeds [`PACKED_MAX`].
    #[inline]
    pub(crate) const fn new(value: usize) -> Option<Self> {
        if value > PACKED_MAX {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let shifted = (value + 1) as Repr;
        match NonZero::new(shifted) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    #[inline]
    pub(crate) const fn get(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// Position of an occupied node slot in the arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(Packed);

impl Handle {
    pub(crate) const MAX: usize = PACKED_MAX;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        match Packed::new(index) {
            Some(packed) => Self(packed),
            None => panic!("`Handle::from_index()` - `index` > `Handle::MAX`!"),
        }
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        self.0.get()
    }
}
