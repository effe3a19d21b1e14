//! Common types used across the graph store, its cursors and its attributes.

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{NumCast, ToPrimitive, Unsigned};
use smallvec::SmallVec;

use crate::error::{Error, Result};

// ================================================================
// Indices: compact integer types used inside the index arrays.

/// Default integer type used to store vertex and edge identifiers.
pub type DefaultIndexType = u32;

/// Any unsigned integer type usable as the storage type of the index arrays.
///
/// Identifiers are always exchanged with callers as `usize`; `IndexType` only
/// controls how wide each stored entry is.  A graph whose vertex or edge count
/// does not fit in the chosen type cannot be built.
pub trait IndexType: Copy + Default + Eq + Hash + Ord + Debug + NumCast + ToPrimitive + Unsigned + 'static {
    /// Convert a `usize` into the index type, failing if it does not fit.
    #[inline]
    fn from_usize(v: usize) -> Result<Self> {
        <Self as NumCast>::from(v)
            .ok_or_else(|| Error::Failure(format!("value {} does not fit in index type {}",
                                                  v, std::any::type_name::<Self>())))
    }

    /// Widen a stored value back to `usize`.
    #[inline(always)]
    fn index(self) -> usize {
        // Every stored value was produced by `from_usize`.
        self.to_usize().unwrap_or(usize::MAX)
    }
}
impl<T> IndexType for T where T: Copy + Default + Eq + Hash + Ord + Debug + NumCast + ToPrimitive + Unsigned + 'static {}


// ================================================================
// Neighbor modes

bitflags! {
    /// Direction selector for neighbor, incidence and degree queries.
    ///
    /// On undirected graphs every mode behaves like `ALL`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct NeighborMode: u8 {
        /// Follow edges away from the vertex.
        const OUT = 0b01;
        /// Follow edges into the vertex.
        const IN = 0b10;
        /// Follow edges in both directions.
        const ALL = Self::OUT.bits() | Self::IN.bits();
    }
}

impl NeighborMode {
    /// Parse a raw mode value (`1` = out, `2` = in, `3` = all).
    ///
    /// ```rust
    /// use edgegraph::{Error, NeighborMode};
    ///
    /// assert_eq!(NeighborMode::ALL, NeighborMode::from_raw(3).unwrap());
    /// assert_eq!(Err(Error::InvalidMode(4)), NeighborMode::from_raw(4));
    /// ```
    pub fn from_raw(bits: u8) -> Result<Self> {
        NeighborMode::from_bits(bits)
            .filter(|m| ! m.is_empty())
            .ok_or(Error::InvalidMode(bits))
    }

    /// Check that the mode selects at least one direction and nothing else.
    #[inline]
    pub fn validate(self) -> Result<Self> {
        NeighborMode::from_raw(self.bits())
    }

    /// Resolve the directions actually followed on a graph of the given
    /// directedness.
    #[inline]
    pub fn effective(self, directed: bool) -> NeighborMode {
        if directed { self } else { NeighborMode::ALL }
    }
}


/// Neighbor list returned by `neighbors`; most vertices have few neighbors,
/// so short lists stay inline.
pub type Neighbors = SmallVec<[usize; 8]>;
