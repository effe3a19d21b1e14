//! Vec-based storage for compact integer columns.
//!
//! `IndexVec` holds the raw integer sequences the graph store is made of:
//! edge endpoint columns, order permutations and offset tables.  Entries are
//! stored in a caller-chosen [`IndexType`](../../graph/trait.IndexType.html)
//! but read and written as `usize`.

use std::fmt;
use std::iter::{DoubleEndedIterator, ExactSizeIterator};
use std::ops::Deref;
use std::slice;

use crate::error::Result;
use crate::graph::IndexType;

/// Growable sequence of compact unsigned integers.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct IndexVec<Ix> {
    data: Vec<Ix>
}

impl<Ix: IndexType> IndexVec<Ix> {
    /// Create a new, empty IndexVec instance.
    #[inline]
    pub fn new() -> Self {
        IndexVec{data: Vec::new()}
    }

    /// Create a new, empty IndexVec instance with space for the specified
    /// number of entries.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(IndexVec{data: data})
    }

    /// Create an IndexVec holding `len` copies of `value`.
    ///
    /// ```rust
    /// # use edgegraph::util::index_vec::IndexVec;
    /// let v = IndexVec::<u8>::filled(3, 7).unwrap();
    /// assert_eq!(vec![7, 7, 7], v.iter().collect::<Vec<_>>());
    ///
    /// assert!(IndexVec::<u8>::filled(1, 300).is_err());
    /// ```
    pub fn filled(len: usize, value: usize) -> Result<Self> {
        let mut v = Self::new();
        v.extend_filled(len, value)?;
        Ok(v)
    }

    /// Create the identity permutation `0, 1, ..., len - 1`.
    pub fn identity(len: usize) -> Result<Self> {
        if len > 0 {
            Ix::from_usize(len - 1)?;
        }
        let mut v = Self::with_capacity(len)?;
        v.data.extend((0..len).map(|i| Ix::from_usize(i).unwrap_or_default()));
        Ok(v)
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fetch the entry at position `i`.
    ///
    /// Like slice indexing, this call will **panic** if `i` is out of bounds.
    #[inline(always)]
    pub fn at(&self, i: usize) -> usize {
        self.data[i].index()
    }

    /// Fetch the entry at position `i`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<usize> {
        self.data.get(i).map(|v| v.index())
    }

    /// The final entry, if any.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.data.last().map(|v| v.index())
    }

    /// Reserve space for at least `additional` more entries.
    #[inline]
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.data.try_reserve(additional)?;
        Ok(())
    }

    /// Append an entry.
    ///
    /// Fails, leaving the vector unchanged, if `value` does not fit in `Ix`
    /// or space cannot be allocated.
    pub fn push(&mut self, value: usize) -> Result<()> {
        let v = Ix::from_usize(value)?;
        self.data.try_reserve(1)?;
        self.data.push(v);
        Ok(())
    }

    /// Append `count` copies of `value`.
    pub fn extend_filled(&mut self, count: usize, value: usize) -> Result<()> {
        let v = Ix::from_usize(value)?;
        self.data.try_reserve(count)?;
        self.data.resize(self.data.len() + count, v);
        Ok(())
    }

    /// Append every value from a slice of `usize`.  Either all values are
    /// appended or none are.
    pub fn extend_from_usizes(&mut self, values: &[usize]) -> Result<()> {
        let converted = values.iter().map(|&v| Ix::from_usize(v)).collect::<Result<Vec<Ix>>>()?;
        self.data.try_reserve(converted.len())?;
        self.data.extend(converted);
        Ok(())
    }

    /// Overwrite the entry at position `i`.
    ///
    /// This call will **panic** if `i` is out of bounds.
    #[inline]
    pub fn set(&mut self, i: usize, value: usize) -> Result<()> {
        self.data[i] = Ix::from_usize(value)?;
        Ok(())
    }

    /// Keep only the entries whose position satisfies `keep`, preserving
    /// their relative order.  Never allocates.
    pub fn retain_positions<F>(&mut self, mut keep: F)
        where F: FnMut(usize) -> bool
    {
        let mut pos = 0;
        self.data.retain(|_| {
            let k = keep(pos);
            pos += 1;
            k
        });
    }

    /// Iterate over the entries as `usize`.
    #[inline]
    pub fn iter(&self) -> Iter<Ix> {
        Iter(self.data.iter())
    }

    /// Get the stored entries as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Ix] {
        &self.data[..]
    }

    /// Copy the entries into a `Vec<usize>`.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}


/// Iterator over the entries of an IndexVec, widened to `usize`.
///
/// Instances of `Iter` are obtained by calling `iter` on
/// an [`IndexVec`](struct.IndexVec.html).
#[derive(Clone)]
pub struct Iter<'a, Ix: 'a>(slice::Iter<'a, Ix>);

impl<'a, Ix: IndexType> Iterator for Iter<'a, Ix> {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.0.next().map(|v| v.index())
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, Ix: IndexType> DoubleEndedIterator for Iter<'a, Ix> {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        self.0.next_back().map(|v| v.index())
    }
}

impl<'a, Ix: IndexType> ExactSizeIterator for Iter<'a, Ix> {}


impl<Ix: fmt::Debug> fmt::Debug for IndexVec<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<Ix> Deref for IndexVec<Ix> {
    type Target = [Ix];
    #[inline]
    fn deref(&self) -> &[Ix] {
        &self.data[..]
    }
}

impl<Ix> AsRef<[Ix]> for IndexVec<Ix> {
    fn as_ref(&self) -> &[Ix] {
        &self.data[..]
    }
}

impl<Ix> From<Vec<Ix>> for IndexVec<Ix> {
    fn from(v: Vec<Ix>) -> Self {
        IndexVec{data: v}
    }
}

impl<'a, Ix: IndexType> IntoIterator for &'a IndexVec<Ix> {
    type Item = usize;
    type IntoIter = Iter<'a, Ix>;
    fn into_iter(self) -> Iter<'a, Ix> {
        self.iter()
    }
}
