//! Rebuild of the sorted edge orders and per-vertex offset tables.
//!
//! Everything here is a pure function of the endpoint columns: the store
//! computes a fresh [`EdgeOrder`] for the post-mutation edge set and swaps it
//! in only once every allocation has succeeded.

use crate::error::{Error, Result};
use crate::util::index_vec::IndexVec;
use super::common::IndexType;

/// The derived half of the graph store: two sorted permutations of the edge
/// ids and the offset table delimiting each vertex's slice of each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeOrder<Ix> {
    /// Edge ids sorted by `(from, to)`, ties by id.
    pub by_from: IndexVec<Ix>,
    /// Edge ids sorted by `(to, from)`, ties by id.
    pub by_to: IndexVec<Ix>,
    /// `by_from[offset_out[v]..offset_out[v + 1]]` are the edges leaving `v`.
    pub offset_out: IndexVec<Ix>,
    /// `by_to[offset_in[v]..offset_in[v + 1]]` are the edges entering `v`.
    pub offset_in: IndexVec<Ix>,
}

impl<Ix: IndexType> EdgeOrder<Ix> {
    /// Index for `vertex_count` vertices and no edges.
    pub fn empty(vertex_count: usize) -> Result<Self> {
        let len = offsets_len(vertex_count)?;
        Ok(EdgeOrder{by_from: IndexVec::new(),
                     by_to: IndexVec::new(),
                     offset_out: IndexVec::filled(len, 0)?,
                     offset_in: IndexVec::filled(len, 0)?})
    }

    /// Build the full index for the given endpoint columns.
    ///
    /// Both orders come from a stable two-pass counting sort (least
    /// significant key first), so the cost is O(|V| + |E|) and parallel
    /// edges keep ascending id order.
    pub fn build(vertex_count: usize, from: &IndexVec<Ix>, to: &IndexVec<Ix>) -> Result<Self> {
        debug_assert_eq!(from.len(), to.len());
        trace!("rebuilding edge order: {} vertices, {} edges", vertex_count, from.len());

        let identity = IndexVec::identity(from.len())?;

        let (tmp, _) = counting_sort(&identity, to, vertex_count)?;
        let (by_from, offset_out) = counting_sort(&tmp, from, vertex_count)?;

        let (tmp, _) = counting_sort(&identity, from, vertex_count)?;
        let (by_to, offset_in) = counting_sort(&tmp, to, vertex_count)?;

        Ok(EdgeOrder{by_from: by_from, by_to: by_to, offset_out: offset_out, offset_in: offset_in})
    }

    /// Reserve room in both offset tables for `count` more vertices.
    pub fn reserve_vertices(&mut self, count: usize) -> Result<()> {
        self.offset_out.try_reserve(count)?;
        self.offset_in.try_reserve(count)?;
        Ok(())
    }

    /// Append `count` vertices with no incident edges.
    ///
    /// After a successful `reserve_vertices(count)` this cannot fail.
    pub fn add_vertices(&mut self, count: usize) -> Result<()> {
        let edge_count = self.by_from.len();
        self.reserve_vertices(count)?;
        self.offset_out.extend_filled(count, edge_count)?;
        self.offset_in.extend_filled(count, edge_count)?;
        Ok(())
    }

    /// Range of `by_from` holding the edges that leave `v`.
    #[inline]
    pub fn out_range(&self, v: usize) -> std::ops::Range<usize> {
        self.offset_out.at(v)..self.offset_out.at(v + 1)
    }

    /// Range of `by_to` holding the edges that enter `v`.
    #[inline]
    pub fn in_range(&self, v: usize) -> std::ops::Range<usize> {
        self.offset_in.at(v)..self.offset_in.at(v + 1)
    }
}


/// Length of an offset table for `vertex_count` vertices.
fn offsets_len(vertex_count: usize) -> Result<usize> {
    vertex_count.checked_add(1)
        .ok_or_else(|| Error::Failure(format!("vertex count {} leaves no room for offsets", vertex_count)))
}

/// Stably reorder `perm` by `key[perm[i]]`, with keys in `[0, buckets)`.
///
/// Returns the reordered permutation and the bucket offset table (length
/// `buckets + 1`) delimiting each key's run.
fn counting_sort<Ix: IndexType>(perm: &IndexVec<Ix>,
                                key: &IndexVec<Ix>,
                                buckets: usize) -> Result<(IndexVec<Ix>, IndexVec<Ix>)>
{
    let len = offsets_len(buckets)?;
    let mut counts = Vec::new();
    counts.try_reserve_exact(len)?;
    counts.resize(len, 0usize);

    for e in perm.iter() {
        counts[key.at(e) + 1] += 1;
    }
    for k in 1..counts.len() {
        counts[k] += counts[k - 1];
    }

    let mut offsets = IndexVec::with_capacity(len)?;
    for &c in counts.iter() {
        offsets.push(c)?;
    }

    let mut placed = vec![Ix::default(); 0];
    placed.try_reserve_exact(perm.len())?;
    placed.resize(perm.len(), Ix::default());
    for &e in perm.as_slice() {
        let k = key.at(e.index());
        placed[counts[k]] = e;
        counts[k] += 1;
    }

    Ok((IndexVec::from(placed), offsets))
}
