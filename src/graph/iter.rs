//! Cursors over the vertices, edges and neighborhoods of a graph.
//!
//! Every cursor implements the [`Cursor`](trait.Cursor.html) protocol: it
//! starts on the first element of its sequence (or at `End` if the sequence
//! is empty), moves with `next` and `prev`, and exposes whichever of the
//! `vertex`, `edge`, `edge_from`, `edge_to` and `neighbor` accessors make
//! sense for its variant.  Each step is O(1) and nothing is copied out of the
//! store.
//!
//! A cursor holds a shared borrow of its graph, so the graph cannot be
//! mutated while the cursor is alive:
//!
//! ```rust,compile_fail
//! use edgegraph::{Cursor, OrderedEdgeList};
//!
//! let mut g = OrderedEdgeList::new(3, true).unwrap();
//! let mut it = g.iter_vertices();
//! g.add_vertices(1).unwrap();
//! it.next();
//! ```
//!
//! Where the kind of cursor is only known at run time, the closed
//! [`GraphIter`](enum.GraphIter.html) sum wraps any of the five variants.

use std::ops::Range;

use crate::error::Result;
use super::common::{DefaultIndexType, IndexType, NeighborMode};
use super::store::OrderedEdgeList;

/// Protocol shared by every cursor.
///
/// Calling `next` once `end()` is true, or `prev` on the first element, is a
/// caller error: it trips a debug assertion and otherwise leaves the cursor
/// where it is.  Accessors return `None` at `End` and for accessors the
/// variant does not provide.
pub trait Cursor {
    /// Advance to the next element, or to `End` after the last one.
    fn next(&mut self);

    /// Step back to the previous element.  From `End`, moves to the last
    /// element.
    fn prev(&mut self);

    /// Whether the cursor has moved past the last element.
    fn end(&self) -> bool;

    /// Return to the first element (or `End`, for an empty sequence).
    fn reset(&mut self);

    /// Current vertex.
    fn vertex(&self) -> Option<usize> { None }

    /// Current edge id.
    fn edge(&self) -> Option<usize> { None }

    /// Source endpoint of the current edge.
    fn edge_from(&self) -> Option<usize> { None }

    /// Target endpoint of the current edge.
    fn edge_to(&self) -> Option<usize> { None }

    /// Vertex at the far end of the current incident edge.
    fn neighbor(&self) -> Option<usize> { None }
}


// ----------------------------------------------------------------
// Positional cursors

/// Position within a sequence of known length; `pos == len` is `End`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Position {
    pos: usize,
    len: usize,
}

impl Position {
    fn new(len: usize) -> Self {
        Position{pos: 0, len: len}
    }

    #[inline]
    fn current(&self) -> Option<usize> {
        if self.pos < self.len { Some(self.pos) } else { None }
    }

    #[inline]
    fn next(&mut self) {
        debug_assert!(self.pos < self.len, "cursor advanced past end");
        if self.pos < self.len {
            self.pos += 1;
        }
    }

    #[inline]
    fn prev(&mut self) {
        debug_assert!(self.pos > 0, "cursor moved before first element");
        if self.pos > 0 {
            self.pos -= 1;
        }
    }
}

/// Walks vertex ids `0..vertex_count` in ascending order.
#[derive(Clone, Debug)]
pub struct VertexIds<'g, Ix: 'g = DefaultIndexType> {
    graph: &'g OrderedEdgeList<Ix>,
    at: Position,
}

impl<'g, Ix: IndexType> VertexIds<'g, Ix> {
    /// Create a cursor on the first vertex of `graph`.
    pub fn new(graph: &'g OrderedEdgeList<Ix>) -> Self {
        VertexIds{graph: graph, at: Position::new(graph.vertex_count())}
    }
}

impl<'g, Ix: IndexType> Cursor for VertexIds<'g, Ix> {
    fn next(&mut self) { self.at.next() }
    fn prev(&mut self) { self.at.prev() }
    fn end(&self) -> bool { self.at.current().is_none() }
    fn reset(&mut self) { self.at = Position::new(self.graph.vertex_count()) }
    fn vertex(&self) -> Option<usize> { self.at.current() }
}


/// Walks edge ids `0..edge_count` in creation order.
#[derive(Clone, Debug)]
pub struct EdgeIds<'g, Ix: 'g = DefaultIndexType> {
    graph: &'g OrderedEdgeList<Ix>,
    at: Position,
}

impl<'g, Ix: IndexType> EdgeIds<'g, Ix> {
    /// Create a cursor on the first edge of `graph`.
    pub fn new(graph: &'g OrderedEdgeList<Ix>) -> Self {
        EdgeIds{graph: graph, at: Position::new(graph.edge_count())}
    }
}

impl<'g, Ix: IndexType> Cursor for EdgeIds<'g, Ix> {
    fn next(&mut self) { self.at.next() }
    fn prev(&mut self) { self.at.prev() }
    fn end(&self) -> bool { self.at.current().is_none() }
    fn reset(&mut self) { self.at = Position::new(self.graph.edge_count()) }
    fn edge(&self) -> Option<usize> { self.at.current() }
    fn edge_from(&self) -> Option<usize> { self.edge().map(|e| self.graph.endpoints(e).0) }
    fn edge_to(&self) -> Option<usize> { self.edge().map(|e| self.graph.endpoints(e).1) }
}


/// Walks every edge grouped by source vertex, then by target: the
/// `(from, to)` order permutation.
#[derive(Clone, Debug)]
pub struct EdgeFromOrder<'g, Ix: 'g = DefaultIndexType> {
    graph: &'g OrderedEdgeList<Ix>,
    at: Position,
}

impl<'g, Ix: IndexType> EdgeFromOrder<'g, Ix> {
    /// Create a cursor on the edge with the smallest `(from, to)`.
    pub fn new(graph: &'g OrderedEdgeList<Ix>) -> Self {
        EdgeFromOrder{graph: graph, at: Position::new(graph.edge_count())}
    }
}

impl<'g, Ix: IndexType> Cursor for EdgeFromOrder<'g, Ix> {
    fn next(&mut self) { self.at.next() }
    fn prev(&mut self) { self.at.prev() }
    fn end(&self) -> bool { self.at.current().is_none() }
    fn reset(&mut self) { self.at = Position::new(self.graph.edge_count()) }
    fn edge(&self) -> Option<usize> { self.at.current().map(|i| self.graph.order_by_from().at(i)) }
    fn edge_from(&self) -> Option<usize> { self.edge().map(|e| self.graph.endpoints(e).0) }
    fn edge_to(&self) -> Option<usize> { self.edge().map(|e| self.graph.endpoints(e).1) }
}


// ----------------------------------------------------------------
// Incidence walks

/// Which offset slice the current element of an incidence walk comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Out,
    In,
}

/// Merged walk over the outgoing slice (of `order_by_from`) and incoming
/// slice (of `order_by_to`) of one vertex.
///
/// Both slices are sorted by far endpoint, so merging them two-finger style
/// yields the same sequence as `neighbors`: ascending far endpoint, outgoing
/// edge first on ties.
#[derive(Clone, Debug)]
struct Incidence<'g, Ix: 'g> {
    graph: &'g OrderedEdgeList<Ix>,
    vertex: usize,
    mode: NeighborMode,
    out: Range<usize>,
    inc: Range<usize>,
    i: usize,
    j: usize,
}

impl<'g, Ix: IndexType> Incidence<'g, Ix> {
    fn new(graph: &'g OrderedEdgeList<Ix>, v: usize, mode: NeighborMode) -> Result<Self> {
        let (out, inc) = Self::ranges(graph, v, mode)?;
        Ok(Incidence{graph: graph, vertex: v, mode: mode,
                     i: out.start, j: inc.start, out: out, inc: inc})
    }

    fn ranges(graph: &OrderedEdgeList<Ix>, v: usize, mode: NeighborMode) -> Result<(Range<usize>, Range<usize>)> {
        let res = mode.validate()
            .and_then(|mode| graph.check_vertex(v).map(|_| mode.effective(graph.is_directed())))
            .map(|mode| {
                let out = if mode.contains(NeighborMode::OUT) {
                    graph.offset_out().at(v)..graph.offset_out().at(v + 1)
                } else { 0..0 };
                let inc = if mode.contains(NeighborMode::IN) {
                    graph.offset_in().at(v)..graph.offset_in().at(v + 1)
                } else { 0..0 };
                (out, inc)
            });
        graph.report(res)
    }

    fn retarget(&mut self, v: usize, mode: NeighborMode) -> Result<()> {
        let (out, inc) = Self::ranges(self.graph, v, mode)?;
        self.vertex = v;
        self.mode = mode;
        self.out = out;
        self.inc = inc;
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.i = self.out.start;
        self.j = self.inc.start;
    }

    /// `(edge, far endpoint)` at position `i` of the outgoing order.
    #[inline]
    fn out_at(&self, i: usize) -> (usize, usize) {
        let e = self.graph.order_by_from().at(i);
        (e, self.graph.endpoints(e).1)
    }

    /// `(edge, far endpoint)` at position `j` of the incoming order.
    #[inline]
    fn in_at(&self, j: usize) -> (usize, usize) {
        let e = self.graph.order_by_to().at(j);
        (e, self.graph.endpoints(e).0)
    }

    fn current(&self) -> Option<(Side, usize, usize)> {
        let o = if self.i < self.out.end { Some(self.out_at(self.i)) } else { None };
        let n = if self.j < self.inc.end { Some(self.in_at(self.j)) } else { None };
        match (o, n) {
            (Some(a), Some(b)) if a.1 <= b.1 => Some((Side::Out, a.0, a.1)),
            (Some(_), Some(b)) => Some((Side::In, b.0, b.1)),
            (Some(a), None) => Some((Side::Out, a.0, a.1)),
            (None, Some(b)) => Some((Side::In, b.0, b.1)),
            (None, None) => None,
        }
    }

    fn next(&mut self) {
        match self.current() {
            Some((Side::Out, _, _)) => self.i += 1,
            Some((Side::In, _, _)) => self.j += 1,
            None => debug_assert!(false, "cursor advanced past end"),
        }
    }

    fn prev(&mut self) {
        let o = if self.i > self.out.start { Some(self.out_at(self.i - 1).1) } else { None };
        let n = if self.j > self.inc.start { Some(self.in_at(self.j - 1).1) } else { None };
        match (o, n) {
            // Incoming entries sort after outgoing ones with the same endpoint.
            (Some(a), Some(b)) if b >= a => self.j -= 1,
            (Some(_), _) => self.i -= 1,
            (None, Some(_)) => self.j -= 1,
            (None, None) => debug_assert!(false, "cursor moved before first element"),
        }
    }
}


/// Walks the neighbors of one vertex, in the order
/// [`neighbors`](../struct.OrderedEdgeList.html#method.neighbors) returns
/// them.
///
/// ```rust
/// use edgegraph::{Cursor, NeighborMode, OrderedEdgeList};
///
/// let g = OrderedEdgeList::from_edges(&[0, 1, 1, 2, 2, 0], 3, true).unwrap();
/// let mut it = g.iter_vertex_neighbors(1, NeighborMode::ALL).unwrap();
/// let mut seen = Vec::new();
/// while ! it.end() {
///     seen.extend(it.neighbor());
///     it.next();
/// }
/// assert_eq!(vec![0, 2], seen);
/// ```
#[derive(Clone, Debug)]
pub struct VertexNeighbors<'g, Ix: 'g = DefaultIndexType>(Incidence<'g, Ix>);

impl<'g, Ix: IndexType> VertexNeighbors<'g, Ix> {
    /// Create a cursor on the first neighbor of `v`.  Fails on an invalid
    /// vertex or mode.
    pub fn new(graph: &'g OrderedEdgeList<Ix>, v: usize, mode: NeighborMode) -> Result<Self> {
        Incidence::new(graph, v, mode).map(VertexNeighbors)
    }

    /// Point the cursor at another vertex and mode, and reset it.  On
    /// failure the cursor is unchanged.
    pub fn retarget(&mut self, v: usize, mode: NeighborMode) -> Result<()> {
        self.0.retarget(v, mode)
    }

    /// Vertex whose neighbors are walked.
    pub fn center(&self) -> usize {
        self.0.vertex
    }

    /// Mode the cursor was created or retargeted with.
    pub fn mode(&self) -> NeighborMode {
        self.0.mode
    }
}

impl<'g, Ix: IndexType> Cursor for VertexNeighbors<'g, Ix> {
    fn next(&mut self) { self.0.next() }
    fn prev(&mut self) { self.0.prev() }
    fn end(&self) -> bool { self.0.current().is_none() }
    fn reset(&mut self) { self.0.reset() }
    fn vertex(&self) -> Option<usize> { self.neighbor() }
    fn neighbor(&self) -> Option<usize> { self.0.current().map(|c| c.2) }
}


/// Walks the edges incident to one vertex, in the order
/// [`incident`](../struct.OrderedEdgeList.html#method.incident) returns
/// them.
#[derive(Clone, Debug)]
pub struct EdgeNeighbors<'g, Ix: 'g = DefaultIndexType>(Incidence<'g, Ix>);

impl<'g, Ix: IndexType> EdgeNeighbors<'g, Ix> {
    /// Create a cursor on the first edge incident to `v`.  Fails on an
    /// invalid vertex or mode.
    pub fn new(graph: &'g OrderedEdgeList<Ix>, v: usize, mode: NeighborMode) -> Result<Self> {
        Incidence::new(graph, v, mode).map(EdgeNeighbors)
    }

    /// Point the cursor at another vertex and mode, and reset it.  On
    /// failure the cursor is unchanged.
    pub fn retarget(&mut self, v: usize, mode: NeighborMode) -> Result<()> {
        self.0.retarget(v, mode)
    }

    /// Vertex whose incident edges are walked.
    pub fn center(&self) -> usize {
        self.0.vertex
    }

    /// Mode the cursor was created or retargeted with.
    pub fn mode(&self) -> NeighborMode {
        self.0.mode
    }
}

impl<'g, Ix: IndexType> Cursor for EdgeNeighbors<'g, Ix> {
    fn next(&mut self) { self.0.next() }
    fn prev(&mut self) { self.0.prev() }
    fn end(&self) -> bool { self.0.current().is_none() }
    fn reset(&mut self) { self.0.reset() }
    fn edge(&self) -> Option<usize> { self.0.current().map(|c| c.1) }
    fn edge_from(&self) -> Option<usize> { self.edge().map(|e| self.0.graph.endpoints(e).0) }
    fn edge_to(&self) -> Option<usize> { self.edge().map(|e| self.0.graph.endpoints(e).1) }
    fn neighbor(&self) -> Option<usize> { self.0.current().map(|c| c.2) }
}


// ----------------------------------------------------------------
// Closed sum

/// Any of the five cursor variants.
#[derive(Clone, Debug)]
pub enum GraphIter<'g, Ix: 'g = DefaultIndexType> {
    /// See [`VertexIds`](struct.VertexIds.html).
    VertexIds(VertexIds<'g, Ix>),
    /// See [`VertexNeighbors`](struct.VertexNeighbors.html).
    VertexNeighbors(VertexNeighbors<'g, Ix>),
    /// See [`EdgeIds`](struct.EdgeIds.html).
    EdgeIds(EdgeIds<'g, Ix>),
    /// See [`EdgeFromOrder`](struct.EdgeFromOrder.html).
    EdgeFromOrder(EdgeFromOrder<'g, Ix>),
    /// See [`EdgeNeighbors`](struct.EdgeNeighbors.html).
    EdgeNeighbors(EdgeNeighbors<'g, Ix>),
}

macro_rules! dispatch {
    ($s: expr, $it: ident => $e: expr) => {
        match $s {
            GraphIter::VertexIds($it) => $e,
            GraphIter::VertexNeighbors($it) => $e,
            GraphIter::EdgeIds($it) => $e,
            GraphIter::EdgeFromOrder($it) => $e,
            GraphIter::EdgeNeighbors($it) => $e,
        }
    };
}

impl<'g, Ix: IndexType> Cursor for GraphIter<'g, Ix> {
    fn next(&mut self) { dispatch!(self, it => it.next()) }
    fn prev(&mut self) { dispatch!(self, it => it.prev()) }
    fn end(&self) -> bool { dispatch!(self, it => it.end()) }
    fn reset(&mut self) { dispatch!(self, it => it.reset()) }
    fn vertex(&self) -> Option<usize> { dispatch!(self, it => it.vertex()) }
    fn edge(&self) -> Option<usize> { dispatch!(self, it => it.edge()) }
    fn edge_from(&self) -> Option<usize> { dispatch!(self, it => it.edge_from()) }
    fn edge_to(&self) -> Option<usize> { dispatch!(self, it => it.edge_to()) }
    fn neighbor(&self) -> Option<usize> { dispatch!(self, it => it.neighbor()) }
}

macro_rules! impl_from_variant {
    ($($v: ident),*) => {
        $(impl<'g, Ix: IndexType> From<$v<'g, Ix>> for GraphIter<'g, Ix> {
            #[inline]
            fn from(it: $v<'g, Ix>) -> Self {
                GraphIter::$v(it)
            }
        })*
    };
}
impl_from_variant!(VertexIds, VertexNeighbors, EdgeIds, EdgeFromOrder, EdgeNeighbors);


// ----------------------------------------------------------------
// Constructors on the store

impl<Ix: IndexType> OrderedEdgeList<Ix> {
    /// Cursor over all vertex ids.
    ///
    /// ```rust
    /// use edgegraph::{Cursor, OrderedEdgeList};
    ///
    /// let g = OrderedEdgeList::new(2, false).unwrap();
    /// let mut it = g.iter_vertices();
    /// assert_eq!(Some(0), it.vertex());
    /// it.next();
    /// it.next();
    /// assert!(it.end());
    /// it.prev();
    /// assert_eq!(Some(1), it.vertex());
    /// ```
    pub fn iter_vertices(&self) -> VertexIds<Ix> {
        VertexIds::new(self)
    }

    /// Cursor over the neighbors of `v` in the directions `mode` selects.
    pub fn iter_vertex_neighbors(&self, v: usize, mode: NeighborMode) -> Result<VertexNeighbors<Ix>> {
        VertexNeighbors::new(self, v, mode)
    }

    /// Cursor over all edge ids, in creation order.
    pub fn iter_edges(&self) -> EdgeIds<Ix> {
        EdgeIds::new(self)
    }

    /// Cursor over all edges ordered by `(from, to)`.
    pub fn iter_edges_from_order(&self) -> EdgeFromOrder<Ix> {
        EdgeFromOrder::new(self)
    }

    /// Cursor over the edges incident to `v` in the directions `mode` selects.
    pub fn iter_edge_neighbors(&self, v: usize, mode: NeighborMode) -> Result<EdgeNeighbors<Ix>> {
        EdgeNeighbors::new(self, v, mode)
    }
}
