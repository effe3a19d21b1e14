//! The ordered-edge-array graph store.

use std::fmt;
use std::ops::Range;

use bit_set::BitSet;
use itertools::Itertools;

use crate::error::{Error, FailureHook, Result};
use crate::util::index_vec::IndexVec;
use super::attr::Attributes;
use super::common::{DefaultIndexType, IndexType, NeighborMode, Neighbors};
use super::index::EdgeOrder;

/// Graph stored as endpoint columns plus two sorted edge orders.
///
/// Vertices are the integers `[0, vertex_count)` and edges the integers
/// `[0, edge_count)`; edge `e` runs from `edge_from(e)` to `edge_to(e)`.
/// Undirected edges are stored once, exactly as given.
///
/// Every mutation either succeeds and leaves all invariants (see
/// [`validate`](#method.validate)) intact, or fails and leaves the graph
/// untouched.  Edge ids are dense and are renumbered by deletions; vertex ids
/// are renumbered by vertex deletion.
///
/// `Ix` sets the storage width of the index arrays; the vertex and edge
/// counts must both fit in it.
#[derive(Clone, Debug)]
pub struct OrderedEdgeList<Ix = DefaultIndexType> {
    vertex_count: usize,
    directed: bool,
    pub(super) from: IndexVec<Ix>,
    pub(super) to: IndexVec<Ix>,
    pub(super) order: EdgeOrder<Ix>,
    pub(super) attributes: Attributes,
    on_failure: Option<FailureHook>,
}


impl OrderedEdgeList<DefaultIndexType> {
    /// Create a graph with `n` vertices and no edges, using the default
    /// index width.
    ///
    /// ```rust
    /// use edgegraph::OrderedEdgeList;
    ///
    /// let g = OrderedEdgeList::new(5, false).unwrap();
    /// assert_eq!(5, g.vertex_count());
    /// assert_eq!(0, g.edge_count());
    /// assert!(! g.is_directed());
    /// ```
    pub fn new(n: usize, directed: bool) -> Result<Self> {
        Self::empty(n, directed)
    }

    /// Create a graph from a flat `from, to, from, to, ...` edge vector,
    /// using the default index width.
    ///
    /// The graph gets `n` vertices, or more if an edge names a higher id.
    ///
    /// ```rust
    /// use edgegraph::OrderedEdgeList;
    ///
    /// let g = OrderedEdgeList::from_edges(&[0, 1, 1, 4], 2, true).unwrap();
    /// assert_eq!(5, g.vertex_count());
    /// assert_eq!((1, 4), g.edge(1).unwrap());
    /// ```
    pub fn from_edges(edges: &[usize], n: usize, directed: bool) -> Result<Self> {
        Self::create(edges, n, directed)
    }
}


impl<Ix: IndexType> OrderedEdgeList<Ix> {
    /// Create a graph with `n` vertices and no edges.
    pub fn empty(n: usize, directed: bool) -> Result<Self> {
        Ix::from_usize(n)?;
        Ok(OrderedEdgeList{vertex_count: n,
                           directed: directed,
                           from: IndexVec::new(),
                           to: IndexVec::new(),
                           order: EdgeOrder::empty(n)?,
                           attributes: Attributes::new(),
                           on_failure: None})
    }

    /// Create a graph from a flat `from, to, from, to, ...` edge vector.
    ///
    /// The vertex count is `n` or one more than the largest id in `edges`,
    /// whichever is larger.
    pub fn create(edges: &[usize], n: usize, directed: bool) -> Result<Self> {
        if edges.len() % 2 != 0 {
            return Err(odd_edge_vector(edges.len()));
        }
        let n = match edges.iter().max() {
            Some(&v) => v.checked_add(1)
                .ok_or_else(|| Error::InvalidVertexId(v))?
                .max(n),
            None => n
        };
        let mut g = Self::empty(n, directed)?;
        g.add_edges(edges)?;
        Ok(g)
    }

    /// Attach a failure hook, builder-style.
    pub fn with_failure_hook(mut self, hook: FailureHook) -> Self {
        self.on_failure = Some(hook);
        self
    }

    /// Attach (or, with `None`, detach) the hook run on every error this graph
    /// is about to return.
    pub fn set_failure_hook(&mut self, hook: Option<FailureHook>) {
        self.on_failure = hook;
    }

    /// Log and hand an error to the failure hook, then pass the result on.
    pub(super) fn report<T>(&self, res: Result<T>) -> Result<T> {
        if let Err(ref e) = res {
            debug!("graph operation failed: {}", e);
            if let Some(ref hook) = self.on_failure {
                hook.call(e);
            }
        }
        res
    }

    // --------------------------------
    // Basic accessors

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.from.len()
    }

    /// Whether edges have a direction.  Fixed at creation.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Check if a vertex id is valid for this graph.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.vertex_count
    }

    /// Check if an edge id is valid for this graph.
    #[inline]
    pub fn contains_edge(&self, e: usize) -> bool {
        e < self.edge_count()
    }

    /// All vertex ids, ascending.
    #[inline]
    pub fn vertex_ids(&self) -> Range<usize> {
        0..self.vertex_count
    }

    /// All edge ids, ascending (creation order).
    #[inline]
    pub fn edge_ids(&self) -> Range<usize> {
        0..self.edge_count()
    }

    #[inline]
    pub(super) fn check_vertex(&self, v: usize) -> Result<()> {
        if self.contains_vertex(v) { Ok(()) } else { Err(Error::InvalidVertexId(v)) }
    }

    #[inline]
    pub(super) fn check_edge(&self, e: usize) -> Result<()> {
        if self.contains_edge(e) { Ok(()) } else { Err(Error::InvalidEdgeId(e)) }
    }

    /// Endpoints `(from, to)` of an edge.
    pub fn edge(&self, e: usize) -> Result<(usize, usize)> {
        self.report(self.check_edge(e).map(|_| (self.from.at(e), self.to.at(e))))
    }

    /// Source endpoint of an edge.
    pub fn edge_from(&self, e: usize) -> Result<usize> {
        self.edge(e).map(|(f, _)| f)
    }

    /// Target endpoint of an edge.
    pub fn edge_to(&self, e: usize) -> Result<usize> {
        self.edge(e).map(|(_, t)| t)
    }

    /// All edges as a flat vector.
    ///
    /// With `by_column` false the result is `from0, to0, from1, to1, ...`;
    /// with `by_column` true it is every `from` followed by every `to`.
    ///
    /// ```rust
    /// use edgegraph::OrderedEdgeList;
    ///
    /// let g = OrderedEdgeList::from_edges(&[0, 1, 2, 3], 0, true).unwrap();
    /// assert_eq!(vec![0, 1, 2, 3], g.edge_list(false));
    /// assert_eq!(vec![0, 2, 1, 3], g.edge_list(true));
    /// ```
    pub fn edge_list(&self, by_column: bool) -> Vec<usize> {
        if by_column {
            self.from.iter().chain(self.to.iter()).collect()
        } else {
            self.from.iter().interleave(self.to.iter()).collect()
        }
    }

    // --------------------------------
    // Layout access for cursors.

    /// Edge ids in `(from, to)` order.
    #[inline]
    pub fn order_by_from(&self) -> &IndexVec<Ix> {
        &self.order.by_from
    }

    /// Edge ids in `(to, from)` order.
    #[inline]
    pub fn order_by_to(&self) -> &IndexVec<Ix> {
        &self.order.by_to
    }

    /// Per-vertex offsets into `order_by_from`; length `vertex_count + 1`.
    #[inline]
    pub fn offset_out(&self) -> &IndexVec<Ix> {
        &self.order.offset_out
    }

    /// Per-vertex offsets into `order_by_to`; length `vertex_count + 1`.
    #[inline]
    pub fn offset_in(&self) -> &IndexVec<Ix> {
        &self.order.offset_in
    }

    /// Raw `from` and `to` endpoint of edge `e`, without bounds reporting.
    #[inline(always)]
    pub(super) fn endpoints(&self, e: usize) -> (usize, usize) {
        (self.from.at(e), self.to.at(e))
    }

    // --------------------------------
    // Queries

    /// Neighbors of `v`, following edges in the directions selected by
    /// `mode`.
    ///
    /// The OUT-side and IN-side neighbor lists are merged in ascending
    /// neighbor order, with the OUT entry first on ties.  Parallel edges
    /// yield repeated neighbors, and on undirected graphs a self-loop lists
    /// `v` twice.
    ///
    /// ```rust
    /// use edgegraph::{NeighborMode, OrderedEdgeList};
    ///
    /// let g = OrderedEdgeList::from_edges(&[0, 1, 1, 2], 5, false).unwrap();
    /// assert_eq!(&[0, 2], &g.neighbors(1, NeighborMode::OUT).unwrap()[..]);
    /// ```
    pub fn neighbors(&self, v: usize, mode: NeighborMode) -> Result<Neighbors> {
        let res = mode.validate()
            .and_then(|mode| self.check_vertex(v).map(|_| mode))
            .map(|mode| {
                let outs = self.order.by_from.as_slice()[self.order.out_range(v)]
                    .iter().map(|e| self.to.at(e.index()));
                let ins = self.order.by_to.as_slice()[self.order.in_range(v)]
                    .iter().map(|e| self.from.at(e.index()));
                let mode = mode.effective(self.directed);
                if mode == NeighborMode::OUT {
                    outs.collect()
                } else if mode == NeighborMode::IN {
                    ins.collect()
                } else {
                    outs.merge(ins).collect()
                }
            });
        self.report(res)
    }

    /// Edges incident to `v` in the directions selected by `mode`, in the
    /// same order [`neighbors`](#method.neighbors) lists their far endpoints.
    pub fn incident(&self, v: usize, mode: NeighborMode) -> Result<Vec<usize>> {
        let res = mode.validate()
            .and_then(|mode| self.check_vertex(v).map(|_| mode))
            .map(|mode| {
                let outs = self.order.by_from.as_slice()[self.order.out_range(v)]
                    .iter().map(|e| (self.to.at(e.index()), e.index()));
                let ins = self.order.by_to.as_slice()[self.order.in_range(v)]
                    .iter().map(|e| (self.from.at(e.index()), e.index()));
                let mode = mode.effective(self.directed);
                if mode == NeighborMode::OUT {
                    outs.map(|p| p.1).collect()
                } else if mode == NeighborMode::IN {
                    ins.map(|p| p.1).collect()
                } else {
                    outs.merge_by(ins, |a, b| a.0 <= b.0).map(|p| p.1).collect()
                }
            });
        self.report(res)
    }

    /// Number of self-loops on `v`.
    ///
    /// The slice of edges leaving `v` is sorted by target, so the loops form
    /// one run found by binary search.
    fn loop_count(&self, v: usize) -> usize {
        let run = self.out_run(v, v);
        run.end - run.start
    }

    /// Sub-range of `v`'s outgoing slice whose edges end at `w`.
    fn out_run(&self, v: usize, w: usize) -> Range<usize> {
        let slice = &self.order.by_from.as_slice()[self.order.out_range(v)];
        let lo = slice.partition_point(|e| self.to.at(e.index()) < w);
        let hi = slice.partition_point(|e| self.to.at(e.index()) <= w);
        lo..hi
    }

    /// Degree of a single vertex; see [`degree`](#method.degree).
    pub fn degree_of(&self, v: usize, mode: NeighborMode, loops: bool) -> Result<usize> {
        let res = mode.validate()
            .and_then(|mode| self.check_vertex(v).map(|_| self.degree_unchecked(v, mode, loops)));
        self.report(res)
    }

    fn degree_unchecked(&self, v: usize, mode: NeighborMode, loops: bool) -> usize {
        let out = self.order.out_range(v).len();
        let inc = self.order.in_range(v).len();
        let self_loops = if loops { 0 } else { self.loop_count(v) };
        let mode = mode.effective(self.directed);
        if mode == NeighborMode::OUT {
            out - self_loops
        } else if mode == NeighborMode::IN {
            inc - self_loops
        } else {
            out + inc - 2 * self_loops
        }
    }

    /// Degrees of several vertices, computed from the offset tables.
    ///
    /// A self-loop counts once towards OUT and once towards IN (twice towards
    /// ALL) when `loops` is true, and not at all otherwise.
    ///
    /// ```rust
    /// use edgegraph::{NeighborMode, OrderedEdgeList};
    ///
    /// let g = OrderedEdgeList::from_edges(&[0, 0, 0, 1], 2, true).unwrap();
    /// assert_eq!(vec![2, 1], g.degree(&[0, 1], NeighborMode::ALL, false).unwrap());
    /// assert_eq!(vec![4, 1], g.degree(&[0, 1], NeighborMode::ALL, true).unwrap());
    /// ```
    pub fn degree(&self, vertices: &[usize], mode: NeighborMode, loops: bool) -> Result<Vec<usize>> {
        let res = mode.validate().and_then(|mode| {
            vertices.iter()
                .map(|&v| self.check_vertex(v).map(|_| self.degree_unchecked(v, mode, loops)))
                .collect()
        });
        self.report(res)
    }

    /// Whether an edge joins `v1` to `v2`.  Directed graphs only look for
    /// `v1 -> v2`; undirected graphs accept either orientation.
    ///
    /// O(log deg) by binary search over the outgoing slices.
    pub fn are_connected(&self, v1: usize, v2: usize) -> Result<bool> {
        let res = self.check_vertex(v1)
            .and_then(|_| self.check_vertex(v2))
            .map(|_| {
                ! self.out_run(v1, v2).is_empty()
                    || (! self.directed && ! self.out_run(v2, v1).is_empty())
            });
        self.report(res)
    }

    // --------------------------------
    // Mutation

    /// Append `count` isolated vertices, numbered from the current vertex
    /// count upwards.  Vertex attribute lists grow with undefined values.
    pub fn add_vertices(&mut self, count: usize) -> Result<()> {
        let res = self.try_add_vertices(count);
        self.report(res)
    }

    fn try_add_vertices(&mut self, count: usize) -> Result<()> {
        let n = self.vertex_count.checked_add(count)
            .ok_or_else(|| Error::Failure("vertex count overflow".into()))?;
        Ix::from_usize(n)?;

        self.order.reserve_vertices(count)?;
        self.attributes.vertex.try_reserve(count)?;

        // Commit; nothing below allocates.
        self.order.add_vertices(count)?;
        self.attributes.vertex.grow(count);
        self.vertex_count = n;
        debug!("added {} vertices, now {}", count, n);
        self.check_invariants();
        Ok(())
    }

    /// Add one edge from `from` to `to`, returning its id.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<usize> {
        let id = self.edge_count();
        self.add_edges(&[from, to]).map(|_| id)
    }

    /// Add edges given as a flat `from, to, from, to, ...` vector.
    ///
    /// New edges get ids `edge_count..edge_count + edges.len() / 2` in order.
    /// Both edge orders are rebuilt, and edge attribute lists grow with
    /// undefined values.  An odd-length vector fails with
    /// `InvalidEdgeVector`; an unknown vertex id fails with
    /// `InvalidVertexId`.
    ///
    /// ```rust
    /// use edgegraph::{Error, OrderedEdgeList};
    ///
    /// let mut g = OrderedEdgeList::new(3, true).unwrap();
    /// g.add_edges(&[0, 1, 1, 2]).unwrap();
    /// assert_eq!(Err(Error::InvalidVertexId(3)), g.add_edges(&[2, 3]));
    /// assert_eq!(2, g.edge_count());
    /// ```
    pub fn add_edges(&mut self, edges: &[usize]) -> Result<()> {
        let res = self.try_add_edges(edges);
        self.report(res)
    }

    fn try_add_edges(&mut self, edges: &[usize]) -> Result<()> {
        if edges.len() % 2 != 0 {
            return Err(odd_edge_vector(edges.len()));
        }
        if let Some(&bad) = edges.iter().find(|&&v| v >= self.vertex_count) {
            return Err(Error::InvalidVertexId(bad));
        }
        let added = edges.len() / 2;
        let m = self.edge_count() + added;
        Ix::from_usize(m)?;

        let mut from = self.from.clone();
        let mut to = self.to.clone();
        from.try_reserve(added)?;
        to.try_reserve(added)?;
        for pair in edges.chunks(2) {
            from.push(pair[0])?;
            to.push(pair[1])?;
        }
        let order = EdgeOrder::build(self.vertex_count, &from, &to)?;
        self.attributes.edge.try_reserve(added)?;

        // Commit.
        self.from = from;
        self.to = to;
        self.order = order;
        self.attributes.edge.grow(added);
        debug!("added {} edges, now {}", added, m);
        self.check_invariants();
        Ok(())
    }

    /// Remove edges by id.
    ///
    /// Surviving edges keep their relative order and are renumbered densely
    /// from zero; edge attribute values follow them.  Repeated ids are
    /// removed once.  Returns the number of edges removed.
    ///
    /// ```rust
    /// use edgegraph::OrderedEdgeList;
    ///
    /// let mut g = OrderedEdgeList::from_edges(&[0, 1, 1, 2, 2, 0], 3, true).unwrap();
    /// assert_eq!(1, g.delete_edges(&[1, 1]).unwrap());
    /// assert_eq!((2, 0), g.edge(1).unwrap());
    /// ```
    pub fn delete_edges(&mut self, edge_ids: &[usize]) -> Result<usize> {
        let res = self.try_delete_edges(edge_ids);
        self.report(res)
    }

    fn try_delete_edges(&mut self, edge_ids: &[usize]) -> Result<usize> {
        let m = self.edge_count();
        let mut doomed = BitSet::with_capacity(m);
        for &e in edge_ids {
            self.check_edge(e)?;
            doomed.insert(e);
        }
        if doomed.is_empty() {
            return Ok(0);
        }

        let mut from = self.from.clone();
        let mut to = self.to.clone();
        from.retain_positions(|e| ! doomed.contains(e));
        to.retain_positions(|e| ! doomed.contains(e));
        let order = EdgeOrder::build(self.vertex_count, &from, &to)?;

        // Commit.
        self.from = from;
        self.to = to;
        self.order = order;
        self.attributes.edge.retain_positions(|e| ! doomed.contains(e));
        debug!("deleted {} edges, now {}", doomed.len(), self.edge_count());
        self.check_invariants();
        Ok(doomed.len())
    }

    /// Remove vertices by id, along with every edge touching them.
    ///
    /// Surviving vertices are renumbered densely in ascending order of their
    /// old ids, whatever the order of `vertex_ids`; surviving edges keep
    /// their relative order and have their endpoints remapped.  Vertex and
    /// edge attribute values follow their owners.  Returns the number of
    /// vertices removed.
    ///
    /// ```rust
    /// use edgegraph::OrderedEdgeList;
    ///
    /// let mut g = OrderedEdgeList::from_edges(&[0, 1, 1, 2], 5, false).unwrap();
    /// g.delete_vertices(&[0]).unwrap();
    /// assert_eq!(4, g.vertex_count());
    /// assert_eq!(1, g.edge_count());
    /// assert_eq!((0, 1), g.edge(0).unwrap());
    /// ```
    pub fn delete_vertices(&mut self, vertex_ids: &[usize]) -> Result<usize> {
        let res = self.try_delete_vertices(vertex_ids);
        self.report(res)
    }

    fn try_delete_vertices(&mut self, vertex_ids: &[usize]) -> Result<usize> {
        let n = self.vertex_count;
        let mut doomed = BitSet::with_capacity(n);
        for &v in vertex_ids {
            self.check_vertex(v)?;
            doomed.insert(v);
        }
        if doomed.is_empty() {
            return Ok(0);
        }

        // New id of every surviving vertex, by rank among survivors.
        let mut remap = Vec::new();
        remap.try_reserve_exact(n)?;
        let mut next = 0;
        for v in 0..n {
            remap.push(next);
            if ! doomed.contains(v) {
                next += 1;
            }
        }
        let new_n = next;

        let m = self.edge_count();
        let mut kept_edges = BitSet::with_capacity(m);
        let mut from = IndexVec::with_capacity(m)?;
        let mut to = IndexVec::with_capacity(m)?;
        for e in 0..m {
            let (f, t) = self.endpoints(e);
            if ! doomed.contains(f) && ! doomed.contains(t) {
                kept_edges.insert(e);
                from.push(remap[f])?;
                to.push(remap[t])?;
            }
        }
        let order = EdgeOrder::build(new_n, &from, &to)?;

        // Commit.
        self.from = from;
        self.to = to;
        self.order = order;
        self.vertex_count = new_n;
        self.attributes.vertex.retain_positions(|v| ! doomed.contains(v));
        self.attributes.edge.retain_positions(|e| kept_edges.contains(e));
        debug!("deleted {} vertices, now {} vertices and {} edges",
               doomed.len(), new_n, self.edge_count());
        self.check_invariants();
        Ok(doomed.len())
    }

    // --------------------------------
    // Invariants

    #[inline]
    fn check_invariants(&self) {
        if cfg!(feature = "check-invariants") {
            if let Err(e) = self.validate() {
                panic!("graph invariant violated after mutation: {}", e);
            }
        }
    }

    /// Check every structural invariant of the store.
    ///
    /// Returns `Error::Failure` describing the first violation found.  A
    /// graph only ever built through this crate's public API always
    /// validates.
    pub fn validate(&self) -> Result<()> {
        let n = self.vertex_count;
        let m = self.edge_count();
        let fail = |what: String| Err(Error::Failure(what));

        if self.to.len() != m || self.order.by_from.len() != m || self.order.by_to.len() != m {
            return fail(format!("column lengths differ: from={} to={} by_from={} by_to={}",
                                m, self.to.len(), self.order.by_from.len(), self.order.by_to.len()));
        }
        if let Some(v) = self.from.iter().chain(self.to.iter()).find(|&v| v >= n) {
            return fail(format!("endpoint {} out of range", v));
        }

        for (name, offsets) in [("offset_out", &self.order.offset_out), ("offset_in", &self.order.offset_in)] {
            if offsets.len() != n + 1 {
                return fail(format!("{} has length {}, expected {}", name, offsets.len(), n + 1));
            }
            if offsets.at(0) != 0 || offsets.at(n) != m {
                return fail(format!("{} must run from 0 to {}", name, m));
            }
            if offsets.iter().tuple_windows().any(|(a, b)| a > b) {
                return fail(format!("{} is not non-decreasing", name));
            }
        }

        let orders = [("order_by_from", &self.order.by_from, &self.from, &self.to, &self.order.offset_out),
                      ("order_by_to", &self.order.by_to, &self.to, &self.from, &self.order.offset_in)];
        for (name, order, major, minor, offsets) in orders {
            let mut seen = BitSet::with_capacity(m);
            for e in order.iter() {
                if e >= m || ! seen.insert(e) {
                    return fail(format!("{} is not a permutation", name));
                }
            }
            let key = |e: usize| (major.at(e), minor.at(e), e);
            if order.iter().tuple_windows().any(|(a, b)| key(a) >= key(b)) {
                return fail(format!("{} is not sorted", name));
            }
            for v in 0..n {
                if (offsets.at(v)..offsets.at(v + 1)).any(|i| major.at(order.at(i)) != v) {
                    return fail(format!("{} slice of vertex {} holds a foreign edge", name, v));
                }
            }
        }

        self.attributes.validate(n, m)
    }
}


fn odd_edge_vector(len: usize) -> Error {
    Error::InvalidEdgeVector(format!("edge vector has odd length {}", len))
}


impl<Ix: IndexType> fmt::Display for OrderedEdgeList<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "{} graph, {} vertices, {} edges: [{}]",
               if self.directed { "directed" } else { "undirected" },
               self.vertex_count, self.edge_count(),
               self.edge_ids().map(|e| format!("{}{}{}", self.from.at(e), arrow, self.to.at(e))).join(", "))
    }
}
