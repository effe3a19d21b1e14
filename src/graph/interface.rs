//! Interfaces (traits) for graph implementations.
//!
//! Algorithms written against [`Graph`](trait.Graph.html) and
//! [`GraphMut`](trait.GraphMut.html) only see the query and mutation
//! surface, not the layout of the store behind it.

use std::ops::Range;

use crate::error::Result;
use super::common::{IndexType, NeighborMode, Neighbors};
use super::store::OrderedEdgeList;

/// Read-only query surface of a graph.
pub trait Graph {
    /// Count the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Count the number of edges in the graph.
    fn edge_count(&self) -> usize;

    /// Whether edges have a direction.
    fn is_directed(&self) -> bool;

    /// Fetch the endpoints `(from, to)` of an edge.
    fn edge(&self, e: usize) -> Result<(usize, usize)>;

    /// Neighbors of `v` in the directions `mode` selects.
    fn neighbors(&self, v: usize, mode: NeighborMode) -> Result<Neighbors>;

    /// Edges incident to `v` in the directions `mode` selects.
    fn incident(&self, v: usize, mode: NeighborMode) -> Result<Vec<usize>>;

    /// Degrees of several vertices.
    fn degree(&self, vertices: &[usize], mode: NeighborMode, loops: bool) -> Result<Vec<usize>>;

    /// Whether an edge joins `v1` to `v2`.
    fn are_connected(&self, v1: usize, v2: usize) -> Result<bool>;

    // --------------------------------

    /// Fetch an iterator over the IDs of all vertices in the graph.
    fn vertex_ids(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Fetch an iterator over the IDs of all edges in the graph.
    fn edge_ids(&self) -> Range<usize> {
        0..self.edge_count()
    }

    /// Check if a vertex ID is valid for this graph.
    fn contains_vertex(&self, v: usize) -> bool {
        v < self.vertex_count()
    }
}

/// Structural mutation of a graph.
///
/// Implementations must leave the graph unchanged when an operation fails.
pub trait GraphMut: Graph {
    /// Append `count` isolated vertices.
    fn add_vertices(&mut self, count: usize) -> Result<()>;

    /// Add edges given as a flat `from, to, ...` vector.
    fn add_edges(&mut self, edges: &[usize]) -> Result<()>;

    /// Remove edges by id, returning how many were removed.
    fn delete_edges(&mut self, edge_ids: &[usize]) -> Result<usize>;

    /// Remove vertices and every edge touching them, returning how many
    /// vertices were removed.
    fn delete_vertices(&mut self, vertex_ids: &[usize]) -> Result<usize>;

    /// Add a single edge, returning its id.
    fn add_edge(&mut self, from: usize, to: usize) -> Result<usize> {
        let id = self.edge_count();
        self.add_edges(&[from, to]).map(|_| id)
    }
}


impl<Ix: IndexType> Graph for OrderedEdgeList<Ix> {
    #[inline]
    fn vertex_count(&self) -> usize { OrderedEdgeList::vertex_count(self) }
    #[inline]
    fn edge_count(&self) -> usize { OrderedEdgeList::edge_count(self) }
    #[inline]
    fn is_directed(&self) -> bool { OrderedEdgeList::is_directed(self) }

    fn edge(&self, e: usize) -> Result<(usize, usize)> {
        OrderedEdgeList::edge(self, e)
    }
    fn neighbors(&self, v: usize, mode: NeighborMode) -> Result<Neighbors> {
        OrderedEdgeList::neighbors(self, v, mode)
    }
    fn incident(&self, v: usize, mode: NeighborMode) -> Result<Vec<usize>> {
        OrderedEdgeList::incident(self, v, mode)
    }
    fn degree(&self, vertices: &[usize], mode: NeighborMode, loops: bool) -> Result<Vec<usize>> {
        OrderedEdgeList::degree(self, vertices, mode, loops)
    }
    fn are_connected(&self, v1: usize, v2: usize) -> Result<bool> {
        OrderedEdgeList::are_connected(self, v1, v2)
    }
}

impl<Ix: IndexType> GraphMut for OrderedEdgeList<Ix> {
    fn add_vertices(&mut self, count: usize) -> Result<()> {
        OrderedEdgeList::add_vertices(self, count)
    }
    fn add_edges(&mut self, edges: &[usize]) -> Result<()> {
        OrderedEdgeList::add_edges(self, edges)
    }
    fn delete_edges(&mut self, edge_ids: &[usize]) -> Result<usize> {
        OrderedEdgeList::delete_edges(self, edge_ids)
    }
    fn delete_vertices(&mut self, vertex_ids: &[usize]) -> Result<usize> {
        OrderedEdgeList::delete_vertices(self, vertex_ids)
    }
}
