//! The graph store and everything built directly on it.
//!
//! [`OrderedEdgeList`](struct.OrderedEdgeList.html) keeps a graph as a pair
//! of endpoint columns indexed by edge id.  Two permutations of the edge ids,
//! one sorted by `(from, to)` and one by `(to, from)`, together with
//! per-vertex offset tables into each, make every vertex's outgoing and
//! incoming edges a contiguous run.  Neighbor and degree queries read those
//! runs directly; mutations rebuild them wholesale.
//!
//! On top of the store sit the [cursors](iter/) and the typed
//! [attributes](attr/) that follow vertices and edges through every
//! mutation.  Code that only needs the query surface can be written against
//! the [`Graph`](trait.Graph.html) and [`GraphMut`](trait.GraphMut.html)
//! traits.
//!
//! Vertex and edge ids are `usize` at the API boundary.  The `Ix` type
//! parameter chooses how wide the stored entries are; it defaults to `u32`.

mod common;
mod index;
mod store;
mod interface;
pub mod attr;
pub mod iter;

pub use self::common::{DefaultIndexType, IndexType, NeighborMode, Neighbors};
pub use self::store::OrderedEdgeList;
pub use self::interface::{Graph, GraphMut};
pub use self::attr::{Attribute, AttributeKind, AttributeScope, AttributeTable, AttributeValue};
