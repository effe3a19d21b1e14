//! In-memory graph store built on sorted edge arrays.
//!
//! A graph is stored as two parallel endpoint columns (`from`, `to`) indexed
//! by edge id, plus two permutations of the edge ids -- one sorted by
//! `(from, to)` and one by `(to, from)` -- and a per-vertex offset table
//! into each permutation.  This gives O(|V| + |E|) space and lets neighbor
//! and degree queries read a contiguous slice instead of scanning.
//!
//! On top of the store sit a family of [cursors](graph/iter/index.html) that
//! walk vertices, edges and neighborhoods without copying, and an attribute
//! layer that keeps typed per-graph, per-vertex and per-edge values in step
//! with every structural mutation.
//!
//! ```rust
//! use edgegraph::{NeighborMode, OrderedEdgeList};
//!
//! let mut g = OrderedEdgeList::new(3, true).unwrap();
//! g.add_edges(&[0, 1, 1, 2, 2, 0]).unwrap();
//!
//! assert_eq!(&[2], &g.neighbors(1, NeighborMode::OUT).unwrap()[..]);
//! assert_eq!(&[0], &g.neighbors(1, NeighborMode::IN).unwrap()[..]);
//! assert_eq!(&[0, 2], &g.neighbors(1, NeighborMode::ALL).unwrap()[..]);
//! ```
#![warn(missing_docs)]

extern crate bit_set;
extern crate itertools;
extern crate num_traits;
extern crate smallvec;

#[macro_use]
extern crate bitflags;

#[macro_use]
extern crate log;

#[macro_use]
pub mod util;

mod error;
pub mod graph;

pub use error::{Error, FailureHook, Result};
pub use graph::{Graph, GraphMut, NeighborMode, OrderedEdgeList};
pub use graph::{AttributeKind, AttributeScope, AttributeValue};
pub use graph::iter::{Cursor, GraphIter};
