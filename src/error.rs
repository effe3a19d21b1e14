//! Error type shared by every fallible graph operation.
//!
//! All operations on the graph store return [`Result`](type.Result.html).
//! A failed operation leaves the graph, its index arrays and its attribute
//! lists exactly as they were before the call.

use std::collections::TryReserveError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::graph::AttributeScope;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a graph operation can fail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An allocation could not be satisfied.
    #[error("memory allocation failed: {0}")]
    OutOfMemory(#[from] TryReserveError),

    /// A vertex identifier outside `[0, vertex_count)`.
    #[error("invalid vertex id {0}")]
    InvalidVertexId(usize),

    /// An edge identifier outside `[0, edge_count)`.
    #[error("invalid edge id {0}")]
    InvalidEdgeId(usize),

    /// A malformed edge vector, e.g. a flat pair list of odd length.
    #[error("invalid edge vector: {0}")]
    InvalidEdgeVector(String),

    /// An attribute with this name is already declared in the scope.
    #[error("{scope} attribute `{name}` already exists")]
    AttributeAlreadyExists {
        /// Scope the attribute was declared in.
        scope: AttributeScope,
        /// Attribute name.
        name: String,
    },

    /// No attribute with this name is declared in the scope.
    #[error("{scope} attribute `{name}` not found")]
    AttributeNotFound {
        /// Scope that was searched.
        scope: AttributeScope,
        /// Attribute name.
        name: String,
    },

    /// A value whose kind does not match the attribute's declared kind.
    #[error("invalid value for attribute `{name}`: {reason}")]
    InvalidAttributeValue {
        /// Attribute name.
        name: String,
        /// What was wrong with the value.
        reason: String,
    },

    /// A neighbor mode with no direction bits, or with unknown bits.
    #[error("invalid neighbor mode {0:#b}")]
    InvalidMode(u8),

    /// Anything else, including index-width overflow and broken invariants.
    #[error("{0}")]
    Failure(String),
}


/// Callback invoked with every error a graph operation is about to return.
///
/// A hook is attached to one graph (see
/// [`OrderedEdgeList::set_failure_hook`](graph/struct.OrderedEdgeList.html#method.set_failure_hook));
/// there is no process-wide handler.  Clones of a graph share its hook.
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use edgegraph::{Error, FailureHook, OrderedEdgeList};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let mut g = OrderedEdgeList::new(2, true).unwrap()
///     .with_failure_hook(FailureHook::new(move |e: &Error| sink.lock().unwrap().push(e.clone())));
///
/// assert!(g.add_edges(&[0, 5]).is_err());
/// assert_eq!(&[Error::InvalidVertexId(5)], &seen.lock().unwrap()[..]);
/// ```
#[derive(Clone)]
pub struct FailureHook(Arc<dyn Fn(&Error) + Send + Sync>);

impl FailureHook {
    /// Wrap a closure as a failure hook.
    pub fn new<F>(f: F) -> Self
        where F: Fn(&Error) + Send + Sync + 'static
    {
        FailureHook(Arc::new(f))
    }

    /// Run the hook on an error.
    #[inline]
    pub fn call(&self, err: &Error) {
        (self.0)(err)
    }
}

impl fmt::Debug for FailureHook {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("FailureHook(..)")
    }
}
