//! Typed attributes attached to a graph, its vertices and its edges.
//!
//! Each [scope](enum.AttributeScope.html) has its own namespace.  An
//! attribute is declared with a fixed [kind](enum.AttributeKind.html) and
//! holds one optional value per member of its scope: one for the graph
//! itself, one per vertex, or one per edge.  The store grows and compacts
//! vertex and edge lists together with the vertices and edges they describe.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use super::common::IndexType;
use super::store::OrderedEdgeList;

// ----------------------------------------------------------------
// Values

/// Independent attribute namespaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeScope {
    /// Attributes of the graph as a whole.
    Graph,
    /// Per-vertex attributes.
    Vertex,
    /// Per-edge attributes.
    Edge,
}

impl fmt::Display for AttributeScope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            AttributeScope::Graph => "graph",
            AttributeScope::Vertex => "vertex",
            AttributeScope::Edge => "edge",
        })
    }
}

/// Kind of value an attribute holds; fixed when the attribute is declared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Floating-point values.
    Numeric,
    /// Text values.
    String,
}

/// A single attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A number.
    Numeric(f64),
    /// A string.
    String(String),
}

impl AttributeValue {
    /// Kind of this value.
    #[inline]
    pub fn kind(&self) -> AttributeKind {
        match *self {
            AttributeValue::Numeric(_) => AttributeKind::Numeric,
            AttributeValue::String(_) => AttributeKind::String,
        }
    }

    /// The number held, if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            AttributeValue::Numeric(x) => Some(x),
            AttributeValue::String(_) => None,
        }
    }

    /// The text held, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            AttributeValue::String(ref s) => Some(s),
            AttributeValue::Numeric(_) => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(x: f64) -> Self { AttributeValue::Numeric(x) }
}
impl From<i32> for AttributeValue {
    fn from(x: i32) -> Self { AttributeValue::Numeric(x.into()) }
}
impl From<String> for AttributeValue {
    fn from(s: String) -> Self { AttributeValue::String(s) }
}
impl<'a> From<&'a str> for AttributeValue {
    fn from(s: &'a str) -> Self { AttributeValue::String(s.to_owned()) }
}

// ----------------------------------------------------------------
// Storage

/// One declared attribute: its kind and one slot per scope member.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    kind: AttributeKind,
    values: Vec<Option<AttributeValue>>,
}

impl Attribute {
    /// Kind every value of this attribute must have.
    #[inline]
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Per-member values, `None` where undefined.
    #[inline]
    pub fn values(&self) -> &[Option<AttributeValue>] {
        &self.values
    }
}

/// The attributes of one scope.
#[derive(Clone, Debug)]
pub struct AttributeTable {
    scope: AttributeScope,
    entries: HashMap<String, Attribute>,
}

impl AttributeTable {
    /// Create an empty table for a scope.
    pub fn new(scope: AttributeScope) -> Self {
        AttributeTable{scope: scope, entries: HashMap::new()}
    }

    fn not_found(&self, name: &str) -> Error {
        Error::AttributeNotFound{scope: self.scope, name: name.to_owned()}
    }

    /// Declare an attribute with `len` undefined values.
    pub fn declare(&mut self, name: &str, kind: AttributeKind, len: usize) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(Error::AttributeAlreadyExists{scope: self.scope, name: name.to_owned()});
        }
        let mut values = Vec::new();
        values.try_reserve_exact(len)?;
        values.resize(len, None);
        self.entries.try_reserve(1)?;
        self.entries.insert(name.to_owned(), Attribute{kind: kind, values: values});
        Ok(())
    }

    /// Drop an attribute and its values, returning them.
    pub fn remove(&mut self, name: &str) -> Result<Attribute> {
        self.entries.remove(name).ok_or_else(|| self.not_found(name))
    }

    /// Check if an attribute is declared.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Look up a declared attribute.
    pub fn attribute(&self, name: &str) -> Result<&Attribute> {
        self.entries.get(name).ok_or_else(|| self.not_found(name))
    }

    /// Names and kinds of every declared attribute, sorted by name.
    pub fn list(&self) -> Vec<(&str, AttributeKind)> {
        let mut l: Vec<_> = self.entries.iter().map(|(k, a)| (k.as_str(), a.kind)).collect();
        l.sort_unstable_by(|a, b| a.0.cmp(b.0));
        l
    }

    /// Number of declared attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no attributes are declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of attribute `name` for member `id`.
    ///
    /// An `id` past the end of the value list fails with `Error::Failure`;
    /// the store's accessors check ids first and report `InvalidVertexId`
    /// or `InvalidEdgeId` instead.
    pub fn get(&self, name: &str, id: usize) -> Result<Option<&AttributeValue>> {
        let a = self.attribute(name)?;
        a.values.get(id)
            .map(Option::as_ref)
            .ok_or_else(|| self.out_of_range(name, id, a.values.len()))
    }

    /// Values of attribute `name` for several members.  Fails like `get` if
    /// any id is out of range.
    pub fn get_many(&self, name: &str, ids: &[usize]) -> Result<Vec<Option<&AttributeValue>>> {
        let a = self.attribute(name)?;
        ids.iter()
            .map(|&id| a.values.get(id)
                 .map(Option::as_ref)
                 .ok_or_else(|| self.out_of_range(name, id, a.values.len())))
            .collect()
    }

    fn out_of_range(&self, name: &str, id: usize, len: usize) -> Error {
        Error::Failure(format!("{} attribute `{}` has {} values, no slot {}", self.scope, name, len, id))
    }

    /// Set attribute `name` for several members at once.  Every value is
    /// checked before any is written.
    pub fn set_many(&mut self, name: &str, ids: &[usize], values: Vec<AttributeValue>) -> Result<()> {
        let scope = self.scope;
        let attr = self.entries.get_mut(name)
            .ok_or_else(|| Error::AttributeNotFound{scope: scope, name: name.to_owned()})?;
        if ids.len() != values.len() {
            return Err(Error::InvalidAttributeValue{
                name: name.to_owned(),
                reason: format!("{} ids but {} values", ids.len(), values.len())});
        }
        if let Some(&id) = ids.iter().find(|&&id| id >= attr.values.len()) {
            return Err(Error::Failure(format!("{} attribute `{}` has {} values, no slot {}",
                                              scope, name, attr.values.len(), id)));
        }
        if let Some(bad) = values.iter().find(|v| v.kind() != attr.kind) {
            return Err(Error::InvalidAttributeValue{
                name: name.to_owned(),
                reason: format!("expected {:?} value, got {:?}", attr.kind, bad.kind())});
        }
        for (&id, value) in ids.iter().zip(values) {
            attr.values[id] = Some(value);
        }
        Ok(())
    }

    /// Reserve room to grow every value list by `additional`.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        for a in self.entries.values_mut() {
            a.values.try_reserve(additional)?;
        }
        Ok(())
    }

    /// Append `count` undefined values to every list.
    pub fn grow(&mut self, count: usize) {
        for a in self.entries.values_mut() {
            let len = a.values.len() + count;
            a.values.resize(len, None);
        }
    }

    /// Keep only the values whose position satisfies `keep`, in every list.
    pub fn retain_positions<F>(&mut self, keep: F)
        where F: Fn(usize) -> bool
    {
        for a in self.entries.values_mut() {
            let mut pos = 0;
            a.values.retain(|_| {
                let k = keep(pos);
                pos += 1;
                k
            });
        }
    }

    fn validate(&self, len: usize) -> Result<()> {
        match self.entries.iter().find(|(_, a)| a.values.len() != len) {
            Some((name, a)) => Err(Error::Failure(format!("{} attribute `{}` has {} values, expected {}",
                                                         self.scope, name, a.values.len(), len))),
            None => Ok(())
        }
    }
}


/// The three attribute tables of a graph.
#[derive(Clone, Debug)]
pub struct Attributes {
    pub(super) graph: AttributeTable,
    pub(super) vertex: AttributeTable,
    pub(super) edge: AttributeTable,
}

impl Attributes {
    /// Create empty tables for all three scopes.
    pub fn new() -> Self {
        Attributes{graph: AttributeTable::new(AttributeScope::Graph),
                   vertex: AttributeTable::new(AttributeScope::Vertex),
                   edge: AttributeTable::new(AttributeScope::Edge)}
    }

    /// Table for a scope.
    pub fn scope(&self, scope: AttributeScope) -> &AttributeTable {
        match scope {
            AttributeScope::Graph => &self.graph,
            AttributeScope::Vertex => &self.vertex,
            AttributeScope::Edge => &self.edge,
        }
    }

    fn scope_mut(&mut self, scope: AttributeScope) -> &mut AttributeTable {
        match scope {
            AttributeScope::Graph => &mut self.graph,
            AttributeScope::Vertex => &mut self.vertex,
            AttributeScope::Edge => &mut self.edge,
        }
    }

    /// Check every value list against the cardinality of its scope.
    pub fn validate(&self, vertex_count: usize, edge_count: usize) -> Result<()> {
        self.graph.validate(1)?;
        self.vertex.validate(vertex_count)?;
        self.edge.validate(edge_count)
    }
}

impl Default for Attributes {
    #[inline]
    fn default() -> Self {
        Attributes::new()
    }
}


// ----------------------------------------------------------------
// Store accessors

impl<Ix: IndexType> OrderedEdgeList<Ix> {
    /// Number of members in a scope: 1, the vertex count, or the edge count.
    fn scope_len(&self, scope: AttributeScope) -> usize {
        match scope {
            AttributeScope::Graph => 1,
            AttributeScope::Vertex => self.vertex_count(),
            AttributeScope::Edge => self.edge_count(),
        }
    }

    fn check_member(&self, scope: AttributeScope, id: usize) -> Result<()> {
        match scope {
            AttributeScope::Graph => Ok(()),
            AttributeScope::Vertex => self.check_vertex(id),
            AttributeScope::Edge => self.check_edge(id),
        }
    }

    /// Declare an attribute in `scope`, with every value undefined.
    ///
    /// ```rust
    /// use edgegraph::{AttributeKind, AttributeScope, OrderedEdgeList};
    ///
    /// let mut g = OrderedEdgeList::new(3, false).unwrap();
    /// g.add_attribute(AttributeScope::Vertex, "w", AttributeKind::Numeric).unwrap();
    /// assert!(g.has_attribute(AttributeScope::Vertex, "w"));
    /// assert!(! g.has_attribute(AttributeScope::Edge, "w"));
    /// assert_eq!(None, g.vertex_attribute("w", 2).unwrap());
    /// ```
    pub fn add_attribute(&mut self, scope: AttributeScope, name: &str, kind: AttributeKind) -> Result<()> {
        let len = self.scope_len(scope);
        let res = self.attributes.scope_mut(scope).declare(name, kind, len);
        self.report(res)
    }

    /// Remove an attribute and all its values.
    pub fn remove_attribute(&mut self, scope: AttributeScope, name: &str) -> Result<()> {
        let res = self.attributes.scope_mut(scope).remove(name).map(|_| ());
        self.report(res)
    }

    /// Check if an attribute is declared in `scope`.
    #[inline]
    pub fn has_attribute(&self, scope: AttributeScope, name: &str) -> bool {
        self.attributes.scope(scope).contains(name)
    }

    /// Declared kind of an attribute.
    pub fn attribute_kind(&self, scope: AttributeScope, name: &str) -> Result<AttributeKind> {
        self.report(self.attributes.scope(scope).attribute(name).map(|a| a.kind()))
    }

    /// Names and kinds of the attributes declared in `scope`, sorted by name.
    pub fn list_attributes(&self, scope: AttributeScope) -> Vec<(&str, AttributeKind)> {
        self.attributes.scope(scope).list()
    }

    /// The attribute table of a scope, for bulk read access.
    pub fn attribute_table(&self, scope: AttributeScope) -> &AttributeTable {
        self.attributes.scope(scope)
    }

    /// Value of an attribute together with its declared kind, so an
    /// undefined slot still reports what it would hold.  `id` is ignored for
    /// the graph scope.
    ///
    /// ```rust
    /// use edgegraph::{AttributeKind, AttributeScope, OrderedEdgeList};
    ///
    /// let mut g = OrderedEdgeList::new(2, true).unwrap();
    /// g.add_attribute(AttributeScope::Vertex, "w", AttributeKind::Numeric).unwrap();
    /// assert_eq!((None, AttributeKind::Numeric), g.attribute_value(AttributeScope::Vertex, "w", 1).unwrap());
    /// ```
    pub fn attribute_value(&self, scope: AttributeScope, name: &str, id: usize)
                           -> Result<(Option<&AttributeValue>, AttributeKind)> {
        let id = if scope == AttributeScope::Graph { 0 } else { id };
        let kind = self.attribute_kind(scope, name)?;
        self.get_scoped(scope, name, id).map(|v| (v, kind))
    }

    fn get_scoped(&self, scope: AttributeScope, name: &str, id: usize) -> Result<Option<&AttributeValue>> {
        let table = self.attributes.scope(scope);
        let res = table.attribute(name)
            .and_then(|_| self.check_member(scope, id))
            .and_then(|_| table.get(name, id));
        self.report(res)
    }

    fn get_scoped_many(&self, scope: AttributeScope, name: &str, ids: &[usize])
                       -> Result<Vec<Option<&AttributeValue>>> {
        let table = self.attributes.scope(scope);
        let res = table.attribute(name)
            .and_then(|_| ids.iter().try_for_each(|&id| self.check_member(scope, id)))
            .and_then(|_| table.get_many(name, ids));
        self.report(res)
    }

    fn set_scoped(&mut self, scope: AttributeScope, name: &str, ids: &[usize], values: Vec<AttributeValue>)
                  -> Result<()> {
        let res = self.attributes.scope(scope).attribute(name)
            .and_then(|_| ids.iter().try_for_each(|&id| self.check_member(scope, id)));
        let res = match res {
            Ok(()) => self.attributes.scope_mut(scope).set_many(name, ids, values),
            Err(e) => Err(e)
        };
        self.report(res)
    }

    /// Value of a graph attribute; `None` if never set.  See
    /// [`attribute_value`](#method.attribute_value) for the declared kind.
    pub fn graph_attribute(&self, name: &str) -> Result<Option<&AttributeValue>> {
        self.get_scoped(AttributeScope::Graph, name, 0)
    }

    /// Set a graph attribute.  The value's kind must match the declaration.
    pub fn set_graph_attribute<V: Into<AttributeValue>>(&mut self, name: &str, value: V) -> Result<()> {
        self.set_scoped(AttributeScope::Graph, name, &[0], vec![value.into()])
    }

    /// Value of a vertex attribute for vertex `v`; `None` if never set.
    pub fn vertex_attribute(&self, name: &str, v: usize) -> Result<Option<&AttributeValue>> {
        self.get_scoped(AttributeScope::Vertex, name, v)
    }

    /// Set a vertex attribute for vertex `v`.
    ///
    /// ```rust
    /// use edgegraph::{AttributeKind, AttributeScope, AttributeValue, Error, OrderedEdgeList};
    ///
    /// let mut g = OrderedEdgeList::new(2, true).unwrap();
    /// g.add_attribute(AttributeScope::Vertex, "label", AttributeKind::String).unwrap();
    /// g.set_vertex_attribute("label", 1, "b").unwrap();
    /// assert_eq!(Some(&AttributeValue::from("b")), g.vertex_attribute("label", 1).unwrap());
    ///
    /// assert!(matches!(g.set_vertex_attribute("label", 0, 1.5),
    ///                  Err(Error::InvalidAttributeValue{..})));
    /// ```
    pub fn set_vertex_attribute<V: Into<AttributeValue>>(&mut self, name: &str, v: usize, value: V) -> Result<()> {
        self.set_scoped(AttributeScope::Vertex, name, &[v], vec![value.into()])
    }

    /// Values of a vertex attribute for several vertices.
    pub fn vertex_attributes(&self, name: &str, vertices: &[usize]) -> Result<Vec<Option<&AttributeValue>>> {
        self.get_scoped_many(AttributeScope::Vertex, name, vertices)
    }

    /// Set a vertex attribute for several vertices; `values[i]` goes to
    /// `vertices[i]`.  Nothing is written unless every id and value is valid.
    pub fn set_vertex_attributes<V>(&mut self, name: &str, vertices: &[usize], values: &[V]) -> Result<()>
        where V: Clone + Into<AttributeValue>
    {
        let values = values.iter().cloned().map(Into::into).collect();
        self.set_scoped(AttributeScope::Vertex, name, vertices, values)
    }

    /// Value of an edge attribute for edge `e`; `None` if never set.
    pub fn edge_attribute(&self, name: &str, e: usize) -> Result<Option<&AttributeValue>> {
        self.get_scoped(AttributeScope::Edge, name, e)
    }

    /// Set an edge attribute for edge `e`.
    pub fn set_edge_attribute<V: Into<AttributeValue>>(&mut self, name: &str, e: usize, value: V) -> Result<()> {
        self.set_scoped(AttributeScope::Edge, name, &[e], vec![value.into()])
    }

    /// Values of an edge attribute for several edges.
    pub fn edge_attributes(&self, name: &str, edges: &[usize]) -> Result<Vec<Option<&AttributeValue>>> {
        self.get_scoped_many(AttributeScope::Edge, name, edges)
    }

    /// Set an edge attribute for several edges; `values[i]` goes to
    /// `edges[i]`.  Nothing is written unless every id and value is valid.
    pub fn set_edge_attributes<V>(&mut self, name: &str, edges: &[usize], values: &[V]) -> Result<()>
        where V: Clone + Into<AttributeValue>
    {
        let values = values.iter().cloned().map(Into::into).collect();
        self.set_scoped(AttributeScope::Edge, name, edges, values)
    }
}
