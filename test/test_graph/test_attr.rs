//! Graph, vertex and edge attributes, and how they follow mutations.

use edgegraph::{AttributeKind, AttributeScope, AttributeValue, Error, OrderedEdgeList};
use crate::test_util::graph_of;

fn numbers(vals: Vec<Option<&AttributeValue>>) -> Vec<Option<f64>> {
    vals.into_iter().map(|v| v.and_then(AttributeValue::as_f64)).collect()
}


#[test]
fn test_lifecycle() {
    let mut g = OrderedEdgeList::new(4, true).unwrap();
    g.add_attribute(AttributeScope::Vertex, "w", AttributeKind::Numeric).unwrap();
    assert!(g.has_attribute(AttributeScope::Vertex, "w"));
    panic_unless_eq!(vec![("w", AttributeKind::Numeric)], g.list_attributes(AttributeScope::Vertex));
    panic_unless_eq!(AttributeKind::Numeric, g.attribute_kind(AttributeScope::Vertex, "w").unwrap());

    g.remove_attribute(AttributeScope::Vertex, "w").unwrap();
    assert!(! g.has_attribute(AttributeScope::Vertex, "w"));
    assert!(g.list_attributes(AttributeScope::Vertex).is_empty());
    panic_unless_eq!(Err(Error::AttributeNotFound{scope: AttributeScope::Vertex, name: "w".into()}),
                     g.remove_attribute(AttributeScope::Vertex, "w"));
}

#[test]
fn test_scopes_are_independent() {
    let mut g = graph_of(2, false, &[(0, 1)]);
    g.add_attribute(AttributeScope::Graph, "name", AttributeKind::String).unwrap();
    g.add_attribute(AttributeScope::Vertex, "name", AttributeKind::String).unwrap();
    g.add_attribute(AttributeScope::Edge, "name", AttributeKind::Numeric).unwrap();
    panic_unless_eq!(Err(Error::AttributeAlreadyExists{scope: AttributeScope::Edge, name: "name".into()}),
                     g.add_attribute(AttributeScope::Edge, "name", AttributeKind::String));

    g.set_graph_attribute("name", "ring").unwrap();
    g.set_vertex_attribute("name", 1, "b").unwrap();
    g.set_edge_attribute("name", 0, 2.5).unwrap();

    panic_unless_eq!(Some("ring"), g.graph_attribute("name").unwrap().and_then(AttributeValue::as_str));
    panic_unless_eq!(None, g.vertex_attribute("name", 0).unwrap());
    panic_unless_eq!(Some("b"), g.vertex_attribute("name", 1).unwrap().and_then(AttributeValue::as_str));
    panic_unless_eq!(Some(2.5), g.edge_attribute("name", 0).unwrap().and_then(AttributeValue::as_f64));

    g.remove_attribute(AttributeScope::Vertex, "name").unwrap();
    assert!(g.has_attribute(AttributeScope::Graph, "name"));
    assert!(g.has_attribute(AttributeScope::Edge, "name"));
}

#[test]
fn test_access_errors() {
    let mut g = graph_of(2, true, &[(0, 1)]);
    g.add_attribute(AttributeScope::Vertex, "w", AttributeKind::Numeric).unwrap();
    g.add_attribute(AttributeScope::Edge, "tag", AttributeKind::String).unwrap();

    panic_unless_eq!(Err(Error::InvalidVertexId(2)), g.vertex_attribute("w", 2));
    panic_unless_eq!(Err(Error::InvalidEdgeId(1)), g.set_edge_attribute("tag", 1, "x"));
    assert!(matches!(g.vertex_attribute("nope", 0), Err(Error::AttributeNotFound{..})));
    assert!(matches!(g.graph_attribute("w"), Err(Error::AttributeNotFound{scope: AttributeScope::Graph, ..})));
    assert!(matches!(g.set_vertex_attribute("w", 0, "heavy"), Err(Error::InvalidAttributeValue{..})));
    assert!(matches!(g.set_edge_attribute("tag", 0, 1), Err(Error::InvalidAttributeValue{..})));
    panic_unless_eq!(None, g.vertex_attribute("w", 0).unwrap());
}

#[test]
fn test_vector_access() {
    let mut g = OrderedEdgeList::new(4, false).unwrap();
    g.add_attribute(AttributeScope::Vertex, "x", AttributeKind::Numeric).unwrap();
    g.set_vertex_attributes("x", &[3, 1], &[30.0, 10.0]).unwrap();
    panic_unless_eq!(vec![None, Some(10.0), None, Some(30.0)],
                     numbers(g.vertex_attributes("x", &[0, 1, 2, 3]).unwrap()));

    // One bad id or a length mismatch writes nothing.
    panic_unless_eq!(Err(Error::InvalidVertexId(4)), g.set_vertex_attributes("x", &[0, 4], &[1.0, 2.0]));
    assert!(matches!(g.set_vertex_attributes("x", &[0, 2], &[1.0]), Err(Error::InvalidAttributeValue{..})));
    panic_unless_eq!(vec![None, None], numbers(g.vertex_attributes("x", &[0, 2]).unwrap()));
    panic_unless_eq!(Err(Error::InvalidVertexId(9)), g.vertex_attributes("x", &[1, 9]));
}

#[test]
fn test_values_follow_mutations() {
    let mut g = graph_of(6, true, &[(0, 5), (1, 2), (3, 4), (5, 1), (2, 3)]);
    g.add_attribute(AttributeScope::Graph, "title", AttributeKind::String).unwrap();
    g.add_attribute(AttributeScope::Vertex, "name", AttributeKind::String).unwrap();
    g.add_attribute(AttributeScope::Edge, "w", AttributeKind::Numeric).unwrap();
    g.set_graph_attribute("title", "demo").unwrap();
    g.set_vertex_attributes("name", &[0, 1, 2, 3, 4, 5], &["v0", "v1", "v2", "v3", "v4", "v5"]).unwrap();
    g.set_edge_attributes("w", &[0, 1, 2, 3, 4], &[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();

    g.delete_vertices(&[4, 0]).unwrap();
    let names: Vec<_> = g.vertex_ids()
        .map(|v| g.vertex_attribute("name", v).unwrap().and_then(AttributeValue::as_str).unwrap().to_owned())
        .collect();
    panic_unless_eq!(vec!["v1", "v2", "v3", "v5"], names);
    panic_unless_eq!(vec![Some(1.0), Some(3.0), Some(4.0)],
                     numbers(g.edge_attributes("w", &[0, 1, 2]).unwrap()));

    g.delete_edges(&[1]).unwrap();
    panic_unless_eq!(vec![Some(1.0), Some(4.0)], numbers(g.edge_attributes("w", &[0, 1]).unwrap()));

    g.add_vertices(1).unwrap();
    g.add_edges(&[4, 0]).unwrap();
    panic_unless_eq!(None, g.vertex_attribute("name", 4).unwrap());
    panic_unless_eq!(None, g.edge_attribute("w", 2).unwrap());
    panic_unless_eq!(Some(&AttributeValue::from("demo")), g.graph_attribute("title").unwrap());
    g.validate().unwrap();
}

#[test]
fn test_failed_mutation_keeps_attributes() {
    let mut g = graph_of(3, true, &[(0, 1), (1, 2)]);
    g.add_attribute(AttributeScope::Edge, "w", AttributeKind::Numeric).unwrap();
    g.set_edge_attributes("w", &[0, 1], &[5.0, 6.0]).unwrap();

    assert!(g.delete_edges(&[0, 2]).is_err());
    assert!(g.add_edges(&[0, 3]).is_err());
    panic_unless_eq!(vec![Some(5.0), Some(6.0)], numbers(g.edge_attributes("w", &[0, 1]).unwrap()));
    g.validate().unwrap();
}

#[test]
fn test_copy_has_own_attributes() {
    let mut g = OrderedEdgeList::new(1, true).unwrap();
    g.add_attribute(AttributeScope::Vertex, "x", AttributeKind::Numeric).unwrap();
    g.set_vertex_attribute("x", 0, 1.0).unwrap();

    let h = g.clone();
    g.set_vertex_attribute("x", 0, 2.0).unwrap();
    g.remove_attribute(AttributeScope::Vertex, "x").unwrap();

    panic_unless_eq!(Some(1.0), h.vertex_attribute("x", 0).unwrap().and_then(AttributeValue::as_f64));
    panic_unless_eq!(1, h.attribute_table(AttributeScope::Vertex).len());
}

#[test]
fn test_table_rejects_out_of_range_slots() {
    let mut g = OrderedEdgeList::new(2, true).unwrap();
    g.add_attribute(AttributeScope::Vertex, "w", AttributeKind::Numeric).unwrap();
    g.set_vertex_attribute("w", 1, 3.0).unwrap();

    let table = g.attribute_table(AttributeScope::Vertex);
    assert!(matches!(table.get("w", 5), Err(Error::Failure(_))));
    assert!(matches!(table.get_many("w", &[1, 2]), Err(Error::Failure(_))));
    assert!(matches!(table.get("nope", 0), Err(Error::AttributeNotFound{..})));
    panic_unless_eq!(Some(3.0), table.get("w", 1).unwrap().and_then(AttributeValue::as_f64));

    let mut t = table.clone();
    assert!(matches!(t.set_many("w", &[0, 2], vec![1.0f64.into(), 2.0f64.into()]), Err(Error::Failure(_))));
    panic_unless_eq!(None, t.get("w", 0).unwrap());
}

#[test]
fn test_value_with_declared_kind() {
    let mut g = graph_of(2, false, &[(0, 1)]);
    g.add_attribute(AttributeScope::Graph, "title", AttributeKind::String).unwrap();
    g.add_attribute(AttributeScope::Edge, "w", AttributeKind::Numeric).unwrap();

    panic_unless_eq!((None, AttributeKind::String), g.attribute_value(AttributeScope::Graph, "title", 7).unwrap());
    g.set_edge_attribute("w", 0, 0.5).unwrap();
    panic_unless_eq!((Some(&AttributeValue::Numeric(0.5)), AttributeKind::Numeric),
                     g.attribute_value(AttributeScope::Edge, "w", 0).unwrap());
    panic_unless_eq!(Err(Error::InvalidEdgeId(1)), g.attribute_value(AttributeScope::Edge, "w", 1));
    assert!(matches!(g.attribute_value(AttributeScope::Vertex, "w", 0), Err(Error::AttributeNotFound{..})));
}
