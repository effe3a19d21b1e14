//! Random operation sequences, checked against a plain edge-list model
//! after every step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use edgegraph::{AttributeKind, AttributeScope, AttributeValue, NeighborMode, OrderedEdgeList};
use crate::test_util::{edge_pairs, MODES};

/// What the graph should look like: vertex labels, and edges with labels.
struct Model {
    vertices: Vec<f64>,
    edges: Vec<(usize, usize, f64)>,
    next_label: f64,
}

impl Model {
    fn label(&mut self) -> f64 {
        self.next_label += 1.0;
        self.next_label
    }
}

fn labels(g: &OrderedEdgeList, scope: AttributeScope) -> Vec<f64> {
    let table = g.attribute_table(scope);
    table.attribute("label").unwrap().values().iter()
        .map(|v| v.as_ref().and_then(AttributeValue::as_f64).expect("every member is labelled"))
        .collect()
}

fn pick_subset(rng: &mut StdRng, len: usize) -> Vec<usize> {
    let count = rng.random_range(0..=len.min(3));
    (0..count).map(|_| rng.random_range(0..len)).collect()
}

fn step(rng: &mut StdRng, g: &mut OrderedEdgeList, model: &mut Model) {
    let n = g.vertex_count();
    match rng.random_range(0..4) {
        0 => {
            let k = rng.random_range(0..3);
            g.add_vertices(k).unwrap();
            let ids: Vec<usize> = (n..n + k).collect();
            let vals: Vec<f64> = ids.iter().map(|_| model.label()).collect();
            g.set_vertex_attributes("label", &ids, &vals).unwrap();
            model.vertices.extend(vals);
        }
        1 if n > 0 => {
            let k = rng.random_range(0..4);
            let pairs: Vec<(usize, usize)> = (0..k).map(|_| (rng.random_range(0..n), rng.random_range(0..n))).collect();
            let flat: Vec<usize> = pairs.iter().flat_map(|&(f, t)| [f, t]).collect();
            let m = g.edge_count();
            g.add_edges(&flat).unwrap();
            let ids: Vec<usize> = (m..m + k).collect();
            let vals: Vec<f64> = ids.iter().map(|_| model.label()).collect();
            g.set_edge_attributes("label", &ids, &vals).unwrap();
            model.edges.extend(pairs.into_iter().zip(vals).map(|((f, t), l)| (f, t, l)));
        }
        2 if g.edge_count() > 0 => {
            let doomed = pick_subset(rng, g.edge_count());
            g.delete_edges(&doomed).unwrap();
            let mut e = 0;
            model.edges.retain(|_| { e += 1; ! doomed.contains(&(e - 1)) });
        }
        3 if n > 0 => {
            let doomed = pick_subset(rng, n);
            g.delete_vertices(&doomed).unwrap();
            let remap: Vec<usize> = (0..n).scan(0, |next, v| {
                let id = *next;
                if ! doomed.contains(&v) { *next += 1; }
                Some(id)
            }).collect();
            let mut v = 0;
            model.vertices.retain(|_| { v += 1; ! doomed.contains(&(v - 1)) });
            model.edges.retain(|&(f, t, _)| ! doomed.contains(&f) && ! doomed.contains(&t));
            for edge in model.edges.iter_mut() {
                edge.0 = remap[edge.0];
                edge.1 = remap[edge.1];
            }
        }
        _ => ()
    }
}

fn check(g: &OrderedEdgeList, model: &Model) {
    g.validate().unwrap();
    panic_unless_eq!(model.vertices.len(), g.vertex_count());
    panic_unless_eq!(model.edges.iter().map(|e| (e.0, e.1)).collect::<Vec<_>>(), edge_pairs(g));
    panic_unless_eq!(model.vertices, labels(g, AttributeScope::Vertex));
    panic_unless_eq!(model.edges.iter().map(|e| e.2).collect::<Vec<_>>(), labels(g, AttributeScope::Edge));

    for v in g.vertex_ids() {
        for &mode in MODES.iter() {
            let neis = g.neighbors(v, mode).unwrap();
            panic_unless_eq!(neis.len(), g.degree_of(v, mode, true).unwrap(),
                             "neighbor count of {} ({:?})", v, mode);
            panic_unless_eq!(neis.iter().filter(|&&w| w != v).count(), g.degree_of(v, mode, false).unwrap(),
                             "loop-free degree of {} ({:?})", v, mode);
            panic_unless_eq!(neis.len(), g.incident(v, mode).unwrap().len());
        }
        if ! g.is_directed() {
            for w in g.vertex_ids() {
                panic_unless_eq!(g.are_connected(v, w).unwrap(), g.are_connected(w, v).unwrap());
            }
        }
        let expect_out = model.edges.iter().filter(|e| e.0 == v).count();
        panic_unless_eq!(expect_out, g.degree_of(v, NeighborMode::OUT, true).unwrap() -
                         if g.is_directed() { 0 } else { model.edges.iter().filter(|e| e.1 == v).count() });
    }
}

fn run(seed: u64, directed: bool) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = OrderedEdgeList::new(0, directed).unwrap();
    g.add_attribute(AttributeScope::Vertex, "label", AttributeKind::Numeric).unwrap();
    g.add_attribute(AttributeScope::Edge, "label", AttributeKind::Numeric).unwrap();
    let mut model = Model{vertices: Vec::new(), edges: Vec::new(), next_label: 0.0};

    for _ in 0..300 {
        step(&mut rng, &mut g, &mut model);
        check(&g, &model);
    }
}


#[test]
fn test_random_directed() {
    for seed in 0..4 {
        run(seed, true);
    }
}

#[test]
fn test_random_undirected() {
    for seed in 100..104 {
        run(seed, false);
    }
}
