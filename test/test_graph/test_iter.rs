//! The cursor protocol and its five variants.

use edgegraph::{Cursor, Error, GraphIter, NeighborMode, OrderedEdgeList};
use crate::test_util::{graph_of, MODES};

/// Read `get` at every position from the cursor's current one to `End`.
fn walk<C, F>(c: &mut C, get: F) -> Vec<usize>
    where C: Cursor, F: Fn(&C) -> Option<usize>
{
    let mut out = Vec::new();
    while ! c.end() {
        out.push(get(c).expect("accessor should be defined before End"));
        c.next();
    }
    out
}


#[test]
fn test_vertex_ids_exhaustion() {
    let g = OrderedEdgeList::new(5, true).unwrap();
    let mut it = g.iter_vertices();
    for v in 0..5 {
        assert!(! it.end(), "cursor ended after {} steps", v);
        panic_unless_eq!(Some(v), it.vertex());
        it.next();
    }
    assert!(it.end());
    panic_unless_eq!(None, it.vertex());

    it.reset();
    panic_unless_eq!(vec![0, 1, 2, 3, 4], walk(&mut it, |c| c.vertex()));
}

#[test]
fn test_edge_orders() {
    let g = graph_of(3, true, &[(2, 0), (0, 1), (1, 2), (0, 1), (0, 0)]);

    let mut ids = g.iter_edges();
    panic_unless_eq!(vec![0, 1, 2, 3, 4], walk(&mut ids, |c| c.edge()));
    ids.reset();
    panic_unless_eq!(vec![2, 0, 1, 0, 0], walk(&mut ids, |c| c.edge_from()));

    let mut sorted = g.iter_edges_from_order();
    panic_unless_eq!(vec![4, 1, 3, 2, 0], walk(&mut sorted, |c| c.edge()));
    sorted.reset();
    panic_unless_eq!(vec![0, 0, 0, 1, 2], walk(&mut sorted, |c| c.edge_from()));
    sorted.reset();
    panic_unless_eq!(vec![0, 1, 1, 2, 0], walk(&mut sorted, |c| c.edge_to()));
}

#[test]
fn test_neighbor_cursors_match_queries() {
    let graphs = [graph_of(4, true, &[(0, 1), (1, 1), (2, 1), (1, 0), (1, 3), (3, 1), (0, 1)]),
                  graph_of(4, false, &[(0, 1), (1, 1), (2, 1), (1, 0), (3, 3)])];
    for g in graphs.iter() {
        for v in g.vertex_ids() {
            for &mode in MODES.iter() {
                let mut vn = g.iter_vertex_neighbors(v, mode).unwrap();
                panic_unless_eq!(g.neighbors(v, mode).unwrap().to_vec(), walk(&mut vn, |c| c.neighbor()),
                                 "vertex {} mode {:?}", v, mode);

                let mut en = g.iter_edge_neighbors(v, mode).unwrap();
                panic_unless_eq!(g.incident(v, mode).unwrap(), walk(&mut en, |c| c.edge()),
                                 "vertex {} mode {:?}", v, mode);
            }
        }
    }
}

#[test]
fn test_edge_neighbors_endpoints() {
    let g = graph_of(3, true, &[(0, 1), (2, 0)]);
    let mut it = g.iter_edge_neighbors(0, NeighborMode::ALL).unwrap();

    panic_unless_eq!(Some(0), it.edge());
    panic_unless_eq!((Some(0), Some(1)), (it.edge_from(), it.edge_to()));
    panic_unless_eq!(Some(1), it.neighbor());
    it.next();
    panic_unless_eq!(Some(1), it.edge());
    panic_unless_eq!((Some(2), Some(0)), (it.edge_from(), it.edge_to()));
    panic_unless_eq!(Some(2), it.neighbor());
    it.next();
    assert!(it.end());
    panic_unless_eq!(None, it.neighbor());
}

#[test]
fn test_prev_from_end_and_reset() {
    let g = graph_of(4, false, &[(0, 3), (0, 1), (2, 0)]);
    let mut it = g.iter_vertex_neighbors(0, NeighborMode::OUT).unwrap();
    let forward = walk(&mut it, |c| c.vertex());
    panic_unless_eq!(vec![1, 2, 3], forward);

    let mut backward = Vec::new();
    for _ in 0..forward.len() {
        it.prev();
        backward.push(it.neighbor().unwrap());
    }
    panic_unless_eq!(vec![3, 2, 1], backward);

    it.next();
    it.reset();
    panic_unless_eq!(Some(1), it.neighbor());
}

#[test]
fn test_retarget_neighbors() {
    let g = graph_of(3, true, &[(0, 1), (2, 1), (1, 0)]);
    let mut it = g.iter_edge_neighbors(1, NeighborMode::IN).unwrap();
    panic_unless_eq!(vec![0, 2], walk(&mut it, |c| c.neighbor()));

    it.retarget(0, NeighborMode::OUT).unwrap();
    panic_unless_eq!(0, it.center());
    panic_unless_eq!(NeighborMode::OUT, it.mode());
    panic_unless_eq!(vec![1], walk(&mut it, |c| c.neighbor()));

    panic_unless_eq!(Err(Error::InvalidMode(0)), it.retarget(0, NeighborMode::empty()));
    panic_unless_eq!(NeighborMode::OUT, it.mode());
}

#[test]
fn test_invalid_construction() {
    let g = graph_of(2, true, &[(0, 1)]);
    assert!(matches!(g.iter_vertex_neighbors(2, NeighborMode::ALL), Err(Error::InvalidVertexId(2))));
    assert!(matches!(g.iter_edge_neighbors(0, NeighborMode::empty()), Err(Error::InvalidMode(0))));
}

#[test]
fn test_graph_iter_dispatch() {
    let g = graph_of(3, true, &[(1, 2), (0, 1)]);
    let mut cursors: Vec<GraphIter> = vec![
        g.iter_vertices().into(),
        g.iter_vertex_neighbors(1, NeighborMode::ALL).unwrap().into(),
        g.iter_edges().into(),
        g.iter_edges_from_order().into(),
        g.iter_edge_neighbors(1, NeighborMode::ALL).unwrap().into(),
    ];

    panic_unless_eq!(vec![0, 1, 2], walk(&mut cursors[0], |c| c.vertex()));
    panic_unless_eq!(vec![0, 2], walk(&mut cursors[1], |c| c.neighbor()));
    panic_unless_eq!(vec![0, 1], walk(&mut cursors[2], |c| c.edge()));
    panic_unless_eq!(vec![1, 0], walk(&mut cursors[3], |c| c.edge()));
    panic_unless_eq!(vec![1, 0], walk(&mut cursors[4], |c| c.edge()));

    for c in cursors.iter_mut() {
        assert!(c.end());
        c.reset();
        assert!(! c.end());
    }

    // Accessors a variant does not provide stay undefined.
    panic_unless_eq!(None, cursors[0].edge());
    panic_unless_eq!(None, cursors[2].vertex());
    panic_unless_eq!(None, cursors[3].neighbor());
    panic_unless_eq!(Some(0), cursors[4].neighbor());
}
