use dirgraph::{DirectedGraph, ErrorKind};
use petgraph::algo::{dijkstra, has_path_connecting};
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge(u8, u8),
    RemoveEdge(u8, u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    let id = 0u8..8;
    prop_oneof![
        id.clone().prop_map(Operation::AddVertex),
        id.clone().prop_map(Operation::RemoveVertex),
        (id.clone(), id.clone()).prop_map(|(a, b)| Operation::AddEdge(a, b)),
        (id.clone(), id).prop_map(|(a, b)| Operation::RemoveEdge(a, b)),
    ]
}

/// A weighted graph over `0..n` built alongside an equivalent petgraph graph.
fn weighted_pair(
    n: u8,
    edges: &[(u8, u8, u32)],
) -> (DirectedGraph<u8, (), u32>, DiGraph<u8, u32>) {
    let mut ours = DirectedGraph::weighted();
    let mut reference = DiGraph::new();
    for id in 0..n {
        ours.add_vertex(id, ());
        reference.add_node(id);
    }
    for &(u, v, w) in edges {
        let (u, v) = (u % n, v % n);
        // Only the first weight for a pair counts.
        if !ours.edge_exists(&u, &v) {
            ours.add_edge(&u, &v, Some(w)).unwrap();
            reference.add_edge(NodeIndex::new(u as usize), NodeIndex::new(v as usize), w);
        }
    }
    (ours, reference)
}

proptest! {
    #[test]
    fn test_graph_matches_adjacency_model(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut graph: DirectedGraph<u8, u8> = DirectedGraph::unweighted();
        let mut model: HashMap<u8, HashSet<u8>> = HashMap::new();

        for op in ops {
            match op {
                Operation::AddVertex(id) => {
                    graph.add_vertex(id, id);
                    model.entry(id).or_default();
                }
                Operation::RemoveVertex(id) => {
                    let res = graph.remove_vertex(&id);
                    if model.remove(&id).is_some() {
                        prop_assert_eq!(res, Ok(id));
                        for targets in model.values_mut() {
                            targets.remove(&id);
                        }
                    } else {
                        prop_assert_eq!(res.unwrap_err().kind(), ErrorKind::NotFound);
                    }
                }
                Operation::AddEdge(a, b) => {
                    let res = graph.add_edge(&a, &b, None);
                    if model.contains_key(&a) && model.contains_key(&b) {
                        prop_assert!(res.is_ok());
                        model.entry(a).or_default().insert(b);
                    } else {
                        prop_assert_eq!(res.unwrap_err().kind(), ErrorKind::NotFound);
                    }
                }
                Operation::RemoveEdge(a, b) => {
                    let res = graph.remove_edge(&a, &b);
                    let existed = model.get_mut(&a).is_some_and(|t| t.remove(&b));
                    prop_assert_eq!(res.is_ok(), existed);
                }
            }

            prop_assert_eq!(graph.len(), model.len());
        }

        let expected_edges: usize = model.values().map(HashSet::len).sum();
        prop_assert_eq!(graph.edge_count(), expected_edges);
        for a in 0..8u8 {
            prop_assert_eq!(graph.vertex_exists(&a), model.contains_key(&a));
            for b in 0..8u8 {
                let expected = model.get(&a).is_some_and(|t| t.contains(&b));
                prop_assert_eq!(graph.edge_exists(&a, &b), expected, "edge {} -> {}", a, b);
            }
        }
    }

    #[test]
    fn test_reachability_matches_petgraph(
        n in 1u8..12,
        edges in proptest::collection::vec((any::<u8>(), any::<u8>(), 1u32..20), 0..40),
    ) {
        let (ours, reference) = weighted_pair(n, &edges);

        for s in 0..n {
            let reachable = ours.breadth_first_search(&s, None).unwrap().into_reachable();
            prop_assert!(reachable.contains(&s));

            for t in 0..n {
                let expected = has_path_connecting(
                    &reference,
                    NodeIndex::new(s as usize),
                    NodeIndex::new(t as usize),
                    None,
                );
                prop_assert_eq!(ours.depth_first_search(&s, &t).unwrap(), expected);
                prop_assert_eq!(reachable.contains(&t), expected);

                let targeted = ours.breadth_first_search(&s, Some(&t)).unwrap();
                prop_assert_eq!(targeted.found(), Some(expected));
                prop_assert_eq!(targeted.reachable(), &reachable);
            }
        }
    }

    #[test]
    fn test_min_path_matches_petgraph_dijkstra(
        n in 1u8..12,
        edges in proptest::collection::vec((any::<u8>(), any::<u8>(), 1u32..20), 0..40),
        source in any::<u8>(),
    ) {
        let (ours, reference) = weighted_pair(n, &edges);
        let source = source % n;

        let paths = ours.min_path(&source).unwrap();
        let start = NodeIndex::new(source as usize);
        let expected: HashMap<u8, u32> = dijkstra(&reference, start, None, |e| *e.weight())
            .into_iter()
            .map(|(node, d)| (reference[node], d))
            .collect();

        prop_assert_eq!(paths.distances(), &expected);
        prop_assert_eq!(paths.order().first(), Some(&source));
        prop_assert_eq!(paths.order().len(), expected.len());

        let in_order: Vec<u32> = paths.order().iter().map(|id| expected[id]).collect();
        prop_assert!(in_order.windows(2).all(|w| w[0] <= w[1]), "order not sorted: {:?}", in_order);
    }

    #[test]
    fn test_add_edge_is_idempotent(
        first in 1u32..100,
        second in proptest::option::of(0u32..100),
    ) {
        let mut graph: DirectedGraph<&str, (), u32> = DirectedGraph::weighted();
        graph.add_vertex("a", ());
        graph.add_vertex("b", ());
        graph.add_edge(&"a", &"b", Some(first)).unwrap();
        prop_assert!(graph.add_edge(&"a", &"b", second).is_ok());
        prop_assert_eq!(graph.edge_weight(&"a", &"b"), Some(first));
        prop_assert_eq!(graph.edge_count(), 1);
    }
}
