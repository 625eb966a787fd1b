//! Property tests for the heuristics over randomly generated complete
//! directed graphs.

use proptest::prelude::*;

use atsp_solver::graph::Graph;
use atsp_solver::heuristics::{
    minimum_spanning_tree, nearest_neighbor, repetitive_nearest_neighbor, two_opt,
};
use atsp_solver::Tour;

/// Complete digraphs on 2..=max_nodes nodes with weights in 1..=100. Both
/// directions of every pair exist and may differ.
fn complete_digraph(max_nodes: usize) -> impl Strategy<Value = Graph> {
    (2..=max_nodes).prop_flat_map(|n| {
        proptest::collection::vec(1i64..=100, n * n).prop_map(move |weights| {
            let mut graph = Graph::new();
            for i in 0..n {
                graph.add_node((i as f64, 0.0));
            }
            for i in 0..n {
                for j in 0..n {
                    if i != j {
                        graph.upsert_edge(i, j, weights[i * n + j]).unwrap();
                    }
                }
            }
            graph
        })
    })
}

proptest! {
    #[test]
    fn nn_tours_are_valid(graph in complete_digraph(7)) {
        for start in graph.node_ids() {
            let tour = nearest_neighbor(&graph, start).expect("complete graphs always close");
            prop_assert!(tour.is_valid(&graph));
            prop_assert_eq!(tour.nodes()[0], start);
        }
    }

    #[test]
    fn rnn_is_best_of_all_starts(graph in complete_digraph(7)) {
        let (_, best) = repetitive_nearest_neighbor(&graph).expect("complete graphs always close");
        for start in graph.node_ids() {
            let tour = nearest_neighbor(&graph, start).unwrap();
            prop_assert!(best <= tour.weight(&graph));
        }
    }

    #[test]
    fn two_opt_never_increases_weight(graph in complete_digraph(7)) {
        let (tour, weight) = repetitive_nearest_neighbor(&graph).unwrap();
        let refined = two_opt(&graph, &tour);
        prop_assert!(refined.weight(&graph) <= weight);
        prop_assert!(refined.is_valid(&graph));
    }

    #[test]
    fn two_opt_is_locally_optimal(graph in complete_digraph(6)) {
        let (tour, _) = repetitive_nearest_neighbor(&graph).unwrap();
        let refined = two_opt(&graph, &tour);
        let weight = refined.weight(&graph);
        let n = refined.len();
        for i in 1..n.saturating_sub(2) {
            for j in i + 2..n {
                let mut candidate = refined.nodes().to_vec();
                candidate[i..j].reverse();
                prop_assert!(Tour::from_nodes(candidate).weight(&graph) >= weight);
            }
        }
    }

    #[test]
    fn tour_weight_matches_manual_sum(graph in complete_digraph(7)) {
        let (tour, weight) = repetitive_nearest_neighbor(&graph).unwrap();
        let nodes = tour.nodes();
        let manual: i64 = (0..nodes.len())
            .map(|i| {
                graph
                    .edge_weight(nodes[i], nodes[(i + 1) % nodes.len()])
                    .unwrap()
            })
            .sum();
        prop_assert_eq!(weight, manual as f64);
    }

    #[test]
    fn mst_spans_complete_graphs(graph in complete_digraph(7)) {
        let tree = minimum_spanning_tree(&graph).expect("complete graphs are connected");
        prop_assert_eq!(tree.len(), graph.node_count() - 1);

        // Never heavier than the spanning star rooted at node 0.
        let star: i64 = (1..graph.node_count())
            .map(|v| {
                graph
                    .edge_weight(0, v)
                    .unwrap()
                    .min(graph.edge_weight(v, 0).unwrap())
            })
            .sum();
        prop_assert!(tree.total_weight() <= star);
    }
}
