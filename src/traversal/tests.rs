use std::collections::BTreeSet;

use proptest::prelude::*;
use similar_asserts::assert_eq;

use super::Traversal;
use crate::{graph, graph::RelationGraph, vertex::Vertex};

fn orders<V: Vertex>(g: &RelationGraph<V>) -> String {
    Traversal::ALL
        .iter()
        .map(|t| format!("{t}: {:?}", g.traverse(*t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn chain() {
    let g = RelationGraph::new([1, 2, 3], [(1, 2), (2, 3)]);
    assert_eq!(g.iterative_bfs(), vec![1, 2, 3]);
    assert_eq!(g.iterative_dfs(), vec![1, 2, 3]);
    assert_eq!(g.recursive_bfs(), vec![1, 2, 3]);
    assert_eq!(g.recursive_dfs(), vec![1, 2, 3]);
}

#[test]
fn empty_graph() {
    let g: RelationGraph<u32> = RelationGraph::new([], Vec::<(u32, u32)>::new());
    for t in Traversal::ALL {
        assert_eq!(g.traverse(t), Vec::<u32>::new());
    }
    assert_eq!(g.bfs_iter().next(), None);
    assert_eq!(g.dfs_iter().next(), None);
}

#[test]
fn lone_vertex() {
    let g = RelationGraph::new([1], Vec::<(u32, u32)>::new());
    for t in Traversal::ALL {
        assert_eq!(g.traverse(t), vec![1]);
    }
}

#[test]
fn equivalence_starts_from_class_minimum() {
    let g = RelationGraph::new([2, 1], [(1, 1), (2, 2), (2, 1), (1, 2)]);
    for t in Traversal::ALL {
        assert_eq!(g.traverse(t), vec![1, 2]);
    }
}

#[test]
fn siblings_expand_numerically() {
    let g = graph!(1 -> 10; 1 -> 2; 1 -> 9; 2 -> 20; 10 -> 3).unwrap();
    insta::assert_snapshot!(orders(&g), @r"
iterative BFS: [1, 2, 9, 10, 20, 3]
iterative DFS: [1, 2, 20, 9, 10, 3]
recursive BFS: [1, 2, 9, 10, 20, 3]
recursive DFS: [1, 2, 20, 9, 10, 3]
");
}

#[test]
fn depth_first_descends_before_visiting_siblings() {
    let g = RelationGraph::new([1, 2, 3, 4], [(1, 2), (1, 3), (2, 4)]);
    assert_eq!(g.iterative_dfs(), vec![1, 2, 4, 3]);
    assert_eq!(g.recursive_dfs(), vec![1, 2, 4, 3]);

    let g = RelationGraph::new(1..=6, [(1, 2), (1, 3), (2, 4), (3, 5), (4, 6)]);
    assert_eq!(g.iterative_dfs(), vec![1, 2, 4, 6, 3, 5]);
    assert_eq!(g.recursive_dfs(), vec![1, 2, 4, 6, 3, 5]);
    assert_eq!(g.iterative_bfs(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn depth_first_skips_vertices_reached_while_stacked() {
    // 3 is stacked under 2 but reached through 2 -> 3 first.
    let g = RelationGraph::new([1, 2, 3, 4], [(1, 2), (1, 3), (2, 3), (3, 4)]);
    assert_eq!(g.iterative_dfs(), vec![1, 2, 3, 4]);
    assert_eq!(g.recursive_dfs(), vec![1, 2, 3, 4]);
}

#[test]
fn many_roots_do_not_deepen_the_recursion() {
    let n = 200_000u32;
    let g = RelationGraph::new(1..=n, Vec::<(u32, u32)>::new());
    let expected: Vec<u32> = (1..=n).collect();
    assert_eq!(g.recursive_bfs(), expected);
    assert_eq!(g.recursive_dfs(), expected);
}

#[test]
fn later_roots_skip_visited_vertices() {
    let g = RelationGraph::new(1..=6, [(1, 3), (2, 3), (3, 4), (5, 6)]);
    assert_eq!(
        g.roots().into_iter().collect::<Vec<_>>(),
        vec![1, 2, 5]
    );
    insta::assert_snapshot!(orders(&g), @r"
iterative BFS: [1, 3, 4, 2, 5, 6]
iterative DFS: [1, 3, 4, 2, 5, 6]
recursive BFS: [1, 3, 4, 2, 5, 6]
recursive DFS: [1, 3, 4, 2, 5, 6]
");
}

#[test]
fn cycles_terminate() {
    let g = RelationGraph::new([1, 2, 3, 4], [(1, 2), (2, 3), (3, 2), (3, 4), (4, 1)]);
    // Every vertex is a destination, so there is nowhere to start.
    assert!(g.roots().is_empty());
    assert!(g.iterative_bfs().is_empty());

    let g = RelationGraph::new([0, 1, 2, 3], [(0, 1), (1, 2), (2, 1), (2, 3), (3, 3)]);
    assert_eq!(g.iterative_bfs(), vec![0, 1, 2, 3]);
    assert_eq!(g.iterative_dfs(), vec![0, 1, 2, 3]);
    assert_eq!(g.recursive_dfs(), vec![0, 1, 2, 3]);
}

#[test]
fn iterators_are_lazy() {
    let g = RelationGraph::new(1..=100, (1..100).map(|i| (i, i + 1)));
    let first: Vec<u32> = g.bfs_iter().take(3).collect();
    assert_eq!(first, vec![1, 2, 3]);
    let first: Vec<u32> = g.dfs_iter().take(3).collect();
    assert_eq!(first, vec![1, 2, 3]);
}

#[test]
fn traversal_names() {
    let names: Vec<String> = Traversal::ALL.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        names.join(", "),
        "iterative BFS, iterative DFS, recursive BFS, recursive DFS"
    );
}

fn arb_graph() -> impl Strategy<Value = RelationGraph<u32>> {
    (1u32..9).prop_flat_map(|n| {
        proptest::collection::vec((1..=n, 1..=n), 0..(2 * n as usize))
            .prop_map(move |edges| RelationGraph::new(1..=n, edges))
    })
}

/// Equivalence relations built from a random partition into at most three classes.
fn arb_equivalence() -> impl Strategy<Value = RelationGraph<u32>> {
    proptest::collection::vec(0u32..3, 1..9).prop_map(|classes| {
        let n = classes.len() as u32;
        let edges: Vec<(u32, u32)> = (1..=n)
            .flat_map(|a| (1..=n).map(move |b| (a, b)))
            .filter(|(a, b)| classes[*a as usize - 1] == classes[*b as usize - 1])
            .collect();
        RelationGraph::new(1..=n, edges)
    })
}

fn visited_set(order: &[u32]) -> BTreeSet<u32> {
    order.iter().copied().collect()
}

proptest! {
    #[test]
    fn traversals_visit_the_same_vertices(g in arb_graph()) {
        let reference = visited_set(&g.iterative_bfs());
        for t in Traversal::ALL {
            let order = g.traverse(t);
            prop_assert_eq!(order.len(), visited_set(&order).len());
            prop_assert_eq!(visited_set(&order), reference.clone());
        }
    }

    #[test]
    fn recursive_bfs_matches_iterative_bfs(g in arb_graph()) {
        prop_assert_eq!(g.recursive_bfs(), g.iterative_bfs());
    }

    #[test]
    fn recursive_dfs_matches_iterative_dfs(g in arb_graph()) {
        prop_assert_eq!(g.recursive_dfs(), g.iterative_dfs());
    }

    #[test]
    fn traversals_start_at_the_smallest_root(g in arb_graph()) {
        let first_root = g.roots().first().copied();
        for t in Traversal::ALL {
            prop_assert_eq!(g.traverse(t).first().copied(), first_root);
        }
    }

    #[test]
    fn roots_are_ascending_and_unique(g in arb_graph()) {
        let roots: Vec<u32> = g.roots().into_iter().collect();
        prop_assert!(roots.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(roots.iter().all(|r| g.vertices().contains(r)));
    }

    #[test]
    fn queries_are_idempotent(g in arb_graph()) {
        prop_assert_eq!(g.roots(), g.roots());
        prop_assert_eq!(g.properties(), g.properties());
        for t in Traversal::ALL {
            prop_assert_eq!(g.traverse(t), g.traverse(t));
        }
    }

    #[test]
    fn equivalence_classes_are_symmetric(g in arb_equivalence()) {
        prop_assert!(g.is_equivalence());
        for v in g.vertices().iter().filter(|v| g.out_degree(v) > 0) {
            for u in g.vertices() {
                prop_assert_eq!(
                    g.equivalence_class(v).contains(u),
                    g.equivalence_class(u).contains(v)
                );
            }
        }
    }

    #[test]
    fn equivalence_roots_are_class_minima(g in arb_equivalence()) {
        let minima: BTreeSet<u32> = g
            .vertices()
            .iter()
            .filter_map(|v| g.equivalence_class(v).first().copied())
            .collect();
        prop_assert_eq!(g.roots(), minima);
        // Every class is entered from its minimum, so every vertex is reached.
        prop_assert_eq!(g.iterative_dfs().len(), g.n_vertices());
    }
}
