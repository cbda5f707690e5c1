//! Property-based tests for the dependency graph and identity mapper.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::graph::{Graph, IdMapper, LabeledGraph};
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Strategy producing an arbitrary acyclic edge set: every generated
    /// pair `(a, b)` is oriented low-to-high, so no cycle can form.
    fn acyclic_edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
        prop::collection::vec((0usize..24, 0usize..24), 0..64).prop_map(|pairs| {
            pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect()
        })
    }

    // ============================================================================
    // Graph::topo_sort property tests
    // ============================================================================

    proptest! {
        /// Property: the order contains every vertex exactly once
        #[test]
        fn topo_sort_is_a_permutation(edges in acyclic_edges()) {
            let mut graph = Graph::new();
            for &(u, v) in &edges {
                graph.add_edge(u, v);
            }

            let order = graph.topo_sort();
            prop_assert_eq!(order.len(), graph.vertex_count());
            let distinct: HashSet<_> = order.iter().copied().collect();
            prop_assert_eq!(distinct.len(), order.len());
        }

        /// Property: for every edge u -> v, u appears strictly before v
        #[test]
        fn topo_sort_respects_every_edge(edges in acyclic_edges()) {
            let mut graph = Graph::new();
            for &(u, v) in &edges {
                graph.add_edge(u, v);
            }

            let order = graph.topo_sort();
            for &(u, v) in &edges {
                let u_pos = order.iter().position(|&x| x == u).unwrap();
                let v_pos = order.iter().position(|&x| x == v).unwrap();
                prop_assert!(
                    u_pos < v_pos,
                    "edge {} -> {} violated by order {:?}",
                    u,
                    v,
                    order
                );
            }
        }

        /// Property: topo_sort is deterministic for a fixed insertion sequence
        #[test]
        fn topo_sort_is_deterministic(edges in acyclic_edges()) {
            let build = |edges: &[(usize, usize)]| {
                let mut graph = Graph::new();
                for &(u, v) in edges {
                    graph.add_edge(u, v);
                }
                graph
            };
            prop_assert_eq!(build(&edges).topo_sort(), build(&edges).topo_sort());
        }

        /// Property: adding a self-edge per vertex never changes the order
        #[test]
        fn topo_sort_unaffected_by_self_edges(edges in acyclic_edges()) {
            let mut plain = Graph::new();
            for &(u, v) in &edges {
                plain.add_edge(u, v);
            }

            let mut with_loops = Graph::new();
            for v in 0..plain.vertex_count() {
                with_loops.add_edge(v, v);
            }
            for &(u, v) in &edges {
                with_loops.add_edge(u, v);
            }

            prop_assert_eq!(plain.topo_sort(), with_loops.topo_sort());
        }
    }

    // ============================================================================
    // IdMapper property tests
    // ============================================================================

    proptest! {
        /// Property: fetch_item(fetch_id(x)) == x, and repeated fetch_id calls
        /// return the same id
        #[test]
        fn id_mapper_roundtrip(labels in prop::collection::vec("[a-z]{1,8}", 0..32)) {
            let mut map = IdMapper::new();
            let ids: Vec<_> = labels.iter().map(|l| map.fetch_id(l)).collect();

            for (label, &id) in labels.iter().zip(&ids) {
                prop_assert_eq!(map.fetch_id(label), id);
                prop_assert_eq!(map.fetch_item(id).unwrap(), label);
            }
        }

        /// Property: ids are dense and zero-based in first-seen order
        #[test]
        fn id_mapper_ids_are_dense(labels in prop::collection::vec("[a-z]{1,8}", 0..32)) {
            let mut map = IdMapper::new();
            let mut seen = HashSet::new();
            for label in &labels {
                let id = map.fetch_id(label);
                if seen.insert(label.clone()) {
                    prop_assert_eq!(id, seen.len() - 1);
                }
            }
            prop_assert_eq!(map.len(), seen.len());
        }
    }

    // ============================================================================
    // LabeledGraph property tests
    // ============================================================================

    proptest! {
        /// Property: labeled ordering respects every labeled edge
        #[test]
        fn labeled_topo_sort_respects_edges(edges in acyclic_edges()) {
            let labeled: Vec<(String, String)> = edges
                .iter()
                .map(|&(u, v)| (format!("p{:02}", u), format!("p{:02}", v)))
                .collect();

            let mut graph = LabeledGraph::new();
            for (u, v) in &labeled {
                graph.add_edge(u, v);
            }

            let order = graph.topo_sort().unwrap();
            for (u, v) in &labeled {
                let u_pos = order.iter().position(|x| x == u).unwrap();
                let v_pos = order.iter().position(|x| x == v).unwrap();
                prop_assert!(u_pos < v_pos);
            }
        }
    }
}
