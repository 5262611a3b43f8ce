#[cfg(test)]
mod tests {
    use crate::graph::UndirectedGraph;
    use crate::ranking::{build_matrix, rank, RankConfig};
    use crate::KeyrankError;

    #[test]
    fn test_build_matrix_with_self_loop() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("yahoo");
        let b = graph.create_node("amazon");
        let c = graph.create_node("microsoft");
        graph.connect_unweighted(a, a);
        graph.connect_unweighted(a, b);
        graph.connect_unweighted(b, c);

        let matrix = build_matrix(&graph, &[a, b, c]);

        assert_eq!(
            matrix,
            vec![
                vec![1.0, 1.0, 0.0],
                vec![1.0, 0.0, 1.0],
                vec![0.0, 1.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_build_matrix_preserves_caller_order() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");
        let b = graph.create_node("b");
        graph.connect(a, b, 0.5);

        let forward = build_matrix(&graph, &[a, b]);
        let reversed = build_matrix(&graph, &[b, a]);

        // The same edge lands wherever the caller's order puts its endpoints.
        assert_eq!(forward, vec![vec![0.0, 0.5], vec![0.5, 0.0]]);
        assert_eq!(reversed, vec![vec![0.0, 0.5], vec![0.5, 0.0]]);
    }

    #[test]
    fn test_build_matrix_accumulates_parallel_edges() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");
        let b = graph.create_node("b");
        graph.connect_unweighted(a, b);
        graph.connect_unweighted(a, b);

        let matrix = build_matrix(&graph, &[a, b]);

        assert_eq!(matrix[0][1], 2.0);
        assert_eq!(matrix[1][0], 2.0);
    }

    #[test]
    fn test_rank_empty_node_list() {
        let graph = UndirectedGraph::new();

        let scores = rank(&graph, &[], &RankConfig::default()).unwrap();

        assert!(scores.is_empty());
    }

    #[test]
    fn test_rank_edgeless_nodes_score_one() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");
        let b = graph.create_node("b");
        let c = graph.create_node("c");

        let scores = rank(&graph, &[a, b, c], &RankConfig::default()).unwrap();

        assert_eq!(scores.len(), 3);
        for (_, score) in scores {
            assert_eq!(score, 1.0);
        }
    }

    #[test]
    fn test_rank_two_connected_nodes_score_equally() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");
        let b = graph.create_node("b");
        graph.connect_unweighted(a, b);

        let scores = rank(&graph, &[a, b], &RankConfig::default()).unwrap();

        assert!((scores[&a] - scores[&b]).abs() < 1e-9);
        assert!((scores[&a] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rank_rejects_zero_iterations() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");

        let config = RankConfig::default().with_max_iterations(0);
        let result = rank(&graph, &[a], &config);

        assert!(matches!(result, Err(KeyrankError::InvalidArgument(_))));
    }

    #[test]
    fn test_rank_rejects_bad_damping() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");

        let config = RankConfig::default().with_damping(1.5);
        let result = rank(&graph, &[a], &config);

        assert!(matches!(result, Err(KeyrankError::InvalidArgument(_))));
    }

    #[test]
    fn test_rank_iteration_cap_is_a_hard_ceiling() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");
        let b = graph.create_node("b");
        let c = graph.create_node("c");
        graph.connect_unweighted(a, b);
        graph.connect_unweighted(b, c);

        // A zero threshold never converges; the cap must still stop us.
        let config = RankConfig::default()
            .with_max_iterations(3)
            .with_convergence_threshold(0.0);
        let scores = rank(&graph, &[a, b, c], &config).unwrap();

        assert_eq!(scores.len(), 3);
        for score in scores.values() {
            assert!(score.is_finite());
        }
    }

    #[test]
    fn test_rank_tolerates_dangling_node() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");
        let b = graph.create_node("b");
        let lone = graph.create_node("lone");
        graph.connect_unweighted(a, b);

        let scores = rank(&graph, &[a, b, lone], &RankConfig::default()).unwrap();

        assert_eq!(scores.len(), 3);
        assert!(scores[&lone].is_finite());
        // The disconnected node only ever receives teleport mass.
        assert!(scores[&lone] < scores[&a]);
    }

    #[test]
    fn test_rank_handles_pure_self_loop() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");
        graph.connect_unweighted(a, a);

        let scores = rank(&graph, &[a], &RankConfig::default()).unwrap();

        assert!((scores[&a] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let mut graph = UndirectedGraph::new();
        let a = graph.create_node("a");
        let b = graph.create_node("b");
        let c = graph.create_node("c");
        let d = graph.create_node("d");
        graph.connect_unweighted(a, b);
        graph.connect_unweighted(b, c);
        graph.connect(c, d, 0.3);
        graph.connect_unweighted(a, c);

        let nodes = [a, b, c, d];
        let first = rank(&graph, &nodes, &RankConfig::default()).unwrap();
        let second = rank(&graph, &nodes, &RankConfig::default()).unwrap();

        // Bit-identical across runs, not merely approximately equal.
        assert_eq!(first, second);
    }
}
