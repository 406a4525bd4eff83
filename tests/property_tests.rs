//! Property tests over seeded random graphs and game trees.

use proptest::prelude::*;

use rust_search::adversarial::{Depth, GameAlgorithm, GameSearchConfig, GameTreeSearch};
use rust_search::core::{Problem, ZeroHeuristic};
use rust_search::games::TreeGame;
use rust_search::problems::GraphProblem;
use rust_search::search::{
    a_star_search, best_first_search, breadth_first_search, depth_first_search,
    uniform_cost_search, GraphSearch, Strategy as SearchStrategy,
};

fn tree_search(
    game: &TreeGame,
    algorithm: GameAlgorithm,
    depth: Depth,
) -> (f64, Option<usize>, u64) {
    let config = GameSearchConfig::default()
        .with_algorithm(algorithm)
        .with_max_depth(depth);
    let mut search = GameTreeSearch::new(game.clone(), config);
    let (value, action) = search.search(&game.root(), &game.estimate_heuristic());
    (value, action, search.stats().nodes_visited())
}

fn depth_strategy() -> impl Strategy<Value = Depth> {
    prop_oneof![Just(Depth::Unlimited), (0u32..5).prop_map(Depth::Limited)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pruning_preserves_minimax_value(
        seed in any::<u64>(),
        height in 1u32..6,
        branching in 1usize..5,
        agents in 2usize..4,
        depth in depth_strategy(),
    ) {
        let game = TreeGame::random(seed, height, branching, agents);

        let (minimax, _, minimax_nodes) = tree_search(&game, GameAlgorithm::Minimax, depth);
        let (alphabeta, _, alphabeta_nodes) = tree_search(&game, GameAlgorithm::AlphaBeta, depth);
        let (ordered, _, ordered_nodes) =
            tree_search(&game, GameAlgorithm::AlphaBetaOrdered, depth);

        prop_assert_eq!(minimax, alphabeta);
        prop_assert_eq!(minimax, ordered);
        prop_assert!(alphabeta_nodes <= minimax_nodes);
        prop_assert!(ordered_nodes <= minimax_nodes);
    }

    #[test]
    fn expectimax_bounded_by_leaf_range(
        seed in any::<u64>(),
        height in 1u32..5,
        branching in 1usize..4,
    ) {
        let game = TreeGame::random(seed, height, branching, 2);
        let (value, _, _) = tree_search(&game, GameAlgorithm::Expectimax, Depth::Unlimited);
        let (minimax, _, _) = tree_search(&game, GameAlgorithm::Minimax, Depth::Unlimited);

        prop_assert!((-10.0..=10.0).contains(&value));
        prop_assert!(value >= minimax);
    }

    #[test]
    fn uninformed_searches_agree_on_solvability(
        seed in any::<u64>(),
        nodes in 2usize..25,
        edges in 0usize..60,
    ) {
        let problem = GraphProblem::random(seed, nodes, edges);
        let start = problem.initial_state();

        let bfs = breadth_first_search(&problem, &start);
        let dfs = depth_first_search(&problem, &start);
        let ucs = uniform_cost_search(&problem, &start);
        let greedy = best_first_search(&problem, &start, &ZeroHeuristic);

        prop_assert_eq!(bfs.is_some(), dfs.is_some());
        prop_assert_eq!(bfs.is_some(), ucs.is_some());
        prop_assert_eq!(bfs.is_some(), greedy.is_some());

        if let (Some(bfs), Some(dfs), Some(ucs)) = (bfs, dfs, ucs) {
            prop_assert!(bfs.len() <= dfs.len());
            prop_assert!(bfs.len() <= ucs.len());
        }
    }

    #[test]
    fn a_star_matches_uniform_cost(
        seed in any::<u64>(),
        nodes in 2usize..25,
        edges in 0usize..60,
    ) {
        let problem = GraphProblem::random(seed, nodes, edges);
        let start = problem.initial_state();

        // Exact cost-to-goal from every node is a consistent heuristic.
        let exact: Vec<f64> = (0..problem.node_count())
            .map(|node| {
                uniform_cost_search(&problem, &node)
                    .map_or(f64::INFINITY, |path| problem.path_cost(&path))
            })
            .collect();
        let perfect = |_: &GraphProblem, node: &usize| exact[*node];

        let mut ucs = GraphSearch::new(SearchStrategy::UniformCost);
        let mut blind = GraphSearch::new(SearchStrategy::AStar);
        let mut informed = GraphSearch::new(SearchStrategy::AStar);

        let ucs_path = ucs.run(&problem, &start);
        let blind_path = blind.run(&problem, &start);
        let informed_path = informed.run_with(&problem, &start, &perfect);

        prop_assert_eq!(
            ucs_path.as_ref().map(|p| problem.path_cost(p)),
            informed_path.as_ref().map(|p| problem.path_cost(p))
        );
        prop_assert_eq!(&ucs_path, &blind_path);
        if ucs_path.is_some() {
            prop_assert!(informed.stats().nodes_expanded <= blind.stats().nodes_expanded);
        }

        let direct = a_star_search(&problem, &start, &perfect);
        prop_assert_eq!(direct, informed_path);
    }
}
