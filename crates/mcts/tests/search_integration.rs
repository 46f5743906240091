use connect4_core::{check_winner, Board, Player, BOTTOM_ROW};
use connect4_mcts::{run_search, Mcts, MctsConfig, MctsError, MctsTree, NodeId, RolloutPolicy};

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

/// Player two has three stacked in column 3
fn vertical_threat() -> Board {
    board(
        "
        .......
        .......
        .......
        ...O...
        X..O...
        X..OX..
        ",
    )
}

/// Player two has the bottom row from column 1 to 3; column 4 wins
fn horizontal_threat() -> Board {
    board(
        "
        .......
        .......
        .......
        .......
        XX.X...
        XOOO...
        ",
    )
}

fn descendants(tree: &MctsTree, id: NodeId) -> Vec<NodeId> {
    let mut out = vec![id];
    let mut i = 0;
    while i < out.len() {
        out.extend_from_slice(tree.nodes[out[i]].child_ids());
        i += 1;
    }
    out
}

#[test]
fn empty_board_small_budget_places_single_chip_in_bottom_row() {
    let config = MctsConfig::default().with_iterations(50).with_seed(11);
    let result = Mcts::new()
        .search(&Board::new(), Player::One, &config)
        .unwrap();

    assert_eq!(result.board.chip_count(), 1);
    assert_eq!(result.board.count(Player::Two), 1);
    assert_eq!(
        result.board.get(BOTTOM_ROW, result.column),
        Some(Player::Two)
    );
    assert_eq!(result.root_visit_counts.len(), 7);
    assert!(result.board.validate().is_ok());
}

#[test]
fn search_takes_immediate_vertical_win() {
    let config = MctsConfig::default().with_iterations(2_000);
    for seed in 0..3 {
        let result = Mcts::new()
            .search(&vertical_threat(), Player::One, &config.clone().with_seed(seed))
            .unwrap();
        assert_eq!(result.column, 3, "seed {seed}");
        assert_eq!(check_winner(&result.board), Some(Player::Two));
    }
}

#[test]
fn search_takes_immediate_horizontal_win() {
    let config = MctsConfig::default().with_iterations(2_000).with_seed(5);
    let decided = run_search(&horizontal_threat(), Player::One, &config).unwrap();
    assert_eq!(check_winner(&decided), Some(Player::Two));
    assert_eq!(horizontal_threat().changed_column(&decided), Some(4));
}

#[test]
fn search_takes_win_with_adopting_rollouts() {
    let config = MctsConfig::default()
        .with_iterations(1_000)
        .with_rollout_policy(RolloutPolicy::AdoptImmediateWin)
        .with_seed(21);
    let result = Mcts::new()
        .search(&vertical_threat(), Player::One, &config)
        .unwrap();
    assert_eq!(result.column, 3);
}

#[test]
fn terminal_value_never_changes() {
    let config = MctsConfig::default().with_iterations(1_500).with_seed(8);
    let mut mcts = Mcts::new();
    mcts.search(&vertical_threat(), Player::One, &config)
        .unwrap();

    let tree = mcts.tree();
    let winning_id = tree.nodes[0].child_ids()[3];
    let winning = &tree.nodes[winning_id];
    assert!(winning.is_terminal);
    assert!(winning.is_evaluated);
    assert!(!winning.is_expanded());
    assert_eq!(winning.mean_value, 1.0);
    // Revisited many times, value untouched
    assert!(winning.visit_count > 1);
}

#[test]
fn visit_counts_are_conserved() {
    for (position, iterations) in [
        (Board::new(), 300),
        (vertical_threat(), 400),
        (horizontal_threat(), 50),
    ] {
        let config = MctsConfig::default()
            .with_iterations(iterations)
            .with_seed(17);
        let mut mcts = Mcts::new();
        let result = mcts.search(&position, Player::One, &config).unwrap();
        let tree = mcts.tree();

        for id in descendants(tree, 0) {
            let node = &tree.nodes[id];
            let child_visits: Vec<u32> = node
                .child_ids()
                .iter()
                .map(|&c| tree.nodes[c].visit_count)
                .collect();
            if node.is_expanded() {
                // One visit from the node's own rollout, the rest passed up by children
                assert_eq!(node.visit_count, 1 + child_visits.iter().sum::<u32>());
            }
            if let Some(&most) = child_visits.iter().max() {
                assert!(node.visit_count >= most);
            }
            if let Some(parent) = node.parent {
                assert_eq!(tree.nodes[parent].mover, node.mover.opponent());
            }
        }

        // Every iteration is a rollout, a terminal revisit or an expansion
        assert!(result.total_sims <= iterations);
        assert_eq!(result.tree_size, tree.size());
    }
}

#[test]
fn seeded_search_is_reproducible() {
    let config = MctsConfig::default().with_iterations(400).with_seed(1234);
    let position = Board::new().drop_piece(3, Player::One).unwrap();

    let first = Mcts::new().search(&position, Player::One, &config).unwrap();
    let second = Mcts::new().search(&position, Player::One, &config).unwrap();

    assert_eq!(first.board, second.board);
    assert_eq!(first.root_visit_counts, second.root_visit_counts);
    assert_eq!(first.root_value, second.root_value);
    assert_eq!(first.total_sims, second.total_sims);
    assert_eq!(first.tree_size, second.tree_size);
}

#[test]
fn tree_is_rebuilt_for_every_search() {
    let config = MctsConfig::default().with_iterations(200).with_seed(2);
    let mut mcts = Mcts::new();

    let first = mcts.search(&Board::new(), Player::One, &config).unwrap();
    let second = mcts.search(&Board::new(), Player::One, &config).unwrap();

    assert_eq!(first.tree_size, second.tree_size);
    assert_eq!(first.root_visit_counts, second.root_visit_counts);
}

#[test]
fn floating_chip_is_rejected() {
    let mut rows = [[0u8; 7]; 6];
    rows[5][0] = 1;
    rows[3][0] = 2;
    let err = MctsError::from(Board::from_rows(rows).unwrap_err());

    assert!(matches!(err, MctsError::InvalidState(_)));
    assert!(err.to_string().contains("Floating chip at row 3, column 0"));
}
