use connect4_core::{check_winner, legal_moves, outcome, Board, GameOutcome, Player};
use rand::Rng;

use crate::config::RolloutPolicy;

/// Play random drops from `state`, starting with `mover`, until the game ends.
///
/// Returns the outcome value in the player-two-positive frame. A position
/// with no legal drop scores as a draw.
pub fn rollout<R: Rng + ?Sized>(
    state: &Board,
    mover: Player,
    policy: RolloutPolicy,
    rng: &mut R,
) -> f64 {
    let mut board = *state;
    let mut player = mover;

    loop {
        let moves = legal_moves(&board, player);
        if moves.is_empty() {
            return GameOutcome::Draw.value();
        }

        if policy == RolloutPolicy::AdoptImmediateWin {
            if let Some(winner) = moves.iter().find_map(check_winner) {
                return GameOutcome::Win(winner).value();
            }
        }

        board = moves[rng.gen_range(0..moves.len())];
        if let Some(result) = outcome(&board) {
            return result.value();
        }

        player = player.opponent();
    }
}
