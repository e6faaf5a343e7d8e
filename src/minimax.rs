//! Exhaustive minimax search
//!
//! X maximizes [`utility`], O minimizes it. The full game tree below the
//! given board is explored on every call: no pruning and no caching, the
//! tree is small enough (at most 549,946 nodes from the empty board).
//!
//! Candidate actions are always considered in row-major order, so the
//! engine is deterministic.

use serde::Serialize;

use crate::{
    config::{SearchConfig, SelectionPolicy},
    tictactoe::{
        Action, Board, Game, Player, Utility, current_player, legal_actions, utility,
    },
};

/// Value of `board` when X is to move and both sides play perfectly.
pub fn max_value(board: &Board) -> Utility {
    max_value_counted(board, &mut 0)
}

/// Value of `board` when O is to move and both sides play perfectly.
pub fn min_value(board: &Board) -> Utility {
    min_value_counted(board, &mut 0)
}

fn max_value_counted(board: &Board, nodes: &mut u64) -> Utility {
    *nodes += 1;
    // `None` exactly when the board is terminal
    let Some(actions) = legal_actions(board) else {
        return utility(board);
    };
    let mut v = Utility::MIN;
    for action in actions {
        v = v.max(min_value_counted(&board.apply(action), nodes));
    }
    v
}

fn min_value_counted(board: &Board, nodes: &mut u64) -> Utility {
    *nodes += 1;
    let Some(actions) = legal_actions(board) else {
        return utility(board);
    };
    let mut v = Utility::MAX;
    for action in actions {
        v = v.min(max_value_counted(&board.apply(action), nodes));
    }
    v
}

/// Optimal action for the player to move, using the default configuration.
///
/// Returns `None` when the board is terminal.
pub fn optimal_action(board: &Board) -> Option<Action> {
    Minimax::default().optimal_action(board)
}

/// Outcome of a root search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub player: Player,
    pub action: Action,
    /// Minimax value of the position after `action`
    pub value: Utility,
    /// Every candidate evaluated, in evaluation order. With
    /// [`SelectionPolicy::FirstAcceptable`] the scan may stop early.
    pub candidates: Vec<(Action, Utility)>,
    /// Number of positions visited, the candidate positions included
    pub nodes: u64,
    pub policy: SelectionPolicy,
}

/// Minimax engine with a fixed root selection policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Action chosen for the player to move, `None` on a terminal board.
    pub fn optimal_action(&self, board: &Board) -> Option<Action> {
        self.analyze(board).map(|report| report.action)
    }

    /// Minimax value of the board for whoever is to move.
    pub fn value(&self, board: &Board) -> Utility {
        match current_player(board) {
            Player::X => max_value(board),
            Player::O => min_value(board),
        }
    }

    /// Search the board and report how the action was chosen.
    pub fn analyze(&self, board: &Board) -> Option<SearchReport> {
        let actions = legal_actions(board)?;
        let player = current_player(board);
        let policy = self.config.selection;

        let mut nodes = 0;
        let mut candidates = Vec::with_capacity(actions.len());
        let mut chosen: Option<(Action, Utility)> = None;

        for action in actions {
            let next = board.apply(action);
            let value = match player {
                Player::X => min_value_counted(&next, &mut nodes),
                Player::O => max_value_counted(&next, &mut nodes),
            };
            tracing::trace!(%player, %action, value, "evaluated candidate");
            candidates.push((action, value));

            match policy {
                SelectionPolicy::FirstAcceptable => {
                    if is_acceptable(player, value) {
                        chosen = Some((action, value));
                        break;
                    }
                }
                SelectionPolicy::Best => {
                    if chosen.is_none_or(|(_, best)| improves(player, value, best)) {
                        chosen = Some((action, value));
                    }
                }
            }
        }

        // Every candidate loses: any of them will do.
        let (action, value) = chosen.or_else(|| candidates.first().copied())?;
        tracing::debug!(%player, %action, value, nodes, %policy, "selected action");

        Some(SearchReport {
            player,
            action,
            value,
            candidates,
            nodes,
            policy,
        })
    }

    /// Play `game` to the end with this engine choosing both sides' moves.
    pub fn play_out(&self, game: &mut Game) -> crate::Result<()> {
        while !game.is_over() {
            let board = game.current_state();
            let Some(action) = self.optimal_action(&board) else {
                break;
            };
            game.play(action)?;
        }
        Ok(())
    }

    /// Engine-versus-engine game from the empty board.
    pub fn self_play(&self) -> crate::Result<Game> {
        let mut game = Game::new();
        self.play_out(&mut game)?;
        Ok(game)
    }
}

/// Candidate does not lose for `player`
fn is_acceptable(player: Player, value: Utility) -> bool {
    match player {
        Player::X => value > -1,
        Player::O => value < 1,
    }
}

fn improves(player: Player, value: Utility, best: Utility) -> bool {
    match player {
        Player::X => value > best,
        Player::O => value < best,
    }
}
