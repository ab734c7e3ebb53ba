//! Depth-bounded minimax search.
//!
//! Every branch works on its own copy of the board, so the real game is never touched
//! and top-level moves can be searched on separate threads. Moves are visited in
//! [`MoveList`](reversi_othello::MoveList) order and a later move only replaces the
//! current best when it is strictly better, so ties always go to the first move found.
//! Alpha-beta pruning, parallel root search and the time limit keep that guarantee.

use crate::eval::evaluate;
use crate::PlayerConfig;
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use log::{debug, error};
use reversi_othello::{apply_capture, movegen, Board, Game, Location, Move, Player};
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

/// Accumulator seed, beyond any score [`evaluate`] can produce.
pub const SCORE_BOUND: f64 = 10_000.0;

/// The outcome of one search call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    /// Best move for the player to move, or `None` at a leaf.
    pub best_move: Option<Location>,
    /// Minimax value from the searching player's perspective.
    pub score: f64,
    /// Positions visited, root included.
    pub nodes: u64,
    /// Whether the time limit cut the search short.
    pub timed_out: bool,
}

/// The search found nothing to play although the game expects the computer to move.
/// This means move generation and the turn state machine disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "depth {} search found no move for {}", depth, player)]
pub struct SearchExhaustedError {
    pub player: Player,
    pub depth: u8,
}

/// A board one move below the root, with the move that produced it.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    board: Board,
    mv: Move,
    score: f64,
}

/// Minimax search on behalf of one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Minimax {
    player: Player,
    depth: u8,
    pruning: bool,
    parallel: bool,
    time_limit: Option<Duration>,
}

impl Minimax {
    /// Plain, single-threaded minimax for `player` with a fixed lookahead.
    pub fn new(player: Player, depth: u8) -> Self {
        Self {
            player,
            depth,
            pruning: false,
            parallel: false,
            time_limit: None,
        }
    }

    /// A search for the computer side of `config`.
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            player: config.computer(),
            depth: config.search_depth,
            pruning: config.pruning,
            parallel: config.parallel,
            time_limit: config.time_limit,
        }
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// The player this search maximizes for.
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Search `board` with `to_move` to play, using the configured depth.
    pub fn search(&self, board: &Board, to_move: Player) -> SearchResult {
        self.search_to_depth(board, to_move, self.depth)
    }

    /// Search `board` with `to_move` to play, looking `depth` plies ahead.
    pub fn search_to_depth(&self, board: &Board, to_move: Player, depth: u8) -> SearchResult {
        let deadline = self.time_limit.map(|limit| Instant::now() + limit);
        let mut worker = Worker::new(self.player, self.pruning, deadline);
        worker.nodes += 1;

        let leaf = SearchResult {
            best_move: None,
            score: evaluate(board, self.player, !self.player),
            nodes: 1,
            timed_out: false,
        };
        if depth == 0 {
            return leaf;
        }

        let moves = movegen::legal_moves(board, to_move);
        if moves.is_empty() {
            return leaf;
        }

        let mut children: ArrayVec<[SearchNode; 64]> = moves
            .iter()
            .map(|mv| {
                let mut child = *board;
                apply_capture(&mut child, to_move, &mv);
                SearchNode {
                    board: child,
                    mv,
                    score: 0.0,
                }
            })
            .collect();

        if self.parallel && children.len() > 1 {
            self.score_in_parallel(&mut children, &mut worker, to_move, depth, deadline);
        } else {
            let (mut alpha, mut beta) = (-SCORE_BOUND, SCORE_BOUND);
            for node in children.iter_mut() {
                node.score = worker.value(&node.board, !to_move, depth - 1, alpha, beta);
                if self.pruning {
                    if to_move == self.player {
                        alpha = alpha.max(node.score);
                    } else {
                        beta = beta.min(node.score);
                    }
                }
            }
        }

        let maximizing = to_move == self.player;
        let mut best: Option<&SearchNode> = None;
        for node in children.iter() {
            let better = match best {
                None => true,
                Some(current) if maximizing => node.score > current.score,
                Some(current) => node.score < current.score,
            };
            if better {
                best = Some(node);
            }
        }

        let result = SearchResult {
            best_move: best.map(|node| node.mv.location),
            score: best.map_or(leaf.score, |node| node.score),
            nodes: worker.nodes,
            timed_out: worker.timed_out,
        };
        debug!(
            "depth {} search for {}: {} moves, best {:?} scoring {} ({} nodes{})",
            depth,
            to_move,
            children.len(),
            result.best_move.map(|loc| loc.to_string()),
            result.score,
            result.nodes,
            if result.timed_out { ", timed out" } else { "" },
        );
        result
    }

    /// Score each top-level move on its own thread. Scores land in generation order.
    fn score_in_parallel(
        &self,
        children: &mut [SearchNode],
        worker: &mut Worker,
        to_move: Player,
        depth: u8,
        deadline: Option<Instant>,
    ) {
        let (player, pruning) = (self.player, self.pruning);

        let scored: Vec<(f64, u64, bool)> = thread::scope(|scope| {
            let handles: Vec<_> = children
                .iter()
                .map(|node| {
                    let board = node.board;
                    scope.spawn(move || {
                        let mut branch = Worker::new(player, pruning, deadline);
                        let score =
                            branch.value(&board, !to_move, depth - 1, -SCORE_BOUND, SCORE_BOUND);
                        (score, branch.nodes, branch.timed_out)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|err| panic::resume_unwind(err)))
                .collect()
        });

        for (node, (score, nodes, timed_out)) in children.iter_mut().zip(scored) {
            node.score = score;
            worker.nodes += nodes;
            worker.timed_out |= timed_out;
        }
    }

    /// Pick the move to play in `game` for this search's player.
    /// Fails, and logs, if the search comes back without one of the game's legal moves.
    pub fn choose_move(&self, game: &Game) -> Result<Location, SearchExhaustedError> {
        let result = self.search(game.board(), self.player);
        let our_turn = game.to_move() == Some(self.player);
        match result.best_move {
            Some(loc) if our_turn && game.legal_moves().contains(loc) => Ok(loc),
            _ => {
                let err = SearchExhaustedError {
                    player: self.player,
                    depth: self.depth,
                };
                error!("{} (game status {:?})", err, game.status());
                Err(err)
            }
        }
    }
}

/// Per-search (or per-thread) counters and limits.
struct Worker {
    player: Player,
    pruning: bool,
    deadline: Option<Instant>,
    nodes: u64,
    timed_out: bool,
}

impl Worker {
    fn new(player: Player, pruning: bool, deadline: Option<Instant>) -> Self {
        Self {
            player,
            pruning,
            deadline,
            nodes: 0,
            timed_out: false,
        }
    }

    /// Check the deadline, remembering once it has passed.
    #[inline]
    fn out_of_time(&mut self) -> bool {
        if self.timed_out {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.timed_out = true;
            }
        }
        self.timed_out
    }

    /// Minimax value of a position below the root.
    fn value(
        &mut self,
        board: &Board,
        to_move: Player,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 || self.out_of_time() {
            return evaluate(board, self.player, !self.player);
        }

        let moves = movegen::legal_moves(board, to_move);
        if moves.is_empty() {
            return evaluate(board, self.player, !self.player);
        }

        let maximizing = to_move == self.player;
        let mut best = if maximizing { -SCORE_BOUND } else { SCORE_BOUND };

        for mv in moves.iter() {
            let mut child = *board;
            apply_capture(&mut child, to_move, &mv);
            let score = self.value(&child, !to_move, depth - 1, alpha, beta);

            if maximizing {
                if score > best {
                    best = score;
                }
                if self.pruning {
                    alpha = alpha.max(best);
                }
            } else {
                if score < best {
                    best = score;
                }
                if self.pruning {
                    beta = beta.min(best);
                }
            }

            if self.pruning && alpha >= beta {
                break;
            }
        }

        best
    }
}
