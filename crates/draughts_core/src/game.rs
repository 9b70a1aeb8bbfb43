//! Authoritative game state with undo history.

use crate::{
    board::Board,
    movegen::{legal_moves, legal_moves_from, MoveSet},
    types::{Color, Move},
};

/// A board snapshot taken before a step was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Snapshot {
    board: Board,
    /// True when the step continued a capture chain.
    continuation: bool,
}

/// The real board a game is played on.
///
/// Every applied step pushes the previous board, so whole turns (including
/// capture chains) can be taken back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    history: Vec<Snapshot>,
    /// Captures made so far in the turn being played.
    chain_len: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::from_board(Board::startpos())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
            chain_len: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of applied steps that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn chain_len(&self) -> u32 {
        self.chain_len
    }

    pub fn legal_moves(&self, color: Color) -> MoveSet {
        legal_moves(&self.board, color)
    }

    /// Further captures available to the piece that just captured, if the
    /// turn is mid-chain.
    pub fn chain_continuations(&self, last: Move) -> Option<MoveSet> {
        if !last.is_capture() {
            return None;
        }
        let set = legal_moves_from(&self.board, last.to);
        set.has_captures.then_some(set)
    }

    /// Apply one step of the current turn.
    pub fn apply_move(&mut self, mv: Move) {
        let continuation = self.chain_len > 0;
        assert!(
            !continuation || mv.is_capture(),
            "a capture chain can only continue with a capture"
        );
        self.history.push(Snapshot {
            board: self.board,
            continuation,
        });
        self.board.apply(mv);
        if mv.is_capture() {
            self.chain_len += 1;
        }
    }

    /// Mark the current turn as complete; the next step starts a new turn.
    pub fn end_turn(&mut self) {
        self.chain_len = 0;
    }

    /// Apply a full turn as produced by the search.
    pub fn apply_turn(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(mv);
        }
        self.end_turn();
    }

    /// Revert the last complete turn, or the partial turn in progress.
    /// Returns false when there is nothing to undo.
    pub fn undo_turn(&mut self) -> bool {
        let mut undone = false;
        while let Some(snap) = self.history.pop() {
            self.board = snap.board;
            undone = true;
            if !snap.continuation {
                break;
            }
        }
        self.chain_len = 0;
        undone
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
