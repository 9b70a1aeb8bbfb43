//! What the game runner needs from the outside world: human commands in,
//! board updates out.

use draughts_core::{Board, Color, Move, Square};

use crate::results::GameOutcome;

/// A single human action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a cell: first the piece, then its destination
    Cell(Square),
    /// Take back the last turn (or the capture chain in progress)
    Undo,
    /// Abandon this game and start a new one
    Replay,
    Quit,
}

pub trait Frontend {
    /// Next command from the human playing `color`.
    ///
    /// `hints` are the cells that would currently be accepted: movable pieces
    /// before a selection, destinations after one.
    fn command(&mut self, board: &Board, color: Color, hints: &[Square]) -> Command;

    /// Called after every completed turn.
    fn show_turn(&mut self, _board: &Board, _color: Color, _turn: &[Move]) {}

    /// Called once when the game ends.
    fn show_result(&mut self, _board: &Board, _outcome: GameOutcome) {}
}

/// Frontend for bot-only games. Never expected to be asked for a command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Frontend for Headless {
    fn command(&mut self, _board: &Board, _color: Color, _hints: &[Square]) -> Command {
        Command::Quit
    }
}

/// Frontend replaying a fixed list of commands; quits once it runs dry.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    commands: std::collections::VecDeque<Command>,
    pub turns_shown: usize,
}

impl Scripted {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            turns_shown: 0,
        }
    }
}

impl Frontend for Scripted {
    fn command(&mut self, _board: &Board, _color: Color, _hints: &[Square]) -> Command {
        self.commands.pop_front().unwrap_or(Command::Quit)
    }

    fn show_turn(&mut self, _board: &Board, _color: Color, _turn: &[Move]) {
        self.turns_shown += 1;
    }
}
