//! Game outcomes, match tallies and the saved match report

use serde::{Deserialize, Serialize};
use std::path::Path;

use draughts_core::Color;

/// How a single game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    /// Turn limit reached
    Draw,
    /// A human asked to leave
    Quit,
    /// A human asked to start over
    Replay,
}

impl GameOutcome {
    /// The side that has no legal turn loses
    pub fn stuck(color: Color) -> Self {
        match color {
            Color::White => GameOutcome::BlackWins,
            Color::Black => GameOutcome::WhiteWins,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::WhiteWins => Some(Color::White),
            GameOutcome::BlackWins => Some(Color::Black),
            _ => None,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(
            self,
            GameOutcome::WhiteWins | GameOutcome::BlackWins | GameOutcome::Draw
        )
    }

    pub fn describe(self) -> &'static str {
        match self {
            GameOutcome::WhiteWins => "white wins",
            GameOutcome::BlackWins => "black wins",
            GameOutcome::Draw => "draw",
            GameOutcome::Quit => "quit",
            GameOutcome::Replay => "replay",
        }
    }
}

/// Result of one game from a given engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn for_color(outcome: GameOutcome, color: Color) -> Self {
        match outcome.winner() {
            Some(w) if w == color => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game in a match report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub outcome: GameOutcome,
    pub turns: u32,
    /// Every turn in notation, e.g. `c3-d4` or `c3:e5:g7`
    pub moves: Vec<String>,
}

/// Complete match report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "{:<4} {:<20} {:<20} {:<12} {:>6}\n",
            "#", "White", "Black", "Outcome", "Turns"
        ));
        report.push_str(&"-".repeat(66));
        report.push('\n');
        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<4} {:<20} {:<20} {:<12} {:>6}\n",
                i + 1,
                game.white,
                game.black,
                game.outcome.describe(),
                game.turns
            ));
        }
        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
