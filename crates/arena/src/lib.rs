//! Game runner for ML-draughts
//!
//! This crate provides:
//! - The turn loop for human and bot players (undo, replay, quit)
//! - Settings files in the classic `settings.json` layout (or TOML)
//! - Bot-vs-bot matches with JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Play against the bot configured in settings.json
//! cargo run -p draughts_arena -- play --settings settings.json
//!
//! # Run a match between two bots
//! cargo run -p draughts_arena -- match minimax:5 random --games 20
//! ```

mod console;
mod frontend;
mod match_runner;
mod results;
mod settings;

pub use console::*;
pub use frontend::*;
pub use match_runner::*;
pub use results::*;
pub use settings::*;
