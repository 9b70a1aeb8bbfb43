//! Knobs that shape a bot turn.
//!
//! Values come from the settings layer and are read once when a search starts.

use std::time::{SystemTime, UNIX_EPOCH};

/// How leaf positions are scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoringMode {
    /// Men count 1, kings count 4.
    #[default]
    PlainCount,
    /// Men earn an advancement bonus, kings count 5.
    NumberAndPotential,
}

impl ScoringMode {
    /// Settings name; anything but `NumberAndPotential` is a plain count.
    pub fn from_setting(name: &str) -> Self {
        if name == "NumberAndPotential" {
            ScoringMode::NumberAndPotential
        } else {
            ScoringMode::PlainCount
        }
    }
}

/// Alpha-beta pruning level, named after the `O0`/`O1`/`O2` settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum PruningLevel {
    /// Plain minimax.
    None,
    #[default]
    Basic,
    Aggressive,
}

impl PruningLevel {
    pub fn from_setting(name: &str) -> Self {
        match name {
            "O0" => PruningLevel::None,
            "O1" => PruningLevel::Basic,
            _ => PruningLevel::Aggressive,
        }
    }

    pub fn enabled(self) -> bool {
        self > PruningLevel::None
    }
}

/// Where the move-order shuffle gets its seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Seed 0: identical settings replay identical games.
    Fixed,
    /// Seed from the wall clock.
    #[default]
    TimeBased,
}

impl SeedPolicy {
    pub fn from_no_random(no_random: bool) -> Self {
        if no_random {
            SeedPolicy::Fixed
        } else {
            SeedPolicy::TimeBased
        }
    }

    pub fn seed(self) -> u64 {
        match self {
            SeedPolicy::Fixed => 0,
            SeedPolicy::TimeBased => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
        }
    }
}

/// Everything a search needs besides the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched after the root turn.
    pub max_depth: u32,
    pub scoring: ScoringMode,
    pub pruning: PruningLevel,
    pub seed: SeedPolicy,
}

impl SearchConfig {
    pub fn depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_pruning(mut self, pruning: PruningLevel) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            scoring: ScoringMode::default(),
            pruning: PruningLevel::default(),
            seed: SeedPolicy::default(),
        }
    }
}
