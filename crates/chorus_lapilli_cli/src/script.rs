//! TOML action scripts.
//!
//! ```toml
//! [[actions]]
//! cell = 4
//!
//! [[actions]]
//! jump = 0
//! ```

use chorus_lapilli::MatchState;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One scripted front-end input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptAction {
    /// Click on a cell (0-8).
    Cell {
        /// Cell index.
        cell: usize,
    },
    /// Jump to a history step.
    Jump {
        /// Step index.
        jump: usize,
    },
}

impl ScriptAction {
    /// Applies this action to `state`.
    pub fn apply(self, state: &MatchState) -> MatchState {
        match self {
            ScriptAction::Cell { cell } => state.apply_cell_action(cell),
            ScriptAction::Jump { jump } => state.jump_to_step(jump),
        }
    }
}

/// An ordered list of actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Script {
    /// Actions in application order.
    #[serde(default)]
    actions: Vec<ScriptAction>,
}

impl Script {
    /// Creates a script from actions.
    pub fn new(actions: Vec<ScriptAction>) -> Self {
        Self { actions }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script file: {}", e)))?;
        Self::parse(&content)
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        info!(actions = script.actions.len(), "Script loaded");
        Ok(script)
    }

    /// Runs every action from a fresh match.
    #[instrument(skip(self), fields(actions = self.actions.len()))]
    pub fn run(&self) -> MatchState {
        self.actions
            .iter()
            .fold(MatchState::new(), |state, action| action.apply(&state))
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
