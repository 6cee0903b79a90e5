//! Frame-indexed input script
//!
//! Replays recorded events for headless runs and tests. Each exhausted poll cycle
//! (a `poll_event` call that returns `None`) advances the script by one frame.

use super::{InputEvent, InputSource};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One scripted event and the frame it is delivered on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    /// Zero-based frame index
    pub frame: u64,
    /// Event to deliver
    pub event: InputEvent,
}

/// Errors loading an input script
#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Script parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Input source that replays a script
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<ScriptedEvent>,
    cursor: usize,
    frame: u64,
}

impl ScriptedInput {
    /// Create a script; events are ordered by frame, ties keep their given order
    pub fn new(mut script: Vec<ScriptedEvent>) -> Self {
        script.sort_by_key(|e| e.frame);
        Self {
            script,
            cursor: 0,
            frame: 0,
        }
    }

    /// A script with no events
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a script from RON, e.g. `[(frame: 3, event: KeyPressed(W))]`
    pub fn from_ron_str(contents: &str) -> Result<Self, ScriptError> {
        let script: Vec<ScriptedEvent> = ron::from_str(contents)?;
        Ok(Self::new(script))
    }

    /// Load a RON script from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Add an event delivered on `frame` (builder pattern)
    #[must_use]
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.script.push(ScriptedEvent { frame, event });
        self.script[self.cursor..].sort_by_key(|e| e.frame);
        self
    }

    /// Frame the script is currently delivering
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether every scripted event has been delivered
    pub fn finished(&self) -> bool {
        self.cursor >= self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        match self.script.get(self.cursor) {
            Some(next) if next.frame <= self.frame => {
                self.cursor += 1;
                Some(next.event)
            }
            _ => {
                self.frame += 1;
                None
            }
        }
    }
}
