//! Input event model
//!
//! The engine never blocks on input. A game polls its [`InputSource`] once per
//! frame and handles every event queued since the previous poll, in delivery order.

pub mod scripted;

pub use scripted::{ScriptedInput, ScriptError};

use serde::{Deserialize, Serialize};

/// Key codes the games care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// P key
    P,
    /// Escape key
    Escape,
    /// Any key without a binding
    Other,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close requested
    Closed,

    /// Key was pressed
    KeyPressed(KeyCode),

    /// Key was released
    KeyReleased(KeyCode),

    /// Mouse button was pressed
    MouseButtonPressed {
        /// The mouse button that was pressed
        button: MouseButton,
        /// Cursor X coordinate in surface pixels
        x: f32,
        /// Cursor Y coordinate in surface pixels
        y: f32,
    },
}

/// A non-blocking queue of input events
pub trait InputSource {
    /// Take the next pending event, if any
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Take every pending event in delivery order
    fn poll_all(&mut self) -> Vec<InputEvent> {
        std::iter::from_fn(|| self.poll_event()).collect()
    }
}

impl InputSource for std::collections::VecDeque<InputEvent> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pop_front()
    }
}
