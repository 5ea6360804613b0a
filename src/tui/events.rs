//! Event handling for the TUI.
//!
//! Polls crossterm for keyboard and resize events, producing a tick when the
//! poll interval passes without input.

use crate::error::{ConsoleError, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// The poll interval elapsed.
    Tick,
}

/// Handles terminal events.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates an event handler polling every `tick_rate`.
    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits up to one tick for the next event.
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)
            .map_err(|e| ConsoleError::internal(format!("Failed to poll events: {e}")))?
        {
            return Ok(Event::Tick);
        }

        let event = event::read()
            .map_err(|e| ConsoleError::internal(format!("Failed to read event: {e}")))?;

        Ok(match event {
            CrosstermEvent::Key(key) => Event::Key(key),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        })
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::with_tick_rate(Duration::from_millis(100))
    }
}
