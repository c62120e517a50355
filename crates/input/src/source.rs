//! Input sources: where the game loop gets its one event per tick.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Result};
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::map_key;
use crate::types::InputEvent;

/// Most events buffered between polls. Anything beyond is dropped.
pub const PENDING_CAPACITY: usize = 8;

/// Produces one discrete event per poll.
pub trait InputSource {
    /// Wait at most `timeout` for an event; `InputEvent::None` if nothing arrived.
    fn poll(&mut self, timeout: Duration) -> Result<InputEvent>;
}

/// Terminal keyboard input via crossterm.
///
/// Everything that is already readable gets drained in one go, so a burst of key
/// presses is spread across the following ticks instead of stalling the loop.
#[derive(Debug, Default)]
pub struct CrosstermInput {
    pending: ArrayVec<InputEvent, PENDING_CAPACITY>,
    dropped: u64,
    resized: bool,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events lost to a full buffer so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// True once after the terminal reported a resize.
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    fn enqueue(&mut self, ev: InputEvent) {
        if ev == InputEvent::None {
            return;
        }
        if ev == InputEvent::Quit {
            // Quit must never be lost behind queued moves.
            self.pending.clear();
        }
        if self.pending.try_push(ev).is_err() {
            self.dropped += 1;
        }
    }

    fn drain_ready(&mut self) -> Result<()> {
        loop {
            match event::read()? {
                Event::Key(key) => self.enqueue(map_key(key)),
                Event::Resize(_, _) => self.resized = true,
                _ => {}
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }
}

impl InputSource for CrosstermInput {
    fn poll(&mut self, timeout: Duration) -> Result<InputEvent> {
        if let Some(ev) = self.pending.pop_at(0) {
            return Ok(ev);
        }
        if !event::poll(timeout)? {
            return Ok(InputEvent::None);
        }
        self.drain_ready()?;
        Ok(self.pending.pop_at(0).unwrap_or_default())
    }
}

/// Replays a fixed list of events, then yields `None` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Parse whitespace separated event names, e.g. `"start right right up quit"`.
    ///
    /// A name may carry a repeat count: `"none*12"`.
    pub fn parse(script: &str) -> Result<Self> {
        let mut events = VecDeque::new();
        for word in script.split_whitespace() {
            let (name, count) = match word.split_once('*') {
                Some((name, n)) => {
                    let count = n
                        .parse::<usize>()
                        .map_err(|_| anyhow!("script: invalid repeat count in {}", word))?;
                    (name, count)
                }
                None => (word, 1),
            };
            let ev: InputEvent = name.parse().map_err(|e| anyhow!("script: {}", e))?;
            events.extend(std::iter::repeat(ev).take(count));
        }
        Ok(Self { events })
    }

    pub fn push(&mut self, ev: InputEvent) {
        self.events.push_back(ev);
    }

    pub fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _timeout: Duration) -> Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or_default())
    }
}
