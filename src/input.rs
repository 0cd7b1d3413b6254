//! Held-key sampling and fire-rate limiting
//!
//! The host delivers key press/release notifications asynchronously; the
//! simulation consumes the held state exactly once per tick. Fire is
//! edge-triggered from the press notification itself and debounced against
//! a monotonic wall clock, so holding the key cannot stream bullets faster
//! than the cooldown allows.

use crate::consts::FIRE_COOLDOWN_MS;
use crate::sim::TickInput;

/// Keys the game recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
}

impl Key {
    /// Map a browser `KeyboardEvent.key` identifier; anything else is ignored
    pub fn from_event_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Point-in-time input state, updated by key events, read at tick boundaries
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    left: bool,
    right: bool,
    fire: bool,
    /// Wall-clock ms of the last honored fire request
    last_fire_ms: Option<f64>,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.set_held(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set_held(key, false);
    }

    fn set_held(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Fire => self.fire = held,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Fire => self.fire,
        }
    }

    /// Ask to fire at wall-clock time `now_ms`
    ///
    /// Honored only if at least `FIRE_COOLDOWN_MS` elapsed since the last
    /// honored request; otherwise silently dropped. This is a debounce, not
    /// a queue — a dropped request never fires later.
    pub fn request_fire(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_fire_ms {
            if now_ms - last < FIRE_COOLDOWN_MS {
                return false;
            }
        }
        self.last_fire_ms = Some(now_ms);
        true
    }

    /// Snapshot the held movement keys for one simulation tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}
