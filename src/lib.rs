//! Astro Strike - A starfield arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, per-tick step, collisions)
//! - `input`: Held-key sampling and fire-rate limiting
//! - `renderer`: Canvas-2D presentation (browser only)
//!
//! The simulation owns all mutable state and is advanced one tick per
//! animation frame by the host in `main.rs`; the renderer only reads.

pub mod input;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use input::{InputSampler, Key};

/// Game configuration constants
pub mod consts {
    /// Player ship dimensions (pixels)
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Horizontal player speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the viewport bottom to the player's top edge at spawn
    pub const PLAYER_BOTTOM_MARGIN: f32 = 100.0;

    /// Bullet dimensions
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    /// Upward bullet speed (pixels per tick)
    pub const BULLET_SPEED: f32 = 8.0;
    /// Minimum wall-clock interval between honored fire requests (ms)
    pub const FIRE_COOLDOWN_MS: f64 = 200.0;

    /// Enemy dimensions
    pub const ENEMY_WIDTH: f32 = 45.0;
    pub const ENEMY_HEIGHT: f32 = 45.0;
    /// Enemy descent speed band, uniform per spawn: [min, max)
    pub const ENEMY_MIN_SPEED: f32 = 2.0;
    pub const ENEMY_MAX_SPEED: f32 = 4.0;
    pub const ENEMY_START_HEALTH: i32 = 1;
    /// Score awarded per enemy destroyed by bullet damage
    pub const ENEMY_SCORE: u64 = 100;
    /// Independent Bernoulli trial per tick (~1.2 spawns/second at 60 Hz)
    pub const SPAWN_PROBABILITY: f64 = 0.02;

    /// Background starfield, seeded once per canvas and reused across matches
    pub const STAR_COUNT: usize = 100;
    /// Star size band: [0, max)
    pub const STAR_MAX_SIZE: f32 = 2.0;
    /// Star descent speed band: [min, max)
    pub const STAR_MIN_SPEED: f32 = 1.0;
    pub const STAR_MAX_SPEED: f32 = 3.0;

    /// Lives at match start
    pub const START_LIVES: i32 = 3;
}
