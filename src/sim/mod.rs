//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, speeds expressed in pixels/tick
//! - Seeded RNG only
//! - Stable iteration order (insertion order of the entity lists)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use state::{Bullet, Enemy, GamePhase, GameState, Player, Rect, Star};
pub use tick::{TickInput, tick};
