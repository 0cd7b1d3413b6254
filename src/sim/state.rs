//! Game state and core simulation types
//!
//! Everything the tick driver mutates lives here, behind one owner.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the start command
    Menu,
    /// Active gameplay
    Playing,
    /// Lives exhausted; score frozen until restart
    GameOver,
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner in viewport pixels
    pub pos: Vec2,
    /// Width/height, both strictly positive
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0, "degenerate rectangle");
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The player's ship
///
/// Exactly one exists for the lifetime of a match; it is repositioned on
/// (re)start, never removed.
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal speed in pixels/tick
    pub speed: f32,
}

impl Player {
    fn new(viewport: Vec2) -> Self {
        let mut player = Self {
            rect: Rect::new(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
        };
        player.reposition(viewport);
        player
    }

    /// Center horizontally, top edge `PLAYER_BOTTOM_MARGIN` above the bottom
    fn reposition(&mut self, viewport: Vec2) {
        self.rect.pos = Vec2::new(
            viewport.x / 2.0 - self.rect.size.x / 2.0,
            viewport.y - PLAYER_BOTTOM_MARGIN,
        );
    }
}

/// A player projectile, travelling straight up
#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    /// Upward speed in pixels/tick
    pub speed: f32,
    /// Cleared on impact; a cleared bullet is dropped within the same tick
    pub active: bool,
}

/// A descending enemy ship
#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    /// Downward speed in pixels/tick, randomized per spawn
    pub speed: f32,
    /// Cleared when destroyed or on player contact; dropped within the tick
    pub active: bool,
    /// Hits remaining before destruction
    pub health: i32,
}

/// A background star; decorative only, no gameplay interaction
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Downward speed in pixels/tick
    pub speed: f32,
}

/// Complete match state, owned exclusively by the tick driver
///
/// The renderer and HUD borrow it read-only between ticks.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Viewport dimensions in pixels, queried from the canvas at startup
    pub viewport: Vec2,
    pub phase: GamePhase,
    pub score: u64,
    /// Reaches 0 (or below) exactly when the match ends
    pub lives: i32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Fixed population, seeded once here and reused across matches
    pub stars: Vec<Star>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh state in the menu phase for the given viewport
    pub fn new(seed: u64, viewport: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random_range(0.0..viewport.x),
                    rng.random_range(0.0..viewport.y),
                ),
                size: rng.random_range(0.0..STAR_MAX_SIZE),
                speed: rng.random_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
            })
            .collect();

        Self {
            seed,
            viewport,
            phase: GamePhase::Menu,
            score: 0,
            lives: START_LIVES,
            time_ticks: 0,
            player: Player::new(viewport),
            bullets: Vec::new(),
            enemies: Vec::new(),
            stars,
            rng,
        }
    }

    /// Start (or restart) a match: full reset, then enter `Playing`
    ///
    /// Identical from `Menu` and from `GameOver`; the starfield is
    /// deliberately left alone.
    pub fn start(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.bullets.clear();
        self.enemies.clear();
        self.player.reposition(self.viewport);
        self.phase = GamePhase::Playing;
    }

    /// Spawn a bullet at the muzzle: horizontally centered on the player,
    /// at the player's top edge
    pub fn spawn_bullet(&mut self) {
        let muzzle_x = self.player.rect.pos.x + self.player.rect.size.x / 2.0 - BULLET_WIDTH / 2.0;
        self.bullets.push(Bullet {
            rect: Rect::new(muzzle_x, self.player.rect.pos.y, BULLET_WIDTH, BULLET_HEIGHT),
            speed: BULLET_SPEED,
            active: true,
        });
    }

    /// Spawn one enemy fully off-screen above the viewport at a uniformly
    /// random horizontal offset, with a per-spawn randomized descent speed
    pub fn spawn_enemy(&mut self) {
        let x = self.rng.random_range(0.0..self.viewport.x - ENEMY_WIDTH);
        let speed = self.rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
        self.enemies.push(Enemy {
            rect: Rect::new(x, -ENEMY_HEIGHT, ENEMY_WIDTH, ENEMY_HEIGHT),
            speed,
            active: true,
            health: ENEMY_START_HEALTH,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_new_state_is_menu_with_full_starfield() {
        let state = GameState::new(7, viewport());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.stars.len(), STAR_COUNT);
        for star in &state.stars {
            assert!(star.pos.x >= 0.0 && star.pos.x < 800.0);
            assert!(star.pos.y >= 0.0 && star.pos.y < 600.0);
            assert!(star.size < STAR_MAX_SIZE);
            assert!(star.speed >= STAR_MIN_SPEED && star.speed < STAR_MAX_SPEED);
        }
    }

    #[test]
    fn test_new_state_centers_player_near_bottom() {
        let state = GameState::new(7, viewport());
        assert_eq!(state.player.rect.pos.x, 400.0 - PLAYER_WIDTH / 2.0);
        assert_eq!(state.player.rect.pos.y, 600.0 - PLAYER_BOTTOM_MARGIN);
    }

    #[test]
    fn test_start_resets_match_but_not_stars() {
        let mut state = GameState::new(7, viewport());
        let star_positions: Vec<Vec2> = state.stars.iter().map(|s| s.pos).collect();

        // Dirty the state as if a match had been played
        state.score = 4200;
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        state.spawn_bullet();
        state.spawn_enemy();
        state.player.rect.pos.x = 0.0;

        state.start();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.rect.pos.x, 400.0 - PLAYER_WIDTH / 2.0);
        assert_eq!(state.stars.len(), STAR_COUNT);
        for (star, pos) in state.stars.iter().zip(&star_positions) {
            assert_eq!(star.pos, *pos);
        }
    }

    #[test]
    fn test_spawn_bullet_at_muzzle() {
        let mut state = GameState::new(7, viewport());
        state.spawn_bullet();

        let bullet = &state.bullets[0];
        let player = &state.player.rect;
        assert_eq!(
            bullet.rect.pos.x,
            player.pos.x + player.size.x / 2.0 - BULLET_WIDTH / 2.0
        );
        assert_eq!(bullet.rect.pos.y, player.pos.y);
        assert!(bullet.active);
        assert_eq!(bullet.speed, BULLET_SPEED);
    }

    #[test]
    fn test_spawn_enemy_within_policy_bounds() {
        let mut state = GameState::new(99, viewport());
        for _ in 0..200 {
            state.spawn_enemy();
        }
        for enemy in &state.enemies {
            assert!(enemy.rect.pos.x >= 0.0);
            assert!(enemy.rect.pos.x < 800.0 - ENEMY_WIDTH);
            assert_eq!(enemy.rect.pos.y, -ENEMY_HEIGHT);
            assert!(enemy.speed >= ENEMY_MIN_SPEED && enemy.speed < ENEMY_MAX_SPEED);
            assert_eq!(enemy.health, ENEMY_START_HEALTH);
            assert!(enemy.active);
        }
    }
}
