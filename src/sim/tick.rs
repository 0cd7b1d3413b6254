//! Per-frame simulation step
//!
//! One call advances the match by exactly one tick. Speeds are expressed in
//! pixels/tick; the host schedules ticks at the display refresh rate and no
//! drift correction is attempted.

use rand::Rng;

use super::collision::overlaps;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Movement flags for a single tick, sampled once from the input state
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left arrow currently held
    pub left: bool,
    /// Right arrow currently held
    pub right: bool,
}

/// Advance the game state by one tick
///
/// The step order is load-bearing for the lives/score bookkeeping: player
/// movement, stars, bullets, enemy resolution, spawn trial. Entity removal
/// happens exactly once per collection per tick, after all mutation, so a
/// deactivated entity is never visible to the renderer on a later tick.
///
/// A no-op unless the phase is `Playing`. The transition to `GameOver`
/// happens here, on the tick where lives reaches zero; the loop driver only
/// observes the phase.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let vw = state.viewport.x;
    let vh = state.viewport.y;

    // 1. Player movement, clamped to the viewport
    let max_x = vw - state.player.rect.size.x;
    if input.left && state.player.rect.pos.x > 0.0 {
        state.player.rect.pos.x = (state.player.rect.pos.x - state.player.speed).max(0.0);
    }
    if input.right && state.player.rect.pos.x < max_x {
        state.player.rect.pos.x = (state.player.rect.pos.x + state.player.speed).min(max_x);
    }

    // 2. Stars scroll down and wrap to the top at a fresh horizontal offset
    for star in &mut state.stars {
        star.pos.y += star.speed;
        if star.pos.y > vh {
            star.pos.y = 0.0;
            star.pos.x = state.rng.random_range(0.0..vw);
        }
    }

    // 3. Bullets travel up; cull the ones that fully left through the top
    for bullet in &mut state.bullets {
        bullet.rect.pos.y -= bullet.speed;
    }
    state
        .bullets
        .retain(|b| b.active && b.rect.pos.y > -b.rect.size.y);

    // 4. Enemies advance and resolve, one enemy at a time in list order.
    //    Outcomes land in the `active` flags; the lists are filtered once
    //    afterwards so the tie-breaks stay explicit.
    let GameState {
        player,
        bullets,
        enemies,
        score,
        lives,
        ..
    } = state;

    for enemy in enemies.iter_mut() {
        enemy.rect.pos.y += enemy.speed;

        // Breach: costs a life, no score, no collision checks
        if enemy.rect.pos.y > vh {
            enemy.active = false;
            *lives -= 1;
            continue;
        }

        // First hit wins: the bullet's flag drops before the next enemy is
        // examined, so one bullet never destroys two enemies in a tick.
        for bullet in bullets.iter_mut() {
            if bullet.active && overlaps(&bullet.rect, &enemy.rect) {
                bullet.active = false;
                enemy.health -= 1;
                if enemy.health <= 0 {
                    enemy.active = false;
                    *score += ENEMY_SCORE;
                    break;
                }
            }
        }

        // Ship contact costs a life regardless of remaining health
        if overlaps(&player.rect, &enemy.rect) {
            enemy.active = false;
            *lives -= 1;
        }
    }

    state
        .enemies
        .retain(|e| e.active && e.rect.pos.y < vh + e.rect.size.y);
    // Bullets spent on hits this tick leave the list this tick
    state.bullets.retain(|b| b.active);

    // 5. Spawn trial: independent Bernoulli draw every tick, not a timer
    if state.rng.random_bool(SPAWN_PROBABILITY) {
        state.spawn_enemy();
    }

    if state.lives <= 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
    }
}
