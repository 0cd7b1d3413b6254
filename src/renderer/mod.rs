//! Canvas-2D presentation layer
//!
//! A read-only consumer of the simulation state: after each tick the host
//! hands the painter a borrowed snapshot and it redraws the whole frame.
//! Inactive entities are skipped so drawing never depends on filter order.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::GameState;

const BACKDROP: &str = "#0a0e27";
const SHIP_BODY: &str = "#a855f7";
const ENGINE_GLOW: &str = "#06b6d4";
const BULLET_COLOR: &str = "#06b6d4";
const ENEMY_COLOR: &str = "#ef4444";

/// Owns the 2D context of the hosting canvas
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// `None` when the 2D context is unavailable (surface not mounted or
    /// already torn down); the caller then treats drawing as a no-op.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    /// Redraw one frame from the post-tick state
    pub fn draw(&self, state: &GameState) {
        let ctx = &self.ctx;
        let (vw, vh) = (state.viewport.x as f64, state.viewport.y as f64);

        ctx.set_fill_style_str(BACKDROP);
        ctx.fill_rect(0.0, 0.0, vw, vh);

        // Twinkling starfield; the flicker is presentation-only randomness
        // and never feeds back into the simulation
        for star in &state.stars {
            let alpha = 0.5 + js_sys::Math::random() * 0.5;
            ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {alpha})"));
            ctx.fill_rect(
                star.pos.x as f64,
                star.pos.y as f64,
                star.size as f64,
                star.size as f64,
            );
        }

        self.draw_player(state);

        ctx.set_fill_style_str(BULLET_COLOR);
        ctx.set_shadow_blur(10.0);
        ctx.set_shadow_color(BULLET_COLOR);
        for bullet in &state.bullets {
            if bullet.active {
                ctx.fill_rect(
                    bullet.rect.pos.x as f64,
                    bullet.rect.pos.y as f64,
                    bullet.rect.size.x as f64,
                    bullet.rect.size.y as f64,
                );
            }
        }

        ctx.set_fill_style_str(ENEMY_COLOR);
        ctx.set_shadow_blur(15.0);
        ctx.set_shadow_color(ENEMY_COLOR);
        for enemy in &state.enemies {
            if !enemy.active {
                continue;
            }
            // Inverted triangle: apex at the bottom center
            let r = &enemy.rect;
            let (x, y) = (r.pos.x as f64, r.pos.y as f64);
            let (w, h) = (r.size.x as f64, r.size.y as f64);
            ctx.begin_path();
            ctx.move_to(x + w / 2.0, y + h);
            ctx.line_to(x, y);
            ctx.line_to(x + w, y);
            ctx.close_path();
            ctx.fill();
        }

        ctx.set_shadow_blur(0.0);
    }

    fn draw_player(&self, state: &GameState) {
        let ctx = &self.ctx;
        let r = &state.player.rect;
        let (x, y) = (r.pos.x as f64, r.pos.y as f64);
        let (w, h) = (r.size.x as f64, r.size.y as f64);
        let cx = x + w / 2.0;

        // Hull: triangle pointing up
        ctx.set_fill_style_str(SHIP_BODY);
        ctx.set_shadow_blur(20.0);
        ctx.set_shadow_color(SHIP_BODY);
        ctx.begin_path();
        ctx.move_to(cx, y);
        ctx.line_to(x, y + h);
        ctx.line_to(x + w, y + h);
        ctx.close_path();
        ctx.fill();

        // Engine glow at the tail
        ctx.set_fill_style_str(ENGINE_GLOW);
        ctx.set_shadow_color(ENGINE_GLOW);
        ctx.fill_rect(cx - 5.0, y + h - 5.0, 10.0, 8.0);
    }
}
