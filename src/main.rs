//! Astro Strike entry point
//!
//! Handles platform-specific initialization and drives the tick loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use astro_strike::input::{InputSampler, Key};
    use astro_strike::renderer::CanvasPainter;
    use astro_strike::sim::{GamePhase, GameState, tick};

    /// Game instance holding all state
    ///
    /// Owned by a single `Rc<RefCell<_>>` shared between the frame callback
    /// and the event listener closures; every borrow is short-lived and the
    /// browser delivers events between frames, so a tick is never observed
    /// half-updated.
    struct Game {
        state: GameState,
        sampler: InputSampler,
        painter: Option<CanvasPainter>,
        /// Pending animation-frame handle; `Some` only while a tick is scheduled
        raf_handle: Option<i32>,
    }

    impl Game {
        fn new(seed: u64, viewport: Vec2, painter: Option<CanvasPainter>) -> Self {
            Self {
                state: GameState::new(seed, viewport),
                sampler: InputSampler::new(),
                painter,
                raf_handle: None,
            }
        }

        /// Draw the post-tick state; a no-op without a mounted surface
        fn render(&self) {
            if let Some(ref painter) = self.painter {
                painter.draw(&self.state);
            }
        }

        /// Push score/lives into the HUD and toggle the phase overlays
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.query_selector("#hud-lives .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.lives.max(0).to_string()));
            }

            if let Some(el) = document.get_element_by_id("menu") {
                let class = if self.state.phase == GamePhase::Menu {
                    ""
                } else {
                    "hidden"
                };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    /// Schedule the next tick and remember the handle for cancellation
    fn schedule_tick(game: &Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let game_ref = game.clone();
        let closure = Closure::once(move |_time: f64| {
            run_tick(game_ref);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => game.borrow_mut().raf_handle = Some(handle),
            Err(_) => log::warn!("failed to schedule a tick"),
        }
        closure.forget();
    }

    /// Cancel a pending tick, if any; a no-op during teardown races
    fn cancel_pending_tick(game: &Rc<RefCell<Game>>) {
        if let Some(handle) = game.borrow_mut().raf_handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }

    /// One frame: advance the simulation, then draw and refresh the HUD
    /// from the completed state. The loop is self-terminating — it only
    /// reschedules while the match is still in `Playing`.
    fn run_tick(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.raf_handle = None;
            let input = g.sampler.sample();
            tick(&mut g.state, &input);
            g.render();
            g.update_hud();
        }

        if game.borrow().state.phase == GamePhase::Playing {
            schedule_tick(&game);
        } else {
            log::info!("tick loop halted");
        }
    }

    /// Start or restart a match; identical reset from the menu and from
    /// the game-over screen
    fn start_match(game: &Rc<RefCell<Game>>) {
        if game.borrow().state.phase == GamePhase::Playing {
            return;
        }
        cancel_pending_tick(game);
        {
            let mut g = game.borrow_mut();
            g.state.start();
            g.update_hud();
        }
        log::info!("match started");
        schedule_tick(game);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Strike starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Size the canvas to the window once; resize handling beyond the
        // initial sizing is out of scope
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);

        let canvas: Option<HtmlCanvasElement> = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

        let painter = match canvas {
            Some(ref canvas) => {
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                CanvasPainter::new(canvas)
            }
            None => None,
        };
        if painter.is_none() {
            // The simulation still ticks; draws become no-ops
            log::warn!("no drawing surface found");
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            Vec2::new(width as f32, height as f32),
            painter,
        )));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_menu_buttons(game.clone());
        setup_teardown(game.clone());

        // Show the menu overlay; the loop starts on the start command
        game.borrow().update_hud();

        log::info!("Astro Strike at menu");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down: held-state update, plus the edge-triggered fire path.
        // The bullet is created at request time, at the player's muzzle.
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let Some(key) = Key::from_event_key(&event.key()) else {
                    return;
                };
                let mut g = game.borrow_mut();
                g.sampler.press(key);
                if key == Key::Fire && g.state.phase == GamePhase::Playing {
                    event.prevent_default();
                    if g.sampler.request_fire(js_sys::Date::now()) {
                        g.state.spawn_bullet();
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: held-state update only
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = Key::from_event_key(&event.key()) {
                    game.borrow_mut().sampler.release(key);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_menu_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_match(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_match(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Cancel any scheduled tick when the hosting page goes away
    fn setup_teardown(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            cancel_pending_tick(&game);
            log::info!("page hidden, tick loop cancelled");
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Astro Strike (native) starting...");
    log::info!("The game targets the browser - build with trunk/wasm-pack for the web version");

    // Headless smoke run of the simulation
    println!("\nRunning headless simulation...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use astro_strike::sim::{GamePhase, GameState, TickInput, tick};
    use glam::Vec2;

    let mut state = GameState::new(42, Vec2::new(800.0, 600.0));
    state.start();

    let mut ticks = 0u32;
    while state.phase == GamePhase::Playing && ticks < 36_000 {
        tick(&mut state, &TickInput::default());
        ticks += 1;
    }

    println!(
        "✓ Simulated {} ticks (score {}, lives {})",
        ticks, state.score, state.lives
    );
}
