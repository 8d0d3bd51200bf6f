//! Road Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.
//! On the web this binds to the page's `gameCanvas`, `game-container`,
//! `score`, `highScore`, `finalScore`, `start-screen`, `game-over-screen`,
//! `startButton` and `restartButton` elements.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent, Window};

    use road_rush::platform::{FrameTicket, InputEvent, LocalStorageStore};
    use road_rush::renderer::{RenderState, scene};
    use road_rush::sim::{GameState, Playfield};
    use road_rush::ui::{Presenter, Snapshot};
    use road_rush::{Game, Tuning};

    type App = Game<LocalStorageStore, CanvasPresenter>;

    /// Draws frames with WebGPU and keeps the DOM overlays in sync
    struct CanvasPresenter {
        document: Document,
        render_state: Option<RenderState>,
        /// Score currently shown in the HUD
        shown_score: Option<u64>,
    }

    impl CanvasPresenter {
        fn new(document: Document) -> Self {
            Self {
                document,
                render_state: None,
                shown_score: None,
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_display(&self, id: &str, display: &str) {
            if let Some(el) = self
                .document
                .get_element_by_id(id)
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                let _ = el.style().set_property("display", display);
            }
        }

        fn show_high_score(&self, high_score: u64) {
            self.set_text("highScore", &format!("ハイスコア: {}", high_score));
        }

        fn show_score(&mut self, score: u64) {
            if self.shown_score != Some(score) {
                self.set_text("score", &format!("スコア: {}", score));
                self.shown_score = Some(score);
            }
        }
    }

    impl Presenter for CanvasPresenter {
        fn frame(&mut self, snapshot: &Snapshot) {
            self.show_score(snapshot.score);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&scene(snapshot)) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        render_state.resize(w, h, snapshot.playfield);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn session_started(&mut self, _restart: bool) {
            self.show_score(0);
            self.set_display("start-screen", "none");
            self.set_display("game-over-screen", "none");
        }

        fn game_over(&mut self, final_score: u64, high_score: u64) {
            self.show_high_score(high_score);
            self.set_text("finalScore", &format!("最終スコア: {}", final_score));
            self.set_display("game-over-screen", "flex");
        }
    }

    /// Size the canvas to its container; returns the playfield and the
    /// physical surface size
    fn fit_canvas(
        window: &Window,
        document: &Document,
        canvas: &HtmlCanvasElement,
    ) -> (Playfield, u32, u32) {
        let (w, h) = document
            .get_element_by_id("game-container")
            .map(|c| (c.client_width(), c.client_height()))
            .unwrap_or((canvas.client_width(), canvas.client_height()));
        let dpr = window.device_pixel_ratio();
        let width = (w as f64 * dpr) as u32;
        let height = (h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (Playfield::new(w as f32, h as f32), width, height)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Road Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (playfield, width, height) = fit_canvas(&window, &document, &canvas);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, playfield, Tuning::load());
        let presenter = CanvasPresenter::new(document.clone());
        let game = Rc::new(RefCell::new(Game::new(
            state,
            LocalStorageStore::new(),
            presenter,
        )));
        {
            let g = game.borrow();
            g.presenter().show_high_score(g.state().scores.high_score);
        }

        log::info!(
            "Game initialized with seed {} on {}x{} playfield",
            seed,
            playfield.width,
            playfield.height
        );

        // Input and buttons work even if WebGPU never comes up
        setup_input_handlers(&canvas, game.clone());
        setup_buttons(&document, game.clone());
        setup_resize(&canvas, game.clone());

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, playfield).await {
            Ok(render_state) => {
                game.borrow_mut().presenter_mut().render_state = Some(render_state);
                log::info!("Road Rush running!");
            }
            Err(e) => log::error!("Failed to create device: {}", e),
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Arrow keys
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = InputEvent::from_key(&event.key(), pressed) {
                    game.borrow_mut().handle_input(input);
                }
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch drag positions the car directly
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    game.borrow_mut()
                        .handle_input(InputEvent::PointerMove { x });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Lifting the finger leaves the car where it is
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().handle_input(InputEvent::PointerRelease);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<App>>) {
        for id in ["startButton", "restartButton"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    start_session(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let (playfield, width, height) = fit_canvas(&window, &document, &canvas);
            let mut g = game.borrow_mut();
            g.resize(playfield);
            if let Some(ref mut render_state) = g.presenter_mut().render_state {
                render_state.resize(width, height, playfield);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_session(game: &Rc<RefCell<App>>) {
        let ticket = game.borrow_mut().start();
        if let Some(ticket) = ticket {
            request_animation_frame(game.clone(), ticket);
        }
    }

    fn request_animation_frame(game: Rc<RefCell<App>>, ticket: FrameTicket) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game, ticket);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<App>>, ticket: FrameTicket) {
        let keep_going = game.borrow_mut().frame(ticket);
        if keep_going {
            request_animation_frame(game, ticket);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use road_rush::persistence::MemoryStore;
    use road_rush::platform::{Direction, InputEvent};
    use road_rush::sim::{GameState, Playfield};
    use road_rush::ui::{Presenter, Snapshot};
    use road_rush::{Game, Tuning};

    /// Safety cap: two minutes of play at 60 Hz
    const MAX_FRAMES: u32 = 60 * 120;

    /// Logs session events instead of drawing
    #[derive(Default)]
    struct LogPresenter {
        frames: u64,
    }

    impl Presenter for LogPresenter {
        fn frame(&mut self, snapshot: &Snapshot) {
            self.frames += 1;
            if self.frames % 600 == 0 {
                log::info!(
                    "frame {}: score {}, {} obstacles on road",
                    self.frames,
                    snapshot.score,
                    snapshot.obstacles.len()
                );
            }
        }

        fn session_started(&mut self, restart: bool) {
            log::info!("session started (restart: {})", restart);
        }

        fn game_over(&mut self, final_score: u64, high_score: u64) {
            println!("Game over! Final score {} (high score {})", final_score, high_score);
        }
    }

    /// Steer toward the lane whose nearest oncoming car is farthest away
    fn autopilot(state: &GameState) -> InputEvent {
        let lanes = state.tuning.lane_count;
        let lane_width = state.playfield.lane_width(lanes);
        let player = &state.player.rect;

        let clearance = |lane: u32| {
            state
                .obstacles
                .iter()
                .filter(|o| o.lane == lane && o.rect.y() < player.bottom())
                .map(|o| player.y() - o.rect.bottom())
                .fold(f32::INFINITY, f32::min)
        };
        let best = (0..lanes)
            .max_by(|a, b| clearance(*a).total_cmp(&clearance(*b)))
            .unwrap_or(0);

        let target = (best as f32 + 0.5) * lane_width;
        let center = player.center().x;
        if center < target - state.player.speed {
            InputEvent::Press(Direction::Right)
        } else if center > target + state.player.speed {
            InputEvent::Press(Direction::Left)
        } else {
            InputEvent::Release(Direction::Right)
        }
    }

    pub fn run() {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let state = GameState::new(seed, Playfield::new(400.0, 700.0), Tuning::load());
        let mut game = Game::new(state, MemoryStore::new(), LogPresenter::default());

        let Some(ticket) = game.start() else {
            return;
        };
        let mut frames = 0;
        while frames < MAX_FRAMES && game.frame(ticket) {
            let steer = autopilot(game.state());
            game.handle_input(steer);
            frames += 1;
        }

        if frames == MAX_FRAMES {
            println!(
                "Autopilot survived {} frames with score {}",
                frames,
                game.state().scores.score
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Road Rush (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
