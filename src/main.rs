//! BR!CK entry point
//!
//! Browser host on wasm32. Native builds run a headless autopilot game.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent, TouchEvent};

    use brick::platform::{InputAdapter, PointerEvent};
    use brick::renderer::RenderState;
    use brick::sim::{GameEvent, GamePhase, GameState, tick};
    use brick::ui::{self, MenuAction, Overlay, Screen};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputAdapter,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        screen: Screen,
        // Last HUD contents written to the DOM
        shown: Option<(GamePhase, u32, u8)>,
    }

    impl Game {
        fn new(seed: u64, canvas: HtmlCanvasElement) -> Self {
            Self {
                state: GameState::new(seed),
                input: InputAdapter::new(),
                render_state: None,
                canvas,
                screen: Screen::default(),
                shown: None,
            }
        }

        fn pointer(&mut self, event: PointerEvent) {
            let phase = self.state.phase;
            self.input.handle(event, phase);
        }

        /// One animation frame: apply resizes, run a single tick, draw
        fn frame(&mut self) {
            if let Some((width, height)) = self.input.take_resize() {
                self.apply_resize(width, height);
            }

            let input = self.input.take();
            if self.screen != Screen::Game {
                return;
            }

            for event in tick(&mut self.state, &input) {
                match event {
                    GameEvent::PhaseChanged { from, to } => {
                        log::debug!("Phase changed {:?} -> {:?}", from, to);
                    }
                    GameEvent::LifeLost { remaining } => {
                        log::info!("Life lost, {} remaining", remaining);
                    }
                    _ => {}
                }
            }

            self.render();
            self.update_hud();
        }

        fn apply_resize(&mut self, width: f32, height: f32) {
            self.state.resize(width, height);

            let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
            let pixel_w = (width as f64 * dpr).round().max(1.0) as u32;
            let pixel_h = (height as f64 * dpr).round().max(1.0) as u32;
            self.canvas.set_width(pixel_w);
            self.canvas.set_height(pixel_h);
            if let Some(render_state) = self.render_state.as_mut() {
                render_state.resize(pixel_w, pixel_h);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.state.snapshot();
            if let Some(render_state) = self.render_state.as_mut() {
                match render_state.render(&snapshot, &self.state.tuning) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD and overlay elements in the DOM
        fn update_hud(&mut self) {
            let current = (self.state.phase, self.state.score, self.state.lives);
            if self.shown == Some(current) {
                return;
            }
            self.shown = Some(current);

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let hud_hidden = !ui::hud_visible(self.state.phase);
            // Keeps its box so the play area doesn't change size
            for id in ["hud", "game-footer"] {
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.set_attribute("class", if hud_hidden { "invisible" } else { "" });
                }
            }
            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&ui::score_label(self.state.score)));
                let _ = el.set_attribute("aria-label", &ui::score_aria_label(self.state.score));
            }
            if let Some(el) = document.get_element_by_id("hud-lives") {
                el.set_text_content(Some(&ui::lives_label(self.state.lives)));
                let _ = el.set_attribute("aria-label", &ui::lives_aria_label(self.state.lives));
            }

            let overlay = Overlay::for_phase(
                self.state.phase,
                self.state.lives,
                self.state.tuning.initial_lives,
                self.state.score,
            );
            let Some(overlay_el) = document.get_element_by_id("overlay") else {
                return;
            };
            match overlay {
                Some(overlay) => {
                    set_hidden(&overlay_el, false);
                    if let Some(el) = document.get_element_by_id("overlay-title") {
                        el.set_text_content(Some(overlay.title));
                    }
                    if let Some(el) = document.get_element_by_id("overlay-prompt") {
                        el.set_text_content(Some(overlay.prompt));
                    }
                    let _ = overlay_el.set_attribute("aria-label", overlay.prompt);
                    if let Some(el) = document.get_element_by_id("overlay-score") {
                        match overlay.final_score {
                            Some(score) => {
                                el.set_text_content(Some(&ui::final_score_label(score)));
                                set_hidden(&el, false);
                            }
                            None => set_hidden(&el, true),
                        }
                    }
                }
                None => set_hidden(&overlay_el, true),
            }
        }

        fn navigate(&mut self, action: MenuAction) {
            let nav = self.screen.navigate(action);
            if let Some(message) = nav.message
                && let Some(window) = web_sys::window()
            {
                let _ = window.alert_with_message(message);
            }
            if nav.screen == self.screen {
                return;
            }
            log::info!("Screen {:?} -> {:?}", self.screen, nav.screen);
            self.screen = nav.screen;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            for (id, screen) in [
                ("menu", Screen::Menu),
                ("game", Screen::Game),
                ("levels", Screen::Levels),
            ] {
                if let Some(el) = document.get_element_by_id(id) {
                    set_hidden(&el, screen != self.screen);
                }
            }

            if nav.new_game {
                self.state.new_game();
            }
            if self.screen == Screen::Game {
                // The play area only has a size once it's visible
                if let Some((width, height)) = play_area_size(&document) {
                    self.pointer(PointerEvent::Resize { width, height });
                }
                self.shown = None;
            }
        }
    }

    fn set_hidden(el: &Element, hidden: bool) {
        let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
    }

    fn play_area_size(document: &Document) -> Option<(f32, f32)> {
        let rect = document
            .get_element_by_id("play-area")?
            .get_bounding_client_rect();
        Some((rect.width() as f32, rect.height() as f32))
    }

    /// Client x to play-area x
    fn play_area_x(document: &Document, client_x: i32) -> Option<f32> {
        let rect = document
            .get_element_by_id("play-area")?
            .get_bounding_client_rect();
        Some(client_x as f32 - rect.left() as f32)
    }

    pub async fn run() -> Result<(), JsValue> {
        log::info!("BR!CK starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        if let Some(el) = document.get_element_by_id("title") {
            el.set_text_content(Some(ui::TITLE));
        }
        if let Some(el) = document.get_element_by_id("levels-message") {
            el.set_text_content(Some(ui::LEVELS_MESSAGE));
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, canvas.clone())));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, canvas.width(), canvas.height())
                .await
                .map_err(|e| JsValue::from_str(&format!("Failed to create device: {e}")))?;
        game.borrow_mut().render_state = Some(render_state);

        if let Some(loading) = document.get_element_by_id("loading") {
            set_hidden(&loading, true);
        }

        setup_input_handlers(&document, game.clone());
        setup_menu_buttons(&document, game.clone());
        setup_resize(game.clone());

        request_animation_frame(game);

        log::info!("BR!CK running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Mouse move anywhere steers the paddle
        if let Some(window) = web_sys::window() {
            let game = game.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(x) = play_area_x(&document, event.client_x()) {
                    game.borrow_mut().pointer(PointerEvent::MouseMove { x });
                }
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click on the overlay launches or restarts
        if let Some(overlay) = document.get_element_by_id("overlay") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pointer(PointerEvent::Click);
            });
            let _ = overlay
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let Some(root) = document.get_element_by_id("play-area") else {
            log::warn!("No #play-area element, touch input disabled");
            return;
        };

        // Touch start (launch / resume)
        {
            let game = game.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0)
                    && let Some(x) = play_area_x(&document, touch.client_x())
                {
                    game.borrow_mut().pointer(PointerEvent::TouchStart { x });
                }
            });
            let _ = root
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0)
                    && let Some(x) = play_area_x(&document, touch.client_x())
                {
                    game.borrow_mut().pointer(PointerEvent::TouchMove { x });
                }
            });
            let _ = root
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Lifting the finger pauses
        for (name, event) in [
            ("touchend", PointerEvent::TouchEnd),
            ("touchcancel", PointerEvent::TouchCancel),
        ] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().pointer(event);
            });
            let _ = root.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_menu_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for (id, action) in [
            ("start-btn", MenuAction::Start),
            ("level-btn", MenuAction::Levels),
            ("exit-btn", MenuAction::Exit),
            ("back-btn", MenuAction::Back),
            ("levels-back-btn", MenuAction::Back),
        ] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                game.borrow_mut().navigate(action);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some((width, height)) = play_area_size(&document) {
                game.borrow_mut()
                    .pointer(PointerEvent::Resize { width, height });
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick::platform::{InputAdapter, PointerEvent};
    use brick::sim::{GameEvent, GameState, tick};

    const DEMO_TICKS: u64 = 20_000;

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);
    log::info!("BR!CK (native) headless demo, seed {}", seed);

    let mut state = GameState::new(seed);
    let mut input = InputAdapter::new();
    input.set_idle_mode(true);
    input.handle(
        PointerEvent::Resize {
            width: 800.0,
            height: 514.0,
        },
        state.phase,
    );

    let mut bricks = 0u32;
    let mut paddle_hits = 0u32;
    let mut frames = 0u64;
    while frames < DEMO_TICKS {
        if let Some((width, height)) = input.take_resize() {
            state.resize(width, height);
        }
        for event in tick(&mut state, &input.take()) {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks += 1,
                GameEvent::PaddleHit { .. } => paddle_hits += 1,
                _ => {}
            }
        }
        frames += 1;
        if state.phase.is_terminal() {
            break;
        }
    }

    log::info!(
        "Demo finished after {} frames: {:?}, score {}, lives {}, {} bricks destroyed, {} paddle hits, {} bricks left",
        frames,
        state.phase,
        state.score,
        state.lives,
        bricks,
        paddle_hits,
        state.bricks.remaining()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
