//! Quantum Catcher entry point
//!
//! On wasm32 this mounts the DOM front end and drives it from
//! `requestAnimationFrame`. Natively it plays one scripted round headlessly.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Event, HtmlElement, PageTransitionEvent, Window};

    use quantum_catcher::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
    use quantum_catcher::platform::web::{AnimationFrame, EventListener};
    use quantum_catcher::renderer::dom::{DomView, particle_id_from_event};
    use quantum_catcher::sim::{GameInput, GameState, Viewport};
    use quantum_catcher::{GameLoop, Settings};

    /// Everything the page holds for the lifetime of the game
    struct App {
        game: GameLoop,
        view: DomView,
        window: Window,
        /// Reused for every animation frame request
        frame_callback: Option<Closure<dyn FnMut(f64)>>,
        pending_frame: Option<AnimationFrame>,
        listeners: Vec<EventListener>,
    }

    type SharedApp = Rc<RefCell<App>>;

    impl App {
        fn dispatch(&mut self, input: GameInput) {
            if self.game.handle(input) {
                self.schedule_frame();
                self.render();
            }
        }

        /// Request the next frame if the round wants one and none is pending
        fn schedule_frame(&mut self) {
            if !self.game.wants_frame() || self.pending_frame.is_some() {
                return;
            }
            if let Some(callback) = &self.frame_callback {
                match AnimationFrame::request(&self.window, callback) {
                    Ok(frame) => self.pending_frame = Some(frame),
                    Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }

        fn on_frame(&mut self, time: f64) {
            // The request that brought us here has fired
            self.pending_frame = None;

            let report = self.game.frame(time);
            if let Some(score) = report.round_over {
                log::info!("Round over with {} points", score);
            }
            self.render();
            self.schedule_frame();
        }

        fn render(&mut self) {
            let frame = self.game.render_frame();
            if let Err(e) = self.view.render(&frame) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Page went into the back/forward cache: stop frames, keep the DOM
        fn suspend(&mut self) {
            self.pending_frame = None;
            self.game.suspend();
            log::info!("Quantum Catcher suspended");
        }

        /// Page came back from the back/forward cache
        fn resume(&mut self) {
            self.game.suspend();
            self.schedule_frame();
            self.render();
            log::info!("Quantum Catcher resumed");
        }

        /// Release every callback and remove the game's DOM
        fn teardown(&mut self) {
            self.pending_frame = None;
            self.listeners.clear();
            self.frame_callback = None;
            self.view.detach();
            log::info!("Quantum Catcher torn down");
        }
    }

    fn viewport_of(window: &Window) -> Viewport {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_VIEWPORT_HEIGHT as f64);
        Viewport::new(width as f32, height as f32)
    }

    fn is_persisted(event: &Event) -> bool {
        event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(|e| e.persisted())
    }

    fn on_click(
        app: &SharedApp,
        element: &HtmlElement,
        input: GameInput,
    ) -> Result<EventListener, JsValue> {
        let app = app.clone();
        EventListener::new(element, "click", move |_event: Event| {
            app.borrow_mut().dispatch(input);
        })
    }

    fn setup_input_handlers(app: &SharedApp, window: &Window) -> Result<Vec<EventListener>, JsValue> {
        let (difficulty_buttons, start, play_again, layer) = {
            let a = app.borrow();
            (
                a.view.difficulty_buttons().to_vec(),
                a.view.start_button().clone(),
                a.view.play_again_button().clone(),
                a.view.particle_layer().clone(),
            )
        };

        let mut listeners = Vec::new();

        for (difficulty, button) in &difficulty_buttons {
            listeners.push(on_click(
                app,
                button,
                GameInput::SelectDifficulty(*difficulty),
            )?);
        }
        listeners.push(on_click(app, &start, GameInput::StartRound)?);
        listeners.push(on_click(app, &play_again, GameInput::PlayAgain)?);

        // One delegated handler for every particle
        {
            let app = app.clone();
            listeners.push(EventListener::new(&layer, "click", move |event: Event| {
                if let Some(id) = particle_id_from_event(&event) {
                    app.borrow_mut().dispatch(GameInput::Capture { id });
                }
            })?);
        }

        // Registered once for the lifetime of the game
        {
            let app = app.clone();
            let window_clone = window.clone();
            listeners.push(EventListener::new(window, "resize", move |_event: Event| {
                let vp = viewport_of(&window_clone);
                app.borrow_mut().dispatch(GameInput::Resize {
                    width: vp.width,
                    height: vp.height,
                });
            })?);
        }

        Ok(listeners)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Quantum Catcher starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = GameLoop::new(GameState::new(seed, viewport_of(&window), settings));
        let view = DomView::new(&document)?;

        log::info!("Game initialized with seed: {}", seed);

        let app: SharedApp = Rc::new(RefCell::new(App {
            game,
            view,
            window: window.clone(),
            frame_callback: None,
            pending_frame: None,
            listeners: Vec::new(),
        }));

        {
            let app_clone = app.clone();
            let callback = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                app_clone.borrow_mut().on_frame(time);
            });
            app.borrow_mut().frame_callback = Some(callback);
        }

        let listeners = setup_input_handlers(&app, &window)?;
        app.borrow_mut().listeners = listeners;

        // Restored from the back/forward cache after a persisted pagehide
        {
            let app_clone = app.clone();
            let listener = EventListener::new(&window, "pageshow", move |event: Event| {
                if is_persisted(&event) {
                    app_clone.borrow_mut().resume();
                }
            })?;
            app.borrow_mut().listeners.push(listener);
        }

        // A persisted page may come back, so only pause it; otherwise drop
        // every handle so nothing keeps firing
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                if is_persisted(&event) {
                    app.borrow_mut().suspend();
                } else {
                    app.borrow_mut().teardown();
                }
            });
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        app.borrow_mut().render();

        log::info!("Quantum Catcher running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use quantum_catcher::sim::{Difficulty, GameInput, GameState, Viewport};
    use quantum_catcher::{GameLoop, Settings};

    /// Simulated frame length (60 fps)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// The scripted player catches something every this many frames
    const CATCH_EVERY: u64 = 20;
    const DEFAULT_SEED: u64 = 0x5EED;

    /// `quantum-catcher [easy|medium|hard] [settings.json] [seed]`
    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let mut args = std::env::args().skip(1);

        let difficulty = match args.next() {
            Some(s) => Difficulty::from_str(&s)
                .ok_or_else(|| format!("unknown difficulty `{s}` (easy, medium, hard)"))?,
            None => Difficulty::Medium,
        };
        let settings = match args.next() {
            Some(path) => Settings::from_file(&path)?,
            None => Settings::default(),
        };
        let seed = match args.next() {
            Some(s) => s.parse::<u64>()?,
            None => DEFAULT_SEED,
        };

        let mut game = GameLoop::new(GameState::new(seed, Viewport::default(), settings));
        game.handle(GameInput::SelectDifficulty(difficulty));
        game.handle(GameInput::StartRound);
        log::info!(
            "Headless round: {} difficulty, seed {}",
            difficulty.as_str(),
            seed
        );

        let mut frame = 0u64;
        while game.wants_frame() {
            let report = game.frame(frame as f64 * FRAME_MS);
            if report.ticks > 0 {
                let state = game.state();
                log::debug!(
                    "{}s left, score {}, level {}",
                    state.time_left,
                    state.score,
                    state.level
                );
            }

            if frame % CATCH_EVERY == CATCH_EVERY - 1 {
                // Greedy player: go for the most valuable particle
                let target = game
                    .state()
                    .particles
                    .iter()
                    .max_by_key(|p| p.points())
                    .map(|p| p.id);
                if let Some(id) = target {
                    game.handle(GameInput::Capture { id });
                }
            }
            frame += 1;
        }

        let state = game.state();
        log::info!(
            "Round finished after {} frames: score {}, level {}, {} batches",
            frame,
            state.score,
            state.level,
            state.batches_generated
        );
        println!("{}", game.render_frame().to_json()?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Quantum Catcher (native) starting...");
    log::info!("Native mode plays a scripted round - run with `trunk serve` for the web version");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
