//! Aura Pop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use aura_pop::consts::*;
    use aura_pop::renderer::{RenderState, TextPainter};
    use aura_pop::sim::ClickOutcome;
    use aura_pop::{AppError, GameLoop, Settings};

    /// Game instance holding all state
    struct Game {
        game: GameLoop,
        render_state: Option<RenderState>,
        text: TextPainter,
        /// Canvas units per CSS pixel (canvas may be styled larger than 500px)
        css_scale: (f32, f32),
    }

    impl Game {
        /// Render the current frame
        fn frame(&mut self) {
            let was_won = self.game.state().is_won();
            let frame = self.game.frame();

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
            self.text.paint(&frame);

            if !was_won && self.game.state().is_won() {
                log::info!("Won after {} frames", self.game.frame_count());
            }
        }

        fn click(&mut self, offset_x: f32, offset_y: f32) {
            let x = offset_x * self.css_scale.0;
            let y = offset_y * self.css_scale.1;
            if self.game.on_click(x, y) == ClickOutcome::Miss {
                log::debug!("Missed, score now {}", self.game.state().score);
            }
        }

        fn key(&mut self, key: &str) {
            if self.game.on_key(key) {
                log::info!("Restarted");
            }
        }
    }

    fn canvas_by_id(document: &web_sys::Document, id: &'static str) -> Result<HtmlCanvasElement, AppError> {
        document
            .get_element_by_id(id)
            .ok_or(AppError::MissingElement(id))?
            .dyn_into()
            .map_err(|_| AppError::MissingElement(id))
    }

    pub async fn run() -> Result<(), AppError> {
        log::info!("Aura Pop starting...");

        let window = web_sys::window().ok_or(AppError::MissingElement("window"))?;
        let document = window
            .document()
            .ok_or(AppError::MissingElement("document"))?;

        let canvas = canvas_by_id(&document, "canvas")?;
        let overlay = canvas_by_id(&document, "overlay")?;

        let settings = Settings::load(&canvas)?;

        // Fixed logical size, scaled for the display
        let dpr = window.device_pixel_ratio();
        let width = (CANVAS_WIDTH as f64 * dpr) as u32;
        let height = (CANVAS_HEIGHT as f64 * dpr) as u32;
        for c in [&canvas, &overlay] {
            c.set_width(width);
            c.set_height(height);
        }

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let text = TextPainter::new(&overlay)?;

        let client_w = canvas.client_width().max(1) as f32;
        let client_h = canvas.client_height().max(1) as f32;
        let game = Rc::new(RefCell::new(Game {
            game: GameLoop::new(settings, seed),
            render_state: None,
            text,
            css_scale: (CANVAS_WIDTH / client_w, CANVAS_HEIGHT / client_h),
        }));

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, &overlay, game.clone())?;

        request_animation_frame(game);

        log::info!("Aura Pop running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        overlay: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), AppError> {
        // Mouse press - the overlay sits on top, so it receives the events
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let w = canvas_clone.client_width().max(1) as f32;
                let h = canvas_clone.client_height().max(1) as f32;
                g.css_scale = (CANVAS_WIDTH / w, CANVAS_HEIGHT / h);
                g.click(event.offset_x() as f32, event.offset_y() as f32);
            });
            let _ = overlay
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or(AppError::MissingElement("window"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, stopping game loop");
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
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    if let Err(e) = wasm_game::run().await {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Aura Pop (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    match aura_pop::Settings::load() {
        Ok(settings) => headless::run(settings),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session driving the same loop the browser uses
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use aura_pop::sim::ClickOutcome;
    use aura_pop::{GameLoop, Settings};

    /// Give up if the script somehow never wins
    const MAX_FRAMES: u64 = 10_000;

    pub fn run(settings: Settings) {
        let seed = settings.seed.unwrap_or(0);
        let restart_key = settings.restart_key.clone();
        let mut game = GameLoop::new(settings, seed);

        game.frame();
        let outcome = game.on_click(-1.0, -1.0);
        log::info!("Corner click: {:?}, score {}", outcome, game.state().score);

        while !game.state().is_won() && game.frame_count() < MAX_FRAMES {
            if let Some(ball) = game.state().balls.last() {
                let (x, y) = (ball.pos.x, ball.pos.y);
                if let ClickOutcome::Hit { index } = game.on_click(x, y) {
                    log::info!(
                        "Popped ball {} at ({:.1}, {:.1}), {} left",
                        index,
                        x,
                        y,
                        game.state().balls.len()
                    );
                }
            }
            game.frame();
        }

        let state = game.state();
        log::info!(
            "Finished in {} frames: won={}, score {}",
            game.frame_count(),
            state.is_won(),
            state.score
        );
        println!("Final Score: {}", state.score);

        if game.on_key(&restart_key) {
            log::info!(
                "Restarted: {} balls, score {}",
                game.state().balls.len(),
                game.state().score
            );
        }
    }
}
