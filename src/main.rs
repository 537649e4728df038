//! Missile Command entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use glam::Vec2;
    use missile_command::platform::{DisplayRect, to_logical};
    use missile_command::renderer::{RenderError, RenderState, build_scene};
    use missile_command::{Scheduler, Settings, playfield};

    /// Game instance holding all state
    struct Game {
        scheduler: Scheduler,
        settings: Settings,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                scheduler: Scheduler::new(seed),
                settings,
                render_state: None,
            }
        }

        /// Advance the simulation and draw the resulting snapshot
        fn frame(&mut self, time: f64) {
            let state = self.scheduler.frame(time);
            let vertices = build_scene(state, &self.settings);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
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
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            if !self.settings.show_fps {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("hud-fps") {
                el.set_text_content(Some(&self.scheduler.fps().to_string()));
            }
        }
    }

    pub async fn run() -> Result<(), RenderError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Missile Command starting...");

        let window = web_sys::window().ok_or(RenderError::MissingCanvas("board"))?;
        let document = window
            .document()
            .ok_or(RenderError::MissingCanvas("board"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .and_then(|el| el.dyn_into().ok())
            .ok_or(RenderError::MissingCanvas("board"))?;

        // Backing store at device resolution
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Missile Command running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Click - launch an interceptor at the pointer
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = DisplayRect::from_dom_rect(&canvas_clone.get_bounding_client_rect());
            let device = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            if let Some(target) = to_logical(device, &rect, playfield()) {
                game.borrow_mut().scheduler.click(target);
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.frame(time);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Missile Command failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Missile Command (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    headless::run(30.0);
}

/// Headless session with a simple auto-defender, for checking the simulation
/// without a browser
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use missile_command::consts::PLAYER_MISSILE_SPEED;
    use missile_command::renderer::build_scene;
    use missile_command::sim::GameState;
    use missile_command::{Scheduler, Settings, launch_origin};

    /// Simulated display refresh interval (ms)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Seconds between auto-defender shots
    const FIRE_INTERVAL: f64 = 1.5;

    pub fn run(seconds: f64) {
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
        log::info!("Headless session with seed: {}", seed);

        let mut scheduler = Scheduler::new(seed);
        let mut next_shot = FIRE_INTERVAL;
        let mut shots = 0u32;
        let mut peak_vertices = 0usize;

        let frames = (seconds * 1000.0 / FRAME_MS) as u64;
        for i in 0..=frames {
            let time = i as f64 * FRAME_MS;
            let state = scheduler.frame(time);
            peak_vertices = peak_vertices.max(build_scene(state, &settings).len());

            if time / 1000.0 >= next_shot {
                next_shot += FIRE_INTERVAL;
                if let Some(aim) = intercept_point(state) {
                    scheduler.click(aim);
                    shots += 1;
                }
            }

            if i % 60 == 0 {
                let state = scheduler.state();
                log::info!(
                    "t={:>5.1}s missiles={} (enemy {}) blasts={} next spawn {:.2}s",
                    time / 1000.0,
                    state.missiles_in_flight(),
                    state.enemy_missiles.len(),
                    state.explosions.len(),
                    state.time_to_next_spawn
                );
            }
        }

        log::info!(
            "Done (seed {}): {} frames, {} interceptors fired, {} missiles still in flight, \
             peak scene size {} vertices",
            scheduler.seed(),
            scheduler.frames(),
            shots,
            scheduler.state().missiles_in_flight(),
            peak_vertices
        );
    }

    /// Where to aim so an interceptor meets the highest enemy missile
    fn intercept_point(state: &GameState) -> Option<Vec2> {
        let missile = state
            .enemy_missiles
            .iter()
            .min_by(|a, b| a.position.y.total_cmp(&b.position.y))?;

        // Lead the target by the interceptor's flight time to where it is now
        let flight = missile.position.distance(launch_origin()) / PLAYER_MISSILE_SPEED;
        Some(missile.position + missile.direction * missile.speed * flight)
    }
}
