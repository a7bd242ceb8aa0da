//! Bouncing Balls entry point
//!
//! Web: wires the canvas, keyboard and animation frame loop to the simulation.
//! Native: runs the simulation headless with a scripted evil circle.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use bouncing_balls::Settings;
    use bouncing_balls::renderer::CanvasRenderer;
    use bouncing_balls::sim::{Direction, Driver, Event, FrameReport, Surface, World};

    /// Page state shared by the frame and keyboard callbacks.
    /// Each callback holds the borrow for its whole run.
    struct App {
        driver: Driver,
        renderer: CanvasRenderer,
        show_ball_count: bool,
        shown_count: Option<usize>,
    }

    impl App {
        fn frame(&mut self) {
            let Some(report) = self.driver.submit(Event::Frame) else {
                return;
            };
            if let Err(e) = self.renderer.render(&report) {
                log::warn!("Render error: {:?}", e);
            }
            self.update_hud(&report);
        }

        fn key(&mut self, dir: Direction) {
            self.driver.submit(Event::Key(dir));
        }

        /// Update the ball count element in the DOM
        fn update_hud(&mut self, report: &FrameReport) {
            if !self.show_ball_count || self.shown_count == Some(report.live_count) {
                return;
            }
            let el = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("ball-count"));
            if let Some(el) = el {
                el.set_text_content(Some(&format!("Ball count: {}", report.live_count)));
                self.shown_count = Some(report.live_count);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Bouncing Balls starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Sized to the viewport once; resizes are not tracked
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load();
        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let world = World::new(
            &settings,
            Surface::new(width as f32, height as f32),
            seed,
        );

        let app = Rc::new(RefCell::new(App {
            driver: Driver::new(world),
            renderer: CanvasRenderer::new(&canvas)?,
            show_ball_count: settings.show_ball_count,
            shown_count: None,
        }));

        setup_controls(&window, app.clone())?;
        request_animation_frame(app);

        log::info!("Bouncing Balls running (seed {})", seed);
        Ok(())
    }

    fn setup_controls(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(dir) = Direction::from_key(&event.key()) {
                app.borrow_mut().key(dir);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, animation loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            app.borrow_mut().frame();
            request_animation_frame(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use bouncing_balls::Settings;
    use bouncing_balls::consts::{HEADLESS_HEIGHT, HEADLESS_WIDTH};
    use bouncing_balls::sim::{Direction, Driver, Event, Surface, World};

    /// One minute at 60 Hz
    const FRAMES: u64 = 60 * 60;
    /// Frames between scripted key presses
    const KEY_INTERVAL: u64 = 3;
    /// Frames between progress log lines
    const REPORT_INTERVAL: u64 = 600;

    /// Lawnmower sweep: a row right, a little down, a row left, a little down
    fn sweep_direction(press: u64) -> Direction {
        match press % 66 {
            0..30 => Direction::Right,
            30..33 => Direction::Down,
            33..63 => Direction::Left,
            _ => Direction::Down,
        }
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    pub fn run() {
        let path = std::env::args_os().nth(1).map(PathBuf::from);
        let settings = Settings::load_from(path.as_deref());
        let seed = settings.seed.unwrap_or_else(clock_seed);

        let world = World::new(
            &settings,
            Surface::new(HEADLESS_WIDTH, HEADLESS_HEIGHT),
            seed,
        );
        let start_count = world.live_count;
        let mut driver = Driver::new(world);
        let mut contacts = 0;

        for frame in 1..=FRAMES {
            if frame % KEY_INTERVAL == 0 {
                driver.push(Event::Key(sweep_direction(frame / KEY_INTERVAL)));
            }
            driver.push(Event::Frame);

            if let Some(report) = driver.dispatch() {
                contacts += report.contacts;
                if frame % REPORT_INTERVAL == 0 {
                    log::info!("Frame {}: {} balls left", report.frame, report.live_count);
                }
            }

            if driver.world().is_cleared() {
                break;
            }
        }

        let world = driver.world();
        println!(
            "seed {}: {} of {} balls eaten in {} frames ({} ball contacts)",
            seed,
            start_count - world.live_count,
            start_count,
            world.frame,
            contacts
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bouncing Balls (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the canvas version");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
