pub mod canvas;
pub mod runner;
pub mod snapshot;

pub use canvas::CanvasSurface;
pub use runner::AppRunner;
pub use snapshot::CanvasSnapshot;
pub use scaleline;

/// Route panics and `log` records to the browser console.
/// Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// Generates:
/// - `thread_local!` storage for the AppRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (app_init, app_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyApp;
///
/// scaleline_web::export_app!(MyApp, "my-app");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `scaleline::App` and has `new()`
/// - `$app_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;
        use $crate::scaleline::{InputEvent, PointerButton};

        type Runner = $crate::AppRunner<$app_type, $crate::CanvasSurface, $crate::CanvasSnapshot>;

        thread_local! {
            static RUNNER: RefCell<Option<Runner>> = RefCell::new(None);
        }

        /// Run `f` against the runner. Calls before `app_init` are logged and ignored.
        fn with_runner<R>(f: impl FnOnce(&mut Runner) -> R) -> Option<R> {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => Some(f(runner)),
                None => {
                    log::warn!("{}: not initialized, call app_init() first", $app_name);
                    None
                }
            })
        }

        #[wasm_bindgen]
        pub fn app_init(canvas_id: &str, settings_json: &str) -> Result<(), JsValue> {
            $crate::init_logging();

            let mut app = <$app_type>::new();
            if !settings_json.trim().is_empty() {
                if let Err(err) = $crate::scaleline::App::load_settings(&mut app, settings_json) {
                    log::warn!("{}: ignoring settings: {}", $app_name, err);
                }
            }
            let config = $crate::scaleline::App::config(&app);
            let surface = $crate::CanvasSurface::attach(canvas_id, &config)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let sink = $crate::CanvasSnapshot::new(surface.canvas().clone());
            let mut runner = $crate::AppRunner::new(app, surface, sink);
            runner.init();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized on #{}", $app_name, canvas_id);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn app_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn app_pointer_down(x: f32, y: f32, button: u32) {
            let button = PointerButton::from_index(button);
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_up(x: f32, y: f32, button: u32) {
            let button = PointerButton::from_index(button);
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_wheel(x: f32, y: f32, delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { x, y, delta }));
        }

        #[wasm_bindgen]
        pub fn app_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn app_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn app_quit() {
            with_runner(|r| r.push_input(InputEvent::Quit));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn is_running() -> bool {
            with_runner(|r| r.is_running()).unwrap_or(false)
        }

        #[wasm_bindgen]
        pub fn get_app_events_ptr() -> *const f32 {
            with_runner(|r| r.app_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_app_events_len() -> u32 {
            with_runner(|r| r.app_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_canvas_width() -> f32 {
            with_runner(|r| r.canvas_width()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_canvas_height() -> f32 {
            with_runner(|r| r.canvas_height()).unwrap_or(0.0)
        }
    };
}
