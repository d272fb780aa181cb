use crate::api::types::{AppEvent, EntityId};
use crate::core::scene::Scene;
use crate::error::EngineError;
use crate::input::queue::InputQueue;
use crate::renderer::surface::{RenderSurface, Rgb};

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logical canvas width in pixels (default: 1920).
    pub canvas_width: f32,
    /// Logical canvas height in pixels (default: 600).
    pub canvas_height: f32,
    /// Frames processed per second at most (default: 60).
    pub target_fps: f32,
    /// Initial entity capacity of the scene (default: 64).
    pub max_entities: usize,
    /// Color the surface is cleared to at the start of each frame.
    pub background: Rgb,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1920.0,
            canvas_height: 600.0,
            target_fps: 60.0,
            max_entities: 64,
            background: Rgb::BLACK,
        }
    }
}

/// The core contract every app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Apply host-provided settings (JSON). Called before `config` and `init`.
    fn load_settings(&mut self, _json: &str) -> Result<(), EngineError> {
        Ok(())
    }

    /// Setup initial state and spawn entities.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One loop iteration: consume input, update entities for the next render.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only pass for overlay draw calls, issued after the scene.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to App::init and App::update.
pub struct EngineContext {
    pub scene: Scene,
    pub events: Vec<AppEvent>,
    snapshot: Option<String>,
    quit: bool,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max_entities: usize) -> Self {
        Self {
            scene: Scene::with_capacity(max_entities),
            events: Vec::new(),
            snapshot: None,
            quit: false,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: AppEvent) {
        self.events.push(event);
    }

    /// Ask the runner to save the finished frame to `path`.
    /// A later request in the same frame replaces an earlier one.
    pub fn request_snapshot(&mut self, path: impl Into<String>) {
        self.snapshot = Some(path.into());
    }

    /// Take the pending snapshot request, if any.
    pub fn take_snapshot_request(&mut self) -> Option<String> {
        self.snapshot.take()
    }

    /// Ask the runner to stop the loop after this update.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for overlay draw calls.
pub struct RenderContext<'a> {
    pub surface: &'a mut dyn RenderSurface,
    pub config: &'a AppConfig,
}
