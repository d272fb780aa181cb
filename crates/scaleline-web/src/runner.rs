use scaleline::{
    App, AppConfig, AppEvent, EngineContext, FrameLimiter, InputEvent, InputQueue,
    RenderContext, RenderSurface, SnapshotSink,
};
use scaleline::systems::render::render_scene;

/// Generic app runner that wires up the loop.
///
/// Each concrete app creates a `thread_local!` AppRunner through
/// `export_app!`, because wasm-bindgen cannot export generic structs directly.
/// The surface and snapshot sink are type parameters so the loop runs
/// unchanged against the recording surface in tests.
pub struct AppRunner<A: App, S: RenderSurface, K: SnapshotSink> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    surface: S,
    sink: K,
    limiter: FrameLimiter,
    config: AppConfig,
    initialized: bool,
    running: bool,
    frames: u64,
}

impl<A: App, S: RenderSurface, K: SnapshotSink> AppRunner<A, S, K> {
    pub fn new(app: A, surface: S, sink: K) -> Self {
        let config = app.config();
        Self {
            ctx: EngineContext::with_capacity(config.max_entities),
            limiter: FrameLimiter::new(config.target_fps),
            app,
            input: InputQueue::new(),
            surface,
            sink,
            config,
            initialized: false,
            running: false,
            frames: 0,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.app.init(&mut self.ctx);
        self.initialized = true;
        self.running = true;
        log::debug!("runner initialized with {} entities", self.ctx.scene.len());
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.running {
            self.input.push(event);
        }
    }

    /// One host frame: update, render, present, then hand pending snapshots
    /// to the sink. Frames beyond the target rate are skipped; input keeps
    /// queuing until the next processed frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized || !self.running {
            return;
        }
        if !self.limiter.ready(dt) {
            return;
        }

        self.ctx.clear_frame_data();
        self.app.update(&mut self.ctx, &self.input);
        self.input.clear();

        if self.ctx.quit_requested() {
            self.running = false;
            log::info!("quit requested after {} frames", self.frames);
            return;
        }

        self.surface.clear(self.config.background);
        render_scene(self.ctx.scene.iter(), &mut self.surface, self.config.canvas_width);
        {
            let mut render_ctx = RenderContext {
                surface: &mut self.surface,
                config: &self.config,
            };
            self.app.render(&mut render_ctx);
        }
        self.surface.present();
        self.frames += 1;

        if let Some(path) = self.ctx.take_snapshot_request() {
            match self.sink.save(&path) {
                Ok(()) => log::info!("snapshot saved as {}", path),
                Err(err) => log::warn!("snapshot to {} failed: {}", path, err),
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn events(&self) -> &[AppEvent] {
        &self.ctx.events
    }

    // ---- Accessors read by the host page ----

    pub fn app_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn app_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn canvas_width(&self) -> f32 {
        self.config.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.config.canvas_height
    }
}
