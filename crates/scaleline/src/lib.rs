pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, AppEvent};
pub use components::entity::Entity;
pub use components::disc::DiscComponent;
pub use components::label::{LabelComponent, LabelAnchor};
pub use core::scene::Scene;
pub use core::time::FrameLimiter;
pub use renderer::surface::{Rgb, RenderSurface, DrawCommand, DrawList};
pub use renderer::snapshot::SnapshotSink;
pub use renderer::viewport::{AxisViewport, KM_PER_MKM};
pub use input::queue::{InputEvent, InputQueue, PointerButton};
pub use input::keys;
pub use systems::render::render_scene;
pub use systems::text::FontMetrics;
pub use error::EngineError;
