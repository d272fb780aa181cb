//! Render surface contract.
//!
//! The engine never rasterizes anything itself. Every frame is expressed as
//! a short list of immediate-mode calls against a [`RenderSurface`]:
//! `clear`, then circles and text, then `present`. The browser bridge backs
//! this with a Canvas 2D context; [`DrawList`] records the calls for tests
//! and headless use.

use crate::systems::text::FontMetrics;

/// Opaque 8-bit RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// CSS color string, e.g. `rgb(0,102,204)`.
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Drawing target for one frame.
pub trait RenderSurface {
    /// Reset the whole surface to `color`.
    fn clear(&mut self, color: Rgb);

    /// Fill a circle centered at `(cx, cy)`.
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb);

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb);

    /// Display the completed frame.
    fn present(&mut self);

    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str) -> f32 {
        FontMetrics::default().text_width(text)
    }
}

/// A recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Circle { cx: f32, cy: f32, radius: f32, color: Rgb },
    Text { x: f32, y: f32, text: String, color: Rgb },
    Present,
}

/// Surface that records calls instead of drawing them.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    font: FontMetrics,
    frames: u32,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last `clear`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `present` calls so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    /// Text strings drawn this frame, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self, color: Rgb) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Circle { cx, cy, radius, color });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.frames += 1;
    }

    fn text_width(&self, text: &str) -> f32 {
        self.font.text_width(text)
    }
}
