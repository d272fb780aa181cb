use scaleline::{AppConfig, EngineError, FontMetrics, RenderSurface, Rgb};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D implementation of the render surface.
///
/// Draw calls go straight to the context; the browser composites the
/// canvas at the end of the animation frame, so `present` has nothing to do.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    font: FontMetrics,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Look up `canvas_id`, size it to the configured canvas and grab its 2D context.
    pub fn attach(canvas_id: &str, config: &AppConfig) -> Result<Self, EngineError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| EngineError::Surface("no document".into()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| EngineError::Surface(format!("missing canvas #{}", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EngineError::Surface(format!("#{} is not a canvas", canvas_id)))?;
        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| EngineError::Surface("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::Surface("unexpected context type".into()))?;

        let font = FontMetrics::default();
        ctx.set_font(&font.css());
        ctx.set_text_baseline("top");

        Ok(Self {
            canvas,
            ctx,
            font,
            width: config.canvas_width as f64,
            height: config.canvas_height as f64,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        let arc = self
            .ctx
            .arc(cx as f64, cy as f64, radius as f64, 0.0, std::f64::consts::TAU);
        if drawn("arc", arc) {
            self.ctx.fill();
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        drawn("fill_text", self.ctx.fill_text(text, x as f64, y as f64));
    }

    fn present(&mut self) {}

    fn text_width(&self, text: &str) -> f32 {
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or_else(|_| self.font.text_width(text))
    }
}

pub(crate) fn js_error(err: JsValue) -> EngineError {
    EngineError::Surface(format!("{:?}", err))
}

/// Log a failed draw call at debug level. The frame carries on either way.
fn drawn<E: std::fmt::Debug>(op: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::debug!("canvas {} failed: {:?}", op, err);
            false
        }
    }
}
