//! One-dimensional viewport: world distance along an axis to screen x.
//!
//! World distances are given in millions of kilometers (Mkm) and scaled in
//! kilometers; `scale` is pixels per kilometer and `offset` is the screen x
//! of world distance zero. All math is `f64`: at the zoom ceiling the
//! outer planets sit hundreds of millions of pixels from the origin.

/// Kilometers per million kilometers.
pub const KM_PER_MKM: f64 = 1_000_000.0;

/// Pan/zoom state for a horizontal distance axis.
///
/// `min_scale <= scale <= max_scale` holds after every operation.
/// `offset` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisViewport {
    scale: f64,
    offset: f64,
    min_scale: f64,
    max_scale: f64,
    dragging: bool,
    drag_anchor: f64,
}

impl AxisViewport {
    /// Viewport at `min_scale` with world zero at screen x `offset`.
    pub fn new(min_scale: f64, max_scale: f64, offset: f64) -> Self {
        debug_assert!(min_scale > 0.0 && max_scale >= min_scale);
        Self {
            scale: min_scale,
            offset,
            min_scale,
            max_scale,
            dragging: false,
            drag_anchor: 0.0,
        }
    }

    /// Fit `extent_km` into `width` pixels with `margin` on both sides.
    /// The zoom ceiling is `zoom_ceiling` times the fitted scale.
    pub fn fit(extent_km: f64, width: f64, margin: f64, zoom_ceiling: f64) -> Self {
        let min_scale = (width - 2.0 * margin) / extent_km;
        Self::new(min_scale, min_scale * zoom_ceiling.max(1.0), margin)
    }

    /// Set scale (clamped) and offset directly.
    pub fn with_transform(mut self, scale: f64, offset: f64) -> Self {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
        self.offset = offset;
        self
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_anchor(&self) -> f64 {
        self.drag_anchor
    }

    /// Screen x of a world distance in Mkm.
    pub fn screen_x(&self, world_mkm: f64) -> f64 {
        self.offset + world_mkm * KM_PER_MKM * self.scale
    }

    /// World distance in km under screen x.
    pub fn world_km_at(&self, screen_x: f64) -> f64 {
        (screen_x - self.offset) / self.scale
    }

    /// Pixel length of `km` at the current scale.
    pub fn km_to_px(&self, km: f64) -> f64 {
        km * self.scale
    }

    /// Zoom by `delta` wheel notches of `step` each, keeping the world
    /// point under `pointer_x` fixed on screen.
    pub fn zoom_at(&mut self, pointer_x: f64, delta: f64, step: f64) {
        let world_km = self.world_km_at(pointer_x);
        let scaled = self.scale * (1.0 + delta * step);
        self.scale = scaled.clamp(self.min_scale, self.max_scale);
        // Re-anchor with the clamped scale so the pointer stays put at the limits too.
        self.offset = pointer_x - world_km * self.scale;
    }

    pub fn begin_drag(&mut self, x: f64) {
        self.dragging = true;
        self.drag_anchor = x;
    }

    /// Follow the pointer while dragging. No-op otherwise.
    pub fn drag_to(&mut self, x: f64) {
        if !self.dragging {
            return;
        }
        self.offset += x - self.drag_anchor;
        self.drag_anchor = x;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Shift the axis by `dx` pixels (positive moves content right).
    pub fn pan_by(&mut self, dx: f64) {
        self.offset += dx;
    }

    /// Whether a disc at screen x with `radius` overlaps `[0, width]`.
    pub fn is_visible(screen_x: f64, radius: f64, width: f64) -> bool {
        screen_x + radius >= 0.0 && screen_x - radius <= width
    }
}
