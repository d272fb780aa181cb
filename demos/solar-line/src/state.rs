//! Interaction state and the pure event → state transition.
//!
//! `dispatch` is the only place view state changes. It does no I/O: side
//! effects (snapshot, quit) come back as an [`Outcome`] for the caller.

use scaleline::{keys, AxisViewport, InputEvent, PointerButton, KM_PER_MKM};

use crate::catalog::{BodyKind, Catalog};
use crate::settings::SolarSettings;

/// Which label categories are drawn. Geometry is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelToggles {
    pub sun: bool,
    pub planets: bool,
    pub moons: bool,
}

impl Default for LabelToggles {
    fn default() -> Self {
        Self { sun: true, planets: true, moons: true }
    }
}

impl LabelToggles {
    pub fn shows(&self, kind: BodyKind) -> bool {
        match kind {
            BodyKind::Sun => self.sun,
            BodyKind::Planet => self.planets,
            BodyKind::Moon => self.moons,
        }
    }
}

/// Physical radius to pixel radius, with an optional visibility floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePolicy {
    pub floor_enabled: bool,
    pub sun_floor: u32,
    pub body_floor: u32,
}

impl SizePolicy {
    pub fn new(sun_floor: u32, body_floor: u32) -> Self {
        Self { floor_enabled: false, sun_floor, body_floor }
    }

    /// `max(floor, floor(radius_px))`, floor being 0 while disabled.
    /// `radius_px` is the physical radius at the current scale.
    pub fn pixel_radius(&self, kind: BodyKind, radius_px: f64) -> u32 {
        let floor = match (self.floor_enabled, kind) {
            (false, _) => 0,
            (true, BodyKind::Sun) => self.sun_floor,
            (true, _) => self.body_floor,
        };
        // `as` saturates: huge radii at max zoom clamp to u32::MAX.
        let px = radius_px.floor().max(0.0) as u32;
        px.max(floor)
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Snapshot,
    Quit,
}

/// Everything the view needs besides the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub viewport: AxisViewport,
    pub labels: LabelToggles,
    pub size: SizePolicy,
    pub zoom_step: f64,
    pub pan_step: f64,
}

impl ViewState {
    /// Fit the whole catalog between the margins at the lowest zoom.
    pub fn new(settings: &SolarSettings, catalog: &Catalog) -> Self {
        let extent_km = catalog.farthest_distance_mkm() * KM_PER_MKM;
        Self {
            viewport: AxisViewport::fit(
                extent_km,
                settings.canvas_width as f64,
                settings.margin,
                settings.zoom_ceiling,
            ),
            labels: LabelToggles::default(),
            size: SizePolicy::new(settings.sun_min_radius, settings.planet_min_radius),
            zoom_step: settings.zoom_step,
            pan_step: settings.pan_step,
        }
    }

    pub fn pixel_radius(&self, kind: BodyKind, radius_km: f64) -> u32 {
        self.size.pixel_radius(kind, self.viewport.km_to_px(radius_km))
    }
}

/// Apply one input event.
pub fn dispatch(mut state: ViewState, event: &InputEvent) -> (ViewState, Outcome) {
    let mut outcome = Outcome::Continue;
    match *event {
        InputEvent::PointerDown { x, button: PointerButton::Primary, .. } => {
            state.viewport.begin_drag(x as f64);
        }
        InputEvent::PointerUp { button: PointerButton::Primary, .. } => {
            state.viewport.end_drag();
        }
        InputEvent::PointerMove { x, .. } => {
            state.viewport.drag_to(x as f64);
        }
        InputEvent::Wheel { x, delta, .. } => {
            state.viewport.zoom_at(x as f64, delta as f64, state.zoom_step);
        }
        InputEvent::KeyDown { key_code } => match key_code {
            keys::LEFT => state.viewport.pan_by(state.pan_step),
            keys::RIGHT => state.viewport.pan_by(-state.pan_step),
            keys::M => state.labels.moons = !state.labels.moons,
            keys::P => state.labels.planets = !state.labels.planets,
            keys::S => state.labels.sun = !state.labels.sun,
            keys::O => state.size.floor_enabled = !state.size.floor_enabled,
            keys::K => outcome = Outcome::Snapshot,
            _ => {}
        },
        InputEvent::Quit => outcome = Outcome::Quit,
        _ => {}
    }
    (state, outcome)
}
