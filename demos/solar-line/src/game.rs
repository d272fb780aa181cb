//! Solar Line: the Solar System laid out on one axis at true km scale.
//!
//! Discs and labels live in the engine scene; each update feeds input
//! through `dispatch`, then re-derives entity positions and radii from the
//! view state. Drag or arrow keys pan, the wheel zooms around the pointer.

use scaleline::*;
use glam::Vec2;

use crate::catalog::{BodyKind, Catalog, MOON_COUNT, PLANET_COUNT};
use crate::settings::SolarSettings;
use crate::state::{dispatch, Outcome, ViewState};

// ── Label layout ─────────────────────────────────────────────────────

const SUN_LABEL_GAP: f32 = 5.0;
const PLANET_LABEL_GAP: f32 = 4.0;
const MOON_LABEL_GAP: f32 = 2.0;
const MOON_LABEL_COLOR: Rgb = Rgb::grey(200);

// ── Scale readout ────────────────────────────────────────────────────

const READOUT_RIGHT_PAD: f32 = 10.0;
const READOUT_BOTTOM_PAD: f32 = 5.0;

// ── App event kinds to the host page ─────────────────────────────────

/// a = scale (px/km), b = offset (px), c = flag bits.
const EVENT_VIEW_INFO: f32 = 1.0;

const FLAG_SUN_LABEL: u32 = 1;
const FLAG_PLANET_LABELS: u32 = 2;
const FLAG_MOON_LABELS: u32 = 4;
const FLAG_MIN_SIZE: u32 = 8;

/// Scene entity backing one catalog body.
#[derive(Debug, Clone, Copy)]
struct BodyEntity {
    id: EntityId,
    kind: BodyKind,
    world_mkm: f64,
    radius_km: f64,
}

pub struct SolarLine {
    settings: SolarSettings,
    catalog: Catalog<'static>,
    state: ViewState,
    bodies: Vec<BodyEntity>,
}

impl SolarLine {
    pub fn new() -> Self {
        let settings = SolarSettings::default();
        let catalog = Catalog::builtin();
        let state = ViewState::new(&settings, &catalog);
        Self {
            settings,
            catalog,
            state,
            bodies: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn settings(&self) -> &SolarSettings {
        &self.settings
    }

    fn center_y(&self) -> f32 {
        self.settings.canvas_height / 2.0
    }

    /// Copy positions, radii and label visibility from the view state into the scene.
    fn sync_scene(&self, scene: &mut Scene) {
        let cy = self.center_y();
        for body in &self.bodies {
            let Some(entity) = scene.get_mut(body.id) else {
                continue;
            };
            let x = self.state.viewport.screen_x(body.world_mkm);
            let radius = self.state.pixel_radius(body.kind, body.radius_km) as f32;
            entity.pos = Vec2::new(x as f32, cy);
            if let Some(disc) = entity.disc.as_mut() {
                disc.radius = radius;
            }
            if let Some(label) = entity.label.as_mut() {
                label.visible = self.state.labels.shows(body.kind);
            }
        }
    }

    fn view_flags(&self) -> u32 {
        let labels = self.state.labels;
        let mut flags = 0;
        if labels.sun {
            flags |= FLAG_SUN_LABEL;
        }
        if labels.planets {
            flags |= FLAG_PLANET_LABELS;
        }
        if labels.moons {
            flags |= FLAG_MOON_LABELS;
        }
        if self.state.size.floor_enabled {
            flags |= FLAG_MIN_SIZE;
        }
        flags
    }
}

impl Default for SolarLine {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale readout text, e.g. `Scale: 3.822e-7 px/km`.
pub fn scale_readout(scale: f64) -> String {
    format!("Scale: {:.3e} px/km", scale)
}

impl App for SolarLine {
    fn config(&self) -> AppConfig {
        AppConfig {
            max_entities: 1 + PLANET_COUNT + MOON_COUNT,
            ..self.settings.app_config()
        }
    }

    fn load_settings(&mut self, json: &str) -> Result<(), EngineError> {
        let settings = SolarSettings::from_json(json)?;
        self.state = ViewState::new(&settings, &self.catalog);
        self.settings = settings;
        log::info!(
            "settings loaded: scale range {:.3e}..{:.3e} px/km",
            self.state.viewport.min_scale(),
            self.state.viewport.max_scale()
        );
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        if let Err(err) = self.catalog.validate() {
            log::error!("catalog: {}", err);
        }

        self.bodies.clear();
        for placement in self.catalog.placements() {
            let body = placement.body;
            let label = match placement.kind {
                BodyKind::Sun => LabelComponent::right(body.name, Rgb::WHITE, SUN_LABEL_GAP),
                BodyKind::Planet => LabelComponent::below(body.name, Rgb::WHITE, PLANET_LABEL_GAP),
                BodyKind::Moon => LabelComponent::below(body.name, MOON_LABEL_COLOR, MOON_LABEL_GAP),
            };
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(body.name)
                    .with_disc(DiscComponent::new(0.0, body.color))
                    .with_label(label),
            );
            self.bodies.push(BodyEntity {
                id,
                kind: placement.kind,
                world_mkm: placement.world_mkm,
                radius_km: body.radius_km,
            });
        }
        self.sync_scene(&mut ctx.scene);

        log::info!(
            "solar-line: {} bodies, {:.3e} px/km at fit",
            self.bodies.len(),
            self.state.viewport.scale()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            let (next, outcome) = dispatch(self.state, event);
            self.state = next;
            match outcome {
                Outcome::Continue => {}
                Outcome::Snapshot => ctx.request_snapshot(self.settings.snapshot_path.as_str()),
                Outcome::Quit => {
                    ctx.request_quit();
                    break;
                }
            }
        }

        self.sync_scene(&mut ctx.scene);
        ctx.emit_event(AppEvent {
            kind: EVENT_VIEW_INFO,
            a: self.state.viewport.scale() as f32,
            b: self.state.viewport.offset() as f32,
            c: self.view_flags() as f32,
        });
    }

    fn render(&self, ctx: &mut RenderContext) {
        let text = scale_readout(self.state.viewport.scale());
        let width = ctx.surface.text_width(&text);
        let x = ctx.config.canvas_width - width - READOUT_RIGHT_PAD;
        let y = ctx.config.canvas_height - FontMetrics::default().size_px - READOUT_BOTTOM_PAD;
        ctx.surface.draw_text(x, y, &text, Rgb::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY_COUNT: usize = 1 + PLANET_COUNT + MOON_COUNT;

    fn started() -> (SolarLine, EngineContext) {
        let mut app = SolarLine::new();
        let mut ctx = EngineContext::with_capacity(app.config().max_entities);
        app.init(&mut ctx);
        (app, ctx)
    }

    fn step(app: &mut SolarLine, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for event in events {
            input.push(*event);
        }
        ctx.clear_frame_data();
        app.update(ctx, &input);
    }

    fn frame(app: &SolarLine, ctx: &EngineContext) -> DrawList {
        let config = app.config();
        let mut list = DrawList::new();
        list.clear(config.background);
        render_scene(ctx.scene.iter(), &mut list, config.canvas_width);
        app.render(&mut RenderContext { surface: &mut list, config: &config });
        list.present();
        list
    }

    fn key(key_code: u32) -> InputEvent {
        InputEvent::KeyDown { key_code }
    }

    #[test]
    fn init_spawns_bodies_in_draw_order() {
        let (_, ctx) = started();
        assert_eq!(ctx.scene.len(), BODY_COUNT);
        let tags: Vec<&str> = ctx.scene.iter().take(5).map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, ["Sun", "Mercury", "Venus", "Earth", "Moon"]);
        let sun = ctx.scene.find_by_tag("Sun").unwrap();
        assert_eq!(sun.pos, Vec2::new(100.0, 300.0));
    }

    #[test]
    fn fitted_view_draws_only_labels_and_readout() {
        let (mut app, mut ctx) = started();
        step(&mut app, &mut ctx, &[]);
        let list = frame(&app, &ctx);
        // Every body is below a pixel at the fitted scale.
        assert_eq!(list.circles().count(), 0);
        let texts = list.texts();
        assert_eq!(texts.len(), BODY_COUNT + 1);
        assert_eq!(texts.last().copied(), Some("Scale: 3.822e-7 px/km"));
    }

    #[test]
    fn readout_sits_bottom_right() {
        let (mut app, mut ctx) = started();
        step(&mut app, &mut ctx, &[]);
        let list = frame(&app, &ctx);
        let text = scale_readout(app.state().viewport.scale());
        let width = FontMetrics::default().text_width(&text);
        let found = list.commands().iter().any(|c| {
            matches!(c, DrawCommand::Text { x, y, text: t, color }
                if *t == text
                    && (*x - (1920.0 - width - 10.0)).abs() < 1e-3
                    && *y == 577.0
                    && *color == Rgb::WHITE)
        });
        assert!(found, "readout not drawn at the bottom right");
    }

    #[test]
    fn min_size_key_makes_every_body_visible() {
        let (mut app, mut ctx) = started();
        step(&mut app, &mut ctx, &[key(keys::O)]);
        let list = frame(&app, &ctx);
        assert_eq!(list.circles().count(), BODY_COUNT);
        let sun = ctx.scene.find_by_tag("Sun").unwrap();
        assert_eq!(sun.radius(), 5.0);
        let phobos = ctx.scene.find_by_tag("Phobos").unwrap();
        assert_eq!(phobos.radius(), 2.0);
    }

    #[test]
    fn label_toggles_hide_categories() {
        let (mut app, mut ctx) = started();
        step(&mut app, &mut ctx, &[key(keys::M), key(keys::S)]);
        let list = frame(&app, &ctx);
        let texts = list.texts();
        assert!(!texts.contains(&"Sun"));
        assert!(!texts.contains(&"Moon"));
        assert!(!texts.contains(&"Titan"));
        assert!(texts.contains(&"Saturn"));
        assert_eq!(texts.len(), PLANET_COUNT + 1);
    }

    #[test]
    fn labels_follow_their_anchor_rules() {
        let (mut app, mut ctx) = started();
        step(&mut app, &mut ctx, &[key(keys::O)]);
        let list = frame(&app, &ctx);
        let earth_x = ctx.scene.find_by_tag("Earth").unwrap().pos.x;
        let moon_x = ctx.scene.find_by_tag("Moon").unwrap().pos.x;
        let text_at = |name: &str| {
            list.commands().iter().find_map(|c| match c {
                DrawCommand::Text { x, y, text, color } if text == name => Some((*x, *y, *color)),
                _ => None,
            })
        };
        assert_eq!(text_at("Sun"), Some((100.0 + 5.0 + 5.0, 300.0 - 5.0, Rgb::WHITE)));
        assert_eq!(text_at("Earth"), Some((earth_x - 2.0, 300.0 + 2.0 + 4.0, Rgb::WHITE)));
        assert_eq!(text_at("Moon"), Some((moon_x - 2.0, 300.0 + 2.0 + 2.0, Rgb::grey(200))));
    }

    #[test]
    fn arrow_keys_move_every_body() {
        let (mut app, mut ctx) = started();
        let before = ctx.scene.find_by_tag("Mars").unwrap().pos.x;
        step(&mut app, &mut ctx, &[key(keys::LEFT), key(keys::LEFT), key(keys::RIGHT)]);
        let after = ctx.scene.find_by_tag("Mars").unwrap().pos.x;
        assert!((after - before - 50.0).abs() < 1e-3);
        assert_eq!(ctx.scene.find_by_tag("Sun").unwrap().pos.x, 150.0);
    }

    #[test]
    fn zooming_in_on_earth_reveals_discs() {
        let (mut app, mut ctx) = started();
        let earth_x = ctx.scene.find_by_tag("Earth").unwrap().pos.x;
        let wheel = InputEvent::Wheel { x: earth_x, y: 300.0, delta: 5.0 };
        for _ in 0..40 {
            step(&mut app, &mut ctx, &[wheel]);
        }
        let earth = ctx.scene.find_by_tag("Earth").unwrap();
        // The pointer is the f32 screen x, so Earth drifts by its rounding error times the zoom.
        assert!((earth.pos.x - earth_x).abs() < 5.0);
        assert!(earth.radius() >= 1.0);
        assert_eq!(app.state().viewport.scale(), app.state().viewport.max_scale());
    }

    #[test]
    fn snapshot_key_requests_configured_path() {
        let (mut app, mut ctx) = started();
        step(&mut app, &mut ctx, &[key(keys::K)]);
        assert_eq!(ctx.take_snapshot_request().as_deref(), Some("solar_system_snapshot.png"));
        assert!(!ctx.quit_requested());
    }

    #[test]
    fn quit_event_requests_quit() {
        let (mut app, mut ctx) = started();
        step(&mut app, &mut ctx, &[InputEvent::Quit, key(keys::LEFT)]);
        assert!(ctx.quit_requested());
        assert_eq!(app.state().viewport.offset(), 100.0);
    }

    #[test]
    fn update_reports_view_info() {
        let (mut app, mut ctx) = started();
        step(&mut app, &mut ctx, &[key(keys::M), key(keys::O)]);
        assert_eq!(ctx.events.len(), 1);
        let ev = ctx.events[0];
        assert_eq!(ev.kind, EVENT_VIEW_INFO);
        assert_eq!(ev.b, 100.0);
        assert_eq!(ev.c as u32, FLAG_SUN_LABEL | FLAG_PLANET_LABELS | FLAG_MIN_SIZE);
    }

    #[test]
    fn settings_reshape_the_view() {
        let mut app = SolarLine::new();
        app.load_settings(r#"{ "canvas_width": 1000, "canvas_height": 400, "margin": 50, "snapshot_path": "a.png" }"#)
            .unwrap();
        let config = app.config();
        assert_eq!(config.canvas_width, 1000.0);
        assert_eq!(config.max_entities, BODY_COUNT);

        let mut ctx = EngineContext::new();
        app.init(&mut ctx);
        let sun = ctx.scene.find_by_tag("Sun").unwrap();
        assert_eq!(sun.pos, Vec2::new(50.0, 200.0));
        let nereid = ctx.scene.find_by_tag("Nereid").unwrap();
        assert!((nereid.pos.x - 950.0).abs() < 1e-3);

        step(&mut app, &mut ctx, &[key(keys::K)]);
        assert_eq!(ctx.take_snapshot_request().as_deref(), Some("a.png"));
    }

    #[test]
    fn bad_settings_keep_previous_view() {
        let mut app = SolarLine::new();
        let before = *app.state();
        assert!(app.load_settings(r#"{ "zoom_step": -1 }"#).is_err());
        assert!(app.load_settings("not json").is_err());
        assert_eq!(*app.state(), before);
        assert_eq!(app.settings(), &SolarSettings::default());
    }
}
