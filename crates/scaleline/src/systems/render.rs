use crate::components::entity::Entity;
use crate::renderer::surface::RenderSurface;
use crate::renderer::viewport::AxisViewport;

/// Issue draw calls for entities in scene order.
///
/// Each active entity draws its disc, then its label. Discs smaller than a
/// pixel and anything entirely outside `[0, canvas_width]` are skipped.
pub fn render_scene<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    surface: &mut dyn RenderSurface,
    canvas_width: f32,
) {
    for entity in entities {
        if !entity.active {
            continue;
        }
        let radius = entity.radius();
        if let Some(disc) = &entity.disc {
            if disc.is_drawable()
                && AxisViewport::is_visible(entity.pos.x as f64, radius as f64, canvas_width as f64)
            {
                surface.draw_circle(entity.pos.x, entity.pos.y, radius, disc.color);
            }
        }
        if let Some(label) = &entity.label {
            if !label.visible {
                continue;
            }
            let at = label.position(entity.pos, radius);
            let width = surface.text_width(&label.text);
            if at.x > canvas_width || at.x + width < 0.0 {
                continue;
            }
            surface.draw_text(at.x, at.y, &label.text, label.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::disc::DiscComponent;
    use crate::components::label::LabelComponent;
    use crate::renderer::surface::{DrawCommand, DrawList, Rgb};
    use glam::Vec2;

    fn body(id: u32, x: f32, radius: f32, name: &str) -> Entity {
        Entity::new(EntityId(id))
            .with_tag(name)
            .with_pos(Vec2::new(x, 300.0))
            .with_disc(DiscComponent::new(radius, Rgb::WHITE))
            .with_label(LabelComponent::below(name, Rgb::WHITE, 4.0))
    }

    #[test]
    fn draws_disc_then_label() {
        let entities = vec![body(1, 100.0, 5.0, "Sun")];
        let mut list = DrawList::new();
        render_scene(entities.iter(), &mut list, 1920.0);
        assert_eq!(
            list.commands(),
            &[
                DrawCommand::Circle { cx: 100.0, cy: 300.0, radius: 5.0, color: Rgb::WHITE },
                DrawCommand::Text { x: 95.0, y: 309.0, text: "Sun".into(), color: Rgb::WHITE },
            ]
        );
    }

    #[test]
    fn zero_radius_disc_keeps_its_label() {
        let entities = vec![body(1, 400.0, 0.0, "Phobos")];
        let mut list = DrawList::new();
        render_scene(entities.iter(), &mut list, 1920.0);
        assert_eq!(list.circles().count(), 0);
        assert_eq!(list.texts(), ["Phobos"]);
    }

    #[test]
    fn hidden_labels_and_inactive_entities_are_skipped() {
        let mut hidden = body(1, 400.0, 3.0, "Io");
        hidden.label.as_mut().unwrap().visible = false;
        let mut inactive = body(2, 500.0, 3.0, "Europa");
        inactive.active = false;
        let entities = vec![hidden, inactive];
        let mut list = DrawList::new();
        render_scene(entities.iter(), &mut list, 1920.0);
        assert_eq!(list.circles().count(), 1);
        assert!(list.texts().is_empty());
    }

    #[test]
    fn off_canvas_bodies_are_culled() {
        let entities = vec![body(1, -500.0, 3.0, "Mercury"), body(2, 5000.0, 3.0, "Neptune")];
        let mut list = DrawList::new();
        render_scene(entities.iter(), &mut list, 1920.0);
        assert!(list.commands().is_empty());
    }
}
