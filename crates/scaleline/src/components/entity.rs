use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::disc::DiscComponent;
use crate::components::label::LabelComponent;

/// Fat entity: one struct with optional components.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Inactive entities are skipped by the render pass.
    pub active: bool,
    /// Disc center in screen pixels.
    pub pos: Vec2,
    /// Filled circle. Entities without a disc draw no shape.
    pub disc: Option<DiscComponent>,
    /// Text label placed relative to the disc.
    pub label: Option<LabelComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            disc: None,
            label: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_disc(mut self, disc: DiscComponent) -> Self {
        self.disc = Some(disc);
        self
    }

    pub fn with_label(mut self, label: LabelComponent) -> Self {
        self.label = Some(label);
        self
    }

    /// Current disc radius in pixels, 0 without a disc.
    pub fn radius(&self) -> f32 {
        self.disc.map(|d| d.radius).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::Rgb;

    #[test]
    fn builder_sets_components() {
        let e = Entity::new(EntityId(1))
            .with_tag("Earth")
            .with_pos(Vec2::new(249.6, 300.0))
            .with_disc(DiscComponent::new(3.0, Rgb::new(0, 102, 204)))
            .with_label(LabelComponent::below("Earth", Rgb::WHITE, 4.0));
        assert_eq!(e.tag, "Earth");
        assert!(e.active);
        assert_eq!(e.radius(), 3.0);
        assert_eq!(e.label.as_ref().unwrap().text, "Earth");
    }

    #[test]
    fn radius_without_disc_is_zero() {
        assert_eq!(Entity::new(EntityId(2)).radius(), 0.0);
    }
}
