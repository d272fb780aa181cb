use crate::renderer::surface::Rgb;

/// Filled circle drawn at the entity position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscComponent {
    /// Radius in screen pixels. A radius below one pixel draws nothing.
    pub radius: f32,
    pub color: Rgb,
}

impl DiscComponent {
    pub fn new(radius: f32, color: Rgb) -> Self {
        Self { radius, color }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Whether the disc covers at least one pixel.
    pub fn is_drawable(&self) -> bool {
        self.radius >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radius_is_not_drawable() {
        let disc = DiscComponent::new(0.0, Rgb::WHITE);
        assert!(!disc.is_drawable());
        assert!(disc.with_radius(2.0).is_drawable());
    }
}
