use glam::Vec2;
use crate::renderer::surface::Rgb;

/// Where a label sits relative to its entity's disc.
/// Positions are the top-left corner of the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelAnchor {
    /// Right of the disc, top-aligned with its top edge: `(x + r + gap, y - r)`.
    Right { gap: f32 },
    /// Under the disc, left-aligned with its left edge: `(x - r, y + r + gap)`.
    Below { gap: f32 },
}

/// Text drawn next to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelComponent {
    pub text: String,
    pub color: Rgb,
    pub anchor: LabelAnchor,
    /// Hidden labels keep their geometry; only drawing is skipped.
    pub visible: bool,
}

impl LabelComponent {
    pub fn new(text: impl Into<String>, color: Rgb, anchor: LabelAnchor) -> Self {
        Self {
            text: text.into(),
            color,
            anchor,
            visible: true,
        }
    }

    pub fn right(text: impl Into<String>, color: Rgb, gap: f32) -> Self {
        Self::new(text, color, LabelAnchor::Right { gap })
    }

    pub fn below(text: impl Into<String>, color: Rgb, gap: f32) -> Self {
        Self::new(text, color, LabelAnchor::Below { gap })
    }

    /// Top-left text position for a disc at `center` with `radius`.
    pub fn position(&self, center: Vec2, radius: f32) -> Vec2 {
        match self.anchor {
            LabelAnchor::Right { gap } => Vec2::new(center.x + radius + gap, center.y - radius),
            LabelAnchor::Below { gap } => Vec2::new(center.x - radius, center.y + radius + gap),
        }
    }
}
