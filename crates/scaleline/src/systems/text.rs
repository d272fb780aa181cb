//! Label font metrics.
//!
//! Surfaces with a real text shaper (Canvas 2D `measureText`) use their own
//! widths; everything else, including the recording surface, estimates
//! width from a fixed per-character advance.

/// Font used for labels and overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    /// Font size in pixels (line height).
    pub size_px: f32,
    /// Horizontal advance as a fraction of `size_px` (0.55 for a typical sans).
    pub advance: f32,
    /// CSS font family.
    pub family: String,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            size_px: 18.0,
            advance: 0.55,
            family: "sans-serif".to_string(),
        }
    }
}

impl FontMetrics {
    pub fn with_size(mut self, size_px: f32) -> Self {
        self.size_px = size_px;
        self
    }

    /// Estimated rendered width of `text` in pixels.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size_px * self.advance
    }

    /// CSS `font` shorthand, e.g. `18px sans-serif`.
    pub fn css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_length_and_size() {
        let font = FontMetrics::default();
        assert_eq!(font.text_width(""), 0.0);
        assert!((font.text_width("Sun") - 3.0 * 18.0 * 0.55).abs() < 1e-4);
        let big = FontMetrics::default().with_size(36.0);
        assert!((big.text_width("Sun") - 2.0 * font.text_width("Sun")).abs() < 1e-4);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let font = FontMetrics::default();
        assert_eq!(font.text_width("é"), font.text_width("e"));
    }

    #[test]
    fn css_shorthand() {
        assert_eq!(FontMetrics::default().css(), "18px sans-serif");
    }
}
