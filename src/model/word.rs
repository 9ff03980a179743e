use crate::foundation::core::Size;

/// A word ready for placement in one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Word {
    /// Word text; unique within a frame.
    pub text: String,
    /// Ranking weight (higher ranks first).
    pub weight: f64,
    /// Resolved font size.
    pub font_size: f64,
    /// Measured text box `(width, height)` at `font_size`.
    pub text_size: Size,
}

impl Word {
    /// Build a word record.
    pub fn new(text: impl Into<String>, weight: f64, font_size: f64, text_size: Size) -> Self {
        Self {
            text: text.into(),
            weight,
            font_size,
            text_size,
        }
    }
}

/// Measures the rendered box of a word. Implemented outside the core by the
/// font engine; [`EstimatedTextMeasurer`] is the built-in stand-in.
pub trait TextMeasurer {
    /// Text box `(width, height)` of `text` drawn at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// Monospace-style estimate: every glyph advances `advance_ratio * font_size`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EstimatedTextMeasurer {
    /// Glyph advance as a fraction of the font size.
    pub advance_ratio: f64,
    /// Line height as a fraction of the font size.
    pub line_ratio: f64,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_ratio: 1.0,
        }
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let glyphs = text.chars().count() as f64;
        Size::new(
            glyphs * font_size * self.advance_ratio,
            font_size * self.line_ratio,
        )
    }
}

/// Coarse box for a word whose measurement is gone (e.g. a word leaving the
/// cloud): one font size per glyph, one font size tall.
pub fn estimate_text_size(text: &str, font_size: f64) -> Size {
    Size::new(text.chars().count() as f64 * font_size, font_size)
}

/// Map `weight` linearly from `[weight_min, weight_max]` onto
/// `[font_min, font_max]`, floored to a whole size.
///
/// A flat ranking (`weight_max == weight_min`) yields `font_max`.
pub fn calculate_font_size(
    weight: f64,
    weight_max: f64,
    weight_min: f64,
    font_max: f64,
    font_min: f64,
) -> f64 {
    let span = weight_max - weight_min;
    if span <= 0.0 || !span.is_finite() {
        return font_max;
    }
    let ratio = ((weight - weight_min) / span).clamp(0.0, 1.0);
    ((font_max - font_min) * ratio + font_min).floor().max(font_min)
}

#[cfg(test)]
#[path = "../../tests/unit/model/word.rs"]
mod tests;
