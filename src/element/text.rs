use egui::{Pos2, Rect, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};

use super::common::{DEFAULT_FONT_SIZE, DEFAULT_TEXT_CONTENT, finite_or_zero};
use super::{ElementKind, Property, Shape};
use crate::error::PropertyError;

/// Average glyph width as a fraction of the font size
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Character count assumed for empty labels so they stay grabbable
const PLACEHOLDER_CHARS: usize = 5;

/// Single-line label; `(x, y)` is the left end of the baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub font_size: f32,
}

impl Text {
    pub fn new(x: f32, y: f32, content: impl Into<String>, font_size: f32) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
            content: content.into(),
            font_size: finite_or_zero(font_size),
        }
    }

    /// Font size used for layout; a zero size falls back to the default.
    pub fn layout_font_size(&self) -> f32 {
        if self.font_size == 0.0 {
            DEFAULT_FONT_SIZE
        } else {
            self.font_size
        }
    }

    /// Approximate rendered width, without measuring glyphs
    pub fn approx_width(&self) -> f32 {
        let chars = match self.content.chars().count() {
            0 => PLACEHOLDER_CHARS,
            n => n,
        };
        chars as f32 * self.layout_font_size() * CHAR_WIDTH_FACTOR
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new(260.0, 240.0, DEFAULT_TEXT_CONTENT, DEFAULT_FONT_SIZE)
    }
}

impl Shape for Text {
    fn kind(&self) -> ElementKind {
        ElementKind::Text
    }

    fn anchor(&self) -> Pos2 {
        pos2(self.x, self.y)
    }

    fn set_anchor(&mut self, anchor: Pos2) {
        self.x = finite_or_zero(anchor.x);
        self.y = finite_or_zero(anchor.y);
    }

    fn translate(&mut self, delta: Vec2) {
        self.set_anchor(self.anchor() + delta);
    }

    fn bounds(&self) -> Rect {
        let font_size = self.layout_font_size();
        Rect::from_min_size(
            pos2(self.x, self.y - font_size),
            vec2(self.approx_width(), font_size),
        )
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.bounds().contains(pos)
    }

    fn apply(&mut self, property: &Property) -> Result<(), PropertyError> {
        match property {
            Property::Content(content) => self.content = content.clone(),
            Property::FontSize(v) => self.font_size = finite_or_zero(*v),
            other => return Err(self.not_applicable(other)),
        }
        Ok(())
    }
}
