use egui::Vec2;

// Default style, shared by every new element
pub const DEFAULT_FILL: &str = "rgba(255,255,255,0.14)";
pub const DEFAULT_STROKE: &str = "rgba(255,255,255,0.6)";
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;
pub const DEFAULT_FONT_SIZE: f32 = 18.0;
pub const DEFAULT_TEXT_FILL: &str = "white";
pub const DEFAULT_TEXT_CONTENT: &str = "Label";

/// Offset applied to every positional field of a duplicate
pub const DUPLICATE_OFFSET: Vec2 = Vec2::new(24.0, 24.0);

/// Non-finite numbers never reach the scene; they are stored as 0.
pub(crate) fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}
