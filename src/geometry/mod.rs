use egui::{Rect, pos2, vec2};

pub mod hit_testing;
pub mod mapper;

pub use hit_testing::{Hit, HitHandle, hit_test};
pub use mapper::{fit_canvas, map_pointer_to_scene, view_transform};

/// Logical size of the drawing surface, in scene units
pub const CANVAS_WIDTH: f32 = 1200.0;
pub const CANVAS_HEIGHT: f32 = 800.0;

/// Quantization step applied to pointer positions while snapping
pub const GRID_SNAP_STEP: f32 = 4.0;

/// Spacing of the background grid lines
pub const GRID_PITCH: f32 = 40.0;

/// The whole scene, `(0, 0)` to `(1200, 800)`
pub fn canvas_rect() -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), vec2(CANVAS_WIDTH, CANVAS_HEIGHT))
}
