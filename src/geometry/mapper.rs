use egui::emath::RectTransform;
use egui::{Pos2, Rect, Vec2, pos2};

use super::{CANVAS_HEIGHT, CANVAS_WIDTH, GRID_SNAP_STEP, canvas_rect};
use crate::element::finite_or_zero;

/// Largest rectangle with the canvas aspect ratio, centred in `available`
pub fn fit_canvas(available: Rect) -> Rect {
    let scale = (available.width() / CANVAS_WIDTH).min(available.height() / CANVAS_HEIGHT);
    let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    Rect::from_center_size(
        available.center(),
        Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT) * scale,
    )
}

/// Scene-to-screen transform for a canvas drawn into `screen`
pub fn view_transform(screen: Rect) -> RectTransform {
    RectTransform::from_to(canvas_rect(), screen)
}

/// Map a device (screen) position into scene coordinates.
///
/// `view` is the scene-to-device transform; its inverse is applied. Each axis
/// is then rounded to the nearest multiple of [`GRID_SNAP_STEP`] with `snap`
/// on, or to whole units with it off.
pub fn map_pointer_to_scene(device: Pos2, view: &RectTransform, snap: bool) -> Pos2 {
    let scene = view.inverse().transform_pos(device);
    let step = if snap { GRID_SNAP_STEP } else { 1.0 };
    pos2(
        finite_or_zero(quantize(scene.x, step)),
        finite_or_zero(quantize(scene.y, step)),
    )
}

// Round half up, so -2 snaps to 0 rather than -4.
fn quantize(value: f32, step: f32) -> f32 {
    (value / step + 0.5).floor() * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;
    use float_cmp::assert_approx_eq;

    fn identity() -> RectTransform {
        view_transform(canvas_rect())
    }

    #[test]
    fn test_snap_to_grid() {
        let mapped = map_pointer_to_scene(pos2(101.0, 103.0), &identity(), true);
        assert_eq!(mapped, pos2(100.0, 104.0));
    }

    #[test]
    fn test_no_snap_rounds_to_whole_units() {
        let mapped = map_pointer_to_scene(pos2(101.3, 103.7), &identity(), false);
        assert_eq!(mapped, pos2(101.0, 104.0));
    }

    #[test]
    fn test_half_step_rounds_up() {
        let mapped = map_pointer_to_scene(pos2(102.0, -2.0), &identity(), true);
        assert_eq!(mapped, pos2(104.0, 0.0));
    }

    #[test]
    fn test_inverse_of_scaled_view() {
        // Canvas drawn at half size, offset by (50, 20) on screen
        let screen = Rect::from_min_size(pos2(50.0, 20.0), vec2(600.0, 400.0));
        let view = view_transform(screen);

        let mapped = map_pointer_to_scene(pos2(100.5, 71.5), &view, true);
        assert_eq!(mapped, pos2(100.0, 104.0));
    }

    #[test]
    fn test_fit_canvas_keeps_aspect() {
        let available = Rect::from_min_size(pos2(0.0, 0.0), vec2(900.0, 900.0));
        let fitted = fit_canvas(available);
        assert_approx_eq!(f32, fitted.width(), 900.0, epsilon = 0.001);
        assert_approx_eq!(f32, fitted.height(), 600.0, epsilon = 0.001);
        assert_eq!(fitted.center(), available.center());
    }

    #[test]
    fn test_fit_canvas_degenerate_area() {
        let available = Rect::from_min_size(pos2(10.0, 10.0), vec2(0.0, 0.0));
        let fitted = fit_canvas(available);
        assert_eq!(fitted.size(), vec2(CANVAS_WIDTH, CANVAS_HEIGHT));
    }
}
