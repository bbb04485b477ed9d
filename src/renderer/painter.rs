//! Paints a [`DrawList`] with egui.

use std::f32::consts::TAU;

use egui::emath::RectTransform;
use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke, Vec2, pos2};

use super::{Dash, DrawList, Primitive};

/// Segments used to approximate a dashed ellipse outline
const ELLIPSE_SEGMENTS: usize = 96;

/// Arrow head length in multiples of the stroke width
pub const ARROW_HEAD_SCALE: f32 = 8.0;

/// Paint a draw list onto the canvas.
///
/// Args:
///     painter: painter clipped to the canvas
///     view: scene-to-screen transform
///     list: the frame's draw list
pub fn paint(painter: &Painter, view: &RectTransform, list: &DrawList) {
    let scale = view.scale().x;
    for primitive in list.primitives() {
        paint_primitive(painter, view, scale, primitive);
    }
}

fn scaled(stroke: Stroke, scale: f32) -> Stroke {
    Stroke::new(stroke.width * scale, stroke.color)
}

fn paint_primitive(painter: &Painter, view: &RectTransform, scale: f32, primitive: &Primitive) {
    match primitive {
        Primitive::Line { from, to, stroke } => {
            painter.line_segment(
                [view.transform_pos(*from), view.transform_pos(*to)],
                scaled(*stroke, scale),
            );
        }
        Primitive::Arrow {
            from,
            to,
            stroke,
            head,
        } => {
            let from = view.transform_pos(*from);
            let to = view.transform_pos(*to);
            let stroke = scaled(*stroke, scale);
            painter.line_segment([from, to], stroke);
            if let Some(points) = arrow_head(from, to, stroke.width) {
                painter.add(Shape::convex_polygon(points, *head, Stroke::NONE));
            }
        }
        Primitive::Rect {
            rect,
            corner_radius,
            fill,
            stroke,
            dash,
        } => {
            let rect = view.transform_rect(*rect);
            let stroke = scaled(*stroke, scale);
            match dash {
                Some(dash) => {
                    let corners = vec![
                        rect.left_top(),
                        rect.right_top(),
                        rect.right_bottom(),
                        rect.left_bottom(),
                        rect.left_top(),
                    ];
                    painter.rect_filled(rect, 0.0, *fill);
                    paint_dashed(painter, &corners, stroke, *dash, scale);
                }
                None => {
                    painter.rect(rect, *corner_radius * scale, *fill, stroke);
                }
            }
        }
        Primitive::Ellipse {
            center,
            radius,
            fill,
            stroke,
            dash,
        } => {
            let center = view.transform_pos(*center);
            let radius = *radius * scale;
            let stroke = scaled(*stroke, scale);
            match dash {
                Some(dash) => {
                    let outline = ellipse_points(center, radius);
                    paint_dashed(painter, &outline, stroke, *dash, scale);
                }
                None => {
                    painter.add(Shape::ellipse_filled(center, radius, *fill));
                    painter.add(Shape::ellipse_stroke(center, radius, stroke));
                }
            }
        }
        Primitive::Text {
            anchor,
            content,
            font_size,
            color,
        } => {
            if *font_size <= 0.0 || content.is_empty() {
                return;
            }
            painter.text(
                view.transform_pos(*anchor),
                Align2::LEFT_BOTTOM,
                content,
                FontId::proportional(font_size * scale),
                *color,
            );
        }
        Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            painter.circle(
                view.transform_pos(*center),
                radius * scale,
                *fill,
                scaled(*stroke, scale),
            );
        }
    }
}

fn paint_dashed(painter: &Painter, points: &[Pos2], stroke: Stroke, dash: Dash, scale: f32) {
    if stroke.color == Color32::TRANSPARENT {
        return;
    }
    painter.extend(Shape::dashed_line(
        points,
        stroke,
        dash.dash * scale,
        dash.gap * scale,
    ));
}

/// Closed polyline around an ellipse
fn ellipse_points(center: Pos2, radius: Vec2) -> Vec<Pos2> {
    (0..=ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * TAU;
            pos2(
                center.x + radius.x * angle.cos(),
                center.y + radius.y * angle.sin(),
            )
        })
        .collect()
}

/// Triangle with its tip on `to`, sized like the exported arrow marker.
/// `None` for a zero-length line or a zero stroke.
pub fn arrow_head(from: Pos2, to: Pos2, stroke_width: f32) -> Option<Vec<Pos2>> {
    let direction = to - from;
    if direction.length_sq() == 0.0 || stroke_width <= 0.0 {
        return None;
    }
    let direction = direction.normalized();
    let length = ARROW_HEAD_SCALE * stroke_width;
    let base = to - direction * length;
    let half_width = direction.rot90() * (length / 2.0);
    Some(vec![to, base + half_width, base - half_width])
}
