//! Serializes a [`DrawList`] as an SVG document with a fixed 1200×800 viewBox.

use egui::{Color32, Stroke};
use svg::Document;
use svg::node::element as svg_element;

use super::{Dash, DrawList, Primitive};
use crate::geometry::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// `#rrggbb` and opacity of a color, as SVG paint attributes want them
fn paint(color: Color32) -> (String, f32) {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    (format!("#{r:02x}{g:02x}{b:02x}"), f32::from(a) / 255.0)
}

fn marker_id(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    format!("arrow-head-{r:02x}{g:02x}{b:02x}{a:02x}")
}

/// Set fill and stroke attributes on any SVG element
macro_rules! apply_paint {
    ($element:expr, $fill:expr, $stroke:expr) => {{
        let element = $element;
        let fill: Option<Color32> = $fill;
        let element = match fill {
            Some(fill) if fill != Color32::TRANSPARENT => {
                let (fill, opacity) = paint(fill);
                element.set("fill", fill).set("fill-opacity", opacity)
            }
            _ => element.set("fill", "none"),
        };
        let stroke: Stroke = $stroke;
        if stroke.is_empty() {
            element.set("stroke", "none")
        } else {
            let (color, opacity) = paint(stroke.color);
            element
                .set("stroke", color)
                .set("stroke-opacity", opacity)
                .set("stroke-width", stroke.width)
        }
    }};
}

fn dash_array(dash: Dash) -> String {
    format!("{} {}", dash.dash, dash.gap)
}

/// Arrow head marker; the path is scaled by the line's stroke width
fn arrow_marker(color: Color32) -> svg_element::Marker {
    let (fill, opacity) = paint(color);
    svg_element::Marker::new()
        .set("id", marker_id(color))
        .set("markerWidth", 8)
        .set("markerHeight", 8)
        .set("refX", 8)
        .set("refY", 4)
        .set("orient", "auto")
        .add(
            svg_element::Path::new()
                .set("d", "M0,0 L8,4 L0,8 z")
                .set("fill", fill)
                .set("fill-opacity", opacity),
        )
}

fn primitive_node(primitive: &Primitive) -> Box<dyn svg::Node> {
    match primitive {
        Primitive::Line { from, to, stroke } => Box::new(apply_paint!(
            svg_element::Line::new()
                .set("x1", from.x)
                .set("y1", from.y)
                .set("x2", to.x)
                .set("y2", to.y),
            None,
            *stroke
        )),
        Primitive::Arrow {
            from,
            to,
            stroke,
            head,
        } => Box::new(
            apply_paint!(
                svg_element::Line::new()
                    .set("x1", from.x)
                    .set("y1", from.y)
                    .set("x2", to.x)
                    .set("y2", to.y),
                None,
                *stroke
            )
            .set("marker-end", format!("url(#{})", marker_id(*head))),
        ),
        Primitive::Rect {
            rect,
            corner_radius,
            fill,
            stroke,
            dash,
        } => {
            let mut node = apply_paint!(
                svg_element::Rectangle::new()
                    .set("x", rect.min.x)
                    .set("y", rect.min.y)
                    .set("width", rect.width())
                    .set("height", rect.height()),
                Some(*fill),
                *stroke
            );
            if *corner_radius > 0.0 {
                node = node.set("rx", *corner_radius);
            }
            if let Some(dash) = dash {
                node = node.set("stroke-dasharray", dash_array(*dash));
            }
            Box::new(node)
        }
        Primitive::Ellipse {
            center,
            radius,
            fill,
            stroke,
            dash,
        } => {
            let mut node = apply_paint!(
                svg_element::Ellipse::new()
                    .set("cx", center.x)
                    .set("cy", center.y)
                    .set("rx", radius.x)
                    .set("ry", radius.y),
                Some(*fill),
                *stroke
            );
            if let Some(dash) = dash {
                node = node.set("stroke-dasharray", dash_array(*dash));
            }
            Box::new(node)
        }
        Primitive::Text {
            anchor,
            content,
            font_size,
            color,
        } => Box::new(apply_paint!(
            svg_element::Text::new(content.as_str())
                .set("x", anchor.x)
                .set("y", anchor.y)
                .set("font-size", *font_size)
                .set("font-family", "sans-serif"),
            Some(*color),
            Stroke::NONE
        )),
        Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
        } => Box::new(apply_paint!(
            svg_element::Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", *radius),
            Some(*fill),
            *stroke
        )),
    }
}

/// Build the SVG document for a draw list. The background stays transparent.
pub fn to_document(list: &DrawList) -> Document {
    let mut document = Document::new()
        .set("viewBox", format!("0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}"))
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT);

    if list.has_arrows() {
        let mut heads: Vec<Color32> = Vec::new();
        for primitive in list.primitives() {
            if let Primitive::Arrow { head, .. } = primitive {
                if !heads.contains(head) {
                    heads.push(*head);
                }
            }
        }
        let defs = heads
            .into_iter()
            .fold(svg_element::Definitions::new(), |defs, color| {
                defs.add(arrow_marker(color))
            });
        document = document.add(defs);
    }

    for group in &list.groups {
        let mut node = svg_element::Group::new();
        if let Some(id) = group.element {
            node = node.set("data-element", id.to_string());
        }
        for primitive in &group.primitives {
            node = node.add(primitive_node(primitive));
        }
        document = document.add(node);
    }
    document
}

pub fn to_svg_string(list: &DrawList) -> String {
    to_document(list).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, factory};
    use crate::id_generator::generate_id;
    use crate::renderer::render;

    #[test]
    fn test_empty_document() {
        let svg = to_svg_string(&DrawList::default());
        assert!(svg.contains(r#"viewBox="0 0 1200 800""#));
        assert!(!svg.contains("<marker"));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn test_grid_lines_serialized() {
        let svg = to_svg_string(&render(&[], None, true));
        assert_eq!(svg.matches("<line").count(), 52);
    }

    #[test]
    fn test_rectangle_attributes() {
        let rect = factory::create(generate_id(), ElementKind::Rectangle);
        let svg = to_svg_string(&render(std::slice::from_ref(&rect), Some(rect.id), false));

        assert!(svg.contains(r#"x="200""#));
        assert!(svg.contains(r#"rx="16""#));
        assert!(svg.contains(r#"stroke-dasharray="6 6""#));
        assert_eq!(svg.matches("<rect").count(), 2);
    }

    #[test]
    fn test_connector_references_marker() {
        let arrow = factory::create(generate_id(), ElementKind::Connector);
        let svg = to_svg_string(&render(std::slice::from_ref(&arrow), None, false));

        assert_eq!(svg.matches("<marker").count(), 1);
        assert!(svg.contains("marker-end=\"url(#arrow-head-"));
        assert_eq!(svg.matches("<circle").count(), 2);
    }
}
