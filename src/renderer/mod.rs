//! Scene to draw list.
//!
//! [`render`] is pure: it turns the elements, the selection and the grid flag
//! into a [`DrawList`] in scene units. The list is then either painted on
//! screen by [`painter`] or written out as SVG by [`svg_document`].

use egui::{Color32, Pos2, Rect, Stroke, Vec2, pos2};

use crate::color::{self, rgba};
use crate::element::connector::HANDLE_RADIUS;
use crate::element::{Element, Endpoint, Geometry, Shape, Text};
use crate::geometry::{CANVAS_HEIGHT, CANVAS_WIDTH, GRID_PITCH};
use crate::id_generator::ElementId;

pub mod painter;
pub mod svg_document;

/// Padding around a selected rectangle
pub const RECT_SELECTION_PADDING: f32 = 6.0;
/// Added to both radii of a selected ellipse
pub const ELLIPSE_SELECTION_PADDING: f32 = 10.0;
/// Padding around the approximate box of selected text
pub const TEXT_SELECTION_PADDING: f32 = 8.0;

/// Dash pattern of selection outlines, in scene units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub dash: f32,
    pub gap: f32,
}

pub const SELECTION_DASH: Dash = Dash { dash: 6.0, gap: 6.0 };

pub fn grid_color() -> Color32 {
    rgba(255, 255, 255, 0.03)
}

pub fn selection_color() -> Color32 {
    rgba(56, 189, 248, 0.6)
}

pub fn handle_fill(endpoint: Endpoint) -> Color32 {
    match endpoint {
        Endpoint::Start => rgba(59, 130, 246, 0.35),
        Endpoint::End => rgba(20, 184, 166, 0.35),
    }
}

pub fn handle_stroke() -> Stroke {
    Stroke::new(1.0, rgba(255, 255, 255, 0.8))
}

/// One drawing instruction, in scene units
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    /// A line with a filled arrow head at `to`
    Arrow {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
        head: Color32,
    },
    Rect {
        rect: Rect,
        corner_radius: f32,
        fill: Color32,
        stroke: Stroke,
        dash: Option<Dash>,
    },
    Ellipse {
        center: Pos2,
        radius: Vec2,
        fill: Color32,
        stroke: Stroke,
        dash: Option<Dash>,
    },
    /// Text whose baseline starts at `anchor`
    Text {
        anchor: Pos2,
        content: String,
        font_size: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
}

/// Primitives drawn for one element, or for the grid when `element` is `None`
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveGroup {
    pub element: Option<ElementId>,
    pub primitives: Vec<Primitive>,
}

/// Everything needed to draw one frame, back to front
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    pub groups: Vec<PrimitiveGroup>,
}

impl DrawList {
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.groups.iter().flat_map(|group| group.primitives.iter())
    }

    pub fn group_for(&self, id: ElementId) -> Option<&PrimitiveGroup> {
        self.groups.iter().find(|group| group.element == Some(id))
    }

    pub fn has_arrows(&self) -> bool {
        self.primitives()
            .any(|primitive| matches!(primitive, Primitive::Arrow { .. }))
    }
}

/// Build the draw list for a scene.
///
/// Args:
///     elements: scene elements in draw order
///     selected: the selected element, if any
///     grid: whether to draw the background grid
pub fn render(elements: &[Element], selected: Option<ElementId>, grid: bool) -> DrawList {
    let mut groups = Vec::with_capacity(elements.len() + 1);
    if grid {
        groups.push(PrimitiveGroup {
            element: None,
            primitives: grid_lines(),
        });
    }
    groups.extend(
        elements
            .iter()
            .map(|element| render_element(element, selected == Some(element.id))),
    );
    DrawList { groups }
}

fn grid_lines() -> Vec<Primitive> {
    let stroke = Stroke::new(1.0, grid_color());
    let columns = (CANVAS_WIDTH / GRID_PITCH) as usize;
    let rows = (CANVAS_HEIGHT / GRID_PITCH) as usize;

    let vertical = (0..=columns).map(|i| {
        let x = i as f32 * GRID_PITCH;
        Primitive::Line {
            from: pos2(x, 0.0),
            to: pos2(x, CANVAS_HEIGHT),
            stroke,
        }
    });
    let horizontal = (0..=rows).map(|i| {
        let y = i as f32 * GRID_PITCH;
        Primitive::Line {
            from: pos2(0.0, y),
            to: pos2(CANVAS_WIDTH, y),
            stroke,
        }
    });
    vertical.chain(horizontal).collect()
}

fn render_element(element: &Element, is_selected: bool) -> PrimitiveGroup {
    let style = &element.style;
    let fill = color::resolve(&style.fill);
    let stroke = Stroke::new(style.stroke_width, color::resolve(&style.stroke));
    let outline = Stroke::new(1.0, selection_color());
    let mut primitives = Vec::with_capacity(3);

    match &element.geometry {
        Geometry::Rectangle(r) => {
            let rect = Rect::from_min_size(pos2(r.x, r.y), r.size());
            primitives.push(Primitive::Rect {
                rect,
                corner_radius: r.corner_radius,
                fill,
                stroke,
                dash: None,
            });
            if is_selected {
                primitives.push(Primitive::Rect {
                    rect: rect.expand(RECT_SELECTION_PADDING),
                    corner_radius: 0.0,
                    fill: Color32::TRANSPARENT,
                    stroke: outline,
                    dash: Some(SELECTION_DASH),
                });
            }
        }
        Geometry::Ellipse(e) => {
            let center = pos2(e.cx, e.cy);
            primitives.push(Primitive::Ellipse {
                center,
                radius: e.radius(),
                fill,
                stroke,
                dash: None,
            });
            if is_selected {
                primitives.push(Primitive::Ellipse {
                    center,
                    radius: e.radius() + Vec2::splat(ELLIPSE_SELECTION_PADDING),
                    fill: Color32::TRANSPARENT,
                    stroke: outline,
                    dash: Some(SELECTION_DASH),
                });
            }
        }
        Geometry::Text(t) => {
            primitives.push(Primitive::Text {
                anchor: pos2(t.x, t.y),
                content: t.content.clone(),
                font_size: t.font_size,
                color: fill,
            });
            if is_selected {
                primitives.push(Primitive::Rect {
                    rect: text_selection_box(t),
                    corner_radius: 0.0,
                    fill: Color32::TRANSPARENT,
                    stroke: outline,
                    dash: Some(SELECTION_DASH),
                });
            }
        }
        Geometry::Connector(c) => {
            primitives.push(Primitive::Arrow {
                from: c.start(),
                to: c.end(),
                stroke,
                head: rgba(255, 255, 255, 0.8),
            });
            for endpoint in [Endpoint::Start, Endpoint::End] {
                primitives.push(Primitive::Circle {
                    center: c.endpoint(endpoint),
                    radius: HANDLE_RADIUS,
                    fill: handle_fill(endpoint),
                    stroke: handle_stroke(),
                });
            }
        }
    }

    PrimitiveGroup {
        element: Some(element.id),
        primitives,
    }
}

/// Dashed box around selected text, sized from a character-count estimate
pub fn text_selection_box(text: &Text) -> Rect {
    text.bounds().expand(TEXT_SELECTION_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, factory};
    use crate::id_generator::generate_id;
    use egui::vec2;
    use float_cmp::approx_eq;

    fn element(kind: ElementKind) -> Element {
        factory::create(generate_id(), kind)
    }

    #[test]
    fn test_grid_line_count() {
        let list = render(&[], None, true);
        assert_eq!(list.groups.len(), 1);
        assert_eq!(list.groups[0].primitives.len(), 31 + 21);

        assert!(render(&[], None, false).groups.is_empty());
    }

    #[test]
    fn test_groups_follow_scene_order() {
        let elements = vec![element(ElementKind::Ellipse), element(ElementKind::Rectangle)];
        let list = render(&elements, None, true);
        let ids: Vec<_> = list.groups.iter().map(|g| g.element).collect();
        assert_eq!(ids, vec![None, Some(elements[0].id), Some(elements[1].id)]);
    }

    #[test]
    fn test_rectangle_selection_outline() {
        let rect = element(ElementKind::Rectangle);
        let list = render(std::slice::from_ref(&rect), Some(rect.id), false);
        let group = list.group_for(rect.id).unwrap();
        assert_eq!(group.primitives.len(), 2);

        let Primitive::Rect { rect: outline, dash, .. } = &group.primitives[1] else {
            panic!("expected a rect outline");
        };
        assert_eq!(*outline, Rect::from_min_size(pos2(194.0, 154.0), vec2(212.0, 132.0)));
        assert_eq!(*dash, Some(SELECTION_DASH));
    }

    #[test]
    fn test_ellipse_selection_outline() {
        let ellipse = element(ElementKind::Ellipse);
        let list = render(std::slice::from_ref(&ellipse), Some(ellipse.id), false);
        let Primitive::Ellipse { radius, .. } = &list.groups[0].primitives[1] else {
            panic!("expected an ellipse outline");
        };
        assert_eq!(*radius, vec2(100.0, 70.0));
    }

    #[test]
    fn test_text_selection_box() {
        let text = Text::new(260.0, 240.0, "Label", 18.0);
        let rect = text_selection_box(&text);
        assert_eq!(rect.min, pos2(252.0, 214.0));
        assert!(approx_eq!(f32, rect.width(), 5.0 * 18.0 * 0.6 + 16.0, ulps = 4));
        assert_eq!(rect.height(), 34.0);

        // Empty content and zero font size fall back to 5 chars at 18
        let empty = Text::new(0.0, 0.0, "", 0.0);
        let rect = text_selection_box(&empty);
        assert!(approx_eq!(f32, rect.width(), 70.0, ulps = 4));
        assert_eq!(rect.height(), 34.0);
    }

    #[test]
    fn test_connector_always_has_handles() {
        let arrow = element(ElementKind::Connector);
        let list = render(std::slice::from_ref(&arrow), None, false);
        assert!(list.has_arrows());
        assert!(!render(&[], None, true).has_arrows());

        let primitives = &list.groups[0].primitives;
        assert_eq!(primitives.len(), 3);
        assert!(matches!(primitives[0], Primitive::Arrow { .. }));
        assert_eq!(
            primitives[2],
            Primitive::Circle {
                center: pos2(360.0, 260.0),
                radius: 8.0,
                fill: handle_fill(Endpoint::End),
                stroke: handle_stroke(),
            }
        );

        // Selecting a connector adds no outline
        let selected = render(std::slice::from_ref(&arrow), Some(arrow.id), false);
        assert_eq!(selected.groups[0].primitives.len(), 3);
    }

    #[test]
    fn test_unparsable_color_uses_fallback() {
        let mut rect = element(ElementKind::Rectangle);
        rect.style.fill = "nonsense".into();
        let list = render(std::slice::from_ref(&rect), None, false);
        let Primitive::Rect { fill, .. } = &list.groups[0].primitives[0] else {
            panic!("expected a rect");
        };
        assert_eq!(*fill, color::FALLBACK_COLOR);
    }
}
