use egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, vec2};

use crate::element::ElementKind;

/// Square button that adds one kind of element
pub struct ToolButton {
    pub kind: ElementKind,
    pub icon: &'static str,
}

impl ToolButton {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            icon: Self::icon_for(kind),
        }
    }

    pub fn icon_for(kind: ElementKind) -> &'static str {
        match kind {
            ElementKind::Rectangle => "▭",
            ElementKind::Ellipse => "◯",
            ElementKind::Text => "T",
            ElementKind::Connector => "➝",
        }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let button_size = vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.is_pointer_button_down_on() {
                Color32::from_rgb(100, 181, 246)
            } else if response.hovered() {
                Color32::from_gray(40)
            } else {
                Color32::from_gray(30)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.icon,
                FontId::proportional(20.0),
                Color32::WHITE,
            );

            if response.hovered() {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    Stroke::new(1.0, Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(format!("Add {}", self.kind))
    }
}
