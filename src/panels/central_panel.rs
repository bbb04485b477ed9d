use egui::{Color32, Sense};

use crate::FigureApp;
use crate::geometry::{fit_canvas, view_transform};
use crate::renderer::painter;

const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(15, 23, 42);

pub fn central_panel(app: &mut FigureApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(available, Sense::click_and_drag());
        let canvas_rect = fit_canvas(available);

        // Handle input
        app.handle_input(ctx, canvas_rect, response.contains_pointer());

        // Render the canvas
        let painter = ui.painter_at(canvas_rect);
        painter.rect_filled(canvas_rect, 0.0, CANVAS_BACKGROUND);
        painter::paint(&painter, &view_transform(canvas_rect), &app.draw_list());
    });
}
