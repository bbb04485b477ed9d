use crate::FigureApp;

pub fn toolbar(app: &mut FigureApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Figure");
            ui.separator();

            let mut show_grid = app.show_grid();
            if ui
                .checkbox(&mut show_grid, "Grid")
                .on_hover_text("Show the grid and snap to it")
                .changed()
            {
                app.set_show_grid(show_grid);
            }

            let exporting = app.is_exporting();
            if ui
                .add_enabled(!exporting, egui::Button::new("Export PNG"))
                .clicked()
            {
                app.request_export();
            }
            if exporting {
                ui.spinner();
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
    });
}
