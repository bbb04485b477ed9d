use crate::FigureApp;
use crate::components::ToolButton;
use crate::element::ElementKind;

pub fn tools_panel(app: &mut FigureApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(56.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                for kind in ElementKind::ALL {
                    if ToolButton::new(kind).show(ui).clicked() {
                        log::info!("Add {kind} from tools panel");
                        app.add_element(kind);
                    }
                    ui.add_space(4.0);
                }

                ui.separator();

                if ui
                    .add_enabled(!app.scene().is_empty(), egui::Button::new("🗑"))
                    .on_hover_text("Clear canvas")
                    .clicked()
                {
                    app.clear();
                }
            });
        });
}
