use egui::{DragValue, RichText, Ui};

use crate::FigureApp;
use crate::color;
use crate::element::{Element, Field};
use crate::input::EditCommand;
use crate::inspector;

/// One edit coming out of the inspector this frame
enum Edit {
    Number(Field, f32),
    Text(Field, String),
    Command(EditCommand),
}

pub fn inspector_panel(app: &mut FigureApp, ctx: &egui::Context) {
    egui::SidePanel::right("inspector_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Inspector");
            ui.separator();

            let Some(selected) = app.scene().selected() else {
                ui.label(
                    RichText::new("Select an element to edit its properties.").weak(),
                );
                return;
            };

            let edits = element_fields(ui, selected);
            for edit in edits {
                match edit {
                    Edit::Number(field, value) => {
                        inspector::set_number(app.scene_mut(), field, value);
                    }
                    Edit::Text(field, input) => {
                        inspector::set_field(app.scene_mut(), field, &input);
                    }
                    Edit::Command(command) => app.apply_command(command),
                }
            }
        });
}

/// Draw the fields of `element`, collecting edits to apply afterwards
fn element_fields(ui: &mut Ui, element: &Element) -> Vec<Edit> {
    let mut edits = Vec::new();

    egui::Grid::new("inspector_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Type");
            ui.label(RichText::new(element.kind().as_str()).monospace());
            ui.end_row();

            for &field in Field::for_kind(element.kind()) {
                ui.label(field.label());
                if let Some(edit) = field_widget(ui, element, field) {
                    edits.push(edit);
                }
                ui.end_row();
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Duplicate").clicked() {
            edits.push(Edit::Command(EditCommand::DuplicateSelected));
        }
        if ui.button("Delete").clicked() {
            edits.push(Edit::Command(EditCommand::DeleteSelected));
        }
    });

    edits
}

fn field_widget(ui: &mut Ui, element: &Element, field: Field) -> Option<Edit> {
    if let Some(mut value) = inspector::numeric_value(element, field) {
        let changed = ui.add(DragValue::new(&mut value).speed(1.0)).changed();
        return changed.then_some(Edit::Number(field, value));
    }

    if let Some(hex) = inspector::color_value(element, field) {
        let mut srgb = color::hex_to_srgb(&hex);
        let changed = egui::color_picker::color_edit_button_srgb(ui, &mut srgb).changed();
        return changed.then(|| Edit::Text(field, color::srgb_to_hex(srgb)));
    }

    if let Some(content) = inspector::text_value(element, field) {
        let mut content = content.to_owned();
        let changed = ui.text_edit_singleline(&mut content).changed();
        return changed.then_some(Edit::Text(field, content));
    }

    None
}
