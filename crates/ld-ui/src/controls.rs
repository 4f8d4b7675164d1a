//! Control panel: line width, point entry and surface size

use egui::{DragValue, TextEdit, Ui};
use ld_core::{InputAction, RenderConfig};

/// Persistent state of the control widgets
pub struct ControlPanel {
    /// Line width shown in the drag value
    pub line_width: f32,

    /// Text of the coordinate field
    pub coordinate_input: String,

    /// Text of the width field
    pub width_input: String,

    /// Text of the height field
    pub height_input: String,
}

impl ControlPanel {
    /// Create a panel showing the given configuration
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            line_width: config.line_width,
            coordinate_input: String::new(),
            width_input: config.width.to_string(),
            height_input: config.height.to_string(),
        }
    }

    /// Draw the controls and collect the actions the user triggered
    pub fn ui(&mut self, ui: &mut Ui) -> Vec<InputAction> {
        let mut actions = Vec::new();

        ui.vertical(|ui| {
            ui.heading("Line");
            ui.horizontal(|ui| {
                ui.label("Width");
                let response = ui.add(DragValue::new(&mut self.line_width).speed(0.1));
                if response.changed() {
                    actions.push(InputAction::SetLineWidth(self.line_width));
                }
            });

            ui.separator();
            ui.heading("Points");
            if ui.button("Add random segment").clicked() {
                actions.push(InputAction::AddRandom);
            }
            ui.horizontal(|ui| {
                let field = ui.add(
                    TextEdit::singleline(&mut self.coordinate_input)
                        .hint_text("x,y")
                        .desired_width(120.0),
                );
                let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Add").clicked() || submitted {
                    actions.push(InputAction::AddCoordinate(self.coordinate_input.clone()));
                }
            });

            ui.separator();
            ui.heading("Surface");
            egui::Grid::new("surface_size_grid").num_columns(2).show(ui, |ui| {
                ui.label("Width");
                ui.add(TextEdit::singleline(&mut self.width_input).desired_width(80.0));
                ui.end_row();

                ui.label("Height");
                ui.add(TextEdit::singleline(&mut self.height_input).desired_width(80.0));
                ui.end_row();
            });
            if ui.button("Resize").clicked() {
                actions.push(InputAction::Resize {
                    width: self.width_input.clone(),
                    height: self.height_input.clone(),
                });
            }
        });

        actions
    }
}
