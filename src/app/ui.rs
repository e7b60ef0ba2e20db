use super::actions::BOTTOM_ACTIONS;
use super::validation::ValidationPhase;
use super::BatchValidator;
use crate::selection::{StatusTone, TableRow, TableView};
use crate::utils::labels;
use eframe::egui::{self, Align2, Color32, RichText};

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);

fn tone_color(ui: &egui::Ui, tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Neutral => ui.visuals().text_color().gamma_multiply(0.7),
        StatusTone::Success => Color32::from_rgb(0, 180, 0),
        StatusTone::Failure => Color32::from_rgb(220, 50, 50),
    }
}

impl BatchValidator {
    pub fn render(&mut self, ctx: &egui::Context) {
        let interactive = self.state.alert.is_none();

        egui::TopBottomPanel::bottom("bottom_actions").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                self.render_bottom_actions(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading(labels::APP_TITLE);
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Choose files and validate them against the server")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_department_select(ui);
                    ui.add_space(10.0);
                    self.render_upload_controls(ui);
                    ui.add_space(10.0);
                    self.render_file_table(ui);
                    ui.add_space(20.0);
                });
            });
        });

        self.render_alert(ctx);
    }

    fn render_department_select(&mut self, ui: &mut egui::Ui) {
        let loading = self.state.is_loading_departments();
        let dropdown = &mut self.state.dropdown;
        let selected_text = dropdown.selected_label().to_string();

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Department");
                egui::ComboBox::from_id_source("department_select")
                    .selected_text(selected_text)
                    .width(220.0)
                    .show_ui(ui, |ui| {
                        for option in &dropdown.options {
                            ui.selectable_value(
                                &mut dropdown.selected,
                                option.value.clone(),
                                option.label.as_str(),
                            );
                        }
                    });
                if loading {
                    ui.spinner();
                }
            });
        });
    }

    fn render_upload_controls(&mut self, ui: &mut egui::Ui) {
        let submitting = self.validation.is_submitting();

        ui.horizontal(|ui| {
            let upload = egui::Button::new("📁 Upload").min_size(egui::vec2(120.0, 32.0));
            if ui.add_enabled(!submitting, upload).clicked() {
                self.trigger_picker();
            }

            let count = self.selection.len();
            if count > 0 {
                ui.label(format!("{} file(s) selected", count));
            }
        });
    }

    fn render_file_table(&mut self, ui: &mut egui::Ui) {
        let view = TableView::project(&self.selection);
        let can_edit = !self.validation.is_submitting();
        let mut remove = None;

        ui.group(|ui| {
            egui::Grid::new("file_table")
                .num_columns(4)
                .striped(true)
                .min_col_width(80.0)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for heading in ["File name", "Size", "Status", "Action"] {
                        ui.strong(heading);
                    }
                    ui.end_row();

                    for row in &view.rows {
                        if let TableRow::File {
                            index,
                            name,
                            size,
                            status,
                            tone,
                        } = row
                        {
                            ui.label(name.as_str());
                            ui.label(size.as_str());
                            let color = tone_color(ui, *tone);
                            ui.colored_label(color, status.as_str());
                            if ui.add_enabled(can_edit, egui::Button::new("Delete")).clicked() {
                                remove = Some(*index);
                            }
                            ui.end_row();
                        }
                    }
                });

            if let Some(TableRow::Empty { message }) = view.rows.first() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(*message).color(ui.visuals().text_color().gamma_multiply(0.6)),
                    );
                });
                ui.add_space(12.0);
            }
        });

        if let Some(index) = remove {
            self.remove_file(index);
        }

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            let label = match self.validation.phase() {
                ValidationPhase::Submitting { submitted } => {
                    format!("⏳ Validating {} file(s)...", submitted)
                }
                ValidationPhase::Idle => "✅ Validate".to_string(),
            };
            let button = egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));
            let enabled = view.validate_enabled && self.validate_enabled();
            if ui.add_enabled(enabled, button).clicked() {
                self.start_validation();
            }
        });
    }

    fn render_bottom_actions(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        let actions = &self.actions;
        ui.horizontal(|ui| {
            for entry in BOTTOM_ACTIONS
                .iter()
                .filter(|entry| actions.is_registered(entry.action))
            {
                if ui
                    .add(egui::Button::new(RichText::new(entry.label).color(ACCENT)))
                    .clicked()
                {
                    clicked = Some(entry.action);
                }
            }
        });

        if let Some(action) = clicked {
            self.run_bottom_action(action);
        }
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.alert.clone() else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.colored_label(Color32::from_rgb(220, 50, 50), message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged {
            self.state.alert = None;
        }
    }
}
