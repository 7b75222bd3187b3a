use std::sync::mpsc::Sender;

use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::model::assignment::Assignment;
use crate::ui::app::{Theme, UiState};

pub fn draw_center_panel(
    ctx: &egui::Context,
    state: &mut UiState,
    theme: &Theme,
    cmd_tx: &Sender<EngineCommand>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            draw_items(ui, state, theme, cmd_tx);
            ui.separator();
            draw_summary(ui, state, theme);
        });
    });
}

/* =========================
   Items & assignments
   ========================= */

fn draw_items(
    ui: &mut egui::Ui,
    state: &mut UiState,
    theme: &Theme,
    cmd_tx: &Sender<EngineCommand>,
) {
    ui.heading("Assign Items to Participants");

    if state.lines.is_empty() {
        ui.label(egui::RichText::new("Upload a bill image to get started.").weak());
    }

    let UiState {
        lines,
        roster,
        assignments,
        ..
    } = state;

    for (line_index, line) in lines.iter().enumerate() {
        let Some(assignment) = assignments.get_mut(line_index) else {
            continue;
        };

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&line.item_name).strong());
                ui.label(format!("${:.2}", line.price));
            });

            let mut changed = false;

            let mut shared = matches!(assignment, Assignment::SharedByAll);
            if ui.checkbox(&mut shared, "Shared by everyone").changed() {
                *assignment = if shared {
                    Assignment::SharedByAll
                } else {
                    Assignment::default()
                };
                changed = true;
            }

            if let Assignment::Among(names) = assignment {
                if roster.is_empty() {
                    ui.label(
                        egui::RichText::new("Add participants to assign this item.").weak(),
                    );
                }
                ui.horizontal_wrapped(|ui| {
                    for member in roster.iter() {
                        let mut selected = names.contains(member);
                        if ui.checkbox(&mut selected, member.as_str()).changed() {
                            if selected {
                                names.push(member.clone());
                            } else {
                                names.retain(|n| n != member);
                            }
                            changed = true;
                        }
                    }
                });
            }

            if changed {
                let _ = cmd_tx.send(EngineCommand::SetAssignment {
                    line_index,
                    assignment: assignment.clone(),
                });
            }
        });
    }

    if !state.parse_warnings.is_empty() {
        ui.add_space(6.0);
        for warning in &state.parse_warnings {
            ui.label(egui::RichText::new(warning.message()).color(theme.warning));
        }
    }
}

/* =========================
   Payment summary
   ========================= */

fn draw_summary(ui: &mut egui::Ui, state: &UiState, theme: &Theme) {
    ui.heading("Amount each person owes");

    if state.roster.is_empty() {
        ui.label(egui::RichText::new("No participants yet.").weak());
        return;
    }

    for name in &state.roster {
        let owed = state.report.ledger.get(name).copied().unwrap_or(0.0);
        ui.label(format!("{}: ${:.2}", name, owed));
    }

    for warning in &state.report.warnings {
        ui.label(egui::RichText::new(warning.message()).color(theme.warning));
    }
}
