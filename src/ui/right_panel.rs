use std::sync::mpsc::Sender;

use eframe::egui;
use egui::Layout;

use crate::engine::protocol::EngineCommand;
use crate::model::message::ChatMessage;
use crate::ui::app::{bubble, Theme, UiState};

pub fn draw_right_panel(
    ctx: &egui::Context,
    state: &mut UiState,
    theme: &Theme,
    cmd_tx: &Sender<EngineCommand>,
) {
    egui::SidePanel::right("chat")
        .resizable(true)
        .default_width(320.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Chat About the Bill");
            ui.separator();

            // ---------- Input bar ----------
            egui::TopBottomPanel::bottom("chat_input").show_inside(ui, |ui| {
                let mut send_now = false;

                ui.horizontal(|ui| {
                    let response = ui.add_sized(
                        [ui.available_width() - 56.0, 24.0],
                        egui::TextEdit::singleline(&mut state.chat_input)
                            .hint_text("Ask about the bill…"),
                    );

                    if response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    {
                        send_now = true;
                    }

                    if ui.button("Send").clicked() {
                        send_now = true;
                    }
                });

                if send_now {
                    let text = state.chat_input.trim().to_string();
                    if !text.is_empty() {
                        let _ = cmd_tx.send(EngineCommand::AskQuestion { text });
                        state.chat_input.clear();
                    }
                }
            });

            // ---------- Transcript ----------
            egui::ScrollArea::vertical()
                .stick_to_bottom(state.should_auto_scroll)
                .show(ui, |ui| {
                    for msg in &state.chat {
                        draw_chat_message(ui, theme, msg);
                    }
                });
        });
}

fn draw_chat_message(ui: &mut egui::Ui, theme: &Theme, msg: &ChatMessage) {
    let (color, right, text) = match msg {
        ChatMessage::User(t) => (theme.user, true, format!("You: {t}")),
        ChatMessage::Assistant(t) => (theme.assistant, false, t.clone()),
        ChatMessage::System(t) => (theme.system, false, t.clone()),
    };

    ui.add_space(6.0);

    if right {
        ui.with_layout(Layout::right_to_left(egui::Align::TOP), |ui| {
            bubble(ui, color, &text);
        });
    } else {
        bubble(ui, color, &text);
    }
}
