use std::fs;
use std::sync::mpsc::Sender;

use anyhow::{bail, Context, Result};
use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::ui::app::{LeftTab, UiState};
use crate::ui::settings_io;

pub fn draw_left_panel(
    ctx: &egui::Context,
    state: &mut UiState,
    cmd_tx: &Sender<EngineCommand>,
) {
    egui::SidePanel::left("left")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.left_tab, LeftTab::Bill, "Bill");
                ui.selectable_value(&mut state.left_tab, LeftTab::Settings, "Settings");
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match state.left_tab {
                LeftTab::Bill => draw_bill_tab(ui, state, cmd_tx),
                LeftTab::Settings => draw_settings_tab(ui, state, cmd_tx),
            });
        });
}

/* =========================
   Bill tab
   ========================= */

fn draw_bill_tab(ui: &mut egui::Ui, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    ui.heading("Upload Bill Image");

    if ui.button("📂 Choose an image…").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("image", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            match load_bill_image(&path) {
                Ok((mime_type, image_bytes, preview)) => {
                    state.preview = Some(ui.ctx().load_texture(
                        "bill_preview",
                        preview,
                        egui::TextureOptions::LINEAR,
                    ));
                    state.image_name = Some(name.clone());
                    state.extracting = true;
                    state.status = Some(format!("Extracting items from {}…", name));

                    let _ = cmd_tx.send(EngineCommand::ExtractBill {
                        image_bytes,
                        mime_type,
                    });
                }
                Err(e) => {
                    state.status = Some(format!("Could not load {}: {:#}", name, e));
                }
            }
        }
    }

    if let Some(name) = &state.image_name {
        ui.label(egui::RichText::new(name).weak());
    }

    if let Some(preview) = &state.preview {
        ui.add(egui::Image::new(preview).max_width(ui.available_width()));
    }

    if state.extracting {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Waiting for the model…");
        });
    }

    if !state.raw_text.is_empty() {
        ui.collapsing("Extracted text", |ui| {
            ui.label(&state.raw_text);
        });
    }

    ui.separator();

    /* -------- Participants -------- */

    ui.heading("Participants");
    ui.label("Enter names, comma-separated");

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.roster_input)
                .hint_text("Alice, Bob, Carol"),
        );
        if ui.button("Apply").clicked() {
            let _ = cmd_tx.send(EngineCommand::SetRoster {
                raw_names: state.roster_input.clone(),
            });
        }
    });

    if state.roster.is_empty() {
        ui.label(egui::RichText::new("No participants yet").weak());
    } else {
        for name in &state.roster {
            ui.label(format!("• {}", name));
        }
    }

    ui.separator();

    if ui.button("Test connection").clicked() {
        let _ = cmd_tx.send(EngineCommand::TestConnection);
    }

    if let Some(status) = &state.status {
        ui.add_space(4.0);
        ui.label(egui::RichText::new(status).weak());
    }
}

/// Read the picked file, sniff its MIME type, and build a preview image.
/// Only JPEG and PNG bills are supported.
fn load_bill_image(
    path: &std::path::Path,
) -> Result<(String, Vec<u8>, egui::ColorImage)> {
    let bytes = fs::read(path).context("could not read the file")?;

    let format = image::guess_format(&bytes).context("unrecognized image format")?;
    let mime_type = format.to_mime_type().to_string();
    if mime_type != "image/jpeg" && mime_type != "image/png" {
        bail!("unsupported image type: {}", mime_type);
    }

    let decoded = image::load_from_memory(&bytes).context("could not decode the image")?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let preview = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

    Ok((mime_type, bytes, preview))
}

/* =========================
   Settings tab
   ========================= */

fn draw_settings_tab(ui: &mut egui::Ui, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    ui.heading("Settings");

    ui.label("UI Scale");
    ui.add(egui::Slider::new(&mut state.settings.ui_scale, 0.75..=2.0));

    ui.separator();

    ui.label("Gemini API key");
    ui.add(
        egui::TextEdit::singleline(&mut state.settings.api_key)
            .password(true)
            .hint_text("empty = use GOOGLE_API_KEY"),
    );

    ui.label("Extraction model");
    ui.text_edit_singleline(&mut state.settings.extract_model);

    ui.label("Chat model");
    ui.text_edit_singleline(&mut state.settings.chat_model);

    ui.add_space(8.0);

    if ui.button("Save").clicked() {
        settings_io::save_settings(&state.settings);
        let _ = cmd_tx.send(EngineCommand::UpdateConfig(state.settings.gemini_config()));
        state.status = Some("Settings saved.".to_string());
    }
}
