use eframe::egui;
use std::sync::mpsc;

use crate::engine::engine::Engine;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::assignment::Assignment;
use crate::model::bill::{BillLine, ParseWarning};
use crate::model::ledger::AllocationReport;
use crate::model::message::ChatMessage;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::right_panel::draw_right_panel;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftTab {
    Bill,
    Settings,
}

impl Default for LeftTab {
    fn default() -> Self {
        LeftTab::Bill
    }
}

/* =========================
   UI State
   ========================= */

/// The UI's mirror of the engine-owned session, plus widget state.
#[derive(Default)]
pub struct UiState {
    pub left_tab: LeftTab,
    pub settings: UiSettings,

    pub status: Option<String>,
    pub extracting: bool,

    pub image_name: Option<String>,
    pub preview: Option<egui::TextureHandle>,
    pub raw_text: String,

    pub lines: Vec<BillLine>,
    pub parse_warnings: Vec<ParseWarning>,

    pub roster_input: String,
    pub roster: Vec<String>,
    pub assignments: Vec<Assignment>,
    pub report: AllocationReport,

    pub chat_input: String,
    pub chat: Vec<ChatMessage>,
    pub should_auto_scroll: bool,
}

/* =========================
   Theme
   ========================= */

#[derive(Clone)]
pub struct Theme {
    pub user: egui::Color32,
    pub assistant: egui::Color32,
    pub system: egui::Color32,
    pub warning: egui::Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            user: egui::Color32::from_rgb(40, 70, 120),
            assistant: egui::Color32::from_rgb(40, 90, 60),
            system: egui::Color32::from_rgb(80, 80, 80),
            warning: egui::Color32::from_rgb(180, 140, 30),
        }
    }
}

/* =========================
   App
   ========================= */

pub struct BillSplitApp {
    pub ui: UiState,
    pub theme: Theme,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl BillSplitApp {
    pub fn new() -> Self {
        let settings = settings_io::load_settings();
        let config = settings.gemini_config();

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, config);
            engine.run();
        });

        Self {
            ui: UiState {
                settings,
                ..Default::default()
            },
            theme: Theme::default(),
            cmd_tx,
            resp_rx,
        }
    }

    fn handle_response(&mut self, resp: EngineResponse) {
        match resp {
            EngineResponse::BillExtracted {
                raw_text,
                lines,
                warnings,
            } => {
                self.ui.extracting = false;
                self.ui.status = Some(if lines.is_empty() {
                    "No items and prices were extracted from the image.".to_string()
                } else {
                    format!("Extracted {} items.", lines.len())
                });
                self.ui.assignments = vec![Assignment::default(); lines.len()];
                self.ui.raw_text = raw_text;
                self.ui.lines = lines;
                self.ui.parse_warnings = warnings;
            }

            EngineResponse::ExtractionFailed { error } => {
                self.ui.extracting = false;
                self.ui.status = Some(error);
            }

            EngineResponse::RosterUpdated {
                roster,
                assignments,
            } => {
                self.ui.roster = roster;
                self.ui.assignments = assignments;
            }

            EngineResponse::SummaryUpdated { report } => {
                self.ui.report = report;
            }

            EngineResponse::ChatHistory(messages) => {
                self.ui.chat = messages;
                self.ui.should_auto_scroll = true;
            }

            EngineResponse::ConnectionStatus { message } => {
                self.ui.status = Some(message);
            }
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for BillSplitApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            self.handle_response(resp);
        }

        draw_left_panel(ctx, &mut self.ui, &self.cmd_tx);
        draw_right_panel(ctx, &mut self.ui, &self.theme, &self.cmd_tx);
        draw_center_panel(ctx, &mut self.ui, &self.theme, &self.cmd_tx);

        self.ui.should_auto_scroll = false;
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn bubble(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    egui::Frame::none()
        .fill(color)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
        });
}
