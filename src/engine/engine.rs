use std::sync::mpsc::{Receiver, Sender};

use crate::engine::allocator::allocate;
use crate::engine::gemini_client::{GeminiClient, GeminiConfig};
use crate::engine::line_parser::parse_bill_text;
use crate::engine::prompt_builder;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::message::ChatMessage;
use crate::model::roster::parse_roster;
use crate::model::session::BillSession;

/// Owns the session record and serializes every mutation.
/// Runs on its own thread; blocking model calls happen here so the UI
/// thread never waits on the network.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    client: GeminiClient,
    session: BillSession,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        config: GeminiConfig,
    ) -> Self {
        Self {
            rx,
            tx,
            client: GeminiClient::new(config),
            session: BillSession::default(),
        }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::ExtractBill {
                    image_bytes,
                    mime_type,
                } => self.extract_bill(&image_bytes, &mime_type),

                EngineCommand::SetRoster { raw_names } => {
                    self.session.set_roster(parse_roster(&raw_names));
                    let _ = self.tx.send(EngineResponse::RosterUpdated {
                        roster: self.session.roster.clone(),
                        assignments: self.session.assignments.clone(),
                    });
                    self.send_summary();
                }

                EngineCommand::SetAssignment {
                    line_index,
                    assignment,
                } => {
                    if self.session.set_assignment(line_index, assignment) {
                        self.send_summary();
                    }
                }

                EngineCommand::AskQuestion { text } => self.ask_question(text),

                EngineCommand::UpdateConfig(config) => {
                    self.client = GeminiClient::new(config);
                }

                EngineCommand::TestConnection => {
                    let message = match self.client.test_connection() {
                        Ok(status) => status,
                        Err(e) => format!("Connection failed: {e:#}"),
                    };
                    let _ = self.tx.send(EngineResponse::ConnectionStatus { message });
                }
            }
        }
    }

    fn extract_bill(&mut self, image_bytes: &[u8], mime_type: &str) {
        match self.client.extract_bill_text(image_bytes, mime_type) {
            Ok(text) => {
                let parsed = parse_bill_text(&text);
                self.session.set_parsed(text, parsed);

                let _ = self.tx.send(EngineResponse::BillExtracted {
                    raw_text: self.session.raw_text.clone(),
                    lines: self.session.lines.clone(),
                    warnings: self.session.parse_warnings.clone(),
                });
                self.send_summary();
            }
            Err(e) => {
                let _ = self.tx.send(EngineResponse::ExtractionFailed {
                    error: format!("Bill extraction failed: {e:#}"),
                });
            }
        }
    }

    fn ask_question(&mut self, text: String) {
        self.session.chat.push(ChatMessage::User(text.clone()));

        if self.session.lines.is_empty() {
            self.session.chat.push(ChatMessage::System(
                "No bill data available to chat about.".to_string(),
            ));
        } else {
            let prompt = prompt_builder::question_prompt(
                &self.session.lines,
                &self.session.roster,
                &text,
            );
            // Service failures become a displayable transcript entry, never
            // a crash.
            let reply = match self.client.answer(&prompt) {
                Ok(answer) => ChatMessage::Assistant(answer),
                Err(e) => ChatMessage::System(format!(
                    "An error occurred while generating the response: {e:#}"
                )),
            };
            self.session.chat.push(reply);
        }

        let _ = self
            .tx
            .send(EngineResponse::ChatHistory(self.session.chat.clone()));
    }

    /// Full recomputation from current inputs after every mutation.
    fn send_summary(&self) {
        let report = allocate(
            &self.session.lines,
            &self.session.roster,
            &self.session.assignments,
        );
        let _ = self.tx.send(EngineResponse::SummaryUpdated { report });
    }
}
