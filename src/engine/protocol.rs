use crate::engine::gemini_client::GeminiConfig;
use crate::model::assignment::Assignment;
use crate::model::bill::{BillLine, ParseWarning};
use crate::model::ledger::AllocationReport;
use crate::model::message::ChatMessage;

pub enum EngineCommand {
    ExtractBill {
        image_bytes: Vec<u8>,
        mime_type: String,
    },
    SetRoster {
        raw_names: String,
    },
    SetAssignment {
        line_index: usize,
        assignment: Assignment,
    },
    AskQuestion {
        text: String,
    },
    UpdateConfig(GeminiConfig),
    TestConnection,
}

pub enum EngineResponse {
    BillExtracted {
        raw_text: String,
        lines: Vec<BillLine>,
        warnings: Vec<ParseWarning>,
    },
    ExtractionFailed {
        error: String,
    },
    RosterUpdated {
        roster: Vec<String>,
        assignments: Vec<Assignment>,
    },
    SummaryUpdated {
        report: AllocationReport,
    },
    ChatHistory(Vec<ChatMessage>),
    ConnectionStatus {
        message: String,
    },
}
