use crate::model::assignment::Assignment;
use crate::model::bill::{BillLine, ParseWarning, ParsedBill};
use crate::model::message::ChatMessage;

/// Everything the engine knows about the current interaction.
/// Owned exclusively by the engine thread; the UI only ever sees clones.
#[derive(Debug, Default)]
pub struct BillSession {
    pub raw_text: String,
    pub lines: Vec<BillLine>,
    pub parse_warnings: Vec<ParseWarning>,
    pub roster: Vec<String>,
    pub assignments: Vec<Assignment>,
    pub chat: Vec<ChatMessage>,
}

impl BillSession {
    /// Install a freshly parsed bill. Assignments reset to empty subsets,
    /// one per line.
    pub fn set_parsed(&mut self, raw_text: String, parsed: ParsedBill) {
        self.raw_text = raw_text;
        self.assignments = vec![Assignment::default(); parsed.lines.len()];
        self.lines = parsed.lines;
        self.parse_warnings = parsed.warnings;
    }

    /// Replace the roster and drop assignment entries that reference
    /// participants no longer on it.
    pub fn set_roster(&mut self, roster: Vec<String>) {
        self.roster = roster;
        for assignment in &mut self.assignments {
            assignment.prune(&self.roster);
        }
    }

    /// Returns false when the index does not name a parsed line.
    pub fn set_assignment(&mut self, line_index: usize, assignment: Assignment) -> bool {
        match self.assignments.get_mut(line_index) {
            Some(slot) => {
                *slot = assignment;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bill_resets_assignments() {
        let mut session = BillSession::default();
        session.set_parsed(
            "Burger 9.99".to_string(),
            ParsedBill {
                lines: vec![BillLine {
                    item_name: "Burger".to_string(),
                    price: 9.99,
                }],
                warnings: Vec::new(),
            },
        );
        session.set_assignment(0, Assignment::SharedByAll);

        session.set_parsed(
            "Fries 3.25".to_string(),
            ParsedBill {
                lines: vec![BillLine {
                    item_name: "Fries".to_string(),
                    price: 3.25,
                }],
                warnings: Vec::new(),
            },
        );
        assert_eq!(session.assignments, vec![Assignment::default()]);
    }

    #[test]
    fn roster_change_prunes_assignments() {
        let mut session = BillSession::default();
        session.set_parsed(
            "Burger 9.99".to_string(),
            ParsedBill {
                lines: vec![BillLine {
                    item_name: "Burger".to_string(),
                    price: 9.99,
                }],
                warnings: Vec::new(),
            },
        );
        session.set_roster(vec!["Alice".to_string(), "Bob".to_string()]);
        session.set_assignment(
            0,
            Assignment::Among(vec!["Alice".to_string(), "Bob".to_string()]),
        );

        session.set_roster(vec!["Alice".to_string()]);
        assert_eq!(
            session.assignments[0],
            Assignment::Among(vec!["Alice".to_string()])
        );
    }

    #[test]
    fn out_of_range_assignment_is_rejected() {
        let mut session = BillSession::default();
        assert!(!session.set_assignment(3, Assignment::SharedByAll));
    }
}
