use serde::{Deserialize, Serialize};

/// One parsed (item name, price) record from the extracted bill text.
/// Lines are identified by their index in the parsed sequence, so two
/// items with identical name and price stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillLine {
    pub item_name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseWarning {
    /// The line did not end with a numeric token.
    NoTrailingPrice { line: String },
    /// The trailing token matched but failed numeric conversion.
    BadPrice { line: String },
}

impl ParseWarning {
    pub fn message(&self) -> String {
        match self {
            ParseWarning::NoTrailingPrice { line } => {
                format!("No price found in line: {}", line)
            }
            ParseWarning::BadPrice { line } => {
                format!("Failed to parse price for line: {}", line)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedBill {
    pub lines: Vec<BillLine>,
    pub warnings: Vec<ParseWarning>,
}
