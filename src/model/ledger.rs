use std::collections::HashMap;

/// Final mapping from participant name to total amount owed.
pub type Ledger = HashMap<String, f64>;

/// A bill line whose resolved payer set came up empty.
/// Its charge contributes nothing to anyone.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationWarning {
    pub line_index: usize,
    pub item_name: String,
}

impl AllocationWarning {
    pub fn message(&self) -> String {
        format!("No participants selected for item: {}", self.item_name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AllocationReport {
    pub ledger: Ledger,
    pub warnings: Vec<AllocationWarning>,
}
