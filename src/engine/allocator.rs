use crate::model::assignment::Assignment;
use crate::model::bill::BillLine;
use crate::model::ledger::{AllocationReport, AllocationWarning, Ledger};

/// Compute what every roster member owes.
/// Pure function of its inputs: the ledger starts at zero for every
/// participant and is rebuilt from scratch on every call, so there is no
/// stale state to carry between recomputations. `assignments` is indexed
/// by line; a missing entry counts as the empty subset.
pub fn allocate(
    lines: &[BillLine],
    roster: &[String],
    assignments: &[Assignment],
) -> AllocationReport {
    let mut ledger: Ledger = roster.iter().map(|name| (name.clone(), 0.0)).collect();
    let mut warnings = Vec::new();

    let empty = Assignment::default();

    for (line_index, line) in lines.iter().enumerate() {
        let assignment = assignments.get(line_index).unwrap_or(&empty);
        let payers = assignment.resolve(roster);

        if payers.is_empty() {
            // The charge is dropped, not split among everyone.
            warnings.push(AllocationWarning {
                line_index,
                item_name: line.item_name.clone(),
            });
            continue;
        }

        let share = line.price / payers.len() as f64;
        for payer in payers {
            if let Some(owed) = ledger.get_mut(payer) {
                *owed += share;
            }
        }
    }

    AllocationReport { ledger, warnings }
}
