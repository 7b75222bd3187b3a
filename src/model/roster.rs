/// Split a raw comma-separated name list into a roster.
/// Names are trimmed, empty entries dropped, and duplicates collapse to
/// their first occurrence so the roster keeps its entry order.
pub fn parse_roster(raw: &str) -> Vec<String> {
    let mut roster: Vec<String> = Vec::new();

    for name in raw.split(',') {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if roster.iter().any(|existing| existing == name) {
            continue;
        }
        roster.push(name.to_string());
    }

    roster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_empty_entries() {
        assert_eq!(
            parse_roster(" Alice , Bob ,, Carol ,"),
            vec!["Alice", "Bob", "Carol"]
        );
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        assert_eq!(
            parse_roster("Alice, Bob, Alice , Bob"),
            vec!["Alice", "Bob"]
        );
    }

    #[test]
    fn empty_input_yields_empty_roster() {
        assert!(parse_roster("").is_empty());
        assert!(parse_roster(" , , ").is_empty());
    }
}
