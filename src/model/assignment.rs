use serde::{Deserialize, Serialize};

/// Who pays for one bill line.
/// `SharedByAll` overrides any explicit subset and means every current
/// roster member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Assignment {
    SharedByAll,
    Among(Vec<String>),
}

impl Default for Assignment {
    fn default() -> Self {
        Assignment::Among(Vec::new())
    }
}

impl Assignment {
    /// Resolve to the concrete payer set against the current roster.
    /// Names no longer on the roster are excluded, not an error.
    pub fn resolve<'a>(&'a self, roster: &'a [String]) -> Vec<&'a str> {
        match self {
            Assignment::SharedByAll => roster.iter().map(String::as_str).collect(),
            Assignment::Among(names) => names
                .iter()
                .filter(|name| roster.contains(name))
                .map(String::as_str)
                .collect(),
        }
    }

    /// Drop assigned names that left the roster.
    pub fn prune(&mut self, roster: &[String]) {
        if let Assignment::Among(names) = self {
            names.retain(|name| roster.contains(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<String> {
        vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()]
    }

    #[test]
    fn shared_by_all_resolves_to_whole_roster() {
        let roster = roster();
        let payers = Assignment::SharedByAll.resolve(&roster);
        assert_eq!(payers, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn unknown_names_are_silently_excluded() {
        let roster = roster();
        let assignment =
            Assignment::Among(vec!["Bob".to_string(), "Mallory".to_string()]);
        assert_eq!(assignment.resolve(&roster), vec!["Bob"]);
    }

    #[test]
    fn prune_removes_departed_participants() {
        let mut assignment =
            Assignment::Among(vec!["Alice".to_string(), "Dave".to_string()]);
        assignment.prune(&roster());
        assert_eq!(assignment, Assignment::Among(vec!["Alice".to_string()]));
    }
}
