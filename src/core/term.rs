use crate::record::Record;

/// Case-insensitive substring needle.
///
/// Lowercases the term once so scanning only lowercases haystacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    /// Builds a needle from a raw user term.
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// Lowercased form of the term.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// True when `value`, lowercased, contains the term.
    pub fn matches(&self, value: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        value.to_lowercase().contains(&self.needle)
    }

    /// True when any field of `record` matches.
    pub fn matches_any(&self, record: &Record) -> bool {
        record.values().any(|v| self.matches(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case_on_both_sides() {
        let term = SearchTerm::new("ACME");
        assert!(term.matches("Acme Inc"));
        assert!(term.matches("big acme"));
        assert!(!term.matches("Acm"));
    }

    #[test]
    fn empty_term_matches_everything() {
        let term = SearchTerm::new("");
        assert!(term.matches(""));
        assert!(term.matches("anything"));
    }

    #[test]
    fn any_field_match() {
        let rec: Record = [("title", "Data Analyst"), ("employer", "Acme")]
            .into_iter()
            .collect();
        assert!(SearchTerm::new("analyst").matches_any(&rec));
        assert!(SearchTerm::new("acme").matches_any(&rec));
        assert!(!SearchTerm::new("engineer").matches_any(&rec));
    }
}
