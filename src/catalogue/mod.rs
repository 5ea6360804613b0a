//! The query catalogue.
//!
//! An ordered, immutable list of analytical questions, each paired with the SQL
//! that answers it. The catalogue is plain data: presentation code lists the
//! questions, the user picks one (or the custom option), and the selected SQL
//! seeds the editor.

mod entries;
mod tables;

pub use tables::{find_table, known_table_names, TableSpec, KNOWN_TABLES};

use serde::Serialize;

/// Label of the picker option that starts from an empty editor.
pub const CUSTOM_QUERY_LABEL: &str = "Custom Query";

/// A question and the SQL that answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    pub question: &'static str,
    pub sql: &'static str,
}

/// What the picker currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// A catalogue entry by zero-based position.
    Entry(usize),
    /// The custom option; seeds an empty editor.
    #[default]
    Custom,
}

/// Read-only view over the catalogue entries.
#[derive(Debug, Clone, Copy)]
pub struct QueryCatalogue {
    entries: &'static [CatalogueEntry],
}

impl Default for QueryCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QueryCatalogue {
    /// The catalogue shipped with the console.
    pub fn builtin() -> Self {
        Self {
            entries: entries::ENTRIES,
        }
    }

    /// Questions in menu order.
    pub fn list_questions(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.question).collect()
    }

    /// SQL for a question label.
    ///
    /// Returns an empty string for the custom option and for unknown labels.
    pub fn get_sql(&self, question: &str) -> &'static str {
        self.find(question).map(|e| e.sql).unwrap_or("")
    }

    pub fn entries(&self) -> &'static [CatalogueEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its exact label.
    pub fn find(&self, question: &str) -> Option<&'static CatalogueEntry> {
        self.entries.iter().find(|e| e.question == question)
    }

    /// Looks up an entry by 1-based menu number.
    pub fn by_number(&self, number: usize) -> Option<&'static CatalogueEntry> {
        number.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Picker labels: every question followed by the custom option.
    pub fn selection_labels(&self) -> Vec<&'static str> {
        let mut labels = self.list_questions();
        labels.push(CUSTOM_QUERY_LABEL);
        labels
    }

    /// Maps a picker position (as laid out by `selection_labels`) to a selection.
    pub fn selection_at(&self, position: usize) -> Selection {
        if position < self.entries.len() {
            Selection::Entry(position)
        } else {
            Selection::Custom
        }
    }

    /// SQL that a selection places in the editor.
    pub fn seed_sql(&self, selection: Selection) -> &'static str {
        match selection {
            Selection::Entry(index) => self.entries.get(index).map(|e| e.sql).unwrap_or(""),
            Selection::Custom => "",
        }
    }

    /// Label for a selection.
    pub fn label(&self, selection: Selection) -> &'static str {
        match selection {
            Selection::Entry(index) => self
                .entries
                .get(index)
                .map(|e| e.question)
                .unwrap_or(CUSTOM_QUERY_LABEL),
            Selection::Custom => CUSTOM_QUERY_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{inspect, StatementAccess};
    use std::collections::HashSet;

    const TOTAL_QUANTITY: &str =
        "What is the total quantity of food available from all providers?";

    #[test]
    fn test_catalogue_has_23_entries() {
        let catalogue = QueryCatalogue::builtin();
        assert_eq!(catalogue.len(), 23);
        assert_eq!(catalogue.list_questions().len(), 23);
    }

    #[test]
    fn test_questions_are_unique() {
        let questions = QueryCatalogue::builtin().list_questions();
        let unique: HashSet<_> = questions.iter().collect();
        assert_eq!(unique.len(), questions.len());
    }

    #[test]
    fn test_order_is_stable() {
        let catalogue = QueryCatalogue::builtin();
        let questions = catalogue.list_questions();
        assert_eq!(questions, catalogue.list_questions());
        assert_eq!(
            questions[0],
            "How many food providers and receivers are there in each city?"
        );
        assert_eq!(questions[4], TOTAL_QUANTITY);
        assert_eq!(
            questions[22],
            " City with Highest Number of Unique Receivers"
        );
    }

    #[test]
    fn test_get_sql() {
        let catalogue = QueryCatalogue::builtin();
        assert!(catalogue
            .get_sql(TOTAL_QUANTITY)
            .contains(r#"SUM("Quantity") AS total_food_quantity"#));
        assert_eq!(catalogue.get_sql(CUSTOM_QUERY_LABEL), "");
        assert_eq!(catalogue.get_sql("Who ate the last samosa?"), "");
    }

    #[test]
    fn test_every_entry_is_read_only_sql_over_known_tables() {
        let known = known_table_names();
        for entry in QueryCatalogue::builtin().entries() {
            assert!(!entry.sql.trim().is_empty(), "{}", entry.question);
            let inspection = inspect(entry.sql)
                .unwrap_or_else(|e| panic!("{} does not parse: {e}", entry.question));
            assert_eq!(inspection.access, StatementAccess::ReadOnly, "{}", entry.question);
            assert!(!inspection.tables.is_empty(), "{}", entry.question);
            assert!(
                inspection.only_references(&known),
                "{} references {:?}",
                entry.question,
                inspection.tables
            );
        }
    }

    #[test]
    fn test_quirks_are_preserved() {
        let catalogue = QueryCatalogue::builtin();
        assert_eq!(
            catalogue.get_sql("Provider with most active listings").trim_end_matches([';', '\n']),
            catalogue
                .get_sql("Receiver with claims from most different providers")
                .trim_end_matches([';', '\n'])
        );
        assert!(catalogue
            .get_sql("Receiver with claims from most different providers")
            .ends_with("LIMIT 1;\n;"));
        assert!(catalogue
            .get_sql("What is the contact information of food providers in a specific city?")
            .contains("'East Sheena'"));
    }

    #[test]
    fn test_by_number() {
        let catalogue = QueryCatalogue::builtin();
        assert!(catalogue.by_number(0).is_none());
        assert_eq!(
            catalogue.by_number(5).map(|e| e.question),
            Some(TOTAL_QUANTITY)
        );
        assert!(catalogue.by_number(24).is_none());
    }

    #[test]
    fn test_custom_selection_seeds_empty_sql() {
        let catalogue = QueryCatalogue::builtin();
        let labels = catalogue.selection_labels();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[23], CUSTOM_QUERY_LABEL);

        // Regardless of what was picked before.
        for previous in 0..catalogue.len() {
            assert!(!catalogue.seed_sql(Selection::Entry(previous)).is_empty());
            assert_eq!(catalogue.seed_sql(catalogue.selection_at(23)), "");
        }
        assert_eq!(catalogue.seed_sql(Selection::Custom), "");
        assert_eq!(catalogue.label(Selection::Custom), CUSTOM_QUERY_LABEL);
    }

    #[test]
    fn test_selection_at() {
        let catalogue = QueryCatalogue::builtin();
        assert_eq!(catalogue.selection_at(0), Selection::Entry(0));
        assert_eq!(catalogue.selection_at(22), Selection::Entry(22));
        assert_eq!(catalogue.selection_at(23), Selection::Custom);
        assert_eq!(catalogue.label(Selection::Entry(4)), TOTAL_QUANTITY);
    }
}
