//! The four tables of the food donation schema.

use serde::Serialize;

/// A browsable table: the label shown to users and the physical table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub display_name: &'static str,
    pub table_name: &'static str,
}

/// Known tables in browsing order.
pub const KNOWN_TABLES: &[TableSpec] = &[
    TableSpec {
        display_name: "Providers",
        table_name: "providers_data",
    },
    TableSpec {
        display_name: "Receivers",
        table_name: "receivers_data",
    },
    TableSpec {
        display_name: "Food Listings",
        table_name: "food_listings_data",
    },
    TableSpec {
        display_name: "Claims",
        table_name: "claims_data",
    },
];

/// Physical names of the known tables.
pub fn known_table_names() -> Vec<&'static str> {
    KNOWN_TABLES.iter().map(|t| t.table_name).collect()
}

/// Finds a known table by physical or display name (case-insensitive).
pub fn find_table(name: &str) -> Option<&'static TableSpec> {
    let name = name.trim();
    KNOWN_TABLES.iter().find(|t| {
        t.table_name.eq_ignore_ascii_case(name) || t.display_name.eq_ignore_ascii_case(name)
    })
}
