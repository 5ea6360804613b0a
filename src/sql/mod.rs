//! SQL text helpers.
//!
//! Statement normalisation, identifier quoting, log previews, and a
//! parser-backed inspection that reports which tables a statement touches
//! and whether it only reads. Inspection is informational: the executor never
//! refuses a statement because of it.

mod inspect;

pub use inspect::{
    inspect, normalize_statement, quote_identifier, sql_preview, Inspection, StatementAccess,
};
