//! Statement inspection using sqlparser-rs with the PostgreSQL dialect.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::ControlFlow;

use sqlparser::ast::{visit_relations, visit_statements, Statement};
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;

use crate::error::{ConsoleError, Result};

/// Whether a statement only reads data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementAccess {
    /// SELECT, EXPLAIN and SHOW statements.
    ReadOnly,
    /// Anything that may change data, schema or privileges.
    Writes,
}

impl fmt::Display for StatementAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadOnly => write!(f, "read-only"),
            Self::Writes => write!(f, "writes"),
        }
    }
}

/// What the parser found in a piece of SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// Number of statements in the text.
    pub statement_count: usize,
    /// Read-only unless any statement (including nested ones) may write.
    pub access: StatementAccess,
    /// Relations referenced anywhere in the text, as written (unquoted).
    pub tables: BTreeSet<String>,
}

impl Inspection {
    /// Returns true if every referenced table is in `allowed` (case-insensitive).
    pub fn only_references(&self, allowed: &[&str]) -> bool {
        self.tables
            .iter()
            .all(|t| allowed.iter().any(|a| a.eq_ignore_ascii_case(t)))
    }
}

/// Parses SQL text and reports its tables and access.
pub fn inspect(sql: &str) -> Result<Inspection> {
    let statements = Parser::parse_sql(&PostgreSqlDialect {}, sql)
        .map_err(|e| ConsoleError::query(format!("SQL parse error: {e}")))?;

    if statements.is_empty() {
        return Err(ConsoleError::query("No SQL statement found"));
    }

    let mut tables = BTreeSet::new();
    let _ = visit_relations(&statements, |relation| {
        if let Some(ident) = relation.0.last() {
            tables.insert(ident.value.clone());
        }
        ControlFlow::<()>::Continue(())
    });

    let mut access = StatementAccess::ReadOnly;
    let _ = visit_statements(&statements, |statement| {
        if is_read_only(statement) {
            ControlFlow::Continue(())
        } else {
            access = StatementAccess::Writes;
            ControlFlow::Break(())
        }
    });

    Ok(Inspection {
        statement_count: statements.len(),
        access,
        tables,
    })
}

fn is_read_only(statement: &Statement) -> bool {
    matches!(
        statement,
        Statement::Query { .. }
            | Statement::Explain { .. }
            | Statement::ExplainTable { .. }
            | Statement::ShowVariable { .. }
            | Statement::ShowTables { .. }
            | Statement::ShowColumns { .. }
            | Statement::ShowCreate { .. }
            | Statement::ShowFunctions { .. }
    )
}

/// Strips surrounding whitespace and any run of trailing statement terminators.
///
/// `"SELECT 1;\n;"` and `"  SELECT 1 ;; "` both become `"SELECT 1"`.
pub fn normalize_statement(sql: &str) -> &str {
    let mut text = sql.trim();
    while let Some(stripped) = text.strip_suffix(';') {
        text = stripped.trim_end();
    }
    text
}

/// Quotes an identifier for PostgreSQL and SQLite, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Collapses whitespace and shortens SQL for single-line display and logs.
pub fn sql_preview(sql: &str, max_chars: usize) -> String {
    let collapsed = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut preview: String = collapsed.chars().take(max_chars.saturating_sub(3)).collect();
    preview.push_str("...");
    preview
}
