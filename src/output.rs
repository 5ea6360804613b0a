//! Batch output rendering.
//!
//! Formats catalogue listings, execution outcomes and table loads as bordered
//! plain-text tables or JSON for the one-shot subcommands. Column sizing is
//! shared with the terminal UI's result table.

use serde_json::{json, Map, Number};

use crate::catalogue::{QueryCatalogue, TableSpec};
use crate::cli::OutputFormat;
use crate::db::{QueryResult, Value};
use crate::error::{ConsoleError, Result};
use crate::query::{ExecutionOutcome, LoadOutcome};

/// Maximum width for any column.
pub const MAX_COLUMN_WIDTH: usize = 40;

/// Minimum width for any column.
pub const MIN_COLUMN_WIDTH: usize = 4;

/// Natural width of each column: the widest of header and cells, clamped.
pub fn column_widths(result: &QueryResult) -> Vec<usize> {
    let mut widths: Vec<usize> = result
        .columns
        .iter()
        .map(|col| col.name.chars().count().max(MIN_COLUMN_WIDTH))
        .collect();

    for row in &result.rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.to_display_string().chars().count());
        }
    }

    widths.iter().map(|&w| w.min(MAX_COLUMN_WIDTH)).collect()
}

/// Shrinks widths proportionally so the bordered table fits `available` cells.
pub fn fit_widths(widths: &[usize], available: usize) -> Vec<usize> {
    let total = table_width(widths);
    if available == 0 || total <= available {
        return widths.to_vec();
    }
    let scale = available as f64 / total as f64;
    widths
        .iter()
        .map(|&w| ((w as f64 * scale) as usize).max(MIN_COLUMN_WIDTH))
        .collect()
}

/// Width of a bordered table with the given column widths.
pub fn table_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + widths.len() * 3 + 1
}

/// Truncates to `width` characters, ending in an ellipsis when cut.
pub fn truncate_cell(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else if width <= 3 {
        s.chars().take(width).collect()
    } else {
        let mut cut: String = s.chars().take(width - 3).collect();
        cut.push_str("...");
        cut
    }
}

/// Pads a cell, right-aligning numbers.
pub fn pad_cell(text: &str, width: usize, numeric: bool) -> String {
    if numeric {
        format!(" {:>width$} ", text, width = width)
    } else {
        format!(" {:<width$} ", text, width = width)
    }
}

/// Horizontal rule using the given corner and junction characters.
pub fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let inner: Vec<String> = widths.iter().map(|&w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", inner.join(&mid.to_string()))
}

/// Footer summarising a result, e.g. `3 rows returned (12ms)`.
pub fn footer(result: &QueryResult) -> String {
    let mut footer = format!(
        "{} row{} returned ({}ms)",
        result.row_count,
        if result.row_count == 1 { "" } else { "s" },
        result.execution_time.as_millis()
    );
    if let Some(warning) = result.truncation_warning() {
        footer.push_str("  ");
        footer.push_str(&warning);
    }
    footer
}

/// Renders a result as bordered plain-text lines.
pub fn table_lines(result: &QueryResult) -> Vec<String> {
    if result.columns.is_empty() {
        return vec!["(empty result)".to_string()];
    }

    let widths = column_widths(result);
    let mut lines = Vec::with_capacity(result.rows.len() + 5);

    lines.push(border(&widths, '┌', '┬', '┐'));
    let header: String = result
        .columns
        .iter()
        .zip(&widths)
        .map(|(col, &w)| pad_cell(&truncate_cell(&col.name, w), w, false))
        .collect::<Vec<_>>()
        .join("│");
    lines.push(format!("│{header}│"));
    lines.push(border(&widths, '├', '┼', '┤'));

    for row in &result.rows {
        let cells: String = row
            .iter()
            .zip(&widths)
            .map(|(value, &w)| {
                pad_cell(
                    &truncate_cell(&value.to_display_string(), w),
                    w,
                    value.is_numeric(),
                )
            })
            .collect::<Vec<_>>()
            .join("│");
        lines.push(format!("│{cells}│"));
    }

    lines.push(border(&widths, '└', '┴', '┘'));
    lines.push(footer(result));
    lines
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => json!(b),
        Value::Int(i) => json!(i),
        Value::Float(f) => Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Decimal(d) | Value::String(d) => json!(d),
        Value::Bytes(b) => json!(b.iter().map(|byte| format!("{byte:02x}")).collect::<String>()),
    }
}

/// Converts a result into a JSON document with row objects keyed by column.
pub fn result_to_json(result: &QueryResult) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = result
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            for (col, value) in result.columns.iter().zip(row) {
                object.insert(col.name.clone(), value_to_json(value));
            }
            serde_json::Value::Object(object)
        })
        .collect();

    json!({
        "columns": result.columns,
        "rows": rows,
        "row_count": result.row_count,
        "total_rows": result.total_rows,
        "was_truncated": result.was_truncated,
        "execution_time_ms": result.execution_time.as_millis() as u64,
    })
}

fn to_pretty(value: &serde_json::Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ConsoleError::internal(format!("Failed to encode JSON: {e}")))
}

/// Lists the catalogue questions with their 1-based numbers.
pub fn render_questions(catalogue: &QueryCatalogue, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let width = catalogue.len().to_string().len();
            Ok(catalogue
                .list_questions()
                .iter()
                .enumerate()
                .map(|(i, q)| format!("{:>width$}. {}", i + 1, q.trim(), width = width))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        OutputFormat::Json => {
            let entries: Vec<_> = catalogue
                .entries()
                .iter()
                .enumerate()
                .map(|(i, e)| json!({ "number": i + 1, "question": e.question, "sql": e.sql }))
                .collect();
            to_pretty(&serde_json::Value::Array(entries))
        }
    }
}

/// Renders an execution outcome.
pub fn render_outcome(outcome: &ExecutionOutcome, format: OutputFormat) -> Result<String> {
    match (outcome, format) {
        (ExecutionOutcome::Success(result), OutputFormat::Text) => Ok(table_lines(result).join("\n")),
        (ExecutionOutcome::Failure(error), OutputFormat::Text) => Ok(error.to_string()),
        (ExecutionOutcome::Success(result), OutputFormat::Json) => {
            let mut doc = result_to_json(result);
            doc["status"] = json!("success");
            to_pretty(&doc)
        }
        (ExecutionOutcome::Failure(error), OutputFormat::Json) => to_pretty(&json!({
            "status": "failure",
            "kind": error.kind,
            "message": error.message,
        })),
    }
}

/// Renders one or more table loads.
pub fn render_loads(loads: &[(TableSpec, LoadOutcome)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let sections: Vec<String> = loads
                .iter()
                .map(|(spec, outcome)| {
                    let body = match &outcome.failure {
                        Some(failure) => failure.to_string(),
                        None => table_lines(&outcome.result).join("\n"),
                    };
                    format!("{} ({})\n{}", spec.display_name, spec.table_name, body)
                })
                .collect();
            Ok(sections.join("\n\n"))
        }
        OutputFormat::Json => {
            let docs: Vec<_> = loads
                .iter()
                .map(|(spec, outcome)| match &outcome.failure {
                    Some(failure) => json!({
                        "table": spec.table_name,
                        "display_name": spec.display_name,
                        "status": "failure",
                        "message": failure.message,
                    }),
                    None => {
                        let mut doc = result_to_json(&outcome.result);
                        doc["table"] = json!(spec.table_name);
                        doc["display_name"] = json!(spec.display_name);
                        doc["status"] = json!("success");
                        doc
                    }
                })
                .collect();
            to_pretty(&serde_json::Value::Array(docs))
        }
    }
}
