use std::{collections::BTreeMap, fmt::Write as _};

use crate::interpreter::value::core::Value;

const CELL_WIDTH: usize = 20;

/// Renders the variable mapping as a single-line JSON object.
///
/// Keys appear in name order. Integers and reals become JSON numbers,
/// booleans `true`/`false`, text a JSON string and unassigned values `null`.
///
/// # Errors
/// Propagates any `serde_json` serialization error.
///
/// ## Example
/// ```
/// use std::collections::BTreeMap;
///
/// use minipas::{interpreter::value::core::Value, output::to_json};
///
/// let memory = BTreeMap::from([("Y".to_string(), Value::Boolean(true)),
///                              ("X".to_string(), Value::Integer(3))]);
///
/// assert_eq!(to_json(&memory).unwrap(), r#"{"X":3,"Y":true}"#);
/// ```
pub fn to_json(memory: &BTreeMap<String, Value>) -> serde_json::Result<String> {
    serde_json::to_string(memory)
}

/// Renders the variable mapping as a bordered two-column table.
///
/// Names are left-aligned and values right-aligned. Reals are printed with
/// four decimals, booleans as `TRUE`/`FALSE`, text without quotes and
/// unassigned values as `None`.
///
/// ## Example
/// ```
/// use std::collections::BTreeMap;
///
/// use minipas::{interpreter::value::core::Value, output::beauty_table};
///
/// let memory = BTreeMap::from([("PI".to_string(), Value::Real(3.14159))]);
/// let table = beauty_table(&memory);
///
/// assert_eq!(table.lines().nth(3), Some("| PI                 |              3.1416|"));
/// ```
#[must_use]
pub fn beauty_table(memory: &BTreeMap<String, Value>) -> String {
    let border = format!("+{:-^width$}+{:-^width$}+\n", "", "", width = CELL_WIDTH);
    let mut table = String::new();

    table.push_str(&border);
    let _ = writeln!(table,
                     "|{:^width$}|{:^width$}|",
                     "Variable",
                     "Value",
                     width = CELL_WIDTH);
    table.push_str(&border);

    for (name, value) in memory {
        let _ = writeln!(table,
                         "| {name:<width$}| {:>width$}|",
                         table_cell(value),
                         width = CELL_WIDTH - 1);
    }

    table.push_str(&border);
    table
}

fn table_cell(value: &Value) -> String {
    match value {
        Value::Real(r) => format!("{r:.4}"),
        Value::Text(s) => s.clone(),
        other => other.to_string(),
    }
}
