//! Polars `AnyValue` utility functions.

use polars::prelude::{AnyValue, DataFrame};

use anyhow::{Context, Result};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Converts `AnyValue` to `String`, returning `None` if the result is empty.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Extract one column of a frame as owned strings, in row order.
pub fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df
        .column(name)
        .with_context(|| format!("column {name:?} not found"))?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column
            .get(idx)
            .with_context(|| format!("read {name:?} at row {idx}"))?;
        values.push(any_to_string(value));
    }
    Ok(values)
}
