//! DataFrame construction from raw tables.
//!
//! Every column is kept as a UTF-8 string series: benchmark metadata must
//! pass through byte-identical, so no type inference is applied.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use csw_model::SwitchError;

use crate::csv_table::ParallelTable;

/// Build a string-typed DataFrame from a parallel table, preserving row order.
pub fn build_benchmark_frame(table: &ParallelTable) -> Result<DataFrame> {
    for (idx, header) in table.headers.iter().enumerate() {
        if table.headers[..idx].contains(header) {
            return Err(
                SwitchError::Message(format!("duplicate column name: {header:?}")).into(),
            );
        }
    }
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (col_idx, header) in table.headers.iter().enumerate() {
        let values: Vec<String> = table
            .rows
            .iter()
            .map(|row| row.get(col_idx).cloned().unwrap_or_default())
            .collect();
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    let data = DataFrame::new(columns).context("build benchmark dataframe")?;
    Ok(data)
}
