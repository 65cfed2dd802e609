//! Benchmark table ingestion.
//!
//! Reads parallel-language benchmark CSVs into raw tables, derives
//! deterministic row ids, and builds the string-typed Polars frames the
//! switching pipeline works on.

pub mod csv_table;
pub mod frame;
pub mod polars_utils;
pub mod row_id;

pub use csv_table::{ParallelTable, check_required_columns, read_parallel_table};
pub use frame::build_benchmark_frame;
pub use polars_utils::{any_to_string, any_to_string_non_empty, string_column};
pub use row_id::derive_row_id;
