use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use csw_model::SwitchError;

/// A raw benchmark table: one row per evaluation item, parallel-language
/// text columns identified by header name.
#[derive(Debug, Clone)]
pub struct ParallelTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

impl ParallelTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// All values of one column, in row order. Short rows yield "".
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }
}

/// Read a parallel benchmark CSV.
///
/// The first record is the header row. Cells keep their interior whitespace
/// verbatim (span offsets depend on it); only a leading BOM is stripped.
/// Fully-empty rows are skipped, short rows are padded to the header width.
pub fn read_parallel_table(path: &Path) -> Result<ParallelTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(ParallelTable { headers, rows })
}

/// Fail fast when a configured column is absent.
pub fn check_required_columns(table: &ParallelTable, required: &[&str]) -> Result<()> {
    for name in required {
        if table.column_index(name).is_none() {
            return Err(SwitchError::MissingColumn((*name).to_string()).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.csv");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_headers_and_rows_in_order() {
        let (_dir, path) = write_csv("id,en,ar\n1,hello,مرحبا\n2,bye,وداعا\n");
        let table = read_parallel_table(&path).unwrap();
        assert_eq!(table.headers, vec!["id", "en", "ar"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], "hello");
        assert_eq!(table.column("en").unwrap(), vec!["hello", "bye"]);
    }

    #[test]
    fn skips_fully_empty_rows_and_pads_short_ones() {
        let (_dir, path) = write_csv("id,en,ar\n,,\n1,hello\n");
        let table = read_parallel_table(&path).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["1", "hello", ""]);
    }

    #[test]
    fn strips_bom_from_header() {
        let (_dir, path) = write_csv("\u{feff}id,en\n1,hello\n");
        let table = read_parallel_table(&path).unwrap();
        assert_eq!(table.headers[0], "id");
    }

    #[test]
    fn cell_whitespace_is_preserved() {
        let (_dir, path) = write_csv("en\n\"two  spaces\"\n");
        let table = read_parallel_table(&path).unwrap();
        assert_eq!(table.rows[0][0], "two  spaces");
    }

    #[test]
    fn missing_column_is_an_error() {
        let (_dir, path) = write_csv("id,en\n1,hello\n");
        let table = read_parallel_table(&path).unwrap();
        assert!(check_required_columns(&table, &["en"]).is_ok());
        assert!(check_required_columns(&table, &["ar"]).is_err());
    }
}
