use std::path::PathBuf;

use csw_model::{BatchReport, SwitchMethod};

/// Final result of one switching run, consumed by the summary printer.
#[derive(Debug)]
pub struct BatchResult {
    pub input: PathBuf,
    pub method: SwitchMethod,
    pub column: String,
    pub rows: usize,
    pub switched: usize,
    pub passed_through: usize,
    pub skipped: usize,
    pub replacements: usize,
    pub output_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub report: BatchReport,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
