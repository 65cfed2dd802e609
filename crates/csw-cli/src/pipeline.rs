//! Batch processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the parallel CSV, check columns, derive row ids
//! 2. **Switch**: transform each row, collect the new column and issues
//! 3. **Output**: write the augmented CSV and the JSON issue report
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Rows are processed one at a time in input order; output order
//! equals input order.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::{CsvWriter, DataFrame, NamedFrom, SerWriter, Series};
use tracing::{info, info_span, warn};

use csw_ingest::{
    ParallelTable, build_benchmark_frame, check_required_columns, derive_row_id,
    read_parallel_table, string_column,
};
use csw_model::{
    BatchReport, LanguagePair, RowOutcome, SwitchError, SwitchMethod, SwitchOptions,
    switch_column_name,
};
use csw_switch::{HeuristicTagger, PositionalAligner, RowInput, RowSwitcher};

/// Configuration for one switching run.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub input: PathBuf,
    pub source_column: String,
    pub target_columns: Vec<String>,
    pub pair: LanguagePair,
    pub method: SwitchMethod,
    pub options: SwitchOptions,
    /// Overrides the derived column name when set.
    pub output_column: Option<String>,
    pub output_dir: PathBuf,
    /// Process only the first N rows (after deduplication, when enabled).
    pub sample_size: Option<usize>,
    /// Drop rows with duplicate source text before sampling.
    pub dedupe_source: bool,
    pub dry_run: bool,
}

impl JobConfig {
    /// The output column name: configured override or derived from the
    /// language pair and method.
    pub fn column_name(&self) -> String {
        self.output_column
            .clone()
            .unwrap_or_else(|| switch_column_name(&self.pair, self.method))
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// The benchmark table as a string-typed frame.
    pub frame: DataFrame,
    /// Deterministic row ids, parallel to the frame's rows.
    pub row_ids: Vec<String>,
}

/// Read and prepare the input table.
///
/// Applies source-column deduplication and sample truncation before frame
/// construction, so row ids keep pointing at the originally read records.
pub fn ingest(config: &JobConfig) -> Result<IngestResult> {
    let table = read_parallel_table(&config.input)
        .with_context(|| format!("read {}", config.input.display()))?;

    let mut required: Vec<&str> = vec![config.source_column.as_str()];
    required.extend(config.target_columns.iter().map(String::as_str));
    check_required_columns(&table, &required)?;

    if table.is_empty() {
        return Err(SwitchError::EmptyTable.into());
    }

    let source_id = config.input.display().to_string();
    let source_index = table
        .column_index(&config.source_column)
        .ok_or_else(|| SwitchError::MissingColumn(config.source_column.clone()))?;

    let mut rows = Vec::with_capacity(table.rows.len());
    let mut row_ids = Vec::with_capacity(table.rows.len());
    let mut seen_sources: BTreeSet<String> = BTreeSet::new();
    for (idx, row) in table.rows.iter().enumerate() {
        if config.dedupe_source {
            let source = row.get(source_index).map(String::as_str).unwrap_or("");
            if !seen_sources.insert(source.to_string()) {
                continue;
            }
        }
        rows.push(row.clone());
        row_ids.push(derive_row_id(&source_id, (idx as u64) + 1));
        if let Some(limit) = config.sample_size
            && rows.len() >= limit
        {
            break;
        }
    }

    let sampled = ParallelTable {
        headers: table.headers,
        rows,
    };
    let frame = build_benchmark_frame(&sampled)?;
    Ok(IngestResult { frame, row_ids })
}

// ============================================================================
// Stage 2: Switch
// ============================================================================

/// Result of the switch stage.
#[derive(Debug)]
pub struct SwitchResult {
    /// The new mixed-language column, in row order.
    pub column: Vec<String>,
    pub report: BatchReport,
    pub switched: usize,
    pub passed_through: usize,
    pub skipped: usize,
    pub replacements: usize,
}

/// Transform every row, in input order.
pub fn switch(frame: &DataFrame, row_ids: &[String], config: &JobConfig) -> Result<SwitchResult> {
    let source_values = string_column(frame, &config.source_column)?;
    let mut target_values: Vec<Vec<String>> = Vec::with_capacity(config.target_columns.len());
    for name in &config.target_columns {
        target_values.push(string_column(frame, name)?);
    }

    let tagger = HeuristicTagger::new();
    let aligner = PositionalAligner::new();
    let switcher = RowSwitcher::new(config.method, &config.options, &tagger, &aligner);

    let mut report = BatchReport::new(config.column_name());
    let mut column = Vec::with_capacity(source_values.len());
    let (mut switched, mut passed_through, mut skipped, mut replacements) = (0, 0, 0, 0);

    let progress = ProgressBar::new(source_values.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} rows")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for (row_index, source) in source_values.iter().enumerate() {
        let targets: Vec<&str> = target_values
            .iter()
            .map(|column| column[row_index].as_str())
            .collect();
        let switched_row = switcher.switch_row(RowInput {
            source,
            targets: &targets,
            row_index,
        });
        match switched_row.outcome {
            RowOutcome::Switched { replaced } => {
                switched += 1;
                replacements += replaced;
            }
            RowOutcome::PassedThrough { .. } => passed_through += 1,
            RowOutcome::Skipped => skipped += 1,
        }
        for mut issue in switched_row.issues {
            issue.row_id = row_ids.get(row_index).cloned();
            report.push(issue);
        }
        column.push(switched_row.text);
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(SwitchResult {
        column,
        report,
        switched,
        passed_through,
        skipped,
        replacements,
    })
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Paths written by the output stage.
#[derive(Debug)]
pub struct OutputPaths {
    pub table: PathBuf,
    pub report: PathBuf,
}

/// Write the augmented table and the JSON issue report.
pub fn output(
    frame: &mut DataFrame,
    report: &BatchReport,
    config: &JobConfig,
) -> Result<OutputPaths> {
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("create output dir {}", config.output_dir.display()))?;

    let column = config.column_name();
    let stem = config
        .input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "benchmark".to_string());

    let table_path = config.output_dir.join(format!("{stem}_with_{column}.csv"));
    let mut file = File::create(&table_path)
        .with_context(|| format!("create {}", table_path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(frame)
        .with_context(|| format!("write {}", table_path.display()))?;

    let report_path = config.output_dir.join(format!("{column}_report.json"));
    let report_file = File::create(&report_path)
        .with_context(|| format!("create {}", report_path.display()))?;
    serde_json::to_writer_pretty(report_file, report)
        .with_context(|| format!("write {}", report_path.display()))?;

    Ok(OutputPaths {
        table: table_path,
        report: report_path,
    })
}

// ============================================================================
// Batch driver
// ============================================================================

/// Run the full ingest -> switch -> output pipeline for one job.
pub fn run_batch(config: &JobConfig) -> Result<crate::types::BatchResult> {
    let column = config.column_name();
    let batch_span = info_span!(
        "batch",
        method = config.method.slug(),
        column = %column,
        input = %config.input.display()
    );
    let _batch_guard = batch_span.enter();

    let ingest_start = Instant::now();
    let IngestResult { mut frame, row_ids } =
        info_span!("ingest").in_scope(|| ingest(config))?;
    info!(
        rows = frame.height(),
        columns = frame.width(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    if frame.get_column_names().iter().any(|name| name.as_str() == column) {
        return Err(
            SwitchError::Message(format!("output column {column:?} already exists")).into(),
        );
    }

    let switch_start = Instant::now();
    let switch_result = info_span!("switch").in_scope(|| switch(&frame, &row_ids, config))?;
    info!(
        switched = switch_result.switched,
        passed_through = switch_result.passed_through,
        skipped = switch_result.skipped,
        replacements = switch_result.replacements,
        warnings = switch_result.report.warning_count(),
        duration_ms = switch_start.elapsed().as_millis(),
        "switch complete"
    );

    let rows = frame.height();
    frame
        .with_column(Series::new(column.as_str().into(), switch_result.column))
        .context("append switched column")?;

    let mut errors = Vec::new();
    let (output_path, report_path) = if config.dry_run {
        info!("dry run, skipping output");
        (None, None)
    } else {
        let output_span = info_span!("output");
        let output_start = Instant::now();
        match output_span.in_scope(|| output(&mut frame, &switch_result.report, config)) {
            Ok(paths) => {
                info!(
                    table = %paths.table.display(),
                    report = %paths.report.display(),
                    duration_ms = output_start.elapsed().as_millis(),
                    "output complete"
                );
                (Some(paths.table), Some(paths.report))
            }
            Err(error) => {
                warn!(%error, "output failed");
                errors.push(format!("output: {error:#}"));
                (None, None)
            }
        }
    };

    let has_errors = !errors.is_empty() || switch_result.report.has_errors();
    Ok(crate::types::BatchResult {
        input: config.input.clone(),
        method: config.method,
        column,
        rows,
        switched: switch_result.switched,
        passed_through: switch_result.passed_through,
        skipped: switch_result.skipped,
        replacements: switch_result.replacements,
        output_path,
        report_path,
        report: switch_result.report,
        errors,
        has_errors,
    })
}
