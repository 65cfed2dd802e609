use anyhow::{Context, Result};
use comfy_table::Table;

use csw_model::{LanguagePair, LanguageTag, SwitchError, SwitchMethod, SwitchOptions};

use crate::cli::{RatioArgs, RunArgs};
use crate::pipeline::{JobConfig, run_batch};
use crate::summary::apply_table_style;
use crate::types::BatchResult;

pub fn run_methods() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Method", "Description"]);
    apply_table_style(&mut table);
    for method in [SwitchMethod::NounToken, SwitchMethod::RatioToken] {
        table.add_row(vec![method.slug(), method.description()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_noun_token(args: &RunArgs) -> Result<BatchResult> {
    let config = job_config(args, SwitchMethod::NounToken, SwitchOptions::default())?;
    run_batch(&config)
}

pub fn run_ratio_token(args: &RatioArgs) -> Result<BatchResult> {
    let options = SwitchOptions::default()
        .with_ratio(args.ratio)
        .context("invalid --ratio")?
        .with_seed(args.seed);
    let config = job_config(&args.run, SwitchMethod::RatioToken, options)?;
    run_batch(&config)
}

fn job_config(args: &RunArgs, method: SwitchMethod, options: SwitchOptions) -> Result<JobConfig> {
    if args.target_langs.len() != args.target_columns.len() {
        return Err(SwitchError::Message(format!(
            "{} --target-lang tags for {} --target-column names",
            args.target_langs.len(),
            args.target_columns.len()
        ))
        .into());
    }
    let source = LanguageTag::new(&args.source_lang)?;
    let targets = args
        .target_langs
        .iter()
        .map(LanguageTag::new)
        .collect::<csw_model::Result<Vec<_>>>()?;
    let pair = LanguagePair::new(source, targets)?;

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .map(|parent| parent.join("output"))
            .unwrap_or_else(|| "output".into())
    });

    Ok(JobConfig {
        input: args.input.clone(),
        source_column: args.source_column.clone(),
        target_columns: args.target_columns.clone(),
        pair,
        method,
        options,
        output_column: args.output_column.clone(),
        output_dir,
        sample_size: args.sample_size,
        // The noun-token method evaluates each distinct source sentence
        // once; the ratio method keeps duplicates so row counts match the
        // source benchmark.
        dedupe_source: matches!(method, SwitchMethod::NounToken) && args.sample_size.is_some(),
        dry_run: args.dry_run,
    })
}
