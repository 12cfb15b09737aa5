use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use namelink_ingest::{
    CandidateSource, DirectorySource, column_values, read_csv_table, results_frame, write_csv,
};
use namelink_match::{
    ColumnSummary, match_column, match_column_parallel, name_variants, normalize_name,
};
use namelink_validate::{ValidationReport, load_contract, validate_frame};

use namelink_cli::config::{AppConfig, Overrides};

use crate::cli::{MatchArgs, NormalizeArgs, ReferenceArgs, ValidateArgs};
use crate::types::{MatchOutcome, NormalizedName};

pub fn run_match(args: &MatchArgs) -> Result<MatchOutcome> {
    let started = Instant::now();
    let span = info_span!("match", table = %args.reference_table, column = %args.column);
    let _guard = span.enter();

    let config = AppConfig::load_or_default(args.config.as_deref())?.with_overrides(Overrides {
        allow_multiple: args.multiple,
        dynamic_threshold: args.dynamic_threshold,
        no_normalize: args.no_normalize,
        floor_threshold: args.floor,
        reference_dir: args.reference_dir.clone(),
        acronyms: args.reference.acronyms.clone(),
        stop_words: args.reference.stop_words.clone(),
    });
    let options = config.match_options()?;

    let reference_dir = config
        .reference
        .directory
        .clone()
        .unwrap_or_else(|| parent_dir(&args.input));
    let source = DirectorySource::new(&reference_dir)
        .with_context(|| format!("open reference directory {}", reference_dir.display()))?;
    let candidates = source
        .candidates(&args.reference_table, &args.reference_column)
        .with_context(|| {
            format!(
                "load candidates {}.{}",
                args.reference_table, args.reference_column
            )
        })?;

    let input = read_csv_table(&args.input)
        .with_context(|| format!("read input {}", args.input.display()))?;
    let queries = column_values(&input, &args.column)
        .with_context(|| format!("read column {}", args.column))?;
    info!(
        rows = queries.len(),
        candidates = candidates.len(),
        multiple = options.allow_multiple,
        dynamic = options.dynamic_threshold,
        floor = options.floor_threshold,
        "matching column"
    );

    let results = if args.parallel {
        match_column_parallel(&queries, &candidates, &options)
    } else {
        match_column(&queries, &candidates, &options)
    };
    let summary = ColumnSummary::from_results(&results);

    if let Some(path) = &args.output {
        let mut frame = results_frame(&queries, &results).context("build results table")?;
        write_csv(&mut frame, path)
            .with_context(|| format!("write results {}", path.display()))?;
        info!(path = %path.display(), rows = frame.height(), "wrote results");
    }

    Ok(MatchOutcome {
        input: args.input.clone(),
        column: args.column.clone(),
        reference: format!("{}.{}", args.reference_table, args.reference_column),
        candidates: candidates.len(),
        threshold: options.floor_threshold,
        summary,
        output: args.output.clone(),
        elapsed: started.elapsed(),
    })
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<Vec<NormalizedName>> {
    let options = reference_config(&args.reference).match_options()?;
    let stop_words = options.stop_words.as_ref();
    let acronyms = options.acronym_map.as_ref();

    Ok(args
        .names
        .iter()
        .map(|raw| NormalizedName {
            raw: raw.clone(),
            normalized: normalize_name(Some(raw.as_str()), stop_words),
            variants: name_variants(Some(raw.as_str()), stop_words, acronyms)
                .iter()
                .map(str::to_string)
                .collect(),
        })
        .collect())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let contract = load_contract(&args.contract)
        .with_context(|| format!("load contract {}", args.contract.display()))?;
    let df = read_csv_table(&args.input)
        .with_context(|| format!("read input {}", args.input.display()))?;
    let report = validate_frame(&contract, &df);
    info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated {}",
        args.input.display()
    );
    Ok(report)
}

fn reference_config(reference: &ReferenceArgs) -> AppConfig {
    AppConfig::default().with_overrides(Overrides {
        acronyms: reference.acronyms.clone(),
        stop_words: reference.stop_words.clone(),
        ..Overrides::default()
    })
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
