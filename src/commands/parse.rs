use crate::batch::{parse_lines, parse_text, BatchReport};
use crate::config::{InputConfig, SigparseConfig};
use crate::io::{self, create_writer, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

/// Options from the `parse` subcommand.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub signatures: Vec<String>,
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub fail_fast: bool,
    pub no_parallel: bool,
    pub plain: bool,
}

/// Apply CLI flags on top of the loaded config.
pub fn merge_options(options: &ParseOptions, mut config: SigparseConfig) -> SigparseConfig {
    if options.fail_fast {
        config.batch.fail_fast = true;
    }
    if options.no_parallel {
        config.batch.parallel = false;
    }
    if options.plain {
        config.output.use_color = Some(false);
    }
    if options.format.is_some() {
        config.output.default_format = options.format;
    }
    config
}

/// Parse the requested signatures without writing any output.
///
/// Blank and comment skipping only applies to file and stdin input; every
/// positional signature is parsed as given.
pub fn collect_report(options: &ParseOptions, config: &SigparseConfig) -> Result<BatchReport> {
    if !options.signatures.is_empty() {
        return Ok(parse_lines(
            options.signatures.iter().map(String::as_str),
            &InputConfig::verbatim(),
            &config.batch,
        ));
    }

    let text = match &options.input {
        Some(path) => io::read_input(path)?,
        None => io::read_stdin()?,
    };
    Ok(parse_text(&text, &config.input, &config.batch))
}

/// Run the `parse` command; fails when any signature was rejected.
pub fn handle_parse(options: ParseOptions, config: SigparseConfig) -> Result<()> {
    let config = merge_options(&options, config);
    if let Some(use_color) = config.output.use_color {
        colored::control::set_override(use_color);
    }

    let report = collect_report(&options, &config)?;
    let format = config.output.default_format.unwrap_or(OutputFormat::Terminal);
    let mut writer = create_writer(format, options.output.as_deref())?;
    writer.write_report(&report)?;

    if report.has_errors() {
        anyhow::bail!(
            "{} of {} signature(s) failed to parse",
            report.error_count(),
            report.outcomes.len()
        );
    }
    Ok(())
}
