use crate::batch::BatchReport;
use crate::core::MethodSignature;
use crate::errors::ErrorCode;
use anyhow::Context;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &BatchReport) -> anyhow::Result<()>;
}

#[derive(Serialize)]
struct JsonReport<'a> {
    signatures: Vec<JsonSignature<'a>>,
    errors: Vec<JsonError<'a>>,
    stopped_early: bool,
}

#[derive(Serialize)]
struct JsonSignature<'a> {
    line: usize,
    #[serde(flatten)]
    signature: &'a MethodSignature,
}

#[derive(Serialize)]
struct JsonError<'a> {
    line: usize,
    source: &'a str,
    code: ErrorCode,
    message: String,
}

impl<'a> From<&'a BatchReport> for JsonReport<'a> {
    fn from(report: &'a BatchReport) -> Self {
        let mut signatures = Vec::new();
        let mut errors = Vec::new();
        for outcome in &report.outcomes {
            match &outcome.result {
                Ok(signature) => signatures.push(JsonSignature {
                    line: outcome.line,
                    signature,
                }),
                Err(e) => errors.push(JsonError {
                    line: outcome.line,
                    source: &outcome.source,
                    code: e.code(),
                    message: e.to_string(),
                }),
            }
        }
        Self {
            signatures,
            errors,
            stopped_early: report.stopped_early,
        }
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &BatchReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&JsonReport::from(report))?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &BatchReport) -> anyhow::Result<()> {
        self.write_signatures(report)?;
        self.write_errors(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_signatures(&mut self, report: &BatchReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Signatures")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Line | Modifier | Return | Name | Arguments |"
        )?;
        writeln!(
            self.writer,
            "|------|----------|--------|------|-----------|"
        )?;
        for (line, sig) in report.signatures() {
            let arguments = sig
                .arguments()
                .iter()
                .map(|arg| format!("`{}`", escape_cell(&arg.to_string())))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                self.writer,
                "| {} | {} | `{}` | `{}` | {} |",
                line,
                escape_cell(sig.access_modifier().unwrap_or("-")),
                escape_cell(sig.return_type()),
                escape_cell(sig.method_name()),
                if arguments.is_empty() { "-" } else { arguments.as_str() }
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_errors(&mut self, report: &BatchReport) -> anyhow::Result<()> {
        if !report.has_errors() {
            return Ok(());
        }

        writeln!(self.writer, "## Errors")?;
        writeln!(self.writer)?;
        for (line, err) in report.errors() {
            writeln!(self.writer, "- line {} `{}`: {}", line, err.code(), err)?;
        }
        if report.stopped_early {
            writeln!(self.writer)?;
            writeln!(self.writer, "_Stopped at the first error._")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

// GFM splits table cells on `|` even inside code spans
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &BatchReport) -> anyhow::Result<()> {
        for outcome in &report.outcomes {
            match &outcome.result {
                Ok(sig) => writeln!(
                    self.writer,
                    "{:>4}  {}",
                    outcome.line.to_string().dimmed(),
                    format_signature(sig)
                )?,
                Err(e) => writeln!(
                    self.writer,
                    "{:>4}  {} {}",
                    outcome.line.to_string().dimmed(),
                    format!("[{}]", e.code()).red().bold(),
                    e.to_string().red()
                )?,
            }
        }

        let summary = format!(
            "{} parsed, {} failed",
            report.success_count(),
            report.error_count()
        );
        if report.has_errors() {
            writeln!(self.writer, "{}", summary.yellow())?;
        } else {
            writeln!(self.writer, "{}", summary.green())?;
        }
        if report.stopped_early {
            writeln!(self.writer, "{}", "stopped at the first error".yellow())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn format_signature(sig: &MethodSignature) -> String {
    let modifier = sig
        .access_modifier()
        .map(|m| format!("{} ", m.magenta()))
        .unwrap_or_default();
    let arguments = sig
        .arguments()
        .iter()
        .map(|arg| format!("{} {}", arg.arg_type().cyan(), arg.name()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{}{} {}({})",
        modifier,
        sig.return_type().cyan(),
        sig.method_name().bold(),
        arguments
    )
}

/// Build a writer for `format`, targeting `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
