//! Parsing many signature lines at once.
//!
//! Lines are numbered from 1 in the order they were read. Skipped lines
//! (blank, comments) keep their number so reported line numbers always
//! match the input file. With `parallel` enabled the lines are parsed on the
//! rayon pool; outcomes are still returned in line order.

use crate::config::{BatchConfig, InputConfig};
use crate::core::MethodSignature;
use crate::errors::ParseError;
use crate::parser::parse;
use rayon::prelude::*;

/// Parse result for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number in the input
    pub line: usize,
    /// The trimmed text handed to the parser
    pub source: String,
    pub result: Result<MethodSignature, ParseError>,
}

/// Outcomes of a batch run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<LineOutcome>,
    /// Set when fail-fast dropped lines after the first failure
    pub stopped_early: bool,
}

impl BatchReport {
    pub fn signatures(&self) -> impl Iterator<Item = (usize, &MethodSignature)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|sig| (o.line, sig)))
    }

    pub fn errors(&self) -> impl Iterator<Item = (usize, &ParseError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (o.line, err)))
    }

    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(|o| o.result.is_err())
    }

    pub fn success_count(&self) -> usize {
        self.signatures().count()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

/// Parse every non-skipped line of `lines`.
pub fn parse_lines<'a, I>(lines: I, input: &InputConfig, batch: &BatchConfig) -> BatchReport
where
    I: IntoIterator<Item = &'a str>,
{
    let candidates: Vec<(usize, &str)> = lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !input.is_skipped(line))
        .map(|(idx, line)| (idx + 1, line.trim()))
        .collect();

    log::debug!(
        "Parsing {} signature lines ({})",
        candidates.len(),
        if batch.parallel { "parallel" } else { "sequential" }
    );

    let outcomes = if batch.parallel {
        let mut outcomes: Vec<LineOutcome> = candidates
            .par_iter()
            .map(|&(line, source)| parse_line(line, source))
            .collect();
        if batch.fail_fast {
            if let Some(first_err) = outcomes.iter().position(|o| o.result.is_err()) {
                outcomes.truncate(first_err + 1);
            }
        }
        outcomes
    } else {
        parse_sequential(&candidates, batch.fail_fast, parse_line)
    };

    BatchReport {
        stopped_early: outcomes.len() < candidates.len(),
        outcomes,
    }
}

/// Parse in order; with `fail_fast` no line after the first failure is parsed.
fn parse_sequential<F>(
    candidates: &[(usize, &str)],
    fail_fast: bool,
    mut parse_fn: F,
) -> Vec<LineOutcome>
where
    F: FnMut(usize, &str) -> LineOutcome,
{
    let mut outcomes = Vec::with_capacity(candidates.len());
    for &(line, source) in candidates {
        let outcome = parse_fn(line, source);
        let failed = outcome.result.is_err();
        outcomes.push(outcome);
        if fail_fast && failed {
            break;
        }
    }
    outcomes
}

/// Parse newline-separated signatures.
pub fn parse_text(text: &str, input: &InputConfig, batch: &BatchConfig) -> BatchReport {
    parse_lines(text.lines(), input, batch)
}

fn parse_line(line: usize, source: &str) -> LineOutcome {
    let result = parse(source);
    if let Err(ref e) = result {
        log::debug!("line {}: {}", line, e);
    }
    LineOutcome {
        line,
        source: source.to_string(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const INPUT: &str = indoc! {"
        # service methods
        private void log(String value)

        int add(int a, int b)
        foo()
        public DateTime getCurrentDateTime()
    "};

    fn sequential() -> BatchConfig {
        BatchConfig {
            parallel: false,
            fail_fast: false,
        }
    }

    #[test]
    fn test_line_numbers_count_skipped_lines() {
        let report = parse_text(INPUT, &InputConfig::default(), &sequential());
        let lines: Vec<usize> = report.outcomes.iter().map(|o| o.line).collect();
        assert_eq!(lines, vec![2, 4, 5, 6]);
        assert_eq!(report.success_count(), 3);
        assert_eq!(report.error_count(), 1);
        assert!(!report.stopped_early);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let seq = parse_text(INPUT, &InputConfig::default(), &sequential());
        let par = parse_text(INPUT, &InputConfig::default(), &BatchConfig::default());
        assert_eq!(par, seq);
    }

    #[test]
    fn test_fail_fast_stops_after_first_error() {
        let batch = BatchConfig {
            parallel: true,
            fail_fast: true,
        };
        let report = parse_text(INPUT, &InputConfig::default(), &batch);
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.outcomes.last().unwrap().line, 5);
        assert!(report.stopped_early);
        assert!(report.has_errors());
    }

    #[test]
    fn test_fail_fast_error_on_last_line_is_not_early_stop() {
        let batch = BatchConfig {
            parallel: false,
            fail_fast: true,
        };
        let report = parse_lines(["int a()", "bad"], &InputConfig::default(), &batch);
        assert_eq!(report.outcomes.len(), 2);
        assert!(!report.stopped_early);
    }

    #[test]
    fn test_sequential_fail_fast_skips_remaining_lines() {
        let candidates = [
            (1, "void a()"),
            (2, "broken"),
            (3, "void b()"),
            (4, "void c()"),
        ];
        let mut parsed = Vec::new();
        let outcomes = parse_sequential(&candidates, true, |line, source| {
            parsed.push(line);
            parse_line(line, source)
        });

        assert_eq!(parsed, vec![1, 2]);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[1].result.is_err());
    }

    #[test]
    fn test_sequential_without_fail_fast_parses_everything() {
        let candidates = [(1, "broken"), (2, "void b()")];
        let outcomes = parse_sequential(&candidates, false, parse_line);
        assert_eq!(outcomes.len(), 2);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let report = parse_lines(
            ["  int add(int a, int b)\r"],
            &InputConfig::default(),
            &sequential(),
        );
        assert_eq!(report.outcomes[0].source, "int add(int a, int b)");
        assert!(!report.has_errors());
    }

    #[test]
    fn test_empty_input() {
        let report = parse_text("", &InputConfig::default(), &sequential());
        assert_eq!(report, BatchReport::default());
    }
}
