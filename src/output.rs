//! Output formatting for human and JSON modes
//!
//! Renders a finished [`RunResult`]. Rendering only reads the result.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Assertion, RunResult, Summary, Target};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Report over a finished run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunReport<'a> {
    /// Overall verdict
    pub passed: bool,
    /// Number of targets checked
    pub target_count: usize,
    /// Assertion pass/fail counts
    pub summary: Summary,
    /// Pass percentage, two decimals in human mode
    pub pass_rate: f64,
    /// Targets in report order
    pub targets: &'a [Target],
}

impl<'a> RunReport<'a> {
    /// Build a report borrowing the result
    #[must_use]
    pub fn new(result: &'a RunResult) -> Self {
        let summary = result.summary();
        Self {
            passed: result.overall_pass,
            target_count: result.targets.target_count(),
            summary,
            pass_rate: summary.pass_rate(),
            targets: result.targets.as_slice(),
        }
    }

    /// Render the report to stdout
    pub fn render(&self, mode: OutputMode) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(mode, &mut out)
    }

    /// Render the report to any writer
    pub fn write_to(&self, mode: OutputMode, w: &mut impl Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.write_human(w),
            OutputMode::Json => self.write_json(w),
        }
    }

    fn write_human(&self, w: &mut impl Write) -> io::Result<()> {
        let header = format!(
            "Checking {} targets, {} checks",
            self.target_count,
            self.summary.total()
        );
        writeln!(w, "\n{}\n", header.blue())?;

        for target in self.targets {
            writeln!(w, "{}", target.identifier.cyan())?;
            if let Some(error) = &target.error {
                writeln!(w, "\t{}", format!("! {error}").yellow())?;
            }
            for assertion in &target.assertions {
                writeln!(w, "\t{}", assertion_line(assertion))?;
            }
        }

        let results = format!(
            "{} checks passed, {} checks failed, {:.2}% of tests passed",
            self.summary.passed, self.summary.failed, self.pass_rate
        );
        if self.passed {
            writeln!(w, "\n{}", results.green())
        } else {
            writeln!(w, "\n{}", results.red())
        }
    }

    fn write_json(&self, w: &mut impl Write) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        writeln!(w, "{json}")
    }
}

fn assertion_line(assertion: &Assertion) -> colored::ColoredString {
    if assertion.pass {
        format!("✔ [{}] #{}", assertion.needle, assertion.expected).green()
    } else {
        format!("✗ [{}] #{}", assertion.needle, assertion.expected).red()
    }
}
