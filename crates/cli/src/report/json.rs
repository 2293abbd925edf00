// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io;

use serde::Serialize;
use serde_json::json;
use termcolor::WriteColor;

use super::{LanguageEntry, ReportFormatter, ScanReport, TestReport};

/// JSON format formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn scan(&self, out: &mut dyn WriteColor, report: &ScanReport) -> io::Result<()> {
        write_json(out, report)
    }

    fn test(&self, out: &mut dyn WriteColor, report: &TestReport) -> io::Result<()> {
        write_json(out, report)
    }

    fn languages(&self, out: &mut dyn WriteColor, entries: &[LanguageEntry]) -> io::Result<()> {
        write_json(out, &json!({ "languages": entries }))
    }
}

fn write_json<T: Serialize>(out: &mut dyn WriteColor, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
