//! Text report for search outcomes
//!
//! Everything here writes to a caller-supplied `Write` so the binary can pass
//! locked stdout and tests can pass a buffer.

use crate::config::Settings;
use crate::error::Result;
use crate::search::{Outcome, PersonRecord};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::io::Write;

/// Width of the summary delimiter lines
pub const DELIMITER_WIDTH: usize = 50;

/// Renders progress and outcome lines
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Line printed before the request goes out
    pub fn progress(&mut self, settings: &Settings) -> Result<()> {
        writeln!(
            self.out,
            "🚀 Querying {} for {} {}...",
            settings.api.provider_name, settings.query.per_page, settings.query.label
        )?;
        Ok(())
    }

    /// Render one outcome
    pub fn render(&mut self, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::Success { records, raw } => self.success(records, raw)?,
            Outcome::HttpError { status, body } => {
                writeln!(self.out, "❌ Error {}: {}", status, body)?
            }
            Outcome::TransportError { message } => {
                writeln!(self.out, "🔌 Connection error: {}", message)?
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn success(&mut self, records: &[PersonRecord], raw: &Value) -> Result<()> {
        writeln!(self.out, "✅ SUCCESS! DATA RETRIEVED (0 Credits Used)")?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", pretty_json(raw)?)?;

        let delimiter = "=".repeat(DELIMITER_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{}", delimiter)?;
        writeln!(self.out, "QUICK SUMMARY")?;
        writeln!(self.out, "{}", delimiter)?;

        for person in records {
            writeln!(self.out, "{}", summary_line(person))?;
        }
        Ok(())
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// One summary line for a person
pub fn summary_line(person: &PersonRecord) -> String {
    format!(
        "• {} {} | {} at {} (ID: {})",
        person.first_name(),
        person.last_name(),
        person.title(),
        person.organization_name(),
        person.id()
    )
}

/// Pretty-print JSON with 4-space indentation
pub fn pretty_json(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
