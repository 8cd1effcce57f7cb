//! DiagnosticsReporter: renders a `DiagnosticRecord` on the diagnostics channel.

use std::io::{self, Write};
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::domain::diagnostics::DiagnosticRecord;
use crate::domain::types::ReportFormat;

pub const SEPARATOR: &str = "---------------------------";

/// Held while one record is written so reports from concurrent runs
/// never interleave.
static REPORT_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub struct DiagnosticsReporter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> DiagnosticsReporter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `record`. Reporting is best-effort: channel errors are logged and
    /// swallowed so they can never change the evaluation outcome.
    pub fn report(&mut self, record: &DiagnosticRecord) {
        // A poisoned lock only means another report panicked mid-write.
        let _guard = REPORT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let result = match self.format {
            ReportFormat::Text => write_text(&mut self.out, record),
            ReportFormat::Json => write_json(&mut self.out, record),
        };
        if let Err(e) = result.and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write trust diagnostics");
        }
    }
}

fn write_text<W: Write>(out: &mut W, record: &DiagnosticRecord) -> io::Result<()> {
    for cert in &record.certificates {
        writeln!(out, "{SEPARATOR}")?;
        for prop in &cert.properties {
            writeln!(out, "{} : {}", prop.key, prop.value.render())?;
        }
    }
    writeln!(out, "{SEPARATOR}")
}

fn write_json<W: Write>(out: &mut W, record: &DiagnosticRecord) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, record).map_err(io::Error::from)?;
    writeln!(out)
}
