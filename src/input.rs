//! Plain-text workload loader.
//!
//! Grammar: one process per line, whitespace-separated fields
//! `id arrival burst [priority]`. Blank lines and lines starting with `#`
//! are skipped. Priority defaults to 0 when absent; fields past the
//! priority are ignored.
//!
//! The loader is the boundary that rejects malformed data — negative
//! arrivals and non-positive bursts never reach the policy engines.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use crate::models::Process;

/// Loader error, carrying the offending line number (1-based, 0 for
/// whole-file failures).
#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    /// Error category.
    pub kind: InputErrorKind,
    /// Source line the error was detected on.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of loader errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// The source file could not be read.
    Unreadable,
    /// A line has fewer fields than `id arrival burst`.
    MissingField,
    /// A numeric field failed to parse.
    InvalidField,
    /// Arrival time is negative.
    NegativeArrival,
    /// Burst is zero or negative.
    NonPositiveBurst,
}

impl InputError {
    fn new(kind: InputErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "line {}: {}", self.line, self.message)
        }
    }
}

impl Error for InputError {}

/// Loads a workload from a file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Process>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        InputError::new(
            InputErrorKind::Unreadable,
            0,
            format!("cannot read {}: {e}", path.display()),
        )
    })?;
    let processes = parse_str(&text)?;
    debug!("loaded {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

/// Parses a workload from text.
pub fn parse_str(text: &str) -> Result<Vec<Process>, InputError> {
    let mut processes = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let id = fields.next().unwrap_or_default();
        let arrival = parse_field(fields.next(), "arrival", line_no)?;
        let burst = parse_field(fields.next(), "burst", line_no)?;
        let priority = match fields.next() {
            Some(token) => parse_token(token, "priority", line_no)? as i32,
            None => 0,
        };

        if arrival < 0 {
            return Err(InputError::new(
                InputErrorKind::NegativeArrival,
                line_no,
                format!("process '{id}' has negative arrival {arrival}"),
            ));
        }
        if burst <= 0 {
            return Err(InputError::new(
                InputErrorKind::NonPositiveBurst,
                line_no,
                format!("process '{id}' has non-positive burst {burst}"),
            ));
        }

        processes.push(Process::new(id, arrival, burst).with_priority(priority));
    }
    Ok(processes)
}

fn parse_field(token: Option<&str>, name: &str, line_no: usize) -> Result<i64, InputError> {
    match token {
        Some(token) => parse_token(token, name, line_no),
        None => Err(InputError::new(
            InputErrorKind::MissingField,
            line_no,
            format!("missing {name} field"),
        )),
    }
}

fn parse_token(token: &str, name: &str, line_no: usize) -> Result<i64, InputError> {
    token.parse().map_err(|_| {
        InputError::new(
            InputErrorKind::InvalidField,
            line_no,
            format!("invalid {name} '{token}'"),
        )
    })
}
