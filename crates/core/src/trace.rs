//! Branch trace records and readers.
//!
//! A trace is a text stream with one conditional branch per line:
//!
//! ```text
//! 0x40a2b8 1
//! 0x40a2c4 0
//! ```
//!
//! The first field is the branch address in hexadecimal (the `0x` prefix is
//! optional); the second is the resolved outcome, `1` for taken and `0` for
//! not taken. Blank lines are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::error::TraceError;

/// A resolved conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Address of the branch instruction.
    pub pc: u32,
    /// Whether the branch was taken.
    pub outcome: bool,
}

impl TraceRecord {
    /// Creates a record.
    pub const fn new(pc: u32, outcome: bool) -> Self {
        Self { pc, outcome }
    }

    /// Parses one trace line. `line_no` is 1-based and only used in errors.
    ///
    /// # Errors
    ///
    /// Returns a [`TraceError`] when the line does not have exactly two
    /// fields, the address is not 32-bit hex, or the outcome is not `0`/`1`.
    pub fn parse(line: &str, line_no: usize) -> Result<Self, TraceError> {
        let mut fields = line.split_whitespace();
        let (Some(pc), Some(outcome), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(TraceError::Malformed {
                line: line_no,
                content: line.trim().to_owned(),
            });
        };

        let digits = pc
            .strip_prefix("0x")
            .or_else(|| pc.strip_prefix("0X"))
            .unwrap_or(pc);
        let pc = u32::from_str_radix(digits, 16).map_err(|source| TraceError::InvalidPc {
            line: line_no,
            source,
        })?;

        let outcome = match outcome {
            "1" => true,
            "0" => false,
            other => {
                return Err(TraceError::InvalidOutcome {
                    line: line_no,
                    value: other.to_owned(),
                });
            }
        };

        Ok(Self { pc, outcome })
    }
}

/// Iterator over the records of a text trace.
#[derive(Debug)]
pub struct TraceReader<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] if the file cannot be opened.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(TraceRecord::parse(&line, self.line_no));
        }
    }
}
