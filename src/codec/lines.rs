use super::{DependencyCodec, EnvVarCodec};
use crate::error::FormatError;
use crate::models::{DependencyEntry, EnvVarEntry};
use log::debug;
use std::fmt;

/// A line of a list that failed to decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// Position of the line in the original list
    pub index: usize,
    pub line: String,
    pub error: FormatError,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.index + 1, self.error)
    }
}

/// Result of decoding a whole list of lines. Every line is attempted; a bad
/// line never prevents its siblings from decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLines<T> {
    /// Successfully decoded entries with their original index, in list order
    pub entries: Vec<(usize, T)>,

    /// Lines that failed to decode, in list order
    pub errors: Vec<LineError>,
}

impl<T> Default for DecodedLines<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> DecodedLines<T> {
    /// True if no line failed
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Decoded entries without their indices
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn into_values(self) -> Vec<T> {
        self.entries.into_iter().map(|(_, entry)| entry).collect()
    }
}

/// Decodes lines one at a time with `parse`, collecting per-line errors.
/// Blank lines are skipped.
pub fn decode_lines<T, S, F>(lines: &[S], parse: F) -> DecodedLines<T>
where
    S: AsRef<str>,
    F: Fn(&str) -> Result<T, FormatError>,
{
    let mut decoded = DecodedLines::default();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        if line.trim().is_empty() {
            debug!("Skipped blank row {}", index + 1);
            continue;
        }

        match parse(line) {
            Ok(entry) => decoded.entries.push((index, entry)),
            Err(error) => {
                debug!("Failed to parse row {}: {}", index + 1, error);
                decoded.errors.push(LineError {
                    index,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    debug!(
        "Decoded {} rows, {} failed",
        decoded.entries.len(),
        decoded.errors.len()
    );
    decoded
}

/// Decodes a DEPEND list
pub fn decode_dependencies<S: AsRef<str>>(lines: &[S]) -> DecodedLines<DependencyEntry> {
    decode_lines(lines, DependencyCodec::parse)
}

/// Decodes an ENVVAR list
pub fn decode_env_vars<S: AsRef<str>>(lines: &[S]) -> DecodedLines<EnvVarEntry> {
    decode_lines(lines, EnvVarCodec::parse)
}

/// Renders dependency entries back into DEPEND lines, in order
pub fn render_dependencies<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a DependencyEntry>,
{
    entries.into_iter().map(DependencyCodec::render).collect()
}

/// Renders environment variables back into ENVVAR lines, in order
pub fn render_env_vars<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a EnvVarEntry>,
{
    entries.into_iter().map(EnvVarCodec::render).collect()
}
