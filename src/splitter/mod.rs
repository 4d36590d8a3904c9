//! Line splitting: raw delimited lines to indexed field arrays.
//!
//! The splitter assigns each surviving line a zero-based sequential index
//! and splits it into positional string fields. No transformation or
//! validation of field content happens here; that is the normalization
//! engine's job.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Positional fields per surviving input line, keyed by a zero-based
/// sequential index. Iteration order is ascending index order.
pub type FieldRecord = BTreeMap<usize, Vec<String>>;

/// Default delimiter: a single pipe character.
static PIPE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|").unwrap());

/// Splits raw text lines into positional field arrays.
///
/// The delimiter is a regex pattern rather than a literal, so
/// multi-character and character-class delimiters work out of the box.
#[derive(Debug, Clone)]
pub struct LineSplitter {
    delimiter: Regex,
}

impl LineSplitter {
    /// Splitter with a caller-supplied delimiter pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            delimiter: Regex::new(pattern)?,
        })
    }

    /// Split `lines` into a [`FieldRecord`].
    ///
    /// Blank lines (empty or whitespace-only) are skipped entirely and do
    /// not consume an index; every other line is trimmed, then split on
    /// the delimiter pattern.
    pub fn split_lines<I>(&self, lines: I) -> FieldRecord
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut record = FieldRecord::new();
        let mut index = 0;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<String> = self.delimiter.split(line).map(str::to_string).collect();
            record.insert(index, fields);
            index += 1;
        }

        record
    }
}

impl Default for LineSplitter {
    fn default() -> Self {
        Self {
            delimiter: PIPE_PATTERN.clone(),
        }
    }
}
