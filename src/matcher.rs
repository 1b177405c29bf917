//! Pattern compilation and per-line matching.
//!
//! The pattern is compiled exactly once, before any input is consumed, so an
//! invalid pattern aborts the run without touching the input source.

use regex::Regex;

use crate::error::Error;

/// One line's worth of match results: the line, its 1-based number, and the
/// ordered non-overlapping byte spans the pattern matched within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub line_number: usize,
    pub line_text: String,
    pub spans: Vec<(usize, usize)>,
}

pub struct Matcher {
    re: Regex,
}

impl Matcher {
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Ok(Self {
            re: Regex::new(pattern)?,
        })
    }

    /// Find all non-overlapping matches in `line`, left to right.
    ///
    /// Returns `None` for lines without a match; those lines produce no
    /// output under any formatter.
    pub fn match_line(&self, line_number: usize, line: &str) -> Option<MatchRecord> {
        let spans: Vec<(usize, usize)> = self
            .re
            .find_iter(line)
            .map(|m| (m.start(), m.end()))
            .collect();
        if spans.is_empty() {
            return None;
        }
        Some(MatchRecord {
            line_number,
            line_text: line.to_string(),
            spans,
        })
    }
}
