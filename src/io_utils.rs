//! I/O helpers for the search engine.
//!
//! `open_input` picks between a named file and stdin; `NumberedLines` turns
//! any reader into a lazy stream of numbered lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Read};

use crate::error::Error;

/// Open a file path for reading, or return stdin when `path` is `None` or
/// the conventional `"-"`.
///
/// The returned reader is boxed to allow dynamic dispatch across sources.
pub fn open_input(path: Option<&str>) -> Result<Box<dyn Read>, Error> {
    match path {
        Some(p) if p != "-" => match File::open(p) {
            Ok(f) => Ok(Box::new(f)),
            Err(source) => Err(Error::Open {
                path: p.to_string(),
                source,
            }),
        },
        _ => Ok(Box::new(io::stdin())),
    }
}

/// Lazy iterator over `(line_number, line_text)` pairs from a buffered
/// reader. Line numbers are 1-based; trailing newlines are stripped. The
/// sequence is finite, ordered, and not restartable.
pub struct NumberedLines<R> {
    lines: Lines<BufReader<R>>,
    line_no: usize,
}

impl<R: Read> NumberedLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            line_no: 0,
        }
    }
}

impl<R: Read> Iterator for NumberedLines<R> {
    type Item = io::Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line.map(|text| (self.line_no, text)))
    }
}
