use std::io::{Read, Write};

use crate::config::{Config, RunResult};
use crate::error::Error;
use crate::io_utils::{NumberedLines, open_input};
use crate::matcher::Matcher;

/// Run a search over any `Read` implementor, rendering each matching line
/// through the configured formatter into `out`.
///
/// The pattern is compiled before the first read, so pattern errors abort
/// without producing any output. Output written before a mid-stream read
/// failure is left on `out` as-is.
///
/// Returns the number of lines that had at least one match.
pub fn search<R: Read, W: Write>(cfg: &Config, reader: R, out: &mut W) -> Result<usize, Error> {
    let matcher = Matcher::new(&cfg.pattern)?;

    let mut matched = 0usize;
    for item in NumberedLines::new(reader) {
        let (line_no, line) = item?;
        if let Some(rec) = matcher.match_line(line_no, &line) {
            matched += 1;
            cfg.format.render(&rec, out)?;
        }
    }
    Ok(matched)
}

/// Buffered variant of [`search`]: captures the rendered output in a
/// `RunResult` instead of streaming it. This is the main entry point for
/// tests and library callers.
pub fn run_on_reader<R: Read>(cfg: &Config, reader: R) -> Result<RunResult, Error> {
    let mut buf: Vec<u8> = Vec::new();
    let matched = search(cfg, reader, &mut buf)?;
    Ok(RunResult {
        output: String::from_utf8_lossy(&buf).into_owned(),
        matched,
    })
}

/// Run a search over the configured input: the file named in `cfg.file`, or
/// stdin when it is absent (or `"-"`). Rendered output goes to `out`.
pub fn run<W: Write>(cfg: &Config, out: &mut W) -> Result<usize, Error> {
    let reader = open_input(cfg.file.as_deref())?;
    search(cfg, reader, out)
}
