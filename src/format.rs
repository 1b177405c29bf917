//! Output formatters.
//!
//! A closed set of four rendering strategies, selected once at startup and
//! dispatched through a single `render` call per matching line.

use std::io::{self, Write};

use colored::Colorize;

use crate::matcher::MatchRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// `line_number: line_text`, unmodified.
    #[default]
    Plain,
    /// The line, then a marker line with `^` under every matched span.
    Underscore,
    /// The line with matched spans highlighted via ANSI escapes.
    Color,
    /// One tab-separated record per match: `line_number\tstart\tend\ttext`.
    Machine,
}

impl FormatMode {
    pub fn render<W: Write>(&self, rec: &MatchRecord, out: &mut W) -> io::Result<()> {
        match self {
            FormatMode::Plain => writeln!(out, "{}: {}", rec.line_number, rec.line_text),
            FormatMode::Underscore => render_underscore(rec, out),
            FormatMode::Color => render_color(rec, out),
            FormatMode::Machine => render_machine(rec, out),
        }
    }
}

fn render_underscore<W: Write>(rec: &MatchRecord, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", rec.line_text)?;
    let mut marker = String::with_capacity(rec.line_text.len());
    let mut last = 0;
    for &(start, end) in &rec.spans {
        marker.push_str(&" ".repeat(start - last));
        marker.push_str(&"^".repeat(end - start));
        last = end;
    }
    writeln!(out, "{}", marker)
}

fn render_color<W: Write>(rec: &MatchRecord, out: &mut W) -> io::Result<()> {
    let line = &rec.line_text;
    let mut styled = String::with_capacity(line.len() + 16);
    let mut last = 0;
    for &(start, end) in &rec.spans {
        styled.push_str(&line[last..start]);
        styled.push_str(&line[start..end].red().bold().to_string());
        last = end;
    }
    styled.push_str(&line[last..]);
    writeln!(out, "{}", styled)
}

fn render_machine<W: Write>(rec: &MatchRecord, out: &mut W) -> io::Result<()> {
    for &(start, end) in &rec.spans {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            rec.line_number,
            start,
            end,
            &rec.line_text[start..end]
        )?;
    }
    Ok(())
}
