//! Error types for the search pipeline.
//!
//! Usage errors (bad or missing flags) never reach this enum; clap reports
//! them itself. Everything else funnels into `Error` and propagates to main.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The pattern did not compile. Raised before any input is read.
    #[error("invalid regular expression: {0}")]
    Pattern(#[from] regex::Error),

    /// The input file could not be opened.
    #[error("{path}: {source}")]
    Open { path: String, source: io::Error },

    /// A read or write failed mid-stream. Output already written stays valid
    /// for the lines processed so far.
    #[error("{0}")]
    Io(#[from] io::Error),
}
