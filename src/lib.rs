//! rematch: search text for regular-expression matches and print them
//! through one of four output formatters.
//!
//! This crate provides the search engine used by the rematch binary, but it
//! can also be embedded as a library. The public API lets you:
//! - Configure a search via [`Config`] (pattern, input file, format mode).
//! - Run searches over readers or the configured input ([`run_on_reader`],
//!   [`run`]).
//! - Pick an output rendering strategy via [`FormatMode`] (plain,
//!   underscore, color, machine-readable).
//!
//! Quick example: search a string buffer
//!
//! ```no_run
//! use rematch::{Config, run_on_reader};
//! let mut cfg = Config::default();
//! cfg.pattern = "error".into();
//! let res = run_on_reader(&cfg, "ok\nerror\n".as_bytes()).unwrap();
//! assert_eq!(res.matched, 1);
//! println!("{}", res.output);
//! ```
//!
//! See README for CLI usage examples.

pub mod config;
pub mod error;
pub mod format;
pub mod io_utils;
pub mod matcher;
pub mod search;

pub use config::{Config, RunResult};
pub use error::Error;
pub use format::FormatMode;
pub use matcher::{MatchRecord, Matcher};
pub use search::{run, run_on_reader};
