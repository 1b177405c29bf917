use crate::format::FormatMode;

#[derive(Debug, Clone)]
pub struct Config {
    pub pattern: String,      // -r / --regex
    pub file: Option<String>, // -f / --file, None means stdin
    pub format: FormatMode,   // -u / -c / -m, Plain when none given
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            file: None,
            format: FormatMode::Plain,
        }
    }
}

/// Captured result of a buffered search run.
#[derive(Debug)]
pub struct RunResult {
    pub output: String,
    /// Number of lines that had at least one match.
    pub matched: usize,
}
