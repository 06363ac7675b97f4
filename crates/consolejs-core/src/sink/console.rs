//! Console sink implementation

use super::traits::{MethodClass, Sink, SinkArgs};

/// Methods whose output belongs on stdout; every other method goes to stderr
const STDOUT_METHODS: [&str; 3] = ["log", "info", "debug"];

/// A sink that writes to the process console (stdout/stderr)
///
/// Routing follows the resolved method name: `log`, `info` and `debug` go
/// to stdout, anything else (including `warn`, `error` and custom single
/// methods) to stderr. Raw value lists are inspected at the console's depth
/// and joined, since a terminal cannot expand structured values.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    prefix: String,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Create a new console sink with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[ConsoleJS]".to_string(),
        }
    }

    /// Create a console sink with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The line this sink prints for one call
    pub fn format_line(&self, method: &str, args: &SinkArgs, max_depth: usize) -> String {
        format!("{} {}: {}", self.prefix, method.to_uppercase(), args.to_text(max_depth))
    }

    /// Whether `method` is written to stdout
    pub fn writes_to_stdout(method: &str) -> bool {
        STDOUT_METHODS.iter().any(|m| m.eq_ignore_ascii_case(method))
    }
}

impl Sink for ConsoleSink {
    fn write(&self, _class: MethodClass, method: &str, args: SinkArgs, max_depth: usize) {
        let line = self.format_line(method, &args, max_depth);
        if Self::writes_to_stdout(method) {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }
}
