//! Sink trait definition

use std::sync::Arc;

use crate::format::join_inspected;
use crate::value::Value;

/// Class of output a log call maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodClass {
    Info,
    Debug,
    Warn,
    Error,
}

impl MethodClass {
    /// Conventional method name for the class
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodClass::Info => "info",
            MethodClass::Debug => "debug",
            MethodClass::Warn => "warn",
            MethodClass::Error => "error",
        }
    }
}

impl std::fmt::Display for MethodClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments handed to a sink method
#[derive(Debug, Clone, PartialEq)]
pub enum SinkArgs {
    /// A single pre-joined string
    Text(String),
    /// Raw values, rendered by the sink itself
    List(Vec<Value>),
}

impl SinkArgs {
    /// Flatten to one line, inspecting raw values to `max_depth`
    pub fn to_text(&self, max_depth: usize) -> String {
        match self {
            SinkArgs::Text(text) => text.clone(),
            SinkArgs::List(values) => join_inspected(values.iter(), max_depth),
        }
    }
}

/// Host output abstraction
///
/// Implementations:
/// - `ConsoleSink`: Writes to stdout/stderr
/// - `NoOpSink`: Silent sink
/// - `MemorySink`: Records every call
/// - `TracingSink`: Forwards to `tracing` events
/// - Node.js adapter: Calls into the JavaScript console
pub trait Sink: Send + Sync {
    /// Invoke output `method`, resolved from the descriptor for `class`
    ///
    /// `max_depth` is the console's inspection depth at the time of the
    /// call. Sinks that flatten `SinkArgs::List` themselves must use it.
    fn write(&self, class: MethodClass, method: &str, args: SinkArgs, max_depth: usize);

    /// Emit a stack trace, if the host can capture one
    fn trace(&self) {}
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;
