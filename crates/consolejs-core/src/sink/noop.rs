//! No-op sink implementation

use super::traits::{MethodClass, Sink, SinkArgs};

/// A sink that does nothing
///
/// Useful for hosts with no console at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn write(&self, _class: MethodClass, _method: &str, _args: SinkArgs, _max_depth: usize) {}
}
