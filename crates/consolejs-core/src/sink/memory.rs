//! In-memory recording sink

use parking_lot::RwLock;

use super::traits::{MethodClass, Sink, SinkArgs};

/// One recorded sink invocation
#[derive(Debug, Clone, PartialEq)]
pub struct SinkCall {
    pub class: MethodClass,
    pub method: String,
    pub args: SinkArgs,
    /// Inspection depth the console passed with the call
    pub max_depth: usize,
}

impl SinkCall {
    /// The call's arguments flattened to one line, at the recorded depth
    pub fn text(&self) -> String {
        self.args.to_text(self.max_depth)
    }
}

/// Sink that records every call, for tests and for hosts that poll output
///
/// # Example
///
/// ```
/// use consolejs_core::sink::{MemorySink, MethodClass, Sink, SinkArgs};
///
/// let sink = MemorySink::new();
/// sink.write(MethodClass::Warn, "warn", SinkArgs::Text("careful".into()), 2);
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.calls()[0].method, "warn");
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    calls: RwLock<Vec<SinkCall>>,
    traces: RwLock<usize>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded calls, oldest first
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.read().clone()
    }

    /// Recorded calls for one class
    pub fn calls_for(&self, class: MethodClass) -> Vec<SinkCall> {
        self.calls
            .read()
            .iter()
            .filter(|call| call.class == class)
            .cloned()
            .collect()
    }

    /// Flattened text of every recorded call
    pub fn texts(&self) -> Vec<String> {
        self.calls.read().iter().map(SinkCall::text).collect()
    }

    /// Number of `trace` requests received
    pub fn trace_count(&self) -> usize {
        *self.traces.read()
    }

    pub fn len(&self) -> usize {
        self.calls.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.calls.write().clear();
        *self.traces.write() = 0;
    }
}

impl Sink for MemorySink {
    fn write(&self, class: MethodClass, method: &str, args: SinkArgs, max_depth: usize) {
        self.calls.write().push(SinkCall {
            class,
            method: method.to_string(),
            args,
            max_depth,
        });
    }

    fn trace(&self) {
        *self.traces.write() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_records_calls_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write(MethodClass::Info, "log", SinkArgs::List(vec![Value::from("a"), Value::from(1)]), 2);
        sink.write(MethodClass::Error, "error", SinkArgs::Text("bad".into()), 2);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.texts(), vec!["a 1".to_string(), "bad".to_string()]);
        assert_eq!(sink.calls()[0].method, "log");
        assert_eq!(sink.calls_for(MethodClass::Error).len(), 1);
        assert!(sink.calls_for(MethodClass::Debug).is_empty());
    }

    #[test]
    fn test_trace_and_clear() {
        let sink = MemorySink::new();
        sink.trace();
        sink.write(MethodClass::Debug, "debug", SinkArgs::Text("x".into()), 2);
        assert_eq!(sink.trace_count(), 1);

        sink.clear();
        assert!(sink.is_empty());
        assert_eq!(sink.trace_count(), 0);
    }

    #[test]
    fn test_text_uses_recorded_depth() {
        let sink = MemorySink::new();
        let nested = vec![Value::array([Value::array([1])])];
        sink.write(MethodClass::Info, "log", SinkArgs::List(nested.clone()), 0);
        sink.write(MethodClass::Info, "log", SinkArgs::List(nested), 3);
        assert_eq!(sink.texts(), vec!["[...]".to_string(), "[[1]]".to_string()]);
        assert_eq!(sink.calls()[1].max_depth, 3);
    }
}
