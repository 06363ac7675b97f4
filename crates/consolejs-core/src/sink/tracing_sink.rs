//! Sink that forwards console output to the `tracing` ecosystem

use super::traits::{MethodClass, Sink, SinkArgs};

/// Target used for forwarded events
pub const TRACING_TARGET: &str = "consolejs::sink";

/// A sink that emits every call as a `tracing` event
///
/// Method classes map onto tracing levels (info → INFO, debug → DEBUG,
/// warn → WARN, error → ERROR). The resolved method name is recorded as
/// the `method` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn write(&self, class: MethodClass, method: &str, args: SinkArgs, max_depth: usize) {
        let message = args.to_text(max_depth);
        match class {
            MethodClass::Info => tracing::info!(target: TRACING_TARGET, method, "{}", message),
            MethodClass::Debug => tracing::debug!(target: TRACING_TARGET, method, "{}", message),
            MethodClass::Warn => tracing::warn!(target: TRACING_TARGET, method, "{}", message),
            MethodClass::Error => tracing::error!(target: TRACING_TARGET, method, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_tracing_sink_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let sink = TracingSink::new();
            sink.write(MethodClass::Info, "log", SinkArgs::List(vec![Value::from("hi")]), 2);
            sink.write(MethodClass::Warn, "warn", SinkArgs::Text("careful".into()), 2);
            sink.write(MethodClass::Debug, "debug", SinkArgs::List(vec![Value::array([Value::array([1])])]), 0);
        });
    }

    #[test]
    fn test_without_subscriber_is_silent() {
        let sink = TracingSink::new();
        sink.write(MethodClass::Error, "error", SinkArgs::Text("nobody listening".into()), 2);
    }
}
