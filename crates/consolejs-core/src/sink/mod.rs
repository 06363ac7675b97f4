//! Output sinks
//!
//! A sink is the host's native logging primitive. The console never inspects
//! the host; it is handed a sink together with a [`SinkDescriptor`] that
//! says which method name serves each class of output and how arguments
//! must be shaped.

mod traits;
mod descriptor;
mod noop;
mod console;
mod memory;
mod tracing_sink;

pub use traits::{Sink, SinkArgs, MethodClass, SharedSink};
pub use descriptor::{SinkDescriptor, METHOD_PLACEHOLDER};
pub use noop::NoOpSink;
pub use console::ConsoleSink;
pub use memory::{MemorySink, SinkCall};
pub use tracing_sink::TracingSink;
