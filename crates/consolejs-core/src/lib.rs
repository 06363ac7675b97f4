//! ConsoleJS Core
//!
//! A leveled console facade. Host-specific logging primitives sit behind the
//! [`Sink`](sink::Sink) trait and a [`SinkDescriptor`](sink::SinkDescriptor);
//! this crate decides *whether* a message is emitted under the current debug
//! level and *how* arbitrary values are flattened into text.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use consolejs_core::{console_warn, Console, Level, Value};
//! use consolejs_core::sink::{MemorySink, SinkDescriptor};
//!
//! let sink = Arc::new(MemorySink::new());
//! let console = Console::new(sink.clone(), SinkDescriptor::standard());
//! console.debug_level(Some(Level::Warnings));
//! console.pretty(Some(true));
//!
//! console_warn!(console, "retrying", Value::object([("attempt", Value::from(2))]));
//! assert_eq!(sink.texts(), vec!["retrying {\nattempt: 2\n}\n".to_string()]);
//!
//! // a failed assertion surfaces as an error
//! assert!(console.assert(1 + 1 == 3, "math is broken").is_err());
//! ```

pub mod error;
pub mod levels;
pub mod value;
pub mod inspect;
pub mod verbosity;
pub mod format;
pub mod sink;
pub mod config;
pub mod console;

// Re-export commonly used types
pub use error::{AssertionFailure, EvaluationFailure, ConsoleError, ConsoleResult};
pub use levels::Level;
pub use value::Value;
pub use inspect::{inspect, inspect_at, DEFAULT_MAX_DEPTH, ELLIPSIS};
pub use verbosity::{VerbosityFilter, VerbosityState, VerbosityOverride};
pub use format::{format, InspectionConfig, Payload};
pub use sink::{
    Sink, SinkArgs, SinkDescriptor, MethodClass, SharedSink,
    ConsoleSink, NoOpSink, MemorySink, TracingSink,
};
pub use config::ConsoleConfig;
pub use console::{Console, init, global, VERSION};
