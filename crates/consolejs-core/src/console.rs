//! The console facade
//!
//! Public logging API: leveled output, assertions, and the setters for
//! debug level, inspection depth and pretty printing. Every output call is
//! gated by the verbosity filter before any formatting work happens.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::config::ConsoleConfig;
use crate::error::{AssertionFailure, ConsoleError, ConsoleResult, EvaluationFailure};
use crate::format::InspectionConfig;
use crate::inspect::inspect;
use crate::levels::Level;
use crate::sink::{ConsoleSink, MethodClass, SharedSink, Sink, SinkDescriptor};
use crate::value::Value;
use crate::verbosity::{VerbosityFilter, VerbosityState};

/// Version reported by [`Console::version`]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Leading text of the warning emitted when an assertion test fails abnormally
pub const ASSERT_EXCEPTION_PREFIX: &str = "*ASSERT* 'test' would result in an exception: ";

/// Largest inspection depth accepted from an untyped host value
pub const MAX_HOST_DEPTH: usize = u32::MAX as usize;

/// Leveled logging facade over a [`Sink`]
///
/// Holds the verbosity and inspection state for one host. A process normally
/// has a single instance, reached through [`global`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use consolejs_core::{Console, Level, Value};
/// use consolejs_core::sink::{MemorySink, SinkDescriptor};
///
/// let sink = Arc::new(MemorySink::new());
/// let console = Console::new(sink.clone(), SinkDescriptor::standard());
///
/// console.info(&[Value::from("hidden")]);
/// assert!(sink.is_empty());
///
/// console.debug_level(Some(Level::Info));
/// console.info(&[Value::from("shown")]);
/// assert_eq!(sink.texts(), vec!["shown".to_string()]);
/// ```
pub struct Console {
    verbosity: VerbosityFilter,
    inspection: RwLock<InspectionConfig>,
    sink: SharedSink,
    descriptor: SinkDescriptor,
}

impl Console {
    /// Create a console dispatching to `sink` as described by `descriptor`
    ///
    /// Output starts disabled (level `None`).
    pub fn new(sink: SharedSink, descriptor: SinkDescriptor) -> Self {
        Self {
            verbosity: VerbosityFilter::default(),
            inspection: RwLock::new(InspectionConfig::default()),
            sink,
            descriptor,
        }
    }

    /// Create a console over `sink` with the standard descriptor
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self::new(Arc::new(sink), SinkDescriptor::standard())
    }

    pub fn descriptor(&self) -> &SinkDescriptor {
        &self.descriptor
    }

    /// Set (when `Some`) and return the debug level
    ///
    /// Setting any level other than `None` enables output.
    pub fn debug_level(&self, level: Option<Level>) -> Level {
        match level {
            Some(level) => self.verbosity.set_threshold(level),
            None => self.verbosity.threshold(),
        }
    }

    /// Whether any output is enabled at all
    pub fn is_enabled(&self) -> bool {
        self.verbosity.is_enabled()
    }

    /// Snapshot of the verbosity state
    pub fn verbosity(&self) -> VerbosityState {
        self.verbosity.state()
    }

    /// Whether a message at `level` would be emitted right now
    pub fn should_emit(&self, level: Level) -> bool {
        self.verbosity.should_emit(level)
    }

    /// Set (when `Some`) and return the maximum depth of inspection
    pub fn inspection_depth(&self, depth: Option<usize>) -> usize {
        let mut config = self.inspection.write();
        if let Some(depth) = depth {
            config.max_depth = depth;
        }
        config.max_depth
    }

    /// Set the inspection depth from an untyped host value
    ///
    /// Non-negative integral numbers and numeric text up to
    /// [`MAX_HOST_DEPTH`] are accepted. Anything else is ignored and the
    /// current depth kept.
    pub fn inspection_depth_from(&self, raw: &Value) -> usize {
        let parsed = match raw {
            Value::Number(n) if *n >= 0.0 && *n <= MAX_HOST_DEPTH as f64 && n.fract() == 0.0 => {
                Some(*n as usize)
            }
            Value::Text(text) => text.trim().parse::<usize>().ok().filter(|d| *d <= MAX_HOST_DEPTH),
            _ => None,
        };
        if parsed.is_none() {
            tracing::debug!(target: "consolejs", value = ?raw, "ignoring invalid inspection depth");
        }
        self.inspection_depth(parsed)
    }

    /// Set (when `Some`) and return the pretty-print mode
    pub fn pretty(&self, state: Option<bool>) -> bool {
        let mut config = self.inspection.write();
        if let Some(state) = state {
            config.pretty_print = state;
        }
        config.pretty_print
    }

    /// Snapshot of the inspection settings
    pub fn inspection_config(&self) -> InspectionConfig {
        *self.inspection.read()
    }

    /// Apply a loaded configuration through the regular setters
    pub fn apply_config(&self, config: &ConsoleConfig) {
        self.debug_level(Some(config.level));
        self.inspection_depth(Some(config.inspection_depth));
        self.pretty(Some(config.pretty));
    }

    /// Render a value with the current inspection depth
    pub fn inspect(&self, value: &Value) -> String {
        inspect(value, self.inspection_config().max_depth)
    }

    /// Write a log message (verbose level)
    pub fn log(&self, values: &[Value]) {
        self.emit(Level::Verbose, MethodClass::Info, values);
    }

    /// Write an info message
    pub fn info(&self, values: &[Value]) {
        self.emit(Level::Info, MethodClass::Info, values);
    }

    /// Write a debug message
    pub fn debug(&self, values: &[Value]) {
        self.emit(Level::Debug, MethodClass::Debug, values);
    }

    /// Write a warning message
    pub fn warn(&self, values: &[Value]) {
        self.emit(Level::Warnings, MethodClass::Warn, values);
    }

    /// Write an error message
    pub fn error(&self, values: &[Value]) {
        self.emit(Level::Errors, MethodClass::Error, values);
    }

    /// Ask the sink for a stack trace; a no-op unless the sink supplies one
    pub fn trace(&self) {
        self.sink.trace();
    }

    /// Log the identification string at verbose level
    pub fn version(&self) {
        self.log(&[Value::from(format!("ConsoleJS v{}", VERSION))]);
    }

    /// Assert that `test` holds
    ///
    /// Returns [`AssertionFailure`] carrying `message` when it does not.
    pub fn assert(&self, test: bool, message: &str) -> Result<(), AssertionFailure> {
        self.assert_with(|| Ok::<bool, EvaluationFailure>(test), message)
    }

    /// Assert the verdict of a fallible evaluation
    ///
    /// When the evaluation errors or panics, a warning is forced out (the
    /// debug level is raised to `Warnings` for that one message and then
    /// restored) and the assertion does not fail. Only a clean `false`
    /// verdict produces an [`AssertionFailure`].
    pub fn assert_with<F, E>(&self, test: F, message: &str) -> Result<(), AssertionFailure>
    where
        F: FnOnce() -> Result<bool, E>,
        E: std::fmt::Display,
    {
        let verdict = match panic::catch_unwind(AssertUnwindSafe(test)) {
            Ok(Ok(verdict)) => Some(verdict),
            Ok(Err(e)) => {
                self.report_evaluation_failure(EvaluationFailure::Errored(e.to_string()));
                None
            }
            Err(payload) => {
                self.report_evaluation_failure(EvaluationFailure::from_panic(payload));
                None
            }
        };

        match verdict {
            Some(false) => Err(AssertionFailure::new(message)),
            _ => Ok(()),
        }
    }

    fn report_evaluation_failure(&self, failure: EvaluationFailure) {
        tracing::debug!(target: "consolejs", error = %failure, "assertion test failed abnormally");
        let _override = self.verbosity.override_threshold(Level::Warnings);
        self.warn(&[Value::from(ASSERT_EXCEPTION_PREFIX), Value::from(failure.to_string())]);
    }

    fn emit(&self, level: Level, class: MethodClass, values: &[Value]) {
        if !self.verbosity.should_emit(level) {
            return;
        }
        let config = self.inspection_config();
        let args = self.descriptor.shape(class, values, &config);
        self.sink.write(class, self.descriptor.method_for(class), args, config.max_depth);
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("verbosity", &self.verbosity.state())
            .field("inspection", &self.inspection_config())
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

/// The process-wide console
static CONSOLE: OnceCell<Console> = OnceCell::new();

/// Install the process-wide console
///
/// Fails with [`ConsoleError::AlreadyInitialized`] if a console was already
/// installed, either by an earlier `init` or by a call to [`global`].
pub fn init(sink: SharedSink, descriptor: SinkDescriptor) -> ConsoleResult<&'static Console> {
    let mut installed = false;
    let console = CONSOLE.get_or_init(|| {
        installed = true;
        Console::new(sink, descriptor)
    });
    if installed {
        Ok(console)
    } else {
        Err(ConsoleError::AlreadyInitialized)
    }
}

/// The process-wide console, installing a [`ConsoleSink`] on first use
pub fn global() -> &'static Console {
    CONSOLE.get_or_init(|| Console::new(Arc::new(ConsoleSink::new()), SinkDescriptor::standard()))
}

/// Write a log message if verbose output is enabled
///
/// Arguments are only converted into [`Value`]s when the message passes
/// the filter.
///
/// ```
/// use consolejs_core::{console_log, Console, Level};
/// use consolejs_core::sink::MemorySink;
///
/// let console = Console::with_sink(MemorySink::new());
/// console.debug_level(Some(Level::Verbose));
/// console_log!(console, "answer", 42);
/// ```
#[macro_export]
macro_rules! console_log {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $crate::__console_emit!($console, Verbose, log $(, $arg)*)
    };
}

#[macro_export]
macro_rules! console_info {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $crate::__console_emit!($console, Info, info $(, $arg)*)
    };
}

#[macro_export]
macro_rules! console_debug {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $crate::__console_emit!($console, Debug, debug $(, $arg)*)
    };
}

#[macro_export]
macro_rules! console_warn {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $crate::__console_emit!($console, Warnings, warn $(, $arg)*)
    };
}

#[macro_export]
macro_rules! console_error {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $crate::__console_emit!($console, Errors, error $(, $arg)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($console:expr, $level:ident, $method:ident $(, $arg:expr)*) => {{
        let console = &$console;
        if console.should_emit($crate::Level::$level) {
            console.$method(&[$($crate::Value::from($arg)),*]);
        }
    }};
}
