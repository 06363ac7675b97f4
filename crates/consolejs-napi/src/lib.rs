//! Node.js bindings for ConsoleJS via napi-rs

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi::{JsFunction, JsObject, JsString, JsUnknown, ValueType};
use napi_derive::napi;
use std::sync::Arc;

use consolejs_core::{
    global as core_global, init as core_init, Console as CoreConsole, ConsoleConfig as CoreConsoleConfig,
    ConsoleSink as CoreConsoleSink, Level as CoreLevel, SinkDescriptor as CoreSinkDescriptor, Value,
    ELLIPSIS,
};

fn to_napi_error(e: impl std::fmt::Display) -> Error {
    Error::from_reason(e.to_string())
}

fn console() -> &'static CoreConsole {
    core_global()
}

// ============================================================================
// Level Constants
// ============================================================================

#[napi]
pub const DEBUGLEVEL_VERBOSE: i32 = 0;
#[napi]
pub const DEBUGLEVEL_INFO: i32 = 1;
#[napi]
pub const DEBUGLEVEL_DEBUG: i32 = 2;
#[napi]
pub const DEBUGLEVEL_WARNINGS: i32 = 3;
#[napi]
pub const DEBUGLEVEL_ERRORS: i32 = 4;
#[napi]
pub const DEBUGLEVEL_NONE: i32 = -1;

// ============================================================================
// Value Conversion
// ============================================================================

/// Map a JavaScript value onto the core value shapes
///
/// Conversion stops below `limit` and leaves an ellipsis in place of the
/// cut-off node, which keeps cyclic objects finite.
fn to_value(value: JsUnknown, depth: usize, limit: usize) -> Result<Value> {
    if depth > limit {
        return Ok(Value::Text(ELLIPSIS.to_string()));
    }

    let converted = match value.get_type()? {
        ValueType::Undefined => Value::Undefined,
        ValueType::Null => Value::Null,
        ValueType::Function => Value::Function,
        ValueType::Boolean => Value::Bool(value.coerce_to_bool()?.get_value()?),
        ValueType::Number => Value::Number(value.coerce_to_number()?.get_double()?),
        ValueType::String => Value::Text(value.coerce_to_string()?.into_utf8()?.into_owned()?),
        ValueType::Object => {
            let is_array = value.is_array()?;
            let object = JsObject::try_from(value)?;
            if is_array {
                array_to_value(&object, depth, limit)?
            } else {
                object_to_value(&object, depth, limit)?
            }
        }
        ValueType::Symbol => Value::Text("symbol".to_string()),
        other => Value::Text(format!("{:?}", other).to_lowercase()),
    };
    Ok(converted)
}

fn array_to_value(array: &JsObject, depth: usize, limit: usize) -> Result<Value> {
    let len = array.get_array_length()?;
    let mut items = Vec::with_capacity(len as usize);
    for index in 0..len {
        let item: JsUnknown = array.get_element(index)?;
        items.push(to_value(item, depth + 1, limit)?);
    }
    Ok(Value::Array(items))
}

fn object_to_value(object: &JsObject, depth: usize, limit: usize) -> Result<Value> {
    let names = object.get_property_names()?;
    let len = names.get_array_length()?;
    let mut entries = Vec::with_capacity(len as usize);
    for index in 0..len {
        let name: JsString = names.get_element(index)?;
        let key = name.into_utf8()?.into_owned()?;
        if !object.has_own_property(&key)? {
            continue;
        }
        let member: JsUnknown = object.get_named_property_unchecked(&key)?;
        entries.push((key, to_value(member, depth + 1, limit)?));
    }
    Ok(Value::Object(entries))
}

fn to_values(args: Vec<JsUnknown>) -> Result<Vec<Value>> {
    let limit = console().inspection_config().max_depth;
    args.into_iter().map(|arg| to_value(arg, 0, limit)).collect()
}

// ============================================================================
// Initialization and Configuration
// ============================================================================

/// Options describing how the native sink is called
#[napi(object)]
pub struct SinkOptions {
    pub has_alternate_info_method: Option<bool>,
    pub info_method_name: Option<String>,
    pub supports_list_arguments: Option<bool>,
    pub requires_string_argument: Option<bool>,
    pub prefix_format: Option<String>,
    pub fixed_method: Option<String>,
    /// Tag written before every console line
    pub line_prefix: Option<String>,
}

impl SinkOptions {
    fn descriptor(&self) -> CoreSinkDescriptor {
        let mut descriptor = CoreSinkDescriptor::standard();
        if let Some(v) = self.has_alternate_info_method {
            descriptor.has_alternate_info_method = v;
        }
        if let Some(v) = &self.info_method_name {
            descriptor.info_method_name = v.clone();
        }
        if let Some(v) = self.supports_list_arguments {
            descriptor.supports_list_arguments = v;
        }
        if let Some(v) = self.requires_string_argument {
            descriptor.requires_string_argument = v;
        }
        descriptor.prefix_format = self.prefix_format.clone();
        descriptor.fixed_method = self.fixed_method.clone();
        descriptor
    }
}

/// Install the process-wide console; must run before any other call
#[napi]
pub fn init(options: Option<SinkOptions>) -> Result<()> {
    let (descriptor, sink) = match options {
        Some(options) => {
            let sink = match &options.line_prefix {
                Some(prefix) => CoreConsoleSink::with_prefix(prefix.clone()),
                None => CoreConsoleSink::new(),
            };
            (options.descriptor(), sink)
        }
        None => (CoreSinkDescriptor::standard(), CoreConsoleSink::new()),
    };
    core_init(Arc::new(sink), descriptor).map(|_| ()).map_err(to_napi_error)
}

/// Load a YAML config (default: the user config file) plus environment overrides
#[napi]
pub fn load_config(path: Option<String>) -> Result<()> {
    let config = match path {
        Some(path) => CoreConsoleConfig::load_file(path)
            .map_err(to_napi_error)?
            .with_env_overrides(),
        None => CoreConsoleConfig::load().map_err(to_napi_error)?,
    };
    console().apply_config(&config);
    Ok(())
}

/// Set and/or get the debug level; unknown levels are ignored
#[napi]
pub fn debug_level(level: Option<i32>) -> i32 {
    let level = level.and_then(|l| CoreLevel::from_i64(l as i64).ok());
    console().debug_level(level).as_i32()
}

/// Set and/or get the depth of inspections
#[napi]
pub fn inspection_depth(depth: Option<JsUnknown>) -> Result<u32> {
    let current = match depth {
        Some(raw) => console().inspection_depth_from(&to_value(raw, 0, 0)?),
        None => console().inspection_depth(None),
    };
    Ok(u32::try_from(current).unwrap_or(u32::MAX))
}

/// Set and/or get pretty-print mode
#[napi]
pub fn pretty(state: Option<bool>) -> bool {
    console().pretty(state)
}

// ============================================================================
// Output
// ============================================================================

/// Write a log message; arguments are passed as an array
#[napi]
pub fn log(args: Vec<JsUnknown>) -> Result<()> {
    if console().should_emit(CoreLevel::Verbose) {
        console().log(&to_values(args)?);
    }
    Ok(())
}

#[napi]
pub fn info(args: Vec<JsUnknown>) -> Result<()> {
    if console().should_emit(CoreLevel::Info) {
        console().info(&to_values(args)?);
    }
    Ok(())
}

#[napi]
pub fn debug(args: Vec<JsUnknown>) -> Result<()> {
    if console().should_emit(CoreLevel::Debug) {
        console().debug(&to_values(args)?);
    }
    Ok(())
}

#[napi]
pub fn warn(args: Vec<JsUnknown>) -> Result<()> {
    if console().should_emit(CoreLevel::Warnings) {
        console().warn(&to_values(args)?);
    }
    Ok(())
}

#[napi]
pub fn error(args: Vec<JsUnknown>) -> Result<()> {
    if console().should_emit(CoreLevel::Errors) {
        console().error(&to_values(args)?);
    }
    Ok(())
}

#[napi]
pub fn trace() {
    console().trace();
}

#[napi]
pub fn version() {
    console().version();
}

/// Render a value the way pretty-print mode would
#[napi]
pub fn inspect(value: JsUnknown) -> Result<String> {
    let limit = console().inspection_config().max_depth;
    Ok(console().inspect(&to_value(value, 0, limit)?))
}

/// Assert that `test` is truthy, throwing `AssertionError` otherwise
///
/// When `test` is a function it is called; if the call throws, a warning is
/// written instead and the assertion does not fail.
#[napi]
pub fn assert(test: JsUnknown, message: String) -> Result<()> {
    let outcome = match test.get_type()? {
        ValueType::Function => {
            let func = JsFunction::try_from(test)?;
            console().assert_with(
                || -> Result<bool> {
                    let verdict = func.call_without_args(None)?;
                    verdict.coerce_to_bool()?.get_value()
                },
                &message,
            )
        }
        _ => {
            let verdict = test.coerce_to_bool()?.get_value()?;
            console().assert(verdict, &message)
        }
    };
    outcome.map_err(|failure| Error::new(Status::GenericFailure, failure.to_string()))
}
