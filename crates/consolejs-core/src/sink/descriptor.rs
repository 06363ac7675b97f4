//! Sink capability descriptor
//!
//! Describes, as plain data, how a host's logging primitive wants to be
//! called. Every host difference is a descriptor value; the dispatch code
//! never branches on which host it is running in.

use serde::{Deserialize, Serialize};

use super::traits::{MethodClass, SinkArgs};
use crate::format::{format, InspectionConfig, Payload};
use crate::value::Value;

/// Placeholder replaced by the method-class name in `prefix_format`
pub const METHOD_PLACEHOLDER: &str = "{method}";

/// How to call a sink
///
/// # Example
///
/// ```
/// use consolejs_core::sink::{MethodClass, SinkDescriptor};
///
/// let descriptor = SinkDescriptor::log_aliased();
/// assert_eq!(descriptor.method_for(MethodClass::Info), "log");
/// assert_eq!(descriptor.method_for(MethodClass::Warn), "warn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SinkDescriptor {
    /// Info-class output goes to `info_method_name` instead of `info`
    pub has_alternate_info_method: bool,
    pub info_method_name: String,
    /// The sink can receive a list of raw values
    pub supports_list_arguments: bool,
    /// The sink only accepts a single string
    pub requires_string_argument: bool,
    /// Tag prepended to every payload, e.g. `[{method}]`
    #[serde(default)]
    pub prefix_format: Option<String>,
    /// Route every class to this one method
    #[serde(default)]
    pub fixed_method: Option<String>,
}

impl Default for SinkDescriptor {
    fn default() -> Self {
        Self::standard()
    }
}

impl SinkDescriptor {
    /// Named methods per class, raw value lists accepted
    pub fn standard() -> Self {
        Self {
            has_alternate_info_method: false,
            info_method_name: "info".to_string(),
            supports_list_arguments: true,
            requires_string_argument: false,
            prefix_format: None,
            fixed_method: None,
        }
    }

    /// Like [`standard`](Self::standard) but info output goes through `log`
    pub fn log_aliased() -> Self {
        Self {
            has_alternate_info_method: true,
            info_method_name: "log".to_string(),
            ..Self::standard()
        }
    }

    /// Info aliased to `log`, and every payload flattened to one string
    pub fn string_only() -> Self {
        Self {
            supports_list_arguments: false,
            requires_string_argument: true,
            ..Self::log_aliased()
        }
    }

    /// One method for everything, with the class named in a bracketed tag
    pub fn single_method(method: impl Into<String>) -> Self {
        Self {
            supports_list_arguments: false,
            requires_string_argument: true,
            prefix_format: Some(format!("[{}]", METHOD_PLACEHOLDER)),
            fixed_method: Some(method.into()),
            ..Self::standard()
        }
    }

    /// Builder-style prefix setter
    pub fn with_prefix(mut self, prefix_format: impl Into<String>) -> Self {
        self.prefix_format = Some(prefix_format.into());
        self
    }

    /// Concrete method name serving `class`
    pub fn method_for(&self, class: MethodClass) -> &str {
        if let Some(method) = &self.fixed_method {
            return method;
        }
        match class {
            MethodClass::Info if self.has_alternate_info_method => self.info_method_name.as_str(),
            other => other.as_str(),
        }
    }

    /// Rendered prefix tag for `class`, if the sink wants one
    pub fn prefix_for(&self, class: MethodClass) -> Option<String> {
        self.prefix_format
            .as_ref()
            .map(|template| template.replace(METHOD_PLACEHOLDER, class.as_str()))
    }

    /// Whether payloads must be flattened to a single string
    pub fn wants_string(&self) -> bool {
        self.requires_string_argument || !self.supports_list_arguments || self.fixed_method.is_some()
    }

    /// Format `values` and shape them the way this sink takes arguments
    pub fn shape(&self, class: MethodClass, values: &[Value], config: &InspectionConfig) -> SinkArgs {
        let config = InspectionConfig {
            pretty_print: config.pretty_print || self.wants_string(),
            ..*config
        };
        let prefix = self.prefix_for(class);

        match (format(values, &config), prefix) {
            (Payload::Text(text), None) => SinkArgs::Text(text),
            (Payload::Text(text), Some(prefix)) if text.is_empty() => SinkArgs::Text(prefix),
            (Payload::Text(text), Some(prefix)) => SinkArgs::Text(format!("{} {}", prefix, text)),
            (Payload::Values(values), None) => SinkArgs::List(values),
            (Payload::Values(mut values), Some(prefix)) => {
                values.insert(0, Value::Text(prefix));
                SinkArgs::List(values)
            }
        }
    }
}
