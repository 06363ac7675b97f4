//! Debug levels
//!
//! Levels are inclusive as they get more verbose: a threshold of `Debug`
//! lets debug, warning and error messages through. `None` is a sentinel
//! outside the order that suppresses everything.

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};

/// Debug level of a message, or the threshold of the console
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Suppress all output
    #[default]
    None,
    /// Most verbose; verbose messages pass whenever output is enabled
    Verbose,
    Info,
    Debug,
    Warnings,
    Errors,
}

impl Level {
    /// All levels that take part in the order, most verbose first
    pub const ORDERED: [Level; 5] = [
        Level::Verbose,
        Level::Info,
        Level::Debug,
        Level::Warnings,
        Level::Errors,
    ];

    /// Numeric constant of the level (`None` is -1)
    pub fn as_i32(self) -> i32 {
        match self {
            Level::None => -1,
            Level::Verbose => 0,
            Level::Info => 1,
            Level::Debug => 2,
            Level::Warnings => 3,
            Level::Errors => 4,
        }
    }

    /// Parse one of the six numeric level constants
    pub fn from_i64(value: i64) -> ConsoleResult<Self> {
        match value {
            -1 => Ok(Level::None),
            0 => Ok(Level::Verbose),
            1 => Ok(Level::Info),
            2 => Ok(Level::Debug),
            3 => Ok(Level::Warnings),
            4 => Ok(Level::Errors),
            other => Err(ConsoleError::InvalidLevel(other)),
        }
    }

    /// Parse a level from its name or numeric constant, case-insensitive
    pub fn parse(value: &str) -> ConsoleResult<Self> {
        let trimmed = value.trim();
        if let Ok(number) = trimmed.parse::<i64>() {
            return Self::from_i64(number);
        }
        match trimmed.to_lowercase().as_str() {
            "none" | "off" => Ok(Level::None),
            "verbose" | "log" => Ok(Level::Verbose),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "warnings" | "warning" | "warn" => Ok(Level::Warnings),
            "errors" | "error" => Ok(Level::Errors),
            _ => Err(ConsoleError::UnknownLevelName(value.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Verbose => "verbose",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Warnings => "warnings",
            Level::Errors => "errors",
        }
    }

    /// Whether the level is a real message level (not the `None` sentinel)
    pub fn is_ordered(self) -> bool {
        self != Level::None
    }
}

impl TryFrom<i64> for Level {
    type Error = ConsoleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_i64(value)
    }
}

impl std::str::FromStr for Level {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::None => write!(f, "NONE"),
            Level::Verbose => write!(f, "VERBOSE"),
            Level::Info => write!(f, "INFO"),
            Level::Debug => write!(f, "DEBUG"),
            Level::Warnings => write!(f, "WARNINGS"),
            Level::Errors => write!(f, "ERRORS"),
        }
    }
}
