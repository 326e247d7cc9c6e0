//! Error types for element registration and hosting

use std::error::Error;
use std::fmt;

/// Errors that can occur while defining or hosting an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// Tag name does not follow the custom element naming rules
    InvalidTagName(String),

    /// Tag name already has a definition in the registry
    AlreadyDefined(String),

    /// No definition registered for the tag name
    NotDefined(String),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTagName(tag) => write!(f, "Invalid custom element tag name: {}", tag),
            Self::AlreadyDefined(tag) => write!(f, "Custom element {} is already defined", tag),
            Self::NotDefined(tag) => write!(f, "Custom element {} is not defined", tag),
        }
    }
}

impl Error for ComponentError {}
