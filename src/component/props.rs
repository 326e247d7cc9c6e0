//! Declarative property schemas for custom elements
//!
//! This module provides:
//! - Typed property declarations (`PropSpec`) grouped into a `PropSchema`
//! - Attribute coercion from raw strings into semantic values
//! - Allow-list validation with fallback to the declared default
//! - Required vs optional props

use std::fmt::{self, Display};

use crate::component::AttributeSource;

/// Error indicating validation problems with props
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValidationError {
    /// A required property was missing
    MissingRequired(String),
    /// A property had an invalid value
    InvalidValue {
        /// Name of the property
        name: String,
        /// Description of the validation error
        reason: String,
    },
    /// A property had a type mismatch
    TypeMismatch {
        /// Name of the property
        name: String,
        /// Expected type
        expected: String,
        /// Actual type
        actual: String,
    },
    /// Multiple validation errors
    Multiple(Vec<PropValidationError>),
}

impl Display for PropValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValidationError::MissingRequired(name) => {
                write!(f, "Missing required property: {name}")
            }
            PropValidationError::InvalidValue { name, reason } => {
                write!(f, "Invalid value for property {name}: {reason}")
            }
            PropValidationError::TypeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "Type mismatch for property {name}: expected {expected}, got {actual}"
            ),
            PropValidationError::Multiple(errors) => {
                writeln!(f, "Multiple validation errors:")?;
                for (i, error) in errors.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for PropValidationError {}

/// Value type of a declared property
///
/// Guides coercion of the raw attribute string; it is not enforced beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropType {
    /// Taken verbatim
    String,
    /// Attribute-presence boolean
    Boolean,
    /// JSON array of strings
    Array,
}

impl PropType {
    fn as_str(self) -> &'static str {
        match self {
            PropType::String => "string",
            PropType::Boolean => "boolean",
            PropType::Array => "array",
        }
    }
}

/// Trait for props validation
pub trait PropValidator {
    /// Validate a single raw attribute value
    fn validate(&self, value: &str) -> Result<(), PropValidationError>;
}

/// Declaration of one configurable property
#[derive(Debug, Clone, Copy)]
pub struct PropSpec {
    /// Attribute name, unique within a schema
    pub name: &'static str,
    /// Value type used for coercion
    pub value_type: PropType,
    /// Value used when the attribute is absent
    pub default: Option<&'static str>,
    /// Whether absence is a configuration error
    pub required: bool,
    /// Allowed values, if the property is an enumeration
    pub allowed: Option<&'static [&'static str]>,
}

impl PropSpec {
    /// Declare an unvalidated string property
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            value_type: PropType::String,
            default: None,
            required: false,
            allowed: None,
        }
    }

    /// Declare a presence-boolean property
    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            value_type: PropType::Boolean,
            default: Some("false"),
            required: false,
            allowed: None,
        }
    }

    /// Declare a JSON string-array property
    pub const fn array(name: &'static str) -> Self {
        Self {
            name,
            value_type: PropType::Array,
            default: None,
            required: false,
            allowed: None,
        }
    }

    /// Set the default value
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Mark the property as required
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict the property to an allow-list
    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    /// Resolve a string property: verbatim when non-empty, default otherwise
    pub fn resolve_string(&self, raw: Option<&str>) -> Option<String> {
        match raw {
            Some(value) if !value.is_empty() => Some(value.to_string()),
            _ => self.default.map(str::to_string),
        }
    }

    /// Resolve an enumerated property, falling back to the default on rejection
    ///
    /// Returns the effective value and the rejection, if any.
    pub fn resolve_enum(&self, raw: Option<&str>) -> (&'static str, Option<PropValidationError>) {
        let default = self.default.unwrap_or_default();
        let Some(value) = raw else {
            return (default, None);
        };

        match self.validate(value) {
            Ok(()) => {
                let allowed = self.allowed.unwrap_or_default();
                let effective = allowed
                    .iter()
                    .copied()
                    .find(|candidate| *candidate == value)
                    .unwrap_or(default);
                (effective, None)
            }
            Err(err) => (default, Some(err)),
        }
    }

    /// Resolve an array property, falling back to an empty list on a type mismatch
    pub fn resolve_array(&self, raw: Option<&str>) -> (Vec<String>, Option<PropValidationError>) {
        match raw.map(str::trim) {
            None | Some("") => (Vec::new(), None),
            Some(value) => match coerce_string_array(value) {
                Some(items) => (items, None),
                None => (
                    Vec::new(),
                    Some(PropValidationError::TypeMismatch {
                        name: self.name.to_string(),
                        expected: self.value_type.as_str().to_string(),
                        actual: value.to_string(),
                    }),
                ),
            },
        }
    }
}

impl PropValidator for PropSpec {
    fn validate(&self, value: &str) -> Result<(), PropValidationError> {
        match self.value_type {
            PropType::Array => coerce_string_array(value).map(|_| ()).ok_or_else(|| {
                PropValidationError::TypeMismatch {
                    name: self.name.to_string(),
                    expected: self.value_type.as_str().to_string(),
                    actual: value.to_string(),
                }
            }),
            PropType::String | PropType::Boolean => match self.allowed {
                Some(allowed) if !allowed.contains(&value) => {
                    Err(PropValidationError::InvalidValue {
                        name: self.name.to_string(),
                        reason: format!(
                            "\"{value}\" is not one of {}",
                            allowed.join(", ")
                        ),
                    })
                }
                _ => Ok(()),
            },
        }
    }
}

/// Presence-boolean coercion: absent is false, the literal `"false"` is false,
/// anything else (including the empty string) is true.
pub fn coerce_presence_bool(raw: Option<&str>) -> bool {
    matches!(raw, Some(value) if value != "false")
}

/// Parse a JSON array of strings
pub fn coerce_string_array(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).ok()
}

/// Immutable, ordered set of property declarations shared by every instance
/// of an element type.
#[derive(Debug)]
pub struct PropSchema {
    specs: &'static [PropSpec],
}

impl PropSchema {
    /// Create a schema from static declarations
    pub const fn new(specs: &'static [PropSpec]) -> Self {
        Self { specs }
    }

    /// Attribute names to observe, in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.name).collect()
    }

    /// Look up a declaration by attribute name
    pub fn get(&self, name: &str) -> Option<&PropSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Iterate over declarations
    pub fn iter(&self) -> impl Iterator<Item = &PropSpec> {
        self.specs.iter()
    }

    /// Check the full attribute state against the schema
    ///
    /// Reports every violation; callers decide whether to surface or ignore them.
    pub fn validate(&self, attrs: &dyn AttributeSource) -> Result<(), PropValidationError> {
        let mut errors = Vec::new();

        for spec in self.specs {
            match attrs.get_attribute(spec.name) {
                None if spec.required => {
                    errors.push(PropValidationError::MissingRequired(spec.name.to_string()))
                }
                None => {}
                Some(_) if spec.value_type == PropType::Boolean => {}
                Some(value) => {
                    if let Err(err) = spec.validate(&value) {
                        errors.push(err);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else if errors.len() == 1 {
            Err(errors.remove(0))
        } else {
            Err(PropValidationError::Multiple(errors))
        }
    }
}
