//! Custom element model for Orbit UI
//!
//! This module contains the types and traits shared by every custom element:
//! the attribute bridge contract, property schemas and the element registry.

mod error;
pub mod props;
pub mod registry;


pub use error::ComponentError;
pub use props::{PropSchema, PropSpec, PropType, PropValidationError, PropValidator};
pub use registry::{ElementDefinition, ElementRegistry};

use std::collections::BTreeMap;

use crate::renderer::SlotContent;

/// Read access to the attributes of a host element
///
/// Attributes are always strings; `None` means the attribute is absent.
pub trait AttributeSource {
    /// Current value of an attribute
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Whether the attribute is present at all
    fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }
}

/// A single observed attribute mutation, as delivered by the host runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeChange {
    /// Attribute name
    pub name: String,
    /// Value before the mutation, `None` if it was absent
    pub old_value: Option<String>,
    /// Value after the mutation, `None` if it was removed
    pub new_value: Option<String>,
}

impl AttributeChange {
    /// Create a new change record
    pub fn new(name: impl Into<String>, old_value: Option<String>, new_value: Option<String>) -> Self {
        Self {
            name: name.into(),
            old_value,
            new_value,
        }
    }
}

/// Trait implemented by every custom element type
///
/// The host runtime observes `observed_attributes()` on the host element and
/// calls `attribute_changed` once per mutation, after the new value is
/// readable through the `AttributeSource`. Callbacks never interleave.
pub trait CustomElement: 'static {
    /// Default tag name the element type registers under
    const TAG_NAME: &'static str;

    /// Logical stylesheet name linked into every instance's shadow root
    const STYLESHEET: &'static str;

    /// The property schema, identical for every instance
    fn schema() -> &'static PropSchema;

    /// Attribute names to observe, derived from the schema
    fn observed_attributes() -> Vec<&'static str> {
        Self::schema().names()
    }

    /// Called for each observed attribute mutation
    fn attribute_changed(&mut self, attrs: &dyn AttributeSource, change: &AttributeChange);

    /// Called when the content assigned to the element's slot changes
    fn slot_changed(&mut self, _slot: &dyn SlotContent) {}
}

/// In-memory attribute storage standing in for a host element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attributes: BTreeMap<String, String>,
}

impl AttributeMap {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the change record the host runtime would deliver
    pub fn set_attribute(&mut self, name: &str, value: &str) -> AttributeChange {
        let old_value = self.attributes.insert(name.to_string(), value.to_string());
        AttributeChange::new(name, old_value, Some(value.to_string()))
    }

    /// Remove an attribute, returning the change record
    pub fn remove_attribute(&mut self, name: &str) -> AttributeChange {
        let old_value = self.attributes.remove(name);
        AttributeChange::new(name, old_value, None)
    }
}

impl AttributeSource for AttributeMap {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for AttributeMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut map = Self::new();
        for (name, value) in pairs {
            map.set_attribute(name, value);
        }
        map
    }
}
