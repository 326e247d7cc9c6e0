//! Explicit custom element registry
//!
//! Element types are registered once at application start through
//! [`crate::init`] rather than as a side effect of loading a module.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::component::{ComponentError, CustomElement};
use crate::config::InitOptions;

/// Names HTML reserves even though they contain a hyphen
const RESERVED_TAG_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

fn tag_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9._]*-[a-z0-9._-]*$").expect("tag name pattern is valid")
    })
}

/// Check a tag name against the custom element naming rules
pub fn is_valid_tag_name(tag: &str) -> bool {
    tag_name_pattern().is_match(tag) && !RESERVED_TAG_NAMES.contains(&tag)
}

/// Everything the host runtime needs to wire up an element type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDefinition {
    /// Tag name the type is registered under
    pub tag_name: String,
    /// Attributes the host runtime must observe
    pub observed_attributes: Vec<&'static str>,
    /// Logical stylesheet name
    pub stylesheet: &'static str,
    /// Resolved stylesheet href
    pub stylesheet_href: String,
}

impl ElementDefinition {
    /// Attribute filter for a mutation observer
    ///
    /// HTML documents store attribute names lower-cased and observers match
    /// the filter exactly, so the schema names are folded here.
    pub fn attribute_filter(&self) -> Vec<String> {
        self.observed_attributes
            .iter()
            .map(|name| name.to_ascii_lowercase())
            .collect()
    }

    /// Map an attribute name reported by the document back to its schema name
    pub fn observed_name(&self, name: &str) -> Option<&'static str> {
        self.observed_attributes
            .iter()
            .copied()
            .find(|observed| observed.eq_ignore_ascii_case(name))
    }
}

/// Registry of defined custom element types, keyed by tag name
#[derive(Debug, Default)]
pub struct ElementRegistry {
    definitions: HashMap<String, ElementDefinition>,
    options: InitOptions,
}

impl ElementRegistry {
    /// Create an empty registry with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry
    pub fn with_options(options: InitOptions) -> Self {
        Self {
            definitions: HashMap::new(),
            options,
        }
    }

    /// Options the registry was created with
    pub fn options(&self) -> &InitOptions {
        &self.options
    }

    /// Define an element type under a tag name
    pub fn define<E: CustomElement>(
        &mut self,
        tag_name: &str,
    ) -> Result<&ElementDefinition, ComponentError> {
        if !is_valid_tag_name(tag_name) {
            return Err(ComponentError::InvalidTagName(tag_name.to_string()));
        }
        if self.definitions.contains_key(tag_name) {
            return Err(ComponentError::AlreadyDefined(tag_name.to_string()));
        }

        let definition = ElementDefinition {
            tag_name: tag_name.to_string(),
            observed_attributes: E::observed_attributes(),
            stylesheet: E::STYLESHEET,
            stylesheet_href: self.options.stylesheet_href(E::STYLESHEET),
        };
        log::debug!(
            "Defined <{}> observing {:?}",
            tag_name,
            definition.observed_attributes
        );

        Ok(&*self
            .definitions
            .entry(tag_name.to_string())
            .or_insert(definition))
    }

    /// Look up the definition for a tag name
    pub fn get(&self, tag_name: &str) -> Result<&ElementDefinition, ComponentError> {
        self.definitions
            .get(tag_name)
            .ok_or_else(|| ComponentError::NotDefined(tag_name.to_string()))
    }

    /// Whether a tag name has a definition
    pub fn is_defined(&self, tag_name: &str) -> bool {
        self.definitions.contains_key(tag_name)
    }

    /// Number of defined element types
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
