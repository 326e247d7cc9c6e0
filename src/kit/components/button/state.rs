//! Derived render state for the button element

use serde::Serialize;

use super::{attr, props};
use crate::component::props::coerce_presence_bool;
use crate::component::{AttributeSource, PropValidationError};

/// Button size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Every size, in allow-list order
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    /// Attribute value for this size
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }

    /// Parse an attribute value
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == name)
    }

    /// Modifier class, e.g. `btn--large`
    pub fn class(self) -> String {
        modifier_class(self.as_str())
    }
}

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Default,
    Primary,
    Danger,
    Neutral,
    Link,
}

impl ButtonType {
    /// Every type, in allow-list order
    pub const ALL: [ButtonType; 5] = [
        ButtonType::Default,
        ButtonType::Primary,
        ButtonType::Danger,
        ButtonType::Neutral,
        ButtonType::Link,
    ];

    /// Attribute value for this type
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Default => "default",
            ButtonType::Primary => "primary",
            ButtonType::Danger => "danger",
            ButtonType::Neutral => "neutral",
            ButtonType::Link => "link",
        }
    }

    /// Parse an attribute value
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Modifier class, e.g. `btn--primary`
    pub fn class(self) -> String {
        modifier_class(self.as_str())
    }
}

/// Base class always present on the internal button
pub const BASE_CLASS: &str = "btn";

/// Build a modifier class from an axis value
pub fn modifier_class(value: &str) -> String {
    format!("{BASE_CLASS}--{value}")
}

/// Everything the renderer needs, resolved from the full attribute state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    /// Mirrors the `id` attribute; empty when absent
    pub id: String,
    /// Presence-boolean `disabled`
    pub disabled: bool,
    /// Label text, `"Button"` unless set
    pub label: String,
    /// Supplementary text for assistive technology
    pub accessibility_text: Option<String>,
    /// Effective size
    pub size: ButtonSize,
    /// Effective type
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    /// Icon classes from `faIcon`
    pub icon: Vec<String>,
    /// Whether the content slot has assigned nodes
    pub has_slotted_content: bool,
}

impl RenderState {
    /// Re-read every relevant attribute and resolve the state
    ///
    /// Invalid or missing values never abort resolution; each one falls back
    /// to its default and is returned alongside the state.
    pub fn resolve(
        attrs: &dyn AttributeSource,
        has_slotted_content: bool,
    ) -> (Self, Vec<PropValidationError>) {
        let mut problems = Vec::new();

        let id = match attrs.get_attribute(attr::ID) {
            Some(id) => id,
            None => {
                problems.push(PropValidationError::MissingRequired(attr::ID.to_string()));
                String::new()
            }
        };

        let disabled = coerce_presence_bool(attrs.get_attribute(attr::DISABLED).as_deref());

        let label = props::LABEL
            .resolve_string(attrs.get_attribute(attr::LABEL).as_deref())
            .unwrap_or_default();

        let accessibility_text = props::ACCESSIBILITY_TEXT
            .resolve_string(attrs.get_attribute(attr::ACCESSIBILITY_TEXT).as_deref());

        let (size, err) = props::SIZE.resolve_enum(attrs.get_attribute(attr::SIZE).as_deref());
        problems.extend(err);
        let size = ButtonSize::from_name(size).unwrap_or_default();

        let (button_type, err) =
            props::TYPE.resolve_enum(attrs.get_attribute(attr::TYPE).as_deref());
        problems.extend(err);
        let button_type = ButtonType::from_name(button_type).unwrap_or_default();

        let (icon, err) =
            props::FA_ICON.resolve_array(attrs.get_attribute(attr::FA_ICON).as_deref());
        problems.extend(err);

        let state = Self {
            id,
            disabled,
            label,
            accessibility_text,
            size,
            button_type,
            icon,
            has_slotted_content,
        };
        (state, problems)
    }

    /// The full class set `{btn, btn--<size>, btn--<type>}`
    pub fn classes(&self) -> [String; 3] {
        [
            BASE_CLASS.to_string(),
            self.size.class(),
            self.button_type.class(),
        ]
    }

    /// Modifier class for one axis, if the attribute names a modifier axis
    pub fn modifier_for(&self, name: &str) -> Option<String> {
        match name {
            attr::SIZE => Some(self.size.class()),
            attr::TYPE => Some(self.button_type.class()),
            _ => None,
        }
    }
}
