// Button custom element for OrbitKit

mod render;
mod slot;
mod state;

#[cfg(test)]
mod tests;

pub use render::Renderer;
pub use slot::{ContentOwnership, SlotObserver};
pub use state::{modifier_class, ButtonSize, ButtonType, RenderState, BASE_CLASS};

use crate::component::{
    AttributeChange, AttributeSource, CustomElement, PropSchema, PropValidationError,
};
use crate::renderer::{ButtonSurface, SlotContent};

/// Default tag name of the button element
pub const TAG_NAME: &str = "web-button";

/// Accepted values of the `size` attribute
pub const ACCEPTABLE_SIZES: &[&str] = &["small", "medium", "large"];

/// Accepted values of the `type` attribute
pub const ACCEPTABLE_TYPES: &[&str] = &["default", "primary", "danger", "neutral", "link"];

/// Observed attribute names
pub mod attr {
    pub const ACCESSIBILITY_TEXT: &str = "accessibilityText";
    pub const DISABLED: &str = "disabled";
    pub const FA_ICON: &str = "faIcon";
    pub const ID: &str = "id";
    pub const LABEL: &str = "label";
    pub const SIZE: &str = "size";
    pub const TYPE: &str = "type";
}

/// Property declarations of the button
pub mod props {
    use super::{attr, ACCEPTABLE_SIZES, ACCEPTABLE_TYPES};
    use crate::component::PropSpec;

    pub const ACCESSIBILITY_TEXT: PropSpec = PropSpec::string(attr::ACCESSIBILITY_TEXT);
    pub const DISABLED: PropSpec = PropSpec::boolean(attr::DISABLED);
    pub const FA_ICON: PropSpec = PropSpec::array(attr::FA_ICON);
    pub const ID: PropSpec = PropSpec::string(attr::ID).required();
    pub const LABEL: PropSpec = PropSpec::string(attr::LABEL).with_default("Button");
    pub const SIZE: PropSpec = PropSpec::string(attr::SIZE)
        .with_default("medium")
        .one_of(ACCEPTABLE_SIZES);
    pub const TYPE: PropSpec = PropSpec::string(attr::TYPE)
        .with_default("default")
        .one_of(ACCEPTABLE_TYPES);
}

/// Schema shared by every button instance
pub static BUTTON_SCHEMA: PropSchema = PropSchema::new(&[
    props::ACCESSIBILITY_TEXT,
    props::DISABLED,
    props::FA_ICON,
    props::ID,
    props::LABEL,
    props::SIZE,
    props::TYPE,
]);

/// Button custom element
///
/// Owns the internal button surface and keeps it in sync with the host
/// element's attributes and the content slot.
///
/// # Examples
///
/// ```html
/// <web-button id="save" label="Save" size="large" type="primary"></web-button>
///
/// <web-button id="close" accessibilityText="Close dialog" faIcon='["fa-solid","fa-xmark"]'>
///   <strong>Close</strong>
/// </web-button>
/// ```
#[derive(Debug)]
pub struct WebButton<S> {
    surface: S,
    renderer: Renderer,
    slot: SlotObserver,
    state: Option<RenderState>,
    warn_on_missing_id: bool,
}

impl<S: ButtonSurface> WebButton<S> {
    /// Construct an instance around its internal button surface
    pub fn new(surface: S) -> Self {
        log::debug!("Constructed <{}>", TAG_NAME);
        Self {
            surface,
            renderer: Renderer::new(),
            slot: SlotObserver::new(),
            state: None,
            warn_on_missing_id: true,
        }
    }

    /// Whether a missing `id` is logged as a warning
    pub fn warn_on_missing_id(mut self, warn: bool) -> Self {
        self.warn_on_missing_id = warn;
        self
    }

    /// The internal button surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The internal button surface, mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The state of the last render pass
    pub fn state(&self) -> Option<&RenderState> {
        self.state.as_ref()
    }

    /// Current content ownership
    pub fn ownership(&self) -> ContentOwnership {
        self.slot.ownership()
    }

    /// Whether the accessibility node has been created
    pub fn has_accessibility_node(&self) -> bool {
        self.renderer.has_accessibility_node()
    }

    /// Check the host attributes against the schema without rendering
    pub fn diagnostics(attrs: &dyn AttributeSource) -> Result<(), PropValidationError> {
        BUTTON_SCHEMA.validate(attrs)
    }

    /// Render once when attached to a host that delivered no attribute changes
    ///
    /// A host without any observed attribute still gets the default label and
    /// class set. Does nothing once a render pass has run.
    pub fn connected(&mut self, attrs: &dyn AttributeSource) {
        if self.state.is_none() {
            let change = AttributeChange::new(attr::ID, None, attrs.get_attribute(attr::ID));
            self.update(attrs, &change);
        }
    }

    /// Recompute the render state from all attributes and apply it
    pub fn update(&mut self, attrs: &dyn AttributeSource, change: &AttributeChange) {
        let (state, problems) = RenderState::resolve(attrs, self.slot.has_slotted_content());

        for problem in &problems {
            match problem {
                PropValidationError::MissingRequired(_) if !self.warn_on_missing_id => {}
                _ => log::warn!("<{}>: {problem}", TAG_NAME),
            }
        }

        self.renderer
            .apply(&mut self.surface, &state, self.state.as_ref(), &change.name);
        self.state = Some(state);
    }
}

impl<S: ButtonSurface + 'static> CustomElement for WebButton<S> {
    const TAG_NAME: &'static str = TAG_NAME;
    const STYLESHEET: &'static str = "button";

    fn schema() -> &'static PropSchema {
        &BUTTON_SCHEMA
    }

    fn attribute_changed(&mut self, attrs: &dyn AttributeSource, change: &AttributeChange) {
        self.update(attrs, change);
    }

    fn slot_changed(&mut self, slot: &dyn SlotContent) {
        let ownership = self.slot.slot_changed(slot, &mut self.surface);
        if let Some(state) = &mut self.state {
            state.has_slotted_content = ownership == ContentOwnership::SlottedContent;
        }
    }
}
