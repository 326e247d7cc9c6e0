//! Applies a resolved [`RenderState`] to the button's surface

use super::RenderState;
use crate::renderer::ButtonSurface;

/// Tracks the lazily created child nodes of one button instance
///
/// Child nodes follow a monotonic lifecycle: absent, then created once, then
/// updated in place. They are never removed.
#[derive(Debug, Default)]
pub struct Renderer {
    accessibility_node: bool,
    icon_node: bool,
}

impl Renderer {
    /// Create a renderer for a fresh surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the accessibility node exists
    pub fn has_accessibility_node(&self) -> bool {
        self.accessibility_node
    }

    /// Whether the icon node exists
    pub fn has_icon_node(&self) -> bool {
        self.icon_node
    }

    /// Run one render pass for a change of attribute `changed`
    ///
    /// `previous` is the state the surface currently reflects, if any; modifier
    /// classes are diffed against its effective values.
    pub fn apply<S: ButtonSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        state: &RenderState,
        previous: Option<&RenderState>,
        changed: &str,
    ) {
        log::trace!("Render pass for {changed}: {state:?}");

        surface.set_id(&state.id);
        surface.set_disabled(state.disabled);

        self.apply_classes(surface, state, previous, changed);

        if !state.has_slotted_content {
            surface.set_label_text(&state.label);
        }

        if let Some(text) = &state.accessibility_text {
            if self.accessibility_node {
                surface.set_accessibility_text(text);
            } else {
                surface.create_accessibility_node(text);
                self.accessibility_node = true;
            }
        }

        if self.icon_node {
            surface.set_icon_classes(&state.icon);
        } else if !state.icon.is_empty() {
            surface.create_icon_node(&state.icon);
            self.icon_node = true;
        }
    }

    fn apply_classes<S: ButtonSurface + ?Sized>(
        &self,
        surface: &mut S,
        state: &RenderState,
        previous: Option<&RenderState>,
        changed: &str,
    ) {
        let diff = previous.and_then(|previous| {
            let old = previous.modifier_for(changed)?;
            let new = state.modifier_for(changed)?;
            Some((old, new))
        });

        match diff {
            Some((old, new)) => {
                if old != new {
                    surface.remove_class(&old);
                }
                surface.add_class(&new);
            }
            None => {
                for class in state.classes() {
                    surface.add_class(&class);
                }
            }
        }
    }
}
