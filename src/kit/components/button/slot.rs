//! Slot observation for label precedence

use crate::renderer::{ButtonSurface, SlotContent};

/// Who owns the visible content of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentOwnership {
    /// The label attribute is rendered as the button text
    #[default]
    ScriptedLabel,
    /// Light-DOM content assigned to the slot takes precedence
    SlottedContent,
}

/// Watches the content slot and hands label ownership to it when filled
///
/// Only reads the slot; assigned nodes belong to the host page.
#[derive(Debug, Default)]
pub struct SlotObserver {
    ownership: ContentOwnership,
}

impl SlotObserver {
    /// Create an observer in the `ScriptedLabel` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ownership state
    pub fn ownership(&self) -> ContentOwnership {
        self.ownership
    }

    /// Whether slotted content currently takes precedence
    pub fn has_slotted_content(&self) -> bool {
        self.ownership == ContentOwnership::SlottedContent
    }

    /// Handle a slot-change notification
    ///
    /// Filling the slot blanks the button text immediately. Emptying it only
    /// flips the flag; the label returns on the next render pass.
    pub fn slot_changed<S: ButtonSurface + ?Sized>(
        &mut self,
        slot: &dyn SlotContent,
        surface: &mut S,
    ) -> ContentOwnership {
        let next = if slot.assigned_node_count() > 0 {
            surface.set_label_text("");
            ContentOwnership::SlottedContent
        } else {
            ContentOwnership::ScriptedLabel
        };

        if next != self.ownership {
            log::debug!("Slot content ownership {:?} -> {:?}", self.ownership, next);
        }
        self.ownership = next;
        next
    }
}
