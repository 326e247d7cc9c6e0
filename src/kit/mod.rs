// OrbitKit custom element library

pub mod components;

/// Re-export of common elements for convenience
pub mod prelude {
    pub use crate::kit::components::button::{
        ButtonSize, ButtonType, ContentOwnership, RenderState, WebButton,
    };
}
