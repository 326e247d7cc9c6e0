// Core module of the Orbit button element
pub mod component;
pub mod config;
pub mod kit;
pub mod platform;
pub mod renderer;

use component::{ComponentError, ElementRegistry};
use config::InitOptions;
use kit::components::button::WebButton;
use renderer::VirtualButton;

/// Version of the Orbit button element
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for convenience
pub mod prelude {
    pub use crate::component::{
        AttributeChange, AttributeMap, AttributeSource, ComponentError, CustomElement,
        ElementDefinition, ElementRegistry, PropSchema, PropSpec, PropValidationError,
    };
    pub use crate::config::InitOptions;
    pub use crate::kit::prelude::*;
    pub use crate::renderer::{ButtonSurface, SlotContent, VirtualButton, VirtualSlot};
}

/// Register the element types with default options
pub fn init() -> Result<ElementRegistry, Error> {
    init_with(InitOptions::default())
}

/// Register the element types
///
/// Call once at application start; the returned registry is handed to the
/// host runtime.
pub fn init_with(options: InitOptions) -> Result<ElementRegistry, Error> {
    let tag_name = options.tag_name.clone();
    let mut registry = ElementRegistry::with_options(options);
    registry.define::<WebButton<VirtualButton>>(&tag_name)?;
    log::debug!("Orbit button {} initialized", VERSION);
    Ok(registry)
}

/// Errors that can occur in the Orbit button element
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Initialization error: {0}")]
    Init(String),

    #[error("Registry error: {0}")]
    Registry(#[from] ComponentError),

    #[error("Platform error: {0}")]
    Platform(String),
}
