// OrbitKit element module organization

// Input elements
pub mod button;

// Re-export commonly used elements
pub use button::WebButton;
