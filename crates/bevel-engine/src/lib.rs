//! Bevel engine crate.
//!
//! Rendering core for window decoration themes: color gradients, opacity
//! ramps and frame geometry. Loading theme files and putting the buffers on
//! screen belong to the layers above.

pub mod coords;
pub mod error;
pub mod layout;
pub mod logging;
pub mod paint;

pub use error::{ThemeError, ThemeResult};
