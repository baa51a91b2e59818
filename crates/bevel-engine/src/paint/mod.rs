//! Paint model for decoration fills.
//!
//! Scope:
//! - color descriptors and their resolution against a style context
//! - multi-stop color gradients
//! - opacity ramps applied to, or baked into, pixel buffers
//!
//! Geometry types remain in `coords`.

pub mod alpha;
pub mod color_spec;
pub mod gradient;
pub mod pixbuf;
mod ramp;

pub use alpha::{apply_alpha, needs_alpha, render_alpha, AlphaGradientSpec};
pub use color_spec::{ColorSpec, Palette, StyleContext};
pub use gradient::{GradientSpec, GradientType};
pub use pixbuf::Pixbuf;
