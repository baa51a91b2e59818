//! Geometry and color value types shared by the paint and layout modules.
//!
//! Pixel space:
//! - Integer pixels
//! - Origin top-left
//! - +X right, +Y down

mod border;
mod color;
mod corner_radii;

pub use border::Border;
pub use color::ColorRgba;
pub(crate) use color::unit_to_u8;
pub use corner_radii::CornerRadii;
