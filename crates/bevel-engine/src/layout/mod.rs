//! Frame geometry: validated numbers only.
//!
//! Turning these into pixel rectangles for the title, buttons and borders is
//! the job of the draw pass that consumes them.

mod frame_layout;

pub use frame_layout::{
    ButtonSizing, FrameLayout, LayoutLimits, SharedFrameLayout, BUTTON_ASPECT_RANGE,
};
