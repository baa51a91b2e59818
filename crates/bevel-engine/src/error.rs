//! Content validation errors.
//!
//! These describe problems in theme-authored data. The theme loader decides
//! what to do with them (usually rejecting the whole theme). Misuse of the
//! API itself, such as an out-of-range alpha index, panics instead.

use thiserror::Error;

/// A theme value that cannot be rendered or laid out.
///
/// The variant is the condition kind; `Display` is the message shown to the
/// theme author.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// A color gradient with fewer than two stops.
    #[error("gradients should have at least two colors (found {count})")]
    TooFewStops {
        /// Number of stops the gradient actually has.
        count: usize,
    },

    /// A frame geometry dimension below zero.
    #[error("frame geometry has negative \"{field}\" dimension ({value})")]
    NegativeDimension {
        /// Field path, e.g. `left_width` or `title_border.top`.
        field: String,
        value: i32,
    },

    /// Aspect-sized buttons with a ratio outside the accepted range.
    #[error("button aspect ratio {aspect} is unreasonable")]
    UnreasonableAspect { aspect: f64 },

    /// Fixed-size buttons without a positive size.
    #[error("fixed button size {width}x{height} must be positive in both dimensions")]
    InvalidButtonSize { width: i32, height: i32 },

    /// Title text scale that is zero, negative or not finite.
    #[error("title scale {scale} must be a positive number")]
    InvalidTitleScale { scale: f64 },

    /// A corner radius above the configured limit.
    #[error("{corner} corner radius {radius} exceeds the limit of {limit}")]
    CornerRadiusTooLarge {
        corner: &'static str,
        radius: u32,
        limit: u32,
    },
}

pub type ThemeResult<T> = Result<T, ThemeError>;
