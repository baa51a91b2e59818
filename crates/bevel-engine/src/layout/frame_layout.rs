use std::sync::Arc;

use crate::coords::{Border, CornerRadii};
use crate::error::{ThemeError, ThemeResult};

/// Accepted range for aspect-sized buttons (height / width).
pub const BUTTON_ASPECT_RANGE: std::ops::RangeInclusive<f64> = 0.1..=15.0;

/// How title-bar buttons are sized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ButtonSizing {
    /// Height follows the title bar; width is `height / ratio`.
    Aspect(f64),
    /// Fixed size in pixels.
    Fixed { width: i32, height: i32 },
}

impl Default for ButtonSizing {
    fn default() -> Self {
        ButtonSizing::Aspect(1.0)
    }
}

/// Theme-defined bounds applied on top of the structural checks.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LayoutLimits {
    /// Largest accepted corner radius, or `None` for no limit.
    pub max_corner_radius: Option<u32>,
}

/// Geometry of one frame style: border widths, title-bar insets, button
/// sizing and corner rounding.
///
/// Built with defaults, overridden field by field by the theme, then
/// validated once. After that it is shared read-only as a
/// [`SharedFrameLayout`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub left_width: i32,
    pub right_width: i32,
    pub top_height: i32,
    pub bottom_height: i32,

    /// Area around the visible frame that still accepts input.
    pub invisible_border: Border,
    /// Padding around the title region.
    pub title_border: Border,
    /// Extra height inside the title region, above the font height.
    pub title_vertical_pad: i32,

    /// Indent of the buttons from the left/right edge of the frame.
    pub left_titlebar_edge: i32,
    pub right_titlebar_edge: i32,

    pub button_sizing: ButtonSizing,
    /// Space around each button.
    pub button_border: Border,
    /// Size of button images.
    pub icon_size: u32,
    /// Space between title-bar elements.
    pub titlebar_spacing: u32,

    pub title_scale: f64,
    pub has_title: bool,
    pub hide_buttons: bool,

    pub corner_radii: CornerRadii,
}

/// Reference-counted, read-only frame layout.
pub type SharedFrameLayout = Arc<FrameLayout>;

impl Default for FrameLayout {
    fn default() -> Self {
        Self {
            left_width: 0,
            right_width: 0,
            top_height: 0,
            bottom_height: 0,
            invisible_border: Border::zero(),
            title_border: Border::zero(),
            title_vertical_pad: 0,
            left_titlebar_edge: 0,
            right_titlebar_edge: 0,
            button_sizing: ButtonSizing::default(),
            button_border: Border::zero(),
            icon_size: 16,
            titlebar_spacing: 0,
            title_scale: 1.0,
            has_title: true,
            hide_buttons: false,
            corner_radii: CornerRadii::zero(),
        }
    }
}

impl FrameLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freezes the layout behind a shared handle.
    pub fn into_shared(self) -> SharedFrameLayout {
        Arc::new(self)
    }

    /// `(width, height)` when buttons have a fixed size.
    pub fn button_size(&self) -> Option<(i32, i32)> {
        match self.button_sizing {
            ButtonSizing::Fixed { width, height } => Some((width, height)),
            ButtonSizing::Aspect(_) => None,
        }
    }

    /// Validates with no theme-specific limits.
    pub fn validate(&self) -> ThemeResult<()> {
        self.validate_with(&LayoutLimits::default())
    }

    /// Reports the first invalid field. Never modifies the layout.
    pub fn validate_with(&self, limits: &LayoutLimits) -> ThemeResult<()> {
        check_dimension("left_width", self.left_width)?;
        check_dimension("right_width", self.right_width)?;
        check_dimension("top_height", self.top_height)?;
        check_dimension("bottom_height", self.bottom_height)?;

        check_border("invisible_border", self.invisible_border)?;
        check_border("title_border", self.title_border)?;
        check_border("button_border", self.button_border)?;

        check_dimension("title_vertical_pad", self.title_vertical_pad)?;
        check_dimension("left_titlebar_edge", self.left_titlebar_edge)?;
        check_dimension("right_titlebar_edge", self.right_titlebar_edge)?;

        match self.button_sizing {
            ButtonSizing::Aspect(aspect) => {
                if !BUTTON_ASPECT_RANGE.contains(&aspect) {
                    return Err(ThemeError::UnreasonableAspect { aspect });
                }
            }
            ButtonSizing::Fixed { width, height } => {
                if width <= 0 || height <= 0 {
                    return Err(ThemeError::InvalidButtonSize { width, height });
                }
            }
        }

        if !(self.title_scale.is_finite() && self.title_scale > 0.0) {
            return Err(ThemeError::InvalidTitleScale { scale: self.title_scale });
        }

        if let Some(limit) = limits.max_corner_radius {
            for (corner, radius) in self.corner_radii.named() {
                if radius > limit {
                    return Err(ThemeError::CornerRadiusTooLarge { corner, radius, limit });
                }
            }
        }

        Ok(())
    }
}

fn check_dimension(field: &str, value: i32) -> ThemeResult<()> {
    if value < 0 {
        return Err(ThemeError::NegativeDimension { field: field.to_owned(), value });
    }
    Ok(())
}

fn check_border(field: &str, border: Border) -> ThemeResult<()> {
    for (side, value) in border.sides() {
        if value < 0 {
            return Err(ThemeError::NegativeDimension { field: format!("{field}.{side}"), value });
        }
    }
    Ok(())
}
