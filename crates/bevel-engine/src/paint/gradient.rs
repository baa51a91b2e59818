use image::{Rgb, RgbImage};

use crate::error::{ThemeError, ThemeResult};

use super::ramp::ramp;
use super::{ColorSpec, Pixbuf, StyleContext};

/// Axis along which a gradient varies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientType {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left corner to bottom-right corner.
    Diagonal,
}

/// An ordered list of color stops spread evenly along a [`GradientType`] axis.
///
/// Stops are only ever appended. Call [`validate`](Self::validate) before
/// rendering theme-supplied gradients.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    gradient_type: GradientType,
    stops: Vec<ColorSpec>,
}

impl GradientSpec {
    pub fn new(gradient_type: GradientType) -> Self {
        Self { gradient_type, stops: Vec::new() }
    }

    pub fn add_stop(&mut self, color: ColorSpec) {
        self.stops.push(color);
    }

    /// Builder form of [`add_stop`](Self::add_stop).
    pub fn with_stop(mut self, color: ColorSpec) -> Self {
        self.add_stop(color);
        self
    }

    #[inline]
    pub fn gradient_type(&self) -> GradientType {
        self.gradient_type
    }

    #[inline]
    pub fn stops(&self) -> &[ColorSpec] {
        &self.stops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Fails with [`ThemeError::TooFewStops`] unless there are at least two stops.
    pub fn validate(&self) -> ThemeResult<()> {
        if self.stops.len() < 2 {
            return Err(ThemeError::TooFewStops { count: self.stops.len() });
        }
        Ok(())
    }

    /// Renders an RGB buffer of `width` x `height`.
    ///
    /// Every stop is resolved against `ctx` first; stop alpha is ignored.
    /// Returns `None` when there are no stops. A single stop renders a
    /// uniform buffer.
    pub fn render(&self, ctx: &dyn StyleContext, width: u32, height: u32) -> Option<Pixbuf> {
        if self.stops.is_empty() {
            log::warn!("refusing to render a gradient without color stops");
            return None;
        }

        let colors: Vec<[u8; 3]> = self
            .stops
            .iter()
            .map(|stop| {
                let [r, g, b, _] = stop.render(ctx).to_rgba8();
                [r, g, b]
            })
            .collect();

        log::trace!(
            "rendering {:?} gradient: {} stops, {width}x{height}",
            self.gradient_type,
            colors.len()
        );

        let kind = self.gradient_type;
        let ramp = ramp(&colors, kind.axis_len(width, height));
        let image = RgbImage::from_fn(width, height, |x, y| Rgb(ramp[kind.axis_index(x, y)]));

        Some(Pixbuf::from_rgb_image(image))
    }
}
