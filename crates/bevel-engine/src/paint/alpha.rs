use crate::coords::{unit_to_u8, ColorRgba};

use super::ramp::multiply_alpha;
use super::{GradientType, Pixbuf};

/// A fixed-length opacity ramp spread evenly along a [`GradientType`] axis.
///
/// The number of stops is set at construction and never changes. Indexing
/// outside `0..len()` panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaGradientSpec {
    gradient_type: GradientType,
    alphas: Box<[u8]>,
}

impl AlphaGradientSpec {
    /// Creates `n` fully transparent stops.
    ///
    /// Panics if `n == 0`.
    pub fn new(gradient_type: GradientType, n: usize) -> Self {
        assert!(n > 0, "alpha gradient needs at least one stop");
        Self { gradient_type, alphas: vec![0; n].into_boxed_slice() }
    }

    /// Opacity stops from `alphas` (each in `[0, 1]`), in order.
    ///
    /// Panics if `alphas` is empty.
    pub fn from_alphas(gradient_type: GradientType, alphas: &[f64]) -> Self {
        let mut spec = Self::new(gradient_type, alphas.len());
        for (i, &a) in alphas.iter().enumerate() {
            spec.set_alpha(i, a);
        }
        spec
    }

    #[inline]
    pub fn gradient_type(&self) -> GradientType {
        self.gradient_type
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.alphas.len()
    }

    /// Always false: construction requires at least one stop.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alphas.is_empty()
    }

    #[inline]
    pub fn alphas(&self) -> &[u8] {
        &self.alphas
    }

    /// Stores `round(alpha * 255)` at `index`. `alpha` is clamped to `[0, 1]`.
    pub fn set_alpha(&mut self, index: usize, alpha: f64) {
        self.alphas[index] = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    #[inline]
    pub fn get_alpha(&self, index: usize) -> u8 {
        self.alphas[index]
    }

    /// False only for a single fully opaque stop, which is a no-op.
    #[inline]
    pub fn needs_alpha(&self) -> bool {
        self.alphas.len() > 1 || self.alphas[0] != 0xff
    }

    /// Multiplies this ramp into `pixbuf`'s alpha channel and returns the buffer to use.
    ///
    /// - No shaping needed: `pixbuf` is returned as is.
    /// - No alpha channel: a new RGBA buffer is allocated.
    /// - `force_copy`: a new buffer is allocated.
    /// - Otherwise the buffer is modified in place, unless another handle
    ///   still shares it, in which case it is copied on write.
    pub fn apply_alpha(&self, pixbuf: Pixbuf, force_copy: bool) -> Pixbuf {
        if !self.needs_alpha() {
            return pixbuf;
        }

        let mut out = if !pixbuf.has_alpha() {
            log::debug!("adding alpha channel to {}x{} buffer", pixbuf.width(), pixbuf.height());
            pixbuf.with_alpha()
        } else if force_copy {
            log::debug!("copying {}x{} buffer before alpha shaping", pixbuf.width(), pixbuf.height());
            pixbuf.deep_copy()
        } else {
            if pixbuf.is_shared() {
                log::debug!("alpha shaping a shared buffer; it will be copied on write");
            }
            pixbuf
        };

        multiply_alpha(out.rgba_mut(), &self.alphas, self.gradient_type);
        out
    }

    /// Renders a `width` x `height` buffer of `color` shaped by this ramp.
    ///
    /// The buffer has no alpha channel when no shaping is needed. The color's
    /// own alpha is ignored.
    pub fn render(&self, width: u32, height: u32, color: ColorRgba) -> Pixbuf {
        let rgba = [unit_to_u8(color.r), unit_to_u8(color.g), unit_to_u8(color.b), 0xff];

        if !self.needs_alpha() {
            return Pixbuf::filled(width, height, false, rgba);
        }

        if let &[only] = &*self.alphas {
            let [r, g, b, _] = rgba;
            return Pixbuf::filled(width, height, true, [r, g, b, only]);
        }

        let mut pixbuf = Pixbuf::filled(width, height, true, rgba);
        multiply_alpha(pixbuf.rgba_mut(), &self.alphas, self.gradient_type);
        pixbuf
    }
}

/// [`AlphaGradientSpec::needs_alpha`] where a missing spec means no shaping.
#[inline]
pub fn needs_alpha(spec: Option<&AlphaGradientSpec>) -> bool {
    spec.is_some_and(AlphaGradientSpec::needs_alpha)
}

/// [`AlphaGradientSpec::apply_alpha`] where a missing spec returns `pixbuf` unchanged.
pub fn apply_alpha(spec: Option<&AlphaGradientSpec>, pixbuf: Pixbuf, force_copy: bool) -> Pixbuf {
    match spec {
        Some(spec) => spec.apply_alpha(pixbuf, force_copy),
        None => pixbuf,
    }
}

/// [`AlphaGradientSpec::render`] where a missing spec renders an opaque buffer.
pub fn render_alpha(
    spec: Option<&AlphaGradientSpec>,
    width: u32,
    height: u32,
    color: ColorRgba,
) -> Pixbuf {
    match spec {
        Some(spec) => spec.render(width, height, color),
        None => Pixbuf::filled(width, height, false, {
            let [r, g, b, _] = color.to_rgba8();
            [r, g, b, 0xff]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> ColorRgba {
        ColorRgba::rgb(1.0, 0.0, 0.0)
    }

    // ── construction / stops ──────────────────────────────────────────────

    #[test]
    fn new_starts_transparent() {
        let spec = AlphaGradientSpec::new(GradientType::Horizontal, 3);
        assert_eq!(spec.alphas(), &[0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn new_rejects_zero_stops() {
        let _ = AlphaGradientSpec::new(GradientType::Horizontal, 0);
    }

    #[test]
    #[should_panic]
    fn set_alpha_out_of_range_panics() {
        let mut spec = AlphaGradientSpec::new(GradientType::Horizontal, 2);
        spec.set_alpha(2, 1.0);
    }

    #[test]
    fn set_alpha_rounds() {
        let mut spec = AlphaGradientSpec::new(GradientType::Vertical, 3);
        spec.set_alpha(0, 0.5);
        spec.set_alpha(1, 1.0);
        spec.set_alpha(2, 1.7);
        assert_eq!(spec.get_alpha(0), 128);
        assert_eq!(spec.get_alpha(1), 255);
        assert_eq!(spec.get_alpha(2), 255);
    }

    // ── needs_alpha ───────────────────────────────────────────────────────

    #[test]
    fn needs_alpha_rules() {
        let opaque = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[1.0]);
        let half = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[0.5]);
        let multi = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[1.0, 1.0]);
        assert!(!opaque.needs_alpha());
        assert!(half.needs_alpha());
        assert!(multi.needs_alpha());
        assert!(!needs_alpha(None));
        assert!(needs_alpha(Some(&half)));
    }

    // ── apply_alpha ───────────────────────────────────────────────────────

    #[test]
    fn apply_alpha_noop_returns_same_buffer() {
        let opaque = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[1.0]);
        let input = Pixbuf::filled(4, 4, false, [1, 2, 3, 255]);
        let keep = input.clone();
        let out = opaque.apply_alpha(input, true);
        assert!(Pixbuf::ptr_eq(&out, &keep));
        assert!(!out.has_alpha());

        let out = apply_alpha(None, out, false);
        assert!(Pixbuf::ptr_eq(&out, &keep));
    }

    #[test]
    fn apply_alpha_adds_channel() {
        let spec = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[0.0, 1.0]);
        let input = Pixbuf::filled(3, 1, false, [10, 20, 30, 0]);
        let keep = input.clone();
        let out = spec.apply_alpha(input, false);
        assert!(out.has_alpha());
        assert!(!keep.has_alpha());
        assert_eq!(out.pixel(0, 0), [10, 20, 30, 0]);
        assert_eq!(out.pixel(1, 0), [10, 20, 30, 128]);
        assert_eq!(out.pixel(2, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn apply_alpha_force_copy_leaves_original_untouched() {
        let spec = AlphaGradientSpec::from_alphas(GradientType::Vertical, &[1.0, 0.0]);
        let input = Pixbuf::filled(2, 4, true, [50, 60, 70, 200]);
        let snapshot = input.deep_copy();
        let caller = input.clone();

        let out = spec.apply_alpha(input, true);

        assert!(!Pixbuf::ptr_eq(&out, &caller));
        assert_eq!(caller, snapshot);
        assert_eq!(out.pixel(0, 3)[3], 0);
    }

    #[test]
    fn apply_alpha_multiplies_existing_alpha() {
        let spec = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[0.5]);
        let input = Pixbuf::filled(2, 2, true, [0, 0, 0, 128]);
        let out = spec.apply_alpha(input, false);
        assert_eq!(out.pixel(1, 1), [0, 0, 0, 64]);
    }

    #[test]
    fn apply_alpha_in_place_on_shared_buffer_copies() {
        let spec = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[0.0]);
        let input = Pixbuf::filled(1, 1, true, [0, 0, 0, 255]);
        let other = input.clone();
        let out = spec.apply_alpha(input, false);
        assert_eq!(out.pixel(0, 0)[3], 0);
        assert_eq!(other.pixel(0, 0)[3], 255);
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn render_constant_alpha() {
        let spec = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[0.5]);
        let buf = spec.render(4, 4, red());
        assert!(buf.has_alpha());
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(buf.pixel(x, y), [255, 0, 0, 128]);
            }
        }
    }

    #[test]
    fn render_opaque_has_no_alpha_channel() {
        let spec = AlphaGradientSpec::from_alphas(GradientType::Horizontal, &[1.0]);
        let buf = spec.render(2, 2, red());
        assert!(!buf.has_alpha());
        assert_eq!(buf.pixel(1, 1), [255, 0, 0, 255]);
        assert_eq!(render_alpha(None, 2, 2, red()), buf);
    }

    #[test]
    fn render_ramp_matches_apply_on_opaque_fill() {
        let spec = AlphaGradientSpec::from_alphas(GradientType::Diagonal, &[1.0, 0.25, 0.0]);
        let rendered = spec.render(5, 3, red());
        let applied = spec.apply_alpha(Pixbuf::filled(5, 3, false, [255, 0, 0, 255]), false);
        assert_eq!(rendered, applied);
        assert_eq!(rendered.pixel(0, 0)[3], 255);
        assert_eq!(rendered.pixel(4, 2)[3], 0);
    }
}
