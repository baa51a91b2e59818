use std::collections::HashMap;

use crate::coords::ColorRgba;

/// Resolves symbolic color names to concrete colors.
///
/// Implemented by whatever supplies the desktop's base colors (widget
/// style, user palette, ...).
pub trait StyleContext {
    fn lookup_color(&self, name: &str) -> Option<ColorRgba>;
}

/// Fixed name-to-color table.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: HashMap<String, ColorRgba>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, color: ColorRgba) -> Self {
        self.insert(name, color);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, color: ColorRgba) {
        self.colors.insert(name.into(), color);
    }
}

impl StyleContext for Palette {
    fn lookup_color(&self, name: &str) -> Option<ColorRgba> {
        self.colors.get(name).copied()
    }
}

/// A color as written in a theme, resolved against a [`StyleContext`] at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// Literal color.
    Basic(ColorRgba),
    /// Named color from the style context, with an optional fallback.
    Symbolic {
        name: String,
        fallback: Option<Box<ColorSpec>>,
    },
    /// `fg * alpha + bg * (1 - alpha)`.
    Blend {
        fg: Box<ColorSpec>,
        bg: Box<ColorSpec>,
        alpha: f32,
    },
    /// `base` with HLS lightness and saturation scaled by `factor`.
    Shade { base: Box<ColorSpec>, factor: f32 },
}

impl ColorSpec {
    pub fn basic(color: ColorRgba) -> Self {
        ColorSpec::Basic(color)
    }

    pub fn symbolic(name: impl Into<String>) -> Self {
        ColorSpec::Symbolic { name: name.into(), fallback: None }
    }

    pub fn symbolic_or(name: impl Into<String>, fallback: ColorSpec) -> Self {
        ColorSpec::Symbolic { name: name.into(), fallback: Some(Box::new(fallback)) }
    }

    pub fn blend(fg: ColorSpec, bg: ColorSpec, alpha: f32) -> Self {
        ColorSpec::Blend { fg: Box::new(fg), bg: Box::new(bg), alpha }
    }

    pub fn shade(base: ColorSpec, factor: f32) -> Self {
        ColorSpec::Shade { base: Box::new(base), factor }
    }

    /// Resolves this descriptor to a concrete color.
    ///
    /// An unknown symbolic name without fallback resolves to opaque black.
    pub fn render(&self, ctx: &dyn StyleContext) -> ColorRgba {
        match self {
            ColorSpec::Basic(c) => *c,
            ColorSpec::Symbolic { name, fallback } => match ctx.lookup_color(name) {
                Some(c) => c,
                None => match fallback {
                    Some(f) => f.render(ctx),
                    None => {
                        log::warn!("color \"{name}\" is not defined by the style context");
                        ColorRgba::black()
                    }
                },
            },
            ColorSpec::Blend { fg, bg, alpha } => {
                let (fg, bg) = (fg.render(ctx), bg.render(ctx));
                let a = alpha.clamp(0.0, 1.0);
                let mix = |f: f32, b: f32| f * a + b * (1.0 - a);
                ColorRgba::new(mix(fg.r, bg.r), mix(fg.g, bg.g), mix(fg.b, bg.b), mix(fg.a, bg.a))
            }
            ColorSpec::Shade { base, factor } => shade(base.render(ctx), *factor),
        }
    }
}

fn shade(c: ColorRgba, factor: f32) -> ColorRgba {
    let (h, l, s) = rgb_to_hls(c.r, c.g, c.b);
    let l = (l * factor).clamp(0.0, 1.0);
    let s = (s * factor).clamp(0.0, 1.0);
    let (r, g, b) = hls_to_rgb(h, l, s);
    ColorRgba::new(r, g, b, c.a)
}

/// Hue in degrees `[0, 360)`, lightness and saturation in `[0, 1]`.
fn rgb_to_hls(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, l, 0.0);
    }

    let d = max - min;
    let s = if l <= 0.5 { d / (max + min) } else { d / (2.0 - max - min) };

    let mut h = if r == max {
        (g - b) / d
    } else if g == max {
        2.0 + (b - r) / d
    } else {
        4.0 + (r - g) / d
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    (h, l, s)
}

fn hls_to_rgb(h: f32, l: f32, s: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    (hue_channel(m1, m2, h + 120.0), hue_channel(m1, m2, h), hue_channel(m1, m2, h - 120.0))
}

fn hue_channel(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = hue.rem_euclid(360.0);
    if hue < 60.0 {
        m1 + (m2 - m1) * hue / 60.0
    } else if hue < 180.0 {
        m2
    } else if hue < 240.0 {
        m1 + (m2 - m1) * (240.0 - hue) / 60.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: ColorRgba, b: ColorRgba) -> bool {
        (a.r - b.r).abs() < 1e-4
            && (a.g - b.g).abs() < 1e-4
            && (a.b - b.b).abs() < 1e-4
            && (a.a - b.a).abs() < 1e-4
    }

    #[test]
    fn symbolic_resolves_from_palette() {
        let ctx = Palette::new().with("bg", ColorRgba::rgb(0.2, 0.4, 0.6));
        assert_eq!(ColorSpec::symbolic("bg").render(&ctx), ColorRgba::rgb(0.2, 0.4, 0.6));
    }

    #[test]
    fn symbolic_uses_fallback_when_unknown() {
        let spec = ColorSpec::symbolic_or("missing", ColorSpec::basic(ColorRgba::white()));
        assert_eq!(spec.render(&Palette::new()), ColorRgba::white());
    }

    #[test]
    fn symbolic_without_fallback_is_black() {
        assert_eq!(ColorSpec::symbolic("missing").render(&Palette::new()), ColorRgba::black());
    }

    #[test]
    fn blend_halfway() {
        let spec = ColorSpec::blend(
            ColorSpec::basic(ColorRgba::white()),
            ColorSpec::basic(ColorRgba::black()),
            0.5,
        );
        assert!(close(spec.render(&Palette::new()), ColorRgba::rgb(0.5, 0.5, 0.5)));
    }

    #[test]
    fn shade_by_one_is_identity() {
        let c = ColorRgba::rgb(0.8, 0.3, 0.1);
        let out = ColorSpec::shade(ColorSpec::basic(c), 1.0).render(&Palette::new());
        assert!(close(out, c));
    }

    #[test]
    fn shade_darkens_and_lightens_grey() {
        let grey = ColorSpec::basic(ColorRgba::rgb(0.5, 0.5, 0.5));
        let dark = ColorSpec::shade(grey.clone(), 0.5).render(&Palette::new());
        let light = ColorSpec::shade(grey, 1.5).render(&Palette::new());
        assert!(close(dark, ColorRgba::rgb(0.25, 0.25, 0.25)));
        assert!(close(light, ColorRgba::rgb(0.75, 0.75, 0.75)));
    }

    #[test]
    fn hls_round_trip_primary() {
        let (h, l, s) = rgb_to_hls(1.0, 0.0, 0.0);
        assert_eq!((h, l, s), (0.0, 0.5, 1.0));
        let (r, g, b) = hls_to_rgb(h, l, s);
        assert!((r - 1.0).abs() < 1e-6 && g.abs() < 1e-6 && b.abs() < 1e-6);
    }
}
