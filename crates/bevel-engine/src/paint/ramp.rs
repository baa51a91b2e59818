//! Piecewise-linear interpolation shared by color and alpha gradients.
//!
//! A gradient over `n` stops is split into `n - 1` equal segments along its
//! axis. Axis sample `i` of `len` sits at `t = i / (len - 1)` and falls into
//! segment `floor(t * (n - 1))`, clamped so `t == 1` lands on the last stop.

use image::RgbaImage;

use super::GradientType;

impl GradientType {
    /// Number of distinct axis positions in a `width` x `height` buffer.
    pub(crate) fn axis_len(self, width: u32, height: u32) -> u32 {
        match self {
            GradientType::Horizontal => width,
            GradientType::Vertical => height,
            GradientType::Diagonal => (width + height).saturating_sub(1),
        }
    }

    /// Axis position of pixel `(x, y)`.
    #[inline]
    pub(crate) fn axis_index(self, x: u32, y: u32) -> usize {
        match self {
            GradientType::Horizontal => x as usize,
            GradientType::Vertical => y as usize,
            GradientType::Diagonal => (x + y) as usize,
        }
    }
}

/// Segment index and fraction within it for axis sample `i` of `len`, over `n >= 2` stops.
#[inline]
pub(crate) fn locate(i: u32, len: u32, n: usize) -> (usize, f32) {
    debug_assert!(n >= 2);
    let t = if len <= 1 { 0.0 } else { i as f32 / (len - 1) as f32 };
    let scaled = t * (n - 1) as f32;
    let segment = (scaled.floor() as usize).min(n - 2);
    (segment, scaled - segment as f32)
}

#[inline]
pub(crate) fn lerp_u8(a: u8, b: u8, f: f32) -> u8 {
    let (a, b) = (a as f32, b as f32);
    (a + (b - a) * f).round().clamp(0.0, 255.0) as u8
}

/// `round(a * b / 255)` in integer arithmetic.
#[inline]
pub(crate) fn mul_alpha(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}

/// Samples `stops` at `len` evenly spaced axis positions.
///
/// Zero stops yield an empty ramp; a single stop is repeated.
pub(crate) fn ramp<const C: usize>(stops: &[[u8; C]], len: u32) -> Vec<[u8; C]> {
    match stops {
        [] => Vec::new(),
        [only] => vec![*only; len as usize],
        _ => (0..len)
            .map(|i| {
                let (segment, f) = locate(i, len, stops.len());
                let (a, b) = (stops[segment], stops[segment + 1]);
                std::array::from_fn(|c| lerp_u8(a[c], b[c], f))
            })
            .collect(),
    }
}

/// Multiplies the alpha channel of `image` by an `alphas` ramp laid along `kind`'s axis.
pub(crate) fn multiply_alpha(image: &mut RgbaImage, alphas: &[u8], kind: GradientType) {
    if let [only] = alphas {
        let only = *only;
        image.pixels_mut().for_each(|p| p.0[3] = mul_alpha(p.0[3], only));
        return;
    }

    let len = kind.axis_len(image.width(), image.height());
    let stops: Vec<[u8; 1]> = alphas.iter().map(|&a| [a]).collect();
    let ramp = ramp(&stops, len);

    for (x, y, p) in image.enumerate_pixels_mut() {
        let [g] = ramp[kind.axis_index(x, y)];
        p.0[3] = mul_alpha(p.0[3], g);
    }
}
