use std::sync::Arc;

use image::{Rgb, RgbImage, Rgba, RgbaImage};

#[derive(Debug, Clone, PartialEq)]
enum Pixels {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

/// Shared handle to an 8-bit RGB or RGBA pixel buffer.
///
/// Cloning the handle shares the pixels; dropping the last handle frees them.
/// Writes are copy-on-write: a buffer still referenced elsewhere is copied
/// before it is modified, so other holders never observe the change.
///
/// Equality compares pixel content, not identity. Use [`Pixbuf::ptr_eq`] for
/// identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixbuf {
    pixels: Arc<Pixels>,
}

impl Pixbuf {
    /// Allocates a zero-filled buffer.
    pub fn new(width: u32, height: u32, has_alpha: bool) -> Self {
        let pixels = if has_alpha {
            Pixels::Rgba(RgbaImage::new(width, height))
        } else {
            Pixels::Rgb(RgbImage::new(width, height))
        };
        Self { pixels: Arc::new(pixels) }
    }

    /// Allocates a buffer with every pixel set to `rgba`.
    ///
    /// The alpha byte is dropped when `has_alpha` is false.
    pub fn filled(width: u32, height: u32, has_alpha: bool, rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        let pixels = if has_alpha {
            Pixels::Rgba(RgbaImage::from_pixel(width, height, Rgba([r, g, b, a])))
        } else {
            Pixels::Rgb(RgbImage::from_pixel(width, height, Rgb([r, g, b])))
        };
        Self { pixels: Arc::new(pixels) }
    }

    pub fn from_rgb_image(image: RgbImage) -> Self {
        Self { pixels: Arc::new(Pixels::Rgb(image)) }
    }

    pub fn from_rgba_image(image: RgbaImage) -> Self {
        Self { pixels: Arc::new(Pixels::Rgba(image)) }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        match &*self.pixels {
            Pixels::Rgb(img) => img.width(),
            Pixels::Rgba(img) => img.width(),
        }
    }

    #[inline]
    pub fn height(&self) -> u32 {
        match &*self.pixels {
            Pixels::Rgb(img) => img.height(),
            Pixels::Rgba(img) => img.height(),
        }
    }

    #[inline]
    pub fn has_alpha(&self) -> bool {
        matches!(&*self.pixels, Pixels::Rgba(_))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Pixel at `(x, y)` as RGBA. Buffers without alpha report 255.
    ///
    /// Panics when the coordinate is outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        match &*self.pixels {
            Pixels::Rgb(img) => {
                let Rgb([r, g, b]) = *img.get_pixel(x, y);
                [r, g, b, 0xff]
            }
            Pixels::Rgba(img) => img.get_pixel(x, y).0,
        }
    }

    /// Sets every pixel to `rgba`, keeping the buffer's channel layout.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        let [r, g, b, a] = rgba;
        match Arc::make_mut(&mut self.pixels) {
            Pixels::Rgb(img) => img.pixels_mut().for_each(|p| *p = Rgb([r, g, b])),
            Pixels::Rgba(img) => img.pixels_mut().for_each(|p| *p = Rgba([r, g, b, a])),
        }
    }

    /// A new buffer with the same pixels that shares nothing with `self`.
    pub fn deep_copy(&self) -> Self {
        Self { pixels: Arc::new((*self.pixels).clone()) }
    }

    /// A new RGBA buffer with the same colors. Pixels without alpha become opaque.
    pub fn with_alpha(&self) -> Self {
        match &*self.pixels {
            Pixels::Rgb(img) => Self::from_rgba_image(add_alpha(img)),
            Pixels::Rgba(_) => self.deep_copy(),
        }
    }

    /// True when both handles refer to the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.pixels, &b.pixels)
    }

    /// True when another handle references the same pixels.
    #[inline]
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.pixels) > 1
    }

    /// Copies the pixels out as an RGBA image, e.g. for encoding.
    pub fn to_rgba_image(&self) -> RgbaImage {
        match &*self.pixels {
            Pixels::Rgb(img) => add_alpha(img),
            Pixels::Rgba(img) => img.clone(),
        }
    }

    /// Mutable RGBA view, adding an opaque alpha channel first if missing.
    pub(crate) fn rgba_mut(&mut self) -> &mut RgbaImage {
        let pixels = Arc::make_mut(&mut self.pixels);
        if let Pixels::Rgb(rgb) = &*pixels {
            let converted = Pixels::Rgba(add_alpha(rgb));
            *pixels = converted;
        }
        match pixels {
            Pixels::Rgba(img) => img,
            Pixels::Rgb(_) => unreachable!("rgb buffer was converted above"),
        }
    }
}

fn add_alpha(rgb: &RgbImage) -> RgbaImage {
    RgbaImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        Rgba([r, g, b, 0xff])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let buf = Pixbuf::new(3, 2, true);
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.pixel(2, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn rgb_pixels_report_opaque() {
        let buf = Pixbuf::filled(1, 1, false, [10, 20, 30, 40]);
        assert!(!buf.has_alpha());
        assert_eq!(buf.pixel(0, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn fill_on_shared_handle_copies() {
        let original = Pixbuf::filled(2, 2, true, [1, 2, 3, 4]);
        let mut other = original.clone();
        other.fill([9, 9, 9, 9]);
        assert_eq!(original.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(other.pixel(1, 1), [9, 9, 9, 9]);
        assert!(!Pixbuf::ptr_eq(&original, &other));
    }

    #[test]
    fn deep_copy_is_a_new_allocation() {
        let a = Pixbuf::new(1, 1, false);
        let b = a.deep_copy();
        assert_eq!(a, b);
        assert!(!Pixbuf::ptr_eq(&a, &b));
    }

    #[test]
    fn with_alpha_keeps_colors() {
        let rgb = Pixbuf::filled(2, 1, false, [5, 6, 7, 0]);
        let rgba = rgb.with_alpha();
        assert!(rgba.has_alpha());
        assert_eq!(rgba.pixel(1, 0), [5, 6, 7, 255]);
    }

    #[test]
    fn empty_buffer_is_allowed() {
        let buf = Pixbuf::new(0, 4, true);
        assert!(buf.is_empty());
        assert_eq!(buf.to_rgba_image().len(), 0);
    }
}
