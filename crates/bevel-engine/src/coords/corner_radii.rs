/// Per-corner rounding radii of a frame, in pixels. `0` means a square corner.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CornerRadii {
    pub top_left: u32,
    pub top_right: u32,
    pub bottom_right: u32,
    pub bottom_left: u32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: u32, top_right: u32, bottom_right: u32, bottom_left: u32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: u32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0)
    }

    /// Only the two top corners rounded, the common title-bar shape.
    #[inline]
    pub const fn top(r: u32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: 0, bottom_left: 0 }
    }

    #[inline]
    pub fn is_square(self) -> bool {
        self == Self::zero()
    }

    /// `(name, radius)` pairs in top-left, top-right, bottom-right, bottom-left order.
    pub fn named(self) -> [(&'static str, u32); 4] {
        [
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_right", self.bottom_right),
            ("bottom_left", self.bottom_left),
        ]
    }
}
