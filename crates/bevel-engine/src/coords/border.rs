/// Insets on all four sides of a region, in pixels.
///
/// Sides are signed so that theme-authored values can be carried as read and
/// rejected during layout validation instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Border {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Border {
    #[inline]
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }

    #[inline]
    pub const fn all(v: i32) -> Self {
        Self { left: v, right: v, top: v, bottom: v }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0)
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> i32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> i32 {
        self.top + self.bottom
    }

    /// `(side, value)` pairs in left, right, top, bottom order.
    pub fn sides(self) -> [(&'static str, i32); 4] {
        [("left", self.left), ("right", self.right), ("top", self.top), ("bottom", self.bottom)]
    }
}
