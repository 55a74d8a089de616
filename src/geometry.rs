use crate::axis::Axis;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Integer axis-aligned rectangle in screen coordinates (y grows downwards)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size whose center is `center`.
    ///
    /// The top-left corner sits at `center - size / 2` (integer division), so
    /// odd sizes lean one pixel towards the bottom-right. Edges saturate at
    /// the `i32` range.
    #[inline]
    pub const fn from_center(center: Point, w: i32, h: i32) -> Self {
        Self::new(center.x.saturating_sub(w / 2), center.y.saturating_sub(h / 2), w, h)
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    #[inline]
    pub const fn center(&self) -> Point {
        Point::new(self.x.saturating_add(self.w / 2), self.y.saturating_add(self.h / 2))
    }

    /// Low and high edge along an axis
    #[inline]
    pub const fn span(&self, axis: Axis) -> (i32, i32) {
        match axis {
            Axis::X => (self.left(), self.right()),
            Axis::Y => (self.top(), self.bottom()),
        }
    }

    /// True when the interiors overlap. Rectangles that only share an edge
    /// do not collide.
    #[inline]
    pub const fn collides(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.y < other.bottom()
            && self.right() > other.x
            && self.bottom() > other.y
    }

    /// True when `other` lies entirely inside `self` (edges may touch)
    #[inline]
    pub const fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
            && self.right() > other.x
            && self.bottom() > other.y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<rect({}, {}, {}, {})>", self.x, self.y, self.w, self.h)
    }
}

/// Integer screen point, e.g. a click position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Nearest point to a sub-pixel position (halves round away from zero)
    #[inline]
    pub fn rounded(pos: [f64; 2]) -> Self {
        Self::new(pos[0].round() as i32, pos[1].round() as i32)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [f64::from(p.x), f64::from(p.y)]
    }
}

impl FromStr for Point {
    type Err = ConfigError;

    /// Parse `X,Y`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidPoint(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Point::new(x, y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
