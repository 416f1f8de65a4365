//! World-space primitives: points, extents and axis-aligned boxes.
use std::fmt;

/// Immutable point in world space, in pixels from the room's upper-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Immutable width/height pair.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Standard grid cell. Furniture, items and the player sprite are sized in tiles.
    pub const TILE: Self = Self::new(16.0, 16.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Dimensions spanning `cols` by `rows` tiles.
    pub fn tiles(cols: u32, rows: u32) -> Self {
        Self::new(
            Self::TILE.width * f64::from(cols),
            Self::TILE.height * f64::from(rows),
        )
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned box anchored at its upper-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub origin: Point2D,
    pub size: Dimensions,
}

impl Aabb {
    pub const fn new(origin: Point2D, size: Dimensions) -> Self {
        Self { origin, size }
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Grows the box by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Self {
        Self::new(
            self.origin.offset(-margin, -margin),
            Dimensions::new(
                self.size.width + 2.0 * margin,
                self.size.height + 2.0 * margin,
            ),
        )
    }

    /// True when the boxes overlap with a non-zero area.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.origin.x < other.right()
            && other.origin.x < self.right()
            && self.origin.y < other.bottom()
            && other.origin.y < self.bottom()
    }

    /// Strict containment inside `[0, bounds.width) x [0, bounds.height)`.
    ///
    /// The far edge must stay strictly below the bound, so a box ending exactly
    /// on the room border is rejected.
    pub fn fits_within(&self, bounds: Dimensions) -> bool {
        self.origin.x >= 0.0
            && self.origin.y >= 0.0
            && self.right() < bounds.width
            && self.bottom() < bounds.height
    }
}
