//! Geometry value types: points, displacement vectors, sizes, bounding boxes.
//!
//! Positions and displacements are distinct types: `Point + Vector = Point`,
//! `Point - Point = Vector`. Heavier vector math (normalization, rotation)
//! delegates to `glam`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::{DMat2, DVec2, dvec2};

/// An absolute position in the sketch plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Calculate the midpoint between two points.
    pub fn midpoint(self, other: Self) -> Self {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Check if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub(crate) fn to_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    #[inline]
    pub(crate) fn from_dvec2(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point { x: p[0], y: p[1] }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement in the sketch plane (not an absolute position).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    #[inline]
    pub fn new(dx: f64, dy: f64) -> Self {
        Vector { dx, dy }
    }

    /// The Euclidean length of the displacement.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.to_dvec2().length()
    }

    /// Normalize to unit length. Returns `None` for a zero-length vector.
    pub fn try_normalize(self) -> Option<Vector> {
        self.to_dvec2().try_normalize().map(Vector::from_dvec2)
    }

    /// Rotate counterclockwise by the given angle in degrees.
    pub fn rotated(self, degrees: f64) -> Vector {
        Vector::from_dvec2(DMat2::from_angle(degrees.to_radians()) * self.to_dvec2())
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Check if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    #[inline]
    pub(crate) fn to_dvec2(self) -> DVec2 {
        dvec2(self.dx, self.dy)
    }

    #[inline]
    pub(crate) fn from_dvec2(v: DVec2) -> Self {
        Vector { dx: v.x, dy: v.y }
    }
}

impl From<[f64; 2]> for Vector {
    fn from(v: [f64; 2]) -> Self {
        Vector { dx: v[0], dy: v[1] }
    }
}

impl From<(f64, f64)> for Vector {
    fn from((dx, dy): (f64, f64)) -> Self {
        Vector { dx, dy }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.dx / rhs, self.dy / rhs)
    }
}

/// Add a displacement to a point to get a new point.
impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

/// Subtract two points to get the displacement between them.
impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// 2D size (width and height of an axis-aligned extent).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    #[inline]
    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    /// Build a bbox from two corners in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        BBox {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// A degenerate bbox covering a single point.
    pub fn at_point(p: Point) -> Self {
        BBox { min: p, max: p }
    }

    /// Expand to include a point.
    pub fn expand_point(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// The smallest bbox covering both operands.
    pub fn union(self, other: BBox) -> BBox {
        BBox {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// The four corners in counterclockwise order starting at `min`:
    /// min, (max.x, min.y), max, (min.x, max.y).
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }
}
