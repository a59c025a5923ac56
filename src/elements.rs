//! Geometry elements a sketch can hold, and the bounds contract they share.
//!
//! Every element knows its own axis-aligned extent via [`Bounded::minmax`];
//! the container reduces over those to compute aggregate bounds. Dispatch
//! over the closed element set goes through `enum_dispatch`.

use enum_dispatch::enum_dispatch;

use crate::sketch::Sketch;
use crate::types::{BBox, Point, Size};

/// The bounds contract: the smallest axis-aligned box enclosing the element,
/// or `None` when the element has no extent (an empty group).
#[enum_dispatch]
pub trait Bounded {
    fn minmax(&self) -> Option<BBox>;
}

/// A line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Line {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Bounded for Line {
    fn minmax(&self) -> Option<BBox> {
        Some(BBox::from_corners(self.start, self.end))
    }
}

/// A circle given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        Circle {
            center: center.into(),
            radius,
        }
    }
}

impl Bounded for Circle {
    fn minmax(&self) -> Option<BBox> {
        let r = self.radius.abs();
        Some(BBox {
            min: Point::new(self.center.x - r, self.center.y - r),
            max: Point::new(self.center.x + r, self.center.y + r),
        })
    }
}

/// An axis-aligned rectangle. Corners are normalized at construction so
/// `min() <= max()` componentwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    min: Point,
    max: Point,
}

impl Rect {
    /// Build from two opposite corners in any order.
    pub fn new(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        let bb = BBox::from_corners(from.into(), to.into());
        Rect {
            min: bb.min,
            max: bb.max,
        }
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
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
}

impl Bounded for Rect {
    fn minmax(&self) -> Option<BBox> {
        Some(BBox {
            min: self.min,
            max: self.max,
        })
    }
}

/// A polygon as an ordered vertex list. The closing edge back to the first
/// vertex is implicit.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Bounded for Polygon {
    fn minmax(&self) -> Option<BBox> {
        let (first, rest) = self.vertices.split_first()?;
        let mut bb = BBox::at_point(*first);
        for v in rest {
            bb.expand_point(*v);
        }
        Some(bb)
    }
}

impl Bounded for Point {
    fn minmax(&self) -> Option<BBox> {
        Some(BBox::at_point(*self))
    }
}

/// Any geometry a [`Sketch`] can hold. `Group` nests a whole sketch, giving
/// the nested elements a transformation of their own.
#[enum_dispatch(Bounded)]
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Rect(Rect),
    Polygon(Polygon),
    Group(Sketch),
}
