//! Polygon path builder: turtle-graphics commands over an implicit current
//! point and heading.
//!
//! Headings are in degrees, counterclockwise, with 0 along the +x axis. The
//! heading starts unset: the first `turn_left(a)` sets it to `a`, and
//! `forward` before any turn moves along +x.
//!
//! # Example
//!
//! Draw a square with turtle commands:
//!
//! ```
//! use croquis::PolygonBuilder;
//!
//! let polygon = PolygonBuilder::new()
//!     .evaluate(|b| {
//!         b.start_at([0.0, 0.0]);
//!         b.move_to([1.0, 0.0]);
//!         b.turn_left(90.0);
//!         b.step(1.0)?;
//!         b.turn_left(90.0);
//!         b.forward(1.0)?;
//!         Ok(())
//!     })
//!     .unwrap();
//! assert_eq!(polygon.len(), 4);
//! ```

use crate::elements::{Line, Polygon};
use crate::errors::BuildError;
use crate::log::debug;
use crate::types::{Point, Vector};

/// A path element emitted by the builder. Edges are flattened into the
/// vertex list when the polygon is built.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PathElement {
    Vertex(Point),
    Edge(Line),
}

/// A single motion argument: either a distance along the current heading or
/// a heading-independent displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Forward(f64),
    By(Vector),
}

impl From<f64> for Motion {
    fn from(distance: f64) -> Self {
        Motion::Forward(distance)
    }
}

impl From<Vector> for Motion {
    fn from(v: Vector) -> Self {
        Motion::By(v)
    }
}

impl From<[f64; 2]> for Motion {
    fn from(v: [f64; 2]) -> Self {
        Motion::By(v.into())
    }
}

impl From<(f64, f64)> for Motion {
    fn from(v: (f64, f64)) -> Self {
        Motion::By(v.into())
    }
}

/// Builds a vertex list from a sequence of turtle commands and turns it into
/// a [`Polygon`].
///
/// Moving commands append exactly one vertex computed from the current point
/// plus a displacement; turning commands mutate the heading and append
/// nothing. Commands that need a current point fail with
/// [`BuildError::NoCurrentPoint`] until the path is seeded.
#[derive(Debug, Default)]
pub struct PolygonBuilder {
    elements: Vec<PathElement>,
    /// Current heading in degrees; unset until the first turn.
    direction: Option<f64>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a command block exactly once and build the polygon from the
    /// accumulated path.
    ///
    /// The block receives the builder as an explicit argument; anything else
    /// it needs it captures from its enclosing scope.
    pub fn evaluate<F>(mut self, block: F) -> Result<Polygon, BuildError>
    where
        F: FnOnce(&mut PolygonBuilder) -> Result<(), BuildError>,
    {
        block(&mut self)?;
        Ok(self.into_polygon())
    }

    /// The last emitted vertex, or the far endpoint of the last emitted edge.
    pub fn last_point(&self) -> Option<Point> {
        self.elements.last().map(|el| match el {
            PathElement::Vertex(p) => *p,
            PathElement::Edge(line) => line.end,
        })
    }

    /// The current heading in degrees, if any turn has set it.
    pub fn heading(&self) -> Option<f64> {
        self.direction
    }

    // ==================== Primitive creation ====================

    /// Append a vertex; it becomes the current point.
    pub fn vertex(&mut self, p: impl Into<Point>) -> Point {
        let p = p.into();
        self.elements.push(PathElement::Vertex(p));
        p
    }

    /// Alias for [`vertex`](Self::vertex).
    pub fn point_at(&mut self, p: impl Into<Point>) -> Point {
        self.vertex(p)
    }

    /// Append an explicit edge; its far endpoint becomes the current point.
    pub fn edge(&mut self, start: impl Into<Point>, end: impl Into<Point>) -> Line {
        let line = Line::new(start, end);
        self.elements.push(PathElement::Edge(line));
        line
    }

    // ==================== Turtle commands ====================

    /// Specify a starting point. Only required if nothing has been emitted
    /// yet.
    pub fn start_at(&mut self, p: impl Into<Point>) -> Point {
        self.vertex(p)
    }

    /// Draw a line to the given absolute point.
    pub fn move_to(&mut self, p: impl Into<Point>) -> Point {
        self.vertex(p)
    }

    /// Move the given distance along the x axis.
    pub fn move_x(&mut self, distance: f64) -> Result<Point, BuildError> {
        let last = self.require_last_point()?;
        check_finite(distance)?;
        Ok(self.vertex(last + Vector::new(distance, 0.0)))
    }

    /// Move the given distance along the y axis.
    pub fn move_y(&mut self, distance: f64) -> Result<Point, BuildError> {
        let last = self.require_last_point()?;
        check_finite(distance)?;
        Ok(self.vertex(last + Vector::new(0.0, distance)))
    }

    /// Draw a vertical line to the given y coordinate, preserving x.
    pub fn move_vertical_to(&mut self, y: f64) -> Result<Point, BuildError> {
        let last = self.require_last_point()?;
        Ok(self.vertex(Point::new(last.x, y)))
    }

    /// Draw a horizontal line to the given x coordinate, preserving y.
    pub fn move_horizontal_to(&mut self, x: f64) -> Result<Point, BuildError> {
        let last = self.require_last_point()?;
        Ok(self.vertex(Point::new(x, last.y)))
    }

    /// Turn left (counterclockwise) by the given number of degrees. The
    /// first turn sets the heading directly.
    pub fn turn_left(&mut self, degrees: f64) {
        self.direction = Some(self.direction.unwrap_or(0.0) + degrees);
    }

    /// Turn right (clockwise) by the given number of degrees.
    pub fn turn_right(&mut self, degrees: f64) {
        self.turn_left(-degrees);
    }

    /// Move the given distance along the current heading (0 if no turn has
    /// happened yet).
    pub fn forward(&mut self, distance: f64) -> Result<Point, BuildError> {
        let last = self.require_last_point()?;
        check_finite(distance)?;
        let heading = self.direction.unwrap_or(0.0);
        let radians = heading.to_radians();
        debug!(distance, heading, "forward");
        Ok(self.vertex(last + Vector::new(distance * radians.cos(), distance * radians.sin())))
    }

    /// Move by a single motion argument: a number moves along the current
    /// heading (same as [`forward`](Self::forward)), a vector moves by a
    /// relative displacement independent of the heading.
    pub fn step(&mut self, motion: impl Into<Motion>) -> Result<Point, BuildError> {
        match motion.into() {
            Motion::Forward(distance) => self.forward(distance),
            Motion::By(v) => {
                let last = self.require_last_point()?;
                if !v.is_finite() {
                    return Err(BuildError::NonFinite);
                }
                Ok(self.vertex(last + v))
            }
        }
    }

    // ==================== Internals ====================

    fn require_last_point(&self) -> Result<Point, BuildError> {
        self.last_point().ok_or(BuildError::NoCurrentPoint)
    }

    /// Flatten the accumulated path into a polygon. An edge contributes both
    /// endpoints, skipping a duplicate of the previous vertex.
    fn into_polygon(self) -> Polygon {
        let mut vertices: Vec<Point> = Vec::with_capacity(self.elements.len());
        for element in self.elements {
            match element {
                PathElement::Vertex(p) => vertices.push(p),
                PathElement::Edge(line) => {
                    if vertices.last() != Some(&line.start) {
                        vertices.push(line.start);
                    }
                    vertices.push(line.end);
                }
            }
        }
        debug!(vertices = vertices.len(), "built polygon from path");
        Polygon::new(vertices)
    }
}

fn check_finite(distance: f64) -> Result<(), BuildError> {
    if distance.is_finite() {
        Ok(())
    } else {
        Err(BuildError::NonFinite)
    }
}
