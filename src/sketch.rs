//! The sketch container: an ordered, append-only collection of geometry
//! elements plus an aggregate transformation.
//!
//! The transformation applies to derived queries (bounds, size), never to the
//! stored elements. Per-element transforms are expressed by nesting: `push_with`
//! wraps the element in a single-element group carrying its own transformation.

use crate::builder::PolygonBuilder;
use crate::elements::{Bounded, Element, Polygon, Rect};
use crate::errors::{BuildError, OptionsError};
use crate::log::debug;
use crate::transform::{PlacementOptions, Transformation};
use crate::types::{BBox, Point, Size};

/// An ordered collection of geometry elements with an aggregate
/// transformation. Elements keep insertion order; removal is not supported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sketch {
    elements: Vec<Element>,
    transformation: Transformation,
}

impl Sketch {
    /// An empty sketch with the identity transformation.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty sketch with the given transformation.
    pub fn with_transformation(transformation: Transformation) -> Self {
        Sketch {
            elements: Vec::new(),
            transformation,
        }
    }

    /// An empty sketch whose transformation is built from placement options.
    pub fn with_options(options: &PlacementOptions) -> Result<Self, OptionsError> {
        Ok(Self::with_transformation(Transformation::from_options(
            options,
        )?))
    }

    /// Declarative construction: create an empty sketch and hand it to the
    /// block to populate.
    pub fn build<F>(block: F) -> Sketch
    where
        F: FnOnce(&mut Sketch),
    {
        let mut sketch = Sketch::new();
        block(&mut sketch);
        sketch
    }

    /// Declarative construction with placement options.
    pub fn build_with<F>(options: &PlacementOptions, block: F) -> Result<Sketch, OptionsError>
    where
        F: FnOnce(&mut Sketch),
    {
        let mut sketch = Sketch::with_options(options)?;
        block(&mut sketch);
        Ok(sketch)
    }

    // ==================== Accessors ====================

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    pub fn set_transformation(&mut self, transformation: Transformation) {
        self.transformation = transformation;
    }

    // ==================== Mutation ====================

    /// Append an element and return the sketch for chaining.
    pub fn push(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// Append an element wrapped in a group carrying its own transformation,
    /// built from the given placement options. The sketch's transformation is
    /// untouched.
    pub fn push_with(
        &mut self,
        element: impl Into<Element>,
        options: &PlacementOptions,
    ) -> Result<&mut Self, OptionsError> {
        let transformation = Transformation::from_options(options)?;
        let mut group = Sketch::with_transformation(transformation);
        group.elements.push(element.into());
        self.elements.push(Element::Group(group));
        Ok(self)
    }

    /// Evaluate a turtle-command block and append the resulting polygon.
    ///
    /// Returns a reference to the appended polygon.
    pub fn add_polygon<F>(&mut self, block: F) -> Result<&Polygon, BuildError>
    where
        F: FnOnce(&mut PolygonBuilder) -> Result<(), BuildError>,
    {
        let polygon = PolygonBuilder::new().evaluate(block)?;
        self.elements.push(Element::Polygon(polygon));
        match self.elements.last() {
            Some(Element::Polygon(p)) => Ok(p),
            _ => unreachable!("polygon was just pushed"),
        }
    }

    // ==================== Derived geometry ====================

    /// The corners of the smallest axis-aligned rectangle enclosing all
    /// elements, honoring the sketch's transformation. `None` when no element
    /// contributes an extent.
    ///
    /// Elements report their own untransformed extents; those are reduced
    /// componentwise, then mapped through the transformation (four-corner
    /// handling when rotation is present).
    pub fn minmax(&self) -> Option<(Point, Point)> {
        let mut acc: Option<BBox> = None;
        for element in &self.elements {
            if let Some(bb) = element.minmax() {
                acc = Some(match acc {
                    Some(whole) => whole.union(bb),
                    None => bb,
                });
            }
        }
        let bb = self.transformation.transform_bbox(acc?);
        Some((bb.min, bb.max))
    }

    /// The minimum corner of the bounding rectangle.
    pub fn min(&self) -> Option<Point> {
        self.minmax().map(|(min, _)| min)
    }

    /// The maximum corner of the bounding rectangle.
    pub fn max(&self) -> Option<Point> {
        self.minmax().map(|(_, max)| max)
    }

    /// The smallest axis-aligned rectangle enclosing all elements.
    pub fn bounds(&self) -> Option<Rect> {
        self.minmax().map(|(min, max)| Rect::new(min, max))
    }

    /// The size of the bounding rectangle.
    pub fn size(&self) -> Option<Size> {
        self.minmax().map(|(min, max)| {
            let d = max - min;
            Size::new(d.dx, d.dy)
        })
    }

    // ==================== First quadrant ====================

    /// True if the whole sketch lies in the first quadrant (both coordinates
    /// of the minimum corner are >= 0). An empty sketch is vacuously there.
    pub fn in_first_quadrant(&self) -> bool {
        self.min().map(|min| min.x >= 0.0 && min.y >= 0.0).unwrap_or(true)
    }

    /// Translate the sketch so it lies entirely in the first quadrant, by
    /// composing a translation by the negated minimum corner onto the
    /// existing transformation. No-op if already there.
    pub fn make_first_quadrant(&mut self) -> &mut Self {
        if !self.in_first_quadrant() {
            if let Some(min) = self.min() {
                let shift = Point::ORIGIN - min;
                debug!(%shift, "translating sketch into first quadrant");
                self.transformation = self.transformation.then_translate(shift);
            }
        }
        self
    }

    /// A copy of the sketch translated into the first quadrant.
    pub fn to_first_quadrant(&self) -> Sketch {
        let mut clone = self.clone();
        clone.make_first_quadrant();
        clone
    }
}

impl Bounded for Sketch {
    fn minmax(&self) -> Option<BBox> {
        Sketch::minmax(self).map(|(min, max)| BBox { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Circle, Line};
    use crate::types::Vector;

    const EPSILON: f64 = 1e-10;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON,
            "x mismatch: {} != {}",
            actual.x,
            expected.x
        );
        assert!(
            (actual.y - expected.y).abs() < EPSILON,
            "y mismatch: {} != {}",
            actual.y,
            expected.y
        );
    }

    #[test]
    fn empty_sketch_has_no_bounds() {
        let sketch = Sketch::new();
        assert!(sketch.is_empty());
        assert_eq!(sketch.minmax(), None);
        assert_eq!(sketch.bounds(), None);
        assert_eq!(sketch.size(), None);
        assert!(sketch.transformation().is_identity());
    }

    #[test]
    fn single_rect_identity_bounds() {
        let mut sketch = Sketch::new();
        sketch.push(Rect::new([0.0, 0.0], [5.0, 5.0]));
        let (min, max) = sketch.minmax().unwrap();
        assert_eq!(min, Point::new(0.0, 0.0));
        assert_eq!(max, Point::new(5.0, 5.0));
        assert_eq!(sketch.size(), Some(Size::new(5.0, 5.0)));
    }

    #[test]
    fn bounds_reduce_over_elements() {
        let mut sketch = Sketch::new();
        sketch
            .push(Line::new([-1.0, 0.0], [2.0, 2.0]))
            .push(Circle::new([4.0, 4.0], 1.0));
        let (min, max) = sketch.minmax().unwrap();
        assert_eq!(min, Point::new(-1.0, 0.0));
        assert_eq!(max, Point::new(5.0, 5.0));
    }

    #[test]
    fn minmax_is_idempotent() {
        let mut sketch = Sketch::new();
        sketch.push(Rect::new([1.0, 2.0], [3.0, 4.0]));
        sketch.set_transformation(Transformation::from_rotation_degrees(30.0));
        assert_eq!(sketch.minmax(), sketch.minmax());
    }

    #[test]
    fn rotated_square_bounds_use_four_corners() {
        let mut sketch = Sketch::new();
        sketch.push(Rect::new([0.0, 0.0], [1.0, 1.0]));
        sketch.set_transformation(Transformation::from_rotation_degrees(45.0));

        let size = sketch.size().unwrap();
        let sqrt2 = std::f64::consts::SQRT_2;
        assert!((size.w - sqrt2).abs() < EPSILON);
        assert!((size.h - sqrt2).abs() < EPSILON);
        // Strictly larger than the unrotated square in both dimensions
        assert!(size.w > 1.0 && size.h > 1.0);
    }

    #[test]
    fn translation_shifts_bounds_without_rotation_handling() {
        let mut sketch = Sketch::new();
        sketch.push(Rect::new([0.0, 0.0], [2.0, 2.0]));
        sketch.set_transformation(Transformation::from_translation(Vector::new(3.0, 4.0)));
        let (min, max) = sketch.minmax().unwrap();
        assert_eq!(min, Point::new(3.0, 4.0));
        assert_eq!(max, Point::new(5.0, 6.0));
    }

    #[test]
    fn first_quadrant_checks_min_corner() {
        let mut sketch = Sketch::new();
        sketch.push(Rect::new([0.0, 0.0], [5.0, 5.0]));
        assert!(sketch.in_first_quadrant());

        let mut sketch = Sketch::new();
        sketch.push(Rect::new([-1.0, 0.0], [5.0, 5.0]));
        assert!(!sketch.in_first_quadrant());
    }

    #[test]
    fn empty_sketch_is_vacuously_first_quadrant() {
        assert!(Sketch::new().in_first_quadrant());
    }

    #[test]
    fn make_first_quadrant_translates_to_origin() {
        let mut sketch = Sketch::new();
        sketch.push(Rect::new([-2.0, -3.0], [5.0, 5.0]));
        sketch.make_first_quadrant();
        let (min, _) = sketch.minmax().unwrap();
        assert_point_eq(min, Point::new(0.0, 0.0));
        assert!(sketch.in_first_quadrant());
    }

    #[test]
    fn make_first_quadrant_composes_with_rotation() {
        // A rotated square keeps its rotated extent after normalization.
        let mut sketch = Sketch::new();
        sketch.push(Rect::new([0.0, 0.0], [1.0, 1.0]));
        sketch.set_transformation(Transformation::from_rotation_degrees(45.0));
        let before = sketch.size().unwrap();

        sketch.make_first_quadrant();
        let (min, _) = sketch.minmax().unwrap();
        let after = sketch.size().unwrap();

        assert_point_eq(min, Point::new(0.0, 0.0));
        assert!((before.w - after.w).abs() < EPSILON);
        assert!((before.h - after.h).abs() < EPSILON);
        assert!(sketch.transformation().has_rotation());
    }

    #[test]
    fn make_first_quadrant_is_noop_when_already_there() {
        let mut sketch = Sketch::new();
        sketch.push(Rect::new([1.0, 1.0], [2.0, 2.0]));
        let before = *sketch.transformation();
        sketch.make_first_quadrant();
        assert_eq!(*sketch.transformation(), before);
    }

    #[test]
    fn to_first_quadrant_leaves_original_untouched() {
        let mut sketch = Sketch::new();
        sketch.push(Rect::new([-2.0, -3.0], [5.0, 5.0]));
        let normalized = sketch.to_first_quadrant();

        assert!(!sketch.in_first_quadrant());
        assert!(normalized.in_first_quadrant());
        assert_point_eq(normalized.min().unwrap(), Point::new(0.0, 0.0));
    }

    #[test]
    fn push_is_chainable_and_keeps_order() {
        let mut sketch = Sketch::new();
        sketch
            .push(Rect::new([0.0, 0.0], [1.0, 1.0]))
            .push(Circle::new([0.0, 0.0], 1.0));
        assert_eq!(sketch.len(), 2);
        assert!(matches!(sketch.first(), Some(Element::Rect(_))));
        assert!(matches!(sketch.last(), Some(Element::Circle(_))));
    }

    #[test]
    fn push_with_attaches_per_element_transform() {
        let mut sketch = Sketch::new();
        sketch
            .push_with(
                Rect::new([0.0, 0.0], [1.0, 1.0]),
                &PlacementOptions::new().origin([5.0, 0.0]),
            )
            .unwrap();

        // The sketch's own transformation stays identity; the element moved.
        assert!(sketch.transformation().is_identity());
        assert!(matches!(sketch.last(), Some(Element::Group(_))));
        let (min, max) = sketch.minmax().unwrap();
        assert_eq!(min, Point::new(5.0, 0.0));
        assert_eq!(max, Point::new(6.0, 1.0));
    }

    #[test]
    fn empty_group_does_not_poison_bounds() {
        let mut sketch = Sketch::new();
        sketch.push(Element::Group(Sketch::new()));
        sketch.push(Rect::new([1.0, 1.0], [2.0, 2.0]));
        let (min, max) = sketch.minmax().unwrap();
        assert_eq!(min, Point::new(1.0, 1.0));
        assert_eq!(max, Point::new(2.0, 2.0));
    }

    #[test]
    fn build_populates_declaratively() {
        let sketch = Sketch::build(|s| {
            s.push(Rect::new([0.0, 0.0], [1.0, 1.0]))
                .push(Circle::new([3.0, 0.0], 1.0));
        });
        assert_eq!(sketch.len(), 2);

        let sketch = Sketch::build_with(&PlacementOptions::new().x(10.0), |s| {
            s.push(Rect::new([0.0, 0.0], [1.0, 1.0]));
        })
        .unwrap();
        assert_eq!(sketch.min(), Some(Point::new(10.0, 0.0)));
    }

    #[test]
    fn add_polygon_pushes_and_returns_the_polygon() {
        let mut sketch = Sketch::new();
        let polygon = sketch
            .add_polygon(|b| {
                b.start_at([0.0, 0.0]);
                b.step([1.0, 0.0])?;
                b.step([0.0, 1.0])?;
                Ok(())
            })
            .unwrap();
        assert_eq!(polygon.len(), 3);
        assert_eq!(sketch.len(), 1);
    }
}
