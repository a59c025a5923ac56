//! Axis layout: place pushed elements side by side.
//!
//! Each element after the first is wrapped in a group translated past the
//! layout's current extent along the chosen axis, plus optional spacing.
//! A pushed group keeps its identity and gets the translation composed onto
//! its own transformation instead of being double-wrapped.

use crate::elements::Element;
use crate::errors::OptionsError;
use crate::sketch::Sketch;
use crate::transform::{PlacementOptions, Transformation};
use crate::types::{Point, Size, Vector};

/// The axis a [`Layout`] advances along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn offset(self, distance: f64) -> Vector {
        match self {
            Axis::Horizontal => Vector::new(distance, 0.0),
            Axis::Vertical => Vector::new(0.0, distance),
        }
    }

    fn extent(self, max: Point) -> f64 {
        match self {
            Axis::Horizontal => max.x,
            Axis::Vertical => max.y,
        }
    }
}

/// A sketch that lays its elements out along an axis as they are pushed.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    sketch: Sketch,
    axis: Axis,
    spacing: f64,
}

impl Layout {
    pub fn new(axis: Axis) -> Self {
        Self::with_spacing(axis, 0.0)
    }

    pub fn with_spacing(axis: Axis, spacing: f64) -> Self {
        Layout {
            sketch: Sketch::new(),
            axis,
            spacing,
        }
    }

    /// A layout whose underlying sketch carries a transformation built from
    /// placement options.
    pub fn with_options(
        axis: Axis,
        spacing: f64,
        options: &PlacementOptions,
    ) -> Result<Self, OptionsError> {
        Ok(Layout {
            sketch: Sketch::with_options(options)?,
            axis,
            spacing,
        })
    }

    /// Append an element, translating it past the current extent. The first
    /// element lands untouched at its own coordinates.
    pub fn push(&mut self, element: impl Into<Element>) -> &mut Self {
        let element = element.into();
        if self.sketch.is_empty() {
            self.sketch.push(element);
            return self;
        }

        let extent = self
            .sketch
            .max()
            .map(|m| self.axis.extent(m))
            .unwrap_or(0.0);
        let offset = self.axis.offset(extent + self.spacing);
        let wrapped = match element {
            Element::Group(mut group) => {
                let composed = group.transformation().then_translate(offset);
                group.set_transformation(composed);
                Element::Group(group)
            }
            other => {
                let mut group =
                    Sketch::with_transformation(Transformation::from_translation(offset));
                group.push(other);
                Element::Group(group)
            }
        };
        self.sketch.push(wrapped);
        self
    }

    // ==================== Accessors ====================

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    pub fn into_sketch(self) -> Sketch {
        self.sketch
    }

    pub fn first(&self) -> Option<&Element> {
        self.sketch.first()
    }

    pub fn last(&self) -> Option<&Element> {
        self.sketch.last()
    }

    pub fn is_empty(&self) -> bool {
        self.sketch.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sketch.len()
    }

    pub fn minmax(&self) -> Option<(Point, Point)> {
        self.sketch.minmax()
    }

    pub fn size(&self) -> Option<Size> {
        self.sketch.size()
    }
}

/// A layout used as an element contributes its laid-out sketch as a group.
impl From<Layout> for Element {
    fn from(layout: Layout) -> Self {
        Element::Group(layout.into_sketch())
    }
}
