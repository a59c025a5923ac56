//! Affine transformations and placement options.
//!
//! `Transformation` wraps `glam::DAffine2`. It is applied to *query results*
//! (bounds, sizes), never to stored elements, so sketches stay cheap to
//! mutate. The bounding-box transform distinguishes the rotation-free case
//! (two corners suffice) from the rotated case (all four corners must be
//! mapped).

use glam::{DAffine2, DVec2};

use crate::errors::OptionsError;
use crate::log::debug;
use crate::types::{BBox, Point, Vector};

const IDENTITY_EPSILON: f64 = 1e-12;

/// An affine map over the sketch plane: translation, rotation, scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformation {
    affine: DAffine2,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transformation {
    pub const IDENTITY: Transformation = Transformation {
        affine: DAffine2::IDENTITY,
    };

    /// A pure translation by the given displacement.
    pub fn from_translation(v: Vector) -> Self {
        Transformation {
            affine: DAffine2::from_translation(v.to_dvec2()),
        }
    }

    /// A counterclockwise rotation about the origin, in degrees.
    pub fn from_rotation_degrees(degrees: f64) -> Self {
        Transformation {
            affine: DAffine2::from_angle(degrees.to_radians()),
        }
    }

    /// A uniform scale about the origin.
    pub fn from_scale(scale: f64) -> Self {
        Transformation {
            affine: DAffine2::from_scale(DVec2::splat(scale)),
        }
    }

    /// Build a transformation from placement options: scale, then rotation,
    /// then translation.
    pub fn from_options(opts: &PlacementOptions) -> Result<Self, OptionsError> {
        opts.validate()?;

        let mut affine = DAffine2::IDENTITY;
        if let Some(s) = opts.scale {
            affine = DAffine2::from_scale(DVec2::splat(s)) * affine;
        }
        if let Some(deg) = opts.rotate {
            affine = DAffine2::from_angle(deg.to_radians()) * affine;
        }
        let translation = opts.translation();
        if !translation.is_zero() {
            affine = DAffine2::from_translation(translation.to_dvec2()) * affine;
        }
        Ok(Transformation { affine })
    }

    /// True if the map leaves every point where it is.
    pub fn is_identity(&self) -> bool {
        self.affine.abs_diff_eq(DAffine2::IDENTITY, IDENTITY_EPSILON)
    }

    /// True if the linear part is not diagonal, i.e. a rotation (or shear)
    /// is present and axis alignment is not preserved.
    pub fn has_rotation(&self) -> bool {
        let m = self.affine.matrix2;
        m.x_axis.y.abs() > IDENTITY_EPSILON || m.y_axis.x.abs() > IDENTITY_EPSILON
    }

    /// The translation component.
    pub fn translation(&self) -> Vector {
        Vector::from_dvec2(self.affine.translation)
    }

    /// Map a point through the transformation.
    pub fn transform(&self, p: Point) -> Point {
        Point::from_dvec2(self.affine.transform_point2(p.to_dvec2()))
    }

    /// Compose: apply `self` first, then `after`.
    pub fn then(&self, after: &Transformation) -> Transformation {
        Transformation {
            affine: after.affine * self.affine,
        }
    }

    /// Compose a translation on top of this transformation.
    pub fn then_translate(&self, v: Vector) -> Transformation {
        self.then(&Transformation::from_translation(v))
    }

    /// Map an axis-aligned bbox to the axis-aligned bbox of its image.
    ///
    /// Without rotation the two diagonal corners suffice (re-ordered, so a
    /// negative scale still yields min <= max). With rotation the image of
    /// the box is no longer axis-aligned, so all four corners are mapped and
    /// the min/max recomputed over them.
    pub fn transform_bbox(&self, bb: BBox) -> BBox {
        if self.is_identity() {
            return bb;
        }
        if !self.has_rotation() {
            return BBox::from_corners(self.transform(bb.min), self.transform(bb.max));
        }

        debug!(min = %bb.min, max = %bb.max, "transforming rotated bounds via four corners");
        let corners = bb.corners().map(|c| self.transform(c));
        let mut out = BBox::at_point(corners[0]);
        for corner in &corners[1..] {
            out.expand_point(*corner);
        }
        out
    }
}

/// Placement options for constructing a [`Transformation`].
///
/// Replaces the option hash of loosely-typed sketch constructors with an
/// explicit structure: unrecognized options are unrepresentable, and
/// conflicting or non-finite values are rejected at construction.
///
/// `origin` and `translate` both express the translation component
/// (an absolute point vs. a displacement); `x`/`y` set its components
/// individually. At most one style may be used.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlacementOptions {
    pub origin: Option<Point>,
    pub translate: Option<Vector>,
    pub rotate: Option<f64>,
    pub scale: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl PlacementOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, p: impl Into<Point>) -> Self {
        self.origin = Some(p.into());
        self
    }

    pub fn translate(mut self, v: impl Into<Vector>) -> Self {
        self.translate = Some(v.into());
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    fn translation(&self) -> Vector {
        if let Some(origin) = self.origin {
            origin - Point::ORIGIN
        } else if let Some(v) = self.translate {
            v
        } else {
            Vector::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
        }
    }

    fn validate(&self) -> Result<(), OptionsError> {
        let conflict = |first, second| OptionsError::Conflicting { first, second };
        if self.origin.is_some() && self.translate.is_some() {
            return Err(conflict("origin", "translate"));
        }
        if self.origin.is_some() && (self.x.is_some() || self.y.is_some()) {
            return Err(conflict("origin", if self.x.is_some() { "x" } else { "y" }));
        }
        if self.translate.is_some() && (self.x.is_some() || self.y.is_some()) {
            return Err(conflict(
                "translate",
                if self.x.is_some() { "x" } else { "y" },
            ));
        }

        let non_finite = |name| OptionsError::NonFinite { name };
        if let Some(p) = self.origin {
            if !p.is_finite() {
                return Err(non_finite("origin"));
            }
        }
        if let Some(v) = self.translate {
            if !v.is_finite() {
                return Err(non_finite("translate"));
            }
        }
        if let Some(deg) = self.rotate {
            if !deg.is_finite() {
                return Err(non_finite("rotate"));
            }
        }
        if let Some(s) = self.scale {
            if !s.is_finite() {
                return Err(non_finite("scale"));
            }
        }
        if let Some(x) = self.x {
            if !x.is_finite() {
                return Err(non_finite("x"));
            }
        }
        if let Some(y) = self.y {
            if !y.is_finite() {
                return Err(non_finite("y"));
            }
        }
        Ok(())
    }
}
