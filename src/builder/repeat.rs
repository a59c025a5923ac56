//! Repeat pattern builder: replay a turtle block along a baseline.
//!
//! Unlike [`PolygonBuilder`](crate::builder::PolygonBuilder), where the
//! heading persists across commands, the repeat builder resets its direction
//! to the baseline (from the fixed start toward the destination) before
//! every repetition, so each replay of the block is measured against the
//! same heading.

use crate::errors::BuildError;
use crate::log::debug;
use crate::types::{Point, Vector};

/// Generates a point sequence by executing a command block a fixed number of
/// times, stepping along the baseline from the start point to a destination.
#[derive(Debug, Clone)]
pub struct RepeatBuilder {
    /// Fixed starting point; never mutated after construction.
    from: Point,
    /// Current heading vector; reset to the baseline direction at the start
    /// of every repetition.
    direction: Vector,
    points: Vec<Point>,
}

impl RepeatBuilder {
    pub fn new(from: impl Into<Point>) -> Self {
        RepeatBuilder {
            from: from.into(),
            direction: Vector::ZERO,
            points: Vec::new(),
        }
    }

    /// Convenience entry point: build starting from `from`.
    pub fn build_from<F>(
        from: impl Into<Point>,
        to: impl Into<Point>,
        count: u32,
        block: F,
    ) -> Result<Vec<Point>, BuildError>
    where
        F: FnMut(&mut RepeatBuilder, f64) -> Result<(), BuildError>,
    {
        Self::new(from).build(to, count, block)
    }

    /// Execute the block `count` times along the baseline toward `to`,
    /// returning the accumulated points.
    ///
    /// Each repetition: the direction is reset to the unit vector from the
    /// fixed start toward `to`, the block runs once (receiving the step
    /// magnitude), and the rolling position advances by one step vector; the
    /// boundary point is emitted unless the block already ended on it.
    ///
    /// `count` of zero is rejected before any step arithmetic, and a
    /// degenerate baseline (`to` equal to the current point) yields a zero
    /// step vector rather than NaN.
    pub fn build<F>(
        mut self,
        to: impl Into<Point>,
        count: u32,
        mut block: F,
    ) -> Result<Vec<Point>, BuildError>
    where
        F: FnMut(&mut RepeatBuilder, f64) -> Result<(), BuildError>,
    {
        if count == 0 {
            return Err(BuildError::ZeroCount);
        }
        let to = to.into();

        let mut current = self.last();
        let delta = to - current;
        let step = match delta.try_normalize() {
            Some(unit) => unit * (delta.magnitude() / count as f64),
            None => Vector::ZERO,
        };
        let step_magnitude = step.magnitude();
        debug!(%to, count, step = %step, "repeating block along baseline");

        for _ in 0..count {
            // Every repetition is measured against the original baseline,
            // not an accumulated heading.
            self.direction = (to - self.from).try_normalize().unwrap_or(Vector::ZERO);
            block(&mut self, step_magnitude)?;

            // Return to the baseline after every block.
            current = current + step;
            if self.last() != current {
                self.points.push(current);
            }
        }
        Ok(self.points)
    }

    /// The last emitted point, or the fixed start if nothing was emitted.
    pub fn last(&self) -> Point {
        self.points.last().copied().unwrap_or(self.from)
    }

    /// The current heading vector.
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Emit a point.
    pub fn push(&mut self, p: impl Into<Point>) -> &mut Self {
        self.points.push(p.into());
        self
    }

    // ==================== Turtle commands ====================

    /// Move the given distance along the current direction and emit the
    /// reached point. Fails when the direction is degenerate (zero-length
    /// baseline).
    pub fn forward(&mut self, distance: f64) -> Result<Point, BuildError> {
        if !distance.is_finite() {
            return Err(BuildError::NonFinite);
        }
        if self.direction.is_zero() {
            return Err(BuildError::DegenerateDirection);
        }
        let p = self.last() + self.direction * distance;
        self.points.push(p);
        Ok(p)
    }

    /// Rotate the direction counterclockwise by the given degrees.
    pub fn turn_left(&mut self, degrees: f64) {
        self.direction = self.direction.rotated(degrees);
    }

    /// Rotate the direction clockwise by the given degrees.
    pub fn turn_right(&mut self, degrees: f64) {
        self.turn_left(-degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn noop_block_marks_iteration_boundaries() {
        let points =
            RepeatBuilder::build_from([0.0, 0.0], [4.0, 0.0], 4, |_, _| Ok(())).unwrap();
        assert_eq!(points.len(), 4);
        for (i, p) in points.iter().enumerate() {
            assert_point_eq(*p, Point::new((i + 1) as f64, 0.0));
        }
    }

    #[test]
    fn zero_count_is_rejected() {
        let err =
            RepeatBuilder::build_from([0.0, 0.0], [4.0, 0.0], 0, |_, _| Ok(())).unwrap_err();
        assert_eq!(err, BuildError::ZeroCount);
    }

    #[test]
    fn degenerate_baseline_is_count_noops() {
        // to == from: zero step, no NaN, and nothing new to emit.
        let points =
            RepeatBuilder::build_from([1.0, 1.0], [1.0, 1.0], 3, |_, _| Ok(())).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn block_receives_step_magnitude() {
        let mut seen = Vec::new();
        RepeatBuilder::build_from([0.0, 0.0], [6.0, 0.0], 3, |_, step| {
            seen.push(step);
            Ok(())
        })
        .unwrap();
        assert_eq!(seen.len(), 3);
        for step in seen {
            assert!((step - 2.0).abs() < EPSILON);
        }
    }

    #[test]
    fn direction_resets_to_baseline_every_iteration() {
        let mut directions = Vec::new();
        RepeatBuilder::build_from([0.0, 0.0], [0.0, 4.0], 2, |b, _| {
            directions.push(b.direction());
            // Skew the direction; the next iteration must not see it.
            b.turn_left(90.0);
            Ok(())
        })
        .unwrap();
        assert_eq!(directions.len(), 2);
        for d in directions {
            assert!((d.dx - 0.0).abs() < EPSILON);
            assert!((d.dy - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn block_points_are_kept_and_boundary_added() {
        // A sawtooth: each repetition rises then comes back to the baseline.
        let points = RepeatBuilder::build_from([0.0, 0.0], [2.0, 0.0], 2, |b, step| {
            let tip = b.last() + Vector::new(step / 2.0, 1.0);
            b.push(tip);
            Ok(())
        })
        .unwrap();

        assert_eq!(points.len(), 4);
        assert_point_eq(points[0], Point::new(0.5, 1.0));
        assert_point_eq(points[1], Point::new(1.0, 0.0));
        assert_point_eq(points[2], Point::new(1.5, 1.0));
        assert_point_eq(points[3], Point::new(2.0, 0.0));
    }

    #[test]
    fn boundary_not_duplicated_when_block_lands_on_it() {
        let points = RepeatBuilder::build_from([0.0, 0.0], [2.0, 0.0], 2, |b, step| {
            b.forward(step)?;
            Ok(())
        })
        .unwrap();
        // forward already reaches each boundary; no duplicates appear.
        assert_eq!(points.len(), 2);
        assert_point_eq(points[0], Point::new(1.0, 0.0));
        assert_point_eq(points[1], Point::new(2.0, 0.0));
    }

    #[test]
    fn forward_follows_turned_direction() {
        let points = RepeatBuilder::build_from([0.0, 0.0], [2.0, 0.0], 1, |b, _| {
            b.turn_left(90.0);
            b.forward(1.0)?;
            Ok(())
        })
        .unwrap();
        assert_point_eq(points[0], Point::new(0.0, 1.0));
        // The baseline boundary still gets marked afterwards.
        assert_point_eq(points[1], Point::new(2.0, 0.0));
    }

    #[test]
    fn forward_on_degenerate_baseline_fails() {
        let err = RepeatBuilder::build_from([1.0, 1.0], [1.0, 1.0], 1, |b, _| {
            b.forward(1.0)?;
            Ok(())
        })
        .unwrap_err();
        assert_eq!(err, BuildError::DegenerateDirection);
    }

    #[test]
    fn error_in_block_aborts_the_build() {
        let err = RepeatBuilder::build_from([0.0, 0.0], [4.0, 0.0], 4, |_, _| {
            Err(BuildError::NonFinite)
        })
        .unwrap_err();
        assert_eq!(err, BuildError::NonFinite);
    }
}
