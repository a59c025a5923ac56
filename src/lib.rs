//! croquis — a 2-D sketch authoring library.
//!
//! A [`Sketch`] accumulates geometric elements (points, lines, rectangles,
//! circles, polygons, nested groups), carries an affine [`Transformation`]
//! applied uniformly to derived queries (bounds, size — never to the stored
//! elements), and answers aggregate questions: bounding box, size, quadrant
//! placement. On top sit two turtle-graphics builders: [`PolygonBuilder`]
//! turns a sequence of motion commands into a polygon, and [`RepeatBuilder`]
//! replays a command block along a baseline.
//!
//! ```
//! use croquis::{PolygonBuilder, Rect, Sketch};
//!
//! let mut sketch = Sketch::new();
//! sketch.push(Rect::new([0.0, 0.0], [5.0, 5.0]));
//!
//! let polygon = PolygonBuilder::new().evaluate(|b| {
//!     b.start_at([0.0, 0.0]);
//!     b.step([1.0, 0.0])?;
//!     b.step([0.0, 1.0])?;
//!     b.step([-1.0, 0.0])?;
//!     Ok(())
//! })?;
//! sketch.push(polygon);
//!
//! let size = sketch.size().unwrap();
//! assert_eq!((size.w, size.h), (5.0, 5.0));
//! # Ok::<(), croquis::BuildError>(())
//! ```

pub mod builder;
pub mod elements;
pub mod errors;
pub mod layout;
pub mod log;
pub mod sketch;
pub mod transform;
pub mod types;

pub use builder::{Motion, PolygonBuilder, RepeatBuilder};
pub use elements::{Bounded, Circle, Element, Line, Polygon, Rect};
pub use errors::{BuildError, OptionsError};
pub use layout::{Axis, Layout};
pub use sketch::Sketch;
pub use transform::{PlacementOptions, Transformation};
pub use types::{BBox, Point, Size, Vector};
