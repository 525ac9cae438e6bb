//! Abstract drawing surface.
//!
//! The simulation never depends on a concrete drawing API.  Everything that
//! can be drawn (graph, paths, sight axes, agents) issues only two primitives
//! against a [`Surface`]: a filled point and a line segment.  Styling (colour,
//! stroke width) is the caller's business and is set on the surface between
//! calls.

use crate::Vector;

/// A sink for drawing primitives.
pub trait Surface {
    /// Draw a filled disc of `radius` centered on `at`.
    fn point(&mut self, at: Vector, radius: f64);

    /// Draw a line segment from `from` to `to`.
    fn line(&mut self, from: Vector, to: Vector);
}

/// One recorded drawing call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Point { at: Vector, radius: f64 },
    Line { from: Vector, to: Vector },
}

/// A [`Surface`] that records every call in order.
///
/// Useful for tests and for exporting a frame to another renderer.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> impl Iterator<Item = (Vector, f64)> + '_ {
        self.primitives.iter().filter_map(|p| match *p {
            Primitive::Point { at, radius } => Some((at, radius)),
            Primitive::Line { .. } => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        self.primitives.iter().filter_map(|p| match *p {
            Primitive::Line { from, to } => Some((from, to)),
            Primitive::Point { .. } => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn point(&mut self, at: Vector, radius: f64) {
        self.primitives.push(Primitive::Point { at, radius });
    }

    fn line(&mut self, from: Vector, to: Vector) {
        self.primitives.push(Primitive::Line { from, to });
    }
}
