// pathbake/content/src/curve.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Canonical curves: a segment reduced to its ordered list of control points.

use crate::segment::{Segment, SegmentKind};
use pathbake_geometry::vector::Vector2F;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A line, quadratic, or cubic Bézier curve, stored as its control points from start to end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    /// Start and end point.
    Line([Vector2F; 2]),
    /// Start point, control point, end point.
    Quadratic([Vector2F; 3]),
    /// Start point, two control points, end point.
    Cubic([Vector2F; 4]),
}

impl Curve {
    /// Converts a segment to its canonical curve.
    ///
    /// Invalid segments and arcs have no canonical form and are rejected.
    pub fn from_segment(segment: &Segment) -> Result<Curve, UnsupportedSegment> {
        let (from, to) = (segment.baseline.from(), segment.baseline.to());
        match segment.kind {
            SegmentKind::Line => Ok(Curve::Line([from, to])),
            SegmentKind::Quadratic => Ok(Curve::Quadratic([from, segment.ctrl.from(), to])),
            SegmentKind::Cubic => {
                Ok(Curve::Cubic([from, segment.ctrl.from(), segment.ctrl.to(), to]))
            }
            kind @ SegmentKind::None | kind @ SegmentKind::Arc => Err(UnsupportedSegment(kind)),
        }
    }

    /// The control points, in order along the curve.
    #[inline]
    pub fn points(&self) -> &[Vector2F] {
        match *self {
            Curve::Line(ref points) => points,
            Curve::Quadratic(ref points) => points,
            Curve::Cubic(ref points) => points,
        }
    }
}

/// A segment kind that has no canonical curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnsupportedSegment(pub SegmentKind);

impl Display for UnsupportedSegment {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self.0 {
            SegmentKind::Arc => write!(formatter, "elliptical arc segments are not supported"),
            kind => write!(formatter, "unsupported path segment kind {:?}", kind),
        }
    }
}

impl Error for UnsupportedSegment {}
