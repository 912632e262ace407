// pathbake/content/src/segment.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Single line, Bézier curve, or arc segments, with explicit start and end points.

use pathbake_geometry::line_segment::LineSegment2F;
use pathbake_geometry::vector::Vector2F;

/// A single segment of a path, in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// The start and end points of the segment.
    pub baseline: LineSegment2F,
    /// The control point or points.
    ///
    /// Ignored for lines and arcs. For a quadratic Bézier curve the start point of this line is
    /// the control point and the end point is ignored. For a cubic Bézier curve both are used.
    pub ctrl: LineSegment2F,
    /// The type of segment this is.
    pub kind: SegmentKind,
    /// Various flags that describe information about this segment in a path.
    pub flags: SegmentFlags,
}

impl Segment {
    /// Returns an invalid segment.
    #[inline]
    pub fn none() -> Segment {
        Segment {
            baseline: LineSegment2F::default(),
            ctrl: LineSegment2F::default(),
            kind: SegmentKind::None,
            flags: SegmentFlags::empty(),
        }
    }

    /// Returns a segment representing a straight line.
    #[inline]
    pub fn line(line: LineSegment2F) -> Segment {
        Segment {
            baseline: line,
            ctrl: LineSegment2F::default(),
            kind: SegmentKind::Line,
            flags: SegmentFlags::empty(),
        }
    }

    /// Returns a segment representing a quadratic Bézier curve.
    #[inline]
    pub fn quadratic(baseline: LineSegment2F, ctrl: Vector2F) -> Segment {
        Segment {
            baseline,
            ctrl: LineSegment2F::new(ctrl, Vector2F::zero()),
            kind: SegmentKind::Quadratic,
            flags: SegmentFlags::empty(),
        }
    }

    /// Returns a segment representing a cubic Bézier curve.
    #[inline]
    pub fn cubic(baseline: LineSegment2F, ctrl: LineSegment2F) -> Segment {
        Segment {
            baseline,
            ctrl,
            kind: SegmentKind::Cubic,
            flags: SegmentFlags::empty(),
        }
    }

    /// Returns a segment standing in for an elliptical arc. Only the endpoints are kept.
    #[inline]
    pub fn arc(baseline: LineSegment2F) -> Segment {
        Segment {
            baseline,
            ctrl: LineSegment2F::default(),
            kind: SegmentKind::Arc,
            flags: SegmentFlags::empty(),
        }
    }

    /// Returns this segment with the given flags added.
    #[inline]
    pub fn with_flags(mut self, flags: SegmentFlags) -> Segment {
        self.flags.insert(flags);
        self
    }
}

/// The type of segment this is.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
pub enum SegmentKind {
    /// An invalid segment.
    None,
    /// A line segment.
    Line,
    /// A quadratic Bézier curve.
    Quadratic,
    /// A cubic Bézier curve.
    Cubic,
    /// An elliptical arc.
    Arc,
}

bitflags! {
    /// Various flags that specify the relation of this segment to other segments in a path.
    pub struct SegmentFlags: u8 {
        /// This segment is the first one in its subpath.
        const FIRST_IN_SUBPATH = 0x01;
    }
}

#[cfg(test)]
mod test {
    use super::{Segment, SegmentFlags, SegmentKind};
    use pathbake_geometry::line_segment::LineSegment2F;
    use pathbake_geometry::vector::vec2f;

    #[test]
    fn test_constructors() {
        let baseline = LineSegment2F::new(vec2f(0.0, 0.0), vec2f(4.0, 0.0));
        assert_eq!(Segment::none().kind, SegmentKind::None);
        assert_eq!(Segment::line(baseline).kind, SegmentKind::Line);
        assert_eq!(Segment::arc(baseline).kind, SegmentKind::Arc);

        let quadratic = Segment::quadratic(baseline, vec2f(2.0, 2.0));
        assert_eq!(quadratic.kind, SegmentKind::Quadratic);
        assert_eq!(quadratic.ctrl.from(), vec2f(2.0, 2.0));

        let cubic = Segment::cubic(baseline, LineSegment2F::new(vec2f(1.0, 1.0), vec2f(3.0, 1.0)));
        assert_eq!(cubic.kind, SegmentKind::Cubic);
        assert_eq!(cubic.ctrl.to(), vec2f(3.0, 1.0));
        assert_eq!(cubic.baseline, baseline);
        assert!(cubic.flags.is_empty());
    }

    #[test]
    fn test_with_flags() {
        let segment = Segment::line(LineSegment2F::new(vec2f(0.0, 0.0), vec2f(1.0, 0.0)))
            .with_flags(SegmentFlags::FIRST_IN_SUBPATH);
        assert!(segment.flags.contains(SegmentFlags::FIRST_IN_SUBPATH));
        assert_eq!(segment.kind, SegmentKind::Line);
    }
}
