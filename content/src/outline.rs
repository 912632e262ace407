// pathbake/content/src/outline.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A parsed vector path: an ordered run of segments, possibly spanning several subpaths.
//!
//! The name "outline" avoids conflicting with the Rust use of "path" for filesystem paths.

use crate::curve::{Curve, UnsupportedSegment};
use crate::segment::{Segment, SegmentFlags};
use std::fmt::{self, Debug, Formatter};

/// The segments of one path, in the order they appear in its path data.
#[derive(Clone, Default, PartialEq)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    /// Creates a new outline from a list of segments.
    #[inline]
    pub fn from_segments<I>(segments: I) -> Outline where I: IntoIterator<Item = Segment> {
        Outline { segments: segments.into_iter().collect() }
    }

    /// Returns the segments in path order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if this outline has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path ends exactly where it starts.
    ///
    /// An empty outline is never closed.
    pub fn is_closed(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => first.baseline.from() == last.baseline.to(),
            _ => false,
        }
    }

    /// Returns true if every segment starts where the previous one ended.
    ///
    /// A move to a new point between subpaths breaks continuity; a move back to the current point
    /// does not.
    pub fn is_continuous(&self) -> bool {
        self.segments.windows(2).all(|pair| pair[0].baseline.to() == pair[1].baseline.from())
    }

    /// Returns the number of subpaths that contributed at least one segment.
    pub fn subpath_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| segment.flags.contains(SegmentFlags::FIRST_IN_SUBPATH))
            .count()
    }

    /// Converts every segment to its canonical curve, preserving order.
    pub fn to_curves(&self) -> Result<Vec<Curve>, UnsupportedSegment> {
        self.segments.iter().map(Curve::from_segment).collect()
    }
}

impl Debug for Outline {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "Outline(")?;
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(formatter, " ")?;
            }
            let (from, to) = (segment.baseline.from(), segment.baseline.to());
            write!(formatter,
                   "{:?} {},{} -> {},{}",
                   segment.kind,
                   from.x(),
                   from.y(),
                   to.x(),
                   to.y())?;
        }
        write!(formatter, ")")
    }
}
