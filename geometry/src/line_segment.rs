// pathbake/geometry/src/line_segment.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line segment types.

use crate::vector::Vector2F;

/// A pair of points: the endpoints of a line, or a pair of curve control points.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LineSegment2F {
    from: Vector2F,
    to: Vector2F,
}

impl LineSegment2F {
    #[inline]
    pub fn new(from: Vector2F, to: Vector2F) -> LineSegment2F {
        LineSegment2F { from, to }
    }

    #[inline]
    pub fn from(&self) -> Vector2F {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Vector2F {
        self.to
    }

}
