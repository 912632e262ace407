// pathbake/svg/src/path_data.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turns the commands of a `d` attribute into absolute, typed segments.

use pathbake_content::outline::Outline;
use pathbake_content::segment::{Segment, SegmentFlags};
use pathbake_geometry::line_segment::LineSegment2F;
use pathbake_geometry::vector::{vec2f, Vector2F};
use svgtypes::{PathParser, PathSegment as SvgPathSegment};

/// Parses path data into an outline.
///
/// Empty path data yields an empty outline.
pub fn parse_path_data(data: &str) -> Result<Outline, svgtypes::Error> {
    let segments = SvgPathToSegments::new(PathParser::from(data));
    Ok(Outline::from_segments(segments.collect::<Result<Vec<_>, _>>()?))
}

/// Adapts a stream of SVG path commands into segments.
///
/// Horizontal and vertical lines become lines, smooth curves get their reflected control point,
/// and a close command adds a line back to the subpath start unless the pen is already there.
pub struct SvgPathToSegments<I>
where
    I: Iterator<Item = Result<SvgPathSegment, svgtypes::Error>>,
{
    iter: I,
    first_subpath_point: Vector2F,
    last_subpath_point: Vector2F,
    last_quadratic_ctrl: Option<Vector2F>,
    last_cubic_ctrl: Option<Vector2F>,
    just_moved: bool,
}

impl<I> SvgPathToSegments<I>
where
    I: Iterator<Item = Result<SvgPathSegment, svgtypes::Error>>,
{
    pub fn new(iter: I) -> SvgPathToSegments<I> {
        SvgPathToSegments {
            iter,
            first_subpath_point: Vector2F::zero(),
            last_subpath_point: Vector2F::zero(),
            last_quadratic_ctrl: None,
            last_cubic_ctrl: None,
            just_moved: true,
        }
    }

    fn resolve(&self, abs: bool, x: f64, y: f64) -> Vector2F {
        let point = vec2f(x as f32, y as f32);
        if abs {
            point
        } else {
            self.last_subpath_point + point
        }
    }

    fn finish(&mut self, segment: Segment) -> Segment {
        let segment = if self.just_moved {
            segment.with_flags(SegmentFlags::FIRST_IN_SUBPATH)
        } else {
            segment
        };
        self.last_subpath_point = segment.baseline.to();
        self.last_quadratic_ctrl = None;
        self.last_cubic_ctrl = None;
        self.just_moved = false;
        segment
    }

    fn line_to(&mut self, to: Vector2F) -> Segment {
        let from = self.last_subpath_point;
        self.finish(Segment::line(LineSegment2F::new(from, to)))
    }

    fn quadratic_to(&mut self, ctrl: Vector2F, to: Vector2F) -> Segment {
        let from = self.last_subpath_point;
        let segment = self.finish(Segment::quadratic(LineSegment2F::new(from, to), ctrl));
        self.last_quadratic_ctrl = Some(ctrl);
        segment
    }

    fn cubic_to(&mut self, ctrl0: Vector2F, ctrl1: Vector2F, to: Vector2F) -> Segment {
        let from = self.last_subpath_point;
        let segment = self.finish(Segment::cubic(LineSegment2F::new(from, to),
                                                 LineSegment2F::new(ctrl0, ctrl1)));
        self.last_cubic_ctrl = Some(ctrl1);
        segment
    }
}

impl<I> Iterator for SvgPathToSegments<I>
where
    I: Iterator<Item = Result<SvgPathSegment, svgtypes::Error>>,
{
    type Item = Result<Segment, svgtypes::Error>;

    fn next(&mut self) -> Option<Result<Segment, svgtypes::Error>> {
        loop {
            let command = match self.iter.next()? {
                Ok(command) => command,
                Err(err) => return Some(Err(err)),
            };

            let segment = match command {
                SvgPathSegment::MoveTo { abs, x, y } => {
                    let to = self.resolve(abs, x, y);
                    self.first_subpath_point = to;
                    self.last_subpath_point = to;
                    self.last_quadratic_ctrl = None;
                    self.last_cubic_ctrl = None;
                    self.just_moved = true;
                    continue;
                }
                SvgPathSegment::LineTo { abs, x, y } => {
                    let to = self.resolve(abs, x, y);
                    self.line_to(to)
                }
                SvgPathSegment::HorizontalLineTo { abs, x } => {
                    let y = self.last_subpath_point.y();
                    let to = if abs {
                        vec2f(x as f32, y)
                    } else {
                        vec2f(self.last_subpath_point.x() + x as f32, y)
                    };
                    self.line_to(to)
                }
                SvgPathSegment::VerticalLineTo { abs, y } => {
                    let x = self.last_subpath_point.x();
                    let to = if abs {
                        vec2f(x, y as f32)
                    } else {
                        vec2f(x, self.last_subpath_point.y() + y as f32)
                    };
                    self.line_to(to)
                }
                SvgPathSegment::Quadratic { abs, x1, y1, x, y } => {
                    let ctrl = self.resolve(abs, x1, y1);
                    let to = self.resolve(abs, x, y);
                    self.quadratic_to(ctrl, to)
                }
                SvgPathSegment::SmoothQuadratic { abs, x, y } => {
                    let from = self.last_subpath_point;
                    let ctrl = match self.last_quadratic_ctrl {
                        Some(last_ctrl) => last_ctrl.reflect_through(from),
                        None => from,
                    };
                    let to = self.resolve(abs, x, y);
                    self.quadratic_to(ctrl, to)
                }
                SvgPathSegment::CurveTo { abs, x1, y1, x2, y2, x, y } => {
                    let ctrl0 = self.resolve(abs, x1, y1);
                    let ctrl1 = self.resolve(abs, x2, y2);
                    let to = self.resolve(abs, x, y);
                    self.cubic_to(ctrl0, ctrl1, to)
                }
                SvgPathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                    let from = self.last_subpath_point;
                    let ctrl0 = match self.last_cubic_ctrl {
                        Some(last_ctrl) => last_ctrl.reflect_through(from),
                        None => from,
                    };
                    let ctrl1 = self.resolve(abs, x2, y2);
                    let to = self.resolve(abs, x, y);
                    self.cubic_to(ctrl0, ctrl1, to)
                }
                SvgPathSegment::EllipticalArc { abs, x, y, .. } => {
                    let from = self.last_subpath_point;
                    let to = self.resolve(abs, x, y);
                    self.finish(Segment::arc(LineSegment2F::new(from, to)))
                }
                SvgPathSegment::ClosePath { .. } => {
                    let (from, to) = (self.last_subpath_point, self.first_subpath_point);
                    if from == to {
                        self.last_quadratic_ctrl = None;
                        self.last_cubic_ctrl = None;
                        self.just_moved = true;
                        continue;
                    }
                    let segment = self.line_to(to);
                    self.just_moved = true;
                    segment
                }
            };
            return Some(Ok(segment));
        }
    }
}
