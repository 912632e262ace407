// pathbake/svg/src/record.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One baked path: its curves, closure and resolved paint.

use crate::error::Error;
use crate::path_data;
use crate::style::StyleContext;
use pathbake_color::{ColorF, ColorParseError};
use pathbake_content::curve::Curve;
use pathbake_content::outline::Outline;

/// The output unit for one `path` element.
///
/// `stroke_width` is carried even when there is no stroke; consumers should look at the alpha of
/// `stroke` to decide whether to draw one.
#[derive(Clone, Debug, PartialEq)]
pub struct PathRecord {
    pub curves: Vec<Curve>,
    pub closed: bool,
    pub fill: ColorF,
    pub stroke: ColorF,
    pub stroke_width: f32,
}

impl PathRecord {
    /// Builds the record for a path element with the given `d` attribute and resolved style.
    ///
    /// Returns `None` if the path data has no segments.
    pub fn build(path_data: &str, style: &StyleContext) -> Result<Option<PathRecord>, Error> {
        let outline = path_data::parse_path_data(path_data)?;
        PathRecord::from_outline(&outline, style)
    }

    pub fn from_outline(outline: &Outline, style: &StyleContext)
                        -> Result<Option<PathRecord>, Error> {
        if outline.is_empty() {
            return Ok(None);
        }

        let curves = outline.to_curves()?;
        if !outline.is_continuous() {
            warn!("path jumps between subpaths; its closed flag only compares the first and last \
                   points");
        }
        debug!("{} segments in {} subpaths", outline.len(), outline.subpath_count());
        Ok(Some(PathRecord {
            curves,
            closed: outline.is_closed(),
            fill: resolve_paint(style.fill.as_deref())?,
            stroke: resolve_paint(style.stroke.as_deref())?,
            stroke_width: parse_stroke_width(&style.stroke_width)?,
        }))
    }
}

fn resolve_paint(token: Option<&str>) -> Result<ColorF, ColorParseError> {
    match token {
        Some(token) => ColorF::from_hex(token),
        None => Ok(ColorF::transparent_black()),
    }
}

fn parse_stroke_width(token: &str) -> Result<f32, Error> {
    match token.trim().parse::<f32>() {
        Ok(width) if width.is_finite() => Ok(width),
        _ => Err(Error::InvalidStrokeWidth(token.to_owned())),
    }
}

#[cfg(test)]
mod test {
    use super::PathRecord;
    use crate::error::Error;
    use crate::style::{DeclaredStyle, StyleContext};
    use pathbake_color::{ColorF, ColorParseError};
    use pathbake_content::curve::Curve;
    use pathbake_geometry::vector::vec2f;

    fn style(fill: Option<&str>, stroke: Option<&str>, stroke_width: Option<&str>)
             -> StyleContext {
        StyleContext::default().derive(&DeclaredStyle { fill, stroke, stroke_width })
    }

    #[test]
    fn test_single_line_with_fill() {
        let record = PathRecord::build("M0 0 L10 0", &style(Some("#00ff00"), None, None))
            .unwrap()
            .unwrap();
        assert_eq!(record, PathRecord {
            curves: vec![Curve::Line([vec2f(0.0, 0.0), vec2f(10.0, 0.0)])],
            closed: false,
            fill: ColorF::new(0.0, 1.0, 0.0, 1.0),
            stroke: ColorF::transparent_black(),
            stroke_width: 1.0,
        });
    }

    #[test]
    fn test_stroke_width_is_emitted_without_stroke() {
        let record = PathRecord::build("M0 0 L1 1", &style(None, None, Some("3.5")))
            .unwrap()
            .unwrap();
        assert_eq!(record.stroke, ColorF::transparent_black());
        assert_eq!(record.stroke_width, 3.5);
    }

    #[test]
    fn test_stroke_color() {
        let record = PathRecord::build("M0 0 L1 1 Z", &style(None, Some("#fff"), None))
            .unwrap()
            .unwrap();
        assert_eq!(record.stroke, ColorF::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(record.fill, ColorF::transparent_black());
        assert!(record.closed);
    }

    #[test]
    fn test_empty_path_has_no_record() {
        assert_eq!(PathRecord::build("", &StyleContext::default()).unwrap(), None);
        assert_eq!(PathRecord::build("M3 4", &StyleContext::default()).unwrap(), None);
    }

    #[test]
    fn test_disjoint_subpaths_compare_first_and_last_points() {
        let record = PathRecord::build("M0 0 L5 0 M9 9 L0 0", &StyleContext::default())
            .unwrap()
            .unwrap();
        assert_eq!(record.curves.len(), 2);
        assert!(record.closed);

        let record = PathRecord::build("M0 0 L5 0 M9 9 L1 0", &StyleContext::default())
            .unwrap()
            .unwrap();
        assert!(!record.closed);
    }

    #[test]
    fn test_errors() {
        match PathRecord::build("M0 0 L1 1", &style(Some("red"), None, None)) {
            Err(Error::Color(ColorParseError::MissingHash(ref token))) => assert_eq!(token, "red"),
            other => panic!("unexpected result: {:?}", other),
        }
        match PathRecord::build("M0 0 L1 1", &style(None, None, Some("2px"))) {
            Err(Error::InvalidStrokeWidth(ref token)) => assert_eq!(token, "2px"),
            other => panic!("unexpected result: {:?}", other),
        }
        for &width in &["inf", "-inf", "NaN", "1e39"] {
            match PathRecord::build("M0 0 L1 1", &style(None, None, Some(width))) {
                Err(Error::InvalidStrokeWidth(ref token)) => assert_eq!(token, width),
                other => panic!("unexpected result for {}: {:?}", width, other),
            }
        }
        match PathRecord::build("M0 0 A1 1 0 0 0 2 0", &StyleContext::default()) {
            Err(Error::Segment(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match PathRecord::build("M0 0 L", &StyleContext::default()) {
            Err(Error::PathData(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
