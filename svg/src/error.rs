// pathbake/svg/src/error.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors.

use pathbake_color::ColorParseError;
use pathbake_content::curve::UnsupportedSegment;
use std::error;
use std::fmt::{self, Display, Formatter};
use std::io;

/// Anything that can abort a conversion. None of these are recoverable: the conversion produces
/// either a complete table or one of these.
#[derive(Debug)]
pub enum Error {
    /// The document is not well-formed XML.
    Xml(roxmltree::Error),
    /// The document has no `svg` element to start from.
    MissingSvgElement,
    /// A `d` attribute could not be parsed.
    PathData(svgtypes::Error),
    /// A `fill` or `stroke` value is not a `#rgb` or `#rrggbb` color.
    Color(ColorParseError),
    /// A path contains a segment with no canonical curve, such as an elliptical arc.
    Segment(UnsupportedSegment),
    /// A `stroke-width` value is not a number.
    InvalidStrokeWidth(String),
    /// The input could not be read.
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::Xml(ref err) => write!(formatter, "malformed document: {}", err),
            Error::MissingSvgElement => write!(formatter, "document has no `svg` element"),
            Error::PathData(ref err) => write!(formatter, "malformed path data: {}", err),
            Error::Color(ref err) => write!(formatter, "{}", err),
            Error::Segment(ref err) => write!(formatter, "{}", err),
            Error::InvalidStrokeWidth(ref token) => {
                write!(formatter, "stroke width `{}` is not a number", token)
            }
            Error::Io(ref err) => write!(formatter, "io error: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Xml(ref err) => Some(err),
            Error::PathData(ref err) => Some(err),
            Error::Color(ref err) => Some(err),
            Error::Segment(ref err) => Some(err),
            Error::Io(ref err) => Some(err),
            Error::MissingSvgElement | Error::InvalidStrokeWidth(_) => None,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Error {
        Error::Xml(err)
    }
}

impl From<svgtypes::Error> for Error {
    fn from(err: svgtypes::Error) -> Error {
        Error::PathData(err)
    }
}

impl From<ColorParseError> for Error {
    fn from(err: ColorParseError) -> Error {
        Error::Color(err)
    }
}

impl From<UnsupportedSegment> for Error {
    fn from(err: UnsupportedSegment) -> Error {
        Error::Segment(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}
