// pathbake/color/src/lib.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Colors, and decoding of `#rgb` / `#rrggbb` tokens.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A color with floating-point red, green, blue and alpha channels.
///
/// Channels are nominally in [0, 1] but are not clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorF(pub [f32; 4]);

impl ColorF {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> ColorF {
        ColorF([r, g, b, a])
    }

    /// The "unset" color: all four channels zero.
    #[inline]
    pub fn transparent_black() -> ColorF {
        ColorF::default()
    }

    /// Decodes a `#rgb` or `#rrggbb` token into an opaque color.
    ///
    /// A shorthand digit `d` becomes `d * 17 / 255`, the same value as the digit written twice.
    pub fn from_hex(token: &str) -> Result<ColorF, ColorParseError> {
        let digits = match token.strip_prefix('#') {
            Some(digits) => digits,
            None => return Err(ColorParseError::MissingHash(token.to_owned())),
        };

        let nibbles = digits.chars().map(|ch| ch.to_digit(16)).collect::<Vec<_>>();
        if nibbles.len() != 3 && nibbles.len() != 6 {
            return Err(ColorParseError::BadLength(token.to_owned()));
        }
        let nibbles = match nibbles.into_iter().collect::<Option<Vec<u32>>>() {
            Some(nibbles) => nibbles,
            None => return Err(ColorParseError::InvalidDigit(token.to_owned())),
        };

        let mut channels = [1.0; 4];
        if nibbles.len() == 3 {
            for (channel, &nibble) in channels.iter_mut().zip(nibbles.iter()) {
                *channel = (nibble * 17) as f32 / 255.0;
            }
        } else {
            for (channel, pair) in channels.iter_mut().zip(nibbles.chunks(2)) {
                *channel = (pair[0] * 16 + pair[1]) as f32 / 255.0;
            }
        }
        Ok(ColorF(channels))
    }
}

/// A color token that could not be decoded. Each variant carries the offending token.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorParseError {
    /// The token does not start with `#`.
    MissingHash(String),
    /// The token does not have exactly 3 or 6 digits after the `#`.
    BadLength(String),
    /// One of the digits is not hexadecimal.
    InvalidDigit(String),
}

impl Display for ColorParseError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            ColorParseError::MissingHash(ref token) => {
                write!(formatter, "color `{}` does not start with `#`", token)
            }
            ColorParseError::BadLength(ref token) => {
                write!(formatter, "color `{}` must have 3 or 6 hex digits", token)
            }
            ColorParseError::InvalidDigit(ref token) => {
                write!(formatter, "color `{}` contains a non-hex digit", token)
            }
        }
    }
}

impl Error for ColorParseError {}
