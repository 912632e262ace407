// pathbake/svg/src/table.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Writes path records as a constant declaration that a C++ program can include verbatim.

use crate::record::PathRecord;
use pathbake_color::ColorF;
use pathbake_content::curve::Curve;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

/// The names used in the emitted declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct TableOptions {
    /// Name of the declared constant.
    pub name: String,
    /// Template used for both the outer list and each curve list.
    pub list_type: String,
    pub record_type: String,
    pub curve_type: String,
    pub line_ctor: String,
    pub quadratic_ctor: String,
    pub cubic_ctor: String,
}

impl Default for TableOptions {
    fn default() -> TableOptions {
        TableOptions {
            name: "tiger".to_owned(),
            list_type: "List".to_owned(),
            record_type: "Tiger_Path".to_owned(),
            curve_type: "Generic_Bezier".to_owned(),
            line_ctor: "generic_line".to_owned(),
            quadratic_ctor: "generic_quadratic".to_owned(),
            cubic_ctor: "generic_cubic".to_owned(),
        }
    }
}

pub struct TableWriter<'a> {
    options: &'a TableOptions,
}

impl<'a> TableWriter<'a> {
    #[inline]
    pub fn new(options: &'a TableOptions) -> TableWriter<'a> {
        TableWriter { options }
    }

    pub fn write<W>(&self, records: &[PathRecord], mut out: W) -> io::Result<()> where W: Write {
        let options = self.options;
        writeln!(out,
                 "auto {} = {}<{}>{{",
                 options.name,
                 options.list_type,
                 options.record_type)?;
        for record in records {
            self.write_record(record, &mut out)?;
        }
        writeln!(out, "}};")?;
        out.flush()
    }

    fn write_record<W>(&self, record: &PathRecord, out: &mut W) -> io::Result<()> where W: Write {
        writeln!(out, "{{")?;
        writeln!(out, "    {{")?;
        writeln!(out, "        {}<{}>{{", self.options.list_type, self.options.curve_type)?;
        for curve in &record.curves {
            writeln!(out, "            {}({}),", self.ctor(curve), Points(curve))?;
        }
        writeln!(out, "        }},")?;
        writeln!(out, "        {},", record.closed)?;
        writeln!(out, "    }},")?;
        writeln!(out, "    {},", Channels(record.fill))?;
        writeln!(out, "    {},", Channels(record.stroke))?;
        writeln!(out, "    {},", Float(record.stroke_width))?;
        writeln!(out, "}},")
    }

    fn ctor(&self, curve: &Curve) -> &'a str {
        match *curve {
            Curve::Line(_) => &self.options.line_ctor,
            Curve::Quadratic(_) => &self.options.quadratic_ctor,
            Curve::Cubic(_) => &self.options.cubic_ctor,
        }
    }
}

/// An `f32` literal: shortest round-trip digits plus the `f` suffix.
struct Float(f32);

impl Display for Float {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        // `Debug` always prints a fractional part or an exponent, so the suffix stays valid.
        write!(formatter, "{:?}f", self.0)
    }
}

struct Points<'c>(&'c Curve);

impl<'c> Display for Points<'c> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for (index, point) in self.0.points().iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{{{}, {}}}", Float(point.x()), Float(point.y()))?;
        }
        Ok(())
    }
}

struct Channels(ColorF);

impl Display for Channels {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let ColorF([r, g, b, a]) = self.0;
        write!(formatter, "{{ {}, {}, {}, {} }}", Float(r), Float(g), Float(b), Float(a))
    }
}
