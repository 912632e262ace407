// pathbake/svg/src/lib.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bakes the `path` elements of an SVG document into a flat table of path records.
//!
//! Only the `fill`, `stroke` and `stroke-width` presentation attributes are honored. They are
//! inherited down the element tree.

#[macro_use]
extern crate log;

pub mod error;
pub mod path_data;
pub mod record;
pub mod style;
pub mod table;

pub use crate::error::Error;
pub use crate::record::PathRecord;
pub use crate::style::StyleContext;
pub use crate::table::{TableOptions, TableWriter};

use crate::style::DeclaredStyle;
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

const SVG_TAG: &str = "svg";
const PATH_TAG: &str = "path";

/// The records of every path in a document, in document order.
#[derive(Clone, Debug, Default)]
pub struct PathTable {
    records: Vec<PathRecord>,
    attribute_names: BTreeSet<String>,
}

impl PathTable {
    /// Reads and converts the SVG file at `path`.
    pub fn from_file<P>(path: P) -> Result<PathTable, Error> where P: AsRef<Path> {
        fs::read_to_string(path)?.parse()
    }

    /// Converts a parsed document, starting at its first `svg` element.
    pub fn from_document(document: &Document) -> Result<PathTable, Error> {
        let svg = document.descendants()
                          .find(|node| node.is_element() && node.tag_name().name() == SVG_TAG)
                          .ok_or(Error::MissingSvgElement)?;
        PathTable::from_node(svg)
    }

    /// Converts the subtree rooted at `root`, which starts with the default style.
    pub fn from_node(root: Node) -> Result<PathTable, Error> {
        let mut table = PathTable::default();
        process_node(&mut table, root, &StyleContext::default())?;
        Ok(table)
    }

    #[inline]
    pub fn records(&self) -> &[PathRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The names of all attributes seen on the visited elements, whether honored or not.
    #[inline]
    pub fn attribute_names(&self) -> &BTreeSet<String> {
        &self.attribute_names
    }

    pub fn write_to<W>(&self, out: W, options: &TableOptions) -> io::Result<()> where W: Write {
        TableWriter::new(options).write(&self.records, out)
    }
}

impl FromStr for PathTable {
    type Err = Error;

    fn from_str(text: &str) -> Result<PathTable, Error> {
        let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
        let document = Document::parse_with_options(text, options)?;
        PathTable::from_document(&document)
    }
}

fn process_node(table: &mut PathTable, node: Node, style: &StyleContext) -> Result<(), Error> {
    if !node.is_element() {
        return Ok(());
    }

    for attribute in node.attributes() {
        if !table.attribute_names.contains(attribute.name()) {
            table.attribute_names.insert(attribute.name().to_owned());
        }
    }

    let style = style.derive(&DeclaredStyle::from_node(node));

    if node.tag_name().name() == PATH_TAG {
        let path_data = node.attribute("d").unwrap_or("");
        match PathRecord::build(path_data, &style)? {
            Some(record) => {
                debug!("path {}: {} segments, closed={}",
                       table.records.len(),
                       record.curves.len(),
                       record.closed);
                table.records.push(record);
            }
            None => {
                warn!("skipping path {:?} with no segments",
                      node.attribute("id").unwrap_or("<unnamed>"));
            }
        }
    }

    for kid in node.children() {
        process_node(table, kid, &style)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{Error, PathTable};
    use pathbake_color::{ColorF, ColorParseError};
    use pathbake_content::curve::Curve;
    use pathbake_geometry::vector::vec2f;

    fn convert(text: &str) -> PathTable {
        text.parse().unwrap()
    }

    fn first_points(table: &PathTable) -> Vec<(f32, f32)> {
        table.records().iter().map(|record| {
            let point = record.curves[0].points()[0];
            (point.x(), point.y())
        }).collect()
    }

    #[test]
    fn test_sibling_order() {
        let table = convert(r##"<svg xmlns="http://www.w3.org/2000/svg">
            <path d="M1 0 L2 0"/>
            <path d="M2 0 L3 0"/>
            <path d="M3 0 L4 0"/>
        </svg>"##);
        assert_eq!(first_points(&table), vec![(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    }

    #[test]
    fn test_pre_order() {
        let table = convert(r##"<svg>
            <g>
                <path d="M1 0 L0 0"/>
                <g><path d="M2 0 L0 0"/></g>
            </g>
            <path d="M3 0 L0 0">
                <path d="M4 0 L0 0"/>
            </path>
            <path d="M5 0 L0 0"/>
        </svg>"##);
        assert_eq!(first_points(&table),
                   vec![(1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0), (5.0, 0.0)]);
    }

    #[test]
    fn test_style_accumulates_down_the_tree() {
        let table = convert(r##"<svg fill="#ff0000">
            <g stroke="#00f" stroke-width="2">
                <g>
                    <path d="M0 0 L1 1"/>
                    <path fill="none" d="M0 0 L1 1">
                        <path d="M0 0 L1 1"/>
                        <path fill="#fff" d="M0 0 L1 1"/>
                    </path>
                </g>
            </g>
            <path d="M0 0 L1 1"/>
        </svg>"##);
        let records = table.records();
        assert_eq!(records.len(), 5);

        let red = ColorF::new(1.0, 0.0, 0.0, 1.0);
        let blue = ColorF::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!((records[0].fill, records[0].stroke, records[0].stroke_width), (red, blue, 2.0));
        assert_eq!(records[1].fill, ColorF::transparent_black());
        assert_eq!(records[1].stroke, blue);
        assert_eq!(records[2].fill, ColorF::transparent_black());
        assert_eq!(records[3].fill, ColorF::new(1.0, 1.0, 1.0, 1.0));

        // The sibling subtree never saw the stroke declared inside the group.
        assert_eq!((records[4].fill, records[4].stroke, records[4].stroke_width),
                   (red, ColorF::transparent_black(), 1.0));
    }

    #[test]
    fn test_stroke_width_without_stroke() {
        let table = convert(r##"<svg stroke-width="4"><g><path d="M0 0 L1 0"/></g></svg>"##);
        let record = &table.records()[0];
        assert_eq!(record.stroke, ColorF::transparent_black());
        assert_eq!(record.stroke_width, 4.0);
    }

    #[test]
    fn test_walk_starts_at_first_svg_element() {
        let table = convert(r##"<root>
            <path d="M9 9 L0 0"/>
            <svg><path d="M1 1 L0 0"/></svg>
            <svg><path d="M2 2 L0 0"/></svg>
        </root>"##);
        assert_eq!(first_points(&table), vec![(1.0, 1.0)]);
    }

    #[test]
    fn test_skips_text_comments_and_empty_paths() {
        let table = convert(r##"<svg>
            text <!-- comment -->
            <path id="empty" d=""/>
            <path id="missing"/>
            <path d="M0 0 L0 5 L5 5 Z" fill="#123"/>
        </svg>"##);
        assert_eq!(table.len(), 1);
        let record = &table.records()[0];
        assert!(record.closed);
        assert_eq!(record.curves[2], Curve::Line([vec2f(5.0, 5.0), vec2f(0.0, 0.0)]));
        assert_eq!(record.fill, ColorF::from_hex("#112233").unwrap());
    }

    #[test]
    fn test_attribute_census() {
        let table = convert(r##"<svg width="10"><path d="M0 0 L1 1" opacity="0.5"/></svg>"##);
        let names = table.attribute_names().iter().cloned().collect::<Vec<_>>();
        assert_eq!(names, vec!["d", "opacity", "width"]);
    }

    #[test]
    fn test_errors_abort_the_whole_conversion() {
        let result = r##"<svg>
            <path d="M0 0 L1 1" fill="#fff"/>
            <path d="M0 0 L1 1" fill="#ffff"/>
        </svg>"##.parse::<PathTable>();
        match result {
            Err(Error::Color(ColorParseError::BadLength(ref token))) => assert_eq!(token, "#ffff"),
            other => panic!("unexpected result: {:?}", other),
        }

        match "<g><path d='M0 0 L1 1'/></g>".parse::<PathTable>() {
            Err(Error::MissingSvgElement) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match "<svg><path d='M0 0 L1 1'></svg>".parse::<PathTable>() {
            Err(Error::Xml(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
