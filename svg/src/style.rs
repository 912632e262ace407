// pathbake/svg/src/style.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Inherited presentation attributes.

use roxmltree::Node;

pub const DEFAULT_STROKE_WIDTH: &str = "1.0";

const NONE_PAINT: &str = "none";

/// The style visible to one element: what it declares, falling back to what its ancestors
/// declared.
///
/// Tokens are kept unparsed; they are only decoded when a path record needs them.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleContext {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: String,
}

impl Default for StyleContext {
    fn default() -> StyleContext {
        StyleContext { fill: None, stroke: None, stroke_width: DEFAULT_STROKE_WIDTH.to_owned() }
    }
}

impl StyleContext {
    /// Returns the context for an element that declares `declared`, given this context as its
    /// parent's.
    ///
    /// `fill="none"` and `stroke="none"` clear an inherited paint. Missing or empty attributes
    /// inherit.
    pub fn derive(&self, declared: &DeclaredStyle) -> StyleContext {
        StyleContext {
            fill: derive_paint(&self.fill, declared.fill),
            stroke: derive_paint(&self.stroke, declared.stroke),
            stroke_width: match declared.stroke_width {
                Some(stroke_width) if !stroke_width.is_empty() => stroke_width.to_owned(),
                _ => self.stroke_width.clone(),
            },
        }
    }
}

fn derive_paint(inherited: &Option<String>, declared: Option<&str>) -> Option<String> {
    match declared {
        Some(NONE_PAINT) => None,
        Some(token) if !token.is_empty() => Some(token.to_owned()),
        _ => inherited.clone(),
    }
}

/// The raw style attributes an element declares itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeclaredStyle<'a> {
    pub fill: Option<&'a str>,
    pub stroke: Option<&'a str>,
    pub stroke_width: Option<&'a str>,
}

impl<'a> DeclaredStyle<'a> {
    pub fn from_node<'input>(node: Node<'a, 'input>) -> DeclaredStyle<'a> {
        DeclaredStyle {
            fill: node.attribute("fill"),
            stroke: node.attribute("stroke"),
            stroke_width: node.attribute("stroke-width"),
        }
    }
}
