// pathbake/content/src/lib.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Path segments, outlines, and the canonical curves they bake down to.

#![warn(missing_docs)]

#[macro_use]
extern crate bitflags;

pub mod curve;
pub mod outline;
pub mod segment;
