// pathbake/utils/svg-to-table/src/main.rs
//
// Copyright © 2026 The Pathbake Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints the paths of an SVG file as a constant table for inclusion in C++ source.

#[macro_use]
extern crate log;

use clap::{App, Arg};
use pathbake_svg::{PathTable, TableOptions};
use std::error::Error;
use std::io::{self, BufWriter};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = App::new("svg-to-table")
        .arg(Arg::with_name("INPUT").help("Path to the SVG file to bake")
                                    .required(true)
                                    .index(1))
        .get_matches();
    let input_path = PathBuf::from(matches.value_of_os("INPUT").ok_or("no input given")?);

    let table = PathTable::from_file(&input_path)?;
    info!("{}: {} paths", input_path.display(), table.len());
    debug!("attributes seen: {:?}", table.attribute_names());

    let stdout = io::stdout();
    table.write_to(BufWriter::new(stdout.lock()), &TableOptions::default())?;
    Ok(())
}
