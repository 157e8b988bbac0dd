use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::id3v2;
use crate::ParseOptions;
use crate::Tags;

pub fn get_tags<P: AsRef<Path>>(path: P) -> Result<Option<Tags>> {
    get_tags_with_options(path, ParseOptions::new())
}

pub fn get_tags_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Option<Tags>> {
    let path = path.as_ref();
    log::debug!("Reading {}", path.display());

    let file = File::open(path)?;
    id3v2::get(BufReader::new(file), options)
}
