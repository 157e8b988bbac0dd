//! Read title, artist, album and friends out of the ID3v2 tag at the start
//! of an audio file.
//!
//! ```rust,no_run
//! let tags = id3_tagreader::get_tags("song.mp3").unwrap();
//! if let Some(tags) = tags {
//!     println!("{:?}", tags.name);
//! }
//! ```

#[macro_use]
extern crate lazy_static;

mod config;
mod error;
mod types;

pub use crate::config::{ParseOptions, ParsingMode};
pub use crate::error::{Error, Result};
pub use crate::id3v2::Header;
pub use crate::types::{TagField, Tags};

mod id3v2;

mod dispatch;
mod tools;


pub use crate::dispatch::get_tags;
pub use crate::dispatch::get_tags_with_options;

use std::io::Read;

/// Read the tag at the start of `reader` with the default (strict) options.
///
/// `Ok(None)` means the stream has no ID3v2 tag.
pub fn read_from<R: Read>(reader: R) -> Result<Option<Tags>> {
    id3v2::get(reader, ParseOptions::new())
}

pub fn read_from_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Option<Tags>> {
    id3v2::get(reader, options)
}
