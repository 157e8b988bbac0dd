use std::io;
use std::io::prelude::*;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::tools::peek::Lookahead;
use crate::tools::read_bytes;
use crate::Tags;

mod parser;
mod read;
pub(crate) mod regex;
mod structure;
mod tools;
mod v22;
mod v23;
mod v24;

use parser::FrameParser;
pub use structure::Header;

/// Read the ID3v2 tag at the start of `input`.
///
/// Returns `Ok(None)` when the stream does not start with "ID3". On success
/// `input` is left right behind the tag, at the start of the audio data.
pub fn get<R: Read>(input: R, options: ParseOptions) -> Result<Option<Tags>> {
    let mut input = Lookahead::new(input);
    let header = match read::header(&mut input)? {
        Some(h) => h,
        None => return Ok(None),
    };

    let mut region = (&mut input).take(header.size as u64);

    // with older id3 versions, undo unsynchronization on the whole tag
    let mut tags = if header.is_unsynchronized && header.version < 4 {
        let mut vec = read_bytes(&mut region, header.size as u64)?;
        tools::undo_unsynch(&mut vec);
        get_internal(io::Cursor::new(vec), &header, options)?
    } else {
        get_internal(&mut region, &header, options)?
    };

    // throw away the rest of the tag (padding)
    io::copy(&mut region, &mut io::sink())?;

    tags.header = Some(header);
    Ok(Some(tags))
}

fn get_internal<R: Read>(
    input: R,
    header: &structure::Header,
    options: ParseOptions,
) -> Result<Tags> {
    log::debug!(
        "Reading ID3v2.{} frames, tag size: {}",
        header.version,
        header.size
    );

    let mut tags = Tags::none();
    let mut parser = FrameParser::new(header.version, input, options)?;
    while parser.has_frame()? {
        parser.read_frame(&mut tags)?;
    }
    Ok(tags)
}

#[cfg(test)]
mod tests;
