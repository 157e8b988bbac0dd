use std::io::prelude::*;

use crate::config::ParseOptions;
use crate::error::{Error, Result};
use crate::id3v2::structure::{FrameHeader, Header};
use crate::id3v2::tools::*;
use crate::tools::encoding::decode_text;
use crate::tools::peek::Lookahead;
use crate::tools::{read_bytes, skip_bytes};
use crate::types::{TagField, Tags};

/// What a frame ID means to a given ID3v2 version
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    /// A text frame that fills in one of the fields
    Field(TagField),
    /// Known, but nothing we read; the payload is skipped
    Skip,
    Unknown,
}

pub fn header<R: Read>(input: &mut Lookahead<R>) -> Result<Option<Header>> {
    // ID3v2/file identifier      "ID3"
    match input.peek(3)? {
        Some(b"ID3") => {}
        _ => return Ok(None),
    }

    let arr = read_bytes(input, 10)?;

    // ID3v2 version              $0X 00
    let version = arr[3];
    if version < 2 || version > 4 {
        return Err(Error::UnsupportedVersion(version));
    }

    // ID3v2 flags                %abcd0000
    let flags = arr[5];

    let header = Header {
        version,
        revision: arr[4],
        is_unsynchronized: flags & 0b1000_0000 != 0,
        has_extended_header: flags & 0b0100_0000 != 0,
        is_experimental: flags & 0b0010_0000 != 0,
        has_footer: flags & 0b0001_0000 != 0,
        size: decode_synch_int(&[arr[6], arr[7], arr[8], arr[9]]),
    };

    log::debug!("Found ID3v2 header: {:?}", header);
    Ok(Some(header))
}

// the payload of a text frame, with grouping bytes, data length indicators
// and unsynchronization taken care of. None if the frame was skipped instead.
fn text_payload<R: Read>(input: &mut R, f: &FrameHeader, version: u8) -> Result<Option<Vec<u8>>> {
    if f.flags.compression || f.flags.encryption {
        log::warn!(
            "Skipping {} frame: compressed or encrypted text is not supported",
            f.name
        );
        skip_bytes(input, f.size as u64)?;
        return Ok(None);
    }

    let mut vec = read_bytes(input, f.size as u64)?;

    let mut extra = 0;
    if f.flags.grouping {
        extra += 1;
    }
    if version == 4 && f.flags.data_length_indicator {
        extra += 4;
    }
    vec.drain(..extra.min(vec.len()));

    if version == 4 && f.flags.unsynchronization {
        undo_unsynch(&mut vec);
    }
    Ok(Some(vec))
}

fn read_text_frame<R: Read>(
    input: &mut R,
    f: &FrameHeader,
    version: u8,
    field: TagField,
    tags: &mut Tags,
    options: ParseOptions,
) -> Result<()> {
    let vec = match text_payload(input, f, version)? {
        Some(vec) => vec,
        None => return Ok(()),
    };

    match decode_text(&vec) {
        Ok(s) => tags.set(field, s),
        // the payload is already consumed, so the following frames are still in place
        Err(e @ Error::MalformedText(_)) | Err(e @ Error::UnsupportedEncoding(_))
            if !options.is_strict() =>
        {
            log::warn!("Ignoring {} frame: {}", f.name, e);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Consume the payload of a frame whose header was just read.
pub fn frame<R: Read>(
    input: &mut R,
    f: &FrameHeader,
    kind: FrameKind,
    version: u8,
    tags: &mut Tags,
    options: ParseOptions,
) -> Result<()> {
    log::trace!("Frame {}, size={}, {:?}", f.name, f.size, kind);

    match kind {
        FrameKind::Field(field) => read_text_frame(input, f, version, field, tags, options),
        FrameKind::Skip => skip_bytes(input, f.size as u64),
        FrameKind::Unknown if options.is_strict() => Err(Error::UnrecognizedFrame {
            id: f.name.clone(),
            size: f.size,
        }),
        FrameKind::Unknown => {
            log::warn!("Skipping unrecognized frame {}, size={}", f.name, f.size);
            skip_bytes(input, f.size as u64)
        }
    }
}
