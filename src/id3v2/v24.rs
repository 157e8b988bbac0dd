use std::io::prelude::*;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3v2::read::{self, FrameKind};
use crate::id3v2::structure::{FrameFlags, FrameHeader};
use crate::id3v2::tools::{decode_frame_id, decode_synch_int, is_frame_id};
use crate::tools::peek::Lookahead;
use crate::tools::read_bytes;
use crate::types::{TagField, Tags};

fn frame_kind(id: &str) -> FrameKind {
    match id {
        "TALB" => FrameKind::Field(TagField::Album),
        "TRCK" => FrameKind::Field(TagField::Track),
        "TPE1" => FrameKind::Field(TagField::Artist),
        "TCON" => FrameKind::Field(TagField::Genre),
        "TIT2" => FrameKind::Field(TagField::Name),
        // TODO: parse the timestamp instead of passing it through as the year
        "TDRC" => FrameKind::Field(TagField::Year),
        "TPOS" => FrameKind::Field(TagField::Disc),
        "TLEN" => FrameKind::Field(TagField::Length),

        "APIC" // Attached picture
        | "COMM" // Comment
        | "MCDI" // Music CD identifier
        | "PRIV" // Private
        | "RVA2" // Relative volume adjustment (2)
        | "TCMP" // iTunes compilation
        | "TCOM" // Composer
        | "TCOP" // Copyright message
        | "TDEN" // Encoding time
        | "TDTG" // Tagging time
        | "TENC" // Encoded by
        | "TLAN" // Language
        | "TPE2" // Band/Orchestra/Accompaniment
        | "TPUB" // Publisher
        | "TSOP" // Performer sort order
        | "TSRC" // International recording code
        | "TSSE" // Software/Hardware encoder settings
        | "TXXX" // User defined text
        | "UFID" // Unique file identifier
        | "WXXX" // User defined URL
        => FrameKind::Skip,

        _ => FrameKind::Unknown,
    }
}

/// ID3v2.4: 4 character IDs, synch-safe sizes and 2 flag bytes
pub struct V24Parser<R> {
    reader: Lookahead<R>,
    options: ParseOptions,
}

impl<R: Read> V24Parser<R> {
    pub fn new(reader: Lookahead<R>, options: ParseOptions) -> Self {
        V24Parser { reader, options }
    }

    pub fn has_frame(&mut self) -> Result<bool> {
        Ok(matches!(self.reader.peek(4)?, Some(id) if is_frame_id(id)))
    }

    pub fn read_frame(&mut self, tags: &mut Tags) -> Result<()> {
        // 4: Frame ID      $xx xx xx xx
        // 4: Size      4 * %0xxxxxxx
        // 2: Flags         $xx xx
        let arr = read_bytes(&mut self.reader, 4 + 4 + 2)?;
        let f = FrameHeader {
            name: decode_frame_id(&arr[0..4]),
            size: decode_synch_int(&[arr[4], arr[5], arr[6], arr[7]]),
            flags: FrameFlags::from_v4([arr[8], arr[9]]),
        };

        let kind = frame_kind(&f.name);
        read::frame(&mut self.reader, &f, kind, 4, tags, self.options)
    }
}
