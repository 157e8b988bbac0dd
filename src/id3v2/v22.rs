use std::io::prelude::*;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3v2::read::{self, FrameKind};
use crate::id3v2::structure::FrameHeader;
use crate::id3v2::tools::{decode_frame_id, is_frame_id};
use crate::tools::decode_int_be_u32;
use crate::tools::peek::Lookahead;
use crate::tools::read_bytes;
use crate::types::{TagField, Tags};

fn frame_kind(id: &str) -> FrameKind {
    match id {
        "TAL" => FrameKind::Field(TagField::Album),
        "TRK" => FrameKind::Field(TagField::Track),
        "TP1" => FrameKind::Field(TagField::Artist),
        "TT2" => FrameKind::Field(TagField::Name),
        "TYE" => FrameKind::Field(TagField::Year),
        "TPA" => FrameKind::Field(TagField::Disc),
        "TCO" => FrameKind::Field(TagField::Genre),

        "CM1"
        | "COM" // Comment
        | "IPP"
        | "PCS" // Podcast
        | "PIC" // Attached picture
        | "TCM" // Composer
        | "TCT" // Podcast category
        | "TDR" // iTunes release date
        | "TEN" // Encoded by
        | "TID" // Podcast identifier
        | "TP2" // Band/Orchestra/Accompaniment
        | "TT1" // Content group description
        | "UFI" // Unique file identifier
        | "ULT" // Unsynchronized lyrics/text transcription
        | "WFD" // Podcast feed URL
        => FrameKind::Skip,

        _ => FrameKind::Unknown,
    }
}

/// ID3v2.2: 3 character IDs, 3 byte sizes and no flags
pub struct V22Parser<R> {
    reader: Lookahead<R>,
    options: ParseOptions,
}

impl<R: Read> V22Parser<R> {
    pub fn new(reader: Lookahead<R>, options: ParseOptions) -> Self {
        V22Parser { reader, options }
    }

    pub fn has_frame(&mut self) -> Result<bool> {
        Ok(matches!(self.reader.peek(3)?, Some(id) if is_frame_id(id)))
    }

    pub fn read_frame(&mut self, tags: &mut Tags) -> Result<()> {
        // 3: Frame ID      $xx xx xx
        // 3: Size          $xx xx xx
        let arr = read_bytes(&mut self.reader, 3 + 3)?;
        let f = FrameHeader {
            name: decode_frame_id(&arr[0..3]),
            size: decode_int_be_u32(&arr[3..6]),
            ..Default::default()
        };

        let kind = frame_kind(&f.name);
        read::frame(&mut self.reader, &f, kind, 2, tags, self.options)
    }
}
