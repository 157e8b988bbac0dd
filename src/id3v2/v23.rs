use std::io::prelude::*;

use byteorder::{BigEndian, ByteOrder};

use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3v2::read::{self, FrameKind};
use crate::id3v2::structure::{FrameFlags, FrameHeader};
use crate::id3v2::tools::{decode_frame_id, is_frame_id};
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
        "TYER" => FrameKind::Field(TagField::Year),
        "TPOS" => FrameKind::Field(TagField::Disc),
        "TLEN" => FrameKind::Field(TagField::Length),

        "APIC" // Attached picture
        | "COMM" // Comment
        | "GEOB" // General encapsulated object
        | "PRIV" // Private
        | "MCDI" // Music CD identifier
        | "NCON" // MusicMatch
        | "POPM" // Popularimeter
        | "RGAD" // Replay gain adjustment
        | "RVAD" // Relative volume adjustment
        | "SYLT" // Synchronized lyrics/text transcription
        | "TBPM" // Beats per minute
        | "TCMP" // iTunes compilation
        | "TCOM" // Composer
        | "TCOP" // Copyright message
        | "TDAT" // Date of recording (DDMM)
        | "TDEN" // Encoding time
        | "TDTG" // Tagging time
        | "TENC" // Encoded by
        | "TFLT" // File type
        | "TIT1" // Content group description
        | "TIT3" // Subtitle/Description refinement
        | "TLAN" // Language
        | "TMED" // Media type
        | "TOPE" // Original artist
        | "TORY" // Original release year
        | "TPE2" // Band/Orchestra/Accompaniment
        | "TPE3" // Conductor
        | "TPUB" // Publisher
        | "TSIZ" // Size
        | "TSRC" // International recording code
        | "TSSE" // Software/Hardware encoder settings
        | "TXXX" // User defined text
        | "USER" // Terms of use
        | "UFID" // Unique file identifier
        | "USLT" // Unsynchronized lyrics/text transcription
        | "XSOP" // Performer sort order, pre v2.4
        | "WCOM" // Commercial information
        | "WOAF" // Official audio file webpage
        | "WXXX" // User defined URL
        => FrameKind::Skip,

        _ => FrameKind::Unknown,
    }
}

/// ID3v2.3: 4 character IDs, plain 4 byte sizes and 2 flag bytes
pub struct V23Parser<R> {
    reader: Lookahead<R>,
    options: ParseOptions,
}

impl<R: Read> V23Parser<R> {
    pub fn new(reader: Lookahead<R>, options: ParseOptions) -> Self {
        V23Parser { reader, options }
    }

    pub fn has_frame(&mut self) -> Result<bool> {
        Ok(matches!(self.reader.peek(4)?, Some(id) if is_frame_id(id)))
    }

    pub fn read_frame(&mut self, tags: &mut Tags) -> Result<()> {
        // 4: Frame ID      $xx xx xx xx
        // 4: Size          $xx xx xx xx (not synch-safe)
        // 2: Flags         $xx xx
        let arr = read_bytes(&mut self.reader, 4 + 4 + 2)?;
        let f = FrameHeader {
            name: decode_frame_id(&arr[0..4]),
            size: BigEndian::read_u32(&arr[4..8]),
            flags: FrameFlags::from_v3([arr[8], arr[9]]),
        };

        let kind = frame_kind(&f.name);
        read::frame(&mut self.reader, &f, kind, 3, tags, self.options)
    }
}
