use std::io::prelude::*;

use crate::config::ParseOptions;
use crate::error::{Error, Result};
use crate::id3v2::v22::V22Parser;
use crate::id3v2::v23::V23Parser;
use crate::id3v2::v24::V24Parser;
use crate::tools::peek::Lookahead;
use crate::types::Tags;

/// Frame reader for one of the three incompatible ID3v2 frame layouts,
/// picked once from the tag header.
pub enum FrameParser<R> {
    V22(V22Parser<R>),
    V23(V23Parser<R>),
    V24(V24Parser<R>),
}

impl<R: Read> FrameParser<R> {
    pub fn new(version: u8, reader: R, options: ParseOptions) -> Result<Self> {
        let reader = Lookahead::new(reader);
        Ok(match version {
            2 => FrameParser::V22(V22Parser::new(reader, options)),
            3 => FrameParser::V23(V23Parser::new(reader, options)),
            4 => FrameParser::V24(V24Parser::new(reader, options)),
            _ => return Err(Error::UnsupportedVersion(version)),
        })
    }

    /// Whether the next bytes look like a frame ID. Padding, garbage and the
    /// end of the tag all end the frame loop.
    pub fn has_frame(&mut self) -> Result<bool> {
        match self {
            FrameParser::V22(p) => p.has_frame(),
            FrameParser::V23(p) => p.has_frame(),
            FrameParser::V24(p) => p.has_frame(),
        }
    }

    pub fn read_frame(&mut self, tags: &mut Tags) -> Result<()> {
        match self {
            FrameParser::V22(p) => p.read_frame(tags),
            FrameParser::V23(p) => p.read_frame(tags),
            FrameParser::V24(p) => p.read_frame(tags),
        }
    }
}
