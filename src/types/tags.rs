use std::time::Duration;

use crate::id3v2::regex::{get_genre_name, get_number_pair};
use crate::id3v2::Header;

/// Metadata read out of an ID3v2 tag.
///
/// Every field stays `None` unless a frame for it was found. When a tag
/// repeats a frame, the last one wins.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Tags {
    pub header: Option<Header>,

    pub name: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub track: Option<String>,
    pub disc: Option<String>,
    pub genre: Option<String>,
    // milliseconds, as written in TLEN
    pub length: Option<String>,
}

/// The fields a text frame can fill in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TagField {
    Name,
    Artist,
    Album,
    Year,
    Track,
    Disc,
    Genre,
    Length,
}

impl Tags {
    pub fn none() -> Tags {
        Default::default()
    }

    pub fn set(&mut self, field: TagField, value: String) {
        let slot = match field {
            TagField::Name => &mut self.name,
            TagField::Artist => &mut self.artist,
            TagField::Album => &mut self.album,
            TagField::Year => &mut self.year,
            TagField::Track => &mut self.track,
            TagField::Disc => &mut self.disc,
            TagField::Genre => &mut self.genre,
            TagField::Length => &mut self.length,
        };
        *slot = Some(value);
    }

    /// Track number and total, from "7" or "7/16"
    pub fn track_pair(&self) -> (Option<u32>, Option<u32>) {
        self.track
            .as_deref()
            .map_or((None, None), get_number_pair)
    }

    /// Disc number and total, from "1" or "1/2"
    pub fn disc_pair(&self) -> (Option<u32>, Option<u32>) {
        self.disc.as_deref().map_or((None, None), get_number_pair)
    }

    /// The genre with ID3v1 style numeric references resolved.
    pub fn genre_name(&self) -> Option<String> {
        self.genre.as_deref().map(get_genre_name)
    }

    pub fn duration(&self) -> Option<Duration> {
        self.length
            .as_deref()
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
    }
}
