
use std::io::prelude::*;
use std::io::Cursor;

use crate::id3v2::read;
use crate::id3v2::tools::encode_synch_int;
use crate::id3v2::v23::V23Parser;
use crate::tools::peek::Lookahead;
use crate::Error;
use crate::Header;
use crate::ParseOptions;
use crate::ParsingMode;
use crate::Tags;

fn tag(version: u8, flags: u8, frames: &[u8], padding: usize) -> Vec<u8> {
    let mut vec = b"ID3".to_vec();
    vec.extend_from_slice(&[version, 0x00, flags]);
    vec.extend_from_slice(&encode_synch_int((frames.len() + padding) as u32).unwrap());
    vec.extend_from_slice(frames);
    vec.resize(vec.len() + padding, 0);
    vec
}

fn v22_frame(id: &str, payload: &[u8]) -> Vec<u8> {
    let size = payload.len() as u32;
    let mut vec = id.as_bytes().to_vec();
    vec.extend_from_slice(&[(size >> 16) as u8, (size >> 8) as u8, size as u8]);
    vec.extend_from_slice(payload);
    vec
}

fn v23_frame(id: &str, flags: [u8; 2], payload: &[u8]) -> Vec<u8> {
    let mut vec = id.as_bytes().to_vec();
    vec.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    vec.extend_from_slice(&flags);
    vec.extend_from_slice(payload);
    vec
}

fn v24_frame(id: &str, flags: [u8; 2], payload: &[u8]) -> Vec<u8> {
    let mut vec = id.as_bytes().to_vec();
    vec.extend_from_slice(&encode_synch_int(payload.len() as u32).unwrap());
    vec.extend_from_slice(&flags);
    vec.extend_from_slice(payload);
    vec
}

// utf-8 text payload
fn text(s: &str) -> Vec<u8> {
    let mut vec = vec![0x03];
    vec.extend_from_slice(s.as_bytes());
    vec
}

fn latin1(s: &str) -> Vec<u8> {
    let mut vec = vec![0x00];
    vec.extend_from_slice(s.as_bytes());
    vec.push(0x00);
    vec
}

fn parse(data: &[u8]) -> crate::Result<Option<Tags>> {
    super::get(Cursor::new(data), ParseOptions::new())
}

fn parse_relaxed(data: &[u8]) -> crate::Result<Option<Tags>> {
    super::get(
        Cursor::new(data),
        ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
    )
}

#[test]
fn header_test() {
    let mut input = Lookahead::new(Cursor::new(b"ID3\x04\x00\x00\x00\x00\x00\x10".to_vec()));
    let header = read::header(&mut input).unwrap().unwrap();
    assert_eq!(
        header,
        Header {
            version: 4,
            revision: 0,
            is_unsynchronized: false,
            has_extended_header: false,
            is_experimental: false,
            has_footer: false,
            size: 16,
        }
    );
    assert_eq!(header.to_string(), "ID3v2.4.0, 16 bytes");
}

#[test]
fn header_flags_test() {
    let mut input = Lookahead::new(Cursor::new(b"ID3\x03\x01\xF0\x00\x00\x02\x01".to_vec()));
    let header = read::header(&mut input).unwrap().unwrap();
    assert_eq!(header.version, 3);
    assert_eq!(header.revision, 1);
    assert!(header.is_unsynchronized);
    assert!(header.has_extended_header);
    assert!(header.is_experimental);
    assert!(header.has_footer);
    assert_eq!(header.size, 257);
    assert_eq!(
        header.to_string(),
        "ID3v2.3.1, 257 bytes, unsynchronized, extended header, experimental, footer"
    );
}

#[test]
fn not_a_tag_test() {
    for version in 2..=4 {
        let mut data = tag(version, 0, &v23_frame("TIT2", [0, 0], &text("x")), 0);
        data[0] = b'X';
        assert!(parse(&data).unwrap().is_none());
    }
    assert!(parse(b"TAG").unwrap().is_none());
    assert!(parse(b"ID").unwrap().is_none());
    assert!(parse(b"").unwrap().is_none());
    assert!(parse(b"\xFF\xFB\x90\x64").unwrap().is_none());
}

#[test]
fn unsupported_version_test() {
    for version in [0u8, 1, 5, 0xFF].iter() {
        let data = tag(*version, 0, &[], 4);
        assert!(matches!(
            parse(&data),
            Err(Error::UnsupportedVersion(v)) if v == *version
        ));
    }
}

#[test]
fn truncated_header_test() {
    assert!(matches!(
        parse(b"ID3\x04\x00"),
        Err(Error::TruncatedStream {
            expected: 10,
            found: 5
        })
    ));
}

#[test]
fn v23_frame_consumes_exact_size_test() {
    let payload = text("Test Name");
    let mut data = v23_frame("TIT2", [0, 0], &payload);
    data.extend_from_slice(b"TPE1 next frame");

    let mut cursor = Cursor::new(data);
    let mut tags = Tags::none();
    {
        let mut parser = V23Parser::new(Lookahead::new(&mut cursor), ParseOptions::new());
        assert!(parser.has_frame().unwrap());
        parser.read_frame(&mut tags).unwrap();
    }

    assert_eq!(tags.name.as_deref(), Some("Test Name"));
    assert_eq!(cursor.position(), 10 + payload.len() as u64);
}

#[test]
fn v22_read_test() {
    let mut frames = Vec::new();
    frames.extend(v22_frame("TT2", &latin1("example song")));
    frames.extend(v22_frame("TP1", &text("example artist")));
    frames.extend(v22_frame("TAL", &[0x01, 0xFF, 0xFE, b'a', 0, b'l', 0, b'b', 0]));
    frames.extend(v22_frame("PIC", &[0x00, b'J', b'P', b'G', 0x03, 0x00, 0xFF, 0xD8]));
    frames.extend(v22_frame("TYE", &latin1("2017")));
    frames.extend(v22_frame("TRK", &latin1("21/24")));
    frames.extend(v22_frame("TPA", &latin1("1/2")));
    frames.extend(v22_frame("TCO", &latin1("(17)")));
    frames.extend(v22_frame("COM", &[0x00, b'e', b'n', b'g', 0x00, b'h', b'i']));

    let tags = parse(&tag(2, 0, &frames, 32)).unwrap().unwrap();

    let ideal = Tags {
        header: tags.header.clone(),
        name: Some("example song".to_string()),
        artist: Some("example artist".to_string()),
        album: Some("alb".to_string()),
        year: Some("2017".to_string()),
        track: Some("21/24".to_string()),
        disc: Some("1/2".to_string()),
        genre: Some("(17)".to_string()),
        length: None,
    };
    assert_eq!(tags, ideal);
    assert_eq!(tags.header.as_ref().map(|h| h.version), Some(2));
}

#[test]
fn v22_unrecognized_frame_test() {
    let mut frames = v22_frame("TT2", &latin1("song"));
    frames.extend(v22_frame("XYZ", &[1, 2, 3]));
    let data = tag(2, 0, &frames, 0);

    match parse(&data) {
        Err(Error::UnrecognizedFrame { id, size }) => {
            assert_eq!(id, "XYZ");
            assert_eq!(size, 3);
        }
        other => panic!("Expected an unrecognized frame, got {:?}", other),
    }
}

#[test_log::test]
fn relaxed_unrecognized_frame_test() {
    let mut frames = v22_frame("XYZ", &[1, 2, 3]);
    frames.extend(v22_frame("TT2", &latin1("song")));
    let data = tag(2, 0, &frames, 0);

    let tags = parse_relaxed(&data).unwrap().unwrap();
    assert_eq!(tags.name.as_deref(), Some("song"));
}

#[test]
fn v23_read_test() {
    let mut frames = Vec::new();
    frames.extend(v23_frame("TIT2", [0, 0], &text("NEXT FLIP FLAPPING！")));
    frames.extend(v23_frame("TPE1", [0, 0], &text("TO-MAS")));
    frames.extend(v23_frame("TALB", [0, 0], &text("Flip Flappers OST")));
    frames.extend(v23_frame("APIC", [0, 0], &[0x00, 0x89, 0x50, 0x4E, 0x47, 0x00, 0x0D]));
    frames.extend(v23_frame("TYER", [0, 0], &latin1("2017")));
    frames.extend(v23_frame("TRCK", [0, 0], &latin1("21")));
    frames.extend(v23_frame("TPOS", [0, 0], &latin1("1/2")));
    frames.extend(v23_frame("TCON", [0, 0], &latin1("Anime")));
    frames.extend(v23_frame("TLEN", [0, 0], &latin1("215000")));
    frames.extend(v23_frame("TXXX", [0, 0], &text("desc\0value")));

    let tags = parse(&tag(3, 0, &frames, 100)).unwrap().unwrap();

    assert_eq!(tags.name.as_deref(), Some("NEXT FLIP FLAPPING！"));
    assert_eq!(tags.artist.as_deref(), Some("TO-MAS"));
    assert_eq!(tags.album.as_deref(), Some("Flip Flappers OST"));
    assert_eq!(tags.year.as_deref(), Some("2017"));
    assert_eq!(tags.track.as_deref(), Some("21"));
    assert_eq!(tags.disc.as_deref(), Some("1/2"));
    assert_eq!(tags.genre.as_deref(), Some("Anime"));
    assert_eq!(tags.length.as_deref(), Some("215000"));
}

#[test_log::test]
fn v23_flagged_frames_test() {
    let mut frames = Vec::new();
    // compressed: can't be read as text, skipped
    frames.extend(v23_frame("TIT2", [0x00, 0x80], &[0, 0, 0, 9, 0x78, 0x9C, 0x01]));
    // grouping: one group byte before the text
    frames.extend(v23_frame("TPE1", [0x00, 0x20], &[0x07, 0x00, b'A', b'r', b't']));

    let tags = parse(&tag(3, 0, &frames, 0)).unwrap().unwrap();
    assert_eq!(tags.name, None);
    assert_eq!(tags.artist.as_deref(), Some("Art"));
}

#[test]
fn v23_unsynchronized_tag_test() {
    // TIT2 holding latin-1 "ÿB", written with FF 00 unsynchronization
    let mut frames = v23_frame("TIT2", [0, 0], &[0x00, 0xFF, b'B']);
    frames.insert(frames.len() - 1, 0x00);
    frames.extend(v23_frame("TPE1", [0, 0], &latin1("Nina Simone")));

    let tags = parse(&tag(3, 0x80, &frames, 10)).unwrap().unwrap();
    assert_eq!(tags.name.as_deref(), Some("ÿB"));
    assert_eq!(tags.artist.as_deref(), Some("Nina Simone"));
    assert!(tags.header.unwrap().is_unsynchronized);
}

#[test]
fn v24_read_test() {
    let long_title = "Test Name ".repeat(20);

    let mut frames = Vec::new();
    frames.extend(v24_frame("TIT2", [0, 0], &text(&long_title)));
    frames.extend(v24_frame("TPE1", [0, 0], &text("伊賀拓郎")));
    frames.extend(v24_frame("TALB", [0, 0], &text("Test Album")));
    frames.extend(v24_frame("TDRC", [0, 0], &text("2008-12-29")));
    frames.extend(v24_frame("TRCK", [0, 0], &text("7/16")));
    frames.extend(v24_frame("TPOS", [0, 0], &text("3/4")));
    frames.extend(v24_frame("TCON", [0, 0], &text("Classical")));
    frames.extend(v24_frame("TLEN", [0, 0], &text("1000")));
    frames.extend(v24_frame("APIC", [0, 0], &vec![0xFF; 5000]));
    frames.extend(v24_frame("RVA2", [0, 0], &[0x00, 0x01, 0x02]));

    let tags = parse(&tag(4, 0, &frames, 512)).unwrap().unwrap();

    assert_eq!(tags.name.as_deref(), Some(long_title.as_str()));
    assert_eq!(tags.artist.as_deref(), Some("伊賀拓郎"));
    assert_eq!(tags.album.as_deref(), Some("Test Album"));
    assert_eq!(tags.year.as_deref(), Some("2008-12-29"));
    assert_eq!(tags.track_pair(), (Some(7), Some(16)));
    assert_eq!(tags.disc_pair(), (Some(3), Some(4)));
    assert_eq!(tags.genre.as_deref(), Some("Classical"));
    assert_eq!(tags.length.as_deref(), Some("1000"));
}

#[test]
fn v24_tyer_is_unrecognized_test() {
    let frames = v24_frame("TYER", [0, 0], &text("2017"));
    assert!(matches!(
        parse(&tag(4, 0, &frames, 0)),
        Err(Error::UnrecognizedFrame { .. })
    ));
}

#[test]
fn v24_frame_flags_test() {
    let mut frames = Vec::new();
    // data length indicator + unsynchronization: latin-1 "ÿA"
    frames.extend(v24_frame(
        "TIT2",
        [0x00, 0x03],
        &[0x00, 0x00, 0x00, 0x03, 0x00, 0xFF, 0x00, b'A'],
    ));
    // encrypted, skipped
    frames.extend(v24_frame("TALB", [0x00, 0x04], &[0x80, 0x12, 0x34]));

    let tags = parse(&tag(4, 0, &frames, 0)).unwrap().unwrap();
    assert_eq!(tags.name.as_deref(), Some("ÿA"));
    assert_eq!(tags.album, None);
}

#[test]
fn last_frame_wins_test() {
    let mut frames = v24_frame("TIT2", [0, 0], &text("first"));
    frames.extend(v24_frame("TIT2", [0, 0], &text("second")));

    let tags = parse(&tag(4, 0, &frames, 0)).unwrap().unwrap();
    assert_eq!(tags.name.as_deref(), Some("second"));
}

#[test]
fn padding_ends_frames_test() {
    let mut frames = v23_frame("TIT2", [0, 0], &text("x"));
    // garbage that isn't a frame ID stops the loop the same way padding does
    frames.extend_from_slice(b"junk");
    frames.extend(v23_frame("XXXX", [0, 0], &[0; 4]));

    let tags = parse(&tag(3, 0, &frames, 0)).unwrap().unwrap();
    assert_eq!(tags.name.as_deref(), Some("x"));
}

#[test]
fn empty_tag_test() {
    let tags = parse(&tag(3, 0, &[], 0)).unwrap().unwrap();
    assert_eq!(
        tags,
        Tags {
            header: tags.header.clone(),
            ..Tags::none()
        }
    );
    assert_eq!(tags.header.unwrap().size, 0);
}

#[test]
fn truncated_frame_test() {
    // the frame claims more than the tag holds
    let mut frames = v23_frame("TIT2", [0, 0], &text("Test Name"));
    frames.truncate(frames.len() - 4);

    assert!(matches!(
        parse(&tag(3, 0, &frames, 0)),
        Err(Error::TruncatedStream { .. })
    ));

    // and the stream ends before the tag does
    let mut data = tag(3, 0, &v23_frame("APIC", [0, 0], &[0; 64]), 0);
    data.truncate(40);
    assert!(matches!(parse(&data), Err(Error::TruncatedStream { .. })));
}

#[test]
fn malformed_text_test() {
    let frames = v24_frame("TIT2", [0, 0], &[0x01, 0x12, 0x34, 0x41, 0x00]);
    let data = tag(4, 0, &frames, 0);
    assert!(matches!(parse(&data), Err(Error::MalformedText(_))));

    let frames = v23_frame("TIT2", [0, 0], &[0x02, 0x00, 0x41]);
    let data = tag(3, 0, &frames, 0);
    assert!(matches!(parse(&data), Err(Error::UnsupportedEncoding(2))));
}

#[test_log::test]
fn relaxed_malformed_text_test() {
    let mut frames = v24_frame("TIT2", [0, 0], &[0x02, 0x00, 0x41]);
    frames.extend(v24_frame("TPE1", [0, 0], &text("artist")));

    let tags = parse_relaxed(&tag(4, 0, &frames, 0)).unwrap().unwrap();
    assert_eq!(tags.name, None);
    assert_eq!(tags.artist.as_deref(), Some("artist"));
}

#[test]
fn stops_at_end_of_tag_test() {
    let frames = v24_frame("TIT2", [0, 0], &text("x"));
    let mut data = tag(4, 0, &frames, 6);
    let tag_len = data.len() as u64;
    // audio data right after the tag looks nothing like a frame
    data.extend_from_slice(b"\xFF\xFB\x90\x64TIT2");

    let mut cursor = Cursor::new(data);
    let tags = super::get(&mut cursor, ParseOptions::new()).unwrap().unwrap();
    assert_eq!(tags.name.as_deref(), Some("x"));
    assert_eq!(cursor.position(), tag_len);

    let mut rest = Vec::new();
    cursor.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b"\xFF\xFB\x90\x64TIT2");
}

#[test]
fn same_input_same_tags_test() {
    let mut frames = v23_frame("TIT2", [0, 0], &text("song"));
    frames.extend(v23_frame("TCON", [0, 0], &latin1("(8)")));
    let data = tag(3, 0, &frames, 16);

    let first = parse(&data.clone()).unwrap();
    let second = parse(&data).unwrap();
    assert_eq!(first, second);
}
