extern crate encoding;
use self::encoding::{DecoderTrap, Encoding};

use crate::error::{Error, Result};

pub fn decode_iso_8859_1(input: &[u8]) -> String {
    use self::encoding::all::ISO_8859_1;
    ISO_8859_1
        .decode(input, DecoderTrap::Replace)
        .unwrap_or_default()
}

pub fn decode_utf8(input: &[u8]) -> String {
    use self::encoding::all::UTF_8;
    UTF_8
        .decode(input, DecoderTrap::Replace)
        .unwrap_or_default()
}

/// UTF-16 text that starts with a byte-order mark.
pub fn decode_utf16(input: &[u8]) -> Result<String> {
    use self::encoding::all::{UTF_16BE, UTF_16LE};

    if input.len() < 2 {
        return Err(Error::MalformedText(
            "Sequence is too short to contain a UTF-16 BOM".to_string(),
        ));
    }

    let mut data = input[2..].to_vec();
    if data.len() % 2 != 0 {
        // big endian content would be misread here, but old taggers do write this
        log::warn!("Odd length UTF-16 text, padding with a zero byte");
        data.push(0x00);
    }

    let decoded = match &input[0..2] {
        [0xFF, 0xFE] => UTF_16LE.decode(&data, DecoderTrap::Replace),
        [0xFE, 0xFF] => UTF_16BE.decode(&data, DecoderTrap::Replace),
        bom => {
            return Err(Error::MalformedText(format!(
                "Unrecognized UTF-16 BOM: 0x{:02X}{:02X}",
                bom[0], bom[1]
            )))
        }
    };
    Ok(decoded.unwrap_or_default())
}

/// Decode an ID3v2 text payload: one encoding byte, then the text.
pub fn decode_text(input: &[u8]) -> Result<String> {
    let s = match input.first() {
        None => String::new(),
        Some(0x00) => decode_iso_8859_1(&input[1..]),
        Some(0x01) => decode_utf16(&input[1..])?,
        Some(0x02) => return Err(Error::UnsupportedEncoding(0x02)),
        Some(0x03) => decode_utf8(&input[1..]),
        // no encoding byte at all, assume ISO-8859-1
        Some(_) => decode_iso_8859_1(input),
    };
    Ok(s.trim_end_matches('\0').to_string())
}
