#[cfg(test)]
use crate::error::{Error, Result};

/// Reverse the unsynchronization scheme: every `FF 00` pair loses its `00`.
pub fn undo_unsynch(vec: &mut Vec<u8>) {
    let mut read = 0;
    let mut write = 0;
    while read < vec.len() {
        let b = vec[read];
        vec[write] = b;
        write += 1;
        read += 1;
        if b == 0xFF && read < vec.len() && vec[read] == 0x00 {
            read += 1;
        }
    }
    vec.truncate(write);
}

pub fn decode_synch_int(input: &[u8; 4]) -> u32 {
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        // the encoder broke the synch-safe contract; keep going with the low 7 bits
        if b & 0x80 != 0 {
            log::warn!("Synch-safe size byte {} has its high bit set", i);
        }
        // move the 7 bit parts to proper places
        // (0000 0001 0111 1111 => 1111 1111)
        result |= ((*b & 0x7F) as u32) << (7 * (3 - i));
    }
    result
}

#[cfg(test)]
pub fn encode_synch_int(input: u32) -> Result<[u8; 4]> {
    if input > 0x0FFF_FFFF {
        return Err(Error::InvalidSize(input));
    }
    let mut result = [0; 4];
    for (i, b) in result.iter_mut().enumerate() {
        *b = ((input >> (7 * (3 - i))) & 0x7F) as u8;
    }
    Ok(result)
}

/// Frame IDs only ever use `A-Z` and `0-9`; anything else is padding or garbage.
pub fn is_frame_id(input: &[u8]) -> bool {
    !input.is_empty()
        && input
            .iter()
            .all(|c| (*c >= b'A' && *c <= b'Z') || (*c >= b'0' && *c <= b'9'))
}

pub fn decode_frame_id(input: &[u8]) -> String {
    input.iter().map(|&c| c as char).collect()
}
