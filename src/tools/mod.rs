pub mod encoding;
pub mod peek;

use std::io;
use std::io::prelude::*;

use crate::error::{Error, Result};

// payload buffers grow in steps of this instead of trusting the declared size
const READ_CHUNK: u64 = 64 * 1024;

/// Plain big-endian integer of up to 4 bytes (no synch-safe masking).
pub fn decode_int_be_u32(input: &[u8]) -> u32 {
    debug_assert!(
        input.len() <= 4,
        "decode_int_be_u32 expected a slice with max length 4, got slice with length {}",
        input.len()
    );
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        result |= (*b as u32) << (8 * (input.len() - 1 - i));
    }
    result
}

/// Read exactly `len` bytes, however short the underlying reads are.
pub fn read_bytes<R: Read>(input: &mut R, len: u64) -> Result<Vec<u8>> {
    let mut vec = Vec::with_capacity(len.min(READ_CHUNK) as usize);
    input.by_ref().take(len).read_to_end(&mut vec)?;

    if (vec.len() as u64) < len {
        return Err(Error::TruncatedStream {
            expected: len,
            found: vec.len() as u64,
        });
    }
    Ok(vec)
}

/// Discard exactly `len` bytes without buffering them.
pub fn skip_bytes<R: Read>(input: &mut R, len: u64) -> Result<()> {
    log::trace!("Skipping {} bytes", len);

    let skipped = io::copy(&mut input.by_ref().take(len), &mut io::sink())?;
    if skipped != len {
        return Err(Error::TruncatedStream {
            expected: len,
            found: skipped,
        });
    }
    Ok(())
}
