use std::io;
use std::io::prelude::*;

/// A reader that can look at upcoming bytes without consuming them.
pub struct Lookahead<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: Read> Lookahead<R> {
    pub fn new(inner: R) -> Self {
        Lookahead {
            inner,
            buf: Vec::new(),
        }
    }

    /// Returns the next `len` bytes, or `None` if the stream ends before that.
    pub fn peek(&mut self, len: usize) -> io::Result<Option<&[u8]>> {
        while self.buf.len() < len {
            let mut chunk = [0; 16];
            let want = (len - self.buf.len()).min(chunk.len());
            match self.inner.read(&mut chunk[..want]) {
                Ok(0) => return Ok(None),
                Ok(n) => self.buf.extend_from_slice(&chunk[..n]),
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(Some(&self.buf[..len]))
    }
}

impl<R: Read> Read for Lookahead<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.buf.is_empty() {
            return self.inner.read(out);
        }
        let n = self.buf.len().min(out.len());
        out[..n].copy_from_slice(&self.buf[..n]);
        self.buf.drain(..n);
        Ok(n)
    }
}
