//! BitReader: reads the packed body of a huffpack container one bit at a time.
//!
//! The reader can be told how many bits are meaningful. Once that many have been handed out
//! it reports the end of data, so the padding bits at the tail of the final byte are never
//! seen by the decoder.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!

use crate::error::{Error, Result};

const BUFFER_SIZE: usize = 64 * 1024;

/// Reads a packed bitstream, most significant bit of each byte first.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
    /// Bits still allowed to be read, or None for "until the source runs dry".
    limit: Option<u64>,
    source: R,
}

impl<R: std::io::Read> BitReader<R> {
    /// Creates a new BitReader that reads until the source is exhausted.
    pub fn new(source: R) -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE],
            cursor: BUFFER_SIZE,
            bit_index: 0,
            limit: None,
            source,
        }
    }

    /// Creates a new BitReader that stops after `bits` bits.
    pub fn with_limit(source: R, bits: u64) -> Self {
        let mut br = Self::new(source);
        br.limit = Some(bits);
        br
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more
    fn have_data(&mut self) -> Result<bool> {
        // Only try to read more data when the buffer length is equal to the buffer cursor location
        if self.cursor == self.buffer.len() {
            self.buffer.resize(BUFFER_SIZE, 0);
            let size = self
                .source
                .read(&mut self.buffer)
                .map_err(Error::InputUnavailable)?;
            if size == 0 {
                self.buffer.truncate(0);
                self.cursor = 0;
                return Ok(false);
            }
            self.buffer.truncate(size);
            self.cursor = 0;
            self.bit_index = 0;
        }
        Ok(true)
    }

    /// Return the next bit (1 or 0), or None if there is no more data to read.
    pub fn bit(&mut self) -> Result<Option<u8>> {
        if self.limit == Some(0) {
            return Ok(None);
        }
        if self.bit_index == 0 && !self.have_data()? {
            return Ok(None);
        }
        let bit = (self.buffer[self.cursor] >> (7 - self.bit_index)) & 1;
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        if let Some(left) = self.limit.as_mut() {
            *left -= 1;
        }
        Ok(Some(bit))
    }

    /// Bits still available under the limit, if one was set.
    pub fn remaining(&self) -> Option<u64> {
        self.limit
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.bit().unwrap(), Some(1));
        for _ in 0..6 {
            assert_eq!(br.bit().unwrap(), Some(0));
        }
        assert_eq!(br.bit().unwrap(), Some(1));
        assert_eq!(br.bit().unwrap(), None);
    }

    #[test]
    fn position_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        for _ in 0..19 {
            assert!(br.bit().unwrap().is_some());
        }
        assert_eq!(br.loc(), "[2.3]");
        assert_eq!(br.remaining(), None);
    }

    #[test]
    fn limit_stops_before_padding_test() {
        // Three real bits followed by five padding bits.
        let x = [0b1010_0000].as_slice();
        let mut br = BitReader::with_limit(x, 3);
        assert_eq!(br.bit().unwrap(), Some(1));
        assert_eq!(br.bit().unwrap(), Some(0));
        assert_eq!(br.remaining(), Some(1));
        assert_eq!(br.bit().unwrap(), Some(1));
        assert_eq!(br.bit().unwrap(), None);
        assert_eq!(br.remaining(), Some(0));
    }

    #[test]
    fn limit_past_end_test() {
        let x = [0xff_u8].as_slice();
        let mut br = BitReader::with_limit(x, 12);
        for _ in 0..8 {
            assert_eq!(br.bit().unwrap(), Some(1));
        }
        assert_eq!(br.bit().unwrap(), None);
        assert_eq!(br.remaining(), Some(4));
    }
}
