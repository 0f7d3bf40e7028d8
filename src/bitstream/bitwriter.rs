use log::trace;

/// Packs Huffman codes into bytes, most significant bit first. Bits collect in a one byte
/// queue and move to the output buffer each time eight of them are present.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Output buffer holding every completed byte.
    pub output: Vec<u8>,
    /// Partially filled byte waiting for more bits.
    queue: u8,
    /// Count of valid bits in the queue (0-7 between calls).
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter with room for `size` bytes of output. Call flush() before
    /// taking the output or up to seven bits stay behind in the queue.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Put a single bit (0 or 1) on the stream.
    pub fn push_bit(&mut self, bit: u8) {
        self.queue <<= 1;
        self.queue |= bit & 1;
        self.q_bits += 1;
        if self.q_bits == 8 {
            self.output.push(self.queue);
            self.queue = 0;
            self.q_bits = 0;
        }
    }

    /// Put the low `length` bits of `code` on the stream, most significant first.
    pub fn push_code(&mut self, code: u64, length: u8) {
        for i in (0..length).rev() {
            self.push_bit(((code >> i) & 1) as u8);
        }
    }

    /// Put a whole byte on the stream. Used for the byte aligned part of the container.
    pub fn out8(&mut self, byte: u8) {
        self.push_code(byte as u64, 8);
    }

    /// Put a 16 bit word on the stream, high byte first.
    pub fn out16(&mut self, word: u16) {
        self.push_code(word as u64, 16);
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits. Returns how many padding bits were added.
    pub fn flush(&mut self) -> u8 {
        if self.q_bits == 0 {
            return 0;
        }
        let padding = 8 - self.q_bits;
        self.output.push(self.queue << padding);
        trace!("Flushed {} bits with {} bits of padding", self.q_bits, padding);
        self.queue = 0;
        self.q_bits = 0;
        padding
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.output.len(), self.q_bits)
    }
}

#[cfg(test)]
mod test {
    use super::BitWriter;

    #[test]
    fn out8_test() {
        let mut bw = BitWriter::new(10);
        bw.out8(b'x');
        assert_eq!(bw.flush(), 0);
        assert_eq!(bw.output, "x".as_bytes());
    }

    #[test]
    fn out16_test() {
        let mut bw = BitWriter::new(10);
        bw.out16(0b00100001_00100000);
        bw.flush();
        assert_eq!(bw.output, "! ".as_bytes());
    }

    #[test]
    fn padding_test() {
        let mut bw = BitWriter::new(10);
        bw.push_code(0b101, 3);
        assert_eq!(bw.loc(), "[0.3]");
        assert_eq!(bw.flush(), 5);
        assert_eq!(bw.output, vec![0b1010_0000]);
        assert_eq!(bw.loc(), "[1.0]");
    }

    #[test]
    fn code_spans_bytes_test() {
        let mut bw = BitWriter::new(10);
        bw.push_code(0b111, 3);
        bw.push_code(0b0000_0001_1, 9);
        assert_eq!(bw.flush(), 4);
        assert_eq!(bw.output, vec![0b1110_0000, 0b0011_0000]);
    }

    #[test]
    fn empty_flush_test() {
        let mut bw = BitWriter::new(0);
        assert_eq!(bw.flush(), 0);
        assert!(bw.output.is_empty());
    }
}
