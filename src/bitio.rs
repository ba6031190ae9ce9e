//! Bit-granular I/O over in-memory byte buffers.
//!
//! Both directions are MSB-first: the first bit written lands in bit 7 of
//! the first byte. The writer zero-pads the last partial byte on
//! [`BitWriter::finalize`]; the reader cannot tell padding from data, so the
//! caller decides what exhaustion means.

/// Writes bits MSB-first, appending bytes to an owned buffer.
///
/// The buffer may already hold bytes (for instance a length header); bits are
/// appended after them.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    /// Pending bits, right-aligned.
    current: u8,
    /// Number of pending bits in `current` (0..8).
    pending: u8,
    finalized: bool,
}

impl BitWriter {
    /// Create a writer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that appends after the bytes already in `bytes`.
    pub fn with_prefix(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            ..Self::default()
        }
    }

    /// Append one bit.
    ///
    /// Ignored once the writer has been finalized.
    pub fn put(&mut self, bit: bool) {
        if self.finalized {
            return;
        }
        self.current = (self.current << 1) | bit as u8;
        self.pending += 1;
        if self.pending == 8 {
            self.bytes.push(self.current);
            self.current = 0;
            self.pending = 0;
        }
    }

    /// Flush the trailing partial byte, padded with zeros, and stop accepting bits.
    ///
    /// Calling it again does nothing.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        if self.pending > 0 {
            self.bytes.push(self.current << (8 - self.pending));
            self.current = 0;
            self.pending = 0;
        }
        self.finalized = true;
    }

    /// Whether [`finalize`](Self::finalize) has run.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Total number of bits written so far, prefix bytes included.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.pending as usize
    }

    /// Finalize and return the buffer.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.finalize();
        self.bytes
    }
}

/// Reads bits MSB-first from a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Index of the next bit, 0 = MSB of `data[0]`.
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Read the next bit, or `None` once the buffer is exhausted.
    pub fn get(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.position / 8)?;
        let bit = (byte >> (7 - self.position % 8)) & 1;
        self.position += 1;
        Some(bit == 1)
    }

    /// Number of bits not yet read.
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(pattern: &str) -> Vec<bool> {
        pattern.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_writer_packs_msb_first_and_pads() {
        let mut writer = BitWriter::new();
        for bit in bits("1011100011") {
            writer.put(bit);
        }
        assert_eq!(writer.bit_len(), 10);
        assert_eq!(writer.into_bytes(), vec![0b1011_1000, 0b1100_0000]);
    }

    #[test]
    fn test_writer_exact_byte_has_no_padding() {
        let mut writer = BitWriter::new();
        for bit in bits("01010101") {
            writer.put(bit);
        }
        writer.finalize();
        assert_eq!(writer.into_bytes(), vec![0x55]);
    }

    #[test]
    fn test_writer_appends_after_prefix() {
        let mut writer = BitWriter::with_prefix(vec![0x0D]);
        writer.put(true);
        assert_eq!(writer.into_bytes(), vec![0x0D, 0x80]);
    }

    #[test]
    fn test_writer_is_inert_after_finalize() {
        let mut writer = BitWriter::new();
        writer.put(true);
        writer.finalize();
        writer.finalize();
        writer.put(true);
        assert!(writer.is_finalized());
        assert_eq!(writer.into_bytes(), vec![0x80]);
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        assert!(BitWriter::new().into_bytes().is_empty());
    }

    #[test]
    fn test_reader_unpacks_msb_first_then_ends() {
        let data = [0b1010_0000u8, 0xFF];
        let mut reader = BitReader::new(&data);
        let read: Vec<bool> = std::iter::from_fn(|| reader.get()).collect();
        assert_eq!(read.len(), 16);
        assert_eq!(&read[..4], &bits("1010")[..]);
        assert!(read[8..].iter().all(|&b| b));
        assert_eq!(reader.bits_remaining(), 0);
        assert_eq!(reader.get(), None);
    }

    #[test]
    fn test_reader_on_empty_slice() {
        let mut reader = BitReader::new(&[]);
        assert_eq!(reader.get(), None);
    }
}
