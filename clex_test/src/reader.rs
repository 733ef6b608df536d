//! Contains [`Chunked`], a reader that hands out its bytes a few at a time.

use std::io::Read;

use proptest::{
    prelude::Arbitrary,
    strategy::{BoxedStrategy, Strategy},
};

/// A [`Read`] implementation that never returns more than `chunk_size` bytes per call.
///
/// Used to check that the result of scanning doesn't depend on how the input was split while
/// being read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunked {
    bytes: Vec<u8>,
    position: usize,
    chunk_size: usize,
}

impl Chunked {
    /// Creates a reader over `bytes` returning at most `chunk_size` bytes per read.
    ///
    /// A `chunk_size` of zero is treated as one.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>, chunk_size: usize) -> Self {
        Self {
            bytes: bytes.into(),
            position: 0,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Gets the maximum number of bytes returned per read.
    #[must_use]
    pub fn chunk_size(&self) -> usize { self.chunk_size }
}

impl Read for Chunked {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let remaining = &self.bytes[self.position..];
        let count = remaining.len().min(self.chunk_size).min(buf.len());

        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;

        Ok(count)
    }
}

/// Generates a chunk size between 1 and 16 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkSize(pub usize);

impl Arbitrary for ChunkSize {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy { (1usize..=16).prop_map(Self).boxed() }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::Chunked;

    #[test]
    fn reads_in_bounded_chunks() {
        let mut reader = Chunked::new("abcdefg", 3);
        let mut buffer = [0; 8];

        assert_eq!(reader.read(&mut buffer).unwrap(), 3);
        assert_eq!(&buffer[..3], b"abc");
        assert_eq!(reader.read(&mut buffer).unwrap(), 3);
        assert_eq!(&buffer[..3], b"def");
        assert_eq!(reader.read(&mut buffer).unwrap(), 1);
        assert_eq!(&buffer[..1], b"g");
        assert_eq!(reader.read(&mut buffer).unwrap(), 0);
    }

    #[test]
    fn zero_chunk_size_is_clamped() {
        assert_eq!(Chunked::new("a", 0).chunk_size(), 1);
    }
}
