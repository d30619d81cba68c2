use bytes::{Bytes, BytesMut};

/// Pull-based adapter over an incrementally-fed byte stream.
///
/// `pull` hands out exactly `n` bytes and advances the read position only
/// when at least `n` bytes are buffered; otherwise it returns `None` and
/// changes nothing, so a suspended caller can retry the identical pull
/// after more bytes arrive. Splits are O(1) views into the shared buffer.
#[derive(Debug, Default)]
pub struct ByteCursor {
    buf: BytesMut,
}

impl ByteCursor {
    /// Create an empty cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk from the byte source.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Take exactly `n` bytes, or `None` if fewer are buffered.
    pub fn pull(&mut self, n: usize) -> Option<Bytes> {
        if self.buf.len() < n {
            return None;
        }
        Some(self.buf.split_to(n).freeze())
    }

    /// Number of bytes currently buffered.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no bytes are buffered.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_returns_exact_count() {
        let mut cursor = ByteCursor::new();
        cursor.push(&[1, 2, 3, 4, 5]);
        let bytes = cursor.pull(3).unwrap();
        assert_eq!(&bytes[..], &[1, 2, 3]);
        assert_eq!(cursor.buffered(), 2);
    }

    #[test]
    fn pull_unavailable_is_side_effect_free() {
        let mut cursor = ByteCursor::new();
        cursor.push(&[1, 2]);
        assert!(cursor.pull(3).is_none());
        assert_eq!(cursor.buffered(), 2);
        // Identical retry succeeds once the backlog suffices.
        cursor.push(&[3]);
        assert_eq!(&cursor.pull(3).unwrap()[..], &[1, 2, 3]);
    }

    #[test]
    fn pull_spans_multiple_pushes() {
        let mut cursor = ByteCursor::new();
        cursor.push(&[1]);
        cursor.push(&[2, 3]);
        cursor.push(&[4]);
        assert_eq!(&cursor.pull(4).unwrap()[..], &[1, 2, 3, 4]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn pull_zero_always_succeeds() {
        let mut cursor = ByteCursor::new();
        assert_eq!(cursor.pull(0).unwrap().len(), 0);
    }

    #[test]
    fn sequential_pulls_preserve_order() {
        let mut cursor = ByteCursor::new();
        cursor.push(b"abcdef");
        assert_eq!(&cursor.pull(2).unwrap()[..], b"ab");
        assert_eq!(&cursor.pull(2).unwrap()[..], b"cd");
        assert_eq!(&cursor.pull(2).unwrap()[..], b"ef");
    }
}
