//! In-place transfer buffer
//!
//! The bus driver owns one fixed buffer. A received request is decoded from
//! it and the reply is written back into the same bytes, so the buffer
//! carries a logical length next to its capacity.

/// A byte region with a logical length cursor
///
/// The capacity is the length of the borrowed slice. The logical length
/// never exceeds it.
#[derive(Debug)]
pub struct TransferBuffer<'a> {
    data: &'a mut [u8],
    len: usize,
}

impl<'a> TransferBuffer<'a> {
    /// Wrap `data` holding `len` received bytes
    ///
    /// `len` is clamped to the capacity.
    pub fn new(data: &'a mut [u8], len: usize) -> Self {
        let len = len.min(data.len());
        Self { data, len }
    }

    /// Logical length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no bytes are held
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Set the logical length, clamped to the capacity
    pub fn set_len(&mut self, len: usize) {
        self.len = len.min(self.data.len());
    }

    /// Bytes within the logical length
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The whole region, ignoring the logical length
    pub fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_clamped_to_capacity() {
        let mut data = [0u8; 4];
        let buf = TransferBuffer::new(&mut data, 10);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn test_raw_mut_ignores_len() {
        let mut data = [0u8; 3];
        let mut buf = TransferBuffer::new(&mut data, 0);
        assert!(buf.is_empty());
        buf.raw_mut()[2] = 0xAA;
        buf.set_len(3);
        assert_eq!(buf.as_slice(), &[0x00, 0x00, 0xAA]);
    }

    #[test]
    fn test_set_len() {
        let mut data = [1, 2, 3];
        let mut buf = TransferBuffer::new(&mut data, 3);
        buf.set_len(1);
        assert_eq!(buf.as_slice(), &[1]);
        buf.set_len(99);
        assert_eq!(buf.len(), 3);
    }
}
