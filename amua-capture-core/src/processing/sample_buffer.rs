/// Append-only PCM sample buffer.
///
/// Wrap in `Arc<parking_lot::Mutex<SampleBuffer>>` for cross-thread access.
/// Each buffer has exactly one writer (the notification callback) and at
/// most one concurrent reader (the save path); the mutex enforces the
/// single-writer invariant when the transport delivers from its own thread.
///
/// Grows monotonically; `clear` exists only for the recording-restart path.
#[derive(Debug, Default)]
pub struct SampleBuffer {
    samples: Vec<i16>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append samples in receipt order.
    pub fn extend(&mut self, samples: &[i16]) {
        self.samples.extend_from_slice(samples);
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples, in receipt order.
    pub fn as_slice(&self) -> &[i16] {
        &self.samples
    }

    /// Owned copy of the samples, for handing to the save path without
    /// holding the lock across file I/O.
    pub fn to_vec(&self) -> Vec<i16> {
        self.samples.clone()
    }

    /// Discard all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_appends_in_order() {
        let mut buf = SampleBuffer::new();
        buf.extend(&[1, 2, 3]);
        buf.extend(&[4, 5]);

        assert_eq!(buf.len(), 5);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buf = SampleBuffer::new();
        buf.extend(&[1, 2, 3]);
        buf.clear();

        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn empty_operations() {
        let mut buf = SampleBuffer::new();

        assert!(buf.is_empty());
        assert!(buf.as_slice().is_empty());

        buf.extend(&[]);
        assert!(buf.is_empty());
    }

    #[test]
    fn to_vec_copies_without_draining() {
        let mut buf = SampleBuffer::new();
        buf.extend(&[7, 8, 9]);

        let copy = buf.to_vec();
        assert_eq!(copy, vec![7, 8, 9]);
        assert_eq!(buf.len(), 3);
    }
}
