mod txbuffer;

pub use txbuffer::TxBuffer;

/// A byte destination that can say up front how much it will accept.
///
/// Encoders check `available_for_write` before touching the sink, so an
/// implementation must accept at least that many bytes on the next `write`.
pub trait Sink {
    /// Free space, in bytes.
    fn available_for_write(&self) -> usize;

    /// Queues `bytes` and returns how many were accepted.
    fn write(&mut self, bytes: &[u8]) -> usize;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline(always)]
    fn available_for_write(&self) -> usize {
        (**self).available_for_write()
    }

    #[inline(always)]
    fn write(&mut self, bytes: &[u8]) -> usize {
        (**self).write(bytes)
    }
}
