use crate::sink::Sink;
use core::convert::Infallible;
use ufmt::uWrite;

/// Sink with a fixed amount of free space that records everything written to it.
pub(crate) struct FakeSink {
    pub(crate) capacity: usize,
    pub(crate) written: Vec<u8>,
    pub(crate) write_calls: usize,
}

impl FakeSink {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        FakeSink { capacity, written: Vec::new(), write_calls: 0 }
    }
}

impl Sink for FakeSink {
    fn available_for_write(&self) -> usize {
        self.capacity - self.written.len()
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        self.write_calls += 1;
        let n = bytes.len().min(self.available_for_write());
        self.written.extend_from_slice(&bytes[..n]);
        n
    }
}

#[derive(Default)]
pub(crate) struct TextSink(pub(crate) String);

impl uWrite for TextSink {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}
