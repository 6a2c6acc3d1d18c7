use super::Sink;
use embedded_hal::serial;

/// Transmit ring buffer sitting in front of a serial port.
///
/// Writes only ever land in the ring; bytes move to the port when the owner
/// calls [`poll`](TxBuffer::poll), typically once per main-loop iteration.
/// The free space in the ring is what the encoder sees as sink capacity.
pub struct TxBuffer<W, const N: usize> {
    serial: W,
    buf: [u8; N],
    head: usize,
    len: usize,
}

impl<W, const N: usize> TxBuffer<W, N> {
    pub fn new(serial: W) -> Self {
        TxBuffer { serial, buf: [0; N], head: 0, len: 0 }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Bytes queued but not yet handed to the port.
    pub fn pending(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gives the port back. Anything still queued is discarded.
    pub fn release(self) -> W {
        self.serial
    }
}

impl<W, const N: usize> TxBuffer<W, N>
where
    W: serial::Write<u8>,
{
    /// Moves queued bytes into the port until the ring drains or the port
    /// reports `WouldBlock`.
    pub fn poll(&mut self) -> nb::Result<(), W::Error> {
        while self.len > 0 {
            self.serial.write(self.buf[self.head])?;
            self.head = (self.head + 1) % N;
            self.len -= 1;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> nb::Result<(), W::Error> {
        self.poll()?;
        self.serial.flush()
    }
}

impl<W, const N: usize> Sink for TxBuffer<W, N> {
    fn available_for_write(&self) -> usize {
        N - self.len
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.available_for_write());
        for &b in bytes[..n].iter() {
            let tail = (self.head + self.len) % N;
            self.buf[tail] = b;
            self.len += 1;
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct MockSerial {
        out: Vec<u8>,
        budget: usize,
    }

    impl serial::Write<u8> for MockSerial {
        type Error = Infallible;

        fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
            if self.budget == 0 {
                return Err(nb::Error::WouldBlock);
            }
            self.budget -= 1;
            self.out.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Infallible> {
            Ok(())
        }
    }

    fn port(budget: usize) -> MockSerial {
        MockSerial { out: Vec::new(), budget }
    }

    #[test]
    fn write_is_capped_at_free_space() {
        let mut tx: TxBuffer<_, 8> = TxBuffer::new(port(0));
        assert_eq!(tx.available_for_write(), 8);
        assert_eq!(tx.write(b"abcde"), 5);
        assert_eq!(tx.available_for_write(), 3);
        assert_eq!(tx.write(b"fghij"), 3);
        assert_eq!(tx.available_for_write(), 0);
        assert_eq!(tx.pending(), 8);
    }

    #[test]
    fn poll_stops_when_port_blocks() {
        let mut tx: TxBuffer<_, 8> = TxBuffer::new(port(3));
        tx.write(b"hello");
        assert_eq!(tx.poll(), Err(nb::Error::WouldBlock));
        assert_eq!(tx.pending(), 2);
        assert_eq!(tx.available_for_write(), 6);

        assert_eq!(tx.release().out, b"hel");
    }

    #[test]
    fn ring_wraps_in_order() {
        let mut tx: TxBuffer<_, 4> = TxBuffer::new(port(usize::MAX));
        tx.write(b"abc");
        assert_eq!(tx.poll(), Ok(()));
        tx.write(b"defg");
        assert_eq!(tx.available_for_write(), 0);
        assert_eq!(tx.flush(), Ok(()));
        assert!(tx.is_empty());
        assert_eq!(tx.release().out, b"abcdefg");
    }

    #[test]
    fn zero_sized_ring_accepts_nothing() {
        let mut tx: TxBuffer<_, 0> = TxBuffer::new(port(1));
        assert_eq!(tx.write(b"x"), 0);
        assert_eq!(tx.poll(), Ok(()));
    }
}
