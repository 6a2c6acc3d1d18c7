use crate::{
    constants::{
        BYTE_MESSAGE_LEN,
        INT_MESSAGE_LEN,
        LONG_MESSAGE_LEN,
        NIBBLE_MESSAGE_LEN,
    },
    hexfmt::{
        encode_byte,
        encode_int,
        encode_long,
        encode_nibble,
    },
    sink::Sink,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendError {
    InsufficientCapacity = 1,
}

/// Writes tagged hex lines of the form `<prefix><hex digits>\n` to a [`Sink`].
///
/// A message is only written if the sink has room for all of it; otherwise
/// the call returns [`SendError::InsufficientCapacity`] and the sink is left
/// untouched. Retrying is up to the caller.
pub struct HexSerial<S: Sink> {
    sink: S,
}

impl<S: Sink> HexSerial<S> {
    pub fn new(sink: S) -> Self {
        HexSerial { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn release(self) -> S {
        self.sink
    }

    /// Sends the low four bits of `value` as a single hex digit.
    pub fn send_nibble(&mut self, prefix: u8, value: u8) -> Result<(), SendError> {
        let msg: [u8; NIBBLE_MESSAGE_LEN] = [prefix, encode_nibble(value), b'\n'];
        self.send(&msg)
    }

    pub fn send_byte(&mut self, prefix: u8, value: u8) -> Result<(), SendError> {
        let mut msg = [0u8; BYTE_MESSAGE_LEN];
        msg[0] = prefix;
        msg[1..3].copy_from_slice(&encode_byte(value));
        msg[3] = b'\n';
        self.send(&msg)
    }

    pub fn send_int(&mut self, prefix: u8, value: u16) -> Result<(), SendError> {
        let mut msg = [0u8; INT_MESSAGE_LEN];
        msg[0] = prefix;
        msg[1..5].copy_from_slice(&encode_int(value));
        msg[5] = b'\n';
        self.send(&msg)
    }

    /// Sends `counter` (two digits) followed by `value` (eight digits) on one line.
    pub fn send_long(&mut self, prefix: u8, counter: u8, value: u32) -> Result<(), SendError> {
        let mut msg = [0u8; LONG_MESSAGE_LEN];
        msg[0] = prefix;
        msg[1..3].copy_from_slice(&encode_byte(counter));
        msg[3..11].copy_from_slice(&encode_long(value));
        msg[11] = b'\n';
        self.send(&msg)
    }

    // Capacity is checked before anything reaches the sink, so a message is
    // either written whole or not at all.
    fn send(&mut self, msg: &[u8]) -> Result<(), SendError> {
        if self.sink.available_for_write() < msg.len() {
            return Err(SendError::InsufficientCapacity);
        }
        let written = self.sink.write(msg);
        debug_assert_eq!(written, msg.len());
        Ok(())
    }
}
