#![cfg_attr(not(test), no_std)]

mod constants;
mod debug;
pub mod encoder;
pub mod hexfmt;
pub mod sink;

#[cfg(test)]
pub(crate) mod testing;

pub use constants::{
    BYTE_MESSAGE_LEN,
    DEFAULT_TX_BUFFER_SIZE,
    INT_MESSAGE_LEN,
    LONG_MESSAGE_LEN,
    NIBBLE_MESSAGE_LEN,
};
pub use encoder::{
    HexSerial,
    SendError,
};
pub use hexfmt::Hex;
pub use sink::{
    Sink,
    TxBuffer,
};
