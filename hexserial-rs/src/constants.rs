pub const NIBBLE_MESSAGE_LEN: usize = 3;
pub const BYTE_MESSAGE_LEN: usize = 4;
pub const INT_MESSAGE_LEN: usize = 6;
pub const LONG_MESSAGE_LEN: usize = 12;

// Same as the stock Arduino HardwareSerial TX ring
pub const DEFAULT_TX_BUFFER_SIZE: usize = 64;
