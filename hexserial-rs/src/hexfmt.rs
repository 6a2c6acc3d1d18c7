//! Uppercase ASCII hex digits for fixed-width integers.
//!
//! Every encoder writes digits most-significant first into a stack array;
//! nothing here allocates.

use ufmt::{
    uDisplay,
    uWrite,
    Formatter,
};

/// Maps the low four bits of `value` to one of `0-9A-F`. The high bits are ignored.
pub const fn encode_nibble(value: u8) -> u8 {
    let v = value & 0x0f;
    if v <= 9 {
        b'0' + v
    } else {
        b'A' + v - 10
    }
}

pub const fn encode_byte(value: u8) -> [u8; 2] {
    [encode_nibble(value >> 4), encode_nibble(value)]
}

pub const fn encode_int(value: u16) -> [u8; 4] {
    let hi = encode_byte((value >> 8) as u8);
    let lo = encode_byte(value as u8);
    [hi[0], hi[1], lo[0], lo[1]]
}

pub const fn encode_long(value: u32) -> [u8; 8] {
    let hi = encode_int((value >> 16) as u16);
    let lo = encode_int(value as u16);
    [hi[0], hi[1], hi[2], hi[3], lo[0], lo[1], lo[2], lo[3]]
}

/// Prints the wrapped integer as zero-padded uppercase hex, without a `0x` prefix.
///
/// ```ignore
/// uwriteln!(serial, "rssi: {}", Hex(rssi))?;
/// ```
pub struct Hex<T>(pub T);

fn write_digits<W>(f: &mut Formatter<W>, digits: &[u8]) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    for c in digits.iter() {
        f.write_char(*c as char)?;
    }
    Ok(())
}

impl uDisplay for Hex<u8> {
    fn fmt<W>(&self, f: &mut Formatter<W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        write_digits(f, &encode_byte(self.0))
    }
}

impl uDisplay for Hex<u16> {
    fn fmt<W>(&self, f: &mut Formatter<W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        write_digits(f, &encode_int(self.0))
    }
}

impl uDisplay for Hex<u32> {
    fn fmt<W>(&self, f: &mut Formatter<W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        write_digits(f, &encode_long(self.0))
    }
}
