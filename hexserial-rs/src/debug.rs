use crate::encoder::SendError;
use ufmt::{
    uDebug,
    uWrite,
    Formatter,
};

impl uDebug for SendError {
    fn fmt<W>(&self, out: &mut Formatter<W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            SendError::InsufficientCapacity => out.write_str("InsufficientCapacity"),
        }
    }
}
