//! Stream capability contracts and terminal stream implementations.
//!
//! Every stage of a pipeline, terminal or decorating, implements one of the
//! two traits below. Decorators stay agnostic of what they wrap: a memory
//! buffer, a file, or another decorator.

pub mod file;
pub mod memory;

pub use file::*;
pub use memory::*;

use crate::error::Result;

/// A readable byte stream with a monotonically advancing position.
pub trait InputStream {
    /// True exactly when the next `read_byte` would fail with `EndOfStream`.
    fn is_eof(&self) -> bool;

    /// Read the next byte. Fails with `EndOfStream` when the stream is
    /// exhausted; never returns a sentinel value.
    fn read_byte(&mut self) -> Result<u8>;

    /// Read up to `buffer.len()` bytes and return how many were copied.
    /// A short count means the stream is now at EOF; asking for more than
    /// remains is not an error.
    fn read_block(&mut self, buffer: &mut [u8]) -> Result<usize>;
}

/// A writable byte stream with a one-way open -> closed transition.
pub trait OutputStream {
    /// Append one byte. Fails with `ClosedStream` once `close` has run.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Append a block of bytes. Fails with `ClosedStream` once `close` has
    /// run.
    fn write_block(&mut self, data: &[u8]) -> Result<()>;

    /// Close the stream. All subsequent writes fail; the transition cannot
    /// be reversed.
    fn close(&mut self) -> Result<()>;
}

impl<S: InputStream + ?Sized> InputStream for Box<S> {
    fn is_eof(&self) -> bool {
        (**self).is_eof()
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn read_block(&mut self, buffer: &mut [u8]) -> Result<usize> {
        (**self).read_block(buffer)
    }
}

impl<S: OutputStream + ?Sized> OutputStream for Box<S> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }

    fn write_block(&mut self, data: &[u8]) -> Result<()> {
        (**self).write_block(data)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Drain a stream to a vector.
pub fn read_to_end<S: InputStream + ?Sized>(input: &mut S) -> Result<Vec<u8>> {
    let mut chunk = [0u8; 4096];
    let mut data = Vec::new();
    loop {
        let count = input.read_block(&mut chunk)?;
        if count == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..count]);
    }
    Ok(data)
}
