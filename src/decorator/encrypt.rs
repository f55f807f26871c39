use crate::cipher::{decryption_table, encryption_table, CipherTable};
use crate::error::Result;
use crate::stream::{InputStream, OutputStream};

/// Output decorator substituting every written byte through the encryption
/// table for `key`. Length-preserving; `close` is delegated unchanged.
pub struct EncryptionOutputStream<S> {
    inner: S,
    table: CipherTable,
}

impl<S: OutputStream> EncryptionOutputStream<S> {
    /// Takes ownership of the wrapped stream; the table is generated once
    /// and immutable afterwards.
    pub fn new(inner: S, key: u32) -> Self {
        Self {
            inner,
            table: encryption_table(key),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: OutputStream> OutputStream for EncryptionOutputStream<S> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.inner.write_byte(self.table[byte as usize])
    }

    fn write_block(&mut self, data: &[u8]) -> Result<()> {
        // A block write is the byte write applied in order; substitution has
        // no state across bytes.
        for &byte in data {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }
}

/// Input decorator substituting every byte read through the decryption table
/// for `key`. Length-preserving; `is_eof` is delegated unchanged.
pub struct DecryptionInputStream<S> {
    inner: S,
    table: CipherTable,
}

impl<S: InputStream> DecryptionInputStream<S> {
    pub fn new(inner: S, key: u32) -> Self {
        Self {
            inner,
            table: decryption_table(key),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: InputStream> InputStream for DecryptionInputStream<S> {
    fn is_eof(&self) -> bool {
        self.inner.is_eof()
    }

    fn read_byte(&mut self) -> Result<u8> {
        let raw = self.inner.read_byte()?;
        Ok(self.table[raw as usize])
    }

    fn read_block(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut count = 0;
        for slot in buffer.iter_mut() {
            if self.inner.is_eof() {
                break;
            }
            *slot = self.read_byte()?;
            count += 1;
        }
        Ok(count)
    }
}
