use crate::error::{Result, SluiceError};
use crate::stream::{InputStream, OutputStream};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// File-backed terminal input stream.
///
/// The remaining length is snapshotted at open so `is_eof` is exact; the
/// file must not shrink while the pipeline runs.
#[derive(Debug)]
pub struct FileInputStream {
    reader: BufReader<File>,
    remaining: u64,
}

impl FileInputStream {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let remaining = file.metadata()?.len();
        Ok(Self {
            reader: BufReader::new(file),
            remaining,
        })
    }
}

impl InputStream for FileInputStream {
    fn is_eof(&self) -> bool {
        self.remaining == 0
    }

    fn read_byte(&mut self) -> Result<u8> {
        if self.is_eof() {
            return Err(SluiceError::EndOfStream);
        }
        let mut byte = [0u8; 1];
        self.reader.read_exact(&mut byte)?;
        self.remaining -= 1;
        Ok(byte[0])
    }

    fn read_block(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let count = (buffer.len() as u64).min(self.remaining) as usize;
        self.reader.read_exact(&mut buffer[..count])?;
        self.remaining -= count as u64;
        Ok(count)
    }
}

/// File-backed terminal output stream. `close` flushes the buffer.
#[derive(Debug)]
pub struct FileOutputStream {
    writer: BufWriter<File>,
    closed: bool,
}

impl FileOutputStream {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            closed: false,
        })
    }
}

impl OutputStream for FileOutputStream {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_block(&[byte])
    }

    fn write_block(&mut self, data: &[u8]) -> Result<()> {
        if self.closed {
            return Err(SluiceError::ClosedStream);
        }
        self.writer.write_all(data)?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.writer.flush()?;
            self.closed = true;
        }
        Ok(())
    }
}
