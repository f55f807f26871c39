use crate::error::{Result, SluiceError};
use crate::stream::{read_to_end, InputStream, MemoryInputStream, OutputStream};
use std::io::{Read, Write};

const ZSTD_LEVEL: i32 = 3;
const BROTLI_BUFFER: usize = 4096;
const BROTLI_QUALITY: u32 = 4;
const BROTLI_WINDOW: u32 = 22;

/// Compression algorithm for the compress/decompress pipeline slot.
///
/// Both sides of a round trip must agree on the algorithm; the pipeline
/// assembler always uses the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    Zstd,
    Lz4,
    Brotli,
    None,
}

impl Compression {
    pub fn encode(self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Zstd => zstd::encode_all(data, ZSTD_LEVEL)
                .map_err(|e| SluiceError::Compression(format!("zstd: {}", e))),
            Self::Lz4 => Ok(lz4_flex::compress_prepend_size(data)),
            Self::Brotli => {
                let mut encoded = Vec::new();
                let mut writer = brotli::CompressorWriter::new(
                    &mut encoded,
                    BROTLI_BUFFER,
                    BROTLI_QUALITY,
                    BROTLI_WINDOW,
                );
                writer
                    .write_all(data)
                    .map_err(|e| SluiceError::Compression(format!("brotli: {}", e)))?;
                drop(writer);
                Ok(encoded)
            }
            Self::None => Ok(data.to_vec()),
        }
    }

    pub fn decode(self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Zstd => zstd::decode_all(data)
                .map_err(|e| SluiceError::Decompression(format!("zstd: {}", e))),
            Self::Lz4 => lz4_flex::decompress_size_prepended(data)
                .map_err(|e| SluiceError::Decompression(format!("lz4: {}", e))),
            Self::Brotli => {
                let mut decoded = Vec::new();
                let mut reader = brotli::Decompressor::new(data, BROTLI_BUFFER);
                reader
                    .read_to_end(&mut decoded)
                    .map_err(|e| SluiceError::Decompression(format!("brotli: {}", e)))?;
                Ok(decoded)
            }
            Self::None => Ok(data.to_vec()),
        }
    }
}

/// Output decorator for the compression slot.
///
/// Compressed encodings cannot be produced byte-at-a-time, so writes are
/// buffered and the encoded payload reaches the wrapped stream when `close`
/// runs. Unlike the substitution decorators, this one changes stream length.
pub struct CompressionOutputStream<S> {
    inner: S,
    algorithm: Compression,
    pending: Vec<u8>,
    closed: bool,
}

impl<S: OutputStream> CompressionOutputStream<S> {
    pub fn new(inner: S, algorithm: Compression) -> Self {
        Self {
            inner,
            algorithm,
            pending: Vec::new(),
            closed: false,
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: OutputStream> OutputStream for CompressionOutputStream<S> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        if self.closed {
            return Err(SluiceError::ClosedStream);
        }
        self.pending.push(byte);
        Ok(())
    }

    fn write_block(&mut self, data: &[u8]) -> Result<()> {
        if self.closed {
            return Err(SluiceError::ClosedStream);
        }
        self.pending.extend_from_slice(data);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let encoded = self.algorithm.encode(&self.pending)?;
        self.pending.clear();
        self.inner.write_block(&encoded)?;
        self.inner.close()
    }
}

/// Input decorator for the decompression slot.
///
/// The wrapped stream is drained at construction; decoded bytes are then
/// served with exact EOF reporting.
pub struct DecompressionInputStream<S> {
    inner: S,
    decoded: MemoryInputStream,
}

impl<S: InputStream> DecompressionInputStream<S> {
    pub fn new(mut inner: S, algorithm: Compression) -> Result<Self> {
        let compressed = read_to_end(&mut inner)?;
        let decoded = algorithm.decode(&compressed)?;
        Ok(Self {
            inner,
            decoded: MemoryInputStream::new(decoded),
        })
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: InputStream> InputStream for DecompressionInputStream<S> {
    fn is_eof(&self) -> bool {
        self.decoded.is_eof()
    }

    fn read_byte(&mut self) -> Result<u8> {
        self.decoded.read_byte()
    }

    fn read_block(&mut self, buffer: &mut [u8]) -> Result<usize> {
        self.decoded.read_block(buffer)
    }
}
