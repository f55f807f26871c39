//! Sluice - composable byte-stream transform pipeline
//!
//! Byte streams flow through a stack of decorators wrapped around a terminal
//! stream. Each decorator owns the stream it wraps and rewrites the bytes
//! passing through it; the stack is described by an ordered operation list
//! parsed from the command line.
//!
//! ```text
//! producer -> encrypt(k1) -> encrypt(k2) -> compress -> sink
//! source -> decompress -> decrypt(k2) -> decrypt(k1) -> consumer
//! ```
//!
//! Encryption is a keyed 256-byte substitution table, regenerated from the
//! key on both sides, so nothing but the key has to be shared.
//!
//! ## Example
//!
//! ```
//! use sluice::decorator::{DecryptionInputStream, EncryptionOutputStream};
//! use sluice::stream::{read_to_end, MemoryInputStream, MemoryOutputStream, OutputStream};
//!
//! let mut writer = EncryptionOutputStream::new(MemoryOutputStream::new(), 42);
//! writer.write_block(b"attack at dawn").unwrap();
//! writer.close().unwrap();
//! let encrypted = writer.into_inner().into_data();
//!
//! let mut reader = DecryptionInputStream::new(MemoryInputStream::new(encrypted), 42);
//! assert_eq!(read_to_end(&mut reader).unwrap(), b"attack at dawn");
//! ```

pub mod cipher;
pub mod cli;
pub mod command;
pub mod decorator;
pub mod error;
pub mod pipeline;
pub mod stream;

pub use command::{parse_command, Command, Operation, OperationKind};
pub use error::{Result, SluiceError};
pub use pipeline::{build_input_stream, build_output_stream, pump};
