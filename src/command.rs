//! Operation model and command-line parsing.
//!
//! The command line is a flat token sequence: zero or more flags, then
//! exactly two positional file paths. Flag order is preserved exactly as the
//! order of the operations staged on each side of the pipeline.

use crate::error::{Result, SluiceError};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Encrypt,
    Decrypt,
    Compress,
    Decompress,
}

impl OperationKind {
    /// The command-line flag that introduces this operation.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Encrypt => "--encrypt",
            Self::Decrypt => "--decrypt",
            Self::Compress => "--compress",
            Self::Decompress => "--decompress",
        }
    }
}

/// One requested transform. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    /// Cipher key; 0 for operations that do not take one.
    pub key: u32,
}

impl Operation {
    pub fn encrypt(key: u32) -> Self {
        Self {
            kind: OperationKind::Encrypt,
            key,
        }
    }

    pub fn decrypt(key: u32) -> Self {
        Self {
            kind: OperationKind::Decrypt,
            key,
        }
    }

    pub fn compress() -> Self {
        Self {
            kind: OperationKind::Compress,
            key: 0,
        }
    }

    pub fn decompress() -> Self {
        Self {
            kind: OperationKind::Decompress,
            key: 0,
        }
    }
}

/// A fully parsed command: the files to read and write, and the transforms
/// staged on each side, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Applied while reading the input file.
    pub input_operations: Vec<Operation>,
    /// Applied while writing the output file.
    pub output_operations: Vec<Operation>,
}

const FLAG_PREFIX: &str = "--";

/// Parse a token sequence (process arguments without the program name).
pub fn parse_command<I>(tokens: I) -> Result<Command>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

    let mut input_operations = Vec::new();
    let mut output_operations = Vec::new();
    let mut index = 0;

    while index < tokens.len() && tokens[index].starts_with(FLAG_PREFIX) {
        let flag = tokens[index].clone();
        index += 1;
        match flag.as_str() {
            "--encrypt" => {
                let key = take_key(&tokens, &mut index, "--encrypt")?;
                output_operations.push(Operation::encrypt(key));
            }
            "--decrypt" => {
                let key = take_key(&tokens, &mut index, "--decrypt")?;
                input_operations.push(Operation::decrypt(key));
            }
            "--compress" => output_operations.push(Operation::compress()),
            "--decompress" => input_operations.push(Operation::decompress()),
            _ => return Err(SluiceError::UnknownOption(flag)),
        }
    }

    let input_path: PathBuf = tokens
        .get(index)
        .ok_or(SluiceError::MissingInputFile)?
        .into();
    index += 1;

    let output_path: PathBuf = tokens
        .get(index)
        .ok_or(SluiceError::MissingOutputFile)?
        .into();
    index += 1;

    if let Some(extra) = tokens.get(index) {
        return Err(SluiceError::UnexpectedArgument(extra.clone()));
    }

    Ok(Command {
        input_path,
        output_path,
        input_operations,
        output_operations,
    })
}

fn take_key(tokens: &[String], index: &mut usize, flag: &'static str) -> Result<u32> {
    let token = tokens.get(*index).ok_or(SluiceError::MissingKey(flag))?;
    *index += 1;
    parse_key(token)
}

/// Keys are decimal, digits only, and must fit in 32 bits.
fn parse_key(token: &str) -> Result<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SluiceError::InvalidKey(token.to_string()));
    }
    let value: u64 = token
        .parse()
        .map_err(|_| SluiceError::KeyOutOfRange(token.to_string()))?;
    if value > u64::from(u32::MAX) {
        return Err(SluiceError::KeyOutOfRange(token.to_string()));
    }
    Ok(value as u32)
}
