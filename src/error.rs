use thiserror::Error;

#[derive(Error, Debug)]
pub enum SluiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("{0} requires a key argument")]
    MissingKey(&'static str),

    #[error("Invalid key {0:?}: keys must be unsigned integers")]
    InvalidKey(String),

    #[error("Key {0} does not fit in 32 bits")]
    KeyOutOfRange(String),

    #[error("Input file is missing")]
    MissingInputFile,

    #[error("Output file is missing")]
    MissingOutputFile,

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("{0} cannot be staged on an output pipeline")]
    NotAnOutputOperation(&'static str),

    #[error("{0} cannot be staged on an input pipeline")]
    NotAnInputOperation(&'static str),

    #[error("Cannot read past the end of the stream")]
    EndOfStream,

    #[error("Cannot write to a closed stream")]
    ClosedStream,

    #[error("Compression error: {0}")]
    Compression(String),

    #[error("Decompression error: {0}")]
    Decompression(String),
}

impl SluiceError {
    /// True for errors caused by a malformed command line rather than a
    /// failing stream. The binary prints usage for these.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownOption(_)
                | Self::MissingKey(_)
                | Self::InvalidKey(_)
                | Self::KeyOutOfRange(_)
                | Self::MissingInputFile
                | Self::MissingOutputFile
                | Self::UnexpectedArgument(_)
                | Self::NotAnOutputOperation(_)
                | Self::NotAnInputOperation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SluiceError>;
