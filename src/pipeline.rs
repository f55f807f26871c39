//! Pipeline assembly: turning an ordered operation list into a nested
//! decorator chain around a terminal stream.
//!
//! On the output side the first declared operation is the outermost
//! transform, so bytes from the producer pass through the operations in
//! declaration order before reaching the sink. The input side is the mirror
//! image: the first declared operation sits closest to the physical source.
//! Together the two rules make `--decompress --decrypt k2 --decrypt k1` undo
//! `--encrypt k1 --encrypt k2 --compress` exactly.

use crate::command::{Operation, OperationKind};
use crate::decorator::{
    Compression, CompressionOutputStream, DecompressionInputStream, DecryptionInputStream,
    EncryptionOutputStream,
};
use crate::error::{Result, SluiceError};
use crate::stream::{InputStream, OutputStream};
use log::debug;

const PUMP_BUFFER_SIZE: usize = 8192;

/// Stack output decorators around a terminal sink.
pub fn build_output_stream(
    terminal: Box<dyn OutputStream>,
    operations: &[Operation],
) -> Result<Box<dyn OutputStream>> {
    // Wrap starting from the last operation so the first ends up outermost.
    let mut stream = terminal;
    for operation in operations.iter().rev() {
        debug!("stacking {} onto the output pipeline", operation.kind.flag());
        stream = match operation.kind {
            OperationKind::Encrypt => {
                Box::new(EncryptionOutputStream::new(stream, operation.key))
            }
            OperationKind::Compress => {
                Box::new(CompressionOutputStream::new(stream, Compression::default()))
            }
            kind => return Err(SluiceError::NotAnOutputOperation(kind.flag())),
        };
    }
    Ok(stream)
}

/// Stack input decorators around a terminal source.
pub fn build_input_stream(
    terminal: Box<dyn InputStream>,
    operations: &[Operation],
) -> Result<Box<dyn InputStream>> {
    // Wrap in declaration order so the first operation is applied to raw
    // source bytes first.
    let mut stream = terminal;
    for operation in operations {
        debug!("stacking {} onto the input pipeline", operation.kind.flag());
        stream = match operation.kind {
            OperationKind::Decrypt => {
                Box::new(DecryptionInputStream::new(stream, operation.key))
            }
            OperationKind::Decompress => {
                Box::new(DecompressionInputStream::new(stream, Compression::default())?)
            }
            kind => return Err(SluiceError::NotAnInputOperation(kind.flag())),
        };
    }
    Ok(stream)
}

/// Move every byte from `input` to `output` in fixed-size blocks.
/// Returns the number of bytes that crossed. Does not close `output`.
pub fn pump<I, O>(input: &mut I, output: &mut O) -> Result<u64>
where
    I: InputStream + ?Sized,
    O: OutputStream + ?Sized,
{
    let mut buffer = [0u8; PUMP_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let count = input.read_block(&mut buffer)?;
        if count == 0 {
            break;
        }
        output.write_block(&buffer[..count])?;
        total += count as u64;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encryption_table;
    use crate::stream::{read_to_end, FileOutputStream, MemoryInputStream, MemoryOutputStream};
    use tempfile::tempdir;

    fn compose_two_keys(payload: &[u8]) -> Vec<u8> {
        let first = encryption_table(1);
        let second = encryption_table(2);
        payload
            .iter()
            .map(|&b| second[first[b as usize] as usize])
            .collect()
    }

    #[test]
    fn first_output_operation_is_applied_first() {
        let payload = [1u8, 2, 3, 4, 5];
        let expected = compose_two_keys(&payload);

        // The assembler nests encrypt(2) closest to the sink for the list
        // [encrypt(1), encrypt(2)]; this concrete chain is its mirror.
        let mut writer = EncryptionOutputStream::new(
            EncryptionOutputStream::new(MemoryOutputStream::new(), 2),
            1,
        );
        writer.write_block(&payload).unwrap();
        writer.close().unwrap();

        assert_eq!(writer.into_inner().into_inner().into_data(), expected);
    }

    #[test]
    fn assembled_output_chain_matches_table_composition() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stacked.bin");
        let payload = [10u8, 20, 30, 40, 50];

        let operations = [Operation::encrypt(1), Operation::encrypt(2)];
        let sink = FileOutputStream::create(&path).unwrap();
        let mut output = build_output_stream(Box::new(sink), &operations).unwrap();
        output.write_block(&payload).unwrap();
        output.close().unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), compose_two_keys(&payload));
    }

    #[test]
    fn input_chain_reverses_the_output_chain() {
        let payload = b"mirror image nesting".to_vec();
        let stored = compose_two_keys(&payload);

        let operations = [Operation::decrypt(2), Operation::decrypt(1)];
        let mut input =
            build_input_stream(Box::new(MemoryInputStream::new(stored)), &operations).unwrap();

        assert_eq!(read_to_end(&mut input).unwrap(), payload);
    }

    #[test]
    fn pump_moves_every_byte_and_reports_the_count() {
        let payload: Vec<u8> = (0..20_000).map(|i| (i % 256) as u8).collect();
        let mut input = MemoryInputStream::new(payload.clone());
        let mut output = MemoryOutputStream::new();

        let moved = pump(&mut input, &mut output).unwrap();

        assert_eq!(moved, payload.len() as u64);
        assert_eq!(output.data(), &payload[..]);
        assert!(input.is_eof());
    }

    #[test]
    fn misrouted_operations_are_rejected() {
        let err = build_output_stream(
            Box::new(MemoryOutputStream::new()),
            &[Operation::decrypt(1)],
        )
        .err()
        .unwrap();
        assert!(matches!(err, SluiceError::NotAnOutputOperation("--decrypt")));

        let err = build_input_stream(
            Box::new(MemoryInputStream::new(Vec::new())),
            &[Operation::compress()],
        )
        .err()
        .unwrap();
        assert!(matches!(err, SluiceError::NotAnInputOperation("--compress")));
    }

    #[test]
    fn empty_operation_lists_leave_the_terminal_untouched() {
        let mut input =
            build_input_stream(Box::new(MemoryInputStream::new(vec![5, 6, 7])), &[]).unwrap();
        let mut output = build_output_stream(Box::new(MemoryOutputStream::new()), &[]).unwrap();

        let moved = pump(&mut input, &mut output).unwrap();
        output.close().unwrap();

        assert_eq!(moved, 3);
    }
}
