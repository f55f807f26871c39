use crate::command::Command;
use crate::error::Result;
use crate::pipeline::{build_input_stream, build_output_stream, pump};
use crate::stream::{FileInputStream, FileOutputStream};
use log::debug;

/// Run the pipeline described by `command`: read the input file through the
/// input decorators and write the result through the output decorators.
///
/// Returns the number of bytes that crossed between the two stacks (after
/// input-side decoding, before output-side encoding).
pub fn transform_file(command: &Command) -> Result<u64> {
    let source = FileInputStream::open(&command.input_path)?;
    let mut input = build_input_stream(Box::new(source), &command.input_operations)?;

    let sink = FileOutputStream::create(&command.output_path)?;
    let mut output = build_output_stream(Box::new(sink), &command.output_operations)?;

    let copied = pump(&mut input, &mut output)?;
    output.close()?;

    debug!(
        "pumped {} bytes from {} to {}",
        copied,
        command.input_path.display(),
        command.output_path.display()
    );
    Ok(copied)
}
