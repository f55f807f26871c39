use sluice::cli::transform_file;
use sluice::command::parse_command;
use std::env;
use std::process::ExitCode;

const USAGE: &str =
    "Usage: sluice [--encrypt <key>] [--decrypt <key>] [--compress] [--decompress] <input-file> <output-file>";

fn main() -> ExitCode {
    env_logger::init();

    let tokens: Vec<String> = env::args().skip(1).collect();
    let command = match parse_command(tokens) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match transform_file(&command) {
        Ok(bytes) => {
            println!(
                "{} -> {} ({} bytes)",
                command.input_path.display(),
                command.output_path.display(),
                bytes
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_configuration() {
                eprintln!("{}", USAGE);
            }
            ExitCode::FAILURE
        }
    }
}
