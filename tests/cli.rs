use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn sluice_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sluice"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(sluice_command().args(args).output()?)
}

#[test]
fn cli_end_to_end_encrypt_compress_decrypt_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.dat");
    let sealed = dir.path().join("sealed.dat");
    let restored = dir.path().join("restored.dat");

    let payload: Vec<u8> = (0..20_000).map(|i| ((i * 7 + 13) % 256) as u8).collect();
    fs::write(&plain, &payload)?;

    let seal = run(&[
        "--encrypt",
        "3",
        "--encrypt",
        "100500",
        "--compress",
        plain.to_str().unwrap(),
        sealed.to_str().unwrap(),
    ])?;
    assert!(
        seal.status.success(),
        "seal run failed: {}",
        String::from_utf8_lossy(&seal.stderr)
    );
    assert!(
        String::from_utf8(seal.stdout.clone())?.contains("bytes"),
        "seal output missing byte count"
    );
    assert!(sealed.exists(), "sealed file should exist");
    assert_ne!(fs::read(&sealed)?, payload);

    let restore = run(&[
        "--decompress",
        "--decrypt",
        "100500",
        "--decrypt",
        "3",
        sealed.to_str().unwrap(),
        restored.to_str().unwrap(),
    ])?;
    assert!(
        restore.status.success(),
        "restore run failed: {}",
        String::from_utf8_lossy(&restore.stderr)
    );

    assert_eq!(fs::read(&restored)?, payload, "restored file must match input");
    Ok(())
}

#[test]
fn cli_copies_files_without_flags() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("in.dat");
    let output = dir.path().join("out.dat");
    fs::write(&input, b"copy me, byte for byte")?;

    let copy = run(&[input.to_str().unwrap(), output.to_str().unwrap()])?;
    assert!(
        copy.status.success(),
        "copy run failed: {}",
        String::from_utf8_lossy(&copy.stderr)
    );

    assert_eq!(fs::read(&output)?, fs::read(&input)?);
    Ok(())
}

#[test]
fn cli_rejects_malformed_command_lines() -> Result<(), Box<dyn Error>> {
    for args in [
        vec!["--encrypt"],
        vec!["--encrypt", "abc", "in.dat", "out.dat"],
        vec!["--encrypt", "4294967296", "in.dat", "out.dat"],
        vec!["--sideways", "in.dat", "out.dat"],
        vec!["only-one-file"],
    ] {
        let output = run(&args)?;
        assert!(
            !output.status.success(),
            "{:?} should have been rejected",
            args
        );

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Error:"),
            "{:?} should report an error, got: {}",
            args,
            stderr
        );
        assert!(
            stderr.contains("Usage: sluice"),
            "{:?} should print usage, got: {}",
            args,
            stderr
        );
    }
    Ok(())
}

#[test]
fn cli_reports_a_missing_input_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let absent = dir.path().join("absent.dat");
    let output_path = dir.path().join("out.dat");

    let output = run(&[absent.to_str().unwrap(), output_path.to_str().unwrap()])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    Ok(())
}
