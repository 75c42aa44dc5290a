use clap::Parser;
use libemulator::EmulatorConfig;

use crate::Args;

use super::{demo_image, parse_hex, ImageSource, SourceError};

#[test]
fn hex_ignores_whitespace() {
    assert_eq!(parse_hex("01 01 10\nff"), Ok(vec![0x01, 0x01, 0x10, 0xFF]));
    assert_eq!(parse_hex("0a0B"), Ok(vec![0x0A, 0x0B]));
}

#[test]
fn bad_hex_is_rejected() {
    assert_eq!(parse_hex("0g"), Err(SourceError::BadHex("0g".to_string())));
    assert_eq!(parse_hex("010"), Err(SourceError::BadHex("0".to_string())));
}

#[test]
fn demo_adds_inputs() -> anyhow::Result<()> {
    let result = demo_image()?.run(EmulatorConfig::default())?;

    assert_eq!(result.output_word(), 5293);

    Ok(())
}

#[test]
fn source_from_args() {
    let args = Args::parse_from(["emulator", "--demo"]);
    assert_eq!(ImageSource::from_args(&args), Ok(ImageSource::Demo));

    let args = Args::parse_from(["emulator", "--hex", "ff"]);
    assert_eq!(ImageSource::from_args(&args), Ok(ImageSource::Hex("ff".to_string())));

    let args = Args::parse_from(["emulator"]);
    assert_eq!(ImageSource::from_args(&args), Err(SourceError::Missing));
}

#[test]
fn hex_image_must_be_full_size() {
    let source = ImageSource::Hex("ff".to_string());

    assert!(source.load().is_err(), "a single byte isn't a memory image");
}
