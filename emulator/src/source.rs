use std::{fs, path::PathBuf};

use anyhow::Context;
use libemulator::MemoryImage;
use libisa::instruction::{AssemblyError, Instruction};
use thiserror::Error;

use crate::Args;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("No memory image given, specify a path, --hex or --demo")]
    Missing,

    #[error("Bad hex byte {0:?}")]
    BadHex(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Hex(String),
    Demo,
}

impl ImageSource {
    pub fn from_args(args: &Args) -> Result<Self, SourceError> {
        if args.demo {
            return Ok(Self::Demo);
        }

        match (&args.image_path, &args.hex) {
            (Some(path), _) => Ok(Self::File(path.clone())),
            (None, Some(hex)) => Ok(Self::Hex(hex.clone())),
            (None, None) => Err(SourceError::Missing),
        }
    }

    pub fn load(&self) -> anyhow::Result<MemoryImage> {
        let bytes = match self {
            Self::File(path) => fs::read(path)
                .with_context(|| format!("Failed to read memory image {}", path.display()))?,
            Self::Hex(hex) => parse_hex(hex)?,
            Self::Demo => return Ok(demo_image()?),
        };

        Ok(MemoryImage::from_bytes(&bytes)?)
    }
}

pub fn parse_hex(hex: &str) -> Result<Vec<u8>, SourceError> {
    let digits: Vec<char> = hex.chars().filter(|c| !c.is_whitespace()).collect();

    digits
        .chunks(2)
        .map(|pair| {
            let pair: String = pair.iter().collect();

            if pair.len() != 2 {
                return Err(SourceError::BadHex(pair));
            }

            u8::from_str_radix(&pair, 16).map_err(|_| SourceError::BadHex(pair))
        })
        .collect()
}

/// Adds the two input words into the output word.
pub fn demo_image() -> Result<MemoryImage, AssemblyError> {
    Ok(MemoryImage::new()
        .with_program([
            Instruction::LoadWord { reg: 1, addr: 16 },
            Instruction::LoadWord { reg: 2, addr: 18 },
            Instruction::Add { reg_a: 1, reg_b: 2 },
            Instruction::StoreWord { reg: 1, addr: 14 },
            Instruction::Halt,
        ])?
        .with_input1(5281)
        .with_input2(12))
}
