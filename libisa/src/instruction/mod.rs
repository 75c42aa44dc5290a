use std::fmt::Display;

use kind::InstructionKind;
use thiserror::Error;

use crate::{is_gpr, Register};

pub mod assembler;
pub mod kind;


/// Memory address operand, a single byte in the encoding.
pub type Address = u8;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Program of {len} bytes doesn't fit into the {max} byte instruction region")]
    ProgramTooLong { len: usize, max: usize },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InstructionDeassemblyError {
    #[error("Unrecognized opcode 0x{0:02x}")]
    UnrecognizedOpcode(u8),

    #[error("Operand {0} doesn't name a general purpose register")]
    InvalidRegister(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    LoadWord { reg: Register, addr: Address },
    StoreWord { reg: Register, addr: Address },
    Add { reg_a: Register, reg_b: Register },
    Sub { reg_a: Register, reg_b: Register },
    Halt,
}

impl Instruction {
    pub const fn kind(&self) -> InstructionKind {
        match self {
            Self::LoadWord { .. } => InstructionKind::LoadWord,
            Self::StoreWord { .. } => InstructionKind::StoreWord,
            Self::Add { .. } => InstructionKind::Add,
            Self::Sub { .. } => InstructionKind::Sub,
            Self::Halt => InstructionKind::Halt,
        }
    }

    /// Encodes the instruction. Register operands are written as given, so a program with invalid
    /// operands can still be assembled and will be rejected once it's decoded.
    pub fn assemble(self) -> Vec<u8> {
        let opcode = self.kind().opcode();

        match self {
            Self::LoadWord { reg, addr } | Self::StoreWord { reg, addr } => {
                vec![opcode, reg as u8, addr]
            }
            Self::Add { reg_a, reg_b } | Self::Sub { reg_a, reg_b } => {
                vec![opcode, reg_a as u8, reg_b as u8]
            }
            Self::Halt => vec![opcode],
        }
    }

    /// Builds an instruction of an already decoded kind from its operand bytes. Operands are ignored for
    /// kinds which have none.
    pub fn decode(
        kind: InstructionKind,
        operands: [u8; 2],
    ) -> Result<Self, InstructionDeassemblyError> {
        let [first, second] = operands;

        Ok(match kind {
            InstructionKind::LoadWord => Self::LoadWord {
                reg: Self::decode_register(first)?,
                addr: second,
            },
            InstructionKind::StoreWord => Self::StoreWord {
                reg: Self::decode_register(first)?,
                addr: second,
            },
            InstructionKind::Add => Self::Add {
                reg_a: Self::decode_register(first)?,
                reg_b: Self::decode_register(second)?,
            },
            InstructionKind::Sub => Self::Sub {
                reg_a: Self::decode_register(first)?,
                reg_b: Self::decode_register(second)?,
            },
            InstructionKind::Halt => Self::Halt,
        })
    }

    fn decode_register(operand: u8) -> Result<Register, InstructionDeassemblyError> {
        let register = operand as Register;

        is_gpr(register)
            .then_some(register)
            .ok_or(InstructionDeassemblyError::InvalidRegister(operand))
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.kind()))?;

        match self {
            Self::LoadWord { reg, addr } | Self::StoreWord { reg, addr } => {
                f.write_fmt(format_args!(" %{}, [{}]", reg, addr))
            }
            Self::Add { reg_a, reg_b } | Self::Sub { reg_a, reg_b } => {
                f.write_fmt(format_args!(" %{}, %{}", reg_a, reg_b))
            }
            Self::Halt => Ok(()),
        }
    }
}
