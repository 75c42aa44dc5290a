use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

lazy_static! {
    static ref KIND_OPCODE_BIMAP: BiMap<InstructionKind, u8> = BiMap::from_iter([
        (InstructionKind::LoadWord, 0x01),
        (InstructionKind::StoreWord, 0x02),
        (InstructionKind::Add, 0x03),
        (InstructionKind::Sub, 0x04),
        (InstructionKind::Halt, 0xFF),
    ]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    LoadWord,
    StoreWord,

    Add,
    Sub,

    Halt,
}

impl InstructionKind {
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        KIND_OPCODE_BIMAP.get_by_right(&opcode).copied()
    }

    pub fn opcode(&self) -> u8 {
        *KIND_OPCODE_BIMAP
            .get_by_left(self)
            .expect("No opcode mapping for instruction kind")
    }

    /// Encoded width in bytes, including the opcode.
    pub fn width(&self) -> usize {
        match self {
            Self::Halt => 1,
            _ => 3,
        }
    }

    pub fn has_operands(&self) -> bool {
        self.width() > 1
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::LoadWord => "load",
            Self::StoreWord => "store",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Halt => "halt",
        })
    }
}
