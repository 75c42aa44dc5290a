use std::ops::RangeInclusive;

pub mod instruction;


pub type Word = u16;

pub const BYTES_PER_WORD: usize = 2;

pub type Register = usize;

/// Register 0 holds the program counter and is never addressable by an instruction operand.
pub const PC_REGISTER: Register = 0;
pub const REGISTER_COUNT: usize = 3;
pub const GPR_RANGE: RangeInclusive<Register> = 1..=2;

pub const MEMORY_SIZE: usize = 20;

// Memory layout of an image. The regions are a convention, nothing stops a store from writing into the
// instruction region.
pub const INSTRUCTION_REGION: RangeInclusive<usize> = 0..=13;
pub const OUTPUT_ADDR: usize = 14;
pub const INPUT1_ADDR: usize = 16;
pub const INPUT2_ADDR: usize = 18;

pub fn is_gpr(register: Register) -> bool {
    GPR_RANGE.contains(&register)
}

pub fn word_to_bytes(word: Word) -> [u8; BYTES_PER_WORD] {
    [(word & 0x00FF) as u8, ((word & 0xFF00) >> 8) as u8]
}

pub fn bytes_to_word(bytes: [u8; BYTES_PER_WORD]) -> Word {
    (bytes[1] as u16) << 8 | (bytes[0] as u16)
}
