//! Builder for memory images, used by harnesses to set up a program with its inputs and to read back the
//! output word after a run.

use libisa::{
    instruction::{assembler, AssemblyError, Instruction},
    Word, INPUT1_ADDR, INPUT2_ADDR, MEMORY_SIZE, OUTPUT_ADDR,
};

use crate::{EmulatorConfig, ExecuteErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryImage([u8; MEMORY_SIZE]);

impl Default for MemoryImage {
    fn default() -> Self {
        Self([0; MEMORY_SIZE])
    }
}

impl From<[u8; MEMORY_SIZE]> for MemoryImage {
    fn from(data: [u8; MEMORY_SIZE]) -> Self {
        Self(data)
    }
}

impl MemoryImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExecuteErr> {
        let data: [u8; MEMORY_SIZE] = bytes
            .try_into()
            .map_err(|_| ExecuteErr::InvalidMemorySize(bytes.len()))?;

        Ok(Self(data))
    }

    /// Assembles the program into the start of the instruction region, the rest of the region is left as is.
    pub fn with_program<I>(mut self, program: I) -> Result<Self, AssemblyError>
    where
        I: IntoIterator<Item = Instruction>,
    {
        let machine_code = assembler::assemble(program)?;
        self.0[..machine_code.len()].copy_from_slice(&machine_code);

        Ok(self)
    }

    pub fn with_output(self, word: Word) -> Self {
        self.with_word(OUTPUT_ADDR, word)
    }

    pub fn with_input1(self, word: Word) -> Self {
        self.with_word(INPUT1_ADDR, word)
    }

    pub fn with_input2(self, word: Word) -> Self {
        self.with_word(INPUT2_ADDR, word)
    }

    pub fn output_word(&self) -> Word {
        self.word(OUTPUT_ADDR)
    }

    pub fn input1_word(&self) -> Word {
        self.word(INPUT1_ADDR)
    }

    pub fn input2_word(&self) -> Word {
        self.word(INPUT2_ADDR)
    }

    pub fn bytes(&self) -> &[u8; MEMORY_SIZE] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; MEMORY_SIZE] {
        self.0
    }

    pub fn run(&self, config: EmulatorConfig) -> Result<Self, ExecuteErr> {
        crate::run_with_config(&self.0, config).map(Self)
    }

    fn with_word(mut self, addr: usize, word: Word) -> Self {
        self.0[addr..addr + libisa::BYTES_PER_WORD].copy_from_slice(&libisa::word_to_bytes(word));
        self
    }

    fn word(&self, addr: usize) -> Word {
        libisa::bytes_to_word([self.0[addr], self.0[addr + 1]])
    }
}

/// Reads the output word of a final memory image.
pub fn output_word(image: &[u8; MEMORY_SIZE]) -> Word {
    MemoryImage::from(*image).output_word()
}
