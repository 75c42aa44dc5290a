use libisa::{
    instruction::{kind::InstructionKind, Instruction, InstructionDeassemblyError},
    Register, Word,
};
use log::{debug, info, trace, warn};
use thiserror::Error;

use crate::{memory::wordmut::MemoryWordMutPatch, tracing::StepTrace, Emulator};

mod parsed;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    Normal,
    Halted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteErr {
    #[error("Memory image is {0} bytes long, expected {size}", size = libisa::MEMORY_SIZE)]
    InvalidMemorySize(usize),

    #[error("Unknown opcode 0x{opcode:02x} at {pc}")]
    UnknownOpcode { pc: Word, opcode: u8 },

    #[error("Operand {register} at {pc} doesn't name a general purpose register")]
    InvalidOperand { pc: Word, register: u8 },

    #[error("Memory access out of bounds ({0})")]
    OutOfBounds(Word),

    #[error("Read of uninitialized register %{0}")]
    UninitializedRegisterRead(Register),

    #[error("Didn't halt within {0} executed instructions")]
    StepLimitExceeded(usize),
}

impl Emulator {
    /// Executes instructions until a halt is reached, returning the number of executed instructions.
    pub fn execute_to_halt(&mut self) -> Result<usize, ExecuteErr> {
        loop {
            if let Some(max_steps) = self.config.max_steps {
                if self.steps >= max_steps {
                    warn!("Aborting run after {} instructions", self.steps);
                    return Err(ExecuteErr::StepLimitExceeded(max_steps));
                }
            }

            match self.execute_instruction() {
                Ok(ExecuteOk::Normal) => {}
                Ok(ExecuteOk::Halted) => {
                    info!("Halted at {} after {} instructions", self.reg_file.pc(), self.steps);
                    return Ok(self.steps);
                }
                Err(e) => {
                    warn!("Run failed at {}: {}", self.reg_file.pc(), e);
                    return Err(e);
                }
            }
        }
    }

    pub fn execute_instruction(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        let pc = self.reg_file.pc();

        let instruction = self.parse_next_instruction()?;
        debug!("{:>2}: {}", pc, instruction);

        // A failed instruction leaves the PC pointing at itself.
        let result = self.execute_parsed_instruction(instruction)?;
        if result == ExecuteOk::Normal {
            self.reg_file.set_pc(pc + instruction.kind().width() as Word);
        }
        self.steps += 1;

        let memory_patches: Vec<_> = self.memory.drain_patches().collect();
        for patch in &memory_patches {
            trace!(
                "[{}] {:02x} -> {:02x}",
                patch.addr,
                patch.old_value,
                patch.new_value
            );
        }

        if let Some(tracing) = &mut self.tracing {
            tracing.add_step_trace(StepTrace {
                pc,
                instruction,
                registers: self.reg_file.gprs(),
                memory_patches,
            });
        }

        Ok(result)
    }

    fn parse_next_instruction(&self) -> Result<Instruction, ExecuteErr> {
        let pc = self.reg_file.pc();

        let opcode = self.fetch_byte(pc)?;
        let kind =
            InstructionKind::from_opcode(opcode).ok_or(ExecuteErr::UnknownOpcode { pc, opcode })?;

        // Halt has no operands and doesn't move the PC, the bytes after it may well be data.
        if !kind.has_operands() {
            return Instruction::decode(kind, [0; 2]).map_err(|e| Self::decode_err(pc, e));
        }

        let operands = [self.fetch_byte(pc + 1)?, self.fetch_byte(pc + 2)?];
        Instruction::decode(kind, operands).map_err(|e| Self::decode_err(pc, e))
    }

    fn decode_err(pc: Word, err: InstructionDeassemblyError) -> ExecuteErr {
        match err {
            InstructionDeassemblyError::UnrecognizedOpcode(opcode) => {
                ExecuteErr::UnknownOpcode { pc, opcode }
            }
            InstructionDeassemblyError::InvalidRegister(register) => {
                ExecuteErr::InvalidOperand { pc, register }
            }
        }
    }

    /// Reads a byte of the instruction stream, which must not leave the instruction region.
    fn fetch_byte(&self, addr: Word) -> Result<u8, ExecuteErr> {
        if !libisa::INSTRUCTION_REGION.contains(&(addr as usize)) {
            return Err(ExecuteErr::OutOfBounds(addr));
        }

        self.mem_byte(addr)
    }

    fn mem_byte(&self, addr: Word) -> Result<u8, ExecuteErr> {
        self.memory
            .byte(addr)
            .ok_or(ExecuteErr::OutOfBounds(addr))
    }

    fn mem_word(&self, addr: Word) -> Result<Word, ExecuteErr> {
        self.memory
            .word(addr)
            .ok_or(ExecuteErr::OutOfBounds(addr))
    }

    fn mem_word_mut(&mut self, addr: Word) -> Result<MemoryWordMutPatch<'_>, ExecuteErr> {
        self.memory
            .word_mut(addr)
            .ok_or(ExecuteErr::OutOfBounds(addr))
    }

    fn reg(&self, index: Register) -> Result<Word, ExecuteErr> {
        self.check_gpr(index)?;

        self.reg_file
            .register(index)
            .ok_or(ExecuteErr::UninitializedRegisterRead(index))
    }

    fn set_reg(&mut self, index: Register, value: Word) -> Result<(), ExecuteErr> {
        self.check_gpr(index)?;

        self.reg_file
            .set_register(index, value)
            .ok_or_else(|| self.invalid_operand(index))
    }

    /// Instructions built by hand can carry any register index, not just the decoded ones.
    fn check_gpr(&self, index: Register) -> Result<(), ExecuteErr> {
        if libisa::is_gpr(index) {
            Ok(())
        } else {
            Err(self.invalid_operand(index))
        }
    }

    fn invalid_operand(&self, index: Register) -> ExecuteErr {
        ExecuteErr::InvalidOperand {
            pc: self.reg_file.pc(),
            register: u8::try_from(index).unwrap_or(u8::MAX),
        }
    }
}
