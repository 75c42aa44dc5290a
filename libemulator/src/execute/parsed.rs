use libisa::{instruction::Instruction, Word};

use crate::Emulator;

use super::{ExecuteErr, ExecuteOk};

impl Emulator {
    pub fn execute_parsed_instruction(
        &mut self,
        instruction: Instruction,
    ) -> Result<ExecuteOk, ExecuteErr> {
        match instruction {
            Instruction::LoadWord { reg, addr } => {
                self.check_gpr(reg)?;

                let value = self.mem_word(addr as Word)?;
                self.set_reg(reg, value)?;
            }

            Instruction::StoreWord { reg, addr } => {
                let src = self.reg(reg)?;

                let mut dest = self.mem_word_mut(addr as Word)?;
                *dest = src;
            }

            // Registers are 16 bits wide, arithmetic wraps around.
            Instruction::Add { reg_a, reg_b } => {
                self.check_gpr(reg_a)?;

                let b = self.reg(reg_b)?;
                let a = self.reg(reg_a)?;

                self.set_reg(reg_a, a.wrapping_add(b))?;
            }

            Instruction::Sub { reg_a, reg_b } => {
                self.check_gpr(reg_a)?;

                let b = self.reg(reg_b)?;
                let a = self.reg(reg_a)?;

                self.set_reg(reg_a, a.wrapping_sub(b))?;
            }

            Instruction::Halt => return Ok(ExecuteOk::Halted),
        }

        Ok(ExecuteOk::Normal)
    }
}
