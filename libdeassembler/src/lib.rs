use std::{iter::Peekable, slice};

use libisa::instruction::{kind::InstructionKind, Instruction};

#[cfg(test)]
mod tests;

pub struct Deassembler<'a, I>
where
    I: Iterator<Item = &'a u8>,
{
    code_iter: Peekable<I>,
    addr: usize,
    halted: bool,
}

impl<'a> Deassembler<'a, slice::Iter<'a, u8>> {
    /// Deassembles the instruction region of a memory image, anything past it is data.
    pub fn for_image(image: &'a [u8]) -> Self {
        let region_len = (libisa::INSTRUCTION_REGION.end() + 1).min(image.len());
        Self::new(image[..region_len].iter())
    }
}

impl<'a, I> Deassembler<'a, I>
where
    I: Iterator<Item = &'a u8>,
{
    pub fn new(code_iter: I) -> Self {
        Self {
            code_iter: code_iter.peekable(),
            addr: 0,
            halted: false,
        }
    }

    /// Deassembles up to and including the first halt, pairing each instruction with its address.
    pub fn deassemble(mut self) -> Result<Vec<(usize, Instruction)>, String> {
        let mut output = Vec::new();

        while !self.is_done() {
            let addr = self.addr;
            output.push((addr, self.deassemble_instruction()?));
        }

        Ok(output)
    }

    pub fn deassemble_text(mut self) -> String {
        let mut output = String::new();

        while !self.is_done() {
            let addr = self.addr;

            match self.deassemble_instruction() {
                Ok(instruction) => output.push_str(&format!("{:>2}: {}\n", addr, instruction)),
                Err(e) => {
                    output.push_str(&format!("{:>2}: {}\n", addr, e));
                    break;
                }
            }
        }

        output
    }

    pub fn deassemble_instruction(&mut self) -> Result<Instruction, String> {
        let opcode = *self
            .code_iter
            .next()
            .ok_or("<out of deassembler bounds>".to_string())?;
        self.addr += 1;

        let kind = InstructionKind::from_opcode(opcode)
            .ok_or_else(|| format!("<unrecognized opcode 0x{:02x}>", opcode))?;

        let mut operands = [0; 2];
        if kind.has_operands() {
            for operand in operands.iter_mut() {
                *operand = *self
                    .code_iter
                    .next()
                    .ok_or("<incomplete instruction>".to_string())?;
                self.addr += 1;
            }
        }

        let instruction = Instruction::decode(kind, operands).map_err(|e| format!("<{}>", e))?;
        self.halted = instruction == Instruction::Halt;

        Ok(instruction)
    }

    fn is_done(&mut self) -> bool {
        self.halted || self.code_iter.peek().is_none()
    }
}
