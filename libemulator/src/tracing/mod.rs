use libisa::{instruction::Instruction, Word};

use crate::memory::MemoryPatch;


#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmulatorTracing {
    pub steps: Vec<StepTrace>,
}

/// State changes made by a single executed instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    pub pc: Word,
    pub instruction: Instruction,

    /// General purpose registers after the instruction was executed.
    pub registers: [Option<Word>; libisa::REGISTER_COUNT - 1],
    pub memory_patches: Vec<MemoryPatch>,
}

impl EmulatorTracing {
    pub fn step(&self, step: usize) -> Option<&StepTrace> {
        self.steps.get(step)
    }

    pub fn steps_at_pc(&self, pc: Word) -> impl Iterator<Item = &StepTrace> + '_ {
        self.steps.iter().filter(move |step| step.pc == pc)
    }

    /// Value written to a memory byte by the latest patch up to and including the given step, `None` if
    /// the byte wasn't changed yet.
    pub fn memory_byte_after(&self, step: usize, addr: Word) -> Option<u8> {
        self.steps
            .iter()
            .take(step + 1) // Only consider steps up to the specified one.
            .flat_map(|trace| &trace.memory_patches)
            .filter(|patch| patch.addr == addr)
            .map(|patch| patch.new_value)
            .last()
    }

    pub(crate) fn add_step_trace(&mut self, step: StepTrace) {
        self.steps.push(step);
    }
}
