use libisa::{Register, Word};

const GPR_COUNT: usize = libisa::REGISTER_COUNT - 1;

/// Program counter plus the general purpose registers, which stay `None` until first written.
#[derive(Debug, Clone, Default)]
pub struct RegFile {
    pc: Word,
    gprs: [Option<Word>; GPR_COUNT],
}

impl RegFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pc(&self) -> Word {
        self.pc
    }

    pub(crate) fn set_pc(&mut self, pc: Word) {
        self.pc = pc;
    }

    /// `None` for an uninitialized register and for an index that isn't a GPR.
    pub fn register(&self, index: Register) -> Option<Word> {
        self.gpr(index).copied().flatten()
    }

    /// Returns `None` without writing anything if `index` isn't a GPR.
    pub fn set_register(&mut self, index: Register, value: Word) -> Option<()> {
        *self.gpr_mut(index)? = Some(value);
        Some(())
    }

    pub fn gprs(&self) -> [Option<Word>; GPR_COUNT] {
        self.gprs
    }

    fn gpr(&self, index: Register) -> Option<&Option<Word>> {
        index.checked_sub(1).and_then(|slot| self.gprs.get(slot))
    }

    fn gpr_mut(&mut self, index: Register) -> Option<&mut Option<Word>> {
        index.checked_sub(1).and_then(|slot| self.gprs.get_mut(slot))
    }
}
