use libisa::{Word, MEMORY_SIZE};
use wordmut::MemoryWordMutPatch;

pub mod wordmut;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryPatch {
    pub addr: Word,
    pub old_value: u8,
    pub new_value: u8,
}

pub struct Memory {
    data: [u8; MEMORY_SIZE],

    // Every byte change since the last drain, in write order.
    patches: Vec<MemoryPatch>,
}

impl Memory {
    pub fn new(data: [u8; MEMORY_SIZE]) -> Self {
        Self {
            data,
            patches: Vec::new(),
        }
    }

    pub fn byte(&self, addr: Word) -> Option<u8> {
        self.data.get(addr as usize).copied()
    }

    pub fn set_byte(&mut self, addr: Word, value: u8) -> Option<()> {
        if addr as usize >= self.data.len() {
            return None;
        }

        self.write_byte(addr, value);

        Some(())
    }

    pub fn word(&self, addr: Word) -> Option<Word> {
        let first_byte = self.byte(addr)?;
        let second_byte = self.byte(addr.checked_add(1)?)?;

        Some(libisa::bytes_to_word([first_byte, second_byte]))
    }

    pub fn word_mut(&mut self, addr: Word) -> Option<MemoryWordMutPatch<'_>> {
        let data = self.word(addr)?;

        Some(MemoryWordMutPatch {
            memory: self,
            addr,
            data,
        })
    }

    pub fn data(&self) -> &[u8; MEMORY_SIZE] {
        &self.data
    }

    pub fn into_data(self) -> [u8; MEMORY_SIZE] {
        self.data
    }

    pub fn drain_patches(&mut self) -> impl Iterator<Item = MemoryPatch> + '_ {
        self.patches.drain(..)
    }

    // Callers guarantee the address is in bounds.
    fn write_byte(&mut self, addr: Word, value: u8) {
        let byte = &mut self.data[addr as usize];

        if *byte != value {
            self.patches.push(MemoryPatch {
                addr,
                old_value: *byte,
                new_value: value,
            });
            *byte = value;
        }
    }
}
