use std::ops::{Deref, DerefMut};

use libisa::Word;

use super::Memory;

/// Structure to store word accessed memory mutations during use and automatically patch the changes into the byte-backed memory once dropped.
/// This is mostly transparent to users thanks to the Deref and DerefMut implementations, and acts like a mutable word upon dereference.
/// Prefer dereferencing this as you would with a mutable word reference over directly mutating the data field.
pub struct MemoryWordMutPatch<'a> {
    pub(super) memory: &'a mut Memory,
    pub(super) addr: Word,
    pub data: Word,
}

impl Deref for MemoryWordMutPatch<'_> {
    type Target = Word;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for MemoryWordMutPatch<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl Drop for MemoryWordMutPatch<'_> {
    fn drop(&mut self) {
        // Both addresses were bounds checked when the patch was handed out by Memory::word_mut.
        let [low, high] = libisa::word_to_bytes(self.data);

        self.memory.write_byte(self.addr, low);
        self.memory.write_byte(self.addr + 1, high);
    }
}
