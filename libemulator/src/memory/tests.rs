use libisa::MEMORY_SIZE;

use super::{Memory, MemoryPatch};

#[test]
fn word_mut_patches_correctly() {
    let magic = 0xABCD;
    let expected_data = libisa::word_to_bytes(magic);

    let mut memory = Memory::new([0; MEMORY_SIZE]);
    *memory.word_mut(14).unwrap() = magic;

    assert_eq!(
        &memory.data()[14..16],
        &expected_data,
        "memory data {:x?} differs from expected {:x?}",
        memory.data(),
        expected_data
    )
}

#[test]
fn word_reads_little_endian() {
    let mut data = [0; MEMORY_SIZE];
    data[16] = 0xA1;
    data[17] = 0x14;

    let memory = Memory::new(data);

    assert_eq!(memory.word(16), Some(5281));
}

#[test]
fn accesses_are_bounds_checked() {
    let mut memory = Memory::new([0; MEMORY_SIZE]);

    assert_eq!(memory.byte(19), Some(0));
    assert_eq!(memory.byte(20), None);
    assert_eq!(memory.set_byte(20, 1), None);
    assert_eq!(memory.word(18), Some(0));
    assert!(memory.word(19).is_none(), "word at 19 would read past the end");
    assert!(memory.word_mut(19).is_none());
    assert!(memory.word(u16::MAX).is_none());
}

#[test]
fn only_changed_bytes_are_patched() {
    let mut data = [0; MEMORY_SIZE];
    data[14] = 0x2D;

    let mut memory = Memory::new(data);
    *memory.word_mut(14).unwrap() = 0x142D;
    memory.set_byte(0, 0).unwrap();

    let patches: Vec<_> = memory.drain_patches().collect();

    assert_eq!(
        patches,
        [MemoryPatch {
            addr: 15,
            old_value: 0x00,
            new_value: 0x14,
        }]
    );
    assert_eq!(memory.drain_patches().count(), 0, "patches should be drained");
}
