use libisa::instruction::Instruction;

use crate::Deassembler;

const CANONICAL_IMAGE: [u8; 20] = [
    0x01, 0x01, 0x10, 0x01, 0x02, 0x12, 0x03, 0x01, 0x02, 0x02, 0x01, 0x0E, 0xFF, 0x00, 0x00,
    0x00, 0xA1, 0x14, 0x0C, 0x00,
];

#[test]
fn listing_stops_at_halt() {
    let listing = Deassembler::for_image(&CANONICAL_IMAGE).deassemble_text();

    assert_eq!(
        listing,
        " 0: load %1, [16]\n 3: load %2, [18]\n 6: add %1, %2\n 9: store %1, [14]\n12: halt\n"
    );
}

#[test]
fn instructions_with_addresses() {
    let instructions = Deassembler::for_image(&CANONICAL_IMAGE)
        .deassemble()
        .expect("Failed to deassemble");

    assert_eq!(instructions.len(), 5);
    assert_eq!(instructions[2], (6, Instruction::Add { reg_a: 1, reg_b: 2 }));
    assert_eq!(instructions[4], (12, Instruction::Halt));
}

#[test]
fn bad_bytes_are_marked() {
    let listing = Deassembler::new([0x01u8, 0x01, 0x10, 0x09].iter()).deassemble_text();
    assert_eq!(listing, " 0: load %1, [16]\n 3: <unrecognized opcode 0x09>\n");

    let listing = Deassembler::new([0x03u8, 0x01, 0x00].iter()).deassemble_text();
    assert_eq!(
        listing,
        " 0: <Operand 0 doesn't name a general purpose register>\n"
    );
}

#[test]
fn listing_stops_at_first_failure() {
    let listing = Deassembler::new([0x09u8, 0xFF].iter()).deassemble_text();
    assert_eq!(listing, " 0: <unrecognized opcode 0x09>\n");

    let listing = Deassembler::new([0xFFu8, 0x01].iter()).deassemble_text();
    assert_eq!(listing, " 0: halt\n", "bytes after halt are data");

    let listing = Deassembler::new([0x01u8, 0x01].iter()).deassemble_text();
    assert_eq!(listing, " 0: <incomplete instruction>\n");
}

#[test]
fn operands_past_instruction_region_are_incomplete() {
    let mut image = CANONICAL_IMAGE;
    image[12] = 0x01;
    image[13] = 0x01;

    let result = Deassembler::for_image(&image).deassemble();
    assert_eq!(result, Err("<incomplete instruction>".to_string()));
}
