//! Fuzz target for the decoder and disassembler.
//!
//! Feeds arbitrary byte streams and cursors to the decoder, then checks that
//! the disassembler covers the whole stream.

#![no_main]

use arbitrary::Arbitrary;
use isa6502::{decode, disassemble, DisassemblyOptions, Instruction};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    cursor: usize,
    start_address: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    if let Ok(instr) = decode(&input.bytes, input.cursor) {
        assert!(input.cursor + instr.bytes_consumed <= input.bytes.len());
        assert_eq!(instr.operand.len() + 1, instr.bytes_consumed);
        assert_eq!(instr.bytes_consumed, instr.mode.instruction_size());
    }

    let options = DisassemblyOptions {
        start_address: input.start_address,
    };
    let instructions = disassemble(&input.bytes, options);

    let mut expected_address = input.start_address;
    let mut total_size = 0;
    for instr in &instructions {
        assert_eq!(instr.address(), expected_address);
        assert!((1..=3).contains(&instr.size_bytes()));

        total_size += instr.size_bytes();
        expected_address = expected_address.wrapping_add(instr.size_bytes() as u16);
    }

    assert_eq!(total_size, input.bytes.len());
    let rebuilt: Vec<u8> = instructions.iter().flat_map(Instruction::bytes).collect();
    assert_eq!(rebuilt, input.bytes);
});
