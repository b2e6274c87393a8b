//! Fuzz target for the encoder.
//!
//! Encodes arbitrary (mnemonic text, mode, operand) triples. Whatever encodes
//! successfully must decode back to the same triple.

#![no_main]

use arbitrary::Arbitrary;
use isa6502::{decode, AddressingMode, InstructionTable};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    mnemonic: String,
    mode_index: u8,
    operand: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let mode = AddressingMode::ALL[input.mode_index as usize % AddressingMode::COUNT];
    let encoder = InstructionTable::shared().encoder();

    let Ok(bytes) = encoder.encode_str(&input.mnemonic, mode, &input.operand) else {
        return;
    };

    let instr = decode(&bytes, 0).expect("encoded bytes must decode");
    let name = instr.mnemonic.as_str();
    assert!(name.eq_ignore_ascii_case(&input.mnemonic));
    assert_eq!(instr.mode, mode);
    assert_eq!(instr.operand, input.operand);
});
