//! Fuzz target for effective-address resolution.
//!
//! Resolves every addressing mode against arbitrary registers and a
//! fuzzer-chosen zero page, checking the zero-page and page-cross invariants.

#![no_main]

use arbitrary::Arbitrary;
use isa6502::{resolve_address, AddressingMode, FlatMemory, Registers};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    operand: u16,
    x: u8,
    y: u8,
    pc: u16,
    zero_page: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.zero_page[..input.zero_page.len().min(256)]);

    let registers = Registers::new(input.x, input.y).with_pc(input.pc);

    for mode in AddressingMode::ALL {
        match resolve_address(mode, input.operand, registers, &memory) {
            Ok(resolved) => {
                assert!(mode.references_memory());
                if mode.is_zero_page() {
                    assert!(resolved.address <= 0x00FF);
                    assert!(!resolved.page_crossed);
                }
            }
            Err(_) => assert!(!mode.references_memory()),
        }
    }
});
