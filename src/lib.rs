//! # 6502 Instruction-Set Core
//!
//! The part of a 6502 toolchain that knows which byte means which
//! instruction. It maps (mnemonic, addressing mode) pairs to opcode bytes and
//! back, encodes and decodes single instructions, and computes effective
//! addresses with the exact carry and wraparound behaviour of the NMOS part.
//!
//! Lexing assembly text, placing bytes in a program image and executing
//! instructions all belong to callers; this crate is the shared table and
//! arithmetic they sit on.
//!
//! ## Quick Start
//!
//! ```rust
//! use isa6502::{AddressingMode, FlatMemory, InstructionTable, Mnemonic, Registers};
//!
//! let table = InstructionTable::nmos()?;
//!
//! // Assemble LDA ($10),Y
//! let bytes = table.encoder().encode(Mnemonic::Lda, AddressingMode::IndirectY, &[0x10])?;
//! assert_eq!(bytes, vec![0xB1, 0x10]);
//!
//! // Decode it again
//! let instr = table.decoder().decode(&bytes, 0)?;
//! assert_eq!(instr.mnemonic, Mnemonic::Lda);
//!
//! // Resolve the address it touches
//! let mut memory = FlatMemory::new();
//! memory.load(0x0010, &[0xFF, 0x30]);
//! let resolved = isa6502::resolve_instruction(&instr, Registers::new(0, 1), &memory)?;
//! assert_eq!(resolved.address, 0x3100);
//! assert!(resolved.page_crossed);
//! # Ok::<(), isa6502::IsaError>(())
//! ```
//!
//! ## Modules
//!
//! - `addressing` - Addressing mode enumeration and per-mode operand sizes
//! - `mnemonic` - The 56 documented mnemonics
//! - `opcodes` - Embedded opcode definitions
//! - `table` - Bidirectional instruction table
//! - `encoder` / `decoder` - Single-instruction encode and decode
//! - `resolver` - Effective-address computation
//! - `memory` - MemoryBus trait used for pointer reads
//! - `disassembler` - Whole-stream disassembly and formatting
//!
//! ## Features
//!
//! - `wasm` - JavaScript bindings via `wasm-bindgen`

pub mod addressing;
pub mod decoder;
pub mod disassembler;
pub mod encoder;
pub mod error;
pub mod memory;
pub mod mnemonic;
pub mod opcodes;
pub mod resolver;
pub mod table;
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use decoder::{DecodedInstruction, Decoder};
pub use disassembler::formatter::{format_instruction, format_listing_line};
pub use disassembler::{disassemble, disassemble_with, DisassemblyOptions, Instruction};
pub use encoder::{Encoder, Operand};
pub use error::IsaError;
pub use memory::{FlatMemory, MemoryBus};
pub use mnemonic::Mnemonic;
pub use opcodes::{InstructionEntry, DOCUMENTED_OPCODE_COUNT, OPCODE_DEFINITIONS};
pub use resolver::{resolve_address, resolve_instruction, Registers, ResolvedAddress};
pub use table::InstructionTable;

/// Encode one instruction with the shared NMOS table.
///
/// # Examples
///
/// ```
/// use isa6502::{encode, AddressingMode, Mnemonic};
///
/// assert_eq!(encode(Mnemonic::Asl, AddressingMode::ZeroPage, &[0x10])?, vec![0x06, 0x10]);
/// # Ok::<(), isa6502::IsaError>(())
/// ```
pub fn encode(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    operand: &[u8],
) -> Result<Vec<u8>, IsaError> {
    InstructionTable::shared().encoder().encode(mnemonic, mode, operand)
}

/// Decode the instruction at `cursor` with the shared NMOS table.
pub fn decode(bytes: &[u8], cursor: usize) -> Result<DecodedInstruction, IsaError> {
    InstructionTable::shared().decoder().decode(bytes, cursor)
}
