//! 6502 Disassembler Module
//!
//! Walks a whole byte stream with the [`Decoder`] and turns it into a listing.
//! Bytes that do not decode (undocumented opcodes, a truncated final
//! instruction) become one-byte `.byte` entries, so the listing always covers
//! the input exactly.

pub mod formatter;

use log::trace;

use crate::decoder::{DecodedInstruction, Decoder};
use crate::table::InstructionTable;
use crate::IsaError;

/// A single line of a disassembly listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// A documented instruction.
    Decoded {
        /// Memory address where this instruction starts
        address: u16,

        /// The decoded instruction
        instruction: DecodedInstruction,
    },

    /// A byte that could not be decoded.
    Data {
        /// Memory address of the byte
        address: u16,

        /// The raw byte
        value: u8,
    },
}

impl Instruction {
    /// Address of the first byte of this line.
    pub fn address(&self) -> u16 {
        match self {
            Instruction::Decoded { address, .. } | Instruction::Data { address, .. } => *address,
        }
    }

    /// Number of input bytes this line covers.
    pub fn size_bytes(&self) -> usize {
        match self {
            Instruction::Decoded { instruction, .. } => instruction.bytes_consumed,
            Instruction::Data { .. } => 1,
        }
    }

    /// The raw bytes this line covers.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Instruction::Decoded { instruction, .. } => instruction.to_bytes(),
            Instruction::Data { value, .. } => vec![*value],
        }
    }
}

/// Options controlling disassembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Address of the first byte of input
    pub start_address: u16,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x0000,
        }
    }
}

/// Disassemble a byte slice with the shared NMOS table.
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    disassemble_with(InstructionTable::shared(), bytes, options)
}

/// Disassemble a byte slice with an explicit table.
///
/// # Examples
///
/// ```
/// use isa6502::{disassemble_with, DisassemblyOptions, InstructionTable};
///
/// let table = InstructionTable::nmos()?;
/// let listing = disassemble_with(&table, &[0xA9, 0x01, 0xFF], DisassemblyOptions::default());
///
/// assert_eq!(listing.len(), 2);
/// assert_eq!(listing[1].address(), 0x0002);
/// # Ok::<(), isa6502::IsaError>(())
/// ```
pub fn disassemble_with(
    table: &InstructionTable,
    bytes: &[u8],
    options: DisassemblyOptions,
) -> Vec<Instruction> {
    let decoder = Decoder::new(table);
    let mut instructions = Vec::new();
    let mut cursor = 0;
    let mut address = options.start_address;

    while cursor < bytes.len() {
        let line = match decoder.decode(bytes, cursor) {
            Ok(instruction) => {
                trace!(
                    "${:04X}: {} {}",
                    address,
                    instruction.mnemonic,
                    instruction.mode
                );
                Instruction::Decoded {
                    address,
                    instruction,
                }
            }
            Err(err @ IsaError::TruncatedInstruction { .. }) => {
                // The rest of the stream is the cut-off instruction; none of it may decode.
                trace!("${:04X}: emitting trailing .byte run ({})", address, err);
                for &value in &bytes[cursor..] {
                    instructions.push(Instruction::Data { address, value });
                    address = address.wrapping_add(1);
                }
                break;
            }
            Err(err) => {
                trace!("${:04X}: emitting .byte ({})", address, err);
                Instruction::Data {
                    address,
                    value: bytes[cursor],
                }
            }
        };

        let size = line.size_bytes();
        cursor += size;
        address = address.wrapping_add(size as u16);
        instructions.push(line);
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddressingMode, Mnemonic};

    #[test]
    fn test_disassemble_empty() {
        let instructions = disassemble(&[], DisassemblyOptions::default());
        assert_eq!(instructions.len(), 0);
    }

    #[test]
    fn test_disassemble_sequence() {
        let bytes = [0xA2, 0x00, 0xBD, 0x00, 0x20, 0xE8, 0xD0, 0xFA];
        let options = DisassemblyOptions {
            start_address: 0x8000,
        };
        let instructions = disassemble(&bytes, options);

        let addresses: Vec<u16> = instructions.iter().map(Instruction::address).collect();
        assert_eq!(addresses, vec![0x8000, 0x8002, 0x8005, 0x8006]);

        match &instructions[1] {
            Instruction::Decoded { instruction, .. } => {
                assert_eq!(instruction.mnemonic, Mnemonic::Lda);
                assert_eq!(instruction.mode, AddressingMode::AbsoluteX);
            }
            other => panic!("expected LDA, got {other:?}"),
        }
    }

    #[test]
    fn test_illegal_opcode_becomes_data() {
        let instructions = disassemble(&[0x02, 0xEA], DisassemblyOptions::default());

        assert_eq!(
            instructions[0],
            Instruction::Data {
                address: 0x0000,
                value: 0x02,
            }
        );
        assert_eq!(instructions[1].address(), 0x0001);
    }

    #[test]
    fn test_truncated_tail_becomes_data() {
        let instructions = disassemble(&[0xEA, 0x8D, 0x00], DisassemblyOptions::default());

        assert_eq!(instructions.len(), 3);
        assert_eq!(
            instructions[1],
            Instruction::Data {
                address: 1,
                value: 0x8D,
            }
        );
        assert_eq!(
            instructions[2],
            Instruction::Data {
                address: 2,
                value: 0x00,
            }
        );
    }

    #[test]
    fn test_truncated_tail_address_wraps() {
        let options = DisassemblyOptions {
            start_address: 0xFFFF,
        };
        let instructions = disassemble(&[0x4C, 0xEA], options);

        let addresses: Vec<u16> = instructions.iter().map(Instruction::address).collect();
        assert_eq!(addresses, vec![0xFFFF, 0x0000]);
        assert!(instructions
            .iter()
            .all(|line| matches!(line, Instruction::Data { .. })));
    }

    #[test]
    fn test_address_wraps() {
        let options = DisassemblyOptions {
            start_address: 0xFFFF,
        };
        let instructions = disassemble(&[0xEA, 0xEA], options);
        assert_eq!(instructions[1].address(), 0x0000);
    }
}
