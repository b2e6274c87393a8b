//! Instruction decoder
//!
//! Reads one instruction from a byte stream at a cursor position. The
//! operand bytes are returned verbatim; turning them into an effective
//! address is a separate step (see [`crate::resolver`]).

use crate::addressing::AddressingMode;
use crate::mnemonic::Mnemonic;
use crate::table::InstructionTable;
use crate::IsaError;

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic
    pub mnemonic: Mnemonic,

    /// Addressing mode used by this instruction
    pub mode: AddressingMode,

    /// Operand bytes exactly as they appeared in the stream (0-2 bytes)
    pub operand: Vec<u8>,

    /// Total bytes consumed from the stream (opcode + operand)
    pub bytes_consumed: usize,
}

impl DecodedInstruction {
    /// Operand as a number: the byte for one-byte operands, the little-endian
    /// word for two-byte operands, `None` when there is no operand.
    pub fn operand_value(&self) -> Option<u16> {
        match self.operand.as_slice() {
            [] => None,
            [value] => Some(u16::from(*value)),
            [low, high] => Some(u16::from_le_bytes([*low, *high])),
            _ => None,
        }
    }

    /// The instruction's bytes, opcode first.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.bytes_consumed);
        bytes.push(self.opcode);
        bytes.extend_from_slice(&self.operand);
        bytes
    }
}

/// Decodes instructions with a borrowed [`InstructionTable`].
///
/// # Examples
///
/// ```
/// use isa6502::{AddressingMode, Decoder, InstructionTable, Mnemonic};
///
/// let table = InstructionTable::nmos()?;
/// let decoder = Decoder::new(&table);
///
/// let program = [0xEA, 0xBD, 0xFF, 0x20];
/// let instr = decoder.decode(&program, 1)?;
///
/// assert_eq!(instr.mnemonic, Mnemonic::Lda);
/// assert_eq!(instr.mode, AddressingMode::AbsoluteX);
/// assert_eq!(instr.operand, vec![0xFF, 0x20]);
/// assert_eq!(instr.bytes_consumed, 3);
/// # Ok::<(), isa6502::IsaError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    table: &'t InstructionTable,
}

impl<'t> Decoder<'t> {
    pub fn new(table: &'t InstructionTable) -> Self {
        Self { table }
    }

    /// Decodes the instruction starting at `bytes[cursor]`.
    ///
    /// # Errors
    ///
    /// - [`IsaError::TruncatedInstruction`] if `cursor` is past the end of
    ///   `bytes` or the operand runs past the end
    /// - [`IsaError::IllegalOpcode`] if the opcode byte is undocumented
    pub fn decode(&self, bytes: &[u8], cursor: usize) -> Result<DecodedInstruction, IsaError> {
        let available = bytes.len().saturating_sub(cursor);
        let opcode = *bytes.get(cursor).ok_or(IsaError::TruncatedInstruction {
            cursor,
            expected: 1,
            available,
        })?;

        let entry = self.table.lookup_instruction(opcode)?;

        let size = entry.size_bytes();
        if available < size {
            return Err(IsaError::TruncatedInstruction {
                cursor,
                expected: size,
                available,
            });
        }

        Ok(DecodedInstruction {
            opcode,
            mnemonic: entry.mnemonic,
            mode: entry.mode,
            operand: bytes[cursor + 1..cursor + size].to_vec(),
            bytes_consumed: size,
        })
    }
}
