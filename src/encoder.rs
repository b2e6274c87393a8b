//! Instruction encoder
//!
//! Turns an already-resolved (mnemonic, addressing mode, operand) triple into
//! machine code. Operand values are not range checked: a caller passing a
//! zero-page mode is responsible for the address actually fitting in one byte.

use crate::addressing::AddressingMode;
use crate::mnemonic::Mnemonic;
use crate::table::InstructionTable;
use crate::IsaError;

/// A typed operand, converted to little-endian bytes before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand bytes.
    None,
    /// A single byte (immediate value, zero-page address, branch offset).
    Byte(u8),
    /// A 16-bit address, emitted low byte first.
    Word(u16),
}

impl Operand {
    /// Operand bytes in emission order.
    pub fn to_bytes(self) -> Vec<u8> {
        match self {
            Operand::None => Vec::new(),
            Operand::Byte(value) => vec![value],
            Operand::Word(value) => value.to_le_bytes().to_vec(),
        }
    }

    /// Number of bytes this operand occupies.
    pub fn len(self) -> usize {
        match self {
            Operand::None => 0,
            Operand::Byte(_) => 1,
            Operand::Word(_) => 2,
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Encodes instructions with a borrowed [`InstructionTable`].
///
/// # Examples
///
/// ```
/// use isa6502::{AddressingMode, Encoder, InstructionTable, Mnemonic, Operand};
///
/// let table = InstructionTable::nmos()?;
/// let encoder = Encoder::new(&table);
///
/// assert_eq!(encoder.encode(Mnemonic::Asl, AddressingMode::Accumulator, &[])?, vec![0x0A]);
/// assert_eq!(
///     encoder.encode_operand(Mnemonic::Sta, AddressingMode::Absolute, Operand::Word(0x8000))?,
///     vec![0x8D, 0x00, 0x80]
/// );
/// # Ok::<(), isa6502::IsaError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'t> {
    table: &'t InstructionTable,
}

impl<'t> Encoder<'t> {
    pub fn new(table: &'t InstructionTable) -> Self {
        Self { table }
    }

    /// Encodes `[opcode] ++ operand`.
    ///
    /// `operand` holds raw bytes in emission order, so two-byte operands must
    /// already be least-significant byte first.
    ///
    /// # Errors
    ///
    /// - [`IsaError::UnsupportedAddressingMode`] if the mnemonic lacks `mode`
    /// - [`IsaError::OperandSizeMismatch`] if `operand.len()` differs from the
    ///   mode's operand size
    pub fn encode(
        &self,
        mnemonic: Mnemonic,
        mode: AddressingMode,
        operand: &[u8],
    ) -> Result<Vec<u8>, IsaError> {
        let opcode = self.table.lookup_opcode(mnemonic, mode)?;

        let expected = mode.operand_size();
        if operand.len() != expected {
            return Err(IsaError::OperandSizeMismatch {
                mode,
                expected,
                actual: operand.len(),
            });
        }

        let mut bytes = Vec::with_capacity(mode.instruction_size());
        bytes.push(opcode);
        bytes.extend_from_slice(operand);
        Ok(bytes)
    }

    /// Like [`encode`](Self::encode), taking the mnemonic as text.
    pub fn encode_str(
        &self,
        mnemonic: &str,
        mode: AddressingMode,
        operand: &[u8],
    ) -> Result<Vec<u8>, IsaError> {
        self.encode(mnemonic.parse()?, mode, operand)
    }

    /// Like [`encode`](Self::encode), taking a typed operand.
    pub fn encode_operand(
        &self,
        mnemonic: Mnemonic,
        mode: AddressingMode,
        operand: Operand,
    ) -> Result<Vec<u8>, IsaError> {
        self.encode(mnemonic, mode, &operand.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> Encoder<'static> {
        Encoder::new(InstructionTable::shared())
    }

    #[test]
    fn test_encode_accumulator() {
        assert_eq!(
            encoder().encode(Mnemonic::Asl, AddressingMode::Accumulator, &[]),
            Ok(vec![0x0A])
        );
    }

    #[test]
    fn test_encode_zero_page() {
        assert_eq!(
            encoder().encode(Mnemonic::Asl, AddressingMode::ZeroPage, &[0x10]),
            Ok(vec![0x06, 0x10])
        );
    }

    #[test]
    fn test_encode_absolute_keeps_byte_order() {
        assert_eq!(
            encoder().encode(Mnemonic::Jmp, AddressingMode::Absolute, &[0x34, 0x12]),
            Ok(vec![0x4C, 0x34, 0x12])
        );
    }

    #[test]
    fn test_encode_word_operand_is_little_endian() {
        assert_eq!(
            encoder().encode_operand(
                Mnemonic::Lda,
                AddressingMode::AbsoluteX,
                Operand::Word(0x20FF)
            ),
            Ok(vec![0xBD, 0xFF, 0x20])
        );
    }

    #[test]
    fn test_operand_size_mismatch() {
        assert_eq!(
            encoder().encode(Mnemonic::Lda, AddressingMode::Absolute, &[0x10]),
            Err(IsaError::OperandSizeMismatch {
                mode: AddressingMode::Absolute,
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(
            encoder().encode(Mnemonic::Nop, AddressingMode::Implied, &[0x00]),
            Err(IsaError::OperandSizeMismatch {
                mode: AddressingMode::Implied,
                expected: 0,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_unsupported_mode_reported_before_size() {
        assert_eq!(
            encoder().encode(Mnemonic::Adc, AddressingMode::Implied, &[0x01, 0x02, 0x03]),
            Err(IsaError::UnsupportedAddressingMode {
                mnemonic: Mnemonic::Adc,
                mode: AddressingMode::Implied,
            })
        );
    }

    #[test]
    fn test_encode_str() {
        assert_eq!(
            encoder().encode_str("CPY", AddressingMode::ZeroPage, &[0x44]),
            Ok(vec![0xC4, 0x44])
        );
        assert_eq!(
            encoder().encode_str("CPZ", AddressingMode::ZeroPage, &[0x44]),
            Err(IsaError::UnknownMnemonic("CPZ".to_string()))
        );
    }

    #[test]
    fn test_operand_helpers() {
        assert_eq!(Operand::None.to_bytes(), Vec::<u8>::new());
        assert!(Operand::None.is_empty());
        assert_eq!(Operand::Byte(0x7F).to_bytes(), vec![0x7F]);
        assert_eq!(Operand::Word(0xABCD).to_bytes(), vec![0xCD, 0xAB]);
        assert_eq!(Operand::Word(0xABCD).len(), 2);
    }
}
