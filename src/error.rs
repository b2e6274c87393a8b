//! Error taxonomy shared by the table, encoder, decoder and resolver.

use thiserror::Error;

use crate::{AddressingMode, Mnemonic};

/// Errors reported by instruction-set operations.
///
/// Every variant except [`IsaError::DuplicateTableEntry`] describes bad caller
/// input and is recoverable. `DuplicateTableEntry` only comes out of table
/// construction and means the table data itself is corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsaError {
    /// Mnemonic text does not name a documented instruction.
    #[error("unknown mnemonic '{0}'")]
    UnknownMnemonic(String),

    /// Addressing mode text does not name a mode.
    #[error("unknown addressing mode '{0}'")]
    UnknownAddressingMode(String),

    /// The mnemonic exists but has no opcode for this mode.
    #[error("instruction {mnemonic} does not support addressing mode {mode}")]
    UnsupportedAddressingMode {
        mnemonic: Mnemonic,
        mode: AddressingMode,
    },

    /// The byte has no documented instruction assigned to it.
    #[error("illegal opcode 0x{0:02X}")]
    IllegalOpcode(u8),

    /// Operand length does not match what the addressing mode requires.
    #[error(
        "addressing mode {mode} takes {expected} operand byte(s), got {actual}"
    )]
    OperandSizeMismatch {
        mode: AddressingMode,
        expected: usize,
        actual: usize,
    },

    /// The byte stream ends before the instruction at `cursor` is complete.
    #[error(
        "truncated instruction at offset {cursor}: need {expected} byte(s), {available} available"
    )]
    TruncatedInstruction {
        cursor: usize,
        expected: usize,
        available: usize,
    },

    /// The addressing mode does not compute a memory address.
    #[error("addressing mode {0} has no effective address")]
    NoEffectiveAddress(AddressingMode),

    /// Two table definitions claim the same (mnemonic, mode) pair or the same opcode byte.
    #[error("duplicate table entry: {mnemonic} {mode} as 0x{opcode:02X}")]
    DuplicateTableEntry {
        mnemonic: Mnemonic,
        mode: AddressingMode,
        opcode: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = IsaError::UnsupportedAddressingMode {
            mnemonic: Mnemonic::Adc,
            mode: AddressingMode::Implied,
        };
        assert_eq!(
            err.to_string(),
            "instruction ADC does not support addressing mode Implied"
        );

        assert_eq!(
            IsaError::IllegalOpcode(0xFF).to_string(),
            "illegal opcode 0xFF"
        );

        let err = IsaError::OperandSizeMismatch {
            mode: AddressingMode::Absolute,
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "addressing mode Absolute takes 2 operand byte(s), got 1"
        );
    }
}
