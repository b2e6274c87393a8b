//! # Opcode Definitions
//!
//! The embedded instruction data: every documented NMOS 6502 opcode, grouped by
//! mnemonic. This is the only source the [`InstructionTable`](crate::InstructionTable)
//! is built from; nothing is loaded at runtime.
//!
//! The 105 undocumented opcode values are deliberately absent.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;
use crate::mnemonic::Mnemonic;
use crate::mnemonic::Mnemonic::*;

/// One (mnemonic, addressing mode, opcode byte) triple.
///
/// # Examples
///
/// ```
/// use isa6502::{AddressingMode, InstructionEntry, Mnemonic};
///
/// let entry = InstructionEntry::new(Mnemonic::Lda, AddressingMode::Immediate, 0xA9);
/// assert_eq!(entry.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstructionEntry {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode of this encoding.
    pub mode: AddressingMode,

    /// Opcode byte identifying the (mnemonic, mode) pair.
    pub opcode: u8,
}

impl InstructionEntry {
    /// Creates an entry.
    pub const fn new(mnemonic: Mnemonic, mode: AddressingMode, opcode: u8) -> Self {
        Self {
            mnemonic,
            mode,
            opcode,
        }
    }

    /// Total encoded size (opcode + operand bytes).
    pub const fn size_bytes(&self) -> usize {
        self.mode.instruction_size()
    }
}

const fn def(mnemonic: Mnemonic, mode: AddressingMode, opcode: u8) -> InstructionEntry {
    InstructionEntry::new(mnemonic, mode, opcode)
}

/// Number of documented opcodes.
pub const DOCUMENTED_OPCODE_COUNT: usize = 151;

/// All documented NMOS 6502 opcodes.
///
/// CPY owns 0xC0/0xC4/0xCC; CPX owns 0xE0/0xE4/0xEC.
pub const OPCODE_DEFINITIONS: [InstructionEntry; DOCUMENTED_OPCODE_COUNT] = [
    // ADC
    def(Adc, Immediate, 0x69),
    def(Adc, ZeroPage, 0x65),
    def(Adc, ZeroPageX, 0x75),
    def(Adc, Absolute, 0x6D),
    def(Adc, AbsoluteX, 0x7D),
    def(Adc, AbsoluteY, 0x79),
    def(Adc, IndirectX, 0x61),
    def(Adc, IndirectY, 0x71),

    // AND
    def(And, Immediate, 0x29),
    def(And, ZeroPage, 0x25),
    def(And, ZeroPageX, 0x35),
    def(And, Absolute, 0x2D),
    def(And, AbsoluteX, 0x3D),
    def(And, AbsoluteY, 0x39),
    def(And, IndirectX, 0x21),
    def(And, IndirectY, 0x31),

    // ASL
    def(Asl, Accumulator, 0x0A),
    def(Asl, ZeroPage, 0x06),
    def(Asl, ZeroPageX, 0x16),
    def(Asl, Absolute, 0x0E),
    def(Asl, AbsoluteX, 0x1E),

    // BCC
    def(Bcc, Relative, 0x90),

    // BCS
    def(Bcs, Relative, 0xB0),

    // BEQ
    def(Beq, Relative, 0xF0),

    // BIT
    def(Bit, ZeroPage, 0x24),
    def(Bit, Absolute, 0x2C),

    // BMI
    def(Bmi, Relative, 0x30),

    // BNE
    def(Bne, Relative, 0xD0),

    // BPL
    def(Bpl, Relative, 0x10),

    // BRK
    def(Brk, Implied, 0x00),

    // BVC
    def(Bvc, Relative, 0x50),

    // BVS
    def(Bvs, Relative, 0x70),

    // CLC
    def(Clc, Implied, 0x18),

    // CLD
    def(Cld, Implied, 0xD8),

    // CLI
    def(Cli, Implied, 0x58),

    // CLV
    def(Clv, Implied, 0xB8),

    // CMP
    def(Cmp, Immediate, 0xC9),
    def(Cmp, ZeroPage, 0xC5),
    def(Cmp, ZeroPageX, 0xD5),
    def(Cmp, Absolute, 0xCD),
    def(Cmp, AbsoluteX, 0xDD),
    def(Cmp, AbsoluteY, 0xD9),
    def(Cmp, IndirectX, 0xC1),
    def(Cmp, IndirectY, 0xD1),

    // CPX
    def(Cpx, Immediate, 0xE0),
    def(Cpx, ZeroPage, 0xE4),
    def(Cpx, Absolute, 0xEC),

    // CPY
    def(Cpy, Immediate, 0xC0),
    def(Cpy, ZeroPage, 0xC4),
    def(Cpy, Absolute, 0xCC),

    // DEC
    def(Dec, ZeroPage, 0xC6),
    def(Dec, ZeroPageX, 0xD6),
    def(Dec, Absolute, 0xCE),
    def(Dec, AbsoluteX, 0xDE),

    // DEX
    def(Dex, Implied, 0xCA),

    // DEY
    def(Dey, Implied, 0x88),

    // EOR
    def(Eor, Immediate, 0x49),
    def(Eor, ZeroPage, 0x45),
    def(Eor, ZeroPageX, 0x55),
    def(Eor, Absolute, 0x4D),
    def(Eor, AbsoluteX, 0x5D),
    def(Eor, AbsoluteY, 0x59),
    def(Eor, IndirectX, 0x41),
    def(Eor, IndirectY, 0x51),

    // INC
    def(Inc, ZeroPage, 0xE6),
    def(Inc, ZeroPageX, 0xF6),
    def(Inc, Absolute, 0xEE),
    def(Inc, AbsoluteX, 0xFE),

    // INX
    def(Inx, Implied, 0xE8),

    // INY
    def(Iny, Implied, 0xC8),

    // JMP
    def(Jmp, Absolute, 0x4C),
    def(Jmp, Indirect, 0x6C),

    // JSR
    def(Jsr, Absolute, 0x20),

    // LDA
    def(Lda, Immediate, 0xA9),
    def(Lda, ZeroPage, 0xA5),
    def(Lda, ZeroPageX, 0xB5),
    def(Lda, Absolute, 0xAD),
    def(Lda, AbsoluteX, 0xBD),
    def(Lda, AbsoluteY, 0xB9),
    def(Lda, IndirectX, 0xA1),
    def(Lda, IndirectY, 0xB1),

    // LDX
    def(Ldx, Immediate, 0xA2),
    def(Ldx, ZeroPage, 0xA6),
    def(Ldx, ZeroPageY, 0xB6),
    def(Ldx, Absolute, 0xAE),
    def(Ldx, AbsoluteY, 0xBE),

    // LDY
    def(Ldy, Immediate, 0xA0),
    def(Ldy, ZeroPage, 0xA4),
    def(Ldy, ZeroPageX, 0xB4),
    def(Ldy, Absolute, 0xAC),
    def(Ldy, AbsoluteX, 0xBC),

    // LSR
    def(Lsr, Accumulator, 0x4A),
    def(Lsr, ZeroPage, 0x46),
    def(Lsr, ZeroPageX, 0x56),
    def(Lsr, Absolute, 0x4E),
    def(Lsr, AbsoluteX, 0x5E),

    // NOP
    def(Nop, Implied, 0xEA),

    // ORA
    def(Ora, Immediate, 0x09),
    def(Ora, ZeroPage, 0x05),
    def(Ora, ZeroPageX, 0x15),
    def(Ora, Absolute, 0x0D),
    def(Ora, AbsoluteX, 0x1D),
    def(Ora, AbsoluteY, 0x19),
    def(Ora, IndirectX, 0x01),
    def(Ora, IndirectY, 0x11),

    // PHA
    def(Pha, Implied, 0x48),

    // PHP
    def(Php, Implied, 0x08),

    // PLA
    def(Pla, Implied, 0x68),

    // PLP
    def(Plp, Implied, 0x28),

    // ROL
    def(Rol, Accumulator, 0x2A),
    def(Rol, ZeroPage, 0x26),
    def(Rol, ZeroPageX, 0x36),
    def(Rol, Absolute, 0x2E),
    def(Rol, AbsoluteX, 0x3E),

    // ROR
    def(Ror, Accumulator, 0x6A),
    def(Ror, ZeroPage, 0x66),
    def(Ror, ZeroPageX, 0x76),
    def(Ror, Absolute, 0x6E),
    def(Ror, AbsoluteX, 0x7E),

    // RTI
    def(Rti, Implied, 0x40),

    // RTS
    def(Rts, Implied, 0x60),

    // SBC
    def(Sbc, Immediate, 0xE9),
    def(Sbc, ZeroPage, 0xE5),
    def(Sbc, ZeroPageX, 0xF5),
    def(Sbc, Absolute, 0xED),
    def(Sbc, AbsoluteX, 0xFD),
    def(Sbc, AbsoluteY, 0xF9),
    def(Sbc, IndirectX, 0xE1),
    def(Sbc, IndirectY, 0xF1),

    // SEC
    def(Sec, Implied, 0x38),

    // SED
    def(Sed, Implied, 0xF8),

    // SEI
    def(Sei, Implied, 0x78),

    // STA
    def(Sta, ZeroPage, 0x85),
    def(Sta, ZeroPageX, 0x95),
    def(Sta, Absolute, 0x8D),
    def(Sta, AbsoluteX, 0x9D),
    def(Sta, AbsoluteY, 0x99),
    def(Sta, IndirectX, 0x81),
    def(Sta, IndirectY, 0x91),

    // STX
    def(Stx, ZeroPage, 0x86),
    def(Stx, ZeroPageY, 0x96),
    def(Stx, Absolute, 0x8E),

    // STY
    def(Sty, ZeroPage, 0x84),
    def(Sty, ZeroPageX, 0x94),
    def(Sty, Absolute, 0x8C),

    // TAX
    def(Tax, Implied, 0xAA),

    // TAY
    def(Tay, Implied, 0xA8),

    // TSX
    def(Tsx, Implied, 0xBA),

    // TXA
    def(Txa, Implied, 0x8A),

    // TXS
    def(Txs, Implied, 0x9A),

    // TYA
    def(Tya, Implied, 0x98),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_cover_every_mnemonic() {
        for mnemonic in Mnemonic::ALL {
            assert!(
                OPCODE_DEFINITIONS.iter().any(|e| e.mnemonic == mnemonic),
                "{mnemonic} has no opcode"
            );
        }
    }

    #[test]
    fn test_compare_index_opcodes() {
        let opcodes = |m: Mnemonic| -> Vec<u8> {
            OPCODE_DEFINITIONS
                .iter()
                .filter(|e| e.mnemonic == m)
                .map(|e| e.opcode)
                .collect()
        };

        assert_eq!(opcodes(Cpx), vec![0xE0, 0xE4, 0xEC]);
        assert_eq!(opcodes(Cpy), vec![0xC0, 0xC4, 0xCC]);
    }

    #[test]
    fn test_branches_are_relative() {
        for entry in OPCODE_DEFINITIONS.iter().filter(|e| e.mnemonic.is_branch()) {
            assert_eq!(entry.mode, Relative, "{}", entry.mnemonic);
        }
    }
}
