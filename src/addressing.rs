//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the NMOS 6502. A mode alone
//! fixes how many operand bytes follow the opcode and which formula turns
//! those bytes into an effective address; the mnemonic never changes either.

use std::fmt;
use std::str::FromStr;

use crate::IsaError;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Accumulator, Implied
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
///
/// Two-byte operands are always stored least-significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressingMode {
    /// Operates directly on the accumulator register.
    ///
    /// Example: ASL A
    Accumulator,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (wraps within zero page, never carries into the high byte)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (wraps within zero page, never carries into the high byte)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ $8010 (offset is relative to the following instruction)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register, with carry into the high byte.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register, with carry into the high byte.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer.
    ///
    /// Example: JMP ($FFFC). Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of addressing modes.
    pub const COUNT: usize = 13;

    /// Every addressing mode, in declaration order.
    pub const ALL: [AddressingMode; Self::COUNT] = [
        AddressingMode::Accumulator,
        AddressingMode::Implied,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Relative,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
    ];

    /// Number of operand bytes that follow the opcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use isa6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Implied.operand_size(), 0);
    /// assert_eq!(AddressingMode::IndirectY.operand_size(), 1);
    /// assert_eq!(AddressingMode::AbsoluteX.operand_size(), 2);
    /// ```
    pub const fn operand_size(self) -> usize {
        use AddressingMode::*;

        match self {
            Accumulator | Implied => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Total instruction size in bytes (opcode + operand).
    pub const fn instruction_size(self) -> usize {
        self.operand_size() + 1
    }

    /// Whether this mode produces an effective memory address.
    ///
    /// Accumulator, Implied and Immediate never touch memory through their operand.
    pub const fn references_memory(self) -> bool {
        !matches!(
            self,
            AddressingMode::Accumulator | AddressingMode::Implied | AddressingMode::Immediate
        )
    }

    /// Whether every address this mode computes lives in zero page.
    pub const fn is_zero_page(self) -> bool {
        matches!(
            self,
            AddressingMode::ZeroPage | AddressingMode::ZeroPageX | AddressingMode::ZeroPageY
        )
    }

    /// Variant name as text (`"ZeroPageX"`).
    pub const fn name(self) -> &'static str {
        use AddressingMode::*;

        match self {
            Accumulator => "Accumulator",
            Implied => "Implied",
            Immediate => "Immediate",
            ZeroPage => "ZeroPage",
            ZeroPageX => "ZeroPageX",
            ZeroPageY => "ZeroPageY",
            Relative => "Relative",
            Absolute => "Absolute",
            AbsoluteX => "AbsoluteX",
            AbsoluteY => "AbsoluteY",
            Indirect => "Indirect",
            IndirectX => "IndirectX",
            IndirectY => "IndirectY",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AddressingMode {
    type Err = IsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressingMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| IsaError::UnknownAddressingMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_sizes() {
        let expected = [0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 1, 1];
        for (mode, size) in AddressingMode::ALL.iter().zip(expected) {
            assert_eq!(mode.operand_size(), size, "{mode}");
            assert_eq!(mode.instruction_size(), size + 1, "{mode}");
        }
    }

    #[test]
    fn test_index_matches_position_in_all() {
        for (position, mode) in AddressingMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), position);
        }
    }

    #[test]
    fn test_references_memory() {
        assert!(!AddressingMode::Accumulator.references_memory());
        assert!(!AddressingMode::Implied.references_memory());
        assert!(!AddressingMode::Immediate.references_memory());
        assert!(AddressingMode::ZeroPage.references_memory());
        assert!(AddressingMode::Relative.references_memory());
        assert!(AddressingMode::IndirectY.references_memory());
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for mode in AddressingMode::ALL {
            assert_eq!(mode.to_string().parse::<AddressingMode>().unwrap(), mode);
        }
        assert_eq!(
            "zeropagex".parse::<AddressingMode>().unwrap(),
            AddressingMode::ZeroPageX
        );
    }

    #[test]
    fn test_unknown_mode_name() {
        assert_eq!(
            "Implicit".parse::<AddressingMode>(),
            Err(IsaError::UnknownAddressingMode("Implicit".to_string()))
        );
    }
}
