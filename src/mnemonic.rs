//! # Mnemonics
//!
//! The 56 documented NMOS 6502 instruction mnemonics as a closed enumeration.
//! Text from an assembler front end is converted once with [`str::parse`];
//! everything past that point matches on variants instead of strings.

use std::fmt;
use std::str::FromStr;

use crate::IsaError;

/// A documented 6502 instruction mnemonic, independent of addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mnemonic {
    /// ADC: add with carry.
    Adc,
    /// AND: AND with accumulator.
    And,
    /// ASL: arithmetic shift left.
    Asl,
    /// BCC: branch if carry clear.
    Bcc,
    /// BCS: branch if carry set.
    Bcs,
    /// BEQ: branch if equal.
    Beq,
    /// BIT: bit test.
    Bit,
    /// BMI: branch if minus.
    Bmi,
    /// BNE: branch if not equal.
    Bne,
    /// BPL: branch if plus.
    Bpl,
    /// BRK: break.
    Brk,
    /// BVC: branch if overflow clear.
    Bvc,
    /// BVS: branch if overflow set.
    Bvs,
    /// CLC: clear carry.
    Clc,
    /// CLD: clear decimal.
    Cld,
    /// CLI: clear interrupt disable.
    Cli,
    /// CLV: clear overflow.
    Clv,
    /// CMP: compare accumulator.
    Cmp,
    /// CPX: compare X.
    Cpx,
    /// CPY: compare Y.
    Cpy,
    /// DEC: decrement memory.
    Dec,
    /// DEX: decrement X.
    Dex,
    /// DEY: decrement Y.
    Dey,
    /// EOR: exclusive OR with accumulator.
    Eor,
    /// INC: increment memory.
    Inc,
    /// INX: increment X.
    Inx,
    /// INY: increment Y.
    Iny,
    /// JMP: jump.
    Jmp,
    /// JSR: jump to subroutine.
    Jsr,
    /// LDA: load accumulator.
    Lda,
    /// LDX: load X.
    Ldx,
    /// LDY: load Y.
    Ldy,
    /// LSR: logical shift right.
    Lsr,
    /// NOP: no operation.
    Nop,
    /// ORA: OR with accumulator.
    Ora,
    /// PHA: push accumulator.
    Pha,
    /// PHP: push processor status.
    Php,
    /// PLA: pull accumulator.
    Pla,
    /// PLP: pull processor status.
    Plp,
    /// ROL: rotate left.
    Rol,
    /// ROR: rotate right.
    Ror,
    /// RTI: return from interrupt.
    Rti,
    /// RTS: return from subroutine.
    Rts,
    /// SBC: subtract with borrow.
    Sbc,
    /// SEC: set carry.
    Sec,
    /// SED: set decimal.
    Sed,
    /// SEI: set interrupt disable.
    Sei,
    /// STA: store accumulator.
    Sta,
    /// STX: store X.
    Stx,
    /// STY: store Y.
    Sty,
    /// TAX: transfer accumulator to X.
    Tax,
    /// TAY: transfer accumulator to Y.
    Tay,
    /// TSX: transfer stack pointer to X.
    Tsx,
    /// TXA: transfer X to accumulator.
    Txa,
    /// TXS: transfer X to stack pointer.
    Txs,
    /// TYA: transfer Y to accumulator.
    Tya,
}

impl Mnemonic {
    /// Number of documented mnemonics.
    pub const COUNT: usize = 56;

    /// Every mnemonic in alphabetical order.
    pub const ALL: [Mnemonic; Self::COUNT] = [
        Mnemonic::Adc,
        Mnemonic::And,
        Mnemonic::Asl,
        Mnemonic::Bcc,
        Mnemonic::Bcs,
        Mnemonic::Beq,
        Mnemonic::Bit,
        Mnemonic::Bmi,
        Mnemonic::Bne,
        Mnemonic::Bpl,
        Mnemonic::Brk,
        Mnemonic::Bvc,
        Mnemonic::Bvs,
        Mnemonic::Clc,
        Mnemonic::Cld,
        Mnemonic::Cli,
        Mnemonic::Clv,
        Mnemonic::Cmp,
        Mnemonic::Cpx,
        Mnemonic::Cpy,
        Mnemonic::Dec,
        Mnemonic::Dex,
        Mnemonic::Dey,
        Mnemonic::Eor,
        Mnemonic::Inc,
        Mnemonic::Inx,
        Mnemonic::Iny,
        Mnemonic::Jmp,
        Mnemonic::Jsr,
        Mnemonic::Lda,
        Mnemonic::Ldx,
        Mnemonic::Ldy,
        Mnemonic::Lsr,
        Mnemonic::Nop,
        Mnemonic::Ora,
        Mnemonic::Pha,
        Mnemonic::Php,
        Mnemonic::Pla,
        Mnemonic::Plp,
        Mnemonic::Rol,
        Mnemonic::Ror,
        Mnemonic::Rti,
        Mnemonic::Rts,
        Mnemonic::Sbc,
        Mnemonic::Sec,
        Mnemonic::Sed,
        Mnemonic::Sei,
        Mnemonic::Sta,
        Mnemonic::Stx,
        Mnemonic::Sty,
        Mnemonic::Tax,
        Mnemonic::Tay,
        Mnemonic::Tsx,
        Mnemonic::Txa,
        Mnemonic::Txs,
        Mnemonic::Tya,
    ];

    /// Upper-case three-letter name.
    ///
    /// # Examples
    ///
    /// ```
    /// use isa6502::Mnemonic;
    ///
    /// assert_eq!(Mnemonic::Adc.as_str(), "ADC");
    /// ```
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;

        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }

    /// Whether this is one of the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        use Mnemonic::*;

        matches!(self, Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mnemonic {
    type Err = IsaError;

    /// Parses a mnemonic, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mnemonic::ALL
            .iter()
            .copied()
            .find(|mnemonic| mnemonic.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| IsaError::UnknownMnemonic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_and_indexed() {
        for (position, mnemonic) in Mnemonic::ALL.iter().enumerate() {
            assert_eq!(mnemonic.index(), position);
        }
        for pair in Mnemonic::ALL.windows(2) {
            assert!(pair[0].as_str() < pair[1].as_str());
        }
    }

    #[test]
    fn test_names_are_three_upper_case_letters() {
        for mnemonic in Mnemonic::ALL {
            let name = mnemonic.as_str();
            assert_eq!(name.len(), 3);
            assert!(name.chars().all(|c| c.is_ascii_uppercase()), "{name}");
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("CPY".parse::<Mnemonic>().unwrap(), Mnemonic::Cpy);
        assert_eq!("lda".parse::<Mnemonic>().unwrap(), Mnemonic::Lda);
        assert_eq!(
            "XYZ".parse::<Mnemonic>(),
            Err(IsaError::UnknownMnemonic("XYZ".to_string()))
        );
        assert!("".parse::<Mnemonic>().is_err());
        assert!("LDAX".parse::<Mnemonic>().is_err());
    }

    #[test]
    fn test_branches() {
        let branches: Vec<_> = Mnemonic::ALL.iter().filter(|m| m.is_branch()).collect();
        assert_eq!(branches.len(), 8);
        assert!(!Mnemonic::Jmp.is_branch());
    }
}
