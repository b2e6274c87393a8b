//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::decoder::DecodedInstruction;
use crate::disassembler::Instruction;

/// Format a single listing line as assembly text
///
/// # Examples
///
/// ```
/// use isa6502::{disassemble, format_instruction, DisassemblyOptions};
///
/// let listing = disassemble(&[0xB1, 0x10, 0xFF], DisassemblyOptions::default());
/// assert_eq!(format_instruction(&listing[0]), "LDA ($10),Y");
/// assert_eq!(format_instruction(&listing[1]), ".byte $FF");
/// ```
pub fn format_instruction(instr: &Instruction) -> String {
    match instr {
        Instruction::Decoded {
            address,
            instruction,
        } => {
            let operand = format_operand(instruction, *address);
            if operand.is_empty() {
                instruction.mnemonic.to_string()
            } else {
                format!("{} {}", instruction.mnemonic, operand)
            }
        }
        Instruction::Data { value, .. } => format!(".byte ${:02X}", value),
    }
}

/// Format a listing line with its address and raw bytes
///
/// `8000  BD 00 20  LDA $2000,X`
pub fn format_listing_line(instr: &Instruction) -> String {
    let hex: Vec<String> = instr.bytes().iter().map(|b| format!("{:02X}", b)).collect();
    format!(
        "{:04X}  {:<8}  {}",
        instr.address(),
        hex.join(" "),
        format_instruction(instr)
    )
}

/// Format the operand based on addressing mode
fn format_operand(instr: &DecodedInstruction, address: u16) -> String {
    use AddressingMode::*;

    let byte = instr.operand.first().copied().unwrap_or_default();
    let word = instr.operand_value().unwrap_or_default();

    match instr.mode {
        Implied => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", byte),
        ZeroPage => format!("${:02X}", byte),
        ZeroPageX => format!("${:02X},X", byte),
        ZeroPageY => format!("${:02X},Y", byte),
        Relative => {
            let next = address.wrapping_add(instr.bytes_consumed as u16);
            let target = next.wrapping_add(byte as i8 as u16);
            format!("${:04X}", target)
        }
        Absolute => format!("${:04X}", word),
        AbsoluteX => format!("${:04X},X", word),
        AbsoluteY => format!("${:04X},Y", word),
        Indirect => format!("(${:04X})", word),
        IndirectX => format!("(${:02X},X)", byte),
        IndirectY => format!("(${:02X}),Y", byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::InstructionTable;

    fn line(address: u16, opcode: u8, operand: &[u8]) -> Instruction {
        let entry = InstructionTable::shared()
            .lookup_instruction(opcode)
            .unwrap();
        Instruction::Decoded {
            address,
            instruction: DecodedInstruction {
                opcode,
                mnemonic: entry.mnemonic,
                mode: entry.mode,
                operand: operand.to_vec(),
                bytes_consumed: operand.len() + 1,
            },
        }
    }

    #[test]
    fn test_format_immediate() {
        let instr = line(0x8000, 0xA9, &[0x42]);
        assert_eq!(format_instruction(&instr), "LDA #$42");
    }

    #[test]
    fn test_format_absolute() {
        let instr = line(0x0000, 0x8D, &[0x00, 0x80]);
        assert_eq!(format_instruction(&instr), "STA $8000");
    }

    #[test]
    fn test_format_implied() {
        let instr = line(0x1000, 0xEA, &[]);
        assert_eq!(format_instruction(&instr), "NOP");
    }

    #[test]
    fn test_format_accumulator() {
        let instr = line(0x1000, 0x0A, &[]);
        assert_eq!(format_instruction(&instr), "ASL A");
    }

    #[test]
    fn test_format_indexed_and_indirect() {
        let cases = [
            (line(0, 0xB5, &[0x10]), "LDA $10,X"),
            (line(0, 0xB6, &[0x10]), "LDX $10,Y"),
            (line(0, 0xB9, &[0x34, 0x12]), "LDA $1234,Y"),
            (line(0, 0xA1, &[0x40]), "LDA ($40,X)"),
            (line(0, 0x6C, &[0xFC, 0xFF]), "JMP ($FFFC)"),
        ];

        for (instr, expected) in cases {
            assert_eq!(format_instruction(&instr), expected);
        }
    }

    #[test]
    fn test_format_relative_target() {
        let instr = line(0x8006, 0xD0, &[0xFA]);
        assert_eq!(format_instruction(&instr), "BNE $8002");
    }

    #[test]
    fn test_format_illegal_opcode() {
        let instr = Instruction::Data {
            address: 0x2000,
            value: 0xFF,
        };
        assert_eq!(format_instruction(&instr), ".byte $FF");
    }

    #[test]
    fn test_format_listing_line() {
        let instr = line(0x8000, 0xBD, &[0x00, 0x20]);
        assert_eq!(format_listing_line(&instr), "8000  BD 00 20  LDA $2000,X");

        let instr = line(0x8003, 0xEA, &[]);
        assert_eq!(format_listing_line(&instr), "8003  EA        NOP");
    }
}
