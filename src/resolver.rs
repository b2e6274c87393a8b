//! # Effective-Address Resolver
//!
//! Computes the memory address an instruction operates on, given its
//! addressing mode, operand and the index registers supplied by the caller.
//!
//! | Mode      | Address                                   | Page crossed          |
//! |-----------|-------------------------------------------|-----------------------|
//! | ZeroPage  | `LL`                                      | never                 |
//! | ZeroPageX | `(LL + X) & 0xFF`                         | never                 |
//! | ZeroPageY | `(LL + Y) & 0xFF`                         | never                 |
//! | Absolute  | `HHLL`                                    | never                 |
//! | AbsoluteX | `HHLL + X`, carry into high byte          | high byte changed     |
//! | AbsoluteY | `HHLL + Y`, carry into high byte          | high byte changed     |
//! | IndirectX | word at `(LL + X) & 0xFF`, both bytes in ZP | never               |
//! | IndirectY | (word at `LL`, both bytes in ZP) + Y      | high byte changed     |
//! | Relative  | `PC + sign_extend(offset)`                | target page differs   |
//! | Indirect  | word at `HHLL`, high byte from same page  | never                 |
//!
//! The page-crossed flag is only reported; the resolver has no notion of
//! cycles.

use crate::addressing::AddressingMode;
use crate::decoder::DecodedInstruction;
use crate::memory::MemoryBus;
use crate::IsaError;

/// Register values the resolver reads.
///
/// `pc` must hold the address of the instruction *following* the one being
/// resolved. Only [`AddressingMode::Relative`] uses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Address of the next instruction
    pub pc: u16,
}

impl Registers {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y, pc: 0 }
    }

    pub const fn with_pc(self, pc: u16) -> Self {
        Self { pc, ..self }
    }
}

/// Result of an effective-address computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAddress {
    /// Final 16-bit address
    pub address: u16,

    /// Whether indexing moved the address into a different 256-byte page
    pub page_crossed: bool,
}

impl ResolvedAddress {
    const fn same_page(address: u16) -> Self {
        Self {
            address,
            page_crossed: false,
        }
    }
}

/// Resolves the effective address for `mode`.
///
/// `operand` is the numeric operand: the byte for one-byte modes (only the
/// low byte is used) or the little-endian word for two-byte modes. `memory`
/// is read for the pointer fetches of the indirect modes.
///
/// # Errors
///
/// [`IsaError::NoEffectiveAddress`] for Accumulator, Implied and Immediate.
///
/// # Examples
///
/// ```
/// use isa6502::{resolve_address, AddressingMode, FlatMemory, Registers};
///
/// let memory = FlatMemory::new();
///
/// // Zero-page indexing wraps without carrying into the high byte.
/// let zp = resolve_address(AddressingMode::ZeroPageX, 0xFF, Registers::new(0x02, 0), &memory)?;
/// assert_eq!(zp.address, 0x0001);
/// assert!(!zp.page_crossed);
///
/// // Absolute indexing carries and reports the page crossing.
/// let abs = resolve_address(AddressingMode::AbsoluteX, 0x20FF, Registers::new(0x01, 0), &memory)?;
/// assert_eq!(abs.address, 0x2100);
/// assert!(abs.page_crossed);
/// # Ok::<(), isa6502::IsaError>(())
/// ```
pub fn resolve_address<M: MemoryBus + ?Sized>(
    mode: AddressingMode,
    operand: u16,
    registers: Registers,
    memory: &M,
) -> Result<ResolvedAddress, IsaError> {
    use AddressingMode::*;

    let zp = operand as u8;

    let resolved = match mode {
        Accumulator | Implied | Immediate => return Err(IsaError::NoEffectiveAddress(mode)),
        ZeroPage => ResolvedAddress::same_page(u16::from(zp)),
        ZeroPageX => ResolvedAddress::same_page(u16::from(zp.wrapping_add(registers.x))),
        ZeroPageY => ResolvedAddress::same_page(u16::from(zp.wrapping_add(registers.y))),
        Absolute => ResolvedAddress::same_page(operand),
        AbsoluteX => indexed(operand, registers.x),
        AbsoluteY => indexed(operand, registers.y),
        IndirectX => {
            let pointer = zp.wrapping_add(registers.x);
            ResolvedAddress::same_page(zero_page_word(memory, pointer))
        }
        IndirectY => indexed(zero_page_word(memory, zp), registers.y),
        Relative => {
            // i8 -> u16 sign-extends, so wrapping_add subtracts for negative offsets
            let target = registers.pc.wrapping_add(zp as i8 as u16);
            ResolvedAddress {
                address: target,
                page_crossed: crosses_page(registers.pc, target),
            }
        }
        Indirect => {
            // NMOS quirk: the high byte is fetched without carrying out of the pointer's page
            let high_addr = (operand & 0xFF00) | (operand.wrapping_add(1) & 0x00FF);
            let address = u16::from_le_bytes([memory.read(operand), memory.read(high_addr)]);
            ResolvedAddress::same_page(address)
        }
    };

    Ok(resolved)
}

/// Resolves a decoded instruction's operand.
///
/// `registers.pc` should be the instruction's address plus
/// `instr.bytes_consumed` when resolving branches.
pub fn resolve_instruction<M: MemoryBus + ?Sized>(
    instr: &DecodedInstruction,
    registers: Registers,
    memory: &M,
) -> Result<ResolvedAddress, IsaError> {
    resolve_address(
        instr.mode,
        instr.operand_value().unwrap_or_default(),
        registers,
        memory,
    )
}

fn indexed(base: u16, index: u8) -> ResolvedAddress {
    let address = base.wrapping_add(u16::from(index));
    ResolvedAddress {
        address,
        page_crossed: crosses_page(base, address),
    }
}

fn crosses_page(from: u16, to: u16) -> bool {
    (from ^ to) & 0xFF00 != 0
}

/// Little-endian word at `pointer`; the high byte comes from `pointer + 1`
/// wrapped to zero page.
fn zero_page_word<M: MemoryBus + ?Sized>(memory: &M, pointer: u8) -> u16 {
    let low = memory.read(u16::from(pointer));
    let high = memory.read(u16::from(pointer.wrapping_add(1)));
    u16::from_le_bytes([low, high])
}
