//! # Instruction Table
//!
//! Bidirectional mapping between (mnemonic, addressing mode) pairs and opcode
//! bytes. A table is built once from a list of [`InstructionEntry`] values and
//! is immutable afterwards, so a single instance can be shared by reference
//! across any number of encoders, decoders and threads.
//!
//! Construction rejects any list in which a (mnemonic, mode) pair or an opcode
//! byte appears twice. Both lookups are then plain array indexing.

use std::sync::OnceLock;

use log::{debug, warn};

use crate::addressing::AddressingMode;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::mnemonic::Mnemonic;
use crate::opcodes::{InstructionEntry, OPCODE_DEFINITIONS};
use crate::IsaError;

/// Immutable opcode lookup table.
///
/// # Examples
///
/// ```
/// use isa6502::{AddressingMode, InstructionTable, IsaError, Mnemonic};
///
/// let table = InstructionTable::nmos()?;
///
/// assert_eq!(table.lookup_opcode(Mnemonic::Asl, AddressingMode::Accumulator)?, 0x0A);
///
/// let entry = table.lookup_instruction(0xA9)?;
/// assert_eq!(entry.mnemonic, Mnemonic::Lda);
/// assert_eq!(entry.mode, AddressingMode::Immediate);
///
/// assert_eq!(table.lookup_instruction(0xFF), Err(IsaError::IllegalOpcode(0xFF)));
/// # Ok::<(), IsaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InstructionTable {
    /// Forward map, indexed by mnemonic then mode.
    opcodes: [[Option<u8>; AddressingMode::COUNT]; Mnemonic::COUNT],

    /// Reverse map, indexed by opcode byte.
    instructions: [Option<InstructionEntry>; 256],

    len: usize,
}

impl InstructionTable {
    /// Builds a table from arbitrary definitions.
    ///
    /// # Errors
    ///
    /// Returns [`IsaError::DuplicateTableEntry`] for the first definition whose
    /// (mnemonic, mode) pair or opcode byte was already claimed.
    pub fn from_definitions(definitions: &[InstructionEntry]) -> Result<Self, IsaError> {
        let mut table = Self {
            opcodes: [[None; AddressingMode::COUNT]; Mnemonic::COUNT],
            instructions: [None; 256],
            len: 0,
        };

        for entry in definitions {
            table.insert(*entry)?;
        }

        debug!("built instruction table with {} entries", table.len);
        Ok(table)
    }

    /// Builds the documented NMOS 6502 table from the embedded definitions.
    pub fn nmos() -> Result<Self, IsaError> {
        Self::from_definitions(&OPCODE_DEFINITIONS)
    }

    /// Process-wide NMOS table, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the embedded definitions contain a duplicate. That can only
    /// happen if the compiled-in data is corrupt, and every later encode or
    /// decode would be untrustworthy.
    pub fn shared() -> &'static InstructionTable {
        static TABLE: OnceLock<InstructionTable> = OnceLock::new();

        TABLE.get_or_init(|| match Self::nmos() {
            Ok(table) => table,
            Err(err) => panic!("embedded 6502 opcode table is corrupt: {err}"),
        })
    }

    fn insert(&mut self, entry: InstructionEntry) -> Result<(), IsaError> {
        let slot = &mut self.opcodes[entry.mnemonic.index()][entry.mode.index()];
        let reverse = &mut self.instructions[entry.opcode as usize];

        if slot.is_some() || reverse.is_some() {
            warn!(
                "rejecting table entry {} {} 0x{:02X}: already defined",
                entry.mnemonic, entry.mode, entry.opcode
            );
            return Err(IsaError::DuplicateTableEntry {
                mnemonic: entry.mnemonic,
                mode: entry.mode,
                opcode: entry.opcode,
            });
        }

        *slot = Some(entry.opcode);
        *reverse = Some(entry);
        self.len += 1;
        Ok(())
    }

    /// Opcode byte for a (mnemonic, mode) pair.
    ///
    /// # Errors
    ///
    /// [`IsaError::UnsupportedAddressingMode`] when the mnemonic has no
    /// encoding in `mode`.
    pub fn lookup_opcode(&self, mnemonic: Mnemonic, mode: AddressingMode) -> Result<u8, IsaError> {
        self.opcodes[mnemonic.index()][mode.index()]
            .ok_or(IsaError::UnsupportedAddressingMode { mnemonic, mode })
    }

    /// Opcode byte for mnemonic text and a mode.
    ///
    /// # Errors
    ///
    /// [`IsaError::UnknownMnemonic`] when the text is not a documented
    /// mnemonic, otherwise as [`lookup_opcode`](Self::lookup_opcode).
    pub fn lookup_opcode_str(&self, mnemonic: &str, mode: AddressingMode) -> Result<u8, IsaError> {
        self.lookup_opcode(mnemonic.parse()?, mode)
    }

    /// Instruction assigned to an opcode byte.
    ///
    /// # Errors
    ///
    /// [`IsaError::IllegalOpcode`] for bytes with no documented instruction.
    pub fn lookup_instruction(&self, opcode: u8) -> Result<InstructionEntry, IsaError> {
        self.instructions[opcode as usize].ok_or(IsaError::IllegalOpcode(opcode))
    }

    /// Whether `mnemonic` has an encoding in `mode`.
    pub fn supports(&self, mnemonic: Mnemonic, mode: AddressingMode) -> bool {
        self.opcodes[mnemonic.index()][mode.index()].is_some()
    }

    /// Addressing modes `mnemonic` can be encoded with, in [`AddressingMode::ALL`] order.
    pub fn supported_modes(&self, mnemonic: Mnemonic) -> Vec<AddressingMode> {
        AddressingMode::ALL
            .iter()
            .copied()
            .filter(|&mode| self.supports(mnemonic, mode))
            .collect()
    }

    /// All entries in ascending opcode order.
    pub fn entries(&self) -> impl Iterator<Item = InstructionEntry> + '_ {
        self.instructions.iter().filter_map(|entry| *entry)
    }

    /// Number of defined opcodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Encoder backed by this table.
    pub fn encoder(&self) -> Encoder<'_> {
        Encoder::new(self)
    }

    /// Decoder backed by this table.
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self)
    }
}
