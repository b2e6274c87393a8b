//! # Memory Bus Abstraction
//!
//! The effective-address resolver needs to read pointer bytes for the indirect
//! modes. It does so through the `MemoryBus` trait so that whatever owns the
//! address space (an emulator's bus, a test fixture, a debugger snapshot) can
//! answer those reads without this crate knowing its layout.
//!
//! The resolver only ever calls [`MemoryBus::read`]; it never writes.

/// Memory bus trait for reading and writing bytes.
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use isa6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use isa6502::MemoryBus;
///
/// /// Only zero page is backed; everything else reads as open bus.
/// struct ZeroPageOnly([u8; 256]);
///
/// impl MemoryBus for ZeroPageOnly {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x0100 {
///             self.0[addr as usize]
///         } else {
///             0xFF
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x0100 {
///             self.0[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Unmapped addresses may return any value.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Writes to read-only or unmapped
    /// addresses may be ignored.
    fn write(&mut self, addr: u16, value: u8);
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use isa6502::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0010, &[0xFF, 0x30]);
/// assert_eq!(memory.read(0x0010), 0xFF);
/// assert_eq!(memory.read(0x0011), 0x30);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
