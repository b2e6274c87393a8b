//! WebAssembly bindings for the instruction-set core.
//!
//! Exposes encoding, decoding and disassembly to JavaScript so a browser
//! editor or debugger can share the same opcode table as native tools.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::{decode_instruction, disassemble_program, encode_instruction};
