//! WASM API for the instruction-set core.
//!
//! Provides JavaScript-callable wrappers around the encoder, decoder and
//! disassembler, all backed by the shared NMOS table.

use wasm_bindgen::prelude::*;

use crate::disassembler::formatter::format_instruction;
use crate::{disassemble, AddressingMode, DisassemblyOptions, InstructionTable, IsaError};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<IsaError> for JsError {
    fn from(err: IsaError) -> Self {
        JsError {
            message: err.to_string(),
        }
    }
}

/// A decoded instruction as seen from JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DecodedView {
    opcode: u8,
    mnemonic: String,
    mode: String,
    operand: Vec<u8>,
    bytes_consumed: usize,
}

#[wasm_bindgen]
impl DecodedView {
    #[wasm_bindgen(getter)]
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.mode.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn operand(&self) -> Vec<u8> {
        self.operand.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn bytes_consumed(&self) -> usize {
        self.bytes_consumed
    }
}

/// One line of a disassembly listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Encode one instruction. `mode` is an addressing mode name such as `"ZeroPageX"`.
#[wasm_bindgen]
pub fn encode_instruction(mnemonic: &str, mode: &str, operand: &[u8]) -> Result<Vec<u8>, JsError> {
    let mode: AddressingMode = mode.parse()?;
    let bytes = InstructionTable::shared()
        .encoder()
        .encode_str(mnemonic, mode, operand)?;
    Ok(bytes)
}

/// Decode the instruction at `cursor`.
#[wasm_bindgen]
pub fn decode_instruction(bytes: &[u8], cursor: usize) -> Result<DecodedView, JsError> {
    let instr = InstructionTable::shared().decoder().decode(bytes, cursor)?;

    Ok(DecodedView {
        opcode: instr.opcode,
        mnemonic: instr.mnemonic.to_string(),
        mode: instr.mode.to_string(),
        operand: instr.operand,
        bytes_consumed: instr.bytes_consumed,
    })
}

/// Disassemble a whole program into an array of `DisassemblyLine`.
#[wasm_bindgen]
pub fn disassemble_program(bytes: &[u8], start_address: u16) -> js_sys::Array {
    let options = DisassemblyOptions { start_address };

    disassemble(bytes, options)
        .iter()
        .map(|instr| {
            JsValue::from(DisassemblyLine {
                address: instr.address(),
                bytes: instr.bytes(),
                text: format_instruction(instr),
            })
        })
        .collect()
}
