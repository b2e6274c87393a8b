//! Property-based round-trip tests for the encoder and decoder.
//!
//! For every (mnemonic, mode) pair in the table and every operand byte
//! pattern, decoding the encoded bytes yields the original triple.

use isa6502::{AddressingMode, InstructionEntry, InstructionTable, Mnemonic, OPCODE_DEFINITIONS};
use proptest::prelude::*;

fn all_entries() -> Vec<InstructionEntry> {
    OPCODE_DEFINITIONS.to_vec()
}

/// Generate an entry together with an operand of the right length
fn entry_with_operand() -> impl Strategy<Value = (InstructionEntry, Vec<u8>)> {
    prop::sample::select(all_entries()).prop_flat_map(|entry| {
        let size = entry.mode.operand_size();
        (Just(entry), prop::collection::vec(any::<u8>(), size))
    })
}

proptest! {
    /// Property: decode(encode(m, mode, operand)) == (m, mode, operand)
    #[test]
    fn prop_encode_decode_roundtrip((entry, operand) in entry_with_operand()) {
        let table = InstructionTable::shared();

        let bytes = table.encoder().encode(entry.mnemonic, entry.mode, &operand).unwrap();
        prop_assert_eq!(bytes.len(), entry.mode.instruction_size());
        prop_assert_eq!(bytes[0], entry.opcode);

        let instr = table.decoder().decode(&bytes, 0).unwrap();
        prop_assert_eq!(instr.mnemonic, entry.mnemonic);
        prop_assert_eq!(instr.mode, entry.mode);
        prop_assert_eq!(&instr.operand, &operand);
        prop_assert_eq!(instr.bytes_consumed, bytes.len());
        prop_assert_eq!(instr.to_bytes(), bytes);
    }

    /// Property: decoding at a cursor ignores surrounding bytes
    #[test]
    fn prop_decode_at_cursor(
        (entry, operand) in entry_with_operand(),
        prefix in prop::collection::vec(any::<u8>(), 0..8),
        suffix in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let table = InstructionTable::shared();
        let encoded = table.encoder().encode(entry.mnemonic, entry.mode, &operand).unwrap();

        let mut stream = prefix.clone();
        stream.extend(&encoded);
        stream.extend(&suffix);

        let instr = table.decoder().decode(&stream, prefix.len()).unwrap();
        prop_assert_eq!(instr.mnemonic, entry.mnemonic);
        prop_assert_eq!(instr.operand, operand);
    }

    /// Property: a wrong operand length is always rejected
    #[test]
    fn prop_wrong_operand_length_rejected(
        entry in prop::sample::select(all_entries()),
        len in 0usize..4,
    ) {
        prop_assume!(len != entry.mode.operand_size());

        let operand = vec![0xAA; len];
        let result = InstructionTable::shared()
            .encoder()
            .encode(entry.mnemonic, entry.mode, &operand);
        prop_assert!(result.is_err());
    }

    /// Property: any byte either decodes to its table entry or is illegal, never panics
    #[test]
    fn prop_decode_arbitrary_bytes(
        bytes in prop::collection::vec(any::<u8>(), 0..6),
        cursor in 0usize..8,
    ) {
        let table = InstructionTable::shared();
        match table.decoder().decode(&bytes, cursor) {
            Ok(instr) => {
                prop_assert!(cursor + instr.bytes_consumed <= bytes.len());
                let entry = table.lookup_instruction(bytes[cursor]).unwrap();
                prop_assert_eq!(entry.mnemonic, instr.mnemonic);
            }
            Err(_) => {}
        }
    }
}

#[test]
fn test_exhaustive_one_byte_operands() {
    // Every one-byte-operand opcode with every operand value
    let table = InstructionTable::shared();

    for entry in table.entries().filter(|e| e.mode.operand_size() == 1) {
        for value in 0..=255u8 {
            let bytes = table
                .encoder()
                .encode(entry.mnemonic, entry.mode, &[value])
                .unwrap();
            let instr = table.decoder().decode(&bytes, 0).unwrap();
            assert_eq!(
                (instr.mnemonic, instr.mode, instr.operand[0]),
                (entry.mnemonic, entry.mode, value)
            );
        }
    }
}

#[test]
fn test_text_mnemonics_roundtrip() {
    let table = InstructionTable::shared();
    for entry in table.entries() {
        let text = entry.mnemonic.to_string();
        let operand = vec![0x12; entry.mode.operand_size()];
        let bytes = table.encoder().encode_str(&text, entry.mode, &operand).unwrap();
        let instr = table.decoder().decode(&bytes, 0).unwrap();
        assert_eq!(instr.mnemonic.as_str(), text);
        assert_eq!(text.parse::<Mnemonic>().unwrap(), entry.mnemonic);
        assert!(AddressingMode::ALL.contains(&instr.mode));
    }
}
