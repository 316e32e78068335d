//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for decoding. Each byte value maps to either the metadata
//! of an implemented instruction or `None`.
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Addressing mode
//! - Instruction size in bytes

use std::fmt;

use crate::addressing::AddressingMode;

/// Instructions understood by the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    /// Load Accumulator
    Lda,
    /// Load X Register
    Ldx,
    /// Store Accumulator
    Sta,
    /// Store X Register
    Stx,
    /// Transfer Accumulator to X
    Tax,
    /// Increment X Register
    Inx,
    /// Return: halts the execution loop
    Ret,
}

impl Mnemonic {
    /// Three-letter assembler name of the instruction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Tax => "TAX",
            Mnemonic::Inx => "INX",
            Mnemonic::Ret => "RET",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use lite6502::{decode, AddressingMode, Mnemonic};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = decode(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// // Bytes without an instruction decode to None
/// assert!(decode(0xEA).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> Self {
        Self {
            mnemonic,
            addressing_mode,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        }
    }
}

use AddressingMode::*;
use Mnemonic::*;

/// Every implemented opcode with its instruction and addressing mode.
const DEFINED_OPCODES: [(u8, OpcodeMetadata); 26] = [
    (0x00, OpcodeMetadata::new(Ret, Implicit)),
    // STA
    (0x81, OpcodeMetadata::new(Sta, IndirectX)),
    (0x85, OpcodeMetadata::new(Sta, ZeroPage)),
    (0x8D, OpcodeMetadata::new(Sta, Absolute)),
    (0x91, OpcodeMetadata::new(Sta, IndirectY)),
    (0x95, OpcodeMetadata::new(Sta, ZeroPageX)),
    (0x99, OpcodeMetadata::new(Sta, AbsoluteY)),
    (0x9D, OpcodeMetadata::new(Sta, AbsoluteX)),
    // STX
    (0x86, OpcodeMetadata::new(Stx, ZeroPage)),
    (0x8E, OpcodeMetadata::new(Stx, Absolute)),
    (0x96, OpcodeMetadata::new(Stx, ZeroPageY)),
    // LDA
    (0xA1, OpcodeMetadata::new(Lda, IndirectX)),
    (0xA5, OpcodeMetadata::new(Lda, ZeroPage)),
    (0xA9, OpcodeMetadata::new(Lda, Immediate)),
    (0xAD, OpcodeMetadata::new(Lda, Absolute)),
    (0xB1, OpcodeMetadata::new(Lda, IndirectY)),
    (0xB5, OpcodeMetadata::new(Lda, ZeroPageX)),
    (0xB9, OpcodeMetadata::new(Lda, AbsoluteY)),
    (0xBD, OpcodeMetadata::new(Lda, AbsoluteX)),
    // LDX
    (0xA2, OpcodeMetadata::new(Ldx, Immediate)),
    (0xA6, OpcodeMetadata::new(Ldx, ZeroPage)),
    (0xAE, OpcodeMetadata::new(Ldx, Absolute)),
    (0xB6, OpcodeMetadata::new(Ldx, ZeroPageY)),
    (0xBE, OpcodeMetadata::new(Ldx, AbsoluteY)),
    // Implied
    (0xAA, OpcodeMetadata::new(Tax, Implicit)),
    (0xE8, OpcodeMetadata::new(Inx, Implicit)),
];

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table: [Option<OpcodeMetadata>; 256] = [None; 256];
    let mut i = 0;
    while i < DEFINED_OPCODES.len() {
        let (opcode, metadata) = DEFINED_OPCODES[i];
        table[opcode as usize] = Some(metadata);
        i += 1;
    }
    table
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// `None` marks a byte that is not an implemented instruction; the CPU halts
/// with `ExecutionError::IllegalOpcode` when it fetches one.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Decodes an opcode byte.
pub fn decode(opcode: u8) -> Option<OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize]
}
