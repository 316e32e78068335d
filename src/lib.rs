//! # lite6502
//!
//! The instruction-execution core of a 6502-style 8-bit CPU: a register file,
//! a flat 64KB memory, the addressing-mode resolvers and a table-driven
//! fetch-decode-execute loop over a small load/store instruction subset
//! (LDA, STA, LDX, STX, TAX, INX and RET).
//!
//! ## Quick Start
//!
//! ```rust
//! use lite6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // LDA #$69; TAX; INX; STA $F0,X; RET
//! cpu.load(&[0xA9, 0x69, 0xAA, 0xE8, 0x95, 0xF0, 0x00]).unwrap();
//! cpu.exec().unwrap();
//!
//! assert_eq!(cpu.x(), 0x6A);
//! assert_eq!(cpu.memory().read(0x005A), 0x69);
//! ```
//!
//! ## Architecture
//!
//! - **Memory** is reached only through the `MemoryBus` trait. Words are
//!   little-endian everywhere, including the reset vector.
//! - **Addressing modes** all resolve to an effective address. Loads perform
//!   an explicit read of that address; stores write to it.
//! - **Dispatch** goes through `OPCODE_TABLE`, a 256-entry table indexed by
//!   opcode byte. Bytes with no entry halt the CPU and are reported as
//!   `ExecutionError::IllegalOpcode`.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset/load sequencing and the execution loop
//! - `registers` - Register file and status flags
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and effective address resolution

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

use thiserror::Error;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{RunState, CPU};
pub use memory::{FlatMemory, MemoryBus, RESET_VECTOR, ROM_SIZE, ROM_START};
pub use opcodes::{decode, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::Registers;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched byte has no entry in the opcode table.
    ///
    /// The CPU is halted when this is returned.
    #[error("illegal opcode 0x{opcode:02X} at 0x{pc:04X}")]
    IllegalOpcode {
        /// The offending opcode byte
        opcode: u8,
        /// Address the opcode was fetched from
        pc: u16,
    },
}

/// Errors that can occur while loading a program image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The image does not fit in the program window at 0x8000-0xFFFF.
    #[error("program image is {len} bytes, the program window holds at most {max}")]
    ImageTooLarge {
        /// Length of the rejected image
        len: usize,
        /// Size of the program window
        max: usize,
    },
}
