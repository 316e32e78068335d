//! # Instruction Implementations
//!
//! Each instruction is a standalone function that takes a mutable reference
//! to the CPU. Memory instructions also take the addressing mode, resolve it
//! to an effective address through `CPU::effective_address`, and then read
//! or write that address explicitly.
//!
//! RET has no handler here: halting is owned by the execution loop.
//!
//! ## Categories
//!
//! - **load_store**: Load and store instructions (LDA, LDX, STA, STX)
//! - **transfer**: Register transfer operations (TAX)
//! - **inc_dec**: Increment operations (INX)

pub mod inc_dec;
pub mod load_store;
pub mod transfer;
