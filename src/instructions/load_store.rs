//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - STA: Store Accumulator
//! - STX: Store X Register

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    let value = cpu.memory.read(addr);

    cpu.regs.a = value;
    cpu.regs.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Loads a byte of memory into the X register, setting the zero and negative
/// flags as appropriate.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    let value = cpu.memory.read(addr);

    cpu.regs.x = value;
    cpu.regs.set_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the contents of the accumulator into memory at the address specified
/// by the addressing mode. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    cpu.memory.write(addr, cpu.regs.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    cpu.memory.write(addr, cpu.regs.x);
}
