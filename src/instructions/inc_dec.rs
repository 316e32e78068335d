//! # Increment Instructions
//!
//! - INX: Increment X Register

use crate::{MemoryBus, CPU};

/// Executes the INX (Increment X Register) instruction.
///
/// Adds one to the X register, wrapping from 0xFF to 0x00, and sets the
/// zero and negative flags from the result.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.set_zn(cpu.regs.x);
}
