//! # Register File
//!
//! Program counter, stack pointer, the three 8-bit general registers and the
//! status flags, kept as individual fields.

/// 6502 CPU register set.
///
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - SP: 8-bit stack pointer (unused by the implemented instruction subset)
/// - PC: 16-bit program counter
/// - N, V, B, D, I, Z, C: status flags
///
/// Only N and Z are written by the implemented instructions, and always
/// together through [`Registers::set_zn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Program counter (address of next instruction byte)
    pub pc: u16,

    /// Stack pointer
    pub sp: u8,

    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub flag_n: bool,

    /// Overflow flag
    pub flag_v: bool,

    /// Break flag
    pub flag_b: bool,

    /// Decimal mode flag
    pub flag_d: bool,

    /// Interrupt disable flag
    pub flag_i: bool,

    /// Zero flag (set if result is zero)
    pub flag_z: bool,

    /// Carry flag
    pub flag_c: bool,
}

impl Registers {
    /// Register state after reset: everything zeroed, PC taken from the
    /// reset vector.
    pub const fn reset(pc: u16) -> Self {
        Self {
            pc,
            sp: 0,
            a: 0,
            x: 0,
            y: 0,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
        }
    }

    /// Recomputes the Zero and Negative flags from the value just written
    /// to a register.
    pub fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    /// Returns the status flags as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b00100000;

        if self.flag_n {
            status |= 0b10000000;
        }
        if self.flag_v {
            status |= 0b01000000;
        }
        if self.flag_b {
            status |= 0b00010000;
        }
        if self.flag_d {
            status |= 0b00001000;
        }
        if self.flag_i {
            status |= 0b00000100;
        }
        if self.flag_z {
            status |= 0b00000010;
        }
        if self.flag_c {
            status |= 0b00000001;
        }

        status
    }
}
