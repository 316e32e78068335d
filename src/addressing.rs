//! # Addressing Modes
//!
//! This module defines the addressing modes used by the implemented
//! instructions and the resolver that turns the operand bytes following an
//! opcode into an effective address.
//!
//! Every mode resolves to an *address*. Immediate mode yields the address of
//! the literal operand byte, so a load reads it exactly like any other
//! operand and no mode ever hands back a value.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: TAX, INX, RET
    Implicit,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X, wraps at 0xFFFF)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y, wraps at 0xFFFF)
    AbsoluteY,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40 within zero page, read the 16-bit
    /// address stored there, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load
    /// from result)
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand at PC to an effective address and advances PC
    /// past the operand bytes.
    ///
    /// Implicit mode consumes nothing and yields the current PC; instructions
    /// with implicit operands never dereference it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite6502::{AddressingMode, CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// mem.write(0x8000, 0xFF); // zero page operand
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_x(0x01);
    ///
    /// // $FF,X with X = 1 stays in page zero
    /// assert_eq!(cpu.effective_address(AddressingMode::ZeroPageX), 0x0000);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn effective_address(&mut self, mode: AddressingMode) -> u16 {
        let pc = self.regs.pc;

        let addr = match mode {
            AddressingMode::Implicit | AddressingMode::Immediate => pc,
            AddressingMode::ZeroPage => self.memory.read(pc) as u16,
            AddressingMode::ZeroPageX => self.memory.read(pc).wrapping_add(self.regs.x) as u16,
            AddressingMode::ZeroPageY => self.memory.read(pc).wrapping_add(self.regs.y) as u16,
            AddressingMode::Absolute => self.memory.read_word(pc),
            AddressingMode::AbsoluteX => self
                .memory
                .read_word(pc)
                .wrapping_add(self.regs.x as u16),
            AddressingMode::AbsoluteY => self
                .memory
                .read_word(pc)
                .wrapping_add(self.regs.y as u16),
            AddressingMode::IndirectX => {
                let ptr = self.memory.read(pc).wrapping_add(self.regs.x);
                self.memory.read_word(ptr as u16)
            }
            AddressingMode::IndirectY => {
                let ptr = self.memory.read(pc) as u16;
                self.memory.read_word(ptr).wrapping_add(self.regs.y as u16)
            }
        };

        self.regs.pc = pc.wrapping_add(mode.operand_bytes() as u16);
        addr
    }
}
