//! # CPU State and Execution
//!
//! This module contains the CPU struct, the reset/load sequence and the
//! fetch-decode-execute loop.
//!
//! ## Execution Model
//!
//! The CPU is a two-state machine, `Running` or `Halted`. `reset()` (and
//! therefore `new()` and `load()`) leaves it `Running`. Each `step()`:
//!
//! 1. Fetches the opcode byte at PC and advances PC by one
//! 2. Decodes it through `OPCODE_TABLE`
//! 3. Runs the handler, which consumes operand bytes via the resolver
//!
//! RET moves the CPU to `Halted`. So does an opcode byte with no table
//! entry, which is additionally reported as `ExecutionError::IllegalOpcode`
//! so that a fault can never be mistaken for a normal return.
//!
//! - `step()`: Execute one instruction
//! - `exec()`: Execute until halted
//! - `run_for_steps()`: Execute until halted or the step budget runs out

use log::{debug, trace, warn};

use crate::instructions::{inc_dec, load_store, transfer};
use crate::{
    decode, ExecutionError, LoadError, MemoryBus, Mnemonic, Registers, RESET_VECTOR, ROM_SIZE,
    ROM_START,
};

/// Execution state of the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Instructions are being fetched and executed.
    Running,
    /// Execution stopped, by RET or by an illegal opcode.
    Halted,
}

/// 6502 CPU state and execution context.
///
/// The CPU owns the register file and its memory bus. It is generic over the
/// memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use lite6502::{CPU, FlatMemory, MemoryBus, RunState};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000); // Reset vector
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0x00);
/// assert_eq!(cpu.state(), RunState::Running);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Register file
    pub(crate) regs: Registers,

    /// Running or halted
    pub(crate) state: RunState,

    /// Instructions executed since the last reset
    pub(crate) steps: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and resets it.
    ///
    /// The program counter is loaded from the reset vector at 0xFFFC/0xFFFD.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            state: RunState::Running,
            steps: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets the CPU.
    ///
    /// - SP, A, X and Y are zeroed
    /// - All status flags are cleared
    /// - PC is loaded from the little-endian reset vector at 0xFFFC/0xFFFD
    /// - The CPU is left `Running` with the step counter at zero
    ///
    /// Memory is not touched, so resetting twice gives the same state.
    pub fn reset(&mut self) {
        let pc = self.memory.read_word(RESET_VECTOR);

        self.regs = Registers::reset(pc);
        self.state = RunState::Running;
        self.steps = 0;

        debug!("reset: pc=0x{:04X}", pc);
    }

    /// Loads a program image into the program window and resets the CPU.
    ///
    /// The image is copied to 0x8000 and the reset vector is pointed at
    /// 0x8000, so execution always starts at the first image byte. For a
    /// full 0x8000-byte image this overwrites image offsets 0x7FFC/0x7FFD.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::ImageTooLarge` if the image is longer than
    /// 0x8000 bytes. Memory and registers are left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite6502::{CPU, FlatMemory, LoadError, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load(&[0xE8, 0x00]).unwrap();
    ///
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(cpu.memory().read_word(0xFFFC), 0x8000);
    ///
    /// let too_big = vec![0u8; 0x8001];
    /// assert!(matches!(cpu.load(&too_big), Err(LoadError::ImageTooLarge { .. })));
    /// ```
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > ROM_SIZE {
            return Err(LoadError::ImageTooLarge {
                len: image.len(),
                max: ROM_SIZE,
            });
        }

        for (addr, &byte) in (ROM_START..=u16::MAX).zip(image) {
            self.memory.write(addr, byte);
        }
        self.memory.write_word(RESET_VECTOR, ROM_START);

        debug!("loaded {} byte image at 0x{:04X}", image.len(), ROM_START);

        self.reset();
        Ok(())
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// A halted CPU stays halted; stepping it does nothing.
    ///
    /// # Returns
    ///
    /// - `Ok(RunState::Running)` after an ordinary instruction
    /// - `Ok(RunState::Halted)` after RET, or if already halted
    /// - `Err(ExecutionError::IllegalOpcode { .. })` if the fetched byte is not
    ///   an implemented opcode; the CPU is halted
    ///
    /// # Examples
    ///
    /// ```
    /// use lite6502::{CPU, FlatMemory, MemoryBus, RunState};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// mem.write(0x8000, 0xE8); // INX
    /// mem.write(0x8001, 0x00); // RET
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// assert_eq!(cpu.step(), Ok(RunState::Running));
    /// assert_eq!(cpu.x(), 0x01);
    /// assert_eq!(cpu.step(), Ok(RunState::Halted));
    /// ```
    pub fn step(&mut self) -> Result<RunState, ExecutionError> {
        if self.state == RunState::Halted {
            return Ok(RunState::Halted);
        }

        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);
        self.regs.pc = pc.wrapping_add(1);

        let Some(metadata) = decode(opcode) else {
            warn!("illegal opcode 0x{:02X} at 0x{:04X}, halting", opcode, pc);
            self.state = RunState::Halted;
            return Err(ExecutionError::IllegalOpcode { opcode, pc });
        };

        trace!(
            "0x{:04X}: {:02X} {} {:?}",
            pc,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode
        );
        self.steps += 1;

        let mode = metadata.addressing_mode;
        match metadata.mnemonic {
            Mnemonic::Lda => load_store::execute_lda(self, mode),
            Mnemonic::Ldx => load_store::execute_ldx(self, mode),
            Mnemonic::Sta => load_store::execute_sta(self, mode),
            Mnemonic::Stx => load_store::execute_stx(self, mode),
            Mnemonic::Tax => transfer::execute_tax(self),
            Mnemonic::Inx => inc_dec::execute_inx(self),
            Mnemonic::Ret => {
                debug!("RET at 0x{:04X} after {} steps, halting", pc, self.steps);
                self.state = RunState::Halted;
            }
        }

        Ok(self.state)
    }

    /// Runs until the CPU halts.
    ///
    /// Returns the number of instructions executed by this call, including
    /// the final RET. There is no bound on the number of steps; use
    /// `run_for_steps` for untrusted programs.
    ///
    /// # Errors
    ///
    /// Propagates `ExecutionError::IllegalOpcode` from `step`.
    pub fn exec(&mut self) -> Result<u64, ExecutionError> {
        let start_steps = self.steps;

        while self.step()? == RunState::Running {}

        Ok(self.steps - start_steps)
    }

    /// Runs until the CPU halts or `budget` instructions have executed.
    ///
    /// Returns `RunState::Running` if the budget ran out first.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite6502::{CPU, FlatMemory, MemoryBus, RunState};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xE8); // INX
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_steps(4), Ok(RunState::Running));
    /// assert_eq!(cpu.x(), 4);
    /// ```
    pub fn run_for_steps(&mut self, budget: u64) -> Result<RunState, ExecutionError> {
        for _ in 0..budget {
            if self.step()? == RunState::Halted {
                return Ok(RunState::Halted);
            }
        }

        Ok(self.state)
    }

    // ========== State Getters ==========

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns whether the CPU is running or halted.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns the number of instructions executed since the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed NV-BDIZC byte.
    pub fn status(&self) -> u8 {
        self.regs.status()
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.flag_c
    }

    // ========== Setters (for tests and hosts) ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.flag_n = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.flag_v = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.flag_b = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.flag_d = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.flag_i = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.flag_z = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.flag_c = value;
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }
}
