//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from
//! specific memory implementations, and `FlatMemory`, a plain 64KB array.
//!
//! ## Design Principles
//!
//! - No bus errors: every `u16` address is a legal address, so reads and
//!   writes always succeed
//! - One byte order: 16-bit words are little-endian (low byte first) for
//!   both the read and the write path
//!
//! ## Address Space Layout
//!
//! | Range         | Use                                  |
//! |---------------|--------------------------------------|
//! | 0x0000-0x00FF | Zero page                            |
//! | 0x8000-0xFFFF | Program window (filled by `load`)    |
//! | 0xFFFC-0xFFFD | Reset vector (inside the window)     |

/// First address of the program window.
pub const ROM_START: u16 = 0x8000;

/// Size in bytes of the program window (0x8000-0xFFFF).
pub const ROM_SIZE: usize = 0x8000;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// Only `read` and `write` are required; the word accessors are provided in
/// terms of them so every implementation shares the same byte order.
///
/// # Examples
///
/// ```
/// use lite6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.write_word(0xFFFC, 0x8000);
/// assert_eq!(mem.read(0xFFFC), 0x00); // Low byte first
/// assert_eq!(mem.read(0xFFFD), 0x80);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use lite6502::MemoryBus;
///
/// /// Memory that records how many writes it has seen.
/// struct CountingMemory {
///     data: Vec<u8>,
///     writes: usize,
/// }
///
/// impl MemoryBus for CountingMemory {
///     fn read(&self, addr: u16) -> u8 {
///         self.data[addr as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.writes += 1;
///         self.data[addr as usize] = value;
///     }
/// }
///
/// let mut mem = CountingMemory { data: vec![0; 0x10000], writes: 0 };
/// mem.write_word(0x0010, 0xBEEF);
/// assert_eq!(mem.writes, 2);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The high byte address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous
/// array initialized to 0x00. The program window is writable like any other
/// region.
///
/// # Examples
///
/// ```
/// use lite6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
/// memory.write(0x8000, 0xE8); // INX
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Returns the whole address space as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
