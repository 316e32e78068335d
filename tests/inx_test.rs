//! Tests for the INX (Increment X Register) instruction.
//!
//! Tests cover:
//! - Basic INX operation
//! - Flag updates (Z, N)
//! - Wrapping behavior

use lite6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_inx_basic() {
    let mut cpu = setup_cpu();

    // INX (0xE8)
    cpu.memory_mut().write(0x8000, 0xE8);
    cpu.set_x(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x06);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_inx_wraps_to_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xE8);
    cpu.set_x(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_inx_into_negative_range() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xE8);
    cpu.set_x(0x7F);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_inx_does_not_touch_accumulator_or_carry() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xE8);
    cpu.set_a(0x33);
    cpu.set_x(0xFF);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
    assert!(!cpu.flag_c()); // INX never sets carry, even when wrapping
}
