//! Comprehensive tests for the STA (Store Accumulator) instruction.
//!
//! Tests cover:
//! - All 7 addressing modes
//! - No flag updates (STA does not affect flags)

use lite6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();

    // STA $42 (0x85 0x42)
    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.set_a(0x33);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0042), 0x33);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_sta_zero_page_x() {
    let mut cpu = setup_cpu();

    // STA $F0,X (0x95 0xF0) with X = 0x6A stores to 0x5A
    cpu.memory_mut().write(0x8000, 0x95);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.set_a(0x69);
    cpu.set_x(0x6A);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x005A), 0x69);
    assert_eq!(cpu.memory().read(0x015A), 0x00);
}

#[test]
fn test_sta_absolute() {
    let mut cpu = setup_cpu();

    // STA $1234 (0x8D 0x34 0x12)
    cpu.memory_mut().write(0x8000, 0x8D);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.set_a(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1234), 0xFF);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_sta_absolute_x() {
    let mut cpu = setup_cpu();

    // STA $2000,X (0x9D 0x00 0x20)
    cpu.memory_mut().write(0x8000, 0x9D);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.set_a(0x01);
    cpu.set_x(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x2010), 0x01);
}

#[test]
fn test_sta_absolute_y_wraps_address_space() {
    let mut cpu = setup_cpu();

    // STA $FFFF,Y (0x99 0xFF 0xFF) with Y = 2 stores to 0x0001
    cpu.memory_mut().write(0x8000, 0x99);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0xFF);
    cpu.set_a(0xAB);
    cpu.set_y(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0001), 0xAB);
}

#[test]
fn test_sta_indirect_x() {
    let mut cpu = setup_cpu();

    // STA ($20,X) (0x81 0x20) with X = 2: pointer at 0x22 -> 0x3000
    cpu.memory_mut().write(0x8000, 0x81);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write_word(0x0022, 0x3000);
    cpu.set_a(0x4D);
    cpu.set_x(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x3000), 0x4D);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = setup_cpu();

    // STA ($20),Y (0x91 0x20) with Y = 3: pointer 0x3000 + 3
    cpu.memory_mut().write(0x8000, 0x91);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write_word(0x0020, 0x3000);
    cpu.set_a(0x4E);
    cpu.set_y(0x03);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x3003), 0x4E);
    assert_eq!(cpu.pc(), 0x8002);
}

// ========== Flag Tests ==========

#[test]
fn test_sta_does_not_affect_flags() {
    let mut cpu = setup_cpu();

    // STA $42 (0x85 0x42)
    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.set_a(0x00);
    cpu.set_flag_z(false);
    cpu.set_flag_n(true);

    let status_before = cpu.status();
    cpu.step().unwrap();

    assert_eq!(cpu.status(), status_before);
    assert_eq!(cpu.memory().read(0x0042), 0x00);
}
