//! Program loading and reset tests
//!
//! Verifies the program window copy, the reset vector written by `load`,
//! the size limit and reset idempotence.

use lite6502::{FlatMemory, LoadError, MemoryBus, RunState, CPU, ROM_SIZE};

#[test]
fn test_load_copies_image_to_program_window() {
    let mut cpu = CPU::new(FlatMemory::new());

    cpu.load(&[0xA9, 0x01, 0x00]).unwrap();

    assert_eq!(cpu.memory().read(0x8000), 0xA9);
    assert_eq!(cpu.memory().read(0x8001), 0x01);
    assert_eq!(cpu.memory().read(0x8002), 0x00);
    assert_eq!(cpu.memory().read(0x7FFF), 0x00); // Nothing below the window
}

#[test]
fn test_load_points_reset_vector_at_window() {
    let mut cpu = CPU::new(FlatMemory::new());

    cpu.load(&[0xE8]).unwrap();

    // Little-endian 0x8000
    assert_eq!(cpu.memory().read(0xFFFC), 0x00);
    assert_eq!(cpu.memory().read(0xFFFD), 0x80);
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.state(), RunState::Running);
}

#[test]
fn test_load_resets_registers() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_a(0x12);
    cpu.set_x(0x34);
    cpu.set_flag_n(true);

    cpu.load(&[0x00]).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert!(!cpu.flag_n());
}

#[test]
fn test_load_full_size_image() {
    let mut cpu = CPU::new(FlatMemory::new());
    let image = vec![0xE8; ROM_SIZE];

    cpu.load(&image).unwrap();

    assert_eq!(cpu.memory().read(0x8000), 0xE8);
    assert_eq!(cpu.memory().read(0xFFFB), 0xE8);
    assert_eq!(cpu.memory().read(0xFFFF), 0xE8);
    // Reset vector overwrites image offsets 0x7FFC/0x7FFD
    assert_eq!(cpu.memory().read_word(0xFFFC), 0x8000);
}

#[test]
fn test_load_rejects_oversized_image() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.memory_mut().write(0x8000, 0x55);
    cpu.set_a(0x77);
    let image = vec![0xE8; ROM_SIZE + 1];

    let result = cpu.load(&image);

    assert_eq!(
        result,
        Err(LoadError::ImageTooLarge {
            len: ROM_SIZE + 1,
            max: ROM_SIZE
        })
    );
    // Nothing was copied or reset
    assert_eq!(cpu.memory().read(0x8000), 0x55);
    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_load_error_message() {
    let err = LoadError::ImageTooLarge {
        len: 40000,
        max: 32768,
    };

    assert_eq!(
        err.to_string(),
        "program image is 40000 bytes, the program window holds at most 32768"
    );
}

#[test]
fn test_reset_reads_vector_little_endian() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let cpu = CPU::new(memory);

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_reset_is_idempotent() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load(&[0xA9, 0x80, 0xAA, 0x00]).unwrap();
    cpu.exec().unwrap();

    cpu.reset();
    let first = cpu.registers();
    cpu.reset();
    let second = cpu.registers();

    assert_eq!(first, second);
    assert_eq!(first.pc, 0x8000);
    assert_eq!(first.sp, 0x00);
    assert_eq!(first.status(), 0b00100000);
}

#[test]
fn test_reset_restarts_a_halted_program() {
    let mut cpu = CPU::new(FlatMemory::new());
    // LDA $10; TAX; INX; STX $10; RET keeps a counter in zero page
    cpu.load(&[0xA5, 0x10, 0xAA, 0xE8, 0x86, 0x10, 0x00]).unwrap();

    cpu.exec().unwrap();
    assert_eq!(cpu.memory().read(0x0010), 0x01);

    cpu.reset();
    cpu.exec().unwrap();
    assert_eq!(cpu.memory().read(0x0010), 0x02);
}
