//! Fuzz target for CPU execution.
//!
//! Loads an arbitrary program image with arbitrary register contents and
//! runs it under a step budget, looking for panics and broken invariants.

#![no_main]

use arbitrary::Arbitrary;
use lite6502::{FlatMemory, MemoryBus, RunState, CPU};
use libfuzzer_sys::fuzz_target;

/// Registers set after loading, before the run
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Zero page contents, used as indirect pointers
    zero_page: [u8; 256],
    /// Program image loaded at 0x8000
    image: Vec<u8>,
}

const STEP_BUDGET: u64 = 1024;

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    for (i, &byte) in input.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }

    let mut cpu = CPU::new(memory);
    if cpu.load(&input.image).is_err() {
        // Oversized images must be rejected without touching the CPU
        assert_eq!(cpu.state(), RunState::Running);
        return;
    }

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);

    let result = cpu.run_for_steps(STEP_BUDGET);

    assert!(cpu.steps() <= STEP_BUDGET);
    assert_eq!(cpu.sp(), input.cpu_state.sp);
    assert_eq!(cpu.y(), input.cpu_state.y);
    if result.is_err() {
        assert_eq!(cpu.state(), RunState::Halted);
    }
});
