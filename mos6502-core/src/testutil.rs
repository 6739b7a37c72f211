//! Byte-poking test harness.
//!
//! The teacher builds a full text assembler (`cpu-6502/src/asm.rs`, several
//! hundred lines) to turn mnemonic source into test programs. Building and
//! maintaining an assembler is explicitly out of scope (spec.md's
//! "assembly-building test helpers" non-goal names it as an external
//! concern), so tests here instead poke raw opcode/operand bytes directly
//! — slower to write per test, but with zero surface of its own to get
//! wrong.

use crate::clock::{BusyWaitClock, ClockSpeed};
use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::registers::StatusFlags;

/// Build a `Cpu` with `program` loaded at `0x0600` (a conventional origin
/// for hand-assembled 6502 test snippets) and the reset vector pointed at
/// it, using an uncapped busy-wait clock at 1 MHz.
pub fn cpu_with_program(program: &[u8]) -> Cpu {
    let mut memory = Memory::new();
    memory.load(0x0600, program);
    memory.write_u16(0xFFFC, 0x0600);
    Cpu::new(memory, ClockSpeed::default(), Box::new(BusyWaitClock::new()))
}

/// Run until BRK, an error, or `max_steps` instructions, whichever comes
/// first, and hand back the halt reason for the caller to assert on.
pub fn run_to_halt(cpu: &mut Cpu, max_steps: u64) -> crate::error::Halt {
    cpu.run(Some(max_steps)).expect("test program executed only defined opcodes")
}

pub fn assert_status(cpu: &Cpu, flag: StatusFlags, expected: bool) {
    assert_eq!(
        cpu.p.contains(flag),
        expected,
        "expected {flag:?} to be {expected}, status byte was {:#04x}",
        cpu.p.bits()
    );
}
