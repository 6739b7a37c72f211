//! Branches, jumps, subroutine linkage, stack instructions, and flag sets.

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::registers::StatusFlags;

/// Shared by all eight conditional branches. `operand` always holds the
/// candidate target `resolve_operand` computed for `Mode::Relative`;
/// whether it's actually taken — and the associated +1/+2 cycle cost — is
/// this function's call, matching spec.md's timing table (a branch fetch
/// alone costs 2 cycles; +1 if taken, +1 more again if the branch crosses
/// a page boundary).
pub(super) fn branch(cpu: &mut Cpu, operand: Operand, cycles: &mut u8, taken: bool) {
    let Operand::Memory(target) = operand else {
        unreachable!("branch instructions always resolve through Mode::Relative");
    };
    if !taken {
        return;
    }
    let base = cpu.pc;
    *cycles += 1;
    if base & 0xFF00 != target & 0xFF00 {
        *cycles += 1;
    }
    cpu.pc = target;
}

pub(super) fn jmp(cpu: &mut Cpu, operand: Operand) {
    if let Operand::Memory(address) = operand {
        cpu.pc = address;
    }
}

/// JSR pushes the address of the *last* byte of the JSR instruction, not
/// the address of the next one; `rts` compensates by incrementing after
/// the pull. PC has already advanced past all three JSR bytes by the time
/// this runs, so the pushed value is `pc - 1`.
pub(super) fn jsr(cpu: &mut Cpu, operand: Operand) {
    let Operand::Memory(target) = operand else {
        unreachable!("JSR always resolves through Mode::Absolute");
    };
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_u16(return_address);
    cpu.pc = target;
}

pub(super) fn rts(cpu: &mut Cpu) {
    let return_address = cpu.pull_u16();
    cpu.pc = return_address.wrapping_add(1);
}

/// Restores P and PC from the stack. Used to return from a hardware
/// interrupt; BRK in this core never pushes a frame for RTI to unwind
/// (see `brk` below), so RTI is only ever reached after `Cpu::run`'s own
/// IRQ service routine.
pub(super) fn rti(cpu: &mut Cpu) {
    let pulled_status = cpu.pull_u8();
    // Masked with 0xCF, clearing the Break bit and the unused-but-set bit
    // rather than forcing the latter on, per dom6502.h's `rti()`: `sr =
    // ram[0x0100 + sp++] & 0xCF`.
    cpu.p = StatusFlags::from_bits_truncate(pulled_status & 0xCF);
    cpu.pc = cpu.pull_u16();
}

/// A pure halt signal, not a software interrupt: no return address or
/// status byte is pushed and PC is not redirected through the IRQ vector.
/// `examples/original_source/dom6502.c`'s `main` loop treats opcode `0x00`
/// identically — `while (*b != 0) { ... }` simply stops — so `Cpu::step`
/// reports `is_break` and `Cpu::run` ends the run there; this handler has
/// nothing left to do. This is a deliberate divergence from the teacher's
/// own `brk()`, which pushes a frame and jumps to the reset vector; the
/// original source this spec was distilled from is authoritative here.
pub(super) fn brk(_cpu: &mut Cpu) {}

pub(super) fn pha(cpu: &mut Cpu) {
    cpu.push_u8(cpu.a);
}

pub(super) fn pla(cpu: &mut Cpu) {
    cpu.a = cpu.pull_u8();
    cpu.p = cpu.p.with_zero_and_negative(cpu.a);
}

/// Pushes `P` verbatim, no masking or forcing of any bit, matching
/// dom6502.h's `php()` (`ram[0x0100 + sp--] = sr;`). The live `cpu.p` is
/// untouched.
pub(super) fn php(cpu: &mut Cpu) {
    cpu.push_u8(cpu.p.bits());
}

pub(super) fn plp(cpu: &mut Cpu) {
    // No masking: the pulled byte becomes P verbatim, Break bit and all,
    // matching dom6502.h's `plp()` (`sr = ram[0x0100 + sp]`). A PHP/PLP
    // round-trip is therefore exact regardless of what was pushed.
    let pulled = cpu.pull_u8();
    cpu.p = StatusFlags::from_bits_truncate(pulled);
}

pub(super) fn clc(cpu: &mut Cpu) {
    cpu.set_flag(StatusFlags::CARRY, false);
}

pub(super) fn sec(cpu: &mut Cpu) {
    cpu.set_flag(StatusFlags::CARRY, true);
}

pub(super) fn cli(cpu: &mut Cpu) {
    cpu.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
}

pub(super) fn sei(cpu: &mut Cpu) {
    cpu.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
}

pub(super) fn clv(cpu: &mut Cpu) {
    cpu.set_flag(StatusFlags::OVERFLOW, false);
}

pub(super) fn cld(cpu: &mut Cpu) {
    cpu.set_flag(StatusFlags::DECIMAL, false);
}

pub(super) fn sed(cpu: &mut Cpu) {
    cpu.set_flag(StatusFlags::DECIMAL, true);
}
