//! Loads, stores, and inter-register transfers.

use crate::addressing::Operand;
use crate::cpu::Cpu;

pub(super) fn lda(cpu: &mut Cpu, operand: Operand) {
    cpu.a = cpu.read_operand(operand);
    cpu.p = cpu.p.with_zero_and_negative(cpu.a);
}

pub(super) fn ldx(cpu: &mut Cpu, operand: Operand) {
    cpu.x = cpu.read_operand(operand);
    cpu.p = cpu.p.with_zero_and_negative(cpu.x);
}

pub(super) fn ldy(cpu: &mut Cpu, operand: Operand) {
    cpu.y = cpu.read_operand(operand);
    cpu.p = cpu.p.with_zero_and_negative(cpu.y);
}

pub(super) fn sta(cpu: &mut Cpu, operand: Operand) {
    cpu.write_operand(operand, cpu.a);
}

pub(super) fn stx(cpu: &mut Cpu, operand: Operand) {
    cpu.write_operand(operand, cpu.x);
}

pub(super) fn sty(cpu: &mut Cpu, operand: Operand) {
    cpu.write_operand(operand, cpu.y);
}

pub(super) fn tax(cpu: &mut Cpu) {
    cpu.x = cpu.a;
    cpu.p = cpu.p.with_zero_and_negative(cpu.x);
}

pub(super) fn tay(cpu: &mut Cpu) {
    cpu.y = cpu.a;
    cpu.p = cpu.p.with_zero_and_negative(cpu.y);
}

pub(super) fn txa(cpu: &mut Cpu) {
    cpu.a = cpu.x;
    cpu.p = cpu.p.with_zero_and_negative(cpu.a);
}

pub(super) fn tya(cpu: &mut Cpu) {
    cpu.a = cpu.y;
    cpu.p = cpu.p.with_zero_and_negative(cpu.a);
}

pub(super) fn tsx(cpu: &mut Cpu) {
    cpu.x = cpu.sp;
    cpu.p = cpu.p.with_zero_and_negative(cpu.x);
}

/// The one transfer that doesn't touch N/Z: SP isn't a data register, so
/// loading it from X is never treated as producing a "result" to test.
pub(super) fn txs(cpu: &mut Cpu) {
    cpu.sp = cpu.x;
}
