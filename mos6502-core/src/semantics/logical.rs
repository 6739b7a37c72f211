//! AND/ORA/EOR and BIT.

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::registers::StatusFlags;

pub(super) fn and(cpu: &mut Cpu, operand: Operand) {
    cpu.a &= cpu.read_operand(operand);
    cpu.p = cpu.p.with_zero_and_negative(cpu.a);
}

pub(super) fn ora(cpu: &mut Cpu, operand: Operand) {
    cpu.a |= cpu.read_operand(operand);
    cpu.p = cpu.p.with_zero_and_negative(cpu.a);
}

pub(super) fn eor(cpu: &mut Cpu, operand: Operand) {
    cpu.a ^= cpu.read_operand(operand);
    cpu.p = cpu.p.with_zero_and_negative(cpu.a);
}

/// Unlike the other logical ops, BIT never touches A: it only probes it.
/// Z comes from `a & value`; N and V are copied straight from bits 7 and 6
/// of the unmasked operand, not from the AND result.
pub(super) fn bit(cpu: &mut Cpu, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.set_flag(StatusFlags::ZERO, cpu.a & value == 0);
    cpu.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    cpu.set_flag(StatusFlags::OVERFLOW, value & 0x40 != 0);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::clock::{BusyWaitClock, ClockSpeed};
    use crate::memory::Memory;

    fn cpu() -> Cpu {
        Cpu::new(Memory::new(), ClockSpeed::default(), Box::new(BusyWaitClock::new()))
    }

    #[test]
    fn bit_does_not_mutate_accumulator() {
        let mut cpu = cpu();
        cpu.a = 0x0F;
        cpu.memory.write(0x10, 0xC0);
        bit(&mut cpu, Operand::Memory(0x10));
        assert_eq!(cpu.a, 0x0F);
        assert!(cpu.flag(StatusFlags::ZERO));
        assert!(cpu.flag(StatusFlags::NEGATIVE));
        assert!(cpu.flag(StatusFlags::OVERFLOW));
    }

    #[test]
    fn eor_toggles_bits() {
        let mut cpu = cpu();
        cpu.a = 0xFF;
        cpu.memory.write(0x10, 0xFF);
        eor(&mut cpu, Operand::Memory(0x10));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.flag(StatusFlags::ZERO));
    }
}
