//! Per-mnemonic execution handlers.
//!
//! Split along the same lines `examples/gregtatum-cpu-6502-rs` uses to group
//! its own `execute_instruction` match arms, but as free functions over
//! `&mut Cpu` rather than one large match: each submodule owns one family
//! of the instruction set, and [`dispatch`] is the single place that knows
//! which family a [`Mnemonic`] belongs to.

mod arithmetic;
mod control;
mod logical;
mod move_ops;

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;

/// Run the handler for `mnemonic` against `operand`, the single call site
/// `Cpu::step` uses after fetch/decode/resolve. `cycles` is mutable only so
/// branch handlers can add the taken/page-cross penalties spec.md's timing
/// table reserves for them; every other handler ignores it.
pub(crate) fn dispatch(cpu: &mut Cpu, mnemonic: Mnemonic, operand: Operand, cycles: &mut u8) {
    use Mnemonic::*;
    match mnemonic {
        ADC => arithmetic::adc(cpu, operand),
        SBC => arithmetic::sbc(cpu, operand),
        AND => logical::and(cpu, operand),
        ORA => logical::ora(cpu, operand),
        EOR => logical::eor(cpu, operand),
        BIT => logical::bit(cpu, operand),
        ASL => arithmetic::asl(cpu, operand),
        LSR => arithmetic::lsr(cpu, operand),
        ROL => arithmetic::rol(cpu, operand),
        ROR => arithmetic::ror(cpu, operand),
        CMP => arithmetic::cmp(cpu, operand),
        CPX => arithmetic::cpx(cpu, operand),
        CPY => arithmetic::cpy(cpu, operand),
        INC => arithmetic::inc(cpu, operand),
        DEC => arithmetic::dec(cpu, operand),
        INX => arithmetic::inx(cpu),
        DEX => arithmetic::dex(cpu),
        INY => arithmetic::iny(cpu),
        DEY => arithmetic::dey(cpu),

        LDA => move_ops::lda(cpu, operand),
        LDX => move_ops::ldx(cpu, operand),
        LDY => move_ops::ldy(cpu, operand),
        STA => move_ops::sta(cpu, operand),
        STX => move_ops::stx(cpu, operand),
        STY => move_ops::sty(cpu, operand),
        TAX => move_ops::tax(cpu),
        TAY => move_ops::tay(cpu),
        TSX => move_ops::tsx(cpu),
        TXA => move_ops::txa(cpu),
        TXS => move_ops::txs(cpu),
        TYA => move_ops::tya(cpu),

        PHA => control::pha(cpu),
        PHP => control::php(cpu),
        PLA => control::pla(cpu),
        PLP => control::plp(cpu),

        BCC => {
            let taken = !cpu.flag(crate::registers::StatusFlags::CARRY);
            control::branch(cpu, operand, cycles, taken)
        }
        BCS => {
            let taken = cpu.flag(crate::registers::StatusFlags::CARRY);
            control::branch(cpu, operand, cycles, taken)
        }
        BEQ => {
            let taken = cpu.flag(crate::registers::StatusFlags::ZERO);
            control::branch(cpu, operand, cycles, taken)
        }
        BNE => {
            let taken = !cpu.flag(crate::registers::StatusFlags::ZERO);
            control::branch(cpu, operand, cycles, taken)
        }
        BMI => {
            let taken = cpu.flag(crate::registers::StatusFlags::NEGATIVE);
            control::branch(cpu, operand, cycles, taken)
        }
        BPL => {
            let taken = !cpu.flag(crate::registers::StatusFlags::NEGATIVE);
            control::branch(cpu, operand, cycles, taken)
        }
        BVC => {
            let taken = !cpu.flag(crate::registers::StatusFlags::OVERFLOW);
            control::branch(cpu, operand, cycles, taken)
        }
        BVS => {
            let taken = cpu.flag(crate::registers::StatusFlags::OVERFLOW);
            control::branch(cpu, operand, cycles, taken)
        }

        CLC => control::clc(cpu),
        CLD => control::cld(cpu),
        CLI => control::cli(cpu),
        CLV => control::clv(cpu),
        SEC => control::sec(cpu),
        SED => control::sed(cpu),
        SEI => control::sei(cpu),

        JMP => control::jmp(cpu, operand),
        JSR => control::jsr(cpu, operand),
        RTS => control::rts(cpu),
        RTI => control::rti(cpu),
        BRK => control::brk(cpu),
        NOP => {}

        Undefined => unreachable!("Cpu::step filters Undefined before dispatch"),
    }
}
