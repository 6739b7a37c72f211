//! The fetch-decode-execute engine.
//!
//! Grounded on `examples/gregtatum-cpu-6502-rs/cpu-6502/src/cpu_6502.rs`'s
//! `Cpu6502` struct and its `tick`/`execute_instruction` pair, with the
//! stack and interrupt-latch protocol cross-checked against
//! `examples/original_source/dom6502.c`'s `push`/`pop`/`main` loop.

use crate::addressing::Operand;
use crate::clock::{Clock, ClockSpeed};
use crate::error::{CoreError, Halt, StepOutcome};
use crate::memory::Memory;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::registers::{StatusFlags, RESET_STATUS};
use crate::semantics;

/// Address of the bottom of the stack page. SP is an offset within this
/// page; the stack grows downward from `0x01FF` and wraps within the page
/// rather than across it, matching real 6502 behavior (and `dom6502.c`'s
/// `push`/`pop`, which index `memory[0x100 + sp]` with an 8-bit `sp`).
const STACK_BASE: u16 = 0x0100;

const RESET_VECTOR: u16 = 0xFFFC;
const IRQ_VECTOR: u16 = 0xFFFE;

/// The MOS 6502 register file, memory image, and cycle/interrupt
/// bookkeeping needed to fetch, decode, and execute one instruction at a
/// time.
pub struct Cpu {
    pub memory: Memory,
    pub pc: u16,
    pub sp: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: StatusFlags,

    /// Set by a host between steps (e.g. from a device emulation) to
    /// request that `run`/`step` service an IRQ at the next instruction
    /// boundary, per spec.md's "latch-and-service" interrupt protocol:
    /// raising mid-instruction never interrupts the instruction in flight.
    irq_pending: bool,

    clock_speed: ClockSpeed,
    clock: Box<dyn Clock>,

    /// Instructions executed so far by `run`, for `max_steps` accounting.
    tick_count: u64,
}

impl Cpu {
    /// Build a CPU over `memory`, bootstrapping PC from the reset vector at
    /// `0xFFFC`/`0xFFFD` and setting SP and P to their post-reset values.
    /// Matches `dom6502.c`'s `reset()`: SP starts at `0xFF`, P starts at
    /// `RESET_STATUS` (`0x32`), and no cycles are charged for the bootstrap
    /// itself — spec.md's cycle accounting begins at the first `step`.
    pub fn new(memory: Memory, clock_speed: ClockSpeed, clock: Box<dyn Clock>) -> Cpu {
        let pc = memory.read_u16(RESET_VECTOR);
        Cpu {
            memory,
            pc,
            sp: 0xFF,
            a: 0,
            x: 0,
            y: 0,
            p: RESET_STATUS,
            irq_pending: false,
            clock_speed,
            clock,
            tick_count: 0,
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Latch an interrupt request. Serviced at the next instruction
    /// boundary in `run`, or immediately by an explicit `service_irq` call,
    /// provided the Interrupt Disable flag is clear.
    pub fn raise_irq(&mut self) {
        self.irq_pending = true;
    }

    pub(crate) fn fetch_u8(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    pub(crate) fn fetch_u16(&mut self) -> u16 {
        let word = self.memory.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        word
    }

    pub(crate) fn push_u8(&mut self, value: u8) {
        self.memory.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE + self.sp as u16)
    }

    /// Push high byte then low byte, so a matching `pull_u16` pops them
    /// back in the order JSR/BRK need: this is the order `dom6502.c`'s
    /// `jsr()` pushes the return address in.
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    pub(crate) fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8();
        let hi = self.pull_u8();
        u16::from_le_bytes([lo, hi])
    }

    /// Read through a resolved operand. `Accumulator` reads `a`; `None` is
    /// never passed to this by a well-formed handler and returns 0.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Memory(address) => self.memory.read(address),
            Operand::None => 0,
        }
    }

    /// Write back through a resolved operand, the read_operand mirror.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Memory(address) => self.memory.write(address, value),
            Operand::None => {}
        }
    }

    pub(crate) fn flag(&self, flag: StatusFlags) -> bool {
        self.p.contains(flag)
    }

    pub(crate) fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.p.set(flag, value);
    }

    /// Fetch, decode, and execute exactly one instruction, returning what
    /// ran and how many cycles it cost. Returns `CoreError::UndefinedOpcode`
    /// without mutating any register but PC-past-the-opcode-byte if the
    /// fetched opcode has no table entry, leaving a caller free to inspect
    /// memory around the failure.
    pub fn step(&mut self) -> Result<StepOutcome, CoreError> {
        let opcode_address = self.pc;
        let opcode = self.fetch_u8();
        let instruction = OPCODE_TABLE[opcode as usize];

        if instruction.mnemonic == Mnemonic::Undefined {
            return Err(CoreError::UndefinedOpcode { opcode, address: opcode_address });
        }

        let mut cycles = instruction.base_cycles;
        let operand = self.resolve_operand(instruction.mode, &mut cycles);
        semantics::dispatch(self, instruction.mnemonic, operand, &mut cycles);

        log::trace!(
            "{opcode_address:#06x}: {:?} {:?} ({cycles} cycles) a={:#04x} x={:#04x} y={:#04x} sp={:#04x} p={:#04x}",
            instruction.mnemonic,
            operand,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.p.bits(),
        );

        self.tick_count += 1;

        Ok(StepOutcome {
            mnemonic: instruction.mnemonic,
            cycles,
            is_break: instruction.mnemonic == Mnemonic::BRK,
        })
    }

    /// Push PC high, PC low, then P verbatim, and jump to the IRQ vector at
    /// `0xFFFE`/`0xFFFF`. Matches `dom6502.c`'s interrupt-service block
    /// exactly: `ram[sp--] = pc>>8; ram[sp--] = pc&0xFF; ram[sp--] = sr;`
    /// with no masking of the pushed status byte and, notably, no setting
    /// of the Interrupt Disable flag — the original never sets it here, so
    /// neither does this core; a handler wanting to block re-entrant IRQs
    /// must do so itself with SEI.
    fn service_irq(&mut self) {
        self.push_u16(self.pc);
        self.push_u8(self.p.bits());
        self.pc = self.memory.read_u16(IRQ_VECTOR);
        self.irq_pending = false;
    }

    /// Run until BRK executes, an error occurs, or `max_steps` instructions
    /// have run (when `Some`), pacing each instruction against the wall
    /// clock at `clock_speed` and servicing a latched IRQ between
    /// instructions whenever the Interrupt Disable flag is clear.
    pub fn run(&mut self, max_steps: Option<u64>) -> Result<Halt, CoreError> {
        loop {
            if let Some(limit) = max_steps {
                if self.tick_count >= limit {
                    return Ok(Halt::MaxStepsReached);
                }
            }

            let start = self.clock.now_micros();
            let outcome = self.step()?;

            let budget_micros = self.clock_speed.cycles_to_micros(outcome.cycles);
            let elapsed = self.clock.now_micros().saturating_sub(start);
            if elapsed < budget_micros {
                self.clock.sleep_micros(budget_micros - elapsed);
            }

            if outcome.is_break {
                return Ok(Halt::Break);
            }

            if self.irq_pending && !self.flag(StatusFlags::INTERRUPT_DISABLE) {
                self.service_irq();
            }
        }
    }
}
