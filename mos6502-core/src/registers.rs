//! Status-register bit layout.
//!
//! The source this core descends from (`examples/gregtatum-cpu-6502-rs`)
//! threads raw `u8` masks through an enum cast at every flag check. The
//! wider corpus of Rust 6502/NES emulators (e.g.
//! `examples/other_examples/.../yamos6502`) models the same byte with
//! `bitflags!`, which gets us `Debug`/`PartialEq`/set-algebra for free and
//! reads closer to the datasheet table it mirrors. We follow the corpus
//! here rather than the narrower teacher.

use bitflags::bitflags;

bitflags! {
    /// P — the 6502 processor status register.
    ///
    ///   7  bit  0
    /// ---- ----
    /// NVUB DIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt disable
    /// |||| +---- Decimal
    /// |||+------ Break (only meaningful in a value pushed to the stack)
    /// ||+------- Unused, hardwired high on real silicon
    /// |+-------- Overflow
    /// +--------- Negative
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const CARRY              = 0b0000_0001;
        const ZERO                = 0b0000_0010;
        const INTERRUPT_DISABLE   = 0b0000_0100;
        const DECIMAL             = 0b0000_1000;
        const BREAK               = 0b0001_0000;
        const UNUSED              = 0b0010_0000;
        const OVERFLOW            = 0b0100_0000;
        const NEGATIVE            = 0b1000_0000;
    }
}

impl StatusFlags {
    /// Set N and Z from a result byte; every load/transfer/inc/dec/shift
    /// handler ends by calling this.
    pub fn with_zero_and_negative(mut self, value: u8) -> StatusFlags {
        self.set(StatusFlags::ZERO, value == 0);
        self.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
        self
    }
}

/// P's value immediately after the reset-vector bootstrap. 0x32 leaves the
/// two hardware-present-but-unused bits (Break, Unused) set and everything
/// else clear, matching `examples/original_source/dom6502.h`'s `sr = 0x32`.
pub const RESET_STATUS: StatusFlags = StatusFlags::from_bits_truncate(0x32);
