//! The 256-entry opcode dispatch table.
//!
//! Reproduced byte-for-byte from `examples/original_source/dom6502.h`'s
//! `instructions[]` array — the reference this specification was distilled
//! from, and the datasheet spec.md §4.4 calls authoritative. That C array
//! only defines 255 rows (0x00-0xFE); row 0xFF is filled in here as the
//! `Undefined` sentinel like every other gap, since this core's table must
//! have exactly 256 entries with no row left implicit.
//!
//! Illegal/undocumented opcodes (the ones the teacher's
//! `cpu_6502/opcodes_illegal.rs` implements as SLO/RLA/ANC/KIL/...) are
//! out of scope per spec.md's Non-goals; every slot the hardware would
//! otherwise spend on one is `Undefined` here.

use crate::addressing::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Mnemonic {
    // Logical and arithmetic commands
    ADC, AND, ASL, BIT, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY,
    LSR, ORA, ROL, ROR, SBC,
    // Move commands
    LDA, LDX, LDY, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
    // Stack commands
    PHA, PHP, PLA, PLP,
    // Jump / flag / branch commands
    BCC, BCS, BEQ, BMI, BNE, BPL, BRK, BVC, BVS,
    CLC, CLD, CLI, CLV, SEC, SED, SEI,
    JMP, JSR, NOP, RTI, RTS,
    /// No decoded instruction lives at this opcode. The engine halts with
    /// `CoreError::UndefinedOpcode` rather than execute it.
    Undefined,
}

/// A single 256th of the opcode table: which mnemonic, how many bytes
/// (including the opcode byte) to advance PC by, the base cycle count
/// before any addressing-mode penalty, and which addressing mode decodes
/// the operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub bytes: u8,
    pub base_cycles: u8,
    pub mode: Mode,
}

const fn op(mnemonic: Mnemonic, bytes: u8, base_cycles: u8, mode: Mode) -> Instruction {
    Instruction { mnemonic, bytes, base_cycles, mode }
}

const UNDEFINED: Instruction = op(Mnemonic::Undefined, 1, 0, Mode::Implied);

#[rustfmt::skip]
pub const OPCODE_TABLE: [Instruction; 256] = {
    use Mnemonic::*;
    use Mode::*;
    [
        /* 0x00 */ op(BRK, 1, 7, Implied),    /* 0x01 */ op(ORA, 2, 6, IndirectX),
        /* 0x02 */ UNDEFINED,                 /* 0x03 */ UNDEFINED,
        /* 0x04 */ UNDEFINED,                 /* 0x05 */ op(ORA, 2, 3, ZeroPage),
        /* 0x06 */ op(ASL, 2, 5, ZeroPage),   /* 0x07 */ UNDEFINED,
        /* 0x08 */ op(PHP, 1, 3, Implied),    /* 0x09 */ op(ORA, 2, 2, Immediate),
        /* 0x0A */ op(ASL, 1, 2, Accumulator),/* 0x0B */ UNDEFINED,
        /* 0x0C */ UNDEFINED,                 /* 0x0D */ op(ORA, 3, 4, Absolute),
        /* 0x0E */ op(ASL, 3, 6, Absolute),   /* 0x0F */ UNDEFINED,

        /* 0x10 */ op(BPL, 2, 2, Relative),   /* 0x11 */ op(ORA, 2, 5, IndirectY),
        /* 0x12 */ UNDEFINED,                 /* 0x13 */ UNDEFINED,
        /* 0x14 */ UNDEFINED,                 /* 0x15 */ op(ORA, 2, 4, ZeroPageX),
        /* 0x16 */ op(ASL, 2, 6, ZeroPageX),  /* 0x17 */ UNDEFINED,
        /* 0x18 */ op(CLC, 1, 2, Implied),    /* 0x19 */ op(ORA, 3, 4, AbsoluteY),
        /* 0x1A */ UNDEFINED,                 /* 0x1B */ UNDEFINED,
        /* 0x1C */ UNDEFINED,                 /* 0x1D */ op(ORA, 3, 4, AbsoluteX),
        /* 0x1E */ op(ASL, 3, 7, AbsoluteX),  /* 0x1F */ UNDEFINED,

        /* 0x20 */ op(JSR, 3, 6, Absolute),   /* 0x21 */ op(AND, 2, 6, IndirectX),
        /* 0x22 */ UNDEFINED,                 /* 0x23 */ UNDEFINED,
        /* 0x24 */ op(BIT, 2, 3, ZeroPage),   /* 0x25 */ op(AND, 2, 3, ZeroPage),
        /* 0x26 */ op(ROL, 2, 5, ZeroPage),   /* 0x27 */ UNDEFINED,
        /* 0x28 */ op(PLP, 1, 4, Implied),    /* 0x29 */ op(AND, 2, 2, Immediate),
        /* 0x2A */ op(ROL, 1, 2, Accumulator),/* 0x2B */ UNDEFINED,
        /* 0x2C */ op(BIT, 3, 4, Absolute),   /* 0x2D */ op(AND, 3, 4, Absolute),
        /* 0x2E */ op(ROL, 3, 6, Absolute),   /* 0x2F */ UNDEFINED,

        /* 0x30 */ op(BMI, 2, 2, Relative),   /* 0x31 */ op(AND, 2, 5, IndirectY),
        /* 0x32 */ UNDEFINED,                 /* 0x33 */ UNDEFINED,
        /* 0x34 */ UNDEFINED,                 /* 0x35 */ op(AND, 2, 4, ZeroPageX),
        /* 0x36 */ op(ROL, 2, 6, ZeroPageX),  /* 0x37 */ UNDEFINED,
        /* 0x38 */ op(SEC, 1, 2, Implied),    /* 0x39 */ op(AND, 3, 4, AbsoluteY),
        /* 0x3A */ UNDEFINED,                 /* 0x3B */ UNDEFINED,
        /* 0x3C */ UNDEFINED,                 /* 0x3D */ op(AND, 3, 4, AbsoluteX),
        /* 0x3E */ op(ROL, 3, 7, AbsoluteX),  /* 0x3F */ UNDEFINED,

        /* 0x40 */ op(RTI, 1, 6, Implied),    /* 0x41 */ op(EOR, 2, 6, IndirectX),
        /* 0x42 */ UNDEFINED,                 /* 0x43 */ UNDEFINED,
        /* 0x44 */ UNDEFINED,                 /* 0x45 */ op(EOR, 2, 3, ZeroPage),
        /* 0x46 */ op(LSR, 2, 5, ZeroPage),   /* 0x47 */ UNDEFINED,
        /* 0x48 */ op(PHA, 1, 3, Implied),    /* 0x49 */ op(EOR, 2, 2, Immediate),
        /* 0x4A */ op(LSR, 1, 2, Accumulator),/* 0x4B */ UNDEFINED,
        /* 0x4C */ op(JMP, 3, 3, Absolute),   /* 0x4D */ op(EOR, 3, 4, Absolute),
        /* 0x4E */ op(LSR, 3, 6, Absolute),   /* 0x4F */ UNDEFINED,

        /* 0x50 */ op(BVC, 2, 2, Relative),   /* 0x51 */ op(EOR, 2, 5, IndirectY),
        /* 0x52 */ UNDEFINED,                 /* 0x53 */ UNDEFINED,
        /* 0x54 */ UNDEFINED,                 /* 0x55 */ op(EOR, 2, 4, ZeroPageX),
        /* 0x56 */ op(LSR, 2, 6, ZeroPageX),  /* 0x57 */ UNDEFINED,
        /* 0x58 */ op(CLI, 1, 2, Implied),    /* 0x59 */ op(EOR, 3, 4, AbsoluteY),
        /* 0x5A */ UNDEFINED,                 /* 0x5B */ UNDEFINED,
        /* 0x5C */ UNDEFINED,                 /* 0x5D */ op(EOR, 3, 4, AbsoluteX),
        /* 0x5E */ op(LSR, 3, 7, AbsoluteX),  /* 0x5F */ UNDEFINED,

        /* 0x60 */ op(RTS, 1, 6, Implied),    /* 0x61 */ op(ADC, 2, 6, IndirectX),
        /* 0x62 */ UNDEFINED,                 /* 0x63 */ UNDEFINED,
        /* 0x64 */ UNDEFINED,                 /* 0x65 */ op(ADC, 2, 3, ZeroPage),
        /* 0x66 */ op(ROR, 2, 5, ZeroPage),   /* 0x67 */ UNDEFINED,
        /* 0x68 */ op(PLA, 1, 4, Implied),    /* 0x69 */ op(ADC, 2, 2, Immediate),
        /* 0x6A */ op(ROR, 1, 2, Accumulator),/* 0x6B */ UNDEFINED,
        /* 0x6C */ op(JMP, 3, 5, Indirect),   /* 0x6D */ op(ADC, 3, 4, Absolute),
        /* 0x6E */ op(ROR, 3, 6, Absolute),   /* 0x6F */ UNDEFINED,

        /* 0x70 */ op(BVS, 2, 2, Relative),   /* 0x71 */ op(ADC, 2, 5, IndirectY),
        /* 0x72 */ UNDEFINED,                 /* 0x73 */ UNDEFINED,
        /* 0x74 */ UNDEFINED,                 /* 0x75 */ op(ADC, 2, 4, ZeroPageX),
        /* 0x76 */ op(ROR, 2, 6, ZeroPageX),  /* 0x77 */ UNDEFINED,
        /* 0x78 */ op(SEI, 1, 2, Implied),    /* 0x79 */ op(ADC, 3, 4, AbsoluteY),
        /* 0x7A */ UNDEFINED,                 /* 0x7B */ UNDEFINED,
        /* 0x7C */ UNDEFINED,                 /* 0x7D */ op(ADC, 3, 4, AbsoluteX),
        /* 0x7E */ op(ROR, 3, 7, AbsoluteX),  /* 0x7F */ UNDEFINED,

        /* 0x80 */ UNDEFINED,                 /* 0x81 */ op(STA, 2, 6, IndirectX),
        /* 0x82 */ UNDEFINED,                 /* 0x83 */ UNDEFINED,
        /* 0x84 */ op(STY, 2, 3, ZeroPage),   /* 0x85 */ op(STA, 2, 3, ZeroPage),
        /* 0x86 */ op(STX, 2, 3, ZeroPage),   /* 0x87 */ UNDEFINED,
        /* 0x88 */ op(DEY, 1, 2, Implied),    /* 0x89 */ UNDEFINED,
        /* 0x8A */ op(TXA, 1, 2, Implied),    /* 0x8B */ UNDEFINED,
        /* 0x8C */ op(STY, 3, 4, Absolute),   /* 0x8D */ op(STA, 3, 4, Absolute),
        /* 0x8E */ op(STX, 3, 4, Absolute),   /* 0x8F */ UNDEFINED,

        /* 0x90 */ op(BCC, 2, 2, Relative),   /* 0x91 */ op(STA, 2, 6, IndirectY),
        /* 0x92 */ UNDEFINED,                 /* 0x93 */ UNDEFINED,
        /* 0x94 */ op(STY, 2, 4, ZeroPageX),  /* 0x95 */ op(STA, 2, 4, ZeroPageX),
        /* 0x96 */ op(STX, 2, 4, ZeroPageY),  /* 0x97 */ UNDEFINED,
        /* 0x98 */ op(TYA, 1, 2, Implied),    /* 0x99 */ op(STA, 3, 5, AbsoluteY),
        /* 0x9A */ op(TXS, 1, 2, Implied),    /* 0x9B */ UNDEFINED,
        /* 0x9C */ UNDEFINED,                 /* 0x9D */ op(STA, 3, 5, AbsoluteX),
        /* 0x9E */ UNDEFINED,                 /* 0x9F */ UNDEFINED,

        /* 0xA0 */ op(LDY, 2, 2, Immediate),  /* 0xA1 */ op(LDA, 2, 6, IndirectX),
        /* 0xA2 */ op(LDX, 2, 2, Immediate),  /* 0xA3 */ UNDEFINED,
        /* 0xA4 */ op(LDY, 2, 3, ZeroPage),   /* 0xA5 */ op(LDA, 2, 3, ZeroPage),
        /* 0xA6 */ op(LDX, 2, 3, ZeroPage),   /* 0xA7 */ UNDEFINED,
        /* 0xA8 */ op(TAY, 1, 2, Implied),    /* 0xA9 */ op(LDA, 2, 2, Immediate),
        /* 0xAA */ op(TAX, 1, 2, Implied),    /* 0xAB */ UNDEFINED,
        /* 0xAC */ op(LDY, 3, 4, Absolute),   /* 0xAD */ op(LDA, 3, 4, Absolute),
        /* 0xAE */ op(LDX, 3, 4, Absolute),   /* 0xAF */ UNDEFINED,

        /* 0xB0 */ op(BCS, 2, 2, Relative),   /* 0xB1 */ op(LDA, 2, 5, IndirectY),
        /* 0xB2 */ UNDEFINED,                 /* 0xB3 */ UNDEFINED,
        /* 0xB4 */ op(LDY, 2, 4, ZeroPageX),  /* 0xB5 */ op(LDA, 2, 4, ZeroPageX),
        /* 0xB6 */ op(LDX, 2, 4, ZeroPageY),  /* 0xB7 */ UNDEFINED,
        /* 0xB8 */ op(CLV, 1, 2, Implied),    /* 0xB9 */ op(LDA, 3, 4, AbsoluteY),
        /* 0xBA */ op(TSX, 1, 2, Implied),    /* 0xBB */ UNDEFINED,
        /* 0xBC */ op(LDY, 3, 4, AbsoluteX),  /* 0xBD */ op(LDA, 3, 4, AbsoluteX),
        /* 0xBE */ op(LDX, 3, 4, AbsoluteY),  /* 0xBF */ UNDEFINED,

        /* 0xC0 */ op(CPY, 2, 2, Immediate),  /* 0xC1 */ op(CMP, 2, 6, IndirectX),
        /* 0xC2 */ UNDEFINED,                 /* 0xC3 */ UNDEFINED,
        /* 0xC4 */ op(CPY, 2, 3, ZeroPage),   /* 0xC5 */ op(CMP, 2, 3, ZeroPage),
        /* 0xC6 */ op(DEC, 2, 5, ZeroPage),   /* 0xC7 */ UNDEFINED,
        /* 0xC8 */ op(INY, 1, 2, Implied),    /* 0xC9 */ op(CMP, 2, 2, Immediate),
        /* 0xCA */ op(DEX, 1, 2, Implied),    /* 0xCB */ UNDEFINED,
        /* 0xCC */ op(CPY, 3, 4, Absolute),   /* 0xCD */ op(CMP, 3, 4, Absolute),
        /* 0xCE */ op(DEC, 3, 6, Absolute),   /* 0xCF */ UNDEFINED,

        /* 0xD0 */ op(BNE, 2, 2, Relative),   /* 0xD1 */ op(CMP, 2, 5, IndirectY),
        /* 0xD2 */ UNDEFINED,                 /* 0xD3 */ UNDEFINED,
        /* 0xD4 */ UNDEFINED,                 /* 0xD5 */ op(CMP, 2, 4, ZeroPageX),
        /* 0xD6 */ op(DEC, 2, 6, ZeroPageX),  /* 0xD7 */ UNDEFINED,
        /* 0xD8 */ op(CLD, 1, 2, Implied),    /* 0xD9 */ op(CMP, 3, 4, AbsoluteY),
        /* 0xDA */ UNDEFINED,                 /* 0xDB */ UNDEFINED,
        /* 0xDC */ UNDEFINED,                 /* 0xDD */ op(CMP, 3, 4, AbsoluteX),
        /* 0xDE */ op(DEC, 3, 7, AbsoluteX),  /* 0xDF */ UNDEFINED,

        /* 0xE0 */ op(CPX, 2, 2, Immediate),  /* 0xE1 */ op(SBC, 2, 6, IndirectX),
        /* 0xE2 */ UNDEFINED,                 /* 0xE3 */ UNDEFINED,
        /* 0xE4 */ op(CPX, 2, 3, ZeroPage),   /* 0xE5 */ op(SBC, 2, 3, ZeroPage),
        /* 0xE6 */ op(INC, 2, 5, ZeroPage),   /* 0xE7 */ UNDEFINED,
        /* 0xE8 */ op(INX, 1, 2, Implied),    /* 0xE9 */ op(SBC, 2, 2, Immediate),
        /* 0xEA */ op(NOP, 1, 2, Implied),    /* 0xEB */ UNDEFINED,
        /* 0xEC */ op(CPX, 3, 4, Absolute),   /* 0xED */ op(SBC, 3, 4, Absolute),
        /* 0xEE */ op(INC, 3, 6, Absolute),   /* 0xEF */ UNDEFINED,

        /* 0xF0 */ op(BEQ, 2, 2, Relative),   /* 0xF1 */ op(SBC, 2, 5, IndirectY),
        /* 0xF2 */ UNDEFINED,                 /* 0xF3 */ UNDEFINED,
        /* 0xF4 */ UNDEFINED,                 /* 0xF5 */ op(SBC, 2, 4, ZeroPageX),
        /* 0xF6 */ op(INC, 2, 6, ZeroPageX),  /* 0xF7 */ UNDEFINED,
        /* 0xF8 */ op(SED, 1, 2, Implied),    /* 0xF9 */ op(SBC, 3, 4, AbsoluteY),
        /* 0xFA */ UNDEFINED,                 /* 0xFB */ UNDEFINED,
        /* 0xFC */ UNDEFINED,                 /* 0xFD */ op(SBC, 3, 4, AbsoluteX),
        /* 0xFE */ op(INC, 3, 7, AbsoluteX),  /* 0xFF */ UNDEFINED,
    ]
};
