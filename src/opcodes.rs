//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode metadata table, the single source of truth
//! for instruction decoding:
//!
//! - **151 documented instructions** - official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - carried with their community-documented
//!   mnemonics, addressing modes, and cycle counts, flagged `illegal` so the
//!   configured policy can decide what to do with them
//!
//! Each entry records the mnemonic, addressing mode, base cycle cost
//! (page-crossing penalties are added at address-resolution time), and the
//! instruction size in bytes.

use crate::addressing::AddressingMode;

use self::Mnemonic::*;
use crate::addressing::AddressingMode::*;

/// Instruction mnemonic.
///
/// One variant per distinct operation, official and undocumented. Dispatch
/// matches on this exhaustively, which guarantees every one of the 256
/// opcode values has a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Official instructions
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    // Undocumented instructions (stable)
    Slo, Rla, Sre, Rra, Sax, Lax, Dcp, Isc, Anc, Alr, Arr, Sbx, Las,
    // Undocumented instructions (unstable on real silicon)
    Ane, Lxa, Sha, Shx, Shy, Tas,
    // Processor lock-up
    Jam,
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC",
            Bcs => "BCS", Beq => "BEQ", Bit => "BIT", Bmi => "BMI",
            Bne => "BNE", Bpl => "BPL", Brk => "BRK", Bvc => "BVC",
            Bvs => "BVS", Clc => "CLC", Cld => "CLD", Cli => "CLI",
            Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR",
            Inc => "INC", Inx => "INX", Iny => "INY", Jmp => "JMP",
            Jsr => "JSR", Lda => "LDA", Ldx => "LDX", Ldy => "LDY",
            Lsr => "LSR", Nop => "NOP", Ora => "ORA", Pha => "PHA",
            Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC",
            Sec => "SEC", Sed => "SED", Sei => "SEI", Sta => "STA",
            Stx => "STX", Sty => "STY", Tax => "TAX", Tay => "TAY",
            Tsx => "TSX", Txa => "TXA", Txs => "TXS", Tya => "TYA",
            Slo => "SLO", Rla => "RLA", Sre => "SRE", Rra => "RRA",
            Sax => "SAX", Lax => "LAX", Dcp => "DCP", Isc => "ISC",
            Anc => "ANC", Alr => "ALR", Arr => "ARR", Sbx => "SBX",
            Las => "LAS", Ane => "ANE", Lxa => "LXA", Sha => "SHA",
            Shx => "SHX", Shy => "SHY", Tas => "TAS", Jam => "JAM",
        };
        f.write_str(name)
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Fields
///
/// - `mnemonic`: the operation this opcode performs
/// - `addressing_mode`: how operand bytes are interpreted
/// - `base_cycles`: minimum cycle cost; page-crossing penalties are added
///   dynamically for the read-type indexed/indirect modes
/// - `size_bytes`: total instruction size including the opcode (1-3)
/// - `illegal`: true for the undocumented opcodes, whose handling is an
///   explicit configuration choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// The operation this opcode performs.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether this opcode is undocumented.
    pub illegal: bool,
}

/// Table row constructor for documented opcodes.
const fn op(mnemonic: Mnemonic, mode: AddressingMode, cycles: u8, bytes: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode: mode,
        base_cycles: cycles,
        size_bytes: bytes,
        illegal: false,
    }
}

/// Table row constructor for undocumented opcodes.
const fn ill(mnemonic: Mnemonic, mode: AddressingMode, cycles: u8, bytes: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode: mode,
        base_cycles: cycles,
        size_bytes: bytes,
        illegal: true,
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// Cycle counts and modes follow the NMOS 6502 datasheet for the documented
/// opcodes and the community reverse-engineering consensus for the rest.
/// JAM rows cover the twelve opcodes that lock up the processor.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op(Brk, Implicit, 7, 1),
    op(Ora, IndirectX, 6, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Slo, IndirectX, 8, 2),
    ill(Nop, ZeroPage, 3, 2),
    op(Ora, ZeroPage, 3, 2),
    op(Asl, ZeroPage, 5, 2),
    ill(Slo, ZeroPage, 5, 2),
    op(Php, Implicit, 3, 1),
    op(Ora, Immediate, 2, 2),
    op(Asl, Accumulator, 2, 1),
    ill(Anc, Immediate, 2, 2),
    ill(Nop, Absolute, 4, 3),
    op(Ora, Absolute, 4, 3),
    op(Asl, Absolute, 6, 3),
    ill(Slo, Absolute, 6, 3),
    // 0x10
    op(Bpl, Relative, 2, 2),
    op(Ora, IndirectY, 5, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Slo, IndirectY, 8, 2),
    ill(Nop, ZeroPageX, 4, 2),
    op(Ora, ZeroPageX, 4, 2),
    op(Asl, ZeroPageX, 6, 2),
    ill(Slo, ZeroPageX, 6, 2),
    op(Clc, Implicit, 2, 1),
    op(Ora, AbsoluteY, 4, 3),
    ill(Nop, Implicit, 2, 1),
    ill(Slo, AbsoluteY, 7, 3),
    ill(Nop, AbsoluteX, 4, 3),
    op(Ora, AbsoluteX, 4, 3),
    op(Asl, AbsoluteX, 7, 3),
    ill(Slo, AbsoluteX, 7, 3),
    // 0x20
    op(Jsr, Absolute, 6, 3),
    op(And, IndirectX, 6, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Rla, IndirectX, 8, 2),
    op(Bit, ZeroPage, 3, 2),
    op(And, ZeroPage, 3, 2),
    op(Rol, ZeroPage, 5, 2),
    ill(Rla, ZeroPage, 5, 2),
    op(Plp, Implicit, 4, 1),
    op(And, Immediate, 2, 2),
    op(Rol, Accumulator, 2, 1),
    ill(Anc, Immediate, 2, 2),
    op(Bit, Absolute, 4, 3),
    op(And, Absolute, 4, 3),
    op(Rol, Absolute, 6, 3),
    ill(Rla, Absolute, 6, 3),
    // 0x30
    op(Bmi, Relative, 2, 2),
    op(And, IndirectY, 5, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Rla, IndirectY, 8, 2),
    ill(Nop, ZeroPageX, 4, 2),
    op(And, ZeroPageX, 4, 2),
    op(Rol, ZeroPageX, 6, 2),
    ill(Rla, ZeroPageX, 6, 2),
    op(Sec, Implicit, 2, 1),
    op(And, AbsoluteY, 4, 3),
    ill(Nop, Implicit, 2, 1),
    ill(Rla, AbsoluteY, 7, 3),
    ill(Nop, AbsoluteX, 4, 3),
    op(And, AbsoluteX, 4, 3),
    op(Rol, AbsoluteX, 7, 3),
    ill(Rla, AbsoluteX, 7, 3),
    // 0x40
    op(Rti, Implicit, 6, 1),
    op(Eor, IndirectX, 6, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Sre, IndirectX, 8, 2),
    ill(Nop, ZeroPage, 3, 2),
    op(Eor, ZeroPage, 3, 2),
    op(Lsr, ZeroPage, 5, 2),
    ill(Sre, ZeroPage, 5, 2),
    op(Pha, Implicit, 3, 1),
    op(Eor, Immediate, 2, 2),
    op(Lsr, Accumulator, 2, 1),
    ill(Alr, Immediate, 2, 2),
    op(Jmp, Absolute, 3, 3),
    op(Eor, Absolute, 4, 3),
    op(Lsr, Absolute, 6, 3),
    ill(Sre, Absolute, 6, 3),
    // 0x50
    op(Bvc, Relative, 2, 2),
    op(Eor, IndirectY, 5, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Sre, IndirectY, 8, 2),
    ill(Nop, ZeroPageX, 4, 2),
    op(Eor, ZeroPageX, 4, 2),
    op(Lsr, ZeroPageX, 6, 2),
    ill(Sre, ZeroPageX, 6, 2),
    op(Cli, Implicit, 2, 1),
    op(Eor, AbsoluteY, 4, 3),
    ill(Nop, Implicit, 2, 1),
    ill(Sre, AbsoluteY, 7, 3),
    ill(Nop, AbsoluteX, 4, 3),
    op(Eor, AbsoluteX, 4, 3),
    op(Lsr, AbsoluteX, 7, 3),
    ill(Sre, AbsoluteX, 7, 3),
    // 0x60
    op(Rts, Implicit, 6, 1),
    op(Adc, IndirectX, 6, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Rra, IndirectX, 8, 2),
    ill(Nop, ZeroPage, 3, 2),
    op(Adc, ZeroPage, 3, 2),
    op(Ror, ZeroPage, 5, 2),
    ill(Rra, ZeroPage, 5, 2),
    op(Pla, Implicit, 4, 1),
    op(Adc, Immediate, 2, 2),
    op(Ror, Accumulator, 2, 1),
    ill(Arr, Immediate, 2, 2),
    op(Jmp, Indirect, 5, 3),
    op(Adc, Absolute, 4, 3),
    op(Ror, Absolute, 6, 3),
    ill(Rra, Absolute, 6, 3),
    // 0x70
    op(Bvs, Relative, 2, 2),
    op(Adc, IndirectY, 5, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Rra, IndirectY, 8, 2),
    ill(Nop, ZeroPageX, 4, 2),
    op(Adc, ZeroPageX, 4, 2),
    op(Ror, ZeroPageX, 6, 2),
    ill(Rra, ZeroPageX, 6, 2),
    op(Sei, Implicit, 2, 1),
    op(Adc, AbsoluteY, 4, 3),
    ill(Nop, Implicit, 2, 1),
    ill(Rra, AbsoluteY, 7, 3),
    ill(Nop, AbsoluteX, 4, 3),
    op(Adc, AbsoluteX, 4, 3),
    op(Ror, AbsoluteX, 7, 3),
    ill(Rra, AbsoluteX, 7, 3),
    // 0x80
    ill(Nop, Immediate, 2, 2),
    op(Sta, IndirectX, 6, 2),
    ill(Nop, Immediate, 2, 2),
    ill(Sax, IndirectX, 6, 2),
    op(Sty, ZeroPage, 3, 2),
    op(Sta, ZeroPage, 3, 2),
    op(Stx, ZeroPage, 3, 2),
    ill(Sax, ZeroPage, 3, 2),
    op(Dey, Implicit, 2, 1),
    ill(Nop, Immediate, 2, 2),
    op(Txa, Implicit, 2, 1),
    ill(Ane, Immediate, 2, 2),
    op(Sty, Absolute, 4, 3),
    op(Sta, Absolute, 4, 3),
    op(Stx, Absolute, 4, 3),
    ill(Sax, Absolute, 4, 3),
    // 0x90
    op(Bcc, Relative, 2, 2),
    op(Sta, IndirectY, 6, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Sha, IndirectY, 6, 2),
    op(Sty, ZeroPageX, 4, 2),
    op(Sta, ZeroPageX, 4, 2),
    op(Stx, ZeroPageY, 4, 2),
    ill(Sax, ZeroPageY, 4, 2),
    op(Tya, Implicit, 2, 1),
    op(Sta, AbsoluteY, 5, 3),
    op(Txs, Implicit, 2, 1),
    ill(Tas, AbsoluteY, 5, 3),
    ill(Shy, AbsoluteX, 5, 3),
    op(Sta, AbsoluteX, 5, 3),
    ill(Shx, AbsoluteY, 5, 3),
    ill(Sha, AbsoluteY, 5, 3),
    // 0xA0
    op(Ldy, Immediate, 2, 2),
    op(Lda, IndirectX, 6, 2),
    op(Ldx, Immediate, 2, 2),
    ill(Lax, IndirectX, 6, 2),
    op(Ldy, ZeroPage, 3, 2),
    op(Lda, ZeroPage, 3, 2),
    op(Ldx, ZeroPage, 3, 2),
    ill(Lax, ZeroPage, 3, 2),
    op(Tay, Implicit, 2, 1),
    op(Lda, Immediate, 2, 2),
    op(Tax, Implicit, 2, 1),
    ill(Lxa, Immediate, 2, 2),
    op(Ldy, Absolute, 4, 3),
    op(Lda, Absolute, 4, 3),
    op(Ldx, Absolute, 4, 3),
    ill(Lax, Absolute, 4, 3),
    // 0xB0
    op(Bcs, Relative, 2, 2),
    op(Lda, IndirectY, 5, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Lax, IndirectY, 5, 2),
    op(Ldy, ZeroPageX, 4, 2),
    op(Lda, ZeroPageX, 4, 2),
    op(Ldx, ZeroPageY, 4, 2),
    ill(Lax, ZeroPageY, 4, 2),
    op(Clv, Implicit, 2, 1),
    op(Lda, AbsoluteY, 4, 3),
    op(Tsx, Implicit, 2, 1),
    ill(Las, AbsoluteY, 4, 3),
    op(Ldy, AbsoluteX, 4, 3),
    op(Lda, AbsoluteX, 4, 3),
    op(Ldx, AbsoluteY, 4, 3),
    ill(Lax, AbsoluteY, 4, 3),
    // 0xC0
    op(Cpy, Immediate, 2, 2),
    op(Cmp, IndirectX, 6, 2),
    ill(Nop, Immediate, 2, 2),
    ill(Dcp, IndirectX, 8, 2),
    op(Cpy, ZeroPage, 3, 2),
    op(Cmp, ZeroPage, 3, 2),
    op(Dec, ZeroPage, 5, 2),
    ill(Dcp, ZeroPage, 5, 2),
    op(Iny, Implicit, 2, 1),
    op(Cmp, Immediate, 2, 2),
    op(Dex, Implicit, 2, 1),
    ill(Sbx, Immediate, 2, 2),
    op(Cpy, Absolute, 4, 3),
    op(Cmp, Absolute, 4, 3),
    op(Dec, Absolute, 6, 3),
    ill(Dcp, Absolute, 6, 3),
    // 0xD0
    op(Bne, Relative, 2, 2),
    op(Cmp, IndirectY, 5, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Dcp, IndirectY, 8, 2),
    ill(Nop, ZeroPageX, 4, 2),
    op(Cmp, ZeroPageX, 4, 2),
    op(Dec, ZeroPageX, 6, 2),
    ill(Dcp, ZeroPageX, 6, 2),
    op(Cld, Implicit, 2, 1),
    op(Cmp, AbsoluteY, 4, 3),
    ill(Nop, Implicit, 2, 1),
    ill(Dcp, AbsoluteY, 7, 3),
    ill(Nop, AbsoluteX, 4, 3),
    op(Cmp, AbsoluteX, 4, 3),
    op(Dec, AbsoluteX, 7, 3),
    ill(Dcp, AbsoluteX, 7, 3),
    // 0xE0
    op(Cpx, Immediate, 2, 2),
    op(Sbc, IndirectX, 6, 2),
    ill(Nop, Immediate, 2, 2),
    ill(Isc, IndirectX, 8, 2),
    op(Cpx, ZeroPage, 3, 2),
    op(Sbc, ZeroPage, 3, 2),
    op(Inc, ZeroPage, 5, 2),
    ill(Isc, ZeroPage, 5, 2),
    op(Inx, Implicit, 2, 1),
    op(Sbc, Immediate, 2, 2),
    op(Nop, Implicit, 2, 1),
    ill(Sbc, Immediate, 2, 2),
    op(Cpx, Absolute, 4, 3),
    op(Sbc, Absolute, 4, 3),
    op(Inc, Absolute, 6, 3),
    ill(Isc, Absolute, 6, 3),
    // 0xF0
    op(Beq, Relative, 2, 2),
    op(Sbc, IndirectY, 5, 2),
    ill(Jam, Implicit, 2, 1),
    ill(Isc, IndirectY, 8, 2),
    ill(Nop, ZeroPageX, 4, 2),
    op(Sbc, ZeroPageX, 4, 2),
    op(Inc, ZeroPageX, 6, 2),
    ill(Isc, ZeroPageX, 6, 2),
    op(Sed, Implicit, 2, 1),
    op(Sbc, AbsoluteY, 4, 3),
    ill(Nop, Implicit, 2, 1),
    ill(Isc, AbsoluteY, 7, 3),
    ill(Nop, AbsoluteX, 4, 3),
    op(Sbc, AbsoluteX, 4, 3),
    op(Inc, AbsoluteX, 7, 3),
    ill(Isc, AbsoluteX, 7, 3),
];
