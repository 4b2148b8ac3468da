//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502. The mode attached to an opcode
//! determines how many operand bytes follow it, how the effective address
//! is formed, and whether the access can incur a page-crossing penalty.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction (CLC, RTS, NOP).
    Implicit,

    /// Operates directly on the accumulator register (ASL A, ROR A).
    Accumulator,

    /// 8-bit constant embedded in the instruction (LDA #$10).
    Immediate,

    /// 8-bit address into the zero page (LDA $80 reads 0x0080).
    ZeroPage,

    /// Zero page address plus X, wrapping within the zero page.
    ZeroPageX,

    /// Zero page address plus Y, wrapping within the zero page (LDX/STX only).
    ZeroPageY,

    /// Signed 8-bit offset from the address after the instruction, used by
    /// branches. Taken branches cost one extra cycle, two if the target is
    /// on a different page.
    Relative,

    /// Full 16-bit little-endian address (JMP $1234).
    Absolute,

    /// 16-bit address plus X. Read accesses crossing a page boundary cost
    /// one extra cycle.
    AbsoluteX,

    /// 16-bit address plus Y. Read accesses crossing a page boundary cost
    /// one extra cycle.
    AbsoluteY,

    /// Jump through a 16-bit pointer (JMP ($FFFC)). The NMOS parts never
    /// carry into the pointer's high byte: a pointer at $xxFF fetches its
    /// high byte from $xx00.
    Indirect,

    /// Indexed indirect: pointer is at (operand + X) in the zero page,
    /// wrapping within the page (LDA ($40,X)).
    IndirectX,

    /// Indirect indexed: 16-bit base read from the zero-page operand, then
    /// Y added (LDA ($40),Y). Read accesses crossing a page boundary cost
    /// one extra cycle.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode for this mode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
