//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI, BRK, and NOP. These manage the program counter
//! directly instead of advancing by instruction size.

use crate::cpu::IRQ_VECTOR;
use crate::{AddressingMode, MemoryBus, CPU, OPCODE_TABLE};

/// JMP - set PC to the effective address.
///
/// The indirect form reproduces the NMOS fetch bug: a pointer at $xxFF
/// reads its high byte from $xx00.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (target, _) = cpu.operand_address(metadata.addressing_mode);

    cpu.pc = target;
    cpu.cycles += metadata.base_cycles as u64;
}

/// JSR - push the return address (last byte of this instruction) and jump.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let target = cpu.read_word(cpu.pc.wrapping_add(1));

    let return_addr = cpu.pc.wrapping_add(2);
    cpu.push_word(return_addr);

    cpu.pc = target;
    cpu.cycles += metadata.base_cycles as u64;
}

/// RTS - pull the return address and resume at the byte after it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.pc = cpu.pull_word().wrapping_add(1);
    cpu.cycles += metadata.base_cycles as u64;
}

/// RTI - pull status, then the interrupted PC. Unlike RTS there is no +1.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.pull();
    cpu.set_status(status);
    cpu.pc = cpu.pull_word();

    cpu.cycles += metadata.base_cycles as u64;
}

/// BRK - software interrupt.
///
/// Pushes PC+2 (the byte after the padding byte) and the status with the
/// B bit set, sets interrupt-disable, and jumps through the IRQ vector.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let return_addr = cpu.pc.wrapping_add(2);
    cpu.push_word(return_addr);

    cpu.flag_b = true;
    let status = cpu.status() | 0b0001_0000;
    cpu.push(status);

    cpu.flag_i = true;
    cpu.pc = cpu.read_word(IRQ_VECTOR);
    cpu.cycles += metadata.base_cycles as u64;
}

/// NOP - no operation.
///
/// Covers the official implied form and the undocumented immediate,
/// zero-page, and absolute variants, which perform (and pay for) their
/// operand read, including the page-crossing penalty on the absolute,X
/// forms.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let page_crossed = match metadata.addressing_mode {
        AddressingMode::Implicit => false,
        mode => cpu.operand_value(mode).1,
    };

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
