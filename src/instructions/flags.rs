//! # Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV. Two cycles each, no other effects.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

fn finish<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// CLC - clear carry.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_c = false;
    finish(cpu, opcode);
}

/// SEC - set carry.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_c = true;
    finish(cpu, opcode);
}

/// CLI - clear interrupt disable.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_i = false;
    finish(cpu, opcode);
}

/// SEI - set interrupt disable.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_i = true;
    finish(cpu, opcode);
}

/// CLD - clear decimal mode.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_d = false;
    finish(cpu, opcode);
}

/// SED - set decimal mode. Whether the flag changes ADC/SBC behavior
/// depends on `CpuConfig::decimal_supported`.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_d = true;
    finish(cpu, opcode);
}

/// CLV - clear overflow. There is no corresponding set instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.flag_v = false;
    finish(cpu, opcode);
}
