//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS. All set N/Z from the transferred value
//! except TXS, which touches no flags.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

fn finish<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// TAX - transfer A to X.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.x = cpu.a;
    let x = cpu.x;
    cpu.set_nz(x);
    finish(cpu, opcode);
}

/// TAY - transfer A to Y.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.y = cpu.a;
    let y = cpu.y;
    cpu.set_nz(y);
    finish(cpu, opcode);
}

/// TXA - transfer X to A.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.x;
    let a = cpu.a;
    cpu.set_nz(a);
    finish(cpu, opcode);
}

/// TYA - transfer Y to A.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.a = cpu.y;
    let a = cpu.a;
    cpu.set_nz(a);
    finish(cpu, opcode);
}

/// TSX - transfer SP to X.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.x = cpu.sp;
    let x = cpu.x;
    cpu.set_nz(x);
    finish(cpu, opcode);
}

/// TXS - transfer X to SP. No flags.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    cpu.sp = cpu.x;
    finish(cpu, opcode);
}
