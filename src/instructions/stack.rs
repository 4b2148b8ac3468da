//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP. The stack lives in page one and the pointer wraps
//! within it; overflow and underflow are ordinary wraparound, never an
//! error.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// PHA - push the accumulator.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let a = cpu.a;
    cpu.push(a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// PHP - push the status register. The pushed copy always has the B bit
/// and bit 5 set, as on hardware.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.status() | 0b0011_0000;
    cpu.push(status);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// PLA - pull into the accumulator. Flags: N, Z.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.pull();
    cpu.a = value;
    cpu.set_nz(value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// PLP - pull into the status register.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.pull();
    cpu.set_status(status);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
