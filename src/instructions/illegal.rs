//! # Undocumented Instructions
//!
//! The opcodes outside the documented set, executed when the policy is
//! `Emulate`. Semantics follow the community reverse-engineering
//! consensus:
//!
//! - Read-modify-write combos (SLO, RLA, SRE, RRA, DCP, ISC) perform the
//!   shift/inc/dec and feed the result into the paired ALU operation.
//! - LAX and SAX combine load/store of A and X.
//! - The immediate-operand group (ANC, ALR, ARR, SBX) mixes AND with a
//!   shift or compare.
//! - The unstable group (ANE, LXA, SHA, SHX, SHY, TAS) depends on analog
//!   effects on real silicon; the conventional deterministic
//!   approximations are used here (magic constant 0xEE for ANE/LXA,
//!   high-byte-plus-one masking for the stores).
//! - JAM locks the processor until reset.

use super::{alu, shifts};
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// SLO - shift left memory, then ORA the result into A.
pub(crate) fn execute_slo<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let value = cpu.memory.read(addr);
    let shifted = shifts::asl_value(cpu, value);
    cpu.memory.write(addr, shifted);

    cpu.a |= shifted;
    let a = cpu.a;
    cpu.set_nz(a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// RLA - rotate memory left, then AND the result into A.
pub(crate) fn execute_rla<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let value = cpu.memory.read(addr);
    let rotated = shifts::rol_value(cpu, value);
    cpu.memory.write(addr, rotated);

    cpu.a &= rotated;
    let a = cpu.a;
    cpu.set_nz(a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SRE - shift memory right, then EOR the result into A.
pub(crate) fn execute_sre<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let value = cpu.memory.read(addr);
    let shifted = shifts::lsr_value(cpu, value);
    cpu.memory.write(addr, shifted);

    cpu.a ^= shifted;
    let a = cpu.a;
    cpu.set_nz(a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// RRA - rotate memory right, then ADC the result into A (the rotate's
/// carry feeds the addition).
pub(crate) fn execute_rra<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let value = cpu.memory.read(addr);
    let rotated = shifts::ror_value(cpu, value);
    cpu.memory.write(addr, rotated);

    alu::add_with_carry(cpu, rotated);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SAX - store A AND X. No flags.
pub(crate) fn execute_sax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let value = cpu.a & cpu.x;
    cpu.memory.write(addr, value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// LAX - load A and X with the same value. Flags: N, Z.
pub(crate) fn execute_lax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.a = value;
    cpu.x = value;
    cpu.set_nz(value);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// DCP - decrement memory, then compare A with the result.
pub(crate) fn execute_dcp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let result = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, result);

    let a = cpu.a;
    alu::compare(cpu, a, result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ISC - increment memory, then SBC the result from A.
pub(crate) fn execute_isc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let result = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, result);

    alu::subtract_with_borrow(cpu, result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ANC - AND immediate, then copy N into C.
pub(crate) fn execute_anc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    cpu.a &= value;
    let a = cpu.a;
    cpu.set_nz(a);
    cpu.flag_c = cpu.flag_n;

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ALR - AND immediate, then LSR the accumulator.
pub(crate) fn execute_alr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    let and = cpu.a & value;
    cpu.a = shifts::lsr_value(cpu, and);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ARR - AND immediate, then rotate the accumulator right, with ADC-like
/// flag behavior: C from bit 6 of the result, V from bit 6 XOR bit 5.
pub(crate) fn execute_arr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    let and = cpu.a & value;
    let result = (and >> 1) | ((cpu.flag_c as u8) << 7);
    cpu.a = result;
    cpu.set_nz(result);
    cpu.flag_c = result & 0x40 != 0;
    cpu.flag_v = ((result >> 6) ^ (result >> 5)) & 0x01 != 0;

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SBX - set X to (A AND X) minus the immediate, with CMP-style carry.
pub(crate) fn execute_sbx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    let and = cpu.a & cpu.x;
    cpu.flag_c = and >= value;
    cpu.x = and.wrapping_sub(value);
    let x = cpu.x;
    cpu.set_nz(x);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// LAS - AND memory with SP, store the result in A, X, and SP.
pub(crate) fn execute_las<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    let result = value & cpu.sp;
    cpu.a = result;
    cpu.x = result;
    cpu.sp = result;
    cpu.set_nz(result);

    cpu.cycles += metadata.base_cycles as u64 + page_crossed as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// ANE - unstable. Approximated as A = (A | 0xEE) AND X AND immediate.
pub(crate) fn execute_ane<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    cpu.a = (cpu.a | 0xEE) & cpu.x & value;
    let a = cpu.a;
    cpu.set_nz(a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// LXA - unstable. Approximated as A = X = (A | 0xEE) AND immediate.
pub(crate) fn execute_lxa<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    let result = (cpu.a | 0xEE) & value;
    cpu.a = result;
    cpu.x = result;
    cpu.set_nz(result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SHA - unstable store of A AND X AND (high byte of address + 1).
pub(crate) fn execute_sha<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let high = (addr >> 8) as u8;
    let value = cpu.a & cpu.x & high.wrapping_add(1);
    cpu.memory.write(addr, value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SHX - unstable store of X AND (high byte of address + 1).
pub(crate) fn execute_shx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let high = (addr >> 8) as u8;
    let value = cpu.x & high.wrapping_add(1);
    cpu.memory.write(addr, value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// SHY - unstable store of Y AND (high byte of address + 1).
pub(crate) fn execute_shy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    let high = (addr >> 8) as u8;
    let value = cpu.y & high.wrapping_add(1);
    cpu.memory.write(addr, value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// TAS - unstable: SP = A AND X, then store SP AND (high byte + 1).
pub(crate) fn execute_tas<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    cpu.sp = cpu.a & cpu.x;
    let high = (addr >> 8) as u8;
    let value = cpu.sp & high.wrapping_add(1);
    cpu.memory.write(addr, value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// JAM - lock up the processor. Only a reset recovers.
pub(crate) fn execute_jam<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.halted = true;
    // PC stays on the jammed opcode.
    cpu.cycles += metadata.base_cycles as u64;
}
