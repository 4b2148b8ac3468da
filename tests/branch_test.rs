//! Branch instructions: condition polarity and the taken/page-cross cycle
//! accounting.

use nes6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu_at(origin: u16, program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, origin as u8);
    memory.write(0xFFFD, (origin >> 8) as u8);
    memory.load(origin, program);
    CPU::new(memory)
}

#[test]
fn test_branch_not_taken_costs_two_cycles() {
    let mut cpu = setup_cpu_at(0x8000, &[0xF0, 0x10]); // BEQ +0x10
    cpu.set_flag_z(false);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_branch_taken_same_page_costs_three_cycles() {
    let mut cpu = setup_cpu_at(0x8000, &[0xF0, 0x10]); // BEQ +0x10
    cpu.set_flag_z(true);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 3);
    assert_eq!(cpu.pc(), 0x8012);
}

#[test]
fn test_branch_taken_page_cross_costs_four_cycles() {
    // Instruction ends at 0x80F2; +0x20 lands on the next page
    let mut cpu = setup_cpu_at(0x80F0, &[0xF0, 0x20]);
    cpu.set_flag_z(true);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 4);
    assert_eq!(cpu.pc(), 0x8112);
}

#[test]
fn test_branch_backward() {
    let mut cpu = setup_cpu_at(0x8010, &[0xD0, 0xEE]); // BNE -0x12
    cpu.set_flag_z(false);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cycles, 3); // same page
}

#[test]
fn test_branch_backward_page_cross() {
    let mut cpu = setup_cpu_at(0x8002, &[0xD0, 0xF0]); // BNE -0x10
    cpu.set_flag_z(false);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x7FF4);
    assert_eq!(cycles, 4);
}

#[test]
fn test_branch_condition_polarity() {
    // (opcode, flag setter, taken when flag is...)
    let cases: [(u8, fn(&mut CPU<FlatMemory>, bool), bool); 8] = [
        (0x90, |c, v| c.set_flag_c(v), false), // BCC
        (0xB0, |c, v| c.set_flag_c(v), true),  // BCS
        (0xF0, |c, v| c.set_flag_z(v), true),  // BEQ
        (0xD0, |c, v| c.set_flag_z(v), false), // BNE
        (0x30, |c, v| c.set_flag_n(v), true),  // BMI
        (0x10, |c, v| c.set_flag_n(v), false), // BPL
        (0x50, |c, v| c.set_flag_v(v), false), // BVC
        (0x70, |c, v| c.set_flag_v(v), true),  // BVS
    ];

    for (opcode, set_flag, taken_when) in cases {
        // Flag state that takes the branch
        let mut cpu = setup_cpu_at(0x8000, &[opcode, 0x08]);
        set_flag(&mut cpu, taken_when);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x800A, "opcode 0x{opcode:02X} should branch");

        // Opposite state falls through
        let mut cpu = setup_cpu_at(0x8000, &[opcode, 0x08]);
        set_flag(&mut cpu, !taken_when);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x8002, "opcode 0x{opcode:02X} should fall through");
    }
}

#[test]
fn test_branch_loop_runs_to_completion() {
    // LDX #$03 / DEX / BNE -3 / NOP - the loop body runs three times
    let mut cpu = setup_cpu_at(0x8000, &[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0xEA]);

    cpu.step().unwrap(); // LDX
    for _ in 0..3 {
        cpu.step().unwrap(); // DEX
        cpu.step().unwrap(); // BNE
    }

    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.pc(), 0x8005); // fell through to the NOP
}
