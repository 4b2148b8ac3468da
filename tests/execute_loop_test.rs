//! End-to-end execution: booting a program through the console bus,
//! frame-budget driving, and step cycle reporting.

use nes6502::{Bus, FlatMemory, MemoryBus, RomDevice, CPU, RESET_CYCLES};

#[test]
fn test_boot_program_writes_through_mirrors_and_halts() {
    // LDA #$42 / STA $10 / JAM, vectors at the top of the image
    let mut image = vec![0xEA; 0x4000];
    image[..5].copy_from_slice(&[0xA9, 0x42, 0x85, 0x10, 0x02]);
    image[0x3FFC] = 0x00; // reset -> 0xC000
    image[0x3FFD] = 0xC0;

    let mut bus = Bus::new();
    bus.attach_device(0xC000, Box::new(RomDevice::new(image)))
        .unwrap();

    let mut cpu = CPU::new(bus);

    let mut guard = 0;
    while !cpu.is_halted() {
        cpu.step().unwrap();
        guard += 1;
        assert!(guard < 10, "program should halt within a few instructions");
    }

    // The store landed in RAM and is visible through every mirror
    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert_eq!(cpu.memory().read(0x0810), 0x42);
    assert_eq!(cpu.memory().read(0x1010), 0x42);
    assert_eq!(cpu.memory().read(0x1810), 0x42);
}

#[test]
fn test_program_counter_flows_through_subroutine() {
    // main: JSR sub / LDA #$01 / JAM    sub: LDX #$07 / RTS
    let mut image = vec![0xEA; 0x4000];
    image[..6].copy_from_slice(&[0x20, 0x10, 0xC0, 0xA9, 0x01, 0x02]);
    image[0x10..0x13].copy_from_slice(&[0xA2, 0x07, 0x60]);
    image[0x3FFC] = 0x00;
    image[0x3FFD] = 0xC0;

    let mut bus = Bus::new();
    bus.attach_device(0xC000, Box::new(RomDevice::new(image)))
        .unwrap();

    let mut cpu = CPU::new(bus);
    while !cpu.is_halted() {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.x(), 0x07);
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_step_reports_cycles_consumed() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    // LDA #$01 (2) / STA $10 (3) / LDA $1234 (4)
    memory.load(0x8000, &[0xA9, 0x01, 0x85, 0x10, 0xAD, 0x34, 0x12]);

    let mut cpu = CPU::new(memory);

    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.step().unwrap(), 4);

    // The monotonic counter agrees with the per-step reports
    assert_eq!(cpu.cycles(), RESET_CYCLES + 2 + 3 + 4);
}

#[test]
fn test_run_for_cycles_meets_budget() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &[0xEA; 64]); // NOPs, 2 cycles each

    let mut cpu = CPU::new(memory);

    let consumed = cpu.run_for_cycles(10).unwrap();
    assert_eq!(consumed, 10); // 5 NOPs exactly

    // An odd budget overshoots by at most one instruction
    let consumed = cpu.run_for_cycles(3).unwrap();
    assert_eq!(consumed, 4);
}

#[test]
fn test_atomic_step_never_splits_an_instruction() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &[0xAD, 0x34, 0x12, 0xEA]); // LDA $1234 / NOP

    let mut cpu = CPU::new(memory);

    // One step, one whole instruction: PC is never inside the operand
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8003);
}
