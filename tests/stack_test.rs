//! Stack instructions and stack pointer wraparound semantics.

use nes6502::{FlatMemory, MemoryBus, CPU, STACK_BASE};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu(&[0x48, 0xA9, 0x00, 0x68]); // PHA / LDA #$00 / PLA
    cpu.set_a(0x5A);

    assert_eq!(cpu.step().unwrap(), 3); // PHA
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.memory().read(STACK_BASE + 0xFD), 0x5A);

    cpu.step().unwrap(); // LDA #$00 clobbers A
    assert_eq!(cpu.a(), 0x00);

    assert_eq!(cpu.step().unwrap(), 4); // PLA
    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_pla_sets_flags() {
    let mut cpu = setup_cpu(&[0x48, 0x68]); // PHA / PLA
    cpu.set_a(0x80);

    cpu.step().unwrap();
    cpu.set_a(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_php_pushes_break_and_bit_five() {
    let mut cpu = setup_cpu(&[0x08]); // PHP
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    let pushed = cpu.memory().read(STACK_BASE + 0xFD);
    // Pushed copy always carries B (0x10) and bit 5 (0x20)
    assert_eq!(pushed & 0b0011_0000, 0b0011_0000);
    assert_eq!(pushed & 0x01, 0x01); // carry came along
    assert_eq!(pushed & 0x04, 0x04); // interrupt-disable from reset
}

#[test]
fn test_plp_restores_flags() {
    let mut cpu = setup_cpu(&[0x28]); // PLP
    // Hand-place a status byte on the stack: N, Z, C set
    cpu.memory_mut().write(STACK_BASE + 0xFE, 0b1000_0011);
    cpu.set_sp(0xFD);

    cpu.step().unwrap();

    assert!(cpu.flag_n());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_i());
}

#[test]
fn test_stack_pointer_wraps_on_overflow() {
    // Push with SP at 0x00: the write lands at 0x0100 and SP wraps to 0xFF
    let mut cpu = setup_cpu(&[0x48]); // PHA
    cpu.set_sp(0x00);
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.memory().read(STACK_BASE), 0x42);
}

#[test]
fn test_stack_pointer_wraps_on_underflow() {
    // Pull with SP at 0xFF: SP wraps to 0x00 and reads 0x0100
    let mut cpu = setup_cpu(&[0x68]); // PLA
    cpu.set_sp(0xFF);
    cpu.memory_mut().write(STACK_BASE, 0x99);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_txs_tsx() {
    let mut cpu = setup_cpu(&[0x9A, 0xBA]); // TXS / TSX
    cpu.set_x(0x80);
    cpu.set_flag_n(false);

    cpu.step().unwrap(); // TXS
    assert_eq!(cpu.sp(), 0x80);
    assert!(!cpu.flag_n()); // TXS touches no flags

    cpu.set_x(0x00);
    cpu.step().unwrap(); // TSX
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n()); // TSX does
}
