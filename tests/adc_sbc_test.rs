//! Flag truth tables for the arithmetic instructions: ADC, SBC, the
//! compares, and BIT, plus decimal mode behind its configuration switch.

use nes6502::{CpuConfig, FlatMemory, MemoryBus, CPU};

/// CPU with the reset vector at 0x8000 and `program` installed there.
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::new(memory)
}

fn setup_decimal_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    CPU::with_config(
        memory,
        CpuConfig {
            decimal_supported: true,
            ..CpuConfig::default()
        },
    )
}

// ========== ADC ==========

#[test]
fn test_adc_basic() {
    let mut cpu = setup_cpu(&[0x69, 0x05]); // ADC #$05
    cpu.set_a(0x10);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x15);
    assert_eq!(cycles, 2);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_uses_carry_in() {
    let mut cpu = setup_cpu(&[0x69, 0x05]);
    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x16);
}

#[test]
fn test_adc_carry_out_and_zero() {
    let mut cpu = setup_cpu(&[0x69, 0xFF]);
    cpu.set_a(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v()); // 1 + (-1) has no signed overflow
}

#[test]
fn test_adc_negative_from_bit_seven() {
    let mut cpu = setup_cpu(&[0x69, 0x80]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_overflow_positive_operands() {
    // 0x50 + 0x50 = 0xA0: two positives yielding a negative
    let mut cpu = setup_cpu(&[0x69, 0x50]);
    cpu.set_a(0x50);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_overflow_negative_operands() {
    // 0xD0 + 0x90 = 0x160: two negatives yielding a positive
    let mut cpu = setup_cpu(&[0x69, 0x90]);
    cpu.set_a(0xD0);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x60);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let mut cpu = setup_cpu(&[0x69, 0xFF]); // -1
    cpu.set_a(0x7F); // +127

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7E);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_c());
}

// ========== SBC ==========

#[test]
fn test_sbc_basic() {
    let mut cpu = setup_cpu(&[0xE9, 0x10]); // SBC #$10
    cpu.set_a(0x50);
    cpu.set_flag_c(true); // no borrow

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_c()); // no borrow occurred
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_applies_borrow() {
    let mut cpu = setup_cpu(&[0xE9, 0x10]);
    cpu.set_a(0x50);
    // carry clear = borrow pending

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x3F);
}

#[test]
fn test_sbc_underflow_wraps_negative() {
    let mut cpu = setup_cpu(&[0xE9, 0x01]);
    cpu.set_a(0x00);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c()); // borrow occurred
    assert!(cpu.flag_n()); // bit 7 of the wrapped result
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_zero_result() {
    let mut cpu = setup_cpu(&[0xE9, 0x42]);
    cpu.set_a(0x42);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_signed_overflow() {
    // 0x50 - 0xB0: positive minus negative overflowing to negative
    let mut cpu = setup_cpu(&[0xE9, 0xB0]);
    cpu.set_a(0x50);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
}

// ========== Compares ==========

#[test]
fn test_cmp_equal_sets_zero_and_carry() {
    let mut cpu = setup_cpu(&[0xC9, 0x42]); // CMP #$42
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42); // compare never stores
}

#[test]
fn test_cmp_less_than_sets_negative_from_difference() {
    let mut cpu = setup_cpu(&[0xC9, 0x50]);
    cpu.set_a(0x40); // 0x40 - 0x50 wraps to 0xF0

    cpu.step().unwrap();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_cmp_greater_than_sets_carry() {
    let mut cpu = setup_cpu(&[0xC9, 0x10]);
    cpu.set_a(0x40);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_cpx_cpy() {
    let mut cpu = setup_cpu(&[0xE0, 0x10, 0xC0, 0x20]); // CPX #$10 / CPY #$20
    cpu.set_x(0x10);
    cpu.set_y(0x10);

    cpu.step().unwrap();
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());

    cpu.step().unwrap();
    assert!(!cpu.flag_c()); // 0x10 < 0x20
    assert!(cpu.flag_n());
}

// ========== BIT ==========

#[test]
fn test_bit_copies_high_bits_and_tests_mask() {
    let mut cpu = setup_cpu(&[0x24, 0x10]); // BIT $10
    cpu.memory_mut().write(0x0010, 0xC0); // bits 7 and 6 set
    cpu.set_a(0x3F); // no overlap with 0xC0

    cpu.step().unwrap();

    assert!(cpu.flag_z()); // A & M == 0
    assert!(cpu.flag_n()); // bit 7 of M
    assert!(cpu.flag_v()); // bit 6 of M
    assert_eq!(cpu.a(), 0x3F); // A untouched
}

// ========== Decimal mode ==========

#[test]
fn test_adc_decimal_when_supported() {
    let mut cpu = setup_decimal_cpu(&[0xF8, 0x69, 0x01]); // SED / ADC #$01
    cpu.set_a(0x09);

    cpu.step().unwrap(); // SED
    cpu.step().unwrap(); // ADC

    assert_eq!(cpu.a(), 0x10); // BCD 9 + 1
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_carry_chain() {
    let mut cpu = setup_decimal_cpu(&[0xF8, 0x69, 0x46]);
    cpu.set_a(0x58);
    cpu.set_flag_c(true);

    cpu.step().unwrap();
    cpu.step().unwrap();

    // BCD 58 + 46 + 1 = 105
    assert_eq!(cpu.a(), 0x05);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_when_supported() {
    let mut cpu = setup_decimal_cpu(&[0xF8, 0xE9, 0x12]);
    cpu.set_a(0x46);
    cpu.set_flag_c(true);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x34); // BCD 46 - 12
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_borrow_across_nibbles() {
    let mut cpu = setup_decimal_cpu(&[0xF8, 0xE9, 0x13]);
    cpu.set_a(0x40);
    cpu.set_flag_c(true);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x27); // BCD 40 - 13
}

#[test]
fn test_decimal_flag_ignored_by_default() {
    // Default config is the 2A03: D is bookkeeping only
    let mut cpu = setup_cpu(&[0xF8, 0x69, 0x01]); // SED / ADC #$01
    cpu.set_a(0x09);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert!(cpu.flag_d());
    assert_eq!(cpu.a(), 0x0A); // plain binary result
}
