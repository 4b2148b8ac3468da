//! # NES-class 6502 CPU Emulator Core
//!
//! A cycle-accurate emulation core for the NMOS 6502 as found in the
//! NES-class consoles: the CPU itself, and the memory bus that owns the
//! 2KB internal RAM (mirrored through 0x1FFF) and routes every access to
//! RAM, registered peripheral devices, or the open bus.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::{Bus, MemoryBus, RomDevice, CPU};
//!
//! // Boot image at 0xC000-0xFFFF: LDA #$42 / STA $10, vectors at the top
//! let mut image = vec![0xEA; 0x4000];
//! image[..4].copy_from_slice(&[0xA9, 0x42, 0x85, 0x10]);
//! image[0x3FFC] = 0x00; // reset vector -> 0xC000
//! image[0x3FFD] = 0xC0;
//!
//! let mut bus = Bus::new();
//! bus.attach_device(0xC000, Box::new(RomDevice::new(image))).unwrap();
//!
//! let mut cpu = CPU::new(bus);
//! cpu.step().unwrap(); // LDA #$42
//! cpu.step().unwrap(); // STA $10
//!
//! assert_eq!(cpu.memory().read(0x0010), 0x42);
//! assert_eq!(cpu.memory().read(0x0810), 0x42); // RAM mirror
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: the CPU is generic over the [`MemoryBus`] trait;
//!   peripherals attach to the [`Bus`] through the [`Device`] trait
//!   without any CPU changes
//! - **Cycle accuracy**: per-instruction cycle counts including
//!   page-crossing and branch penalties, 7-cycle reset and interrupt
//!   sequences
//! - **Table-driven decode**: all 256 opcode values described in a single
//!   [`OPCODE_TABLE`], dispatched through an exhaustive match
//! - **Explicit policy**: undocumented opcodes are emulated, skipped, or
//!   fatal per [`IllegalOpcodePolicy`] - a stated configuration choice,
//!   never a silent one
//!
//! ## Modules
//!
//! - `cpu` - CPU state, execution, interrupts, configuration
//! - `bus` - `MemoryBus` trait, the console [`Bus`], `FlatMemory`
//! - `devices` - the `Device` trait plus RAM/ROM implementations
//! - `opcodes` - the opcode metadata table
//! - `addressing` - addressing mode definitions

use thiserror::Error;

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod opcodes;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export the public API
pub use addressing::AddressingMode;
pub use bus::{Bus, ConfigError, FlatMemory, MemoryBus, RamFill, RAM_MIRROR_END, RAM_SIZE};
pub use cpu::{
    CpuConfig, IllegalOpcodePolicy, CPU, INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR, RESET_CYCLES,
    RESET_VECTOR, STACK_BASE,
};
pub use devices::{Device, RamDevice, RomDevice};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
///
/// Execution is infallible by design except for one case: decoding an
/// undocumented opcode while the policy is
/// [`IllegalOpcodePolicy::FailFast`]. Everything else the hardware would
/// tolerate (stack wraparound, arithmetic overflow, unmapped accesses) is
/// defined behavior, not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// An undocumented opcode was decoded under the fail-fast policy.
    /// Reports the opcode byte and the program counter it was fetched
    /// from.
    #[error("illegal opcode 0x{opcode:02X} at PC 0x{pc:04X}")]
    IllegalOpcode {
        /// The offending opcode byte
        opcode: u8,
        /// Address the opcode was fetched from
        pc: u16,
    },
}
