//! # Memory Bus
//!
//! The `MemoryBus` trait decouples the CPU from specific memory
//! implementations, following 6502 hardware behavior:
//!
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads return an open-bus value
//! - Writes to ROM/unmapped regions are ignored
//!
//! Two implementations are provided:
//!
//! - [`FlatMemory`]: 64KB of flat RAM, useful for tests and simple hosts
//! - [`Bus`]: the console memory map - 2KB internal RAM mirrored through
//!   0x1FFF, with peripheral ranges above that claimed by registered
//!   [`Device`]s and everything else reading as open bus

use rand::Rng;
use thiserror::Error;

use crate::devices::Device;

/// Size of the internal RAM in bytes.
pub const RAM_SIZE: usize = 0x0800;

/// Last address of the mirrored RAM region. The 2KB of physical RAM
/// repeats every 0x0800 bytes up to here.
pub const RAM_MIRROR_END: u16 = 0x1FFF;

/// Memory bus trait for CPU byte reads and writes.
///
/// Implementations provide the memory backend for the CPU. All CPU memory
/// traffic (RAM, ROM, I/O) goes through this abstraction; nothing else in
/// the crate touches backing storage directly.
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never fail: unmapped or invalid addresses resolve to an
    /// implementation-defined value (matching 6502 hardware, which has no
    /// bus error mechanism).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never fail: writes to read-only or unmapped addresses are a
    /// silent no-op.
    fn write(&mut self, addr: u16, value: u8);

    /// Whether any memory-mapped device is asserting the shared IRQ line.
    ///
    /// The line is level-sensitive and logically OR-ed across devices: it
    /// stays active until every device has cleared its request. The CPU
    /// polls this at each instruction boundary. Simple memories without
    /// interrupt-capable devices use the default.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Simple 64KB flat memory.
///
/// Every address is writable RAM initialized to zero. Useful for tests and
/// for hosts that lay out their own address space.
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a zero-filled 64KB memory.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`.
    ///
    /// Convenient for installing programs and vectors in one call. The
    /// copy wraps at the end of the address space.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            let dst = addr.wrapping_add(i as u16);
            self.data[dst as usize] = b;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// Power-on contents of the internal RAM.
///
/// Real hardware RAM is indeterminate at power-on, so the initial contents
/// are an explicit choice rather than an assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RamFill {
    /// Every byte zero.
    #[default]
    Zero,
    /// Every byte the given value (0xFF is a common cold-boot pattern).
    Pattern(u8),
    /// Uniformly random bytes, modeling indeterminate power-on state.
    Random,
}

/// Bus configuration error. Fatal at startup; the bus never errors once
/// constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Device placed over the mirrored RAM region.
    #[error(
        "device range 0x{base:04X}-0x{end:04X} overlaps the mirrored RAM region 0x0000-0x1FFF"
    )]
    ReservedRange {
        /// Requested base address
        base: u16,
        /// Last address of the requested range
        end: u16,
    },

    /// Device range collides with an already-registered device.
    #[error(
        "device range 0x{new_base:04X}-0x{new_end:04X} overlaps existing device at 0x{existing_base:04X}-0x{existing_end:04X}"
    )]
    RegionOverlap {
        /// Base address of the new device
        new_base: u16,
        /// Last address of the new device
        new_end: u16,
        /// Base address of the conflicting device
        existing_base: u16,
        /// Last address of the conflicting device
        existing_end: u16,
    },

    /// Device range does not fit in the 16-bit address space, or the
    /// device reports zero size.
    #[error("device at 0x{base:04X} with size {size} does not fit the address space")]
    InvalidRange {
        /// Requested base address
        base: u16,
        /// Reported device size
        size: u16,
    },
}

/// A device registered on the bus, claiming `[base, end]`.
struct DeviceMapping {
    base: u16,
    end: u16,
    device: Box<dyn Device>,
}

/// The console memory bus.
///
/// Owns the 2KB internal RAM exclusively and routes every access:
///
/// 1. `0x0000-0x1FFF`: internal RAM, mirrored every 0x0800 bytes (checked
///    first, matching hardware priority)
/// 2. Registered device ranges, in registration order
/// 3. Anything else: reads return the open-bus value, writes are dropped
///
/// Peripheral ranges (PPU-class at 0x2000-0x3FFF, APU/input-class at
/// 0x4000-0x401F, cartridge space above) are claimed at runtime with
/// [`Bus::attach_device`]; the CPU never changes when a device is added.
///
/// # Examples
///
/// ```
/// use nes6502::{Bus, MemoryBus, RomDevice};
///
/// let mut bus = Bus::new();
///
/// // Boot ROM at 0xC000-0xFFFF carrying the vectors
/// let rom = vec![0xEA; 0x4000];
/// bus.attach_device(0xC000, Box::new(RomDevice::new(rom))).unwrap();
///
/// // RAM round-trips through any mirror
/// bus.write(0x0810, 0x42);
/// assert_eq!(bus.read(0x0010), 0x42);
/// ```
pub struct Bus {
    /// 2KB internal RAM. Owned exclusively; all access goes through
    /// `read`/`write`.
    ram: Box<[u8; RAM_SIZE]>,
    devices: Vec<DeviceMapping>,
    open_bus: u8,
}

impl Bus {
    /// Creates a bus with zero-filled RAM and no devices.
    pub fn new() -> Self {
        Self::with_ram_fill(RamFill::Zero)
    }

    /// Creates a bus with the given power-on RAM contents.
    pub fn with_ram_fill(fill: RamFill) -> Self {
        let mut ram = Box::new([0u8; RAM_SIZE]);
        match fill {
            RamFill::Zero => {}
            RamFill::Pattern(value) => ram.fill(value),
            RamFill::Random => rand::thread_rng().fill(&mut ram[..]),
        }
        Self {
            ram,
            devices: Vec::new(),
            open_bus: 0x00,
        }
    }

    /// Registers a device at `base`, claiming `base..base + device.size()`.
    ///
    /// The range must lie entirely above the mirrored RAM region and must
    /// not collide with a previously registered device.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the conflicting range. The bus
    /// is unchanged on error.
    pub fn attach_device(
        &mut self,
        base: u16,
        device: Box<dyn Device>,
    ) -> Result<(), ConfigError> {
        let size = device.size();
        let last = base as u32 + size as u32 - 1;
        if size == 0 || last > 0xFFFF {
            return Err(ConfigError::InvalidRange { base, size });
        }
        let end = last as u16;

        if base <= RAM_MIRROR_END {
            return Err(ConfigError::ReservedRange { base, end });
        }

        for mapping in &self.devices {
            if base <= mapping.end && end >= mapping.base {
                return Err(ConfigError::RegionOverlap {
                    new_base: base,
                    new_end: end,
                    existing_base: mapping.base,
                    existing_end: mapping.end,
                });
            }
        }

        self.devices.push(DeviceMapping { base, end, device });
        Ok(())
    }

    /// Sets the value returned for reads that no device claims.
    ///
    /// Defaults to 0x00. Floating-bus hardware tends to read back 0xFF or
    /// the last value driven onto the bus; hosts modeling that can change
    /// it here.
    pub fn set_open_bus_value(&mut self, value: u8) {
        self.open_bus = value;
    }

    /// The current open-bus value.
    pub fn open_bus_value(&self) -> u8 {
        self.open_bus
    }

    fn mapping_at(&self, addr: u16) -> Option<&DeviceMapping> {
        self.devices.iter().find(|m| addr >= m.base && addr <= m.end)
    }

    /// The device claiming `addr`, if any.
    pub fn device_at(&self, addr: u16) -> Option<&dyn Device> {
        self.mapping_at(addr).map(|m| m.device.as_ref())
    }

    /// Mutable access to the device claiming `addr`, if any.
    pub fn device_at_mut(&mut self, addr: u16) -> Option<&mut (dyn Device + 'static)> {
        self.devices
            .iter_mut()
            .find(|m| addr >= m.base && addr <= m.end)
            .map(|m| m.device.as_mut())
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Bus {
    fn read(&self, addr: u16) -> u8 {
        if addr <= RAM_MIRROR_END {
            return self.ram[addr as usize % RAM_SIZE];
        }
        match self.mapping_at(addr) {
            Some(mapping) => mapping.device.read(addr - mapping.base),
            None => self.open_bus,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr <= RAM_MIRROR_END {
            self.ram[addr as usize % RAM_SIZE] = value;
            return;
        }
        if let Some(mapping) = self
            .devices
            .iter_mut()
            .find(|m| addr >= m.base && addr <= m.end)
        {
            mapping.device.write(addr - mapping.base, value);
        }
        // Unmapped writes are dropped, as on real hardware.
    }

    fn irq_active(&self) -> bool {
        self.devices.iter().any(|m| m.device.irq_pending())
    }
}
