//! # CPU State and Execution
//!
//! The CPU struct holds the 6502 processor state and drives the
//! fetch-decode-execute loop. It is generic over the memory implementation
//! via the [`MemoryBus`] trait and owns its bus, which statically enforces
//! exclusive access.
//!
//! ## Execution Model
//!
//! - [`CPU::step`] executes exactly one instruction (or services one
//!   pending interrupt) and returns the cycles it consumed. A step is
//!   atomic: no mid-instruction state is observable from outside.
//! - [`CPU::run_for_cycles`] steps until a cycle budget is exhausted,
//!   useful for frame-locked hosts.
//! - [`CPU::reset`] simulates the hardware reset line and may be called at
//!   any time.
//!
//! Interrupt requests ([`CPU::irq`], [`CPU::nmi`], and the bus-level
//! [`MemoryBus::irq_active`] line) are honored only at instruction
//! boundaries, at the start of the next `step()`.

use crate::instructions::{alu, branches, control, flags, illegal, inc_dec, load_store, shifts, stack, transfer};
use crate::opcodes::Mnemonic;
use crate::{AddressingMode, ExecutionError, MemoryBus, OPCODE_TABLE};

/// NMI vector location (little-endian pointer at 0xFFFA/0xFFFB).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector location (little-endian pointer at 0xFFFC/0xFFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location (little-endian pointer at 0xFFFE/0xFFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the stack page. The stack pointer is an offset into
/// 0x0100-0x01FF and grows downward.
pub const STACK_BASE: u16 = 0x0100;

/// Cycles consumed by the reset sequence.
pub const RESET_CYCLES: u64 = 7;

/// Cycles consumed by servicing an IRQ or NMI.
pub const INTERRUPT_CYCLES: u64 = 7;

/// What to do when an undocumented opcode is decoded.
///
/// The 6502 has 105 opcode values outside the documented set. Their
/// behavior is well understood from community reverse engineering, but
/// whether to reproduce it is an explicit choice, not a default silently
/// taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalOpcodePolicy {
    /// Execute the community-documented semantics, including the JAM
    /// opcodes halting the CPU. This is the default: software for the
    /// target machine relies on the stable undocumented opcodes.
    #[default]
    Emulate,

    /// Treat every undocumented opcode as a single-cycle no-op that
    /// advances PC past the opcode byte.
    NoOp,

    /// Fail fast: `step()` returns [`ExecutionError::IllegalOpcode`]
    /// carrying the offending opcode and program counter. PC does not
    /// advance.
    FailFast,
}

/// CPU behavior configuration.
///
/// Plain switches with a documented [`Default`]; construct one and pass it
/// to [`CPU::with_config`] to deviate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    /// Policy for the undocumented opcodes. Default: `Emulate`.
    pub illegal_opcodes: IllegalOpcodePolicy,

    /// Whether the decimal flag enables BCD arithmetic in ADC/SBC.
    ///
    /// Default `false`, matching the console's 2A03 core, where the
    /// decimal circuitry is disconnected and the D flag is bookkeeping
    /// only. Set to `true` for a full 6502.
    pub decimal_supported: bool,
}

/// 6502 CPU state and execution context.
///
/// Contains all processor state: registers, flags, program counter, stack
/// pointer, and the monotonically increasing cycle counter. Generic over
/// the memory implementation via the [`MemoryBus`] trait.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // reset vector low
/// memory.write(0xFFFD, 0x80); // reset vector high -> PC = 0x8000
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // interrupt disable set at power-on
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of the next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (offset into the stack page; wraps 0x00-0xFF)
    pub(crate) sp: u8,

    /// Negative flag (bit 7 of the last result)
    pub(crate) flag_n: bool,

    /// Overflow flag (signed overflow on add/subtract)
    pub(crate) flag_v: bool,

    /// Break flag (set by BRK; only meaningful on pushed status copies)
    pub(crate) flag_b: bool,

    /// Decimal mode flag
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (masks IRQ while set)
    pub(crate) flag_i: bool,

    /// Zero flag
    pub(crate) flag_z: bool,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed, including reset and interrupt sequences
    pub(crate) cycles: u64,

    /// Terminal lock-up state entered by JAM opcodes; cleared by reset
    pub(crate) halted: bool,

    /// Host-requested IRQ, latched until serviced
    irq_line: bool,

    /// Edge-latched NMI request, cleared when serviced
    nmi_pending: bool,

    config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with the default [`CpuConfig`] and performs the
    /// power-on reset (PC loaded from the reset vector at 0xFFFC/0xFFFD).
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU with an explicit configuration and performs the
    /// power-on reset.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            halted: false,
            irq_line: false,
            nmi_pending: false,
            config,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Simulates the hardware reset line.
    ///
    /// Registers are cleared, the stack pointer set to 0xFD, the status
    /// register to interrupt-disable only, and PC loaded little-endian
    /// from the reset vector. Any halt state and pending interrupt
    /// requests are discarded. Consumes [`RESET_CYCLES`]. Idempotent -
    /// callable at any time.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = false;
        self.flag_c = false;
        self.halted = false;
        self.irq_line = false;
        self.nmi_pending = false;
        self.pc = self.read_word(RESET_VECTOR);
        self.cycles += RESET_CYCLES;
    }

    /// Executes one unit of work and returns the cycles it consumed.
    ///
    /// At the instruction boundary a pending NMI is serviced first, then a
    /// pending IRQ if the interrupt-disable flag is clear; otherwise one
    /// instruction runs from fetch through writeback. The call is atomic -
    /// it never returns with an instruction partially executed.
    ///
    /// While halted (a JAM opcode under the emulate policy), each call
    /// consumes a single cycle and changes nothing; only [`CPU::reset`]
    /// leaves the halt state.
    ///
    /// # Errors
    ///
    /// `ExecutionError::IllegalOpcode` when an undocumented opcode is
    /// decoded under [`IllegalOpcodePolicy::FailFast`]. The CPU state is
    /// unchanged in that case.
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        if self.halted {
            self.cycles += 1;
            return Ok(1);
        }

        let start = self.cycles;

        if self.nmi_pending {
            self.nmi_pending = false;
            self.service_interrupt(NMI_VECTOR);
            return Ok((self.cycles - start) as u32);
        }
        if (self.irq_line || self.memory.irq_active()) && !self.flag_i {
            self.irq_line = false;
            self.service_interrupt(IRQ_VECTOR);
            return Ok((self.cycles - start) as u32);
        }

        let opcode = self.memory.read(self.pc);
        self.execute(opcode)?;
        Ok((self.cycles - start) as u32)
    }

    /// Runs the CPU until at least `cycle_budget` cycles have elapsed.
    ///
    /// Returns the cycles actually consumed, which may slightly exceed the
    /// budget due to instruction granularity. Useful for frame-locked
    /// hosts (e.g. 29780 CPU cycles per NTSC frame).
    ///
    /// # Errors
    ///
    /// Propagates the first [`ExecutionError`] from [`CPU::step`].
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Requests a maskable interrupt.
    ///
    /// The request is latched and serviced at the start of the next
    /// `step()` whose interrupt-disable flag is clear. Memory-mapped
    /// devices should instead assert [`MemoryBus::irq_active`], which the
    /// CPU samples at every boundary (level-sensitive semantics).
    pub fn irq(&mut self) {
        self.irq_line = true;
    }

    /// Requests a non-maskable interrupt.
    ///
    /// Serviced at the start of the next `step()`, before any pending IRQ
    /// and regardless of the interrupt-disable flag.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Whether the CPU is locked up by a JAM opcode.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The active configuration.
    pub fn config(&self) -> CpuConfig {
        self.config
    }

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns the memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Pushes PC and status, sets the interrupt-disable flag, and jumps
    /// through `vector`. Shared by IRQ and NMI servicing; BRK runs the
    /// same sequence from its handler with the B bit set.
    fn service_interrupt(&mut self, vector: u16) {
        self.flag_b = false;
        self.push_word(self.pc);
        // Hardware interrupts push the status byte with B clear.
        let status = self.status() & !0b0001_0000;
        self.push(status);
        self.flag_i = true;
        self.pc = self.read_word(vector);
        self.cycles += INTERRUPT_CYCLES;
    }

    /// Decodes and executes the instruction at PC.
    fn execute(&mut self, opcode: u8) -> Result<(), ExecutionError> {
        let metadata = &OPCODE_TABLE[opcode as usize];

        if metadata.illegal {
            match self.config.illegal_opcodes {
                IllegalOpcodePolicy::FailFast => {
                    return Err(ExecutionError::IllegalOpcode {
                        opcode,
                        pc: self.pc,
                    });
                }
                IllegalOpcodePolicy::NoOp => {
                    self.pc = self.pc.wrapping_add(1);
                    self.cycles += 1;
                    return Ok(());
                }
                IllegalOpcodePolicy::Emulate => {}
            }
        }

        match metadata.mnemonic {
            // Arithmetic and logic
            Mnemonic::Adc => alu::execute_adc(self, opcode),
            Mnemonic::Sbc => alu::execute_sbc(self, opcode),
            Mnemonic::And => alu::execute_and(self, opcode),
            Mnemonic::Ora => alu::execute_ora(self, opcode),
            Mnemonic::Eor => alu::execute_eor(self, opcode),
            Mnemonic::Cmp => alu::execute_cmp(self, opcode),
            Mnemonic::Cpx => alu::execute_cpx(self, opcode),
            Mnemonic::Cpy => alu::execute_cpy(self, opcode),
            Mnemonic::Bit => alu::execute_bit(self, opcode),

            // Shifts and rotates
            Mnemonic::Asl => shifts::execute_asl(self, opcode),
            Mnemonic::Lsr => shifts::execute_lsr(self, opcode),
            Mnemonic::Rol => shifts::execute_rol(self, opcode),
            Mnemonic::Ror => shifts::execute_ror(self, opcode),

            // Loads and stores
            Mnemonic::Lda => load_store::execute_lda(self, opcode),
            Mnemonic::Ldx => load_store::execute_ldx(self, opcode),
            Mnemonic::Ldy => load_store::execute_ldy(self, opcode),
            Mnemonic::Sta => load_store::execute_sta(self, opcode),
            Mnemonic::Stx => load_store::execute_stx(self, opcode),
            Mnemonic::Sty => load_store::execute_sty(self, opcode),

            // Increments and decrements
            Mnemonic::Inc => inc_dec::execute_inc(self, opcode),
            Mnemonic::Dec => inc_dec::execute_dec(self, opcode),
            Mnemonic::Inx => inc_dec::execute_inx(self, opcode),
            Mnemonic::Iny => inc_dec::execute_iny(self, opcode),
            Mnemonic::Dex => inc_dec::execute_dex(self, opcode),
            Mnemonic::Dey => inc_dec::execute_dey(self, opcode),

            // Control flow
            Mnemonic::Jmp => control::execute_jmp(self, opcode),
            Mnemonic::Jsr => control::execute_jsr(self, opcode),
            Mnemonic::Rts => control::execute_rts(self, opcode),
            Mnemonic::Rti => control::execute_rti(self, opcode),
            Mnemonic::Brk => control::execute_brk(self, opcode),
            Mnemonic::Nop => control::execute_nop(self, opcode),

            // Branches
            Mnemonic::Bcc => branches::execute_bcc(self, opcode),
            Mnemonic::Bcs => branches::execute_bcs(self, opcode),
            Mnemonic::Beq => branches::execute_beq(self, opcode),
            Mnemonic::Bne => branches::execute_bne(self, opcode),
            Mnemonic::Bmi => branches::execute_bmi(self, opcode),
            Mnemonic::Bpl => branches::execute_bpl(self, opcode),
            Mnemonic::Bvc => branches::execute_bvc(self, opcode),
            Mnemonic::Bvs => branches::execute_bvs(self, opcode),

            // Stack
            Mnemonic::Pha => stack::execute_pha(self, opcode),
            Mnemonic::Php => stack::execute_php(self, opcode),
            Mnemonic::Pla => stack::execute_pla(self, opcode),
            Mnemonic::Plp => stack::execute_plp(self, opcode),

            // Flag manipulation
            Mnemonic::Clc => flags::execute_clc(self, opcode),
            Mnemonic::Sec => flags::execute_sec(self, opcode),
            Mnemonic::Cli => flags::execute_cli(self, opcode),
            Mnemonic::Sei => flags::execute_sei(self, opcode),
            Mnemonic::Cld => flags::execute_cld(self, opcode),
            Mnemonic::Sed => flags::execute_sed(self, opcode),
            Mnemonic::Clv => flags::execute_clv(self, opcode),

            // Register transfers
            Mnemonic::Tax => transfer::execute_tax(self, opcode),
            Mnemonic::Tay => transfer::execute_tay(self, opcode),
            Mnemonic::Txa => transfer::execute_txa(self, opcode),
            Mnemonic::Tya => transfer::execute_tya(self, opcode),
            Mnemonic::Tsx => transfer::execute_tsx(self, opcode),
            Mnemonic::Txs => transfer::execute_txs(self, opcode),

            // Undocumented opcodes (emulate policy)
            Mnemonic::Slo => illegal::execute_slo(self, opcode),
            Mnemonic::Rla => illegal::execute_rla(self, opcode),
            Mnemonic::Sre => illegal::execute_sre(self, opcode),
            Mnemonic::Rra => illegal::execute_rra(self, opcode),
            Mnemonic::Sax => illegal::execute_sax(self, opcode),
            Mnemonic::Lax => illegal::execute_lax(self, opcode),
            Mnemonic::Dcp => illegal::execute_dcp(self, opcode),
            Mnemonic::Isc => illegal::execute_isc(self, opcode),
            Mnemonic::Anc => illegal::execute_anc(self, opcode),
            Mnemonic::Alr => illegal::execute_alr(self, opcode),
            Mnemonic::Arr => illegal::execute_arr(self, opcode),
            Mnemonic::Sbx => illegal::execute_sbx(self, opcode),
            Mnemonic::Las => illegal::execute_las(self, opcode),
            Mnemonic::Ane => illegal::execute_ane(self, opcode),
            Mnemonic::Lxa => illegal::execute_lxa(self, opcode),
            Mnemonic::Sha => illegal::execute_sha(self, opcode),
            Mnemonic::Shx => illegal::execute_shx(self, opcode),
            Mnemonic::Shy => illegal::execute_shy(self, opcode),
            Mnemonic::Tas => illegal::execute_tas(self, opcode),
            Mnemonic::Jam => illegal::execute_jam(self, opcode),
        }

        Ok(())
    }

    // ========== Operand Resolution ==========

    /// Effective address for a memory-operand addressing mode, plus
    /// whether forming it crossed a page boundary.
    ///
    /// The crossing flag is meaningful for the read-type indexed and
    /// indirect modes; store and read-modify-write instructions have the
    /// worst case baked into their base cycle counts and ignore it.
    pub(crate) fn operand_address(&self, mode: AddressingMode) -> (u16, bool) {
        let operand = self.pc.wrapping_add(1);
        match mode {
            AddressingMode::ZeroPage => (self.memory.read(operand) as u16, false),
            AddressingMode::ZeroPageX => {
                (self.memory.read(operand).wrapping_add(self.x) as u16, false)
            }
            AddressingMode::ZeroPageY => {
                (self.memory.read(operand).wrapping_add(self.y) as u16, false)
            }
            AddressingMode::Absolute => (self.read_word(operand), false),
            AddressingMode::AbsoluteX => {
                let base = self.read_word(operand);
                let addr = base.wrapping_add(self.x as u16);
                (addr, page_crossed(base, addr))
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_word(operand);
                let addr = base.wrapping_add(self.y as u16);
                (addr, page_crossed(base, addr))
            }
            AddressingMode::Indirect => {
                let pointer = self.read_word(operand);
                (self.read_word_buggy(pointer), false)
            }
            AddressingMode::IndirectX => {
                let zp = self.memory.read(operand).wrapping_add(self.x);
                (self.read_word_zero_page(zp), false)
            }
            AddressingMode::IndirectY => {
                let zp = self.memory.read(operand);
                let base = self.read_word_zero_page(zp);
                let addr = base.wrapping_add(self.y as u16);
                (addr, page_crossed(base, addr))
            }
            AddressingMode::Relative => {
                let offset = self.memory.read(operand) as i8;
                let next = self.pc.wrapping_add(2);
                let target = next.wrapping_add(offset as u16);
                (target, page_crossed(next, target))
            }
            // No memory operand; only the immediate slot is meaningful.
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate => (operand, false),
        }
    }

    /// Operand value for a value-producing addressing mode, plus the
    /// page-crossing flag from address resolution.
    pub(crate) fn operand_value(&self, mode: AddressingMode) -> (u8, bool) {
        match mode {
            AddressingMode::Accumulator => (self.a, false),
            AddressingMode::Immediate => (self.memory.read(self.pc.wrapping_add(1)), false),
            _ => {
                let (addr, crossed) = self.operand_address(mode);
                (self.memory.read(addr), crossed)
            }
        }
    }

    /// Reads a little-endian word at `addr`.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word from the zero page, wrapping within it.
    pub(crate) fn read_word_zero_page(&self, addr: u8) -> u16 {
        let lo = self.memory.read(addr as u16) as u16;
        let hi = self.memory.read(addr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word without carrying into the high byte of
    /// the pointer - the NMOS JMP ($xxFF) fetch bug.
    pub(crate) fn read_word_buggy(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
        let hi = self.memory.read(hi_addr) as u16;
        (hi << 8) | lo
    }

    // ========== Stack ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE + self.sp as u16)
    }

    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Flag Helpers ==========

    /// Sets the zero and negative flags from `value`.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout `NV1BDIZC`: bit 5 always reads 1, bit 4 is the break
    /// flag (meaningful only on pushed copies).
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;
        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }
        status
    }

    /// Loads the status register from a packed byte (bit 5 is ignored).
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_b = value & 0b0001_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    // ========== Register Accessors ==========

    /// Accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer value. The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Total cycles executed since construction, including reset and
    /// interrupt sequences.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    // ========== Status Flag Accessors ==========

    /// Negative flag.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Overflow flag.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Break flag.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Decimal mode flag.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Interrupt disable flag.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Zero flag.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Carry flag.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}

/// Whether `from` and `to` sit on different 256-byte pages.
fn page_crossed(from: u16, to: u16) -> bool {
    (from & 0xFF00) != (to & 0xFF00)
}
