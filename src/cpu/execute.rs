// CPU fetch/decode/execute.

use crate::bus::Bus;
use crate::cpu::addressing::{AddressingMode, AddressingResult};
use crate::cpu::opcodes::OPCODE_TABLE;
use crate::cpu::{Cpu, CpuError};

impl Cpu {
    /// Execute exactly one instruction.
    ///
    /// A latched NMI request is serviced first, before the opcode fetch. The
    /// opcode is then read at PC, the addressing mode consumes its operand
    /// bytes, and the instruction runs.
    ///
    /// # Returns
    /// The total cycles consumed: the opcode's base cost from the dispatch
    /// table, plus taken-branch extras, plus 7 when an NMI was serviced.
    ///
    /// # Errors
    /// `CpuError::IllegalOpcode` for encodings with no cycle cost and
    /// `CpuError::UnrecognizedOpcode` for anything outside the implemented
    /// set. Both are fatal; the caller is expected to halt emulation.
    pub fn step(&mut self, bus: &mut Bus) -> Result<u8, CpuError> {
        let mut interrupt_cycles = 0;
        if self.nmi_pending() {
            interrupt_cycles = self.service_nmi(bus);
        }

        let instruction_addr = self.pc;
        let opcode = bus.read(self.pc);
        let opcode_info = &OPCODE_TABLE[opcode as usize];

        if opcode_info.cycles == 0 {
            return Err(CpuError::IllegalOpcode {
                opcode,
                addr: instruction_addr,
            });
        }

        self.pc = self.pc.wrapping_add(1);

        // Resolve the operand; this advances PC past the operand bytes
        let addr_result = match opcode_info.mode {
            AddressingMode::Implied => self.addr_implied(),
            AddressingMode::Accumulator => self.addr_accumulator(),
            AddressingMode::Immediate => self.addr_immediate(bus),
            AddressingMode::ZeroPage => self.addr_zero_page(bus),
            AddressingMode::ZeroPageX => self.addr_zero_page_x(bus),
            AddressingMode::ZeroPageY => self.addr_zero_page_y(bus),
            AddressingMode::Relative => self.addr_relative(bus),
            AddressingMode::Absolute => self.addr_absolute(bus),
            AddressingMode::AbsoluteX => self.addr_absolute_x(bus),
            AddressingMode::AbsoluteY => self.addr_absolute_y(bus),
            AddressingMode::Indirect => self.addr_indirect(bus),
            AddressingMode::IndexedIndirect => self.addr_indexed_indirect(bus),
            AddressingMode::IndirectIndexed => self.addr_indirect_indexed(bus),
        };

        let extra_cycles = self
            .execute_instruction(opcode, &addr_result, bus)
            .ok_or(CpuError::UnrecognizedOpcode {
                opcode,
                addr: instruction_addr,
            })?;

        // service_nmi already billed its own 7 cycles to the counter
        let executed = opcode_info.cycles + extra_cycles;
        self.cycles = self.cycles.wrapping_add(executed as u64);

        Ok(executed + interrupt_cycles)
    }

    /// Dispatch one decoded instruction.
    ///
    /// Returns the extra cycles beyond the table cost (non-zero only for
    /// taken branches), or None for opcodes outside the implemented set.
    fn execute_instruction(
        &mut self,
        opcode: u8,
        addr_result: &AddressingResult,
        bus: &mut Bus,
    ) -> Option<u8> {
        match opcode {
            // Loads
            0xA9 | 0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => self.lda(bus, addr_result),
            0xA2 | 0xA6 | 0xB6 | 0xAE | 0xBE => self.ldx(bus, addr_result),
            0xA0 | 0xA4 | 0xB4 | 0xAC | 0xBC => self.ldy(bus, addr_result),

            // Stores
            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => self.sta(bus, addr_result),
            0x86 | 0x96 | 0x8E => self.stx(bus, addr_result),
            0x84 | 0x94 | 0x8C => self.sty(bus, addr_result),

            // Arithmetic
            0x69 | 0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => self.adc(bus, addr_result),
            0xE6 | 0xF6 | 0xEE | 0xFE => self.inc(bus, addr_result),
            0xE8 => self.inx(),
            0xC8 => self.iny(),
            0xCA => self.dex(),
            0x88 => self.dey(),

            // Comparisons
            0xC9 | 0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => self.cmp(bus, addr_result),
            0xE0 | 0xE4 | 0xEC => self.cpx(bus, addr_result),

            // Logical
            0x29 | 0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => self.and(bus, addr_result),
            0x49 | 0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => self.eor(bus, addr_result),

            // Shifts and rotates
            0x4A => self.lsr(bus, addr_result, true),
            0x46 | 0x56 | 0x4E | 0x5E => self.lsr(bus, addr_result, false),
            0x2A => self.rol(bus, addr_result, true),
            0x26 | 0x36 | 0x2E | 0x3E => self.rol(bus, addr_result, false),

            // Branches (report their extra cycles)
            0x90 => return Some(self.bcc(addr_result)),
            0xB0 => return Some(self.bcs(addr_result)),
            0xF0 => return Some(self.beq(addr_result)),
            0xD0 => return Some(self.bne(addr_result)),
            0x10 => return Some(self.bpl(addr_result)),

            // Jumps, subroutines and interrupt return
            0x4C | 0x6C => self.jmp(addr_result),
            0x20 => self.jsr(bus, addr_result),
            0x60 => self.rts(bus),
            0x40 => self.rti(bus),

            // Stack
            0x48 => self.pha(bus),
            0x68 => self.pla(bus),

            // Flag operations
            0x18 => self.clc(),
            0xD8 => self.cld(),
            0x58 => self.cli(),
            0xB8 => self.clv(),
            0x78 => self.sei(),

            // Transfers
            0xAA => self.tax(),
            0xA8 => self.tay(),
            0x8A => self.txa(),
            0x9A => self.txs(),

            _ => return None,
        }

        Some(0)
    }
}
