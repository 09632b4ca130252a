// Emulator module - top-level coordinator.
//
// Owns every component: the CPU, the bus (which owns the PPU), the scanline
// clock and the framebuffer. The original machine wires CPU, memory and PPU
// together with mutual back-pointers; here the coordinator owns all of them
// and passes the bus into the CPU by reference for the duration of a step,
// so no retained mutable aliasing is needed.

mod config;

pub use config::{DebugConfig, EmulatorConfig, VideoConfig};

use crate::bus::Bus;
use crate::cartridge::{Cartridge, INesError, PRG_BANK_SIZE};
use crate::cpu::{Cpu, CpuError};
use crate::display::FrameBuffer;
use crate::ppu::Ppu;
use crate::timing::{ScanlineClock, ScanlineEvent};
use std::rc::Rc;

/// Main emulator structure.
pub struct Emulator {
    /// CPU (6502 processor)
    cpu: Cpu,

    /// Bus (connects the CPU to RAM, ROM and the PPU)
    bus: Bus,

    /// Scanline cycle budget and counter
    clock: ScanlineClock,

    /// Host framebuffer, written one row per visible scanline
    frame: FrameBuffer,

    /// Set when the VBLANK boundary flips a finished frame
    frame_ready: bool,
}

impl Emulator {
    /// Create a new emulator with no cartridge inserted.
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            clock: ScanlineClock::new(),
            frame: FrameBuffer::new(),
            frame_ready: false,
        }
    }

    /// Insert a cartridge: install the PRG banks on the bus, hand the
    /// pattern tables and mirroring to the PPU, then reset the machine.
    ///
    /// # Errors
    /// `INesError::UnsupportedMapper` unless the cartridge is mapper 0.
    pub fn insert_cartridge(&mut self, cartridge: &Cartridge) -> Result<(), INesError> {
        if cartridge.mapper != 0 {
            return Err(INesError::UnsupportedMapper(cartridge.mapper));
        }
        if cartridge.prg_rom.len() < PRG_BANK_SIZE {
            return Err(INesError::Truncated {
                expected: PRG_BANK_SIZE,
                actual: cartridge.prg_rom.len(),
            });
        }

        // Bank 1 is the first 16 KiB; bank 2 is the last. A 16 KiB image
        // appears in both windows, which also places the vectors at $FFFA.
        let first = Rc::new(cartridge.prg_rom[..PRG_BANK_SIZE].to_vec());
        let last = if cartridge.prg_rom.len() > PRG_BANK_SIZE {
            let start = cartridge.prg_rom.len() - PRG_BANK_SIZE;
            Rc::new(cartridge.prg_rom[start..].to_vec())
        } else {
            first.clone()
        };
        self.bus.set_prg_rom_bank1(first);
        self.bus.set_prg_rom_bank2(last);

        // CHR splits into the two 4 KiB pattern tables; a freshly configured
        // PPU replaces whatever the bus held before
        let mut ppu = Ppu::new();
        ppu.set_pattern_tables(
            Rc::new(cartridge.chr_rom[..0x1000].to_vec()),
            Rc::new(cartridge.chr_rom[0x1000..0x2000].to_vec()),
        );
        ppu.set_mirroring(cartridge.mirroring);
        self.bus.attach_ppu(ppu);

        self.reset();
        Ok(())
    }

    /// Reset the machine: CPU from the reset vector, RAM cleared, PPU
    /// registers cleared, clock back to the top of the frame.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
        self.clock.reset();
        self.frame_ready = false;
    }

    /// Execute one instruction and apply its cycle cost to the scanline
    /// clock, rendering or raising VBLANK as boundaries are crossed.
    ///
    /// # Returns
    /// The cycles the instruction consumed.
    ///
    /// # Errors
    /// Fatal `CpuError`s from the CPU; the machine should be considered
    /// halted once one is returned.
    pub fn step(&mut self) -> Result<u8, CpuError> {
        let cycles = self.cpu.step(&mut self.bus)?;

        match self.clock.advance(cycles) {
            Some(ScanlineEvent::Visible(line)) => {
                let row = self.frame.row_mut(line as usize);
                self.bus.ppu().render_scanline(line as usize, row);
            }
            Some(ScanlineEvent::VblankStart) => {
                // The interrupt sequence is charged to the scanline budget,
                // and the finished frame is handed to the host.
                let nmi_cycles = self.cpu.service_nmi(&mut self.bus);
                self.clock.consume(nmi_cycles);
                self.frame_ready = true;
                self.bus.ppu_mut().set_vblank_flag();
            }
            Some(ScanlineEvent::FrameEnd) => {
                self.bus.ppu_mut().clear_vblank_flag();
            }
            None => {}
        }

        Ok(cycles)
    }

    /// Run until the next frame flip.
    pub fn run_frame(&mut self) -> Result<(), CpuError> {
        while !self.frame_ready {
            self.step()?;
        }
        self.frame_ready = false;
        Ok(())
    }

    /// Whether a finished frame is waiting for the host.
    pub fn frame_ready(&self) -> bool {
        self.frame_ready
    }

    /// Acknowledge the finished frame after presenting it.
    pub fn clear_frame_ready(&mut self) {
        self.frame_ready = false;
    }

    /// The host framebuffer.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Format a trace line for the instruction at the current PC.
    pub fn trace_line(&mut self) -> String {
        crate::debug::trace_line(&self.cpu, &mut self.bus)
    }

    /// Get reference to CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Get mutable reference to CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Get reference to Bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Get mutable reference to Bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Get reference to the scanline clock
    pub fn clock(&self) -> &ScanlineClock {
        &self.clock
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
