// PPU memory access: pattern tables, name tables and palette RAM.

use super::{Ppu, NAMETABLE_SIZE};
use crate::cartridge::Mirroring;

impl Ppu {
    /// Map a name-table address ($2000-$2FFF) to physical VRAM.
    ///
    /// The PPU has 2 KiB of name-table RAM behind a 4 KiB address window;
    /// the cartridge's mirroring arrangement decides which two of the four
    /// logical tables share storage.
    pub(super) fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let physical_table = match self.mirroring {
            // Horizontal: $2000=$2400 and $2800=$2C00
            Mirroring::Horizontal => match table {
                0 | 1 => 0,
                _ => 1,
            },
            // Vertical: $2000=$2800 and $2400=$2C00
            Mirroring::Vertical => match table {
                0 | 2 => 0,
                _ => 1,
            },
            // Four-screen needs cartridge VRAM this core does not model;
            // fall back to horizontal arrangement
            Mirroring::FourScreen => match table {
                0 | 1 => 0,
                _ => 1,
            },
        };

        physical_table * NAMETABLE_SIZE + offset
    }

    /// Map a palette address ($3F00-$3FFF) to the 32-byte palette RAM.
    ///
    /// Sprite palette entries $3F10/$3F14/$3F18/$3F1C mirror their
    /// background counterparts; entry 0 is the shared backdrop colour.
    pub(super) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;
        if addr >= 16 && addr % 4 == 0 {
            addr - 16
        } else {
            addr
        }
    }

    /// Read from PPU memory ($0000-$3FFF).
    pub(super) fn read_ppu_memory(&self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;

        match addr {
            // Pattern tables, owned by the cartridge
            0x0000..=0x1FFF => self.pattern_byte(addr),

            // Name tables and their $3000-$3EFF mirror
            0x2000..=0x2FFF => self.nametables[self.mirror_nametable_addr(addr)],
            0x3000..=0x3EFF => self.nametables[self.mirror_nametable_addr(addr - 0x1000)],

            // Palette RAM
            0x3F00..=0x3FFF => self.palette_ram[self.mirror_palette_addr(addr)],

            _ => unreachable!(),
        }
    }

    /// Write to PPU memory ($0000-$3FFF).
    ///
    /// Pattern tables are CHR-ROM here and ignore writes.
    pub(super) fn write_ppu_memory(&mut self, addr: u16, value: u8) {
        let addr = addr & 0x3FFF;

        match addr {
            0x0000..=0x1FFF => {
                // CHR-ROM is read only
            }
            0x2000..=0x2FFF => {
                let mirrored = self.mirror_nametable_addr(addr);
                self.nametables[mirrored] = value;
            }
            0x3000..=0x3EFF => {
                let mirrored = self.mirror_nametable_addr(addr - 0x1000);
                self.nametables[mirrored] = value;
            }
            0x3F00..=0x3FFF => {
                let mirrored = self.mirror_palette_addr(addr);
                self.palette_ram[mirrored] = value;
            }
            _ => unreachable!(),
        }
    }
}
