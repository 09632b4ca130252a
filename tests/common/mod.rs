// Shared harness for integration tests.
//
// Builds mapper-0 cartridges with a program at $8000, an NMI handler stub at
// $9000 and vectors pointing at both, then boots a full emulator around them.

#![allow(dead_code)]

use ferricom::cartridge::{Cartridge, Mirroring, CHR_BANK_SIZE, PRG_BANK_SIZE};
use ferricom::emulator::Emulator;

/// Where test programs are placed
pub const PROGRAM_ORIGIN: u16 = 0x8000;

/// Where the NMI handler stub lives (an infinite JMP-to-self loop)
pub const NMI_HANDLER: u16 = 0x9000;

/// Build a 32 KiB mapper-0 cartridge image around `program`, with a
/// spin-loop NMI handler.
pub fn cartridge_with_program(program: &[u8]) -> Cartridge {
    // JMP $9000
    cartridge_with_program_and_handler(program, &[0x4C, 0x00, 0x90])
}

/// Build a cartridge with `program` at $8000 and `handler` installed at the
/// NMI vector target $9000.
pub fn cartridge_with_program_and_handler(program: &[u8], handler: &[u8]) -> Cartridge {
    assert!(program.len() <= 0x1000, "test program too large");
    assert!(handler.len() <= 0x100, "test handler too large");

    let mut prg = vec![0u8; 2 * PRG_BANK_SIZE];
    prg[..program.len()].copy_from_slice(program);
    prg[0x1000..0x1000 + handler.len()].copy_from_slice(handler);

    // Vectors live at the top of bank 2
    let vectors = 2 * PRG_BANK_SIZE - 6;
    prg[vectors] = (NMI_HANDLER & 0xFF) as u8; // $FFFA
    prg[vectors + 1] = (NMI_HANDLER >> 8) as u8;
    prg[vectors + 2] = (PROGRAM_ORIGIN & 0xFF) as u8; // $FFFC
    prg[vectors + 3] = (PROGRAM_ORIGIN >> 8) as u8;

    Cartridge {
        prg_rom: prg,
        chr_rom: vec![0; CHR_BANK_SIZE],
        mirroring: Mirroring::Horizontal,
        mapper: 0,
        prg_banks: 2,
        chr_banks: 1,
        battery: false,
    }
}

/// Boot an emulator with `program` installed and reset applied.
pub fn emulator_with_program(program: &[u8]) -> Emulator {
    let cartridge = cartridge_with_program(program);
    let mut emulator = Emulator::new();
    emulator
        .insert_cartridge(&cartridge)
        .expect("test cartridge is mapper 0");
    emulator
}

/// Boot an emulator with both a program and an NMI handler installed.
pub fn emulator_with_program_and_handler(program: &[u8], handler: &[u8]) -> Emulator {
    let cartridge = cartridge_with_program_and_handler(program, handler);
    let mut emulator = Emulator::new();
    emulator
        .insert_cartridge(&cartridge)
        .expect("test cartridge is mapper 0");
    emulator
}
