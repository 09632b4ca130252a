// ferricom - NES emulator entry point.

use ferricom::cartridge::Cartridge;
use ferricom::debug::{LogLevel, Logger};
use ferricom::display::{run_display, VideoOptions};
use ferricom::emulator::{Emulator, EmulatorConfig};
use std::env;
use std::process;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rom_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: ferricom <rom.nes>");
            process::exit(2);
        }
    };

    let config = EmulatorConfig::load_or_default();

    println!("ferricom v{}", env!("CARGO_PKG_VERSION"));
    println!("loading {}", rom_path);

    let cartridge = Cartridge::from_ines_file(&rom_path)?;
    println!(
        "  mapper {}, {} x 16K PRG, {} x 8K CHR, {:?} mirroring",
        cartridge.mapper, cartridge.prg_banks, cartridge.chr_banks, cartridge.mirroring
    );

    let mut emulator = Emulator::new();
    emulator.insert_cartridge(&cartridge)?;

    let trace_logger = if config.debug.cpu_trace {
        let mut logger = Logger::with_level(LogLevel::Trace);
        logger.open_file(&config.debug.trace_file)?;
        println!("  tracing to {}", config.debug.trace_file.display());
        Some(logger)
    } else {
        None
    };

    run_display(VideoOptions::from_config(&config), emulator, trace_logger)
}
