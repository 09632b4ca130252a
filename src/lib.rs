// ferricom - a scanline-based NES emulator.
//
// The core is a 6502 interpreter, the CPU memory bus, and the timing driver
// that couples CPU cycles to PPU scanlines 113 cycles at a time.

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod display;
pub mod emulator;
pub mod ppu;
pub mod timing;

// Re-export main types for convenience
pub use bus::Bus;
pub use cartridge::{Cartridge, INesError, Mirroring};
pub use cpu::{Cpu, CpuError};
pub use debug::{LogLevel, Logger};
pub use display::{FrameBuffer, VideoOptions};
pub use emulator::{Emulator, EmulatorConfig};
pub use ppu::Ppu;
pub use timing::{ScanlineClock, ScanlineEvent};
