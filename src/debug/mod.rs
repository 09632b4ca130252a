// Debug module - trace logging.
//
// A small leveled logger with a bounded in-memory buffer and an optional
// file sink, plus per-instruction CPU trace formatting for the host's trace
// switch.

mod logger;

pub use logger::{LogLevel, Logger};

use crate::bus::Bus;
use crate::cpu::opcodes::OPCODE_TABLE;
use crate::cpu::Cpu;

/// Format one trace line for the instruction at the current PC.
///
/// Layout: address, raw instruction bytes, mnemonic, then the register file
/// and the total cycle counter.
///
/// ```text
/// 8000  A9 42     LDA   A:00 X:00 Y:00 P:20 SP:00 CYC:0
/// ```
pub fn trace_line(cpu: &Cpu, bus: &mut Bus) -> String {
    let pc = cpu.pc;
    let opcode = bus.read(pc);
    let info = &OPCODE_TABLE[opcode as usize];

    let hex_bytes = match info.bytes {
        2 => format!("{:02X} {:02X}   ", opcode, bus.read(pc.wrapping_add(1))),
        3 => format!(
            "{:02X} {:02X} {:02X}",
            opcode,
            bus.read(pc.wrapping_add(1)),
            bus.read(pc.wrapping_add(2))
        ),
        _ => format!("{:02X}      ", opcode),
    };

    format!(
        "{:04X}  {}  {:<4}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
        pc, hex_bytes, info.mnemonic, cpu.a, cpu.x, cpu.y, cpu.status, cpu.sp, cpu.cycles
    )
}
