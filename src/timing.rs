// Timing driver - couples CPU cycle counts to scanlines.
//
// One NTSC scanline is 113 CPU cycles wide. The clock accumulates the cycles
// each instruction reports and, when a scanline's budget is spent, advances
// the scanline counter and reports which region was entered: a visible line
// to render, the VBLANK boundary at line 240, or the end of the frame 22
// lines later. Cycle accounting lives here, not in the opcode handlers.

/// CPU cycles per NTSC scanline
pub const CYCLES_PER_SCANLINE: i32 = 113;

/// Number of visible scanlines per frame
pub const VISIBLE_SCANLINES: u16 = 240;

/// Number of scanlines spent in the vertical blanking interval
pub const VBLANK_SCANLINES: u16 = 22;

/// Event reported when the clock crosses a scanline boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanlineEvent {
    /// A visible scanline finished; render row `0..=238` into the framebuffer
    Visible(u16),
    /// Scanline 240 reached: raise the VBLANK NMI and flip the frame
    VblankStart,
    /// The blanking interval ended; the counter wrapped back to line 0
    FrameEnd,
}

/// Per-scanline cycle budget and scanline counter
pub struct ScanlineClock {
    /// Cycles remaining before the current scanline ends; signed because an
    /// instruction may overshoot the boundary
    cycles_left: i32,

    /// Current scanline, 0-261
    scanline: u16,
}

impl ScanlineClock {
    /// Create a clock at the top of the frame with a full scanline budget.
    pub fn new() -> Self {
        ScanlineClock {
            cycles_left: CYCLES_PER_SCANLINE,
            scanline: 0,
        }
    }

    /// Restart the frame: full budget, scanline 0.
    pub fn reset(&mut self) {
        self.cycles_left = CYCLES_PER_SCANLINE;
        self.scanline = 0;
    }

    /// Current scanline index.
    pub fn scanline(&self) -> u16 {
        self.scanline
    }

    /// Cycles remaining on the current scanline.
    pub fn cycles_left(&self) -> i32 {
        self.cycles_left
    }

    /// Charge extra cycles against the current scanline without advancing
    /// it. The VBLANK interrupt sequence is billed this way.
    pub fn consume(&mut self, cycles: u8) {
        self.cycles_left -= cycles as i32;
    }

    /// Account for an executed instruction.
    ///
    /// Subtracts `cycles` from the scanline budget. While the budget is
    /// overdrawn the scanline counter advances and region events are
    /// reported; instructions are short enough that at most one boundary is
    /// crossed per call.
    pub fn advance(&mut self, cycles: u8) -> Option<ScanlineEvent> {
        self.cycles_left -= cycles as i32;
        if self.cycles_left >= 0 {
            return None;
        }

        self.cycles_left += CYCLES_PER_SCANLINE;
        self.scanline += 1;

        if self.scanline < VISIBLE_SCANLINES {
            Some(ScanlineEvent::Visible(self.scanline - 1))
        } else if self.scanline == VISIBLE_SCANLINES {
            Some(ScanlineEvent::VblankStart)
        } else if self.scanline == VISIBLE_SCANLINES + VBLANK_SCANLINES {
            self.scanline = 0;
            Some(ScanlineEvent::FrameEnd)
        } else {
            // Inside the blanking interval, nothing to do
            None
        }
    }
}

impl Default for ScanlineClock {
    fn default() -> Self {
        Self::new()
    }
}
