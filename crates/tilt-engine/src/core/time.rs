/// Accumulator for the host's heartbeat ticks.
/// The host delivers one elapsed-seconds value per tick; the clock keeps a
/// running total and a tick count for animation and diagnostics.
#[derive(Debug, Clone)]
pub struct FrameClock {
    elapsed: f32,
    ticks: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Record one heartbeat tick.
    pub fn advance(&mut self, elapsed_seconds: f32) {
        self.elapsed += elapsed_seconds;
        self.ticks += 1;
    }

    /// Total seconds accumulated since the clock started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of heartbeat ticks seen.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
