/// Wand buttons the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// While held, the wand position drives the board position.
    Move,
    /// While held, the wand orientation drives the board tilt.
    Tilt,
    /// Restart the round.
    Reset,
}

/// Input event types the engine understands.
/// Generic — the host's named-event vocabulary is translated into these
/// before they reach the game.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A new wand pose, as 16 floats in GL column order
    /// (translation at indices 12..14).
    WandMove { transform: [f32; 16] },
    /// A wand or keyboard button was pressed.
    ButtonDown { button: Button },
    /// A wand or keyboard button was released.
    ButtonUp { button: Button },
    /// Host heartbeat: seconds elapsed since the last tick.
    FrameTick { elapsed_seconds: f32 },
    /// Application-level quit signal (e.g. the escape key).
    Quit,
}

/// A queue of input events.
/// The host bridge writes events into the queue; the game reads and the
/// driver drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the host bridge).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
