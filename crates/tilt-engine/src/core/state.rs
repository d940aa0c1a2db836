/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// Round state machine.
///
/// `Playing -> Won` and `Playing -> Lost` are the only transitions and both
/// are terminal until `reset`. While ended, the ball is frozen: integration
/// and collision passes are suspended.
#[derive(Debug, Clone)]
pub struct Round {
    state: GameState,
    moving: bool,
}

impl Round {
    pub fn new() -> Self {
        Self {
            state: GameState::Playing,
            moving: true,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// True only while the ball should integrate and collide.
    pub fn is_live(&self) -> bool {
        self.state == GameState::Playing && self.moving
    }

    /// Transition to Won. Returns false if the round had already ended.
    pub fn win(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::Won;
        self.moving = false;
        true
    }

    /// Transition to Lost. Returns false if the round had already ended.
    pub fn lose(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::Lost;
        self.moving = false;
        true
    }

    /// Start a new round.
    pub fn reset(&mut self) {
        self.state = GameState::Playing;
        self.moving = true;
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
