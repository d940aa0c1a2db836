/// Unique identifier for an object placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// A game event emitted by the simulation for the host to observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The ball reached the winning square.
    Won,
    /// The ball fell into a hole or off the board.
    Lost,
    /// A new round started and the ball was respawned.
    RoundReset,
}
