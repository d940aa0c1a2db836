mod game;

pub use game::Labyrinth;
