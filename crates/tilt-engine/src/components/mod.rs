pub mod ball;
pub mod board;
pub mod object;
