pub mod bounds;
pub mod rng;
pub mod state;
pub mod time;
