pub mod events;
pub mod runner;

pub use events::{EventVocabulary, VrEvent, VrPayload};
pub use runner::FrameDriver;
