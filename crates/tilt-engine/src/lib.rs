pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, GameConfig, VrGame};
pub use api::types::{GameEvent, ObjectId};
pub use components::ball::Ball;
pub use components::board::Board;
pub use components::object::{BoardObject, ObjectKind};
pub use core::bounds::{BoundingBox, BoundsMode};
pub use core::rng::Rng;
pub use core::state::{GameState, Round};
pub use core::time::FrameClock;
pub use input::queue::{Button, InputEvent, InputQueue};
pub use systems::collision::{Contact, Verdict};
pub use systems::orientation::WandCalibration;
