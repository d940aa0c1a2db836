//! Headless demo host: scripted wand input through the frame driver.
//! Stands in for the VR framework so a round can be watched from the log.

use glam::{EulerRot, Mat4, Vec3};
use labyrinth::Labyrinth;
use tilt_engine::GameEvent;
use tilt_vr::{FrameDriver, VrEvent};

const MAX_FRAMES: u32 = 5000;
const FRAME_DT: f32 = 1.0 / 60.0;

/// Sweep the wand tilt back and forth so the ball wanders the board.
/// The translation is chosen so the board lands at its usual offset.
fn wand_pose(frame: u32) -> [f32; 16] {
    let t = frame as f32 * FRAME_DT;
    let roll = 0.4 * (t * 0.5).sin();
    let pitch = 0.3 * (t * 0.33).cos();
    let mut pose = Mat4::from_euler(EulerRot::XYZ, roll, 0.0, pitch);
    pose.w_axis = Vec3::new(5.0, 2.0, 15.0).extend(1.0);
    pose.to_cols_array()
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut driver = FrameDriver::new(Labyrinth::new(seed));

    for frame in 0..MAX_FRAMES {
        driver.handle_event(&VrEvent::scalar("FrameStart", FRAME_DT));
        driver.handle_event(&VrEvent::transform("Wand0_Move", wand_pose(frame)));

        driver.prepare_frame();
        driver.render_frame();

        let mut round_over = false;
        for event in driver.events() {
            match event {
                GameEvent::Won => {
                    log::info!("frame {frame}: the ball reached the win square");
                    round_over = true;
                }
                GameEvent::Lost => {
                    log::info!("frame {frame}: the ball was lost");
                    round_over = true;
                }
                GameEvent::RoundReset => {}
            }
        }
        if round_over || driver.should_quit() {
            break;
        }
    }

    let ctx = driver.ctx();
    log::info!(
        "session over after {} ticks, final state {:?}",
        ctx.clock.ticks(),
        ctx.round.state()
    );
}
