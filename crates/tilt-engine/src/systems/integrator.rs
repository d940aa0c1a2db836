//! Ball integrator: discrete per-frame position steps under gravity.

use crate::components::ball::Ball;

/// Advance the ball one tick.
///
/// Gravity is a constant per-tick decrement — the simulation is
/// frame-coupled, not wall-clock-integrated. Velocity updates before
/// position so the very first tick already moves the ball.
pub fn step(ball: &mut Ball, gravity: f32) {
    ball.velocity.y -= gravity;
    ball.position += ball.velocity;
}
