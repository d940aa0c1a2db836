use glam::Vec3;

/// The moving point-mass.
/// Velocity and position are updated exactly once per simulated frame,
/// before the collision pass for that frame.
#[derive(Debug, Clone)]
pub struct Ball {
    /// World position.
    pub position: Vec3,
    /// World velocity; x/z driven by board tilt, y by gravity.
    pub velocity: Vec3,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Zero the velocity.
    pub fn stop(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// Teleport to `position` and stop.
    pub fn place(&mut self, position: Vec3) {
        self.position = position;
        self.stop();
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}
