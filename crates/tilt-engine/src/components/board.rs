use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::api::types::ObjectId;
use crate::components::object::BoardObject;

/// The tiltable platform. Owns every placed feature; position and
/// orientation are the only two degrees of freedom the player controls,
/// and every object inherits the board's transform as its parent frame.
///
/// Flat-Vec storage — the board holds on the order of a hundred objects
/// and is scanned exhaustively once per frame.
pub struct Board {
    /// World position of the board center.
    pub position: Vec3,
    /// (pitch, yaw, roll); yaw stays 0 in normal play.
    pub orientation: Vec3,
    objects: Vec<BoardObject>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Vec3::ZERO,
            objects: Vec::with_capacity(128),
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// World transform of the board itself.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.orientation.x,
            self.orientation.y,
            self.orientation.z,
        );
        Mat4::from_translation(self.position) * Mat4::from_quat(rotation)
    }

    /// World transform of one placed object (parent frame x local frame).
    pub fn object_matrix(&self, object: &BoardObject) -> Mat4 {
        self.model_matrix() * object.local_matrix()
    }

    /// Add an object to the board.
    pub fn spawn(&mut self, object: BoardObject) {
        self.objects.push(object);
    }

    /// Get a reference to an object by ID.
    pub fn get(&self, id: ObjectId) -> Option<&BoardObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Iterate over all objects.
    pub fn iter(&self) -> impl Iterator<Item = &BoardObject> {
        self.objects.iter()
    }

    /// Number of objects on the board.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the board has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove all objects.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::object::ObjectKind;
    use glam::Vec4;

    #[test]
    fn spawn_and_get() {
        let mut board = Board::new();
        board.spawn(BoardObject::new(ObjectId(1), ObjectKind::Wall));
        board.spawn(BoardObject::new(ObjectId(2), ObjectKind::Hole));
        assert_eq!(board.len(), 2);
        assert_eq!(board.get(ObjectId(2)).unwrap().kind, ObjectKind::Hole);
        assert!(board.get(ObjectId(9)).is_none());
    }

    #[test]
    fn object_matrix_composes_board_translation() {
        let mut board = Board::new().with_position(Vec3::new(-5.0, -10.0, -20.0));
        board.spawn(
            BoardObject::new(ObjectId(1), ObjectKind::Wall).with_position(Vec3::new(3.0, 1.0, 0.0)),
        );
        let obj = board.get(ObjectId(1)).unwrap();
        let world = board.object_matrix(obj) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((world.x + 2.0).abs() < 1e-5);
        assert!((world.y + 9.0).abs() < 1e-5);
        assert!((world.z + 20.0).abs() < 1e-5);
    }

    #[test]
    fn board_tilt_moves_object_world_position() {
        let mut board = Board::new();
        board.spawn(
            BoardObject::new(ObjectId(1), ObjectKind::Wall)
                .with_position(Vec3::new(10.0, 0.0, 0.0)),
        );
        board.orientation = Vec3::new(0.0, 0.0, 0.3); // roll about z
        let obj = board.get(ObjectId(1)).unwrap();
        let world = board.object_matrix(obj) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        // Rolling the board lifts an object on its +x edge.
        assert!(world.y > 0.0);
    }
}
