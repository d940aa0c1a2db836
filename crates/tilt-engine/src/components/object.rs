use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::api::types::ObjectId;
use crate::core::bounds::{BoundingBox, BoundsMode};

/// Collision category of a board feature. Fixed at construction — the
/// explicit replacement for classifying objects by debug-label substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Vertical obstacle; stops horizontal motion.
    Wall,
    /// Planar trap; ends the round with a loss.
    Hole,
    /// Planar goal; ends the round with a win.
    WinSquare,
    /// The base plane; resting contact enables tilt-driven rolling.
    Plane,
    /// Decorative or inert; contact stops horizontal motion like a wall.
    Other,
}

impl ObjectKind {
    /// Near-planar features use the vertically-tolerant Thin test.
    pub fn bounds_mode(self) -> BoundsMode {
        match self {
            ObjectKind::Hole | ObjectKind::WinSquare | ObjectKind::Plane => BoundsMode::Thin,
            ObjectKind::Wall | ObjectKind::Other => BoundsMode::Solid,
        }
    }
}

/// A placed feature on the board.
/// Fat struct with builder methods; the board owns every object for the
/// lifetime of its scene subtree (the layout is static during gameplay).
#[derive(Debug, Clone)]
pub struct BoardObject {
    /// Unique identifier.
    pub id: ObjectId,
    /// Collision category.
    pub kind: ObjectKind,
    /// Position in the board's frame.
    pub position: Vec3,
    /// Rotation (pitch, yaw, roll) in the board's frame.
    pub rotation: Vec3,
    /// Scale in the board's frame.
    pub scale: Vec3,
    /// Bounding box in the object's own local frame.
    pub bounds: BoundingBox,
}

impl BoardObject {
    /// Create a new object of the given kind at the board origin, with a
    /// unit-cube bounding box.
    pub fn new(id: ObjectId, kind: ObjectKind) -> Self {
        Self {
            id,
            kind,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            bounds: BoundingBox::unit(),
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    /// Model matrix in the board's frame.
    pub fn local_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}
