use glam::{Mat4, Vec3, Vec4};

/// Containment semantics for a board feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsMode {
    /// Full-volume test on all three axes (walls).
    Solid,
    /// Near-planar test: x/z interval plus a tolerance band around either
    /// y face (holes, win square, base plane). The band replaces an
    /// exact-equality height test so discrete per-frame position steps
    /// cannot tunnel through a zero-thickness feature.
    Thin,
}

/// Axis-aligned bounding box in an object's local frame.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub lower: Vec4,
    pub upper: Vec4,
}

impl BoundingBox {
    pub fn new(lower: Vec3, upper: Vec3) -> Self {
        Self {
            lower: lower.extend(1.0),
            upper: upper.extend(1.0),
        }
    }

    /// Unit cube centered on the origin.
    pub fn unit() -> Self {
        Self::new(Vec3::splat(-0.5), Vec3::splat(0.5))
    }

    /// World-space containment test for `point` under `model`.
    ///
    /// The corners are transformed as-is and used directly as the world
    /// bounds; a rotated box is not re-normalized to axis alignment. Board
    /// features are axis-aligned by construction, so this holds in practice.
    pub fn contains(&self, point: Vec3, model: &Mat4, mode: BoundsMode, thin_tolerance: f32) -> bool {
        let lower = *model * self.lower;
        let upper = *model * self.upper;

        let in_x = point.x >= lower.x && point.x <= upper.x;
        let in_z = point.z >= lower.z && point.z <= upper.z;
        if !(in_x && in_z) {
            return false;
        }

        match mode {
            BoundsMode::Solid => point.y >= lower.y && point.y <= upper.y,
            BoundsMode::Thin => {
                (point.y - lower.y).abs() <= thin_tolerance
                    || (point.y - upper.y).abs() <= thin_tolerance
            }
        }
    }
}
