//! Board orientation controller: maps a wand's 4x4 transform onto the
//! board's clamped pitch/roll, and its translation onto the board position.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::board::Board;

/// Per-device axis calibration for the wand-to-board remap.
///
/// The decomposition-to-board axis assignment is fixed (board x <- roll,
/// board y <- pitch, board z <- yaw); the signs differ between rigs
/// (desktop wand vs. room-scale wand) and are calibration data, loaded
/// from JSON rather than hard-coded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WandCalibration {
    #[serde(default = "neg_one")]
    pub roll_sign: f32,
    #[serde(default = "one")]
    pub pitch_sign: f32,
    #[serde(default = "neg_one")]
    pub yaw_sign: f32,
    /// The board never yaws in normal play; unlock only for calibration runs.
    #[serde(default = "default_true")]
    pub lock_yaw: bool,
}

fn one() -> f32 {
    1.0
}

fn neg_one() -> f32 {
    -1.0
}

fn default_true() -> bool {
    true
}

impl Default for WandCalibration {
    fn default() -> Self {
        Self {
            roll_sign: -1.0,
            pitch_sign: 1.0,
            yaw_sign: -1.0,
            lock_yaw: true,
        }
    }
}

impl WandCalibration {
    /// Parse a calibration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Clamp a tilt angle to the playable range. Idempotent.
pub fn clamp_tilt(angle: f32, limit: f32) -> f32 {
    angle.clamp(-limit, limit)
}

/// Extract raw (yaw, pitch, roll) from the rotation sub-matrix of `m`:
/// `yaw = atan2(m10, m00)`, `pitch = atan2(-m20, sqrt(m21^2 + m22^2))`,
/// `roll = atan2(m21, m22)`.
///
/// Returns None when any rotation entry is non-finite; callers keep the
/// previous orientation in that case.
pub fn decompose(m: &Mat4) -> Option<Vec3> {
    let entries = [
        m.x_axis.x, m.x_axis.y, m.x_axis.z,
        m.y_axis.x, m.y_axis.y, m.y_axis.z,
        m.z_axis.x, m.z_axis.y, m.z_axis.z,
    ];
    if entries.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let yaw = m.y_axis.x.atan2(m.x_axis.x);
    let pitch = (-m.z_axis.x).atan2((m.z_axis.y * m.z_axis.y + m.z_axis.z * m.z_axis.z).sqrt());
    let roll = m.z_axis.y.atan2(m.z_axis.z);
    Some(Vec3::new(yaw, pitch, roll))
}

/// Remap a raw decomposition onto board (pitch, yaw, roll), applying the
/// calibration signs and clamping the playable axes.
pub fn board_orientation(raw: Vec3, calibration: &WandCalibration, tilt_limit: f32) -> Vec3 {
    let x = clamp_tilt(calibration.roll_sign * raw.z, tilt_limit);
    let y = if calibration.lock_yaw {
        0.0
    } else {
        calibration.pitch_sign * raw.y
    };
    let z = clamp_tilt(calibration.yaw_sign * raw.x, tilt_limit);
    Vec3::new(x, y, z)
}

/// Apply one wand pose to the board, honoring the move/tilt gates.
/// Returns false when the transform was rejected (non-finite entries);
/// the board keeps its previous pose for the rejected component.
pub fn update_board(
    board: &mut Board,
    transform: &Mat4,
    move_enabled: bool,
    tilt_enabled: bool,
    wand_offset: Vec3,
    calibration: &WandCalibration,
    tilt_limit: f32,
) -> bool {
    let mut accepted = true;

    if move_enabled {
        let translation = transform.w_axis.truncate();
        if translation.is_finite() {
            board.position = translation + wand_offset;
        } else {
            log::warn!("wand translation rejected: non-finite entries");
            accepted = false;
        }
    }

    if tilt_enabled {
        match decompose(transform) {
            Some(raw) => {
                board.orientation = board_orientation(raw, calibration, tilt_limit);
            }
            None => {
                log::warn!("wand rotation rejected: non-finite entries");
                accepted = false;
            }
        }
    }

    accepted
}
