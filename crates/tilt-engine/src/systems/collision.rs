//! Collision classifier: exhaustive bounding-box scan of the board plus
//! per-category contact responses.

use glam::Vec3;

use crate::api::types::ObjectId;
use crate::components::ball::Ball;
use crate::components::board::Board;
use crate::components::object::ObjectKind;

/// Factor converting board tilt into per-tick lateral acceleration.
const TILT_ACCEL: f32 = 0.1;

/// One containment hit from a board scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub id: ObjectId,
    pub kind: ObjectKind,
}

/// Round outcome of a collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    None,
    Won,
    Lost,
}

/// Test the ball position against every object on the board.
///
/// Exhaustive by design: every overlapping object reports, none
/// short-circuits, so a ball over both the plane and the win square gets
/// the resting response and the win trigger in the same tick. O(N) with
/// N around a hundred objects; no spatial index needed at that scale.
pub fn scan(ball_position: Vec3, board: &Board, thin_tolerance: f32) -> Vec<Contact> {
    board
        .iter()
        .filter(|obj| {
            obj.bounds.contains(
                ball_position,
                &board.object_matrix(obj),
                obj.kind.bounds_mode(),
                thin_tolerance,
            )
        })
        .map(|obj| Contact {
            id: obj.id,
            kind: obj.kind,
        })
        .collect()
}

/// Apply per-kind contact responses and decide the round verdict.
///
/// Plane: resting contact — y velocity zeroed, tilt drives x/z downhill.
/// The `- gravity` term damps a near-level board; an exactly level board
/// (zero sine) adds no drift at all. Any non-plane contact stops
/// horizontal motion; y velocity is untouched so an airborne ball keeps
/// falling along a wall face.
pub fn respond(
    contacts: &[Contact],
    ball: &mut Ball,
    board_orientation: Vec3,
    gravity: f32,
) -> Verdict {
    let mut won = false;
    let mut lost = false;

    for contact in contacts {
        match contact.kind {
            ObjectKind::Plane => {
                ball.velocity.y = 0.0;
                let sin_pitch = board_orientation.x.sin();
                let sin_roll = board_orientation.z.sin();
                if sin_pitch != 0.0 {
                    ball.velocity.x += (sin_pitch - gravity) * TILT_ACCEL;
                } else if sin_roll != 0.0 {
                    ball.velocity.z += (sin_roll - gravity) * TILT_ACCEL;
                }
            }
            ObjectKind::WinSquare => {
                ball.velocity.x = 0.0;
                ball.velocity.z = 0.0;
                won = true;
            }
            ObjectKind::Hole => {
                ball.velocity.x = 0.0;
                ball.velocity.z = 0.0;
                lost = true;
            }
            ObjectKind::Wall | ObjectKind::Other => {
                ball.velocity.x = 0.0;
                ball.velocity.z = 0.0;
            }
        }
    }

    if won && lost {
        log::warn!("ball overlaps a hole and the win square in the same tick; win takes priority");
    }
    if won {
        Verdict::Won
    } else if lost {
        Verdict::Lost
    } else {
        Verdict::None
    }
}

/// Fall-through guard, independent of any bounding box. Catches a ball
/// that escaped all geometry without ever registering a contact.
pub fn below_floor(ball_position: Vec3, floor_y: f32) -> bool {
    ball_position.y < floor_y
}
