//! Labyrinth - tilt the board with the wand, roll the ball to the win
//! square, stay out of the holes.

use glam::Vec3;
use tilt_engine::{
    BoardObject, BoundingBox, Button, EngineContext, GameConfig, InputEvent, InputQueue,
    ObjectKind, VrGame,
};

// Board placement in front of the viewer.
const BOARD_OFFSET: Vec3 = Vec3::new(-5.0, -10.0, -20.0);
const WAND_OFFSET: Vec3 = Vec3::new(-10.0, -12.0, -35.0);

// Maze density.
const NUM_WALLS: usize = 80;
const NUM_HOLES: usize = 10;

// Board is 30x30 with a 1-unit rim.
const BOARD_HALF: f32 = 15.0;

// Feature dimensions.
const WALL_SCALE: Vec3 = Vec3::new(1.0, 2.0, 1.0);
const HOLE_SCALE: Vec3 = Vec3::new(2.0, 1.0, 2.0);
const WIN_SIZE: f32 = 5.0;
const HOLE_Y: f32 = 0.1;
const WIN_Y: f32 = 0.2;

/// The labyrinth game. Scene construction happens on the first prepare
/// call; after that the board layout is static and only the board pose,
/// the ball, and the round state change.
pub struct Labyrinth {
    seed: u64,
}

impl Labyrinth {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Interior features land on the playable surface, away from the rim.
    fn scatter(ctx: &mut EngineContext) -> (f32, f32) {
        let x = -14.0 + ctx.rng().next_int(28) as f32;
        let z = -14.0 + ctx.rng().next_int(28) as f32;
        (x, z)
    }

    fn spawn_border_wall(ctx: &mut EngineContext, position: Vec3, scale: Vec3) {
        let id = ctx.next_id();
        ctx.board.spawn(
            BoardObject::new(id, ObjectKind::Wall)
                .with_position(position)
                .with_scale(scale),
        );
    }

    fn build_board(&self, ctx: &mut EngineContext) {
        ctx.board.position = BOARD_OFFSET;

        // Maze walls: unit cubes stretched to 1x2x1.
        for _ in 0..NUM_WALLS {
            let (x, z) = Self::scatter(ctx);
            let id = ctx.next_id();
            ctx.board.spawn(
                BoardObject::new(id, ObjectKind::Wall)
                    .with_position(Vec3::new(x, 1.0, z))
                    .with_scale(WALL_SCALE),
            );
        }

        // Holes: thin discs sitting just above the plane.
        for _ in 0..NUM_HOLES {
            let (x, z) = Self::scatter(ctx);
            let id = ctx.next_id();
            ctx.board.spawn(
                BoardObject::new(id, ObjectKind::Hole)
                    .with_position(Vec3::new(x, HOLE_Y, z))
                    .with_scale(HOLE_SCALE)
                    .with_bounds(BoundingBox::new(
                        Vec3::new(-1.0, 0.0, -1.0),
                        Vec3::new(1.0, 0.0, 1.0),
                    )),
            );
        }

        // The win square, anchored by its lower corner.
        let wx = -13.0 + ctx.rng().next_int(25) as f32;
        let wz = -13.0 + ctx.rng().next_int(25) as f32;
        let id = ctx.next_id();
        ctx.board.spawn(
            BoardObject::new(id, ObjectKind::WinSquare)
                .with_position(Vec3::new(wx, WIN_Y, wz))
                .with_bounds(BoundingBox::new(
                    Vec3::ZERO,
                    Vec3::new(WIN_SIZE, 0.0, WIN_SIZE),
                )),
        );

        // Border rim: four walls boxing the playable surface.
        Self::spawn_border_wall(
            ctx,
            Vec3::new(-BOARD_HALF, 1.0, 0.0),
            Vec3::new(1.0, 2.0, 30.0),
        );
        Self::spawn_border_wall(
            ctx,
            Vec3::new(BOARD_HALF, 1.0, 0.0),
            Vec3::new(1.0, 2.0, 30.0),
        );
        Self::spawn_border_wall(
            ctx,
            Vec3::new(0.0, 1.0, BOARD_HALF),
            Vec3::new(31.0, 2.0, 1.0),
        );
        Self::spawn_border_wall(
            ctx,
            Vec3::new(0.0, 1.0, -BOARD_HALF),
            Vec3::new(31.0, 2.0, 1.0),
        );

        // The base plane the ball rolls on.
        let id = ctx.next_id();
        ctx.board.spawn(
            BoardObject::new(id, ObjectKind::Plane).with_bounds(BoundingBox::new(
                Vec3::new(-BOARD_HALF, 0.0, -BOARD_HALF),
                Vec3::new(BOARD_HALF, 0.0, BOARD_HALF),
            )),
        );

        // Drop the ball at a random spot above the board.
        ctx.reset_round();

        log::info!(
            "labyrinth built: {} objects, ball at {}",
            ctx.board.len(),
            ctx.ball.position
        );
    }
}

impl VrGame for Labyrinth {
    fn config(&self) -> GameConfig {
        GameConfig {
            wand_offset: WAND_OFFSET,
            seed: self.seed,
            ..GameConfig::default()
        }
    }

    fn on_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::WandMove { transform } => ctx.apply_wand_transform(transform),
                InputEvent::ButtonDown { button } => match button {
                    Button::Move => ctx.move_enabled = true,
                    Button::Tilt => ctx.tilt_enabled = true,
                    Button::Reset => ctx.reset_round(),
                },
                InputEvent::ButtonUp { button } => match button {
                    Button::Move => ctx.move_enabled = false,
                    Button::Tilt => ctx.tilt_enabled = false,
                    Button::Reset => {}
                },
                // The driver owns the clock and the quit flag.
                InputEvent::FrameTick { .. } | InputEvent::Quit => {}
            }
        }
    }

    fn on_prepare_frame(&mut self, ctx: &mut EngineContext, first: bool) {
        if first {
            self.build_board(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use tilt_engine::{systems::collision, GameEvent, GameState};

    fn ready(seed: u64) -> (Labyrinth, EngineContext) {
        let mut game = Labyrinth::new(seed);
        let mut ctx = EngineContext::new(game.config());
        game.on_prepare_frame(&mut ctx, true);
        ctx.mark_initialized();
        ctx.clear_frame_data();
        (game, ctx)
    }

    fn world_center(ctx: &EngineContext, obj: &BoardObject) -> Vec3 {
        let m = ctx.board.object_matrix(obj);
        let lower = m * obj.bounds.lower;
        let upper = m * obj.bounds.upper;
        ((lower + upper) * 0.5).truncate()
    }

    #[test]
    fn board_has_the_full_layout() {
        let (_, ctx) = ready(1);
        assert_eq!(ctx.board.len(), NUM_WALLS + NUM_HOLES + 4 + 1 + 1);
        let walls = ctx
            .board
            .iter()
            .filter(|o| o.kind == ObjectKind::Wall)
            .count();
        assert_eq!(walls, NUM_WALLS + 4);
        assert_eq!(
            ctx.board
                .iter()
                .filter(|o| o.kind == ObjectKind::WinSquare)
                .count(),
            1
        );
        assert_eq!(
            ctx.board
                .iter()
                .filter(|o| o.kind == ObjectKind::Plane)
                .count(),
            1
        );
    }

    #[test]
    fn layout_is_deterministic_per_seed() {
        let (_, a) = ready(9);
        let (_, b) = ready(9);
        for (oa, ob) in a.board.iter().zip(b.board.iter()) {
            assert_eq!(oa.kind, ob.kind);
            assert_eq!(oa.position, ob.position);
        }
        assert_eq!(a.ball.position, b.ball.position);
    }

    #[test]
    fn ball_on_win_square_wins_within_one_frame() {
        let (_, mut ctx) = ready(3);
        let win = ctx
            .board
            .iter()
            .find(|o| o.kind == ObjectKind::WinSquare)
            .unwrap()
            .clone();
        let center = world_center(&ctx, &win);
        ctx.ball.place(center);
        ctx.step_simulation();
        assert_eq!(ctx.round.state(), GameState::Won);
        assert!(ctx.events.contains(&GameEvent::Won));
    }

    #[test]
    fn ball_in_a_hole_loses_within_one_frame() {
        let (_, mut ctx) = ready(3);
        // Pick a hole the win square doesn't overlap so the win tie-break
        // can't mask the loss.
        let holes: Vec<BoardObject> = ctx
            .board
            .iter()
            .filter(|o| o.kind == ObjectKind::Hole)
            .cloned()
            .collect();
        let clear_hole = holes
            .iter()
            .map(|h| world_center(&ctx, h))
            .find(|center| {
                collision::scan(*center, &ctx.board, ctx.config.thin_tolerance)
                    .iter()
                    .all(|c| c.kind != ObjectKind::WinSquare)
            })
            .expect("at least one hole clear of the win square");
        ctx.ball.place(clear_hole);
        ctx.step_simulation();
        assert_eq!(ctx.round.state(), GameState::Lost);
        assert!(ctx.events.contains(&GameEvent::Lost));
    }

    #[test]
    fn reset_button_restarts_a_lost_round() {
        let (mut game, mut ctx) = ready(5);
        ctx.declare_lose();
        assert_eq!(ctx.round.state(), GameState::Lost);

        let mut input = InputQueue::new();
        input.push(InputEvent::ButtonDown {
            button: Button::Reset,
        });
        game.on_input(&mut ctx, &input);
        assert_eq!(ctx.round.state(), GameState::Playing);
        let offset = ctx.ball.position - ctx.board.position;
        assert_eq!(offset.y, ctx.config.respawn_height);
    }

    #[test]
    fn tilt_gate_buttons_toggle_the_gates() {
        let (mut game, mut ctx) = ready(5);
        let mut input = InputQueue::new();
        input.push(InputEvent::ButtonUp {
            button: Button::Tilt,
        });
        input.push(InputEvent::ButtonUp {
            button: Button::Move,
        });
        game.on_input(&mut ctx, &input);
        assert!(!ctx.tilt_enabled);
        assert!(!ctx.move_enabled);

        let mut input = InputQueue::new();
        input.push(InputEvent::ButtonDown {
            button: Button::Tilt,
        });
        game.on_input(&mut ctx, &input);
        assert!(ctx.tilt_enabled);
    }

    #[test]
    fn win_square_footprint_is_five_by_five() {
        let (_, ctx) = ready(11);
        let win = ctx
            .board
            .iter()
            .find(|o| o.kind == ObjectKind::WinSquare)
            .unwrap();
        let m = ctx.board.object_matrix(win);
        let lower = m * win.bounds.lower;
        let upper: Vec4 = m * win.bounds.upper;
        assert!((upper.x - lower.x - WIN_SIZE).abs() < 1e-4);
        assert!((upper.z - lower.z - WIN_SIZE).abs() < 1e-4);
    }
}
