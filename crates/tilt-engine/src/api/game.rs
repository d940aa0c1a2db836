use glam::{Mat4, Vec3};

use crate::api::types::{GameEvent, ObjectId};
use crate::components::ball::Ball;
use crate::components::board::Board;
use crate::core::rng::Rng;
use crate::core::state::Round;
use crate::core::time::FrameClock;
use crate::input::queue::InputQueue;
use crate::systems::orientation::WandCalibration;
use crate::systems::{collision, integrator, orientation};

/// Configuration for the simulation, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Per-tick gravity decrement (frame-coupled, default: 0.005).
    pub gravity: f32,
    /// Board pitch/roll clamp in radians (default: 0.33).
    pub tilt_limit: f32,
    /// Height tolerance for Thin-mode containment (default: 0.75).
    pub thin_tolerance: f32,
    /// World y below which the ball counts as lost regardless of geometry
    /// (default: -30).
    pub fall_floor_y: f32,
    /// Calibration offset from wand position to board position.
    pub wand_offset: Vec3,
    /// Ball offset from the board center on a win (celebration perch).
    pub win_perch: Vec3,
    /// Ball offset from the board center on a loss.
    pub lose_sink: Vec3,
    /// Half-extent of the random respawn square above the board.
    pub respawn_spread: i32,
    /// Respawn height above the board.
    pub respawn_height: f32,
    /// Seed for layout and respawn randomness.
    pub seed: u64,
    /// Per-device wand axis calibration.
    pub calibration: WandCalibration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 0.005,
            tilt_limit: 0.33,
            thin_tolerance: 0.75,
            fall_floor_y: -30.0,
            wand_offset: Vec3::new(-10.0, -12.0, -35.0),
            win_perch: Vec3::new(0.0, 10.0, 0.0),
            lose_sink: Vec3::new(0.0, -15.0, 0.0),
            respawn_spread: 10,
            respawn_height: 10.0,
            seed: 42,
            calibration: WandCalibration::default(),
        }
    }
}

/// The core contract every game must fulfill.
///
/// The three lifecycle methods mirror the VR host's callbacks — event
/// delivery, render-context preparation, and the per-frame render pass —
/// and are driven by an external frame-loop driver, never called directly.
pub trait VrGame {
    /// Return simulation configuration. Called once before the first frame.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Consume this frame's input batch (wand poses, buttons, heartbeat).
    fn on_input(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Render-context pass. `first` is true exactly once, before anything
    /// else runs: build the board there.
    fn on_prepare_frame(&mut self, ctx: &mut EngineContext, first: bool);

    /// Per-frame pass after the simulation step. Read state here and feed
    /// the host renderer.
    fn on_render_frame(&mut self, _ctx: &mut EngineContext) {}
}

/// Mutable access to the whole simulation state, passed to every VrGame
/// lifecycle method. One owner for everything the two host callbacks used
/// to mutate independently.
pub struct EngineContext {
    pub board: Board,
    pub ball: Ball,
    pub round: Round,
    pub clock: FrameClock,
    /// Events emitted this frame for the host to observe.
    pub events: Vec<GameEvent>,
    /// Gate: wand position drives board position.
    pub move_enabled: bool,
    /// Gate: wand orientation drives board tilt.
    pub tilt_enabled: bool,
    pub config: GameConfig,
    rng: Rng,
    next_id: u32,
    initialized: bool,
}

impl EngineContext {
    pub fn new(config: GameConfig) -> Self {
        let rng = Rng::new(config.seed);
        Self {
            board: Board::new(),
            ball: Ball::new(),
            round: Round::new(),
            clock: FrameClock::new(),
            events: Vec::new(),
            move_enabled: true,
            tilt_enabled: true,
            config,
            rng,
            next_id: 1,
            initialized: false,
        }
    }

    /// Generate the next unique object ID.
    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Layout/respawn randomness.
    pub fn rng(&mut self) -> &mut Rng {
        &mut self.rng
    }

    /// Mark first-frame scene construction as complete. Until this is set,
    /// every frame-update entry point no-ops.
    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Record one host heartbeat tick.
    pub fn note_tick(&mut self, elapsed_seconds: f32) {
        self.clock.advance(elapsed_seconds);
    }

    /// Apply a wand pose (16 floats, GL column order) to the board,
    /// honoring the move/tilt gates. No-ops before initialization.
    pub fn apply_wand_transform(&mut self, transform: &[f32; 16]) {
        if !self.initialized {
            return;
        }
        let pose = Mat4::from_cols_array(transform);
        orientation::update_board(
            &mut self.board,
            &pose,
            self.move_enabled,
            self.tilt_enabled,
            self.config.wand_offset,
            &self.config.calibration,
            self.config.tilt_limit,
        );
    }

    /// One simulated frame: integrate the ball, classify contacts, apply
    /// responses, run the fall-through guard, fire state transitions.
    /// Suspended while the round is over or before initialization.
    pub fn step_simulation(&mut self) {
        if !self.initialized || !self.round.is_live() {
            return;
        }

        integrator::step(&mut self.ball, self.config.gravity);

        let contacts = collision::scan(self.ball.position, &self.board, self.config.thin_tolerance);
        let verdict = collision::respond(
            &contacts,
            &mut self.ball,
            self.board.orientation,
            self.config.gravity,
        );

        match verdict {
            collision::Verdict::Won => self.declare_win(),
            collision::Verdict::Lost => self.declare_lose(),
            collision::Verdict::None => {
                if collision::below_floor(self.ball.position, self.config.fall_floor_y) {
                    self.declare_lose();
                }
            }
        }
    }

    /// End the round with a win: perch the ball above the board center and
    /// freeze it.
    pub fn declare_win(&mut self) {
        if self.round.win() {
            self.ball.place(self.board.position + self.config.win_perch);
            self.events.push(GameEvent::Won);
            log::info!("round won after {} ticks", self.clock.ticks());
        }
    }

    /// End the round with a loss: sink the ball below the board and freeze
    /// it.
    pub fn declare_lose(&mut self) {
        if self.round.lose() {
            self.ball.place(self.board.position + self.config.lose_sink);
            self.events.push(GameEvent::Lost);
            log::info!("round lost after {} ticks", self.clock.ticks());
        }
    }

    /// Start a new round: respawn the ball at a random point above the
    /// board and re-enter Playing.
    pub fn reset_round(&mut self) {
        let spread = self.config.respawn_spread;
        let dx = self.rng.next_range(-spread, spread) as f32;
        let dz = self.rng.next_range(-spread, spread) as f32;
        let spawn = self.board.position + Vec3::new(dx, self.config.respawn_height, dz);
        self.ball.place(spawn);
        self.round.reset();
        self.events.push(GameEvent::RoundReset);
        log::info!("round reset, ball respawned at {spawn}");
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
