use tilt_engine::{EngineContext, GameEvent, InputEvent, InputQueue, VrGame};

use crate::events::{EventVocabulary, VrEvent};

/// Generic frame-loop driver that wires a game to the VR host callbacks.
///
/// The host forwards each named event to `handle_event` and calls
/// `prepare_frame` then `render_frame` from its render loop. Everything
/// runs on the host's render thread; no state is shared across threads.
pub struct FrameDriver<G: VrGame> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    vocabulary: EventVocabulary,
    first_frame: bool,
    quit: bool,
}

impl<G: VrGame> FrameDriver<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            ctx: EngineContext::new(config),
            input: InputQueue::new(),
            vocabulary: EventVocabulary::default(),
            first_frame: true,
            quit: false,
        }
    }

    pub fn with_vocabulary(mut self, vocabulary: EventVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Translate and queue one named host event. Unknown names are ignored.
    /// The quit event additionally raises the quit flag so the host can end
    /// its loop.
    pub fn handle_event(&mut self, event: &VrEvent) {
        let Some(input) = self.vocabulary.translate(event) else {
            return;
        };
        match input {
            InputEvent::Quit => self.quit = true,
            InputEvent::FrameTick { elapsed_seconds } => self.ctx.note_tick(elapsed_seconds),
            _ => {}
        }
        self.input.push(input);
    }

    /// Queue an already-translated input event (for hosts that bypass the
    /// named-event layer, and for tests).
    pub fn push_input(&mut self, event: InputEvent) {
        if matches!(event, InputEvent::Quit) {
            self.quit = true;
        }
        self.input.push(event);
    }

    /// Render-context callback. The first call runs first-frame scene
    /// construction and opens the initialization gate.
    pub fn prepare_frame(&mut self) {
        if self.first_frame {
            self.game.on_prepare_frame(&mut self.ctx, true);
            self.ctx.mark_initialized();
            self.first_frame = false;
        } else {
            self.game.on_prepare_frame(&mut self.ctx, false);
        }
    }

    /// Render callback: input pass, simulation step, render pass, drain.
    /// No-ops until `prepare_frame` has run once.
    pub fn render_frame(&mut self) {
        if !self.ctx.is_initialized() {
            return;
        }

        self.ctx.clear_frame_data();

        self.game.on_input(&mut self.ctx, &self.input);
        self.ctx.step_simulation();
        self.game.on_render_frame(&mut self.ctx);

        // Drain input after the update so the game saw the whole batch.
        self.input.drain();
    }

    /// Whether the application-level quit signal has fired.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Events emitted during the most recent frame.
    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::VrPayload;
    use glam::Vec3;
    use tilt_engine::{BoardObject, BoundingBox, GameState, ObjectKind};

    /// Minimal game: one base plane, ball dropped from above the center.
    struct DropGame;

    impl VrGame for DropGame {
        fn on_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            for event in input.iter() {
                if let InputEvent::WandMove { transform } = event {
                    ctx.apply_wand_transform(transform);
                }
            }
        }

        fn on_prepare_frame(&mut self, ctx: &mut EngineContext, first: bool) {
            if !first {
                return;
            }
            let id = ctx.next_id();
            ctx.board.spawn(
                BoardObject::new(id, ObjectKind::Plane).with_bounds(BoundingBox::new(
                    Vec3::new(-15.0, 0.0, -15.0),
                    Vec3::new(15.0, 0.0, 15.0),
                )),
            );
            ctx.ball.place(Vec3::new(0.0, 8.0, 0.0));
        }
    }

    #[test]
    fn render_frame_is_inert_before_prepare() {
        let mut driver = FrameDriver::new(DropGame);
        driver.render_frame();
        assert!(!driver.ctx().is_initialized());

        driver.prepare_frame();
        assert!(driver.ctx().is_initialized());
        let y0 = driver.ctx().ball.position.y;
        driver.render_frame();
        assert!(driver.ctx().ball.position.y < y0);
    }

    #[test]
    fn quit_event_raises_flag() {
        let mut driver = FrameDriver::new(DropGame);
        driver.handle_event(&VrEvent::empty("KbdEsc_Down"));
        assert!(driver.should_quit());
    }

    #[test]
    fn unknown_events_are_ignored() {
        let mut driver = FrameDriver::new(DropGame);
        driver.handle_event(&VrEvent {
            name: "HeadTracker_Pose".to_string(),
            payload: VrPayload::Empty,
        });
        driver.prepare_frame();
        driver.render_frame();
        assert!(!driver.should_quit());
    }

    #[test]
    fn heartbeat_advances_the_clock() {
        let mut driver = FrameDriver::new(DropGame);
        driver.prepare_frame();
        driver.handle_event(&VrEvent::scalar("FrameStart", 0.016));
        driver.handle_event(&VrEvent::scalar("FrameStart", 0.016));
        assert_eq!(driver.ctx().clock.ticks(), 2);
    }

    #[test]
    fn wand_event_reaches_the_board() {
        let mut driver = FrameDriver::new(DropGame);
        driver.prepare_frame();
        let mut transform = [0.0f32; 16];
        transform[0] = 1.0;
        transform[5] = 1.0;
        transform[10] = 1.0;
        transform[15] = 1.0;
        transform[12] = 2.0;
        transform[13] = 3.0;
        transform[14] = 4.0;
        driver.handle_event(&VrEvent::transform("Wand0_Move", transform));
        driver.render_frame();
        let expected = Vec3::new(2.0, 3.0, 4.0) + driver.ctx().config.wand_offset;
        assert_eq!(driver.ctx().board.position, expected);
    }

    #[test]
    fn dropped_ball_keeps_playing_on_the_plane() {
        let mut driver = FrameDriver::new(DropGame);
        driver.prepare_frame();
        for _ in 0..300 {
            driver.render_frame();
        }
        assert_eq!(driver.ctx().round.state(), GameState::Playing);
    }
}
