//! Match controller
//!
//! Owns the simulation world (both paddles and the ball), the score pair and
//! the match state, and advances them one frame at a time.

use glam::IVec2;
use hecs::World;

use crate::systems::*;
use crate::{
    create_ball, create_paddle, Ball, Config, Events, FrameInput, LoopControl, MatchState, Paddle,
    Rect, Score, Side, Time,
};

/// Read-only view of a frame, handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSnapshot {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball_center: IVec2,
    pub ball_radius: i32,
    pub score: Score,
    pub state: MatchState,
    pub foreground: [f32; 4],
    pub background: [f32; 4],
}

impl MatchSnapshot {
    /// Snapshot of the start-of-match layout
    pub fn initial(config: &Config) -> Self {
        Self {
            left_paddle: config.paddle_spawn(Side::Left),
            right_paddle: config.paddle_spawn(Side::Right),
            ball_center: config.ball_spawn(),
            ball_radius: config.ball_radius,
            score: Score::new(),
            state: MatchState::Active,
            foreground: config.foreground,
            background: config.background,
        }
    }

    pub fn paddle(&self, side: Side) -> Rect {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }
}

pub struct MatchController {
    world: World,
    config: Config,
    score: Score,
    state: MatchState,
    events: Events,
    time: Time,
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchController {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, &config);

        Self {
            world,
            config,
            score: Score::new(),
            state: MatchState::Active,
            events: Events::new(),
            time: Time::new(),
        }
    }

    /// Run one frame.
    ///
    /// Input always reaches the paddles, even after the match is over, but
    /// motion, collisions and scoring only run while the match is active.
    /// Returns [`LoopControl::Exit`] when the input carried a close request.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> LoopControl {
        self.events.clear();
        self.time.advance(dt);

        apply_inputs(&mut self.world, input, &self.config);

        if self.state == MatchState::Active {
            self.step();
        }

        if input.close_requested {
            LoopControl::Exit
        } else {
            LoopControl::Continue
        }
    }

    fn step(&mut self) {
        // 1. Move paddles
        move_paddles(&mut self.world);

        // 2. Bounce off paddles the ball is entering
        check_paddle_hits(&mut self.world, &mut self.events);

        // 3. Move ball
        move_ball(&mut self.world);

        // 4. Walls and scoring
        check_boundaries(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
        );

        // 5. Win condition
        self.state = check_win(&self.score, &self.config, self.state);
        self.time.frame += 1;

        if let (MatchState::Over, Some(winner)) = (self.state, self.winner()) {
            log::info!(
                "{:?} player wins {}-{} after {} frames",
                winner,
                self.score.left,
                self.score.right,
                self.time.frame
            );
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Active => None,
            MatchState::Over => self.score.has_winner(self.config.win_score),
        }
    }

    /// Events raised by the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Number of frames simulated while active
    pub fn frame(&self) -> u64 {
        self.time.frame
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let mut snapshot = MatchSnapshot::initial(&self.config);

        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => snapshot.left_paddle = paddle.rect(),
                Side::Right => snapshot.right_paddle = paddle.rect(),
            }
        }
        if let Some((_e, ball)) = self.world.query::<&Ball>().iter().next() {
            snapshot.ball_center = ball.center;
            snapshot.ball_radius = ball.radius;
        }
        snapshot.score = self.score;
        snapshot.state = self.state;
        snapshot
    }
}
