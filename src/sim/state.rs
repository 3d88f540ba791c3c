//! Game state and core simulation types
//!
//! A `GameState` owns everything one running game needs: phase, counters,
//! paddle, ball, brick grid and its own seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::grid::BrickGrid;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Ball resting above the paddle, waiting for launch
    Ready,
    /// Active gameplay; the only phase that runs the simulation step
    Playing,
    /// Frozen mid-play (touch lifted)
    Paused,
    /// Out of lives
    GameOver,
    /// Every brick destroyed
    Win,
}

impl GamePhase {
    /// Round is over and only a restart leaves this phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// The ball: center position and per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        }
    }
}

impl Ball {
    /// Collision box (the enclosing square)
    pub fn bounds(&self, radius: f32) -> Aabb {
        Aabb::around(self.pos, radius)
    }
}

/// The player's paddle; only its center x moves
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

impl Paddle {
    /// Keep the paddle fully inside the play area
    pub fn clamp_to(&mut self, area: &PlayArea, half_width: f32) {
        self.x = self.x.clamp(half_width, area.width - half_width);
    }

    /// Collision rectangle; the paddle floats `paddle_bottom_offset` above the floor
    pub fn rect(&self, area: &PlayArea, tuning: &Tuning) -> Aabb {
        Aabb::new(
            self.x - tuning.half_paddle_width(),
            area.paddle_top(tuning),
            tuning.paddle_width,
            tuning.paddle_height,
        )
    }
}

/// Measured size of the play area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    /// Returns `None` when the size can't hold the paddle and ball, e.g. before
    /// first layout when the container still reports zero.
    ///
    /// The ball is served one diameter above the paddle, so the height must
    /// leave a further radius for its center to sit at or below `radius`.
    pub fn measure(width: f32, height: f32, tuning: &Tuning) -> Option<Self> {
        let min_width = tuning.paddle_width.max(tuning.ball_size);
        let min_height = tuning.paddle_height
            + tuning.paddle_bottom_offset
            + tuning.ball_size
            + tuning.ball_radius();
        (width.is_finite() && height.is_finite() && width >= min_width && height >= min_height)
            .then_some(Self { width, height })
    }

    pub fn paddle_top(&self, tuning: &Tuning) -> f32 {
        self.height - tuning.paddle_height - tuning.paddle_bottom_offset
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG started from
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub lives: u8,
    pub score: u32,
    /// Simulation steps run so far (only counts `Playing` ticks)
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// `None` until the host reports a usable container size
    pub area: Option<PlayArea>,
}

impl GameState {
    /// Create a new game with the stock tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new game with a custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bricks = BrickGrid::generate(&mut rng, &tuning);
        Self {
            seed,
            rng,
            phase: GamePhase::Ready,
            lives: tuning.initial_lives,
            score: 0,
            time_ticks: 0,
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks,
            area: None,
            tuning,
        }
    }

    /// Apply a new container size.
    ///
    /// Outside of `Playing` the ball and paddle are laid out again for the new
    /// bounds. During play they are left alone; the per-tick clamps pull them
    /// back inside.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.area = PlayArea::measure(width, height, &self.tuning);
        match self.area {
            Some(area) => log::info!("Play area resized to {}x{}", area.width, area.height),
            None => log::warn!("Unusable play area {}x{}, simulation paused", width, height),
        }
        if self.phase != GamePhase::Playing {
            self.reset_ball_and_paddle();
        }
    }

    /// Center the paddle and park the ball above it with a fresh launch
    /// velocity (random horizontal direction). No-op without a play area.
    pub fn reset_ball_and_paddle(&mut self) {
        let Some(area) = self.area else {
            return;
        };
        self.paddle.x = area.width / 2.0;
        self.paddle.clamp_to(&area, self.tuning.half_paddle_width());

        let dx = if self.rng.random_bool(0.5) {
            self.tuning.launch_dx
        } else {
            -self.tuning.launch_dx
        };
        self.ball = Ball {
            pos: Vec2::new(
                area.width / 2.0,
                area.paddle_top(&self.tuning) - self.tuning.ball_size,
            ),
            vel: Vec2::new(dx, self.tuning.launch_dy),
        };
    }

    /// Move the paddle toward a pointer x (container coordinates).
    ///
    /// Takes effect immediately, independent of the tick rate. The value is
    /// clamped whenever the area is known.
    pub fn set_paddle_target(&mut self, x: f32) {
        if !x.is_finite() {
            return;
        }
        self.paddle.x = x;
        if let Some(area) = self.area {
            self.paddle.clamp_to(&area, self.tuning.half_paddle_width());
        }
    }

    /// Fresh round: full lives, zero score, new bricks, back to `Ready`
    pub(crate) fn start_round(&mut self) {
        self.lives = self.tuning.initial_lives;
        self.score = 0;
        self.time_ticks = 0;
        self.bricks = BrickGrid::generate(&mut self.rng, &self.tuning);
        self.reset_ball_and_paddle();
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot<'_> {
        let (container_width, container_height) =
            self.area.map_or((0.0, 0.0), |a| (a.width, a.height));
        Snapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            paddle_x: self.paddle.x,
            ball: BallPosition {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
            },
            brick_grid: &self.bricks,
            container_width,
            container_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallPosition {
    pub x: f32,
    pub y: f32,
}

/// What the presentation layer reads each frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub paddle_x: f32,
    pub ball: BallPosition,
    pub brick_grid: &'a BrickGrid,
    /// Zero until the play area has been measured
    pub container_width: f32,
    pub container_height: f32,
}

impl Snapshot<'_> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
