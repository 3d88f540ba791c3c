//! Per-frame simulation tick
//!
//! Velocities are in pixels per tick and the host calls `tick` once per
//! animation frame, so there is no timestep parameter.

use glam::Vec2;

use super::geometry::{Aabb, paddle_deflection, reflect_x, reflect_y};
use super::grid::{BrickColor, BrickLayout};
use super::phase::Trigger;
use super::state::{GamePhase, GameState};

/// Input gathered between two ticks
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer x in container coordinates
    pub paddle_x: Option<f32>,
    /// Launch the ball (click/tap on the overlay, touch start)
    pub launch: bool,
    /// Touch lifted
    pub pause: bool,
    /// Touch pressed again
    pub resume: bool,
    /// "Play again"
    pub restart: bool,
    /// Demo mode - the paddle follows the ball
    pub idle_mode: bool,
}

impl TickInput {
    /// Drop one-shot triggers once a tick has consumed them
    pub fn clear_triggers(&mut self) {
        self.launch = false;
        self.pause = false;
        self.resume = false;
        self.restart = false;
    }
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    WallBounce,
    CeilingBounce,
    PaddleHit { dx: f32 },
    BrickDestroyed { row: usize, col: usize, color: BrickColor },
    LifeLost { remaining: u8 },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let phase_before = state.phase;

    let mut input = input.clone();
    if input.idle_mode {
        match state.phase {
            GamePhase::Ready => input.launch = true,
            GamePhase::Playing => input.paddle_x = Some(state.ball.pos.x),
            GamePhase::GameOver | GamePhase::Win => input.restart = true,
            GamePhase::Paused => {}
        }
    }

    if let Some(x) = input.paddle_x {
        state.set_paddle_target(x);
    }

    let triggers = [
        (input.restart, Trigger::Restart),
        (input.launch, Trigger::Launch),
        (input.resume, Trigger::Resume),
        (input.pause, Trigger::Pause),
    ];
    for (requested, trigger) in triggers {
        if requested {
            state.handle(trigger);
        }
    }

    if state.phase == GamePhase::Playing {
        step(state, &mut events);
        state.check_win();
    }

    if state.phase != phase_before {
        events.push(GameEvent::PhaseChanged {
            from: phase_before,
            to: state.phase,
        });
    }
    events
}

/// One simulation step: move, bounce, lose a life or break one brick
///
/// Skipped entirely when the play area hasn't been measured yet.
pub fn step(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let Some(area) = state.area else {
        return;
    };
    let tuning = &state.tuning;
    let radius = tuning.ball_radius();

    state.paddle.clamp_to(&area, tuning.half_paddle_width());
    state.time_ticks += 1;

    let mut vel = state.ball.vel;
    let mut pos = state.ball.pos + vel;

    // Side walls
    if pos.x <= radius || pos.x >= area.width - radius {
        vel = reflect_x(vel);
        events.push(GameEvent::WallBounce);
    }
    pos.x = pos.x.clamp(radius, area.width - radius);

    // Ceiling
    if pos.y <= radius {
        vel = reflect_y(vel);
        pos.y = radius;
        events.push(GameEvent::CeilingBounce);
    }

    // Paddle, only on the way down
    let paddle = state.paddle.rect(&area, tuning);
    let ball_box = |pos: Vec2| Aabb::around(pos, radius);
    if vel.y > 0.0 && ball_box(pos).touches(&paddle) {
        vel = reflect_y(vel);
        vel.x = paddle_deflection(
            pos.x,
            state.paddle.x,
            tuning.half_paddle_width(),
            tuning.deflection_speed,
        );
        pos.y = paddle.top() - radius;
        log::debug!("Paddle hit at x={:.1}, dx={:.2}", pos.x, vel.x);
        events.push(GameEvent::PaddleHit { dx: vel.x });
    }

    // Floor: the move is discarded and the ball is re-served or the game ends
    if pos.y + radius > area.height {
        state.lose_life();
        events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });
        return;
    }

    // Bricks: first hit in row-major order, at most one per step
    let layout = BrickLayout::new(area.width, state.bricks.cols(), tuning);
    let hit = state
        .bricks
        .bricks()
        .find(|&(row, col, _)| ball_box(pos).intersects(&layout.rect(row, col)));
    if let Some((row, col, color)) = hit {
        vel = reflect_y(vel);
        state.bricks.remove(row, col);
        state.score += tuning.points_per_brick;
        log::debug!("Brick ({row}, {col}) destroyed, score {}", state.score);
        events.push(GameEvent::BrickDestroyed { row, col, color });
    }

    state.ball.pos = pos;
    state.ball.vel = vel;
}
