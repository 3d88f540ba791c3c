//! BR!CK - A Breakout arcade game
//!
//! Core modules:
//! - `sim`: Simulation (brick grid, collisions, game phases)
//! - `tuning`: Data-driven game balance
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser input translation
//! - `ui`: Screen navigation and overlay text

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Brick grid dimensions
    pub const GRID_ROWS: usize = 8;
    pub const GRID_COLS: usize = 14;
    /// Horizontal and vertical gap between bricks
    pub const BRICK_GAP: f32 = 6.0;
    /// Brick width / height
    pub const BRICK_ASPECT: f32 = 2.5;
    /// Presence probability drops by this much from the top row to the bottom row
    pub const ROW_FALLOFF: f32 = 0.7;
    /// Attempts before grid generation forces a brick in
    pub const MAX_GRID_ATTEMPTS: u32 = 32;

    pub const INITIAL_LIVES: u8 = 3;
    pub const POINTS_PER_BRICK: u32 = 10;

    /// Ball diameter (the ball collides as its enclosing square)
    pub const BALL_SIZE: f32 = 16.0;
    /// Launch velocity in units per tick: |dx| with a random sign, and dy (upward)
    pub const LAUNCH_DX: f32 = 4.0;
    pub const LAUNCH_DY: f32 = -5.0;
    /// Horizontal speed when the ball leaves the paddle's extreme edge
    pub const DEFLECTION_SPEED: f32 = 5.0;

    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the play area's bottom edge to the paddle's bottom edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;
}
