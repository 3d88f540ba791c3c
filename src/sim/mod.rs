//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One step per animation frame, velocities in pixels per tick
//! - Seeded RNG owned by the game state
//! - Input only changes the paddle target and requests phase changes

pub mod geometry;
pub mod grid;
pub mod phase;
pub mod state;
pub mod tick;

pub use geometry::{Aabb, paddle_deflection, reflect_x, reflect_y};
pub use grid::{BrickColor, BrickGrid, BrickLayout};
pub use phase::Trigger;
pub use state::{Ball, BallPosition, GamePhase, GameState, Paddle, PlayArea, Snapshot};
pub use tick::{GameEvent, TickInput, step, tick};
