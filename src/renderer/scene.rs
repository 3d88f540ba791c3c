//! Frame composition from a simulation snapshot

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{Aabb, BrickLayout, GamePhase, Paddle, PlayArea, Snapshot};
use crate::tuning::Tuning;

const BALL_SEGMENTS: u32 = 24;

/// Build the vertex list for one frame, in play-area pixels.
///
/// Paused games draw nothing (the screen goes black until play resumes), as
/// does a game whose play area hasn't been measured.
pub fn build(snapshot: &Snapshot<'_>, tuning: &Tuning) -> Vec<Vertex> {
    if snapshot.phase == GamePhase::Paused {
        return Vec::new();
    }
    let Some(area) = PlayArea::measure(snapshot.container_width, snapshot.container_height, tuning)
    else {
        return Vec::new();
    };

    let grid = snapshot.brick_grid;
    let mut vertices = Vec::with_capacity(6 * (grid.remaining() + 4) + BALL_SEGMENTS as usize * 6);

    vertices.extend(shapes::rect(
        &Aabb::new(0.0, 0.0, area.width, area.height),
        colors::PLAY_AREA,
    ));

    let layout = BrickLayout::new(area.width, grid.cols(), tuning);
    for (row, col, color) in grid.bricks() {
        vertices.extend(shapes::rect(&layout.rect(row, col), color.rgba()));
    }

    let paddle = Paddle {
        x: snapshot.paddle_x,
    }
    .rect(&area, tuning);
    vertices.extend(shapes::halo(&paddle, 4.0, colors::PADDLE_GLOW));
    vertices.extend(shapes::rect(&paddle, colors::PADDLE));

    let ball = Vec2::new(snapshot.ball.x, snapshot.ball.y);
    let radius = tuning.ball_radius();
    vertices.extend(shapes::circle(ball, radius * 1.6, colors::BALL_GLOW, BALL_SEGMENTS));
    vertices.extend(shapes::circle(ball, radius, colors::BALL, BALL_SEGMENTS));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{BrickColor, BrickGrid, GameState};

    #[test]
    fn test_scene_counts() {
        let mut state = GameState::new(1);
        state.resize(800.0, 514.0);
        state.bricks = BrickGrid::filled(2, 14, BrickColor::Cyan);
        let tuning = state.tuning.clone();
        let verts = build(&state.snapshot(), &tuning);
        // panel + 28 bricks + paddle halo + paddle, then two circles
        assert_eq!(verts.len(), 6 * (1 + 28 + 2) + 2 * 3 * BALL_SEGMENTS as usize);
        assert!(verts.iter().any(|v| v.color == BrickColor::Cyan.rgba()));
    }

    #[test]
    fn test_scene_empty_when_paused_or_unmeasured() {
        let state = GameState::new(1);
        assert!(build(&state.snapshot(), &state.tuning).is_empty());

        let mut state = GameState::new(1);
        state.resize(800.0, 514.0);
        state.request_launch();
        state.request_pause();
        assert!(build(&state.snapshot(), &state.tuning).is_empty());
    }
}
