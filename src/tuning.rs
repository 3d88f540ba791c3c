//! Data-driven game balance
//!
//! The shipped game always runs with `Tuning::default()`, which mirrors
//! `crate::consts`. Custom tunings exist for tests and balancing experiments.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub rows: usize,
    pub cols: usize,
    pub brick_gap: f32,
    pub brick_aspect: f32,
    /// How much sparser the bottom row is than the top row (0 = uniform)
    pub row_falloff: f32,
    pub max_grid_attempts: u32,
    pub initial_lives: u8,
    pub points_per_brick: u32,
    pub ball_size: f32,
    pub launch_dx: f32,
    pub launch_dy: f32,
    pub deflection_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_offset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            brick_gap: BRICK_GAP,
            brick_aspect: BRICK_ASPECT,
            row_falloff: ROW_FALLOFF,
            max_grid_attempts: MAX_GRID_ATTEMPTS,
            initial_lives: INITIAL_LIVES,
            points_per_brick: POINTS_PER_BRICK,
            ball_size: BALL_SIZE,
            launch_dx: LAUNCH_DX,
            launch_dy: LAUNCH_DY,
            deflection_speed: DEFLECTION_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
        }
    }
}

/// Why a tuning was rejected
#[derive(Debug)]
pub enum TuningError {
    Parse(serde_json::Error),
    EmptyGrid { rows: usize, cols: usize },
    NoLives,
    NonPositive { field: &'static str, value: f32 },
    FalloffOutOfRange { value: f32 },
    LaunchNotUpward { dy: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid tuning document: {err}"),
            Self::EmptyGrid { rows, cols } => {
                write!(f, "brick grid must have rows and columns: got {rows}x{cols}")
            }
            Self::NoLives => write!(f, "initial lives must be at least 1"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be a positive finite number, got {value}")
            }
            Self::FalloffOutOfRange { value } => {
                write!(f, "row falloff must lie in [0, 1], got {value}")
            }
            Self::LaunchNotUpward { dy } => {
                write!(f, "launch dy must be negative (upward), got {dy}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(TuningError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.initial_lives == 0 {
            return Err(TuningError::NoLives);
        }

        let positive = [
            ("brick_aspect", self.brick_aspect),
            ("ball_size", self.ball_size),
            ("deflection_speed", self.deflection_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        // Gap, offset and horizontal launch speed may be zero
        let non_negative = [
            ("brick_gap", self.brick_gap),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("launch_dx", self.launch_dx),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.row_falloff) {
            return Err(TuningError::FalloffOutOfRange {
                value: self.row_falloff,
            });
        }
        if !(self.launch_dy.is_finite() && self.launch_dy < 0.0) {
            return Err(TuningError::LaunchNotUpward { dy: self.launch_dy });
        }
        Ok(())
    }

    /// Half the ball's diameter
    pub fn ball_radius(&self) -> f32 {
        self.ball_size / 2.0
    }

    pub fn half_paddle_width(&self) -> f32 {
        self.paddle_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.rows, 8);
        assert_eq!(tuning.cols, 14);
        assert_eq!(tuning.initial_lives, 3);
        assert_eq!(tuning.points_per_brick, 10);
        assert_eq!(tuning.ball_radius(), 8.0);
        assert_eq!(tuning.half_paddle_width(), 60.0);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_document() {
        let tuning = Tuning::from_json(r#"{ "rows": 2, "cols": 3 }"#).unwrap();
        assert_eq!(tuning.rows, 2);
        assert_eq!(tuning.cols, 3);
        assert_eq!(tuning.paddle_width, PADDLE_WIDTH);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "rows": 0 }"#),
            Err(TuningError::EmptyGrid { rows: 0, .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "initial_lives": 0 }"#),
            Err(TuningError::NoLives)
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "ball_size": -1.0 }"#),
            Err(TuningError::NonPositive { field: "ball_size", .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "row_falloff": 1.5 }"#),
            Err(TuningError::FalloffOutOfRange { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "launch_dy": 5.0 }"#),
            Err(TuningError::LaunchNotUpward { .. })
        ));
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = TuningError::EmptyGrid { rows: 0, cols: 14 };
        assert_eq!(
            err.to_string(),
            "brick grid must have rows and columns: got 0x14"
        );
    }
}
