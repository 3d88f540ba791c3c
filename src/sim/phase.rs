//! Phase state machine
//!
//! ```text
//! Ready --launch--> Playing --pause--> Paused --resume--> Playing
//! Playing --life lost, lives left--> Ready
//! Playing --life lost, no lives--> GameOver
//! Playing --grid cleared--> Win
//! GameOver | Win --restart--> Ready (fresh round)
//! ```
//!
//! Triggers that don't apply to the current phase are ignored.

use super::state::{GamePhase, GameState};

/// Phase-change requests from the input side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Launch,
    Pause,
    Resume,
    Restart,
}

impl GameState {
    /// Feed a trigger through the state machine. Returns whether it was accepted.
    pub fn handle(&mut self, trigger: Trigger) -> bool {
        let next = match (self.phase, trigger) {
            (GamePhase::Ready, Trigger::Launch) => GamePhase::Playing,
            (GamePhase::Playing, Trigger::Pause) => GamePhase::Paused,
            (GamePhase::Paused, Trigger::Resume) => GamePhase::Playing,
            (GamePhase::GameOver | GamePhase::Win, Trigger::Restart) => {
                self.start_round();
                log::info!("New round: {} bricks", self.bricks.remaining());
                GamePhase::Ready
            }
            _ => {
                log::debug!("Ignoring {:?} while {:?}", trigger, self.phase);
                return false;
            }
        };
        self.set_phase(next);
        true
    }

    pub fn request_launch(&mut self) -> bool {
        self.handle(Trigger::Launch)
    }

    pub fn request_pause(&mut self) -> bool {
        self.handle(Trigger::Pause)
    }

    pub fn request_resume(&mut self) -> bool {
        self.handle(Trigger::Resume)
    }

    pub fn request_restart(&mut self) -> bool {
        self.handle(Trigger::Restart)
    }

    /// Abandon whatever is running and start over in `Ready`, whatever the
    /// current phase. Used when the player re-enters the game from the menu.
    pub fn new_game(&mut self) {
        self.start_round();
        self.set_phase(GamePhase::Ready);
        log::info!("New game: {} bricks", self.bricks.remaining());
    }

    /// Ball fell past the floor: one life gone, then `Ready` or `GameOver`
    pub(crate) fn lose_life(&mut self) -> GamePhase {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.set_phase(GamePhase::GameOver);
        } else {
            self.set_phase(GamePhase::Ready);
            self.reset_ball_and_paddle();
        }
        self.phase
    }

    /// Switch to `Win` once the grid is empty. Only applies while playing.
    pub fn check_win(&mut self) -> bool {
        if self.phase == GamePhase::Playing && self.bricks.is_cleared() {
            self.set_phase(GamePhase::Win);
            return true;
        }
        false
    }

    fn set_phase(&mut self, next: GamePhase) {
        if next != self.phase {
            log::info!(
                "Phase {:?} -> {:?} (score {}, lives {})",
                self.phase,
                next,
                self.score,
                self.lives
            );
        }
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::BrickGrid;

    fn laid_out() -> GameState {
        let mut state = GameState::new(11);
        state.resize(800.0, 514.0);
        state
    }

    #[test]
    fn test_launch_only_from_ready() {
        let mut state = laid_out();
        assert!(state.request_launch());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.request_launch());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pause_and_resume_hold_ball() {
        let mut state = laid_out();
        state.request_launch();
        let ball = state.ball;

        assert!(!state.request_resume());
        assert!(state.request_pause());
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(!state.request_pause());
        assert!(!state.request_launch());

        assert!(state.request_resume());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball, ball);
    }

    #[test]
    fn test_pause_ignored_outside_playing() {
        let mut state = laid_out();
        assert!(!state.request_pause());
        assert_eq!(state.phase, GamePhase::Ready);
    }

    #[test]
    fn test_restart_only_from_terminal_phases() {
        let mut state = laid_out();
        assert!(!state.request_restart());

        state.request_launch();
        assert!(!state.request_restart());

        state.phase = GamePhase::GameOver;
        state.score = 120;
        state.lives = 0;
        state.bricks = BrickGrid::empty(8, 14);
        assert!(state.request_restart());
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert!(state.bricks.remaining() > 0);
    }

    #[test]
    fn test_restart_from_win() {
        let mut state = laid_out();
        state.phase = GamePhase::Win;
        state.score = 50;
        assert!(state.request_restart());
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.paddle.x, 400.0);
    }

    #[test]
    fn test_new_game_from_any_phase() {
        for phase in [GamePhase::Playing, GamePhase::Paused, GamePhase::Ready] {
            let mut state = laid_out();
            state.phase = phase;
            state.score = 70;
            state.lives = 1;
            state.ball.pos.y = 100.0;
            state.new_game();
            assert_eq!(state.phase, GamePhase::Ready);
            assert_eq!(state.score, 0);
            assert_eq!(state.lives, 3);
            assert_eq!(state.ball.pos.y, 448.0);
            assert!(state.area.is_some());
        }
    }

    #[test]
    fn test_lose_life_transitions() {
        let mut state = laid_out();
        state.request_launch();
        assert_eq!(state.lose_life(), GamePhase::Ready);
        assert_eq!(state.lives, 2);

        state.request_launch();
        state.lose_life();
        state.request_launch();
        assert_eq!(state.lose_life(), GamePhase::GameOver);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_check_win_needs_playing_and_empty_grid() {
        let mut state = laid_out();
        state.bricks = BrickGrid::empty(8, 14);
        assert!(!state.check_win());
        assert_eq!(state.phase, GamePhase::Ready);

        state.request_launch();
        assert!(state.check_win());
        assert_eq!(state.phase, GamePhase::Win);
    }
}
