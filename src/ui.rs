//! Screen navigation and overlay text
//!
//! The DOM does the drawing; this module decides what it shows.

use crate::sim::GamePhase;

/// Title shown on the main menu
pub const TITLE: &str = "BR!CK";
/// Acknowledgement shown when the player picks "EXIT"
pub const EXIT_MESSAGE: &str = "Thanks for playing!";
/// Placeholder text on the level-select screen
pub const LEVELS_MESSAGE: &str = "More levels coming soon!";

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Game,
    Levels,
}

/// Menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Levels,
    Exit,
    Back,
}

/// Result of a navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub screen: Screen,
    /// Message the host should acknowledge (an alert in the browser)
    pub message: Option<&'static str>,
    /// Entering the game from the menu always starts over
    pub new_game: bool,
}

impl Screen {
    pub fn navigate(self, action: MenuAction) -> Navigation {
        let (screen, message) = match (self, action) {
            (Screen::Menu, MenuAction::Start) => (Screen::Game, None),
            (Screen::Menu, MenuAction::Levels) => (Screen::Levels, None),
            (Screen::Menu, MenuAction::Exit) => (Screen::Menu, Some(EXIT_MESSAGE)),
            (Screen::Game | Screen::Levels, MenuAction::Back) => (Screen::Menu, None),
            (screen, _) => (screen, None),
        };
        Navigation {
            screen,
            message,
            new_game: self == Screen::Menu && screen == Screen::Game,
        }
    }
}

/// Full-screen prompt drawn over the play area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub prompt: &'static str,
    /// Shown on game over / win
    pub final_score: Option<u32>,
}

impl Overlay {
    /// Overlay for the current phase; `None` while playing or paused
    pub fn for_phase(phase: GamePhase, lives: u8, initial_lives: u8, score: u32) -> Option<Self> {
        let overlay = match phase {
            GamePhase::Playing | GamePhase::Paused => return None,
            GamePhase::Ready => Overlay {
                title: if lives < initial_lives {
                    "TRY AGAIN"
                } else {
                    "GET READY"
                },
                prompt: "CLICK OR TOUCH TO LAUNCH",
                final_score: None,
            },
            GamePhase::GameOver => Overlay {
                title: "GAME OVER",
                prompt: "PLAY AGAIN",
                final_score: Some(score),
            },
            GamePhase::Win => Overlay {
                title: "YOU WIN!",
                prompt: "PLAY AGAIN",
                final_score: Some(score),
            },
        };
        Some(overlay)
    }
}

/// Paused play goes fully black: no HUD, no back button
pub fn hud_visible(phase: GamePhase) -> bool {
    phase != GamePhase::Paused
}

/// HUD line labels
pub fn score_label(score: u32) -> String {
    format!("SCORE: {score}")
}

pub fn lives_label(lives: u8) -> String {
    format!("LIVES: {lives}")
}

/// Accessibility labels for the HUD lines
pub fn score_aria_label(score: u32) -> String {
    format!("Current score: {score}")
}

pub fn lives_aria_label(lives: u8) -> String {
    format!("Lives remaining: {lives}")
}

/// Score line on the game-over and win overlays
pub fn final_score_label(score: u32) -> String {
    format!("Final Score: {score}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_menu_navigation() {
        let nav = Screen::Menu.navigate(MenuAction::Start);
        assert_eq!(nav.screen, Screen::Game);
        assert_eq!(nav.message, None);
        assert!(nav.new_game);

        let nav = Screen::Menu.navigate(MenuAction::Levels);
        assert_eq!(nav.screen, Screen::Levels);

        let nav = Screen::Menu.navigate(MenuAction::Exit);
        assert_eq!(nav.screen, Screen::Menu);
        assert_eq!(nav.message, Some("Thanks for playing!"));

        assert_eq!(Screen::Game.navigate(MenuAction::Back).screen, Screen::Menu);
        assert_eq!(Screen::Levels.navigate(MenuAction::Back).screen, Screen::Menu);
        assert_eq!(Screen::Game.navigate(MenuAction::Start).screen, Screen::Game);
    }

    #[test]
    fn test_back_then_start_gives_fresh_game() {
        let mut state = GameState::new(5);
        state.resize(800.0, 514.0);
        let mut screen = Screen::Menu.navigate(MenuAction::Start).screen;
        state.request_launch();
        state.lives = 1;
        state.score = 230;
        state.bricks.remove(0, 0);

        let nav = screen.navigate(MenuAction::Back);
        assert!(!nav.new_game);
        screen = nav.screen;
        assert_eq!(screen, Screen::Menu);

        let nav = screen.navigate(MenuAction::Start);
        assert!(nav.new_game);
        if nav.new_game {
            state.new_game();
        }
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.paddle.x, 400.0);
        assert!(state.bricks.remaining() > 0);

        // Navigation that stays put never resets
        assert!(!Screen::Menu.navigate(MenuAction::Exit).new_game);
        assert!(!Screen::Levels.navigate(MenuAction::Back).new_game);
    }

    #[test]
    fn test_overlay_ready_titles() {
        let fresh = Overlay::for_phase(GamePhase::Ready, 3, 3, 0).unwrap();
        assert_eq!(fresh.title, "GET READY");
        assert_eq!(fresh.prompt, "CLICK OR TOUCH TO LAUNCH");
        assert_eq!(fresh.final_score, None);

        let retry = Overlay::for_phase(GamePhase::Ready, 2, 3, 40).unwrap();
        assert_eq!(retry.title, "TRY AGAIN");
    }

    #[test]
    fn test_overlay_end_states_show_score() {
        let over = Overlay::for_phase(GamePhase::GameOver, 0, 3, 90).unwrap();
        assert_eq!(over.title, "GAME OVER");
        assert_eq!(over.prompt, "PLAY AGAIN");
        assert_eq!(over.final_score, Some(90));

        let win = Overlay::for_phase(GamePhase::Win, 2, 3, 700).unwrap();
        assert_eq!(win.title, "YOU WIN!");
        assert_eq!(win.final_score, Some(700));
    }

    #[test]
    fn test_no_overlay_during_play() {
        assert!(Overlay::for_phase(GamePhase::Playing, 3, 3, 0).is_none());
        assert!(Overlay::for_phase(GamePhase::Paused, 3, 3, 0).is_none());
    }

    #[test]
    fn test_hud_labels() {
        assert_eq!(score_label(120), "SCORE: 120");
        assert_eq!(lives_label(2), "LIVES: 2");
        assert_eq!(score_aria_label(40), "Current score: 40");
        assert_eq!(lives_aria_label(1), "Lives remaining: 1");
        assert_eq!(final_score_label(1120), "Final Score: 1120");
    }

    #[test]
    fn test_hud_hidden_only_while_paused() {
        assert!(!hud_visible(GamePhase::Paused));
        for phase in [
            GamePhase::Ready,
            GamePhase::Playing,
            GamePhase::GameOver,
            GamePhase::Win,
        ] {
            assert!(hud_visible(phase));
        }
    }
}
