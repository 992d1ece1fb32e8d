//! Screen flow state machine
//!
//! Replaces the blocking start/pause/game-over menu loops with an explicit
//! machine stepped once per tick. Restarting never re-enters the game loop;
//! the driver builds a fresh session whenever dispatch asks for one.

/// Which screen is currently in control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen, waiting for the player to start
    Start,
    /// A session is live and ticking
    Playing,
    /// Session frozen; no session ticks run
    Paused,
    /// Session finished with the given final score
    GameOver { score: u32 },
}

/// One menu input, dispatched at most once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Enter: start / restart / resume
    Confirm,
    /// Escape: quit from Start or GameOver
    Back,
    /// P: pause toggle while a session is live
    TogglePause,
}

/// What the driver must do after a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCommand {
    /// Nothing beyond the screen change (if any)
    None,
    /// Build a fresh session, then tick it while `Screen::Playing`
    NewSession,
    /// Tear down and exit
    Quit,
}

/// The screen flow machine
#[derive(Debug, Clone, Copy)]
pub struct Flow {
    pub screen: Screen,
}

impl Default for Flow {
    fn default() -> Self {
        Self {
            screen: Screen::Start,
        }
    }
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one menu event against the current screen
    pub fn dispatch(&mut self, event: MenuEvent) -> FlowCommand {
        match (self.screen, event) {
            (Screen::Start, MenuEvent::Confirm) => {
                self.screen = Screen::Playing;
                FlowCommand::NewSession
            }
            (Screen::Start, MenuEvent::Back) => FlowCommand::Quit,

            (Screen::Playing, MenuEvent::TogglePause) => {
                self.screen = Screen::Paused;
                FlowCommand::None
            }
            (Screen::Paused, MenuEvent::TogglePause) | (Screen::Paused, MenuEvent::Confirm) => {
                self.screen = Screen::Playing;
                FlowCommand::None
            }

            (Screen::GameOver { .. }, MenuEvent::Confirm) => {
                self.screen = Screen::Playing;
                FlowCommand::NewSession
            }
            (Screen::GameOver { .. }, MenuEvent::Back) => FlowCommand::Quit,

            _ => FlowCommand::None,
        }
    }

    /// Report a finished session; moves to the game-over screen
    pub fn session_over(&mut self, score: u32) {
        if self.screen == Screen::Playing {
            self.screen = Screen::GameOver { score };
        }
    }

    /// Whether session ticks should run this frame
    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_confirm_begins_session() {
        let mut flow = Flow::new();
        assert_eq!(flow.screen, Screen::Start);
        assert_eq!(flow.dispatch(MenuEvent::Confirm), FlowCommand::NewSession);
        assert!(flow.is_playing());
    }

    #[test]
    fn test_pause_roundtrip() {
        let mut flow = Flow::new();
        flow.dispatch(MenuEvent::Confirm);

        assert_eq!(flow.dispatch(MenuEvent::TogglePause), FlowCommand::None);
        assert_eq!(flow.screen, Screen::Paused);
        assert!(!flow.is_playing());

        flow.dispatch(MenuEvent::TogglePause);
        assert!(flow.is_playing());
    }

    #[test]
    fn test_game_over_carries_score() {
        let mut flow = Flow::new();
        flow.dispatch(MenuEvent::Confirm);
        flow.session_over(17);
        assert_eq!(flow.screen, Screen::GameOver { score: 17 });
    }

    #[test]
    fn test_session_over_ignored_unless_playing() {
        let mut flow = Flow::new();
        flow.session_over(5);
        assert_eq!(flow.screen, Screen::Start);
    }

    #[test]
    fn test_repeated_restarts_stay_flat() {
        // The original re-entered the game loop recursively on each restart;
        // here every restart is just another NewSession command.
        let mut flow = Flow::new();
        flow.dispatch(MenuEvent::Confirm);
        for round in 0..1000 {
            flow.session_over(round);
            assert_eq!(flow.dispatch(MenuEvent::Confirm), FlowCommand::NewSession);
            assert!(flow.is_playing());
        }
    }

    #[test]
    fn test_back_quits_from_terminal_screens() {
        let mut flow = Flow::new();
        assert_eq!(flow.dispatch(MenuEvent::Back), FlowCommand::Quit);

        flow.dispatch(MenuEvent::Confirm);
        flow.session_over(3);
        assert_eq!(flow.dispatch(MenuEvent::Back), FlowCommand::Quit);
    }
}
