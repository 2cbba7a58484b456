//! Main menu and level select
//!
//! The menu is a finite state machine: [`transition`] takes the current
//! [`MenuState`] and one input and returns the next state plus an optional
//! action for the caller to carry out. Nothing is held in globals.

/// Labels of the main menu, in display order
pub const MAIN_OPTIONS: [&str; 4] = ["Start Game", "Scoreboard", "Help", "Quit"];

const START_INDEX: usize = 0;
const SCOREBOARD_INDEX: usize = 1;
const HELP_INDEX: usize = 2;

/// Current menu screen and highlighted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main { selected: usize },
    LevelSelect { selected: usize },
}

impl Default for MenuState {
    fn default() -> Self {
        MenuState::Main { selected: 0 }
    }
}

impl MenuState {
    pub fn selected(&self) -> usize {
        match *self {
            MenuState::Main { selected } | MenuState::LevelSelect { selected } => selected,
        }
    }
}

/// Navigation keys understood by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Confirm,
    Back,
}

/// Something the caller must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start the level at this index of the level list
    StartGame(usize),
    ShowScoreboard,
    ShowHelp,
    Quit,
}

/// Advance the menu by one input
pub fn transition(
    state: MenuState,
    input: MenuInput,
    level_count: usize,
) -> (MenuState, Option<MenuAction>) {
    match state {
        MenuState::Main { selected } => match input {
            MenuInput::Up => (
                MenuState::Main {
                    selected: wrap_prev(selected, MAIN_OPTIONS.len()),
                },
                None,
            ),
            MenuInput::Down => (
                MenuState::Main {
                    selected: wrap_next(selected, MAIN_OPTIONS.len()),
                },
                None,
            ),
            MenuInput::Confirm => match selected {
                START_INDEX => (MenuState::LevelSelect { selected: 0 }, None),
                SCOREBOARD_INDEX => (state, Some(MenuAction::ShowScoreboard)),
                HELP_INDEX => (state, Some(MenuAction::ShowHelp)),
                _ => (state, Some(MenuAction::Quit)),
            },
            MenuInput::Back => (state, None),
        },

        MenuState::LevelSelect { selected } => match input {
            MenuInput::Up => (
                MenuState::LevelSelect {
                    selected: wrap_prev(selected, level_count),
                },
                None,
            ),
            MenuInput::Down => (
                MenuState::LevelSelect {
                    selected: wrap_next(selected, level_count),
                },
                None,
            ),
            MenuInput::Confirm if selected < level_count => (
                MenuState::Main { selected: 0 },
                Some(MenuAction::StartGame(selected)),
            ),
            // Nothing to pick from
            MenuInput::Confirm => (state, None),
            MenuInput::Back => (MenuState::Main { selected: 0 }, None),
        },
    }
}

fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + len - 1) % len }
}

/// Menu state bundled with the level names it selects from
#[derive(Debug, Clone)]
pub struct Menu {
    pub state: MenuState,
    levels: Vec<String>,
}

impl Menu {
    pub fn new(levels: Vec<String>) -> Self {
        Self {
            state: MenuState::default(),
            levels,
        }
    }

    /// Labels for the current screen
    pub fn options(&self) -> Vec<&str> {
        match self.state {
            MenuState::Main { .. } => MAIN_OPTIONS.to_vec(),
            MenuState::LevelSelect { .. } => self.levels.iter().map(String::as_str).collect(),
        }
    }

    /// Feed one input; returns the action to perform, if any
    pub fn handle(&mut self, input: MenuInput) -> Option<MenuAction> {
        let (next, action) = transition(self.state, input, self.levels.len());
        self.state = next;
        action
    }

    /// Name of the level behind a `StartGame` index
    pub fn level_name(&self, index: usize) -> Option<&str> {
        self.levels.get(index).map(String::as_str)
    }
}
