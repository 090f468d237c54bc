//! Front-end menu state
//!
//! Tracks which screen is showing and where the menu pointer is. Drawing is
//! left to the host; [`MenuState::lines`] gives the text of the current
//! screen.

use tetra4d_core::Difficulty;

/// Title shown above the menu
pub const TITLE: &str = "TetraTris";

/// Controls listed on the help screen
pub const HELP_LINES: [&str; 4] = [
    "Arrow Keys: Camera",
    "z,x,c,v: Rotate piece",
    "Return: Drop piece",
    "Ok",
];

/// Selectable menu entries, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Play,
    Difficulty,
    Help,
    Exit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 4] = [
        MenuEntry::Play,
        MenuEntry::Difficulty,
        MenuEntry::Help,
        MenuEntry::Exit,
    ];

    /// Display text, with the current difficulty filled in
    pub fn label(self, difficulty: Difficulty) -> String {
        match self {
            MenuEntry::Play => "Play".to_string(),
            MenuEntry::Difficulty => format!("Difficulty = {}", difficulty.label()),
            MenuEntry::Help => "Help".to_string(),
            MenuEntry::Exit => "Exit".to_string(),
        }
    }
}

/// Which screen the front end is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Menu,
    Help,
    /// The board, while playing or after game over
    Game,
}

/// What a confirm press asks the application to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Only the menu display changed
    Redraw,
    StartGame,
    CycleDifficulty,
    Exit,
}

/// Menu pointer and current screen
#[derive(Clone, Debug, Default)]
pub struct MenuState {
    pointer: usize,
    screen: Screen,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    #[inline]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The entry under the pointer
    pub fn selected(&self) -> MenuEntry {
        MenuEntry::ALL[self.pointer]
    }

    /// Move the pointer up; returns whether it moved
    pub fn move_up(&mut self) -> bool {
        if self.screen != Screen::Menu || self.pointer == 0 {
            return false;
        }
        self.pointer -= 1;
        true
    }

    /// Move the pointer down; returns whether it moved
    pub fn move_down(&mut self) -> bool {
        if self.screen != Screen::Menu || self.pointer + 1 >= MenuEntry::ALL.len() {
            return false;
        }
        self.pointer += 1;
        true
    }

    /// Activate the selected entry
    ///
    /// On the help screen this dismisses help; on the game screen (after game
    /// over) it returns to the menu.
    pub fn confirm(&mut self) -> MenuOutcome {
        match self.screen {
            Screen::Help | Screen::Game => {
                self.screen = Screen::Menu;
                MenuOutcome::Redraw
            }
            Screen::Menu => match self.selected() {
                MenuEntry::Play => {
                    self.screen = Screen::Game;
                    MenuOutcome::StartGame
                }
                MenuEntry::Difficulty => MenuOutcome::CycleDifficulty,
                MenuEntry::Help => {
                    self.screen = Screen::Help;
                    MenuOutcome::Redraw
                }
                MenuEntry::Exit => MenuOutcome::Exit,
            },
        }
    }

    /// Text of the current menu or help screen, with the highlighted line index
    ///
    /// Returns `None` on the game screen.
    pub fn lines(&self, difficulty: Difficulty) -> Option<(Vec<String>, usize)> {
        match self.screen {
            Screen::Menu => {
                let mut lines = vec![TITLE.to_string()];
                lines.extend(MenuEntry::ALL.iter().map(|e| e.label(difficulty)));
                Some((lines, self.pointer + 1))
            }
            Screen::Help => {
                let lines = HELP_LINES.iter().map(|l| l.to_string()).collect();
                Some((lines, HELP_LINES.len() - 1))
            }
            Screen::Game => None,
        }
    }
}
