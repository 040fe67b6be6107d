use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ui::NerdFont;

/// Menu entries accepted at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Update,
    Remove,
    Quit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::List,
        Action::Add,
        Action::Update,
        Action::Remove,
        Action::Quit,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Add => "add",
            Action::Update => "update",
            Action::Remove => "remove",
            Action::Quit => "quit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::List => "show all users",
            Action::Add => "add new user to the list",
            Action::Update => "update user",
            Action::Remove => "remove user from the list",
            Action::Quit => "quit the app",
        }
    }

    pub fn icon(self) -> NerdFont {
        match self {
            Action::List => NerdFont::List,
            Action::Add => NerdFont::UserPlus,
            Action::Update => NerdFont::Edit,
            Action::Remove => NerdFont::UserMinus,
            Action::Quit => NerdFont::SignOut,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Command not found: '{0}'")]
pub struct UnknownCommand(pub String);

impl FromStr for Action {
    type Err = UnknownCommand;

    /// Surrounding whitespace is ignored; the token itself must match exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Action::ALL
            .into_iter()
            .find(|a| a.token() == token)
            .ok_or_else(|| UnknownCommand(token.to_string()))
    }
}
