/// Nerd Font icons used by the users shell.
///
/// Codepoints are Font Awesome glyphs, which every Nerd Font patch ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NerdFont {
    // Status and feedback
    Check,
    Cross,
    Info,
    Bug,

    // Users and actions
    UserPlus,
    UserMinus,
    Edit,
    List,
    SignOut,
    Hand,
}

impl NerdFont {
    pub const fn unicode(&self) -> char {
        match self {
            Self::Check => '\u{f00c}',     // fa-check
            Self::Cross => '\u{f00d}',     // fa-times
            Self::Info => '\u{f05a}',      // fa-info-circle
            Self::Bug => '\u{f188}',       // fa-bug
            Self::UserPlus => '\u{f234}',  // fa-user-plus
            Self::UserMinus => '\u{f235}', // fa-user-times
            Self::Edit => '\u{f044}',      // fa-edit
            Self::List => '\u{f03a}',      // fa-list
            Self::SignOut => '\u{f08b}',   // fa-sign-out
            Self::Hand => '\u{f256}',      // fa-hand-paper
        }
    }
}

impl std::fmt::Display for NerdFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unicode())
    }
}

impl From<NerdFont> for char {
    fn from(icon: NerdFont) -> Self {
        icon.unicode()
    }
}
