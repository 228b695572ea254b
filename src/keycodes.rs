use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Engine key codes this tool emits or accepts in keymap files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Punctuation
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
    Hyphen,
    EqualSign,
    OpenBracket,
    CloseBracket,
    GraveAccentAndTilde,

    // Editing & navigation
    Spacebar,
    Tab,
    Escape,
    ReturnOrEnter,
    CapsLock,
    DeleteOrBackspace,
    DeleteForward,
    Home,
    End,
    PageUp,
    PageDown,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,

    // Modifiers
    LeftCommand,
    LeftControl,
    LeftOption,
    LeftShift,
    RightCommand,
    RightControl,
    RightOption,
    RightShift,
}

impl KeyCode {
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::LeftCommand
                | Self::LeftControl
                | Self::LeftOption
                | Self::LeftShift
                | Self::RightCommand
                | Self::RightControl
                | Self::RightOption
                | Self::RightShift
        )
    }
}

/// Modifier names accepted in `from.modifiers` and `to.modifiers`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ModifierKey {
    LeftCommand,
    LeftControl,
    LeftOption,
    LeftShift,
    RightCommand,
    RightControl,
    RightOption,
    RightShift,

    // Side-less forms only make sense in `from` filters
    Command,
    Control,
    Option,
    Shift,
    Any,
}

impl ModifierKey {
    /// The physical key behind a sided modifier, `None` for side-less forms.
    pub fn key_code(&self) -> Option<KeyCode> {
        match self {
            Self::LeftCommand => Some(KeyCode::LeftCommand),
            Self::LeftControl => Some(KeyCode::LeftControl),
            Self::LeftOption => Some(KeyCode::LeftOption),
            Self::LeftShift => Some(KeyCode::LeftShift),
            Self::RightCommand => Some(KeyCode::RightCommand),
            Self::RightControl => Some(KeyCode::RightControl),
            Self::RightOption => Some(KeyCode::RightOption),
            Self::RightShift => Some(KeyCode::RightShift),
            Self::Command | Self::Control | Self::Option | Self::Shift | Self::Any => None,
        }
    }

    pub fn is_sided(&self) -> bool {
        self.key_code().is_some()
    }
}

/// Shift + Control + Option.
pub const MEH: [ModifierKey; 3] = [
    ModifierKey::LeftShift,
    ModifierKey::LeftControl,
    ModifierKey::LeftOption,
];

/// Shift + Control + Option + Command.
pub const HYPER: [ModifierKey; 4] = [
    ModifierKey::LeftShift,
    ModifierKey::LeftControl,
    ModifierKey::LeftOption,
    ModifierKey::LeftCommand,
];
