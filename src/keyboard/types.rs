//! Core keyboard types: Modifiers, KeyCode, Keystroke, KeyEvent

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Ctrl or Meta held; these chords belong to the clipboard shortcuts
    #[inline]
    pub const fn has_shortcut(self) -> bool {
        self.ctrl() || self.meta()
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code representing a logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    // Function keys
    F(u8), // F1-F24

    // Numpad (physical keys)
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadEnter,
    NumpadDecimal,
}

impl KeyCode {
    /// Legacy DOM `keyCode` value for this key on a US layout
    ///
    /// Key classes are configured against these codes so tables written for
    /// browser grids carry over unchanged. Shifted symbols share their base
    /// key's code (`*` is 56, `(` is 57, `+` is 187).
    pub fn legacy_code(self) -> Option<u32> {
        let code = match self {
            KeyCode::Backspace => 8,
            KeyCode::Tab => 9,
            KeyCode::Enter | KeyCode::NumpadEnter => 13,
            KeyCode::Escape => 27,
            KeyCode::Space => 32,
            KeyCode::PageUp => 33,
            KeyCode::PageDown => 34,
            KeyCode::End => 35,
            KeyCode::Home => 36,
            KeyCode::Left => 37,
            KeyCode::Up => 38,
            KeyCode::Right => 39,
            KeyCode::Down => 40,
            KeyCode::Insert => 45,
            KeyCode::Delete => 46,
            KeyCode::F(n) if (1..=24).contains(&n) => 111 + u32::from(n),
            KeyCode::F(_) => return None,
            KeyCode::Numpad0 => 96,
            KeyCode::Numpad1 => 97,
            KeyCode::Numpad2 => 98,
            KeyCode::Numpad3 => 99,
            KeyCode::Numpad4 => 100,
            KeyCode::Numpad5 => 101,
            KeyCode::Numpad6 => 102,
            KeyCode::Numpad7 => 103,
            KeyCode::Numpad8 => 104,
            KeyCode::Numpad9 => 105,
            KeyCode::NumpadMultiply => 106,
            KeyCode::NumpadAdd => 107,
            KeyCode::NumpadSubtract => 109,
            KeyCode::NumpadDecimal => 110,
            KeyCode::NumpadDivide => 111,
            KeyCode::Char(c) => return char_legacy_code(c),
        };
        Some(code)
    }
}

fn char_legacy_code(c: char) -> Option<u32> {
    let code = match c.to_ascii_lowercase() {
        d @ '0'..='9' => 48 + (d as u32 - '0' as u32),
        l @ 'a'..='z' => 65 + (l as u32 - 'a' as u32),
        ')' => 48,
        '!' => 49,
        '@' => 50,
        '#' => 51,
        '$' => 52,
        '%' => 53,
        '^' => 54,
        '&' => 55,
        '*' => 56,
        '(' => 57,
        ' ' => 32,
        ';' | ':' => 186,
        '=' | '+' => 187,
        ',' | '<' => 188,
        '-' | '_' => 189,
        '.' | '>' => 190,
        '/' | '?' => 191,
        '`' | '~' => 192,
        '[' | '{' => 219,
        '\\' | '|' => 220,
        ']' | '}' => 221,
        '\'' | '"' => 222,
        _ => return None,
    };
    Some(code)
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Insert => write!(f, "Insert"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Numpad0 => write!(f, "Num0"),
            KeyCode::Numpad1 => write!(f, "Num1"),
            KeyCode::Numpad2 => write!(f, "Num2"),
            KeyCode::Numpad3 => write!(f, "Num3"),
            KeyCode::Numpad4 => write!(f, "Num4"),
            KeyCode::Numpad5 => write!(f, "Num5"),
            KeyCode::Numpad6 => write!(f, "Num6"),
            KeyCode::Numpad7 => write!(f, "Num7"),
            KeyCode::Numpad8 => write!(f, "Num8"),
            KeyCode::Numpad9 => write!(f, "Num9"),
            KeyCode::NumpadAdd => write!(f, "Num+"),
            KeyCode::NumpadSubtract => write!(f, "Num-"),
            KeyCode::NumpadMultiply => write!(f, "Num*"),
            KeyCode::NumpadDivide => write!(f, "Num/"),
            KeyCode::NumpadEnter => write!(f, "NumEnter"),
            KeyCode::NumpadDecimal => write!(f, "Num."),
        }
    }
}

/// A single keystroke: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character key
    pub fn char(c: char) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods: Modifiers::NONE,
        }
    }

    pub fn is_tab(&self) -> bool {
        self.key == KeyCode::Tab
    }

    pub fn is_enter(&self) -> bool {
        matches!(self.key, KeyCode::Enter | KeyCode::NumpadEnter)
    }

    pub fn is_escape(&self) -> bool {
        self.key == KeyCode::Escape
    }

    pub fn is_delete(&self) -> bool {
        matches!(self.key, KeyCode::Delete | KeyCode::Backspace)
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// A keystroke delivered to the grid, with the ability to suppress the
/// host's default handling of the key
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub keystroke: Keystroke,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(keystroke: Keystroke) -> Self {
        Self {
            keystroke,
            default_prevented: false,
        }
    }

    pub fn key(&self) -> KeyCode {
        self.keystroke.key
    }

    pub fn mods(&self) -> Modifiers {
        self.keystroke.mods
    }

    /// Stop the host from also acting on this key (scrolling, focus change)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl From<Keystroke> for KeyEvent {
    fn from(keystroke: Keystroke) -> Self {
        Self::new(keystroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_empty() {
        let mods = Modifiers::NONE;
        assert!(mods.is_empty());
        assert!(!mods.ctrl());
        assert!(!mods.shift());
        assert!(!mods.has_shortcut());
    }

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());
        assert!(mods.has_shortcut());
        assert!(Modifiers::META.has_shortcut());
    }

    #[test]
    fn test_legacy_codes_named() {
        assert_eq!(KeyCode::Tab.legacy_code(), Some(9));
        assert_eq!(KeyCode::Enter.legacy_code(), Some(13));
        assert_eq!(KeyCode::Escape.legacy_code(), Some(27));
        assert_eq!(KeyCode::Delete.legacy_code(), Some(46));
        assert_eq!(KeyCode::Backspace.legacy_code(), Some(8));
        assert_eq!(KeyCode::F(1).legacy_code(), Some(112));
    }

    #[test]
    fn test_legacy_codes_chars() {
        assert_eq!(KeyCode::Char('0').legacy_code(), Some(48));
        assert_eq!(KeyCode::Char('a').legacy_code(), Some(65));
        assert_eq!(KeyCode::Char('Z').legacy_code(), Some(90));
        assert_eq!(KeyCode::Char('=').legacy_code(), Some(187));
        assert_eq!(KeyCode::Char('*').legacy_code(), Some(56));
        assert_eq!(KeyCode::Char('é').legacy_code(), None);
    }

    #[test]
    fn test_legacy_codes_numpad() {
        assert_eq!(KeyCode::Numpad0.legacy_code(), Some(96));
        assert_eq!(KeyCode::Numpad9.legacy_code(), Some(105));
        assert_eq!(KeyCode::NumpadAdd.legacy_code(), Some(107));
        assert_eq!(KeyCode::NumpadDecimal.legacy_code(), Some(110));
    }

    #[test]
    fn test_keystroke_char_lowercase() {
        assert_eq!(Keystroke::char('A'), Keystroke::char('a'));
    }

    #[test]
    fn test_key_event_prevent_default() {
        let mut event = KeyEvent::new(Keystroke::key(KeyCode::Down));
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
