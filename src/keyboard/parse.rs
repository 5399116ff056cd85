//! Parsing keystroke strings like "shift+tab" or "ctrl+c"

use thiserror::Error;

use super::types::{KeyCode, Keystroke, Modifiers};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Parse a key string like "cmd+shift+s" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeyParseError> {
    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in key_str.split('+') {
        if part.is_empty() {
            // "shift++" names the plus key
            if key_str.ends_with("++") && key_part.is_none() {
                key_part = Some(KeyCode::Char('+'));
                continue;
            }
            if key_str == "+" {
                key_part = Some(KeyCode::Char('+'));
                break;
            }
            continue;
        }

        let part_lower = part.to_lowercase();
        match part_lower.as_str() {
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "cmd" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                if key_part.is_some() {
                    return Err(KeyParseError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(part)?);
            }
        }
    }

    let key = key_part
        .ok_or_else(|| KeyParseError::InvalidKey(format!("No key found in: {}", key_str)))?;

    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" => Ok(KeyCode::PageUp),
        "pagedown" => Ok(KeyCode::PageDown),
        "insert" => Ok(KeyCode::Insert),

        "num0" => Ok(KeyCode::Numpad0),
        "num1" => Ok(KeyCode::Numpad1),
        "num2" => Ok(KeyCode::Numpad2),
        "num3" => Ok(KeyCode::Numpad3),
        "num4" => Ok(KeyCode::Numpad4),
        "num5" => Ok(KeyCode::Numpad5),
        "num6" => Ok(KeyCode::Numpad6),
        "num7" => Ok(KeyCode::Numpad7),
        "num8" => Ok(KeyCode::Numpad8),
        "num9" => Ok(KeyCode::Numpad9),
        "numadd" => Ok(KeyCode::NumpadAdd),
        "numsubtract" => Ok(KeyCode::NumpadSubtract),
        "nummultiply" => Ok(KeyCode::NumpadMultiply),
        "numdivide" => Ok(KeyCode::NumpadDivide),
        "numenter" => Ok(KeyCode::NumpadEnter),
        "numdecimal" => Ok(KeyCode::NumpadDecimal),

        s if s.starts_with('f') && s.len() > 1 => s[1..]
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=24).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| KeyParseError::InvalidKey(key.to_string())),

        _ => Err(KeyParseError::InvalidKey(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(parse_key_string("a").unwrap(), Keystroke::char('a'));
        assert_eq!(
            parse_key_string("Enter").unwrap(),
            Keystroke::key(KeyCode::Enter)
        );
        assert_eq!(
            parse_key_string("down").unwrap(),
            Keystroke::key(KeyCode::Down)
        );
        assert_eq!(parse_key_string("F12").unwrap(), Keystroke::key(KeyCode::F(12)));
    }

    #[test]
    fn test_parse_with_modifiers() {
        let stroke = parse_key_string("shift+tab").unwrap();
        assert_eq!(stroke.key, KeyCode::Tab);
        assert!(stroke.mods.shift());

        let stroke = parse_key_string("ctrl+c").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('c'));
        assert!(stroke.mods.ctrl());
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(parse_key_string("+").unwrap().key, KeyCode::Char('+'));
        let stroke = parse_key_string("shift++").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('+'));
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key_string("shift").is_err());
        assert!(parse_key_string("a+b").is_err());
        assert!(parse_key_string("hyper").is_err());
        assert!(parse_key_string("f99").is_err());
    }
}
