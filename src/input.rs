/*
 *  input.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Input events and the console key mapping
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

/// What the buttons/encoder can tell the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Next,
    Previous,
    Select,
    Back,
    /// Encoder detents on a value, positive is up
    Adjust(i16),
}

/// Map one console line to an event.
///
/// `n`/`j`/`right`, `p`/`k`/`left`, `s`/`enter`/empty line, `b`/`q`/`back`,
/// and `+`/`-` optionally followed by an amount (`+10`, `- 5`).
pub fn parse_key(line: &str) -> Option<InputEvent> {
    let key = line.trim();
    match key.to_ascii_lowercase().as_str() {
        "" | "s" | "enter" | "select" => return Some(InputEvent::Select),
        "n" | "j" | "right" | "next" => return Some(InputEvent::Next),
        "p" | "k" | "left" | "prev" => return Some(InputEvent::Previous),
        "b" | "q" | "back" | "esc" => return Some(InputEvent::Back),
        _ => {}
    }

    let (sign, rest) = match key.chars().next()? {
        '+' => (1i16, &key[1..]),
        '-' => (-1i16, &key[1..]),
        _ => return None,
    };
    let rest = rest.trim();
    let amount = if rest.is_empty() { 1 } else { rest.parse::<i16>().ok()? };
    Some(InputEvent::Adjust(sign.saturating_mul(amount)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert_eq!(parse_key("n"), Some(InputEvent::Next));
        assert_eq!(parse_key(" RIGHT \n"), Some(InputEvent::Next));
        assert_eq!(parse_key("k"), Some(InputEvent::Previous));
        assert_eq!(parse_key(""), Some(InputEvent::Select));
        assert_eq!(parse_key("q"), Some(InputEvent::Back));
    }

    #[test]
    fn test_adjust_amounts() {
        assert_eq!(parse_key("+"), Some(InputEvent::Adjust(1)));
        assert_eq!(parse_key("-"), Some(InputEvent::Adjust(-1)));
        assert_eq!(parse_key("+10"), Some(InputEvent::Adjust(10)));
        assert_eq!(parse_key("- 5"), Some(InputEvent::Adjust(-5)));
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(parse_key("x"), None);
        assert_eq!(parse_key("+ten"), None);
    }
}
