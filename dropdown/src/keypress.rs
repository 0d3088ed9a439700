/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key event, classified into exactly one of the gestures the selection state
/// machine understands. Everything else is [`KeyPress::Noop`].
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyPress {
    Up,
    Down,
    Enter,
    Esc,
    Space,
    Character(char),
    #[default]
    Noop,
}

impl KeyPress {
    /// `q` and `Q` quit the prompt, just like [`KeyPress::Esc`].
    #[must_use]
    pub fn is_quit_character(&self) -> bool {
        matches!(self, KeyPress::Character('q' | 'Q'))
    }
}

/// [`KeyEvent::kind`] only set if:
/// - Unix: [`crossterm::event::KeyboardEnhancementFlags::REPORT_EVENT_TYPES`] has been
///   enabled with [`crossterm::event::PushKeyboardEnhancementFlags`].
/// - Windows: always. So key releases have to be dropped here, otherwise every key
///   would be processed twice.
impl From<Event> for KeyPress {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key_event) => KeyPress::from(key_event),
            // Resize, focus, paste, and mouse events.
            _ => KeyPress::Noop,
        }
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(key_event: KeyEvent) -> Self {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = key_event;

        if kind == KeyEventKind::Release {
            return KeyPress::Noop;
        }

        match code {
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            KeyCode::Enter => KeyPress::Enter,
            KeyCode::Esc => KeyPress::Esc,
            // Raw mode swallows SIGINT, so Ctrl + c has to bail out like Esc.
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                KeyPress::Esc
            }
            KeyCode::Char(_) if modifiers.contains(KeyModifiers::CONTROL) => {
                KeyPress::Noop
            }
            KeyCode::Char(' ') => KeyPress::Space,
            KeyCode::Char(character) => KeyPress::Character(character),
            _ => KeyPress::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test_case(KeyCode::Up, KeyPress::Up)]
    #[test_case(KeyCode::Down, KeyPress::Down)]
    #[test_case(KeyCode::Enter, KeyPress::Enter)]
    #[test_case(KeyCode::Esc, KeyPress::Esc)]
    #[test_case(KeyCode::Char(' '), KeyPress::Space)]
    #[test_case(KeyCode::Char('q'), KeyPress::Character('q'))]
    #[test_case(KeyCode::Char('Z'), KeyPress::Character('Z'))]
    #[test_case(KeyCode::Left, KeyPress::Noop)]
    #[test_case(KeyCode::Tab, KeyPress::Noop)]
    #[test_case(KeyCode::F(1), KeyPress::Noop)]
    fn test_classify_plain_key(code: KeyCode, expected: KeyPress) {
        assert_eq!(KeyPress::from(press(code, KeyModifiers::NONE)), expected);
    }

    #[test]
    fn test_shifted_character_is_still_a_character() {
        assert_eq!(
            KeyPress::from(press(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            KeyPress::Character('Q')
        );
    }

    #[test]
    fn test_ctrl_c_cancels_and_other_ctrl_chords_are_ignored() {
        assert_eq!(
            KeyPress::from(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyPress::Esc
        );
        assert_eq!(
            KeyPress::from(press(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            KeyPress::Noop
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(KeyPress::from(release), KeyPress::Noop);
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        assert_eq!(KeyPress::from(Event::Resize(80, 24)), KeyPress::Noop);
        assert_eq!(KeyPress::from(Event::FocusGained), KeyPress::Noop);
        assert_eq!(
            KeyPress::from(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })),
            KeyPress::Noop
        );
    }

    #[test]
    fn test_is_quit_character() {
        assert!(KeyPress::Character('q').is_quit_character());
        assert!(KeyPress::Character('Q').is_quit_character());
        assert!(!KeyPress::Character('w').is_quit_character());
        assert!(!KeyPress::Esc.is_quit_character());
    }
}
