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

use std::io::{Result, Write};

use crossterm::{cursor::{MoveTo, MoveToNextLine},
                queue,
                style::Print,
                terminal::{Clear, ClearType}};

use crate::{FunctionComponent,
            SelectionMode,
            State,
            Theme,
            DEVELOPMENT_MODE,
            MULTI_SELECT_HELP};

#[derive(Debug)]
pub struct SelectComponent<W: Write> {
    pub write: W,
    pub theme: Theme,
}

impl<'a, W: Write> FunctionComponent<W, State<'a>> for SelectComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    /// Clear the screen, home the cursor, and print every line. There is no diffing
    /// against the previous frame.
    fn render(&mut self, state: &State<'a>) -> Result<()> {
        let lines = render_lines(state, &self.theme);

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "render()",
                cursor = ?state.cursor,
                selected = ?state.selected,
                line_count = ?lines.len()
            );
        });

        let writer = self.get_write();

        queue! {
            writer,
            Clear(ClearType::All),
            MoveTo(0, 0),
        }?;

        // Raw mode turns off the implicit carriage return after a line feed.
        for line in lines {
            queue! {
                writer,
                Print(line),
                MoveToNextLine(1),
            }?;
        }

        writer.flush()?;

        Ok(())
    }
}

/// The plain text of one frame: prompt, blank line, optional help, then one row per
/// option.
#[must_use]
pub fn render_lines(state: &State<'_>, theme: &Theme) -> Vec<String> {
    let (focused_prefix, unfocused_prefix) = theme.padded_prefixes();

    let mut lines = vec![state.header.clone(), String::new()];

    if state.selection_mode == SelectionMode::Multiple && theme.show_help {
        lines.push(MULTI_SELECT_HELP.to_string());
        lines.push(String::new());
    }

    for (index, item) in state.items.iter().enumerate() {
        let is_focused = state.is_focused(index);
        let prefix = if is_focused {
            &focused_prefix
        } else {
            &unfocused_prefix
        };

        let row = match state.selection_mode {
            SelectionMode::Single => format!("{prefix}{}", item.label),
            SelectionMode::Multiple => {
                let indicator = if state.is_selected(index) {
                    &theme.checked
                } else {
                    &theme.unchecked
                };
                // Case shift the indicator too, so focus shows even where the prefix
                // is blank.
                let indicator = if is_focused {
                    indicator.to_uppercase()
                } else {
                    indicator.clone()
                };
                format!("{prefix}{indicator} {}", item.label)
            }
        };

        lines.push(row);
    }

    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{SelectOption, TestBrokenWriter, TestStringWriter};

    fn items() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "One"),
            SelectOption::new("2", "Two"),
            SelectOption::new("3", "Three"),
        ]
    }

    #[test]
    fn test_single_select_lines() {
        let items = items();
        let state = State::new("Pick a connection", &items, SelectionMode::Single)
            .unwrap()
            .with_cursor(1);

        assert_eq!(
            render_lines(&state, &Theme::default()),
            vec!["Pick a connection", "", "  One", "> Two", "  Three"]
        );
    }

    #[test]
    fn test_multi_select_lines() {
        let items = items();
        let mut state =
            State::new("Delete rows", &items, SelectionMode::Multiple).unwrap();
        state.selected.insert(0);
        state.selected.insert(2);
        state.cursor = 2;

        assert_eq!(
            render_lines(&state, &Theme::default()),
            vec![
                "Delete rows",
                "",
                MULTI_SELECT_HELP,
                "",
                "  [x] One",
                "  [ ] Two",
                "> [X] Three",
            ]
        );
    }

    #[test]
    fn test_multi_select_lines_without_help() {
        let items = items();
        let state = State::new("Delete rows", &items, SelectionMode::Multiple).unwrap();
        let theme = Theme {
            show_help: false,
            ..Theme::default()
        };

        assert_eq!(
            render_lines(&state, &theme),
            vec!["Delete rows", "", "> [ ] One", "  [ ] Two", "  [ ] Three"]
        );
    }

    #[test]
    fn test_render_clears_and_homes_before_drawing() {
        let items = items();
        let state = State::new("Pick", &items, SelectionMode::Single).unwrap();
        let mut component = SelectComponent {
            write: TestStringWriter::new(),
            theme: Theme::default(),
        };

        component.render(&state).unwrap();

        let output = component.write.get_buffer();
        assert!(output.starts_with("\u{1b}[2J\u{1b}[1;1H"));
        assert_eq!(
            output,
            "\u{1b}[2J\u{1b}[1;1H\
             Pick\u{1b}[1E\
             \u{1b}[1E\
             > One\u{1b}[1E\
             \u{20} Two\u{1b}[1E\
             \u{20} Three\u{1b}[1E"
        );
    }

    #[test]
    fn test_every_render_is_a_full_redraw() {
        let items = items();
        let mut state = State::new("Pick", &items, SelectionMode::Single).unwrap();
        let mut component = SelectComponent {
            write: TestStringWriter::new(),
            theme: Theme::default(),
        };

        component.render(&state).unwrap();
        state.move_down();
        component.render(&state).unwrap();

        let output = component.write.get_buffer();
        assert_eq!(output.matches("\u{1b}[2J\u{1b}[1;1H").count(), 2);
        assert_eq!(output.matches("Three").count(), 2);
    }

    #[test]
    fn test_render_reports_write_errors() {
        let items = items();
        let state = State::new("Pick", &items, SelectionMode::Single).unwrap();
        let mut component = SelectComponent {
            write: TestBrokenWriter,
            theme: Theme::default(),
        };

        assert!(component.render(&state).is_err());
    }
}
