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

use std::io::{stdout, Write};

use crate::{enter_event_loop,
            enter_event_loop_async,
            AsyncInputSource,
            CrosstermEventStreamInputSource,
            CrosstermInputSource,
            EventLoopResult,
            InputSource,
            KeyPress,
            SelectComponent,
            SelectError,
            SelectOption,
            SelectResult,
            SelectionMode,
            State,
            Theme,
            DEVELOPMENT_MODE};

pub const CONFIRM_YES: &str = "yes";
pub const CONFIRM_NO: &str = "no";

/// Show `prompt` and `options`, and block until the user picks exactly one option.
/// Returns its value.
///
/// Draws on stdout, reads keys from the terminal in raw mode, and uses the [`Theme`]
/// from the user's config folder.
///
/// # Errors
///
/// See [`SelectError`]. [`SelectError::EmptyOptions`] is returned before the terminal
/// is touched.
pub fn select(
    prompt: impl Into<String>,
    options: &[SelectOption],
) -> SelectResult<String> {
    select_with(
        prompt,
        options,
        (&mut stdout(), &mut CrosstermInputSource::default()),
        &Theme::load(),
    )
}

/// Show `prompt` and `options`, and block until the user confirms a set of zero or
/// more options. Returns their values in the order they appear in `options`.
///
/// # Errors
///
/// See [`select()`].
pub fn multi_select(
    prompt: impl Into<String>,
    options: &[SelectOption],
) -> SelectResult<Vec<String>> {
    multi_select_with(
        prompt,
        options,
        (&mut stdout(), &mut CrosstermInputSource::default()),
        &Theme::load(),
    )
}

/// Ask a yes / no question. The cursor starts on "No", and cancelling also means no.
///
/// # Errors
///
/// Any [`SelectError`] except [`SelectError::Cancelled`].
pub fn confirm(message: impl Into<String>) -> SelectResult<bool> {
    confirm_with(
        message,
        (&mut stdout(), &mut CrosstermInputSource::default()),
        &Theme::load(),
    )
}

/// [`select()`] with the output, the key source, and the theme supplied by the caller.
///
/// # Errors
///
/// See [`select()`].
pub fn select_with(
    prompt: impl Into<String>,
    options: &[SelectOption],
    io: (&mut impl Write, &mut impl InputSource),
    theme: &Theme,
) -> SelectResult<String> {
    let (output, input_source) = io;
    let state = State::new(prompt, options, SelectionMode::Single)?;
    run_select(state, output, input_source, theme).and_then(into_single_value)
}

/// [`multi_select()`] with the output, the key source, and the theme supplied by the
/// caller.
///
/// # Errors
///
/// See [`select()`].
pub fn multi_select_with(
    prompt: impl Into<String>,
    options: &[SelectOption],
    io: (&mut impl Write, &mut impl InputSource),
    theme: &Theme,
) -> SelectResult<Vec<String>> {
    let (output, input_source) = io;
    let state = State::new(prompt, options, SelectionMode::Multiple)?;
    run_select(state, output, input_source, theme)
}

/// [`confirm()`] with the output, the key source, and the theme supplied by the caller.
///
/// # Errors
///
/// See [`confirm()`].
pub fn confirm_with(
    message: impl Into<String>,
    io: (&mut impl Write, &mut impl InputSource),
    theme: &Theme,
) -> SelectResult<bool> {
    let (output, input_source) = io;
    let options = confirm_options();
    let state = State::new(message, &options, SelectionMode::Single)?.with_cursor(1);
    let result = run_select(state, output, input_source, theme).and_then(into_single_value);
    into_confirmation(result)
}

/// The non blocking version of [`select()`]. Keys come from a
/// [`crossterm::event::EventStream`].
///
/// # Errors
///
/// See [`select()`].
pub async fn select_async(
    prompt: impl Into<String>,
    options: &[SelectOption],
) -> SelectResult<String> {
    select_async_with(
        prompt,
        options,
        (&mut stdout(), &mut CrosstermEventStreamInputSource::default()),
        &Theme::load(),
    )
    .await
}

/// The non blocking version of [`multi_select()`].
///
/// # Errors
///
/// See [`select()`].
pub async fn multi_select_async(
    prompt: impl Into<String>,
    options: &[SelectOption],
) -> SelectResult<Vec<String>> {
    multi_select_async_with(
        prompt,
        options,
        (&mut stdout(), &mut CrosstermEventStreamInputSource::default()),
        &Theme::load(),
    )
    .await
}

/// The non blocking version of [`confirm()`].
///
/// # Errors
///
/// See [`confirm()`].
pub async fn confirm_async(message: impl Into<String>) -> SelectResult<bool> {
    confirm_async_with(
        message,
        (&mut stdout(), &mut CrosstermEventStreamInputSource::default()),
        &Theme::load(),
    )
    .await
}

/// # Errors
///
/// See [`select()`].
pub async fn select_async_with(
    prompt: impl Into<String>,
    options: &[SelectOption],
    io: (&mut impl Write, &mut impl AsyncInputSource),
    theme: &Theme,
) -> SelectResult<String> {
    let (output, input_source) = io;
    let state = State::new(prompt, options, SelectionMode::Single)?;
    run_select_async(state, output, input_source, theme)
        .await
        .and_then(into_single_value)
}

/// # Errors
///
/// See [`select()`].
pub async fn multi_select_async_with(
    prompt: impl Into<String>,
    options: &[SelectOption],
    io: (&mut impl Write, &mut impl AsyncInputSource),
    theme: &Theme,
) -> SelectResult<Vec<String>> {
    let (output, input_source) = io;
    let state = State::new(prompt, options, SelectionMode::Multiple)?;
    run_select_async(state, output, input_source, theme).await
}

/// # Errors
///
/// See [`confirm()`].
pub async fn confirm_async_with(
    message: impl Into<String>,
    io: (&mut impl Write, &mut impl AsyncInputSource),
    theme: &Theme,
) -> SelectResult<bool> {
    let (output, input_source) = io;
    let options = confirm_options();
    let state = State::new(message, &options, SelectionMode::Single)?.with_cursor(1);
    let result = run_select_async(state, output, input_source, theme)
        .await
        .and_then(into_single_value);
    into_confirmation(result)
}

fn run_select<W: Write>(
    mut state: State<'_>,
    output: W,
    input_source: &mut impl InputSource,
    theme: &Theme,
) -> SelectResult<Vec<String>> {
    let mut function_component = SelectComponent {
        write: output,
        theme: theme.clone(),
    };

    enter_event_loop(
        &mut state,
        &mut function_component,
        keypress_handler,
        input_source,
    )
}

async fn run_select_async<W: Write>(
    mut state: State<'_>,
    output: W,
    input_source: &mut impl AsyncInputSource,
    theme: &Theme,
) -> SelectResult<Vec<String>> {
    let mut function_component = SelectComponent {
        write: output,
        theme: theme.clone(),
    };

    enter_event_loop_async(
        &mut state,
        &mut function_component,
        keypress_handler,
        input_source,
    )
    .await
}

fn confirm_options() -> [SelectOption; 2] {
    [
        SelectOption::new(CONFIRM_YES, "Yes"),
        SelectOption::new(CONFIRM_NO, "No"),
    ]
}

/// Single select always confirms with exactly one value.
fn into_single_value(values: Vec<String>) -> SelectResult<String> {
    values.into_iter().next().ok_or(SelectError::EmptyOptions)
}

fn into_confirmation(result: SelectResult<String>) -> SelectResult<bool> {
    match result {
        Ok(value) => Ok(value == CONFIRM_YES),
        Err(SelectError::Cancelled) => Ok(false),
        Err(error) => Err(error),
    }
}

/// The one transition function for both selection modes.
pub fn keypress_handler(state: &mut State<'_>, key_press: KeyPress) -> EventLoopResult {
    DEVELOPMENT_MODE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "*before* keypress",
            key_press = ?key_press,
            cursor = ?state.cursor,
            selected = ?state.selected
        );
    });

    let selection_mode = state.selection_mode;

    let return_it = match key_press {
        // Up.
        KeyPress::Up => {
            state.move_up();
            EventLoopResult::Continue
        }

        // Down.
        KeyPress::Down => {
            state.move_down();
            EventLoopResult::Continue
        }

        // Enter on multi-select. An empty selection is still a confirmation.
        KeyPress::Enter if selection_mode == SelectionMode::Multiple => {
            EventLoopResult::ExitWithResult(state.selected_values())
        }

        // Enter.
        KeyPress::Enter => {
            EventLoopResult::ExitWithResult(vec![state.focused_value().to_string()])
        }

        // Escape, Ctrl + c, q, or Q.
        KeyPress::Esc => EventLoopResult::ExitWithoutResult,
        it if it.is_quit_character() => EventLoopResult::ExitWithoutResult,

        // Space on multi-select.
        KeyPress::Space if selection_mode == SelectionMode::Multiple => {
            state.toggle_focused();
            EventLoopResult::Continue
        }

        // Noop, default behavior on Space.
        KeyPress::Space | KeyPress::Character(_) | KeyPress::Noop => {
            EventLoopResult::Continue
        }
    };

    DEVELOPMENT_MODE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "*after* keypress",
            cursor = ?state.cursor,
            selected = ?state.selected,
            return_it = ?return_it
        );
    });

    return_it
}
