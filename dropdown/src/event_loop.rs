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

use std::io::Write;

use crate::{AsyncInputSource,
            FunctionComponent,
            InputSource,
            InputSourceGuard,
            KeyPress,
            SelectError,
            SelectResult,
            DEVELOPMENT_MODE};

/// What a key press did to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult {
    /// Still navigating. Redraw and read the next key.
    Continue,
    /// Confirmed. Values are in original list order.
    ExitWithResult(Vec<String>),
    /// Cancelled.
    ExitWithoutResult,
}

/// Acquire `input_source`, then render, read one key, and apply `on_keypress` until a
/// terminal state is reached.
///
/// The input source is closed, and the cursor shown again, on every way out of here.
///
/// # Errors
///
/// - [`SelectError::InputUnavailable`] if the input source can't be opened. No loop.
/// - [`SelectError::ReadFailure`] if a key can't be read.
/// - [`SelectError::WriteFailure`] if the component can't draw.
/// - [`SelectError::Cancelled`] if `on_keypress` returns
///   [`EventLoopResult::ExitWithoutResult`].
pub fn enter_event_loop<W: Write, S>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult,
    input_source: &mut impl InputSource,
) -> SelectResult<Vec<String>> {
    let mut guard =
        InputSourceGuard::try_new(input_source).map_err(SelectError::InputUnavailable)?;

    function_component
        .hide_cursor()
        .map_err(SelectError::WriteFailure)?;

    let return_this: SelectResult<Vec<String>> = loop {
        if let Err(error) = function_component.render(state) {
            break Err(SelectError::WriteFailure(error));
        }

        let key_press = match guard.read_key_press() {
            Ok(it) => it,
            Err(error) => break Err(SelectError::ReadFailure(error)),
        };

        if let Some(result) = handle_event_loop_result(on_keypress(state, key_press)) {
            break result;
        }
    };

    run_after_event_loop(function_component, return_this)
}

/// The same as [`enter_event_loop()`], but awaits each key. One key is fully handled,
/// including the redraw, before the next one is awaited.
///
/// # Errors
///
/// See [`enter_event_loop()`].
pub async fn enter_event_loop_async<W: Write, S>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult,
    input_source: &mut impl AsyncInputSource,
) -> SelectResult<Vec<String>> {
    let mut guard =
        InputSourceGuard::try_new(input_source).map_err(SelectError::InputUnavailable)?;

    function_component
        .hide_cursor()
        .map_err(SelectError::WriteFailure)?;

    let return_this: SelectResult<Vec<String>> = loop {
        if let Err(error) = function_component.render(state) {
            break Err(SelectError::WriteFailure(error));
        }

        let key_press = match guard.next_key_press().await {
            Ok(it) => it,
            Err(error) => break Err(SelectError::ReadFailure(error)),
        };

        if let Some(result) = handle_event_loop_result(on_keypress(state, key_press)) {
            break result;
        }
    };

    run_after_event_loop(function_component, return_this)
}

fn handle_event_loop_result(
    result: EventLoopResult,
) -> Option<SelectResult<Vec<String>>> {
    match result {
        EventLoopResult::Continue => None,
        EventLoopResult::ExitWithResult(it) => Some(Ok(it)),
        EventLoopResult::ExitWithoutResult => Some(Err(SelectError::Cancelled)),
    }
}

/// The guard is still alive here; it closes the input source when the caller's frame
/// ends. An error from the loop wins over an error showing the cursor.
fn run_after_event_loop<W: Write, S>(
    function_component: &mut impl FunctionComponent<W, S>,
    return_this: SelectResult<Vec<String>>,
) -> SelectResult<Vec<String>> {
    let result_show_cursor = function_component.show_cursor();

    DEVELOPMENT_MODE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Exit event loop",
            result = ?return_this
        );
    });

    let chosen = return_this?;
    result_show_cursor.map_err(SelectError::WriteFailure)?;
    Ok(chosen)
}
