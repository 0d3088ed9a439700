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

/// Everything that can end a [`crate::select()`] or [`crate::multi_select()`] call
/// without a value.
///
/// | Variant              | When                                           | Hard failure |
/// | -------------------- | ---------------------------------------------- | ------------ |
/// | [`EmptyOptions`]     | No options passed, nothing was acquired        | Yes          |
/// | [`InputUnavailable`] | Raw mode could not be acquired                 | Yes          |
/// | [`ReadFailure`]      | Reading a key failed mid loop                  | Yes          |
/// | [`WriteFailure`]     | Drawing the prompt failed mid loop             | Yes          |
/// | [`Cancelled`]        | User pressed `Esc`, `Ctrl + c`, `q`, or `Q`    | No           |
///
/// The terminal is always restored before any of these reach the caller.
///
/// [`EmptyOptions`]: Self::EmptyOptions
/// [`InputUnavailable`]: Self::InputUnavailable
/// [`ReadFailure`]: Self::ReadFailure
/// [`WriteFailure`]: Self::WriteFailure
/// [`Cancelled`]: Self::Cancelled
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SelectError {
    #[error("No options were provided to choose from")]
    #[diagnostic(
        code(qgo_dropdown::empty_options),
        help("Pass at least one option")
    )]
    EmptyOptions,

    #[error("Could not put the terminal into raw mode")]
    #[diagnostic(
        code(qgo_dropdown::input_unavailable),
        help(
            "Make sure this is running in an interactive terminal, and that no other \
             prompt is active in this process"
        )
    )]
    InputUnavailable(#[source] std::io::Error),

    #[error("Could not read a key press from the terminal")]
    #[diagnostic(code(qgo_dropdown::read_failure))]
    ReadFailure(#[source] std::io::Error),

    #[error("Could not draw the prompt to the terminal")]
    #[diagnostic(code(qgo_dropdown::write_failure))]
    WriteFailure(#[source] std::io::Error),

    #[error("Selection cancelled")]
    #[diagnostic(code(qgo_dropdown::cancelled))]
    Cancelled,
}

impl SelectError {
    /// Cancellation is a normal "go back" outcome, not a crash.
    #[must_use]
    pub fn is_cancelled(&self) -> bool { matches!(self, SelectError::Cancelled) }
}

pub type SelectResult<T> = Result<T, SelectError>;
