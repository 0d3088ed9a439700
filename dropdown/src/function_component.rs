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

use crossterm::{cursor::{Hide, Show},
                execute};

/// Something that can draw state `S` onto a [`Write`]r. Every call to
/// [`FunctionComponent::render()`] repaints the whole screen.
pub trait FunctionComponent<W: Write, S> {
    fn get_write(&mut self) -> &mut W;

    /// # Errors
    ///
    /// If writing to [`FunctionComponent::get_write()`] fails.
    fn render(&mut self, state: &S) -> Result<()>;

    /// # Errors
    ///
    /// If writing to [`FunctionComponent::get_write()`] fails.
    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.get_write(), Hide)
    }

    /// # Errors
    ///
    /// If writing to [`FunctionComponent::get_write()`] fails.
    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.get_write(), Show)
    }
}
