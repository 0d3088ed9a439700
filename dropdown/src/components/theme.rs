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

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr as _;

pub const FOCUSED_PREFIX: &str = "> ";
pub const UNFOCUSED_PREFIX: &str = "  ";
pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";
pub const MULTI_SELECT_HELP: &str =
    "Use arrow keys to navigate, space to select/deselect, enter to confirm, q to quit";

/// The glyphs used to draw rows. Plain text only, no colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub focused_prefix: String,
    pub unfocused_prefix: String,
    pub checked: String,
    pub unchecked: String,
    /// Show the key binding hint above multi select lists.
    pub show_help: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused_prefix: FOCUSED_PREFIX.to_string(),
            unfocused_prefix: UNFOCUSED_PREFIX.to_string(),
            checked: CHECKED.to_string(),
            unchecked: UNCHECKED.to_string(),
            show_help: true,
        }
    }
}

impl Theme {
    /// The focused and unfocused prefixes, right padded to the same display width so
    /// labels line up. Wide glyphs (CJK, emoji) take two columns.
    #[must_use]
    pub fn padded_prefixes(&self) -> (String, String) {
        let width = self
            .focused_prefix
            .width()
            .max(self.unfocused_prefix.width());
        (
            pad_to_display_width(&self.focused_prefix, width),
            pad_to_display_width(&self.unfocused_prefix, width),
        )
    }
}

fn pad_to_display_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}
