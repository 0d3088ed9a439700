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

use std::collections::BTreeSet;

use clap::ValueEnum;

use crate::{SelectError, SelectOption, SelectResult};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default, Hash,
)]
pub enum SelectionMode {
    /// Select only one option from list.
    #[default]
    Single,
    /// Select multiple options from list.
    Multiple,
}

/// Lives for exactly one invocation. Only [`crate::keypress_handler()`] mutates it.
///
/// The only way to make one is [`State::new()`], which refuses an empty list, so every
/// read of the focused row is in bounds.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct State<'a> {
    pub header: String,
    /// Never empty.
    pub(crate) items: &'a [SelectOption],
    /// Always in `0..items.len()`.
    pub(crate) cursor: usize,
    /// Indices into `items`. Independent of `cursor`. Iterates in list order.
    pub(crate) selected: BTreeSet<usize>,
    pub selection_mode: SelectionMode,
}

impl<'a> State<'a> {
    /// # Errors
    ///
    /// [`SelectError::EmptyOptions`] if `items` is empty.
    pub fn new(
        header: impl Into<String>,
        items: &'a [SelectOption],
        selection_mode: SelectionMode,
    ) -> SelectResult<Self> {
        if items.is_empty() {
            return Err(SelectError::EmptyOptions);
        }
        Ok(Self {
            header: header.into(),
            items,
            cursor: 0,
            selected: BTreeSet::new(),
            selection_mode,
        })
    }

    #[must_use]
    pub fn items(&self) -> &'a [SelectOption] { self.items }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<usize> { &self.selected }

    /// Start with the cursor somewhere other than the first row. Out of range indices
    /// wrap, so the cursor invariant holds.
    #[must_use]
    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor % self.items.len();
        self
    }

    pub fn move_up(&mut self) {
        let n = self.items.len();
        self.cursor = (self.cursor + n - 1) % n;
    }

    pub fn move_down(&mut self) { self.cursor = (self.cursor + 1) % self.items.len(); }

    /// Flip membership of the focused row in the selection.
    pub fn toggle_focused(&mut self) {
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    #[must_use]
    pub fn is_focused(&self, index: usize) -> bool { self.cursor == index }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool { self.selected.contains(&index) }

    #[must_use]
    pub fn focused_value(&self) -> &str { &self.items[self.cursor].value }

    /// Selected values in original list order, not toggle order.
    #[must_use]
    pub fn selected_values(&self) -> Vec<String> {
        self.selected
            .iter()
            .map(|&index| self.items[index].value.clone())
            .collect()
    }
}
