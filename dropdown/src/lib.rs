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


//! # qgo_dropdown
//!
//! Arrow key driven selection prompts for a terminal. A prompt shows a list of options,
//! lets the user move a cursor through them, and returns the value of the option (or
//! options) they confirm.
//!
//! This crate can be used in two ways:
//! 1. As a library, via [`select()`], [`multi_select()`], and [`confirm()`] (and their
//!    `_async` versions).
//! 1. As a binary. The binary target is called `qgo-pick`.
//!
//! ## How to use it as a library?
//!
//! ```no_run
//! use qgo_dropdown::{select, multi_select, SelectError, SelectOption};
//!
//! fn main() -> miette::Result<()> {
//!     let connections = [
//!         SelectOption::new("pg-local", "postgres @ localhost"),
//!         SelectOption::new("pg-staging", "postgres @ staging"),
//!     ];
//!
//!     match select("Pick a connection", &connections) {
//!         Ok(value) => println!("Connecting to {value}"),
//!         // The user backed out. Not a failure.
//!         Err(SelectError::Cancelled) => return Ok(()),
//!         Err(error) => return Err(error.into()),
//!     }
//!
//!     let tables = ["users", "orders", "invoices"].map(SelectOption::from);
//!     let chosen = multi_select("Tables to export", &tables)?;
//!     println!("{chosen:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Keys
//!
//! | Key                            | Single select           | Multi select          |
//! | ------------------------------ | ----------------------- | --------------------- |
//! | `Up` / `Down`                  | Move, wrapping around   | Move, wrapping around |
//! | `Space`                        | Nothing                 | Toggle focused option |
//! | `Enter`                        | Confirm focused option  | Confirm the selection |
//! | `Esc`, `Ctrl + c`, `q`, `Q`    | Cancel                  | Cancel                |
//!
//! Multi select confirms in list order, and an empty selection is a valid answer.
//!
//! ### Terminal handling
//!
//! The terminal is put in raw mode only for the duration of one prompt, and is always
//! restored before the call returns, no matter how it ends. Every key press redraws the
//! whole screen. Only one prompt can hold the terminal at a time; a second concurrent
//! call fails with [`SelectError::InputUnavailable`].
//!
//! ### Testing
//!
//! Every operation has a `_with` variant that takes the output [`std::io::Write`]r and
//! the key source. The [`test_utils`] module has fakes for both.
//!
//! ## How to use it as a binary?
//!
//! ```text
//! qgo-pick select --prompt "Environment?" dev staging=Staging prod=Production
//! printf 'a\tAlpha\nb\tBeta\n' | qgo-pick multi-select
//! qgo-pick confirm --prompt "Connect to another database?"
//! ```
//!
//! Chosen values are printed one per line. Cancelling exits with status 1.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod components;
pub mod config_folder;
pub mod error;
pub mod event_loop;
pub mod function_component;
pub mod input_source;
pub mod keypress;
pub mod log_support;
pub mod public_api;
pub mod select_option;
pub mod state;
pub mod term;
pub mod test_utils;

// Re-export.
pub use components::*;
pub use config_folder::*;
pub use error::*;
pub use event_loop::*;
pub use function_component::*;
pub use input_source::*;
pub use keypress::*;
pub use log_support::*;
pub use public_api::*;
pub use select_option::*;
pub use state::*;
pub use term::*;
pub use test_utils::*;

/// Enable verbose tracing of every transition and render.
pub const DEVELOPMENT_MODE: bool = false;
