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

use std::{fmt::{Display, Formatter, Result},
          fs,
          path::{Path, PathBuf}};

use dirs::config_dir;

use crate::{Theme, DEVELOPMENT_MODE};

#[derive(Debug, Clone, Copy)]
pub enum ConfigPaths {
    QgoTopLevelFolderName,
    DropdownThemeFile,
}

impl Display for ConfigPaths {
    /// This generates a `to_string()` method used by [`try_get_theme_file_path`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::QgoTopLevelFolderName => "qgo",
            ConfigPaths::DropdownThemeFile => "dropdown.json",
        };
        write!(f, "{path}")
    }
}

/// This is where the config folder is.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::QgoTopLevelFolderName.to_string()))
}

/// This is where the theme file is.
#[must_use]
pub fn try_get_theme_file_path() -> Option<PathBuf> {
    try_get_config_folder_path()
        .map(|it| it.join(ConfigPaths::DropdownThemeFile.to_string()))
}

pub mod config_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum ConfigErrorCouldNot {
        #[error("📑 Could not read theme file: '{path}'")]
        #[diagnostic(code(qgo_dropdown::config::read))]
        ReadThemeFile {
            path: String,
            #[source]
            source: std::io::Error,
        },

        #[error("🔍 Could not parse theme file: '{path}'")]
        #[diagnostic(
            code(qgo_dropdown::config::parse),
            help("The file must be a JSON object, eg: {{ \"focused_prefix\": \"> \" }}")
        )]
        ParseThemeFile {
            path: String,
            #[source]
            source: serde_json::Error,
        },
    }
}
pub use config_error::ConfigErrorCouldNot;

impl Theme {
    /// # Errors
    ///
    /// If the file can't be read, or isn't valid JSON for a [`Theme`].
    pub fn try_load_from(path: &Path) -> std::result::Result<Self, ConfigErrorCouldNot> {
        let content =
            fs::read_to_string(path).map_err(|source| ConfigErrorCouldNot::ReadThemeFile {
                path: path.display().to_string(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| {
            ConfigErrorCouldNot::ParseThemeFile {
                path: path.display().to_string(),
                source,
            }
        })
    }

    /// Load the theme from `path` if it exists. A missing or broken file never stops a
    /// prompt from being shown, so this falls back to [`Theme::default()`].
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            DEVELOPMENT_MODE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "No theme file, using defaults.",
                    path = ?path
                );
            });
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(theme) => theme,
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Could not load theme file, using defaults.",
                    error = ?error
                );
                Self::default()
            }
        }
    }

    /// Load the theme from the user's config folder.
    #[must_use]
    pub fn load() -> Self {
        match try_get_theme_file_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                // % is Display, ? is Debug.
                tracing::debug!(message = "Could not access config folder.");
                Self::default()
            }
        }
    }
}
