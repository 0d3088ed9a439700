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


use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where log output goes, and how verbose it is. Build one with any of the `From`
/// conversions below, and combine them with `+`:
///
/// ```no_run
/// use qgo_dropdown::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let config: TracingConfig = TracingConfig::from(tracing_core::LevelFilter::DEBUG)
///     + TracingConfig::from(DisplayPreference::Stderr);
/// assert!(matches!(config.writer_config, WriterConfig::DisplayAndFile(..)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

/// Never pick [`DisplayPreference::Stdout`] while a prompt is drawing on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level wins. Writers merge as in [`WriterConfig`]'s `+`.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Display and file targets combine. On a collision the `rhs` wins.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision merge.
            (None, wc_rhs) => wc_rhs,
            (wc_lhs, None) => wc_lhs,
            (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

            // Collision.
            (Display(_), Display(dp_rhs)) => Display(dp_rhs),
            (File(_), File(f_rhs)) => File(f_rhs),
            (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
            (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                DisplayAndFile(dp_rhs, f_rhs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_level_defaults_to_file_output() {
        let config = TracingConfig::from(tracing::Level::INFO);
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert_eq!(
            config.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }

    #[test]
    fn test_add_writer_configs() {
        let fname = "log.txt".to_string();
        let none = WriterConfig::None;
        let stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = WriterConfig::Display(DisplayPreference::Stderr);
        let file = WriterConfig::File(fname.clone());
        let stderr_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, fname.clone());
        let stdout_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, fname.clone());

        // No collision merge.
        assert_eq!(none.clone() + none.clone(), none);
        assert_eq!(stdout.clone() + none.clone(), stdout);
        assert_eq!(none.clone() + file.clone(), file);
        assert_eq!(stderr.clone() + file.clone(), stderr_and_file);
        assert_eq!(file.clone() + stderr.clone(), stderr_and_file);

        // Collision (rhs has higher specificity).
        assert_eq!(stdout.clone() + stderr.clone(), stderr);
        assert_eq!(stdout_and_file.clone() + stderr.clone(), stderr_and_file);
        assert_eq!(stdout.clone() + stderr_and_file.clone(), stderr_and_file);
        assert_eq!(
            stdout_and_file.clone() + WriterConfig::File("other.txt".to_string()),
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "other.txt".to_string())
        );
    }

    #[test]
    fn test_add_tracing_configs_keeps_most_verbose_level() {
        let config = TracingConfig::from(LevelFilter::WARN)
            + TracingConfig {
                writer_config: WriterConfig::Display(DisplayPreference::Stderr),
                level_filter: LevelFilter::TRACE,
            };
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert_eq!(
            config.writer_config,
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }
}
