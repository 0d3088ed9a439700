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

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// A file appender that never rolls over, so every run appends to `path_str`.
///
/// # Errors
///
/// If `path_str` has no parent folder or no file name, or if the file can't be created
/// or opened for appending.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = file_name.to_str().ok_or_else(|| {
        miette::miette!("Log file name {} is not valid UTF-8.", path.display())
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_file_name_is_an_error() {
        assert!(try_create("/").is_err());
    }

    #[test]
    fn test_unwritable_folder_is_an_error() {
        assert!(try_create("/proc/no_such_dir/log.txt").is_err());
    }

    #[test]
    fn test_creates_the_file_with_the_exact_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("qgo.log");

        let appender = try_create(path.to_str().unwrap());

        assert!(appender.is_ok());
        assert!(path.exists());
    }
}
