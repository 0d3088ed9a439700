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

//! Fakes for the terminal, so the event loop can be driven without a tty.

use std::io::{Error, ErrorKind, Result, Write};

use crate::{AsyncInputSource, InputMode, InputSource, KeyPress};

#[derive(Debug, Default)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    #[must_use]
    pub fn new() -> Self { TestStringWriter::default() }

    #[must_use]
    pub fn get_buffer(&self) -> &str { &self.buffer }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let result = std::str::from_utf8(buf);
        match result {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// A writer that always fails, for exercising the render error path.
#[derive(Debug, Default)]
pub struct TestBrokenWriter;

impl Write for TestBrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(Error::new(ErrorKind::BrokenPipe, "output closed"))
    }

    fn flush(&mut self) -> Result<()> {
        Err(Error::new(ErrorKind::BrokenPipe, "output closed"))
    }
}

/// Replays `key_press_vec` in order. Unlike a real terminal it runs out: once every
/// key has been read, it reports [`ErrorKind::UnexpectedEof`], so a test whose keys
/// never reach a terminal state fails instead of hanging.
#[derive(Debug, Default)]
pub struct TestVecKeyPressReader {
    pub key_press_vec: Vec<KeyPress>,
    pub index: usize,
    pub is_open: bool,
    pub open_count: usize,
    pub close_count: usize,
    pub fail_open: bool,
}

impl TestVecKeyPressReader {
    pub fn new(key_press_vec: impl Into<Vec<KeyPress>>) -> Self {
        Self {
            key_press_vec: key_press_vec.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    fn replay_next(&mut self) -> Result<KeyPress> {
        if !self.is_open {
            return Err(Error::new(ErrorKind::NotConnected, "input source is not open"));
        }
        let key_press = self
            .key_press_vec
            .get(self.index)
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::UnexpectedEof, "no more key presses"))?;
        self.index += 1;
        Ok(key_press)
    }
}

impl InputMode for TestVecKeyPressReader {
    fn open(&mut self) -> Result<()> {
        self.open_count += 1;
        if self.fail_open {
            return Err(Error::other("not a tty"));
        }
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.close_count += 1;
        self.is_open = false;
        Ok(())
    }
}

impl InputSource for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> Result<KeyPress> { self.replay_next() }
}

impl AsyncInputSource for TestVecKeyPressReader {
    async fn next_key_press(&mut self) -> Result<KeyPress> {
        tokio::task::yield_now().await;
        self.replay_next()
    }
}
