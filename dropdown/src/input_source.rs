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

//! Where key presses come from.
//!
//! Raw mode is process wide state, so acquiring it is modeled as a grant:
//! [`InputMode::open()`] takes it, [`InputMode::close()`] gives it back. Nobody calls
//! these directly in the event loop; an [`InputSourceGuard`] does, so the terminal is
//! restored on every exit path.

use std::{fmt::{Debug, Formatter},
          future::Future,
          io::{Error, ErrorKind, Result},
          ops::{Deref, DerefMut},
          sync::atomic::{AtomicBool, Ordering}};

use crossterm::{event::EventStream,
                terminal::{disable_raw_mode, enable_raw_mode}};
use futures_util::StreamExt as _;

use crate::KeyPress;

/// Acquire and release exclusive raw (cbreak) terminal input.
pub trait InputMode {
    /// # Errors
    ///
    /// If raw mode can't be acquired, or is already held.
    fn open(&mut self) -> Result<()>;

    /// Restore the prior terminal mode. Calling this when not open is a no-op.
    ///
    /// # Errors
    ///
    /// If the terminal mode could not be restored.
    fn close(&mut self) -> Result<()>;
}

pub trait InputSource: InputMode {
    /// Block the current thread until one key press is available.
    ///
    /// # Errors
    ///
    /// On any I/O error from the underlying device.
    fn read_key_press(&mut self) -> Result<KeyPress>;
}

pub trait AsyncInputSource: InputMode {
    /// Resolve with the next key press. Only one of these is awaited at a time.
    fn next_key_press(&mut self) -> impl Future<Output = Result<KeyPress>>;
}

/// Set while any prompt in this process holds raw mode.
static RAW_MODE_IS_GRANTED: AtomicBool = AtomicBool::new(false);

/// One holder's claim on the process wide raw mode flag.
#[derive(Debug, Default)]
pub struct RawModeGrant {
    is_held: bool,
}

impl RawModeGrant {
    #[must_use]
    pub fn is_held(&self) -> bool { self.is_held }

    /// # Errors
    ///
    /// [`ErrorKind::WouldBlock`] if some other holder (or this one) already has the
    /// grant, otherwise whatever `enable` returns.
    pub fn try_acquire_with(
        &mut self,
        enable: impl FnOnce() -> Result<()>,
    ) -> Result<()> {
        if RAW_MODE_IS_GRANTED
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(Error::new(
                ErrorKind::WouldBlock,
                "raw mode is already held by another prompt",
            ));
        }

        if let Err(error) = enable() {
            RAW_MODE_IS_GRANTED.store(false, Ordering::SeqCst);
            return Err(error);
        }

        self.is_held = true;
        Ok(())
    }

    /// # Errors
    ///
    /// Whatever `disable` returns. The grant is given back regardless.
    pub fn release_with(&mut self, disable: impl FnOnce() -> Result<()>) -> Result<()> {
        if !self.is_held {
            return Ok(());
        }
        self.is_held = false;
        let result = disable();
        RAW_MODE_IS_GRANTED.store(false, Ordering::SeqCst);
        result
    }
}

/// Blocking key reads from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermInputSource {
    grant: RawModeGrant,
}

impl InputMode for CrosstermInputSource {
    fn open(&mut self) -> Result<()> { self.grant.try_acquire_with(enable_raw_mode) }

    fn close(&mut self) -> Result<()> { self.grant.release_with(disable_raw_mode) }
}

impl InputSource for CrosstermInputSource {
    fn read_key_press(&mut self) -> Result<KeyPress> {
        let event = crossterm::event::read()?;
        Ok(KeyPress::from(event))
    }
}

/// Async key reads from the real terminal, via [`EventStream`].
#[derive(Default)]
pub struct CrosstermEventStreamInputSource {
    grant: RawModeGrant,
    maybe_event_stream: Option<EventStream>,
}

impl Debug for CrosstermEventStreamInputSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrosstermEventStreamInputSource")
            .field("grant", &self.grant)
            .field("has_event_stream", &self.maybe_event_stream.is_some())
            .finish()
    }
}

impl InputMode for CrosstermEventStreamInputSource {
    fn open(&mut self) -> Result<()> {
        self.grant.try_acquire_with(enable_raw_mode)?;
        self.maybe_event_stream = Some(EventStream::new());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.maybe_event_stream = None;
        self.grant.release_with(disable_raw_mode)
    }
}

impl AsyncInputSource for CrosstermEventStreamInputSource {
    async fn next_key_press(&mut self) -> Result<KeyPress> {
        let Some(event_stream) = self.maybe_event_stream.as_mut() else {
            return Err(Error::new(ErrorKind::NotConnected, "input source is not open"));
        };
        match event_stream.next().await {
            Some(Ok(event)) => Ok(KeyPress::from(event)),
            Some(Err(error)) => Err(error),
            None => Err(Error::new(ErrorKind::UnexpectedEof, "event stream ended")),
        }
    }
}

/// Holds an open input source. Dropping it closes the source, so raw mode is released
/// on confirmation, cancellation, errors, and panics alike.
#[derive(Debug)]
pub struct InputSourceGuard<'a, I: InputMode> {
    input_source: &'a mut I,
}

impl<'a, I: InputMode> InputSourceGuard<'a, I> {
    /// # Errors
    ///
    /// If [`InputMode::open()`] fails. Nothing needs closing in that case.
    pub fn try_new(input_source: &'a mut I) -> Result<Self> {
        input_source.open()?;
        Ok(Self { input_source })
    }
}

impl<I: InputMode> Deref for InputSourceGuard<'_, I> {
    type Target = I;
    fn deref(&self) -> &Self::Target { self.input_source }
}

impl<I: InputMode> DerefMut for InputSourceGuard<'_, I> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.input_source }
}

impl<I: InputMode> Drop for InputSourceGuard<'_, I> {
    fn drop(&mut self) {
        if let Err(error) = self.input_source.close() {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Could not restore the terminal mode",
                error = ?error
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::TestVecKeyPressReader;

    fn ok() -> Result<()> { Ok(()) }

    #[test]
    #[serial]
    fn test_grant_is_exclusive_across_holders() {
        let mut first = RawModeGrant::default();
        let mut second = RawModeGrant::default();

        first.try_acquire_with(ok).unwrap();
        assert!(first.is_held());

        let error = second.try_acquire_with(ok).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::WouldBlock);
        assert!(!second.is_held());

        first.release_with(ok).unwrap();
        second.try_acquire_with(ok).unwrap();
        second.release_with(ok).unwrap();
    }

    #[test]
    #[serial]
    fn test_grant_is_not_reentrant() {
        let mut grant = RawModeGrant::default();
        grant.try_acquire_with(ok).unwrap();
        assert_eq!(
            grant.try_acquire_with(ok).unwrap_err().kind(),
            ErrorKind::WouldBlock
        );
        grant.release_with(ok).unwrap();
    }

    #[test]
    #[serial]
    fn test_failed_enable_gives_the_grant_back() {
        let mut grant = RawModeGrant::default();
        let error = grant
            .try_acquire_with(|| Err(Error::other("not a tty")))
            .unwrap_err();
        assert_eq!(error.to_string(), "not a tty");
        assert!(!grant.is_held());

        grant.try_acquire_with(ok).unwrap();
        grant.release_with(ok).unwrap();
    }

    #[test]
    #[serial]
    fn test_release_is_idempotent() {
        let mut grant = RawModeGrant::default();
        let mut disable_count = 0;

        grant.try_acquire_with(ok).unwrap();
        grant
            .release_with(|| {
                disable_count += 1;
                Ok(())
            })
            .unwrap();
        grant
            .release_with(|| {
                disable_count += 1;
                Ok(())
            })
            .unwrap();

        assert_eq!(disable_count, 1);
    }

    #[test]
    #[serial]
    fn test_failed_disable_still_gives_the_grant_back() {
        let mut grant = RawModeGrant::default();
        grant.try_acquire_with(ok).unwrap();
        assert!(grant.release_with(|| Err(Error::other("boom"))).is_err());
        assert!(!grant.is_held());

        let mut other = RawModeGrant::default();
        other.try_acquire_with(ok).unwrap();
        other.release_with(ok).unwrap();
    }

    #[test]
    fn test_guard_closes_on_drop() {
        let mut reader = TestVecKeyPressReader::new([KeyPress::Enter]);
        {
            let mut guard = InputSourceGuard::try_new(&mut reader).unwrap();
            assert_eq!(guard.read_key_press().unwrap(), KeyPress::Enter);
        }
        assert_eq!(reader.open_count, 1);
        assert_eq!(reader.close_count, 1);
        assert!(!reader.is_open);
    }

    #[test]
    fn test_guard_is_not_created_when_open_fails() {
        let mut reader = TestVecKeyPressReader::new([KeyPress::Enter]).with_failing_open();
        assert!(InputSourceGuard::try_new(&mut reader).is_err());
        assert_eq!(reader.close_count, 0);
    }
}
