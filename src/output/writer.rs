//! Adapter for arbitrary `io::Write` sinks (sockets, pipes, buffers owned elsewhere).

use super::Output;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Serializes writes to the wrapped writer behind a mutex.
#[derive(Debug)]
pub struct WriterOutput<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush()?;
        Ok(())
    }
}
