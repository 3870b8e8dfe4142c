//! Destinations for formatted lines.
//!
//! The logger hands each implementation one complete, newline-terminated line per call.
//! Implementations must write it in one piece so lines from concurrent callers never
//! interleave.

mod file;
mod memory;
mod terminal;
mod writer;

pub use file::FileOutput;
pub use memory::MemoryOutput;
pub use terminal::TerminalOutput;
pub use writer::WriterOutput;

/// Shared through `Arc<dyn Output>`, so one sink can back several loggers.
pub trait Output: Send + Sync {
    /// Writes one formatted line, trailing newline included.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, line: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}

impl std::fmt::Debug for dyn Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}
