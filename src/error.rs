//! Crate-wide error type and result alias.

use derive_more::{Display, Error};

/// Errors surfaced by the fretboard-kit device abstractions.
///
/// The scan path itself is infallible; errors come from construction
/// (task spawn), settings storage, and text composition.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum Error {
    /// The background scan task could not be spawned.
    #[cfg(not(feature = "host"))]
    #[display("task spawn failed")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// A flash read, write, or erase failed.
    #[cfg(not(feature = "host"))]
    #[display("flash operation failed")]
    Flash(#[error(not(source))] embassy_rp::flash::Error),

    /// Stored settings failed checksum or structural validation.
    #[display("stored settings corrupted")]
    StorageCorrupted,

    /// A settings save could not be read back intact.
    #[display("settings save verification failed")]
    SaveVerifyFailed,

    /// Text did not fit the fixed-capacity display line.
    #[display("text formatting overflowed the display line")]
    FormatError,
}

/// Result alias using the crate [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
