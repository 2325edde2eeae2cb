//! Error types for the folio CLI.

use thiserror::Error;

use super::*;

/// Error type alias used for the CLI.
pub type Result<T> = core::result::Result<T, FolioCliError>;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum FolioCliError {
  /// An error from the [`folio`] library.
  #[error(transparent)]
  Folio(#[from] FolioError),

  /// A terminal prompt failed.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Writing to the terminal failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
