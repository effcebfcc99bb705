//! An error type for themecheck's fallible boundaries.
//!
//! Note what is *not* here: a document failing validation, or text failing to
//! parse as JSON, are ordinary expected outcomes carried by
//! [`Report`](../session/enum.Report.html). Only operations that can actually
//! go wrong for the program itself (disk I/O at the persistence boundary)
//! produce these errors.

use failure::Fail;
use std::io;

/// An enum of possible errors that can emerge from this crate.
#[derive(Debug, Fail)]
pub enum ThemeError {
    /// The persisted document exists but could not be read back.
    #[fail(display = "could not load the persisted document at {}", path)]
    StoreLoad {
        path: String,
        #[fail(cause)]
        cause: io::Error,
    },

    /// The edited document could not be written to disk.
    #[fail(display = "could not save the persisted document at {}", path)]
    StoreSave {
        path: String,
        #[fail(cause)]
        cause: io::Error,
    },
}
