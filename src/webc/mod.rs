//! The `webc` module is the web client layer: one GET, whole body as text.
//! It is private to the crate; its error surfaces through `crate::Error`.

// region:    --- Modules

mod error;
mod web_client;

pub(crate) use error::{Error, Result};
pub(crate) use web_client::*;

// endregion: --- Modules
