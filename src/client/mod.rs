//! The client module: the `Client` and how to build and configure it.

// region:    --- Modules

mod builder;
mod client_impl;
mod client_types;
mod config;

pub use builder::*;
pub use client_types::*;
pub use config::*;

// endregion: --- Modules
