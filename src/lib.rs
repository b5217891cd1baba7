//! Astronomical object name resolution against a Sesame-style service.
//!
//! A `Client` turns an object name (e.g. `"M31"`) into a J2000 `Position` by asking
//! the remote service to consult Simbad, NED and/or VizieR, in the caller's order.
//!
//! ```no_run
//! # async fn run() -> sesame::Result<()> {
//! use sesame::{Client, ResolverKind};
//!
//! let client = Client::default();
//! let res = client.resolve_with("M 31", &[ResolverKind::Simbad, ResolverKind::Ned]).await?;
//! if let Some(pos) = res.position() {
//! 	println!("ra: {} dec: {}", pos.ra, pos.dec);
//! }
//! # Ok(())
//! # }
//! ```

// region:    --- Modules

mod client;
mod error;

// -- Flatten
pub use client::*;
pub use error::{Error, Result};
pub use resolver::{Endpoint, ResolverKind};
pub use sesame::{Position, Resolution};

// -- Public Modules
pub mod resolver;
pub mod sesame;

// -- Private Modules
mod webc;

// endregion: --- Modules
