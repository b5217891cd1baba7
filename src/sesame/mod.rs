//! The Sesame protocol: request URL (`/-ox/{codes}?{name}`), XML reply, and the
//! `Resolution` extracted from it.

// region:    --- Modules

mod position;
mod sesame_reply;
mod sesame_request;

pub use position::*;
pub use sesame_reply::*;
pub use sesame_request::*;

// endregion: --- Modules
