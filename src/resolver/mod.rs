//! Resolver related types: the service `Endpoint` and the back-end databases
//! (`ResolverKind`) it can be asked to consult, in order (`ResolverSelection`).

// region:    --- Modules

mod endpoint;
mod resolver_kind;
mod resolver_selection;

pub use endpoint::*;
pub use resolver_kind::*;
pub use resolver_selection::*;

// endregion: --- Modules
