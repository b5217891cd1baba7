use crate::resolver::{DEFAULT_RESOLVERS, ResolverKind};
use crate::{Error, Result};
use std::collections::HashSet;

/// Ordered, non-empty, duplicate-free list of resolvers.
///
/// The order is the priority in which the service tries each database.
/// Can only be built from the default or through `from_names`, so a selection is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSelection {
	kinds: Vec<ResolverKind>,
}

/// Constructors
impl ResolverSelection {
	/// Validate caller supplied resolver names.
	///
	/// Checks, in this order, each one stopping at the first failure:
	/// - every name is one of `simbad`, `ned`, `vizier` (case-insensitive), otherwise lists all offenders
	/// - the list is not empty
	/// - no name is given twice (case-insensitive)
	pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
		let mut kinds = Vec::with_capacity(names.len());
		let mut unsupported = Vec::new();
		for name in names {
			let name = name.as_ref();
			match ResolverKind::from_name(name) {
				Some(kind) => kinds.push(kind),
				None => unsupported.push(name.to_string()),
			}
		}

		if !unsupported.is_empty() {
			return Err(Error::UnsupportedResolvers { names: unsupported });
		}

		if kinds.is_empty() {
			return Err(Error::NoResolver);
		}

		let mut seen = HashSet::with_capacity(kinds.len());
		for kind in &kinds {
			if !seen.insert(*kind) {
				return Err(Error::DuplicateResolver {
					name: kind.as_lower_str().to_string(),
				});
			}
		}

		Ok(Self { kinds })
	}
}

impl Default for ResolverSelection {
	fn default() -> Self {
		Self {
			kinds: DEFAULT_RESOLVERS.to_vec(),
		}
	}
}

/// Getters
impl ResolverSelection {
	pub fn kinds(&self) -> &[ResolverKind] {
		&self.kinds
	}

	/// The code letters in selection order (e.g. `"SNV"`).
	pub fn codes(&self) -> String {
		self.kinds.iter().map(ResolverKind::code).collect()
	}
}

// region:    --- Tests


// endregion: --- Tests
