use derive_more::Display;
use serde::{Deserialize, Serialize};

/// `ResolverKind` is an enum of the astronomical databases the Sesame service can consult.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ResolverKind {
	/// SIMBAD (CDS, Strasbourg)
	Simbad,
	/// NASA/IPAC Extragalactic Database
	#[display("NED")]
	Ned,
	/// VizieR catalogue service (CDS)
	VizieR,
}

/// The order used when the caller does not give one.
pub const DEFAULT_RESOLVERS: &[ResolverKind] = &[ResolverKind::Simbad, ResolverKind::Ned, ResolverKind::VizieR];

/// Serialization implementations
impl ResolverKind {
	/// Serialize to a static str
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Simbad => "Simbad",
			Self::Ned => "NED",
			Self::VizieR => "VizieR",
		}
	}

	/// Serialize to a static str
	#[must_use]
	pub const fn as_lower_str(&self) -> &'static str {
		match self {
			Self::Simbad => "simbad",
			Self::Ned => "ned",
			Self::VizieR => "vizier",
		}
	}

	/// The single letter used in the Sesame URL (`/-ox/SNV`).
	#[must_use]
	pub const fn code(&self) -> char {
		match self {
			Self::Simbad => 'S',
			Self::Ned => 'N',
			Self::VizieR => 'V',
		}
	}
}

/// Parsing
impl ResolverKind {
	/// Case-insensitive match against `simbad`, `ned`, `vizier`.
	/// Returns None for anything else (no trimming is done).
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		match name.to_lowercase().as_str() {
			"simbad" => Some(Self::Simbad),
			"ned" => Some(Self::Ned),
			"vizier" => Some(Self::VizieR),
			_ => None,
		}
	}

	/// Reverse of `code()`. Sesame replies tag each resolver entry with it (e.g. `S=Simbad (via url)`).
	#[must_use]
	pub const fn from_code(code: char) -> Option<Self> {
		match code {
			'S' => Some(Self::Simbad),
			'N' => Some(Self::Ned),
			'V' => Some(Self::VizieR),
			_ => None,
		}
	}
}

/// Allows `&[ResolverKind]` wherever resolver names are accepted.
impl AsRef<str> for ResolverKind {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolver_kind_from_name_case_insensitive() {
		assert_eq!(ResolverKind::from_name("sImbAD"), Some(ResolverKind::Simbad));
		assert_eq!(ResolverKind::from_name("NED"), Some(ResolverKind::Ned));
		assert_eq!(ResolverKind::from_name("VIZIEr"), Some(ResolverKind::VizieR));
		assert_eq!(ResolverKind::from_name("vizier "), None);
		assert_eq!(ResolverKind::from_name("sesame"), None);
	}

	#[test]
	fn test_resolver_kind_code_roundtrip() {
		for kind in DEFAULT_RESOLVERS {
			assert_eq!(ResolverKind::from_code(kind.code()), Some(*kind));
		}
		assert_eq!(ResolverKind::from_code('X'), None);
	}

	#[test]
	fn test_resolver_kind_display() {
		assert_eq!(ResolverKind::Ned.to_string(), "NED");
		assert_eq!(ResolverKind::VizieR.to_string(), "VizieR");
	}
}

// endregion: --- Tests
