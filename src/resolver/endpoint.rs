use std::sync::Arc;

/// Public CDS (Strasbourg) Sesame service.
pub const SESAME_CDS_URL: &str = "https://cds.unistra.fr/cgi-bin/nph-sesame";

/// CfA (Harvard) mirror of the Sesame service.
pub const SESAME_CFA_MIRROR_URL: &str = "https://vizier.cfa.harvard.edu/viz-bin/nph-sesame";

/// A construct to store the base URL of the name-resolution service.
/// It is designed to be efficiently clonable.
///
/// No validation is done on the URL. A malformed one only shows up as a failed web call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

impl Default for Endpoint {
	fn default() -> Self {
		Self::from_static(SESAME_CDS_URL)
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}
}

// region:    --- Froms

impl From<&'static str> for Endpoint {
	fn from(url: &'static str) -> Self {
		Self::from_static(url)
	}
}

impl From<String> for Endpoint {
	fn from(url: String) -> Self {
		Self::from_owned(url)
	}
}

// endregion: --- Froms

// region:    --- Tests


// endregion: --- Tests
