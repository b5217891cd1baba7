use crate::resolver::Endpoint;

/// Initial configuration of a `Client`.
#[derive(Debug, Default, Clone)]
pub struct ClientConfig {
	pub(crate) endpoint: Endpoint,
}

/// Chainable setters
impl ClientConfig {
	/// Set the base URL of the Sesame service (default: `SESAME_CDS_URL`).
	#[must_use]
	pub fn with_endpoint(mut self, endpoint: impl Into<Endpoint>) -> Self {
		self.endpoint = endpoint.into();
		self
	}
}

/// Getters
impl ClientConfig {
	pub fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}
}
