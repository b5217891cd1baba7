use crate::ClientConfig;
use crate::client::ClientBuilder;
use crate::resolver::Endpoint;
use crate::webc::WebClient;
use std::sync::{Arc, RwLock};

/// Sesame name resolution client.
///
/// Cheap to clone. Clones share the same endpoint setting, so `set_endpoint` on one is seen by all.
#[derive(Debug, Clone)]
pub struct Client {
	pub(super) inner: Arc<ClientInner>,
}

// region:    --- Client Constructors

impl Default for Client {
	fn default() -> Self {
		Client::builder().build()
	}
}

impl Client {
	/// Create a new `ClientBuilder` for `Client`.
	/// This is just another way to use `ClientBuilder::default()`.
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	pub(crate) fn new(web_client: WebClient, config: ClientConfig) -> Self {
		let inner = ClientInner {
			web_client,
			endpoint: RwLock::new(config.endpoint),
		};
		Client { inner: Arc::new(inner) }
	}
}

// endregion: --- Client Constructors

// region:    --- Client Endpoint

impl Client {
	/// Replace the service base URL for every later resolution (on this client and its clones).
	///
	/// No validation. Resolutions already issued keep the URL they were built with.
	pub fn set_endpoint(&self, endpoint: impl Into<Endpoint>) {
		let endpoint = endpoint.into();
		tracing::debug!("Sesame endpoint set to {}", endpoint.base_url());
		// The lock only guards a plain assignment, so a poisoned lock still holds a valid value.
		let mut guard = self.inner.endpoint.write().unwrap_or_else(|poisoned| poisoned.into_inner());
		*guard = endpoint;
	}

	/// The endpoint the next resolution will use.
	pub fn endpoint(&self) -> Endpoint {
		self.inner.endpoint.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
	}
}

// endregion: --- Client Endpoint

// region:    --- ClientInner

#[derive(Debug)]
pub(super) struct ClientInner {
	pub(super) web_client: WebClient,

	pub(super) endpoint: RwLock<Endpoint>,
}

// endregion: --- ClientInner
