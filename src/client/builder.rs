use crate::ClientConfig;
use crate::client::Client;
use crate::resolver::Endpoint;
use crate::webc::WebClient;

/// The builder for the `Client` structure.
///
/// - `ClientBuilder::default()`
/// - `Client::builder()`
#[derive(Debug, Default)]
pub struct ClientBuilder {
	web_client: Option<WebClient>,

	config: Option<ClientConfig>,
}

/// Builder methods
impl ClientBuilder {
	/// Create a new `ClientBuilder` with a custom `reqwest::Client`.
	///
	/// This is where timeouts, proxies or a user agent are configured; the resolver itself sets none.
	#[must_use]
	pub fn with_reqwest(mut self, reqwest_client: reqwest::Client) -> Self {
		self.web_client = Some(WebClient::from_reqwest_client(reqwest_client));
		self
	}

	/// With a client configuration.
	#[must_use]
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = Some(config);
		self
	}

	/// Set the initial service endpoint (keeps the rest of the config).
	#[must_use]
	pub fn with_endpoint(mut self, endpoint: impl Into<Endpoint>) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_endpoint(endpoint));
		self
	}
}

/// Build() method
impl ClientBuilder {
	pub fn build(self) -> Client {
		let web_client = self.web_client.unwrap_or_default();
		let config = self.config.unwrap_or_default();
		Client::new(web_client, config)
	}
}
